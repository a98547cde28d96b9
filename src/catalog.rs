// Copyright 2025 Cowboy AI, LLC.

//! Read-only catalog seams consumed by the resolver
//!
//! The resolver never talks to a data store directly. Hosts inject
//! implementations of [`BreedCatalog`] and [`CustomBreedStore`]; tests use
//! [`InMemoryBreedCatalog`].

use crate::breed::BreedProfile;
use crate::custom_breed::CustomBreedDefinition;
use crate::errors::{BreedError, BreedResult};
use crate::identifiers::{BreedId, CustomBreedId};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Store of canonical breed records
#[async_trait]
pub trait BreedCatalog: Send + Sync {
    /// Fetch a breed; fails with [`BreedError::EntityNotFound`] when absent
    async fn get_breed(&self, id: &BreedId) -> BreedResult<BreedProfile>;
}

/// Store of user-authored composite breed definitions
#[async_trait]
pub trait CustomBreedStore: Send + Sync {
    /// Fetch a definition; fails with [`BreedError::EntityNotFound`] when absent
    async fn get_custom_breed(&self, id: &CustomBreedId) -> BreedResult<CustomBreedDefinition>;
}

#[async_trait]
impl<T: BreedCatalog + ?Sized> BreedCatalog for Arc<T> {
    async fn get_breed(&self, id: &BreedId) -> BreedResult<BreedProfile> {
        (**self).get_breed(id).await
    }
}

#[async_trait]
impl<T: CustomBreedStore + ?Sized> CustomBreedStore for Arc<T> {
    async fn get_custom_breed(&self, id: &CustomBreedId) -> BreedResult<CustomBreedDefinition> {
        (**self).get_custom_breed(id).await
    }
}

/// In-memory catalog holding both canonical breeds and custom definitions
///
/// Cloning shares the underlying storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBreedCatalog {
    breeds: Arc<RwLock<IndexMap<BreedId, BreedProfile>>>,
    custom_breeds: Arc<RwLock<IndexMap<CustomBreedId, CustomBreedDefinition>>>,
}

impl InMemoryBreedCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a canonical breed
    pub fn insert_breed(&self, breed: BreedProfile) {
        self.breeds
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(breed.id, breed);
    }

    /// Insert or replace a custom definition
    pub fn insert_custom_breed(&self, definition: CustomBreedDefinition) {
        self.custom_breeds
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(definition.id, definition);
    }

    /// Remove a canonical breed, returning it if present
    pub fn remove_breed(&self, id: &BreedId) -> Option<BreedProfile> {
        self.breeds
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .shift_remove(id)
    }

    /// All canonical breeds in insertion order
    pub fn list_breeds(&self) -> Vec<BreedProfile> {
        self.breeds
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect()
    }

    /// All custom definitions in insertion order
    pub fn list_custom_breeds(&self) -> Vec<CustomBreedDefinition> {
        self.custom_breeds
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect()
    }
}

#[async_trait]
impl BreedCatalog for InMemoryBreedCatalog {
    async fn get_breed(&self, id: &BreedId) -> BreedResult<BreedProfile> {
        self.breeds
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
            .ok_or_else(|| BreedError::breed_not_found(id))
    }
}

#[async_trait]
impl CustomBreedStore for InMemoryBreedCatalog {
    async fn get_custom_breed(&self, id: &CustomBreedId) -> BreedResult<CustomBreedDefinition> {
        self.custom_breeds
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
            .ok_or_else(|| BreedError::custom_breed_not_found(id))
    }
}

// Copyright 2025 Cowboy AI, LLC.

//! Identifier types for canonical and custom breeds

use crate::errors::BreedError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! breed_identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            Serialize,
            Deserialize,
            JsonSchema,
        )]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Create from a UUID
            pub fn from_uuid(id: Uuid) -> Self {
                Self(id)
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = BreedError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self).map_err(|e| {
                    BreedError::validation(format!(
                        "invalid {} '{}': {}",
                        stringify!($name),
                        s,
                        e
                    ))
                })
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }
    };
}

breed_identifier!(
    /// Identifier of a catalogued (canonical) breed
    BreedId
);

breed_identifier!(
    /// Identifier of a user-authored composite breed definition
    CustomBreedId
);

/// A dog's breed reference after applying the precedence rule
///
/// A dog may carry both a canonical and a custom breed id. The canonical id
/// always wins; a reference with neither id resolves to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", content = "id", rename_all = "camelCase")]
pub enum BreedReference {
    /// A catalogued breed
    Canonical(BreedId),
    /// A composite breed built from parent breeds
    Custom(CustomBreedId),
}

impl BreedReference {
    /// Build a reference from the two optional ids a dog record carries
    ///
    /// # Examples
    ///
    /// ```rust
    /// use breed_resolution::{BreedId, BreedReference, CustomBreedId};
    ///
    /// let breed = BreedId::new();
    /// let custom = CustomBreedId::new();
    ///
    /// assert_eq!(
    ///     BreedReference::from_ids(Some(breed), Some(custom)),
    ///     Some(BreedReference::Canonical(breed))
    /// );
    /// assert_eq!(BreedReference::from_ids(None, None), None);
    /// ```
    pub fn from_ids(
        breed_id: Option<BreedId>,
        custom_breed_id: Option<CustomBreedId>,
    ) -> Option<Self> {
        match (breed_id, custom_breed_id) {
            (Some(id), _) => Some(BreedReference::Canonical(id)),
            (None, Some(id)) => Some(BreedReference::Custom(id)),
            (None, None) => None,
        }
    }

    /// Whether this reference points at a composite breed
    pub fn is_custom(&self) -> bool {
        matches!(self, BreedReference::Custom(_))
    }

    /// The underlying UUID regardless of kind
    pub fn as_uuid(&self) -> &Uuid {
        match self {
            BreedReference::Canonical(id) => id.as_uuid(),
            BreedReference::Custom(id) => id.as_uuid(),
        }
    }
}

impl fmt::Display for BreedReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreedReference::Canonical(id) => write!(f, "breed:{id}"),
            BreedReference::Custom(id) => write!(f, "custom:{id}"),
        }
    }
}

/// Memoization key for a resolution request
///
/// Two requests that select the same resolution path share a key, so
/// `(Some(b), Some(c))` and `(Some(b), None)` are the same request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolutionKey(Option<BreedReference>);

impl ResolutionKey {
    /// Key for the given optional ids
    pub fn new(breed_id: Option<&BreedId>, custom_breed_id: Option<&CustomBreedId>) -> Self {
        Self(BreedReference::from_ids(
            breed_id.copied(),
            custom_breed_id.copied(),
        ))
    }

    /// The normalised reference, if any
    pub fn reference(&self) -> Option<&BreedReference> {
        self.0.as_ref()
    }
}

impl From<BreedReference> for ResolutionKey {
    fn from(reference: BreedReference) -> Self {
        Self(Some(reference))
    }
}

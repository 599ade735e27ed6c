//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different ID types,
//! e.g., passing a CategoryId where a ProductId is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(
            Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(CategoryId);

/// Deserialization shim for product ids that may be numbers or strings.
#[derive(Debug, Clone)]
pub(crate) struct LooseProductId(pub(crate) ProductId);

// Catalog data files carry numeric product ids; accept both forms.
impl<'de> Deserialize<'de> for LooseProductId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(u64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => LooseProductId(ProductId::new(s)),
            Raw::Number(n) => LooseProductId(ProductId::new(n.to_string())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("prod-123");
        assert_eq!(id.as_str(), "prod-123");
    }

    #[test]
    fn test_id_from_string() {
        let id: ProductId = "prod-456".into();
        assert_eq!(id.as_str(), "prod-456");
    }

    #[test]
    fn test_id_display() {
        let id = CategoryId::new("oils");
        assert_eq!(format!("{}", id), "oils");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = CategoryId::new("natural-foods");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"natural-foods\"");
    }

    #[test]
    fn test_loose_id_accepts_numbers() {
        let id: LooseProductId = serde_json::from_str("7").unwrap();
        assert_eq!(id.0, ProductId::new("7"));

        let id: LooseProductId = serde_json::from_str("\"sku-7\"").unwrap();
        assert_eq!(id.0, ProductId::new("sku-7"));
    }
}

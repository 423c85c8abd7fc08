//! Order identifiers
//!
//! Every operation that addresses a single order by a caller-supplied
//! identifier goes through [`validate_id`] first. The resulting [`OrderId`]
//! is the only identifier type the service and storage layers accept, so a
//! malformed identifier cannot reach storage.
//!
//! ```rust
//! use rental_service::ids::validate_id;
//!
//! let id = validate_id("6F9619FF-8B86-D011-B42D-00C04FC964FF").unwrap();
//! assert_eq!(id.to_string(), "6f9619ff-8b86-d011-b42d-00c04fc964ff");
//!
//! assert!(validate_id("not-a-uuid").is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Length of the canonical hyphenated form (8-4-4-4-12).
const CANONICAL_LEN: usize = 36;

/// Identifier of a rental order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(Uuid);

impl OrderId {
    /// Generate a fresh, time-sortable identifier for a new order.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl From<Uuid> for OrderId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for OrderId {
    type Err = InvalidId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_id(s)
    }
}

/// A caller-supplied identifier that is not a canonical UUID.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid UUID '{value}': {reason}")]
pub struct InvalidId {
    /// The rejected input.
    pub value: String,
    /// Why it was rejected.
    pub reason: String,
}

/// Validate that `id` is a UUID in canonical hyphenated form.
///
/// Hex digits may be any case. The braced, URN and simple (unhyphenated)
/// encodings are rejected.
pub fn validate_id(id: &str) -> Result<OrderId, InvalidId> {
    if id.len() != CANONICAL_LEN {
        return Err(InvalidId {
            value: id.to_string(),
            reason: format!("expected {} characters, found {}", CANONICAL_LEN, id.len()),
        });
    }

    Uuid::try_parse(id).map(OrderId).map_err(|e| InvalidId {
        value: id.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_lowercase() {
        let id = validate_id("936a2b39-54b2-4d27-9d52-ae1c4ae4b1a3").unwrap();
        assert_eq!(id.to_string(), "936a2b39-54b2-4d27-9d52-ae1c4ae4b1a3");
    }

    #[test]
    fn test_validate_uppercase_and_mixed_case() {
        assert!(validate_id("936A2B39-54B2-4D27-9D52-AE1C4AE4B1A3").is_ok());
        assert!(validate_id("936a2B39-54b2-4D27-9d52-Ae1c4ae4B1a3").is_ok());
    }

    #[test]
    fn test_validate_nil_uuid() {
        assert!(validate_id("00000000-0000-0000-0000-000000000000").is_ok());
    }

    #[test]
    fn test_rejects_malformed() {
        for input in [
            "",
            "not-a-uuid",
            "936a2b39-54b2-4d27-9d52-ae1c4ae4b1a",
            "936a2b39-54b2-4d27-9d52-ae1c4ae4b1a3f",
            "936a2b39x54b2-4d27-9d52-ae1c4ae4b1a3",
            "936a2b39-54b2-4d27-9d52-ae1c4ae4b1g3",
            " 936a2b39-54b2-4d27-9d52-ae1c4ae4b1a3",
        ] {
            let err = validate_id(input).unwrap_err();
            assert_eq!(err.value, input);
        }
    }

    #[test]
    fn test_rejects_non_canonical_encodings() {
        assert!(validate_id("936a2b3954b24d279d52ae1c4ae4b1a3").is_err());
        assert!(validate_id("{936a2b39-54b2-4d27-9d52-ae1c4ae4b1a3}").is_err());
        assert!(validate_id("urn:uuid:936a2b39-54b2-4d27-9d52-ae1c4ae4b1a3").is_err());
    }

    #[test]
    fn test_from_str_delegates_to_validator() {
        let parsed: OrderId = "936a2b39-54b2-4d27-9d52-ae1c4ae4b1a3".parse().unwrap();
        assert_eq!(parsed, validate_id("936a2b39-54b2-4d27-9d52-ae1c4ae4b1a3").unwrap());
        assert!("nope".parse::<OrderId>().is_err());
    }

    #[test]
    fn test_new_ids_are_unique_and_valid() {
        let a = OrderId::new();
        let b = OrderId::new();
        assert_ne!(a, b);
        assert!(validate_id(&a.to_string()).is_ok());
    }

    #[test]
    fn test_serde_transparent() {
        let id = validate_id("936a2b39-54b2-4d27-9d52-ae1c4ae4b1a3").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"936a2b39-54b2-4d27-9d52-ae1c4ae4b1a3\"");
    }
}

//! Typed ID wrapper for catalog records.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{self, Display};

/// A strongly-typed wrapper for product IDs.
///
/// The backend owns the identifier format. Some backends send ids as JSON
/// strings, others as integers; both deserialize into the same textual form,
/// which is what goes into request paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Creates a product ID from any textual identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<u64> for ProductId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => Self(s),
            RawId::Signed(n) => Self(n.to_string()),
            RawId::Unsigned(n) => Self(n.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_display() {
        let id = ProductId::new("abc-123");
        assert_eq!(id.to_string(), "abc-123");
        assert_eq!(id.as_str(), "abc-123");
    }

    #[test]
    fn test_product_id_accepts_string_and_number() {
        let from_text: ProductId = serde_json::from_str(r#""42""#).unwrap();
        let from_number: ProductId = serde_json::from_str("42").unwrap();
        assert_eq!(from_text, from_number);
        assert_eq!(from_number, ProductId::from(42u64));
    }

    #[test]
    fn test_product_id_serializes_as_string() {
        let json = serde_json::to_string(&ProductId::from(7u64)).unwrap();
        assert_eq!(json, r#""7""#);
    }

    #[test]
    fn test_product_id_rejects_objects() {
        assert!(serde_json::from_str::<ProductId>(r#"{"id":1}"#).is_err());
    }
}

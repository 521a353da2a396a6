use serde::{Deserialize, Serialize};

/// Unified ID type used consistently across the API and storage layers
///
/// Ids come from two places: seeded records carry small integer-like ids
/// ("1", "2") and created records carry randomly generated hex tokens. A
/// string newtype keeps both addressable through the same lookups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApiId(pub String);

impl ApiId {
    /// Create from an integer ID
    pub fn from_i32(id: i32) -> Self {
        Self(id.to_string())
    }

    /// Create from a string
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get as string (always available)
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Try to parse as integer (for seeded ids)
    pub fn as_i32(&self) -> Option<i32> {
        self.0.parse().ok()
    }
}

impl std::fmt::Display for ApiId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for ApiId {
    fn from(id: i32) -> Self {
        Self::from_i32(id)
    }
}

impl From<String> for ApiId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ApiId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_ids_round_trip() {
        let id = ApiId::from_i32(42);
        assert_eq!(id.as_str(), "42");
        assert_eq!(id.as_i32(), Some(42));
    }

    #[test]
    fn hex_ids_are_not_integers() {
        let id = ApiId::from_string("d1c07e9f6a35b2c480aa");
        assert_eq!(id.as_i32(), None);
        assert_eq!(id.to_string(), "d1c07e9f6a35b2c480aa");
    }

    #[test]
    fn equality_is_textual() {
        assert_eq!(ApiId::from_i32(1), ApiId::from("1"));
        assert_ne!(ApiId::from_i32(1), ApiId::from("01"));
    }
}

//! Typed ID wrappers for domain entities.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use uuid::Uuid;

/// A strongly-typed wrapper for weather record IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(transparent)]
pub struct WeatherId(pub Uuid);

impl WeatherId {
    /// Creates a new random weather record ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Creates a weather record ID from a UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parses a weather record ID from a string.
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for WeatherId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for WeatherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for WeatherId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<WeatherId> for Uuid {
    fn from(id: WeatherId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_id_creation() {
        let id1 = WeatherId::new();
        let id2 = WeatherId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_weather_id_parsing() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id = WeatherId::parse(uuid_str).unwrap();
        assert_eq!(id.to_string(), uuid_str);
    }

    #[test]
    fn test_weather_id_parse_rejects_garbage() {
        assert!(WeatherId::parse("not-a-uuid").is_err());
    }
}

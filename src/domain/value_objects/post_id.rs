use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a news post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostId(Uuid);

impl PostId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for PostId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PostId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_id_new_creates_unique_ids() {
        let id1 = PostId::new();
        let id2 = PostId::new();

        assert_ne!(id1, id2, "New PostIds should be unique");
    }

    #[test]
    fn test_post_id_round_trip() {
        let uuid = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
        let post_id = PostId::from_uuid(uuid);

        assert_eq!(post_id.to_string(), "550e8400-e29b-41d4-a716-446655440000");
        assert_eq!(*post_id.as_uuid(), uuid);
    }

    #[test]
    fn test_post_id_from_str_invalid() {
        assert!("not-a-uuid".parse::<PostId>().is_err());
    }
}

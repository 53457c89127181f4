//! Signed-in user record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The record held by the session slot
///
/// Serialized as camelCase JSON so a slot written by one process can be read
/// by any other frontend sharing the data directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Avatar URL generated from the email seed
    pub fn avatar_for(email: &str) -> String {
        format!("https://api.dicebear.com/7.x/avataaars/svg?seed={}", email)
    }

    /// First character of the display name, used by the sidebar badge
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> User {
        let now = DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        User {
            id: "1".to_string(),
            email: "marie@example.com".to_string(),
            name: "marie".to_string(),
            avatar: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_serializes_camel_case_without_avatar() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"updatedAt\""));
        assert!(!json.contains("avatar"));
    }

    #[test]
    fn test_parses_record_with_avatar() {
        let json = r#"{"id":"42","email":"a@b.fr","name":"a","avatar":"x.svg",
            "createdAt":"2024-01-15T10:30:00Z","updatedAt":"2024-01-15T10:30:00.000Z"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "42");
        assert_eq!(user.avatar.as_deref(), Some("x.svg"));
    }

    #[test]
    fn test_initial() {
        assert_eq!(sample().initial(), Some('m'));
        let mut empty = sample();
        empty.name.clear();
        assert_eq!(empty.initial(), None);
    }

    #[test]
    fn test_avatar_seed() {
        assert!(User::avatar_for("a@b.fr").ends_with("seed=a@b.fr"));
    }
}

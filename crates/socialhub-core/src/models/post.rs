//! Posts, scheduled posts and the dashboard's post summaries

use super::account::SocialPlatform;
use crate::error::CoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle label of a post (display only, nothing transitions)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Scheduled,
    Published,
    Failed,
}

impl PostStatus {
    /// Badge text
    pub fn label(&self) -> &'static str {
        match self {
            PostStatus::Draft => "Brouillon",
            PostStatus::Scheduled => "Programmé",
            PostStatus::Published => "Publié",
            PostStatus::Failed => "Échec",
        }
    }

    /// Plural label used by the status filter
    pub fn plural_label(&self) -> &'static str {
        match self {
            PostStatus::Draft => "Brouillons",
            PostStatus::Scheduled => "Programmés",
            PostStatus::Published => "Publiés",
            PostStatus::Failed => "Échecs",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Scheduled => "scheduled",
            PostStatus::Published => "published",
            PostStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "draft" => Ok(PostStatus::Draft),
            "scheduled" => Ok(PostStatus::Scheduled),
            "published" => Ok(PostStatus::Published),
            "failed" => Ok(PostStatus::Failed),
            _ => Err(CoreError::UnknownPostStatus {
                value: s.to_string(),
            }),
        }
    }
}

/// A post as listed on the posts page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub content: String,
    pub status: PostStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    pub platforms: Vec<SocialPlatform>,
    pub media_count: u32,
    pub reach: u64,
    pub engagements: u64,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
}

impl Post {
    /// Engagement counters are only meaningful once published
    pub fn shows_analytics(&self) -> bool {
        self.status == PostStatus::Published
    }

    /// "1 média" / "3 médias", nothing for text-only posts
    pub fn media_label(&self) -> Option<String> {
        media_label(self.media_count)
    }
}

/// A post on the schedule page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledPost {
    pub id: String,
    pub content: String,
    pub scheduled_at: DateTime<Utc>,
    pub platforms: Vec<SocialPlatform>,
    pub status: PostStatus,
    pub media_count: u32,
}

impl ScheduledPost {
    pub fn media_label(&self) -> Option<String> {
        media_label(self.media_count)
    }
}

/// Dashboard "recent posts" row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentPost {
    pub id: u32,
    pub content: String,
    pub platform: SocialPlatform,
    pub reach: u64,
    pub engagements: u64,
    pub scheduled_at: DateTime<Utc>,
}

/// Dashboard "upcoming posts" row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingPost {
    pub id: u32,
    pub content: String,
    pub scheduled_at: DateTime<Utc>,
    pub platforms: Vec<SocialPlatform>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Gif,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaDimensions {
    pub width: u32,
    pub height: u32,
}

/// Attached media (declared, not rendered)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaFile {
    pub id: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<MediaDimensions>,
}

/// Per-post analytics (declared, not rendered)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostAnalytics {
    pub impressions: u64,
    pub reach: u64,
    pub engagements: u64,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub clicks: u64,
}

fn media_label(count: u32) -> Option<String> {
    match count {
        0 => None,
        1 => Some("1 média".to_string()),
        n => Some(format!("{} médias", n)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_str() {
        assert_eq!("draft".parse::<PostStatus>().unwrap(), PostStatus::Draft);
        assert_eq!(
            " Published ".parse::<PostStatus>().unwrap(),
            PostStatus::Published
        );
        assert!(matches!(
            "archived".parse::<PostStatus>(),
            Err(CoreError::UnknownPostStatus { .. })
        ));
    }

    #[test]
    fn test_media_label_pluralization() {
        assert_eq!(media_label(0), None);
        assert_eq!(media_label(1).as_deref(), Some("1 média"));
        assert_eq!(media_label(4).as_deref(), Some("4 médias"));
    }

    #[test]
    fn test_media_file_type_field() {
        let json = r#"{"id":"m1","url":"a.png","type":"gif","size":12}"#;
        let media: MediaFile = serde_json::from_str(json).unwrap();
        assert_eq!(media.kind, MediaKind::Gif);
        assert!(media.dimensions.is_none());
    }
}

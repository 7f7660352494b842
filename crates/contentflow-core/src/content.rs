//! Content item types and the status workflow.
//!
//! Defines [`ContentItem`], the unit of content tracked by the
//! application, and [`ContentStatus`], the five-stage workflow every
//! item moves through: Draft → Planning → Review → Update → Ready to
//! Post. Persistence of items is an external concern; these types only
//! carry the data.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Workflow stage of a content item.
///
/// Serializes as the human-readable label (`"Ready to Post"`) and
/// parses case-insensitively, accepting a hyphenated spelling too.
///
/// # Examples
///
/// ```
/// use contentflow_core::ContentStatus;
///
/// let status: ContentStatus = "ready to post".parse().unwrap();
/// assert_eq!(status, ContentStatus::ReadyToPost);
/// assert_eq!(status.to_string(), "Ready to Post");
///
/// assert_eq!(ContentStatus::Draft.next(), Some(ContentStatus::Planning));
/// assert_eq!(ContentStatus::ReadyToPost.next(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentStatus {
    /// Idea captured, not yet planned (default for new items).
    #[default]
    Draft,
    /// Being planned: audience, goal, and outline decided.
    Planning,
    /// Under review before publishing.
    Review,
    /// Revisions requested by review.
    Update,
    /// Approved and ready to go out.
    ReadyToPost,
}

impl ContentStatus {
    /// All stages in workflow order.
    pub const ALL: [ContentStatus; 5] = [
        ContentStatus::Draft,
        ContentStatus::Planning,
        ContentStatus::Review,
        ContentStatus::Update,
        ContentStatus::ReadyToPost,
    ];

    /// Returns the next stage in the workflow, or `None` at the end.
    pub fn next(self) -> Option<ContentStatus> {
        let idx = Self::ALL.iter().position(|s| *s == self)?;
        Self::ALL.get(idx + 1).copied()
    }

    /// Returns the previous stage in the workflow, or `None` at the start.
    pub fn previous(self) -> Option<ContentStatus> {
        let idx = Self::ALL.iter().position(|s| *s == self)?;
        idx.checked_sub(1).and_then(|i| Self::ALL.get(i)).copied()
    }
}

impl std::fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "Draft"),
            Self::Planning => write!(f, "Planning"),
            Self::Review => write!(f, "Review"),
            Self::Update => write!(f, "Update"),
            Self::ReadyToPost => write!(f, "Ready to Post"),
        }
    }
}

impl FromStr for ContentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "planning" => Ok(Self::Planning),
            "review" => Ok(Self::Review),
            "update" => Ok(Self::Update),
            "ready to post" | "ready-to-post" => Ok(Self::ReadyToPost),
            other => Err(format!("unknown content status: {other}")),
        }
    }
}

impl serde::Serialize for ContentStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for ContentStatus {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse::<ContentStatus>().map_err(serde::de::Error::custom)
    }
}

/// A single content item moving through the workflow.
///
/// Mirrors the record the surrounding application persists (`title`,
/// `text`, `status`, `userId`, `createdAt`); the store itself lives
/// behind an external service and is not modeled here.
///
/// # Examples
///
/// ```
/// use contentflow_core::{ContentItem, ContentStatus};
///
/// let item = ContentItem::draft("Launch post", "We shipped v2", "user-1");
/// assert_eq!(item.status, ContentStatus::Draft);
/// assert_eq!(item.title, "Launch post");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Short title shown on the dashboard.
    pub title: String,

    /// The post body, typically produced by the template engine.
    pub text: String,

    /// Current workflow stage.
    pub status: ContentStatus,

    /// Owner of the item.
    pub user_id: String,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl ContentItem {
    /// Creates a new item in the [`Draft`](ContentStatus::Draft) stage,
    /// timestamped now.
    ///
    /// This is how composed posts enter the workflow: build the text
    /// with the template engine, then wrap it as a draft.
    pub fn draft(
        title: impl Into<String>,
        text: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            status: ContentStatus::Draft,
            user_id: user_id.into(),
            created_at: Utc::now(),
        }
    }

    /// Moves the item to the next workflow stage, if there is one.
    ///
    /// Returns `true` when the status changed.
    pub fn advance(&mut self) -> bool {
        match self.status.next() {
            Some(next) => {
                self.status = next;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_order_stages_draft_to_ready() {
        assert_eq!(ContentStatus::ALL[0], ContentStatus::Draft);
        assert_eq!(ContentStatus::ALL[4], ContentStatus::ReadyToPost);
    }

    #[test]
    fn test_should_step_through_workflow_with_next() {
        let mut status = ContentStatus::Draft;
        let mut seen = vec![status];
        while let Some(next) = status.next() {
            status = next;
            seen.push(status);
        }
        assert_eq!(seen, ContentStatus::ALL);
    }

    #[test]
    fn test_should_step_backwards_with_previous() {
        assert_eq!(
            ContentStatus::ReadyToPost.previous(),
            Some(ContentStatus::Update)
        );
        assert_eq!(ContentStatus::Draft.previous(), None);
    }

    #[test]
    fn test_should_display_human_labels() {
        assert_eq!(ContentStatus::Draft.to_string(), "Draft");
        assert_eq!(ContentStatus::ReadyToPost.to_string(), "Ready to Post");
    }

    #[test]
    fn test_should_parse_status_case_insensitive() {
        assert_eq!(
            "PLANNING".parse::<ContentStatus>().unwrap(),
            ContentStatus::Planning
        );
        assert_eq!(
            "Ready to Post".parse::<ContentStatus>().unwrap(),
            ContentStatus::ReadyToPost
        );
        assert_eq!(
            "ready-to-post".parse::<ContentStatus>().unwrap(),
            ContentStatus::ReadyToPost
        );
    }

    #[test]
    fn test_should_reject_unknown_status() {
        assert!("published".parse::<ContentStatus>().is_err());
    }

    #[test]
    fn test_should_round_trip_status_serde() {
        for status in ContentStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            let parsed: ContentStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_should_serialize_ready_to_post_with_spaces() {
        let json = serde_json::to_string(&ContentStatus::ReadyToPost).unwrap();
        assert_eq!(json, "\"Ready to Post\"");
    }

    #[test]
    fn test_should_create_draft_item() {
        let item = ContentItem::draft("Title", "Body", "user-1");
        assert_eq!(item.status, ContentStatus::Draft);
        assert_eq!(item.user_id, "user-1");
    }

    #[test]
    fn test_should_advance_item_until_ready() {
        let mut item = ContentItem::draft("Title", "Body", "user-1");
        let mut steps = 0;
        while item.advance() {
            steps += 1;
        }
        assert_eq!(steps, 4);
        assert_eq!(item.status, ContentStatus::ReadyToPost);
        assert!(!item.advance());
    }

    #[test]
    fn test_should_round_trip_item_yaml() {
        let item = ContentItem::draft("Title", "Body", "user-1");
        let yaml = serde_yaml_ng::to_string(&item).unwrap();
        let parsed: ContentItem = serde_yaml_ng::from_str(&yaml).unwrap();
        assert_eq!(parsed, item);
    }
}

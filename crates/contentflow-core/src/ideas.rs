//! Persisted brainstorm ideas list.
//!
//! A flat list of short post ideas, newest first, persisted as YAML at
//! the path configured in [`IdeasConfig`](crate::config::IdeasConfig).
//! Semantics match the brainstorm page they back: blank additions are
//! rejected, and editing an idea down to blank text removes it.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::CoreError;

/// One captured post idea.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
    /// Stable identifier, unique within the list.
    pub id: u64,
    /// The idea text, always non-blank and trimmed.
    pub text: String,
}

/// The persisted list of ideas.
///
/// # Examples
///
/// ```
/// use contentflow_core::IdeaList;
///
/// let mut list = IdeaList::default();
/// let id = list.add("  Carousel about onboarding  ").unwrap();
/// assert_eq!(list.ideas()[0].text, "Carousel about onboarding");
/// assert!(list.add("   ").is_none());
///
/// // Editing to blank removes the entry
/// assert!(list.edit(id, ""));
/// assert!(list.ideas().is_empty());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IdeaList {
    next_id: u64,
    ideas: Vec<Idea>,
}

impl IdeaList {
    /// Returns the ideas, newest first.
    pub fn ideas(&self) -> &[Idea] {
        &self.ideas
    }

    /// Adds a new idea to the front of the list.
    ///
    /// The text is trimmed; blank text is rejected and `None` returned.
    /// Returns the id of the new idea otherwise.
    pub fn add(&mut self, text: &str) -> Option<u64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.ideas.insert(
            0,
            Idea {
                id,
                text: text.to_string(),
            },
        );
        Some(id)
    }

    /// Removes the idea with the given id.
    ///
    /// Returns `true` when an idea was removed.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.ideas.len();
        self.ideas.retain(|idea| idea.id != id);
        self.ideas.len() != before
    }

    /// Replaces the text of the idea with the given id.
    ///
    /// The text is trimmed; editing down to blank removes the idea.
    /// Returns `true` when an idea with that id existed.
    pub fn edit(&mut self, id: u64, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return self.remove(id);
        }
        match self.ideas.iter_mut().find(|idea| idea.id == id) {
            Some(idea) => {
                idea.text = text.to_string();
                true
            }
            None => false,
        }
    }

    /// Loads the list from the given path, falling back to an empty list
    /// when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::IoError` if the file exists but cannot be
    /// read, or `CoreError::YamlError` if it is not valid YAML.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        if !path.exists() {
            debug!(path = %path.display(), "No ideas file found, starting empty");
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        let list: Self = serde_yaml_ng::from_str(&raw)?;
        Ok(list)
    }

    /// Saves the list to the given path, creating parent directories as
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::IoError` on filesystem failures or
    /// `CoreError::YamlError` if serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), CoreError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let yaml = serde_yaml_ng::to_string(self)?;
        std::fs::write(path, yaml)?;
        debug!(path = %path.display(), count = self.ideas.len(), "Saved ideas list");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_add_ideas_newest_first() {
        let mut list = IdeaList::default();
        list.add("first").unwrap();
        list.add("second").unwrap();

        let texts: Vec<&str> = list.ideas().iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, ["second", "first"]);
    }

    #[test]
    fn test_should_trim_and_reject_blank_additions() {
        let mut list = IdeaList::default();
        assert!(list.add("").is_none());
        assert!(list.add("   \n ").is_none());
        list.add("  padded  ").unwrap();
        assert_eq!(list.ideas()[0].text, "padded");
    }

    #[test]
    fn test_should_assign_unique_ids() {
        let mut list = IdeaList::default();
        let a = list.add("a").unwrap();
        let b = list.add("b").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_should_remove_by_id() {
        let mut list = IdeaList::default();
        let id = list.add("gone soon").unwrap();
        assert!(list.remove(id));
        assert!(list.ideas().is_empty());
        assert!(!list.remove(id));
    }

    #[test]
    fn test_should_edit_idea_text() {
        let mut list = IdeaList::default();
        let id = list.add("draft wording").unwrap();
        assert!(list.edit(id, "  final wording "));
        assert_eq!(list.ideas()[0].text, "final wording");
    }

    #[test]
    fn test_should_remove_idea_when_edited_to_blank() {
        let mut list = IdeaList::default();
        let id = list.add("ephemeral").unwrap();
        assert!(list.edit(id, "   "));
        assert!(list.ideas().is_empty());
    }

    #[test]
    fn test_should_report_missing_id_on_edit() {
        let mut list = IdeaList::default();
        assert!(!list.edit(42, "anything"));
    }

    #[test]
    fn test_should_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("ideas.yml");

        let mut list = IdeaList::default();
        list.add("one").unwrap();
        list.add("two").unwrap();
        list.save(&path).unwrap();

        let loaded = IdeaList::load(&path).unwrap();
        assert_eq!(loaded.ideas(), list.ideas());
    }

    #[test]
    fn test_should_start_empty_for_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let list = IdeaList::load(&dir.path().join("missing.yml")).unwrap();
        assert!(list.ideas().is_empty());
    }

    #[test]
    fn test_should_keep_ids_unique_across_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ideas.yml");

        let mut list = IdeaList::default();
        let first = list.add("one").unwrap();
        list.save(&path).unwrap();

        let mut reloaded = IdeaList::load(&path).unwrap();
        let second = reloaded.add("two").unwrap();
        assert_ne!(first, second);
    }
}

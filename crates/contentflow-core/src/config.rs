//! Application configuration.
//!
//! Defines `AppConfig` which is loaded from `.contentflow/config.yml`
//! in the user's working directory. All fields use snake_case to match
//! YAML conventions; a missing file means defaults.
//!
//! Configuration covers caller-side preferences only (default goal,
//! tone, and emoji density for composed posts, and where the ideas list
//! lives). The template engine's own behavior — bullet caps, hashtag
//! caps, the length limit — is fixed and deliberately not configurable.

use std::path::{Path, PathBuf};

use contentflow_template::PostInput;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::CoreError;

/// Default location of the config file, relative to the working directory.
pub const CONFIG_PATH: &str = ".contentflow/config.yml";

/// Top-level application configuration.
///
/// # Examples
///
/// ```
/// use contentflow_core::AppConfig;
///
/// let config = AppConfig::default();
/// assert_eq!(config.version, 1);
/// assert!(config.defaults.goal.is_none());
///
/// let yaml = serde_yaml_ng::to_string(&config).unwrap();
/// let loaded: AppConfig = serde_yaml_ng::from_str(&yaml).unwrap();
/// assert_eq!(loaded.version, config.version);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Configuration schema version.
    pub version: u32,

    /// Base field values applied to composed posts.
    pub defaults: DefaultsConfig,

    /// Ideas list configuration.
    pub ideas: IdeasConfig,
}

/// Base field values the CLI applies before explicit flags.
///
/// Unset fields leave the template's own defaults in effect
/// (`goal = "engagement"`, `tone = "friendly"`, `emojis = "light"`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Default goal for composed posts.
    pub goal: Option<String>,
    /// Default tone for composed posts.
    pub tone: Option<String>,
    /// Default emoji density for composed posts.
    pub emojis: Option<String>,
}

impl DefaultsConfig {
    /// Converts the configured defaults into a base [`PostInput`].
    ///
    /// Callers merge explicit field values on top of this.
    pub fn base_input(&self) -> PostInput {
        PostInput {
            goal: self.goal.clone(),
            tone: self.tone.clone(),
            emojis: self.emojis.clone(),
            ..PostInput::default()
        }
    }
}

/// Ideas list configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IdeasConfig {
    /// Where the persisted ideas list is stored.
    pub path: PathBuf,
}

impl Default for IdeasConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(".contentflow/ideas.yml"),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            defaults: DefaultsConfig::default(),
            ideas: IdeasConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from the given path, falling back to defaults
    /// when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::IoError` if the file exists but cannot be
    /// read, or `CoreError::YamlError` if it is not valid YAML.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        if !path.exists() {
            info!(path = %path.display(), "No config file found, using default configuration");
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml_ng::from_str(&raw)?;
        Ok(config)
    }
}

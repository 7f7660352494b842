//! ContentFlow Core
//!
//! Domain types and caller-side plumbing around the post template
//! engine: content items and their five-stage status workflow,
//! application configuration, and the persisted brainstorm ideas list.
//!
//! # Architecture
//!
//! - [`ContentItem`] / [`ContentStatus`] model content moving through
//!   Draft → Planning → Review → Update → Ready to Post
//! - [`AppConfig`] holds caller preferences from `.contentflow/config.yml`
//! - [`IdeaList`] persists brainstormed post ideas as YAML
//! - [`CoreError`] is the error type for everything fallible here
//!
//! The engine itself lives in `contentflow-template` and is pure; this
//! crate owns the parts that touch the filesystem.

pub mod config;
mod content;
mod error;
pub mod ideas;

pub use config::{AppConfig, DefaultsConfig, IdeasConfig, CONFIG_PATH};
pub use content::{ContentItem, ContentStatus};
pub use error::CoreError;
pub use ideas::{Idea, IdeaList};

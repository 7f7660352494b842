//! ContentFlow Post Template Engine
//!
//! A pure text engine that assembles a structured social-media post from
//! discrete fields (audience, hook, value, details, call-to-action,
//! tone, emoji density, hashtags) and scores the result against a fixed
//! completeness checklist. No I/O, no state: both operations merge the
//! caller's partial input over the template defaults and compute from
//! the merged copy.
//!
//! # Usage
//!
//! ```
//! use contentflow_template::{build_post, quick_score, PostInput};
//!
//! let input = PostInput {
//!     hook: Some("We just shipped v2".to_string()),
//!     value: Some("Faster builds, fewer clicks".to_string()),
//!     call_to_action: Some("Try it today".to_string()),
//!     ..PostInput::default()
//! };
//!
//! let post = build_post(&input);
//! assert!(post.contains("Next step: Try it today"));
//!
//! let score = quick_score(&input);
//! assert_eq!(score.total, 7);
//! assert!(score.checks.cta);
//! ```

mod builder;
pub mod builtin;
mod score;
mod template;

pub use builder::build_post;
pub use builtin::{starter_template, starter_templates, StarterTemplate, STARTER_TEMPLATE_COUNT};
pub use score::{quick_score, QuickScore, ScoreChecks, TOTAL_CHECKS};
pub use template::{
    merge_with_defaults, ChecklistItem, PostFields, PostInput, CHECKLIST, EMOJI_OPTIONS,
    GOAL_OPTIONS, TEMPLATE_NAME, TEMPLATE_VERSION, TONE_OPTIONS, tips_for,
};

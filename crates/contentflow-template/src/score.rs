//! Checklist scoring.
//!
//! [`quick_score`] evaluates a partial input against the fixed
//! seven-point completeness checklist and reports how many checks pass.
//! Like [`build_post`](crate::build_post) it merges over the template
//! defaults, never mutates the input, and cannot fail.

use serde::Serialize;

use crate::builder::build_post;
use crate::template::{merge_with_defaults, PostInput};

/// Number of checklist checks evaluated by [`quick_score`].
pub const TOTAL_CHECKS: u32 = 7;

/// Longest acceptable post, in characters, for the `clean` check.
const MAX_CLEAN_LEN: usize = 1200;

/// Value length, in characters, beyond which the `details` check passes
/// even without an explicit details field.
const DETAILS_VALUE_LEN: usize = 30;

/// Per-check outcomes, keyed by checklist id.
///
/// Field order matches [`CHECKLIST`](crate::CHECKLIST);
/// [`iter`](Self::iter) yields `(id, passed)` pairs in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreChecks {
    /// Audience is non-blank.
    pub audience: bool,
    /// Hook is non-blank, or the value can stand in for one.
    pub hook: bool,
    /// Value is non-blank.
    pub value: bool,
    /// Details are non-blank, or the value is long enough on its own.
    pub details: bool,
    /// Call-to-action is non-blank.
    pub cta: bool,
    /// The rendered post stays within the length limit.
    pub clean: bool,
    /// The raw hashtag count stays within the limit.
    pub tags: bool,
}

impl ScoreChecks {
    /// Yields `(id, passed)` pairs in checklist order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, bool)> {
        [
            ("audience", self.audience),
            ("hook", self.hook),
            ("value", self.value),
            ("details", self.details),
            ("cta", self.cta),
            ("clean", self.clean),
            ("tags", self.tags),
        ]
        .into_iter()
    }

    /// Looks up a single check by its checklist id.
    pub fn get(&self, id: &str) -> Option<bool> {
        self.iter().find(|(check_id, _)| *check_id == id).map(|(_, v)| v)
    }
}

/// Result of scoring a post input against the checklist.
///
/// # Examples
///
/// ```
/// use contentflow_template::{quick_score, PostInput};
///
/// let score = quick_score(&PostInput {
///     audience: Some("indie devs".to_string()),
///     value: Some("Ship faster with our kit".to_string()),
///     ..PostInput::default()
/// });
/// assert_eq!(score.total, 7);
/// assert!(score.checks.audience);
/// assert!(score.passed <= score.total);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickScore {
    /// Number of checks that passed.
    pub passed: u32,
    /// Total number of checks, always [`TOTAL_CHECKS`].
    pub total: u32,
    /// The individual check outcomes.
    pub checks: ScoreChecks,
}

/// Scores a partial input against the seven-point checklist.
///
/// The input is merged over the template defaults through the same path
/// as [`build_post`], so the two operations always agree on defaulting.
///
/// Note the deliberate asymmetry on the `tags` check: it counts the raw
/// comma-separated entries before any truncation, while `build_post`
/// silently caps the rendered tag line at six. Ten supplied tags render
/// as six but still fail the check.
pub fn quick_score(input: &PostInput) -> QuickScore {
    let d = merge_with_defaults(input);
    let ok = |s: &str| !s.trim().is_empty();

    let raw_tag_count = d
        .hashtags
        .split(',')
        .filter(|tag| !tag.trim().is_empty())
        .count();

    let checks = ScoreChecks {
        audience: ok(&d.audience),
        hook: ok(&d.hook) || ok(&d.value),
        value: ok(&d.value),
        details: ok(&d.details) || d.value.chars().count() > DETAILS_VALUE_LEN,
        cta: ok(&d.call_to_action),
        clean: build_post(input).chars().count() <= MAX_CLEAN_LEN,
        tags: raw_tag_count <= crate::builder::MAX_HASHTAGS,
    };

    let passed = checks.iter().filter(|&(_, passed)| passed).count() as u32;

    QuickScore {
        passed,
        total: TOTAL_CHECKS,
        checks,
    }
}

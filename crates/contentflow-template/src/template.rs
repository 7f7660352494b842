//! Template definition and input types.
//!
//! Defines [`PostFields`] (the full field record with its defaults),
//! [`PostInput`] (the caller-supplied partial record), and the static
//! template metadata: option sets for the enum-like fields, the
//! completeness [`CHECKLIST`], and per-goal [`tips_for`] guidance.
//!
//! The template definition is process-wide constant data; nothing in
//! this module mutates it.

use serde::{Deserialize, Serialize};

/// Human-readable template name.
pub const TEMPLATE_NAME: &str = "Universal Social Post Template";

/// Template schema version.
pub const TEMPLATE_VERSION: u32 = 1;

/// Legal values for the `goal` field.
pub const GOAL_OPTIONS: &[&str] = &["awareness", "engagement", "leads", "sales", "community"];

/// Legal values for the `tone` field.
pub const TONE_OPTIONS: &[&str] = &["friendly", "professional", "bold", "educational", "story"];

/// Legal values for the `emojis` field.
pub const EMOJI_OPTIONS: &[&str] = &["none", "light", "a-lot"];

/// The complete set of post fields with concrete values.
///
/// `Default` yields the template defaults: `goal = "engagement"`,
/// `tone = "friendly"`, `emojis = "light"`, everything else empty.
/// Option values are advisory only — nothing rejects a `tone` outside
/// [`TONE_OPTIONS`]; the option sets exist for callers rendering
/// selection UI.
///
/// # Examples
///
/// ```
/// use contentflow_template::PostFields;
///
/// let fields = PostFields::default();
/// assert_eq!(fields.goal, "engagement");
/// assert_eq!(fields.tone, "friendly");
/// assert_eq!(fields.emojis, "light");
/// assert!(fields.audience.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostFields {
    /// What the post is trying to achieve (see [`GOAL_OPTIONS`]).
    pub goal: String,
    /// Who the post is for.
    pub audience: String,
    /// Subject line shown in the optional header block.
    pub topic: String,
    /// Opening line meant to grab attention.
    pub hook: String,
    /// The main body: what the reader gets.
    pub value: String,
    /// Supporting points, one per line, rendered as bullets.
    pub details: String,
    /// The single call-to-action.
    pub call_to_action: String,
    /// Voice of the post (see [`TONE_OPTIONS`]).
    pub tone: String,
    /// Emoji density (see [`EMOJI_OPTIONS`]).
    pub emojis: String,
    /// Comma-separated hashtag list.
    pub hashtags: String,
}

impl Default for PostFields {
    fn default() -> Self {
        Self {
            goal: "engagement".to_string(),
            audience: String::new(),
            topic: String::new(),
            hook: String::new(),
            value: String::new(),
            details: String::new(),
            call_to_action: String::new(),
            tone: "friendly".to_string(),
            emojis: "light".to_string(),
            hashtags: String::new(),
        }
    }
}

/// A caller-supplied partial set of post fields.
///
/// Every field is optional; missing fields take the [`PostFields`]
/// defaults when merged via [`merge_with_defaults`]. Constructed per
/// invocation (e.g., from a form or a YAML file) and never mutated by
/// the engine.
///
/// # Examples
///
/// ```
/// use contentflow_template::{merge_with_defaults, PostInput};
///
/// let input = PostInput {
///     hook: Some("Big news".to_string()),
///     ..PostInput::default()
/// };
/// let merged = merge_with_defaults(&input);
/// assert_eq!(merged.hook, "Big news");
/// assert_eq!(merged.tone, "friendly");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostInput {
    /// Overrides the default goal (`"engagement"`).
    pub goal: Option<String>,
    /// Who the post is for.
    pub audience: Option<String>,
    /// Subject line for the header block.
    pub topic: Option<String>,
    /// Opening line.
    pub hook: Option<String>,
    /// Main body text.
    pub value: Option<String>,
    /// Supporting points, one per line.
    pub details: Option<String>,
    /// The call-to-action.
    #[serde(alias = "cta")]
    pub call_to_action: Option<String>,
    /// Overrides the default tone (`"friendly"`).
    pub tone: Option<String>,
    /// Overrides the default emoji density (`"light"`).
    pub emojis: Option<String>,
    /// Comma-separated hashtag list.
    pub hashtags: Option<String>,
}

/// Merges a partial input over the template defaults.
///
/// Caller-supplied values win; missing fields take the defaults. This is
/// the single merge path shared by [`build_post`](crate::build_post) and
/// [`quick_score`](crate::quick_score) so the two operations can never
/// drift in their defaulting behavior. Merging is idempotent: a merged
/// record converted back to an input and merged again is unchanged.
pub fn merge_with_defaults(input: &PostInput) -> PostFields {
    let defaults = PostFields::default();
    let pick = |v: &Option<String>, d: String| v.clone().unwrap_or(d);
    PostFields {
        goal: pick(&input.goal, defaults.goal),
        audience: pick(&input.audience, defaults.audience),
        topic: pick(&input.topic, defaults.topic),
        hook: pick(&input.hook, defaults.hook),
        value: pick(&input.value, defaults.value),
        details: pick(&input.details, defaults.details),
        call_to_action: pick(&input.call_to_action, defaults.call_to_action),
        tone: pick(&input.tone, defaults.tone),
        emojis: pick(&input.emojis, defaults.emojis),
        hashtags: pick(&input.hashtags, defaults.hashtags),
    }
}

impl From<PostFields> for PostInput {
    /// Converts a full field record back into an input. Useful for
    /// re-feeding already-merged data; see [`merge_with_defaults`].
    fn from(fields: PostFields) -> Self {
        Self {
            goal: Some(fields.goal),
            audience: Some(fields.audience),
            topic: Some(fields.topic),
            hook: Some(fields.hook),
            value: Some(fields.value),
            details: Some(fields.details),
            call_to_action: Some(fields.call_to_action),
            tone: Some(fields.tone),
            emojis: Some(fields.emojis),
            hashtags: Some(fields.hashtags),
        }
    }
}

/// One entry of the completeness checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChecklistItem {
    /// Stable identifier, matching the check keys of
    /// [`QuickScore`](crate::QuickScore).
    pub id: &'static str,
    /// Human-readable description of the quality being checked.
    pub text: &'static str,
}

/// Ordered qualities a well-formed post should satisfy.
///
/// The ids line up one-to-one with the boolean checks reported by
/// [`quick_score`](crate::quick_score).
pub const CHECKLIST: &[ChecklistItem] = &[
    ChecklistItem {
        id: "audience",
        text: "Audience is specific (not 'everyone')",
    },
    ChecklistItem {
        id: "hook",
        text: "Hook is clear and interesting",
    },
    ChecklistItem {
        id: "value",
        text: "Main value is clear (what do they get?)",
    },
    ChecklistItem {
        id: "details",
        text: "Details are short and scannable",
    },
    ChecklistItem {
        id: "cta",
        text: "One clear call-to-action",
    },
    ChecklistItem {
        id: "clean",
        text: "Not too long, not too salesy",
    },
    ChecklistItem {
        id: "tags",
        text: "Hashtags are relevant and not too many",
    },
];

/// Returns the guidance strings for a goal value.
///
/// Unknown goals yield an empty slice rather than an error; the goal
/// field is advisory like the other enum-like fields.
///
/// # Examples
///
/// ```
/// use contentflow_template::tips_for;
///
/// assert_eq!(tips_for("engagement").len(), 3);
/// assert!(tips_for("time-travel").is_empty());
/// ```
pub fn tips_for(goal: &str) -> &'static [&'static str] {
    match goal {
        "awareness" => &[
            "Keep it simple",
            "Focus on the main idea",
            "Avoid too many details",
        ],
        "engagement" => &[
            "Ask a question",
            "Give 1-2 useful points",
            "Invite comments",
        ],
        "leads" => &[
            "Explain who it's for",
            "Say what problem you solve",
            "CTA should be DM or link",
        ],
        "sales" => &[
            "Benefit first",
            "Offer + urgency (optional)",
            "CTA should be clear",
        ],
        "community" => &[
            "Talk like a human",
            "Share progress or story",
            "Invite people to join",
        ],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_provide_documented_defaults() {
        let fields = PostFields::default();
        assert_eq!(fields.goal, "engagement");
        assert_eq!(fields.tone, "friendly");
        assert_eq!(fields.emojis, "light");
        for s in [
            &fields.audience,
            &fields.topic,
            &fields.hook,
            &fields.value,
            &fields.details,
            &fields.call_to_action,
            &fields.hashtags,
        ] {
            assert!(s.is_empty());
        }
    }

    #[test]
    fn test_should_merge_input_over_defaults() {
        let input = PostInput {
            audience: Some("founders".to_string()),
            tone: Some("bold".to_string()),
            ..PostInput::default()
        };
        let merged = merge_with_defaults(&input);
        assert_eq!(merged.audience, "founders");
        assert_eq!(merged.tone, "bold");
        assert_eq!(merged.goal, "engagement");
        assert_eq!(merged.emojis, "light");
    }

    #[test]
    fn test_should_let_explicit_empty_string_win_over_default() {
        let input = PostInput {
            tone: Some(String::new()),
            ..PostInput::default()
        };
        let merged = merge_with_defaults(&input);
        assert!(merged.tone.is_empty());
    }

    #[test]
    fn test_should_merge_idempotently() {
        let input = PostInput {
            hook: Some("Hi".to_string()),
            hashtags: Some("a, b".to_string()),
            ..PostInput::default()
        };
        let once = merge_with_defaults(&input);
        let twice = merge_with_defaults(&PostInput::from(once.clone()));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_should_not_mutate_caller_input() {
        let input = PostInput {
            value: Some("body".to_string()),
            ..PostInput::default()
        };
        let before = input.clone();
        let _ = merge_with_defaults(&input);
        assert_eq!(input, before);
    }

    #[test]
    fn test_should_expose_seven_checklist_items_in_order() {
        let ids: Vec<&str> = CHECKLIST.iter().map(|item| item.id).collect();
        assert_eq!(
            ids,
            ["audience", "hook", "value", "details", "cta", "clean", "tags"]
        );
    }

    #[test]
    fn test_should_provide_tips_for_every_goal_option() {
        for goal in GOAL_OPTIONS {
            assert!(!tips_for(goal).is_empty(), "no tips for goal {goal}");
        }
    }

    #[test]
    fn test_should_deserialize_partial_input_from_yaml() {
        let yaml = r#"
hook: "Big launch"
call_to_action: "Sign up"
"#;
        let input: PostInput = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(input.hook.as_deref(), Some("Big launch"));
        assert_eq!(input.call_to_action.as_deref(), Some("Sign up"));
        assert!(input.value.is_none());
    }

    #[test]
    fn test_should_accept_cta_alias_when_deserializing() {
        let yaml = "cta: \"DM me\"\n";
        let input: PostInput = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(input.call_to_action.as_deref(), Some("DM me"));
    }
}

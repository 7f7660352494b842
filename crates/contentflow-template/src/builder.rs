//! Post assembly.
//!
//! [`build_post`] merges a partial input over the template defaults and
//! renders the fixed post layout: optional header, emoji-prefixed hook,
//! value body, bulleted details, call-to-action, tone tag, and hashtag
//! line. Pure and infallible: any input (including an empty one) yields
//! a valid trimmed string.

use crate::template::{merge_with_defaults, PostInput};

/// Maximum number of detail lines rendered as bullets.
pub(crate) const MAX_BULLETS: usize = 5;

/// Maximum number of hashtags emitted in the tag line.
pub(crate) const MAX_HASHTAGS: usize = 6;

/// Hook used when both `hook` and `value` are blank.
const FALLBACK_HOOK: &str = "Quick thought:";

/// Builds a formatted post from a partial field input.
///
/// Missing fields fall back to the template defaults; blank fields
/// simply drop their block from the output. The layout is:
///
/// ```text
/// For {audience}:
/// Topic: {topic}
///
/// {emoji}{hook}
///
/// {value}
///
/// - {detail line} (up to 5)
///
/// Next step: {call_to_action}
///
/// ({tone})
///
/// #tag1 #tag2 (up to 6)
/// ```
///
/// # Examples
///
/// ```
/// use contentflow_template::{build_post, PostInput};
///
/// let post = build_post(&PostInput {
///     hook: Some("We shipped".to_string()),
///     value: Some("Dark mode is live".to_string()),
///     ..PostInput::default()
/// });
/// assert!(post.starts_with("✨ We shipped"));
/// assert!(post.contains("Dark mode is live"));
/// ```
pub fn build_post(input: &PostInput) -> String {
    let d = merge_with_defaults(input);

    let audience = d.audience.trim();
    let topic = d.topic.trim();
    let mut header = String::new();
    if !audience.is_empty() {
        header.push_str("For ");
        header.push_str(audience);
        header.push(':');
    }
    if !topic.is_empty() {
        if !header.is_empty() {
            header.push('\n');
        }
        header.push_str("Topic: ");
        header.push_str(topic);
    }

    let hook = d.hook.trim();
    let hook_line = if hook.is_empty() {
        first_line(&d.value).unwrap_or(FALLBACK_HOOK)
    } else {
        hook
    };

    let value = d.value.trim();

    let bullets = to_bullets(&d.details, MAX_BULLETS);
    let details = d.details.trim();
    let details_block = if !bullets.is_empty() {
        format!("\n\n{bullets}")
    } else if !details.is_empty() {
        format!("\n\n{details}")
    } else {
        String::new()
    };

    let cta = d.call_to_action.trim();
    let cta_line = if cta.is_empty() {
        String::new()
    } else {
        format!("\n\nNext step: {cta}")
    };

    let tone = d.tone.trim();
    let tone_tag = if tone.is_empty() {
        String::new()
    } else {
        format!("\n\n({tone})")
    };

    let tags = format_hashtags(&d.hashtags);
    let tags_block = if tags.is_empty() {
        String::new()
    } else {
        format!("\n\n{tags}")
    };

    let mut post = String::new();
    if !header.is_empty() {
        post.push_str(&header);
        post.push_str("\n\n");
    }
    post.push_str(emoji_prefix(&d.emojis));
    post.push_str(hook_line);
    post.push_str("\n\n");
    post.push_str(value);
    post.push_str(&details_block);
    post.push_str(&cta_line);
    post.push_str(&tone_tag);
    post.push_str(&tags_block);

    post.trim().to_string()
}

/// Returns the first non-blank line of `s`, if any.
fn first_line(s: &str) -> Option<&str> {
    s.trim().lines().find(|line| !line.trim().is_empty())
}

/// Renders up to `max` non-blank trimmed lines of `text` as a bulleted
/// list, one `- ` item per line. Remaining lines are dropped.
fn to_bullets(text: &str, max: usize) -> String {
    text.trim()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(max)
        .map(|line| format!("- {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Maps the emoji density value to the hook prefix.
///
/// Anything other than the known `"none"` / `"a-lot"` values falls back
/// to the light prefix.
fn emoji_prefix(level: &str) -> &'static str {
    match level {
        "none" => "",
        "a-lot" => "🔥 ",
        _ => "✨ ",
    }
}

/// Parses a comma-separated hashtag list into a display line.
///
/// Entries are trimmed, blanks dropped, and at most [`MAX_HASHTAGS`]
/// kept. Entries without a leading `#` get one, with internal
/// whitespace stripped from the tag body; entries that already start
/// with `#` pass through untouched.
pub(crate) fn format_hashtags(raw: &str) -> String {
    raw.trim()
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .take(MAX_HASHTAGS)
        .map(|tag| {
            if tag.starts_with('#') {
                tag.to_string()
            } else {
                let body: String = tag.split_whitespace().collect();
                format!("#{body}")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

//! Built-in starter templates embedded at compile time.
//!
//! The `.txt` outline files under `crates/contentflow-template/templates/`
//! are compiled into the binary via [`include_str!`], so starter content
//! is always available regardless of the runtime filesystem layout.
//!
//! When adding or removing outline files, update [`starter_templates`]
//! and [`STARTER_TEMPLATE_COUNT`] accordingly.

use serde::Serialize;

/// The total number of built-in starter templates.
///
/// Used for verification in tests. Update this constant when adding or
/// removing outline files.
pub const STARTER_TEMPLATE_COUNT: usize = 4;

/// A predefined starting point for a new content item.
///
/// Each starter pairs a suggested title prefix with a short bulleted
/// outline the author fills in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StarterTemplate {
    /// Stable identifier (e.g., `"product-launch"`).
    pub id: &'static str,
    /// Display name shown in selection UI.
    pub name: &'static str,
    /// Suggested title prefix for the new item.
    pub title: &'static str,
    /// Outline body the author fills in.
    pub text: &'static str,
}

/// Returns all built-in starter templates, compiled into the binary.
///
/// # Examples
///
/// ```
/// use contentflow_template::builtin::starter_templates;
///
/// let starters = starter_templates();
/// assert_eq!(starters.len(), 4);
/// assert!(starters.iter().any(|s| s.id == "product-launch"));
/// ```
pub fn starter_templates() -> Vec<StarterTemplate> {
    vec![
        StarterTemplate {
            id: "company-announcement",
            name: "Company Announcement",
            title: "Company Announcement: ",
            text: include_str!("../templates/company_announcement.txt"),
        },
        StarterTemplate {
            id: "product-launch",
            name: "New Product",
            title: "The Product: ",
            text: include_str!("../templates/product_launch.txt"),
        },
        StarterTemplate {
            id: "product-update",
            name: "Product Update",
            title: "Product Update: ",
            text: include_str!("../templates/product_update.txt"),
        },
        StarterTemplate {
            id: "event-promotion",
            name: "Event Promotion",
            title: "Join Us: ",
            text: include_str!("../templates/event_promotion.txt"),
        },
    ]
}

/// Looks up a starter template by its id.
pub fn starter_template(id: &str) -> Option<StarterTemplate> {
    starter_templates().into_iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_return_all_starter_templates() {
        assert_eq!(starter_templates().len(), STARTER_TEMPLATE_COUNT);
    }

    #[test]
    fn test_should_include_all_expected_ids() {
        let starters = starter_templates();
        let ids: Vec<&str> = starters.iter().map(|s| s.id).collect();

        for id in [
            "company-announcement",
            "product-launch",
            "product-update",
            "event-promotion",
        ] {
            assert!(ids.contains(&id), "Missing starter template: {id}");
        }
    }

    #[test]
    fn test_should_have_non_empty_outlines() {
        for starter in starter_templates() {
            assert!(
                !starter.text.trim().is_empty(),
                "Starter '{}' has empty outline",
                starter.id,
            );
            assert!(
                starter.text.contains('•'),
                "Starter '{}' outline has no bullet points",
                starter.id,
            );
        }
    }

    #[test]
    fn test_should_look_up_starter_by_id() {
        let starter = starter_template("event-promotion").unwrap();
        assert_eq!(starter.name, "Event Promotion");
        assert!(starter.text.contains("Register link:"));

        assert!(starter_template("missing").is_none());
    }
}

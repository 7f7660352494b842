//! Application state and logic.
//!
//! `App` loads the configuration once, resolves post inputs from the
//! three layers (config defaults, optional input file, explicit flags)
//! and prints command output.

use std::path::Path;

use anyhow::{bail, Context, Result};
use contentflow_core::{AppConfig, IdeaList, CONFIG_PATH};
use contentflow_template::{
    build_post, quick_score, starter_template, starter_templates, tips_for, PostInput, QuickScore,
    CHECKLIST, GOAL_OPTIONS,
};
use tracing::debug;

pub struct App {
    config: AppConfig,
}

impl App {
    pub fn new() -> Result<Self> {
        let config = AppConfig::load(Path::new(CONFIG_PATH))?;
        Ok(Self { config })
    }

    /// Builds and prints a post; optionally appends the score report.
    pub fn compose(&self, flags: PostInput, input_file: Option<&Path>, with_score: bool) -> Result<()> {
        let input = self.resolve_input(flags, input_file)?;
        println!("{}", build_post(&input));

        if with_score {
            println!();
            println!("{}", render_score_report(&quick_score(&input)));
        }
        Ok(())
    }

    /// Scores field values and prints the report (or JSON).
    pub fn score(&self, flags: PostInput, input_file: Option<&Path>, json: bool) -> Result<()> {
        let input = self.resolve_input(flags, input_file)?;
        let score = quick_score(&input);

        if json {
            println!("{}", serde_json::to_string_pretty(&score)?);
        } else {
            println!("{}", render_score_report(&score));
        }
        Ok(())
    }

    /// Prints the completeness checklist.
    pub fn checklist(&self) -> Result<()> {
        for item in CHECKLIST {
            println!("- {}", item.text);
        }
        Ok(())
    }

    /// Prints the guidance strings for a goal.
    pub fn tips(&self, goal: &str) -> Result<()> {
        let tips = tips_for(goal);
        if tips.is_empty() {
            bail!(
                "unknown goal '{goal}' (expected one of: {})",
                GOAL_OPTIONS.join(", ")
            );
        }
        for tip in tips {
            println!("- {tip}");
        }
        Ok(())
    }

    /// Lists starter templates, or prints one outline.
    pub fn templates(&self, show: Option<&str>) -> Result<()> {
        match show {
            Some(id) => {
                let starter = starter_template(id)
                    .with_context(|| format!("no starter template with id '{id}'"))?;
                println!("{}{}", starter.title, starter.name);
                println!();
                println!("{}", starter.text.trim_end());
            }
            None => {
                for starter in starter_templates() {
                    println!("{:<22} {}", starter.id, starter.name);
                }
            }
        }
        Ok(())
    }

    pub fn idea_add(&self, text: &str) -> Result<()> {
        let mut list = self.load_ideas()?;
        match list.add(text) {
            Some(id) => {
                self.save_ideas(&list)?;
                println!("Added idea {id}");
                Ok(())
            }
            None => bail!("idea text is blank"),
        }
    }

    pub fn idea_list(&self) -> Result<()> {
        let list = self.load_ideas()?;
        if list.ideas().is_empty() {
            println!("No ideas yet");
            return Ok(());
        }
        for idea in list.ideas() {
            println!("{:>4}  {}", idea.id, idea.text);
        }
        Ok(())
    }

    pub fn idea_edit(&self, id: u64, text: &str) -> Result<()> {
        let mut list = self.load_ideas()?;
        if !list.edit(id, text) {
            bail!("no idea with id {id}");
        }
        self.save_ideas(&list)?;
        println!("Updated idea {id}");
        Ok(())
    }

    pub fn idea_remove(&self, id: u64) -> Result<()> {
        let mut list = self.load_ideas()?;
        if !list.remove(id) {
            bail!("no idea with id {id}");
        }
        self.save_ideas(&list)?;
        println!("Removed idea {id}");
        Ok(())
    }

    /// Resolves the effective post input from the three layers:
    /// config defaults, then the optional input file, then flags.
    fn resolve_input(&self, flags: PostInput, input_file: Option<&Path>) -> Result<PostInput> {
        let mut input = self.config.defaults.base_input();

        if let Some(path) = input_file {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading input file {}", path.display()))?;
            let from_file: PostInput = serde_yaml_ng::from_str(&raw)
                .with_context(|| format!("parsing input file {}", path.display()))?;
            input = overlay(input, from_file);
            debug!(path = %path.display(), "Loaded post input file");
        }

        Ok(overlay(input, flags))
    }

    fn load_ideas(&self) -> Result<IdeaList> {
        Ok(IdeaList::load(&self.config.ideas.path)?)
    }

    fn save_ideas(&self, list: &IdeaList) -> Result<()> {
        Ok(list.save(&self.config.ideas.path)?)
    }
}

/// Layers `over` on top of `base`: fields set in `over` win.
fn overlay(base: PostInput, over: PostInput) -> PostInput {
    PostInput {
        goal: over.goal.or(base.goal),
        audience: over.audience.or(base.audience),
        topic: over.topic.or(base.topic),
        hook: over.hook.or(base.hook),
        value: over.value.or(base.value),
        details: over.details.or(base.details),
        call_to_action: over.call_to_action.or(base.call_to_action),
        tone: over.tone.or(base.tone),
        emojis: over.emojis.or(base.emojis),
        hashtags: over.hashtags.or(base.hashtags),
    }
}

/// Renders a score as a text report: the tally plus one checklist line
/// per check, marked `[x]` or `[ ]`.
fn render_score_report(score: &QuickScore) -> String {
    let mut out = format!("Score: {}/{}", score.passed, score.total);
    for item in CHECKLIST {
        let mark = if score.checks.get(item.id).unwrap_or(false) {
            'x'
        } else {
            ' '
        };
        out.push_str(&format!("\n  [{mark}] {}", item.text));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_let_overlay_fields_win() {
        let base = PostInput {
            tone: Some("friendly".to_string()),
            goal: Some("leads".to_string()),
            ..PostInput::default()
        };
        let over = PostInput {
            tone: Some("bold".to_string()),
            hook: Some("Hi".to_string()),
            ..PostInput::default()
        };
        let merged = overlay(base, over);
        assert_eq!(merged.tone.as_deref(), Some("bold"));
        assert_eq!(merged.goal.as_deref(), Some("leads"));
        assert_eq!(merged.hook.as_deref(), Some("Hi"));
    }

    #[test]
    fn test_should_render_score_report_with_marks() {
        let score = quick_score(&PostInput {
            audience: Some("devs".to_string()),
            ..PostInput::default()
        });
        let report = render_score_report(&score);

        assert!(report.starts_with(&format!("Score: {}/7", score.passed)));
        assert!(report.contains("[x] Audience is specific (not 'everyone')"));
        assert!(report.contains("[ ] Main value is clear (what do they get?)"));
        assert_eq!(report.lines().count(), 1 + CHECKLIST.len());
    }

    #[test]
    fn test_should_resolve_input_from_file_and_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("post.yml");
        std::fs::write(&path, "hook: \"From file\"\ntone: \"story\"\n").unwrap();

        let app = App {
            config: AppConfig::default(),
        };
        let flags = PostInput {
            tone: Some("bold".to_string()),
            ..PostInput::default()
        };
        let input = app.resolve_input(flags, Some(&path)).unwrap();

        assert_eq!(input.hook.as_deref(), Some("From file"));
        // Flags win over file values
        assert_eq!(input.tone.as_deref(), Some("bold"));
    }

    #[test]
    fn test_should_fail_on_unreadable_input_file() {
        let app = App {
            config: AppConfig::default(),
        };
        let result = app.resolve_input(PostInput::default(), Some(Path::new("/nonexistent.yml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_should_apply_config_defaults_as_base() {
        let mut config = AppConfig::default();
        config.defaults.emojis = Some("none".to_string());
        let app = App { config };

        let input = app.resolve_input(PostInput::default(), None).unwrap();
        assert_eq!(input.emojis.as_deref(), Some("none"));
    }
}

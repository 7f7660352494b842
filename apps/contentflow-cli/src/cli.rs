//! CLI argument parsing.
//!
//! Defines the command-line interface for ContentFlow using clap.
//! Supports six subcommands: `compose`, `score`, `checklist`, `tips`,
//! `templates`, and `idea`.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use contentflow_template::PostInput;

use crate::app::App;

/// ContentFlow - social post composer and workflow helper
#[derive(Parser)]
#[command(name = "contentflow")]
#[command(
    author,
    version,
    about = "ContentFlow - compose, score, and manage social post content"
)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Post field flags shared by `compose` and `score`.
///
/// Every field is optional; unset fields fall back to the config
/// defaults and then to the template defaults.
#[derive(Args, Default)]
pub struct FieldArgs {
    /// Who the post is for (e.g., "indie hackers").
    #[arg(long)]
    pub audience: Option<String>,

    /// Topic shown in the header block.
    #[arg(long)]
    pub topic: Option<String>,

    /// Opening hook line.
    #[arg(long)]
    pub hook: Option<String>,

    /// Main body text.
    #[arg(long)]
    pub value: Option<String>,

    /// Supporting points, one per newline.
    #[arg(long)]
    pub details: Option<String>,

    /// The call-to-action.
    #[arg(long = "cta")]
    pub call_to_action: Option<String>,

    /// Voice of the post (friendly, professional, bold, educational, story).
    #[arg(long)]
    pub tone: Option<String>,

    /// Emoji density (none, light, a-lot).
    #[arg(long)]
    pub emojis: Option<String>,

    /// Comma-separated hashtag list.
    #[arg(long)]
    pub hashtags: Option<String>,

    /// What the post is trying to achieve
    /// (awareness, engagement, leads, sales, community).
    #[arg(long)]
    pub goal: Option<String>,
}

impl From<FieldArgs> for PostInput {
    fn from(args: FieldArgs) -> Self {
        PostInput {
            audience: args.audience,
            topic: args.topic,
            hook: args.hook,
            value: args.value,
            details: args.details,
            call_to_action: args.call_to_action,
            tone: args.tone,
            emojis: args.emojis,
            hashtags: args.hashtags,
            goal: args.goal,
        }
    }
}

/// Available ContentFlow commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Build a formatted post from field values.
    Compose {
        #[command(flatten)]
        fields: FieldArgs,

        /// YAML file with field values (flags win over file values).
        #[arg(long)]
        input: Option<PathBuf>,

        /// Also print the checklist score after the post.
        #[arg(long)]
        score: bool,
    },

    /// Score field values against the completeness checklist.
    Score {
        #[command(flatten)]
        fields: FieldArgs,

        /// YAML file with field values (flags win over file values).
        #[arg(long)]
        input: Option<PathBuf>,

        /// Emit the score as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Print the completeness checklist.
    Checklist,

    /// Print guidance for a posting goal.
    Tips {
        /// Goal value (awareness, engagement, leads, sales, community).
        goal: String,
    },

    /// List the built-in starter templates.
    Templates {
        /// Print the outline of one template instead of the list.
        #[arg(long)]
        show: Option<String>,
    },

    /// Manage the brainstorm ideas list.
    Idea {
        #[command(subcommand)]
        action: IdeaAction,
    },
}

/// Operations on the persisted ideas list.
#[derive(Subcommand)]
pub enum IdeaAction {
    /// Add a new idea.
    Add {
        /// The idea text.
        text: String,
    },

    /// List all ideas, newest first.
    List,

    /// Replace the text of an idea (blank text removes it).
    Edit {
        /// Idea id as shown by `idea list`.
        id: u64,

        /// The replacement text.
        text: String,
    },

    /// Remove an idea.
    Remove {
        /// Idea id as shown by `idea list`.
        id: u64,
    },
}

impl Cli {
    /// Executes the parsed CLI command.
    pub fn run(self) -> Result<()> {
        let app = App::new()?;

        match self.command {
            Commands::Compose {
                fields,
                input,
                score,
            } => app.compose(fields.into(), input.as_deref(), score),
            Commands::Score {
                fields,
                input,
                json,
            } => app.score(fields.into(), input.as_deref(), json),
            Commands::Checklist => app.checklist(),
            Commands::Tips { goal } => app.tips(&goal),
            Commands::Templates { show } => app.templates(show.as_deref()),
            Commands::Idea { action } => match action {
                IdeaAction::Add { text } => app.idea_add(&text),
                IdeaAction::List => app.idea_list(),
                IdeaAction::Edit { id, text } => app.idea_edit(id, &text),
                IdeaAction::Remove { id } => app.idea_remove(id),
            },
        }
    }
}

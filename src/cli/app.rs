use crate::io::OutputFormat;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub const DEFAULT_CATALOG: &str = "data/recipes.json";

/// Pantry: find out what you can cook with what you have
#[derive(Parser, Debug)]
#[command(name = "pantry")]
#[command(version)]
#[command(about = "Match the ingredients you have against a recipe catalog")]
#[command(
    long_about = "Pantry reads a recipe catalog, asks which ingredients you have, and lists every recipe with what is missing, makeable recipes first."
)]
pub struct Cli {
    /// Recipe catalog file (JSON array of {title, ingredients})
    #[arg(long, default_value = DEFAULT_CATALOG, global = true)]
    pub catalog: PathBuf,

    /// Set log level
    #[arg(long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The requested command; `suggest` with defaults when none was given
    pub fn command_or_default(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Suggest {
            have: None,
            format: OutputFormat::Text,
            keep_blank: false,
        })
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Rank recipes by how many ingredients are missing
    Suggest {
        /// Ingredients you have, comma separated (prompts when omitted)
        #[arg(long)]
        have: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Treat empty entries as an ingredient named ""
        #[arg(long)]
        keep_blank: bool,
    },

    /// Search recipes by title or ingredient
    Search {
        /// Text to look for
        query: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List what to buy for the recipes you cannot make yet
    Grocery {
        /// Ingredients you have, comma separated (prompts when omitted)
        #[arg(long)]
        have: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Treat empty entries as an ingredient named ""
        #[arg(long)]
        keep_blank: bool,
    },

    /// Show one recipe with what you have and what is missing
    Show {
        /// Recipe title (case-insensitive)
        title: String,

        /// Ingredients you have, comma separated (prompts when omitted)
        #[arg(long)]
        have: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Treat empty entries as an ingredient named ""
        #[arg(long)]
        keep_blank: bool,
    },
}

impl Commands {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Suggest { .. } => "suggest",
            Commands::Search { .. } => "search",
            Commands::Grocery { .. } => "grocery",
            Commands::Show { .. } => "show",
        }
    }
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

//! CLI argument definitions for the Lumina terminal front end.
//!
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use lumina_core::Language;

/// Lumina: a portfolio site's "Virtual Tech Lead", in the terminal.
#[derive(Parser, Debug)]
#[command(name = "lumina", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Site language (en, es).
    #[arg(short = 'L', long = "lang", global = true)]
    pub lang: Option<Language>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive chat widget (default).
    Chat,
    /// Ask a single question and print the reply.
    Ask {
        /// The question, words are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
    /// Print the site content for the selected language.
    Content {
        /// Emit JSON instead of a text outline.
        #[arg(long)]
        json: bool,
        /// Show one case study in full.
        #[arg(long)]
        project: Option<u32>,
    },
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > LUMINA_CONFIG env var > ~/.lumina/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("LUMINA_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the site language.
    ///
    /// Priority: --lang flag > config file value.
    pub fn resolve_language(&self, config_language: Language) -> Language {
        self.lang.unwrap_or(config_language)
    }

    /// Resolve the log level.
    ///
    /// Priority: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config_level: &str) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config_level.to_string())
    }

    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Chat)
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".lumina").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".lumina").join("config.toml");
    }
    PathBuf::from("config.toml")
}

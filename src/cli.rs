//! CLI interface for the resume scorer

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-scorer")]
#[command(about = "Score a PDF resume against a keyword skill catalog")]
#[command(long_about = "Extract text from a PDF resume, match it against a list of skills and write extracted-text and analysis reports")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a resume against the skill catalog
    Score {
        /// Path to the resume (PDF)
        resume: PathBuf,

        /// Skill catalog file (one skill per line)
        #[arg(short, long)]
        skills: Option<PathBuf>,

        /// Directory for the extracted text and analysis reports
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Print results only, do not write report files
        #[arg(long)]
        no_save: bool,

        /// Output format: console, json
        #[arg(short, long)]
        format: Option<String>,

        /// Show a preview of the extracted text
        #[arg(short, long)]
        preview: bool,
    },

    /// List the skills in the catalog
    Skills {
        /// Skill catalog file (one skill per line)
        #[arg(short, long)]
        skills: Option<PathBuf>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" | "text" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        _ => Err(format!("Invalid output format: {}. Supported: console, json", format)),
    }
}

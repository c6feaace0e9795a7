//! Configuration management for the resume scorer

use crate::error::{Result, ResumeScorerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub skills: SkillsConfig,
    pub extraction: ExtractionConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsConfig {
    /// Newline-delimited skill file, resolved against the working directory
    pub catalog_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Trimmed text shorter than this is treated as "not a text-based PDF"
    pub min_text_chars: usize,
    pub preview_chars: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub output_dir: PathBuf,
    pub format: OutputFormat,
    pub save_reports: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            skills: SkillsConfig {
                catalog_path: PathBuf::from("roles.txt"),
            },
            extraction: ExtractionConfig {
                min_text_chars: 20,
                preview_chars: 2000,
            },
            output: OutputConfig {
                output_dir: PathBuf::from("."),
                format: OutputFormat::Console,
                save_reports: true,
                color_output: true,
            },
        }
    }
}

impl Config {
    /// Load the config from the default location, writing defaults on first use
    pub fn load() -> Result<Self> {
        Self::load_or_create(&Self::config_path())
    }

    /// Load a config file that must already exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ResumeScorerError::Configuration(format!(
                "Config file does not exist: {}",
                path.display()
            )));
        }
        Self::parse_file(path)
    }

    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::parse_file(path)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    fn parse_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| ResumeScorerError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeScorerError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-scorer")
            .join("config.toml")
    }

    fn validate(&self) -> Result<()> {
        if self.extraction.preview_chars == 0 {
            return Err(ResumeScorerError::Configuration(
                "extraction.preview_chars must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

//! Skill catalog loading

use crate::error::ResumeScorerError;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Lines starting with this marker are section headers, not skills
pub const COMMENT_MARKER: &str = "===";

const DEFAULT_SKILLS: &[&str] = &["python", "html", "css", "javascript", "java", "sql"];
const FALLBACK_SKILLS: &[&str] = &["python", "html", "css"];

/// Ordered list of lowercase skill keywords. Duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCatalog {
    skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Default,
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::File(path) => write!(f, "{}", path.display()),
            CatalogSource::Default => write!(f, "built-in defaults"),
        }
    }
}

/// Result of loading a catalog. `warning` is set when the loader fell back
/// to a built-in list.
#[derive(Debug)]
pub struct LoadedCatalog {
    pub catalog: SkillCatalog,
    pub source: CatalogSource,
    pub warning: Option<ResumeScorerError>,
}

impl SkillCatalog {
    pub fn new(skills: Vec<String>) -> Self {
        Self { skills }
    }

    /// Parse line-delimited skills: trim, lowercase, skip blanks and `===` headers.
    /// `\n`, `\r\n` and a lone `\r` all end a line.
    pub fn parse(content: &str) -> Self {
        let skills = content
            .split(['\n', '\r'])
            .map(|line| line.trim().to_lowercase())
            .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_MARKER))
            .collect();
        Self { skills }
    }

    pub fn default_catalog() -> Self {
        Self::from_static(DEFAULT_SKILLS)
    }

    fn fallback_catalog() -> Self {
        Self::from_static(FALLBACK_SKILLS)
    }

    fn from_static(skills: &[&str]) -> Self {
        Self {
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Load a catalog from `path`. Never fails: a missing file yields the
    /// default catalog, an unreadable one the reduced fallback, and the
    /// returned warning describes what went wrong.
    pub fn load(path: &Path) -> LoadedCatalog {
        if !path.exists() {
            let warning = ResumeScorerError::CatalogUnavailable(format!(
                "{} not found, using default skills",
                path.display()
            ));
            warn!("{}", warning);
            return LoadedCatalog {
                catalog: Self::default_catalog(),
                source: CatalogSource::Default,
                warning: Some(warning),
            };
        }

        match std::fs::read_to_string(path) {
            Ok(content) => {
                let catalog = Self::parse(&content);
                debug!("Loaded {} skills from {}", catalog.len(), path.display());
                LoadedCatalog {
                    catalog,
                    source: CatalogSource::File(path.to_path_buf()),
                    warning: None,
                }
            }
            Err(e) => {
                let warning = ResumeScorerError::CatalogUnavailable(format!(
                    "failed to read {}: {}",
                    path.display(),
                    e
                ));
                warn!("{}", warning);
                LoadedCatalog {
                    catalog: Self::fallback_catalog(),
                    source: CatalogSource::Default,
                    warning: Some(warning),
                }
            }
        }
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.skills.iter()
    }
}

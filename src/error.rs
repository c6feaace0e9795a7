//! Error handling for the resume scorer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeScorerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Skill catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("PDF extraction error: {0}")]
    ExtractionFailure(String),

    #[error("Could not extract text ({found} of {required} required characters). Use a text-based PDF (Word/Google Docs)")]
    InsufficientText { found: usize, required: usize },

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ResumeScorerError>;

impl ResumeScorerError {
    /// Errors that stop processing of the current upload but leave the
    /// process healthy.
    pub fn is_upload_blocking(&self) -> bool {
        matches!(
            self,
            ResumeScorerError::InsufficientText { .. } | ResumeScorerError::UnsupportedFormat(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_text_message() {
        let err = ResumeScorerError::InsufficientText { found: 0, required: 20 };
        let msg = err.to_string();
        assert!(msg.contains("Could not extract text"));
        assert!(msg.contains("20"));
        assert!(err.is_upload_blocking());
    }

    #[test]
    fn test_catalog_warning_does_not_block_upload() {
        let err = ResumeScorerError::CatalogUnavailable("roles.txt not found".to_string());
        assert_eq!(err.to_string(), "Skill catalog unavailable: roles.txt not found");
        assert!(!err.is_upload_blocking());
    }
}

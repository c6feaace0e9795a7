//! Input manager: PDF guard, upload reading and text extraction

use crate::error::{Result, ResumeScorerError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{PdfExtractor, TextExtractor};
use log::{debug, info};
use std::path::{Path, PathBuf};
use tokio::fs;

/// A resume file accepted by the PDF guard
#[derive(Debug, Clone)]
pub struct Upload {
    pub path: PathBuf,
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }

    pub fn size_kb(&self) -> f64 {
        self.bytes.len() as f64 / 1024.0
    }
}

pub struct InputManager<E = PdfExtractor> {
    extractor: E,
}

impl InputManager<PdfExtractor> {
    pub fn new() -> Self {
        Self::with_extractor(PdfExtractor)
    }
}

impl Default for InputManager<PdfExtractor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: TextExtractor> InputManager<E> {
    pub fn with_extractor(extractor: E) -> Self {
        Self { extractor }
    }

    /// Read a file from disk, accepting only PDFs by extension and content
    pub async fn read_upload(&self, path: &Path) -> Result<Upload> {
        if !path.exists() {
            return Err(ResumeScorerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        if FileType::from_path(path) != FileType::Pdf {
            return Err(ResumeScorerError::UnsupportedFormat(format!(
                "Only PDF resumes are accepted: {}",
                path.display()
            )));
        }

        let bytes = fs::read(path).await?;
        if FileType::from_content(&bytes) != FileType::Pdf {
            return Err(ResumeScorerError::UnsupportedFormat(format!(
                "File is not a PDF document: {}",
                path.display()
            )));
        }

        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "resume.pdf".to_string());

        Ok(Upload {
            path: path.to_path_buf(),
            filename,
            bytes,
        })
    }

    /// Extract lowercase text from an upload. Empty on extraction failure.
    pub async fn extract_text(&self, upload: &Upload) -> String {
        info!("Extracting text from PDF: {}", upload.path.display());
        let text = self.extractor.extract(upload.bytes.clone()).await;
        debug!(
            "Extracted {} characters from {}",
            text.chars().count(),
            upload.path.display()
        );
        text
    }
}

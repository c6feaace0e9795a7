//! Text extraction from uploaded documents

use crate::error::ResumeScorerError;
use log::{debug, warn};

/// Converts raw document bytes to lowercase text.
///
/// Implementations never fail: any extraction problem yields an empty
/// string, which the pipeline reports as insufficient text.
pub trait TextExtractor {
    fn extract(&self, bytes: Vec<u8>) -> impl std::future::Future<Output = String> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, bytes: Vec<u8>) -> String {
        // pdf-extract is synchronous and may panic on malformed input
        let outcome = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes)).await;

        match outcome {
            Ok(Ok(text)) => {
                debug!("Extracted {} characters from PDF", text.chars().count());
                text.to_lowercase()
            }
            Ok(Err(e)) => {
                warn!("{}", ResumeScorerError::ExtractionFailure(e.to_string()));
                String::new()
            }
            Err(e) => {
                warn!("{}", ResumeScorerError::ExtractionFailure(format!("extractor aborted: {}", e)));
                String::new()
            }
        }
    }
}

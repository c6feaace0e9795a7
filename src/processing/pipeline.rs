//! Single-pass scoring of one uploaded resume

use crate::error::{Result, ResumeScorerError};
use crate::input::catalog::SkillCatalog;
use crate::input::manager::{InputManager, Upload};
use crate::input::text_extractor::TextExtractor;
use crate::processing::matcher;
use crate::processing::session::{AnalysisSession, SessionRecord};
use chrono::Local;
use log::info;

pub struct ScoringPipeline<'a> {
    catalog: &'a SkillCatalog,
    min_text_chars: usize,
}

impl<'a> ScoringPipeline<'a> {
    pub fn new(catalog: &'a SkillCatalog, min_text_chars: usize) -> Self {
        Self {
            catalog,
            min_text_chars,
        }
    }

    /// Reject text too short to be a text-based PDF. Counts characters after trimming.
    pub fn check_text(&self, text: &str) -> Result<()> {
        let found = text.trim().chars().count();
        if found < self.min_text_chars {
            return Err(ResumeScorerError::InsufficientText {
                found,
                required: self.min_text_chars,
            });
        }
        Ok(())
    }

    /// Validate extracted text and match it against the catalog
    pub fn score_text(&self, filename: &str, text: String) -> Result<SessionRecord> {
        self.check_text(&text)?;

        let result = matcher::analyze(&text, self.catalog);
        info!(
            "Matched {}/{} skills for {} ({:.1}%)",
            result.found_count(),
            result.total_skills,
            filename,
            result.score
        );

        Ok(SessionRecord {
            filename: filename.to_string(),
            extracted_text: text,
            result,
            analyzed_at: Local::now(),
        })
    }

    /// Extract, validate and score an upload, storing the outcome in `session`.
    /// On error the session keeps its previous record.
    pub async fn score_upload<'s, E: TextExtractor>(
        &self,
        input: &InputManager<E>,
        upload: &Upload,
        session: &'s mut AnalysisSession,
    ) -> Result<&'s SessionRecord> {
        let text = input.extract_text(upload).await;
        let record = self.score_text(&upload.filename, text)?;
        Ok(session.record(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> SkillCatalog {
        SkillCatalog::new(vec!["python".into(), "sql".into(), "java".into()])
    }

    #[test]
    fn test_score_text_end_to_end() {
        let catalog = catalog();
        let pipeline = ScoringPipeline::new(&catalog, 20);

        let record = pipeline
            .score_text("cv.pdf", "experienced python and sql developer".to_string())
            .unwrap();

        assert_eq!(record.filename, "cv.pdf");
        assert_eq!(format!("{:.1}", record.result.score), "66.7");
        assert_eq!(record.result.found_skills, vec!["python", "sql"]);
        assert_eq!(record.result.missing_skills, vec!["java"]);
    }

    #[test]
    fn test_empty_text_is_insufficient() {
        let catalog = catalog();
        let pipeline = ScoringPipeline::new(&catalog, 20);

        let err = pipeline.score_text("scan.pdf", String::new()).unwrap_err();
        assert!(matches!(
            err,
            ResumeScorerError::InsufficientText { found: 0, required: 20 }
        ));
    }

    #[test]
    fn test_threshold_counts_trimmed_characters() {
        let catalog = catalog();
        let pipeline = ScoringPipeline::new(&catalog, 20);

        // 19 visible characters padded with whitespace
        let short = format!("   {}   \n\n", "a".repeat(19));
        assert!(pipeline.check_text(&short).is_err());

        let exact = "a".repeat(20);
        assert!(pipeline.check_text(&exact).is_ok());
    }
}

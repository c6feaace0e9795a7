//! Per-session storage of the last analysis

use crate::processing::matcher::MatchResult;
use chrono::{DateTime, Local};

/// Everything derived from one upload
#[derive(Debug, Clone)]
pub struct SessionRecord {
    pub filename: String,
    pub extracted_text: String,
    pub result: MatchResult,
    pub analyzed_at: DateTime<Local>,
}

/// Holds the most recent analysis; a new analysis replaces the old one
#[derive(Debug, Default)]
pub struct AnalysisSession {
    last: Option<SessionRecord>,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: SessionRecord) -> &SessionRecord {
        self.last.insert(record)
    }

    pub fn last(&self) -> Option<&SessionRecord> {
        self.last.as_ref()
    }

    pub fn clear(&mut self) {
        self.last = None;
    }
}

//! Downloadable text artifacts for an analysis

use crate::processing::matcher::MatchResult;
use crate::processing::session::SessionRecord;
use chrono::{DateTime, Local};

pub const TEXT_MIME: &str = "text/plain";

/// A named text file ready to be written or streamed
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub file_name: String,
    pub content: String,
    pub mime: &'static str,
}

pub fn extracted_text_filename(filename: &str) -> String {
    format!("{}_extracted.txt", filename)
}

pub fn analysis_filename(filename: &str) -> String {
    format!("{}_analysis.txt", filename)
}

/// Human-readable report with found and missing skills sorted lexicographically
pub fn analysis_report(result: &MatchResult, filename: &str, generated_at: &DateTime<Local>) -> String {
    let mut report = String::from("RESUME ANALYSIS REPORT\n");
    report.push_str(&format!("Generated: {}\n", generated_at.format("%Y-%m-%d %H:%M:%S")));
    report.push_str(&format!("Filename: {}\n\n", filename));
    report.push_str(&format!(
        "OVERALL SCORE: {:.1}% ({}/{} skills found)\n\n",
        result.score,
        result.found_count(),
        result.total_skills
    ));

    report.push_str(&format!("FOUND SKILLS ({}):\n", result.found_count()));
    for skill in result.sorted_found() {
        report.push_str(&format!("✓ {}\n", skill));
    }

    report.push_str(&format!("\nMISSING SKILLS ({}):\n", result.missing_count()));
    for skill in result.sorted_missing() {
        report.push_str(&format!("✗ {}\n", skill));
    }

    report.push_str(&format!("\n\nTotal Skills in Database: {}", result.total_skills));
    report
}

/// The extracted text and the analysis report for a session record
pub fn build_artifacts(record: &SessionRecord) -> [Artifact; 2] {
    [
        Artifact {
            file_name: extracted_text_filename(&record.filename),
            content: record.extracted_text.clone(),
            mime: TEXT_MIME,
        },
        Artifact {
            file_name: analysis_filename(&record.filename),
            content: analysis_report(&record.result, &record.filename, &record.analyzed_at),
            mime: TEXT_MIME,
        },
    ]
}

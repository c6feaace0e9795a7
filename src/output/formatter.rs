//! Output formatters for console and JSON presentation

use crate::config::OutputFormat;
use crate::error::{Result, ResumeScorerError};
use crate::output::report::Artifact;
use crate::processing::session::SessionRecord;
use chrono::{DateTime, Local};
use colored::{Color, Colorize};
use serde::Serialize;
use std::fmt::Display;
use std::path::{Path, PathBuf};

/// Trait for rendering an analysis
pub trait OutputFormatter {
    fn format_record(&self, record: &SessionRecord) -> Result<String>;
}

/// Console formatter with optional colors and text preview
pub struct ConsoleFormatter {
    use_colors: bool,
    preview_chars: Option<usize>,
}

/// JSON formatter for scripting and integration
pub struct JsonFormatter {
    pretty: bool,
}

/// Prints progress and status lines. They go to stderr when stdout
/// carries a JSON document, so the document stays parseable.
#[derive(Debug, Clone, Copy)]
pub struct StatusPrinter {
    to_stderr: bool,
}

/// Dispatches to the formatter for the requested format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    filename: &'a str,
    analyzed_at: DateTime<Local>,
    score: f64,
    found_skills: Vec<&'a str>,
    missing_skills: Vec<&'a str>,
    total_skills: usize,
    text_chars: usize,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, preview_chars: Option<usize>) -> Self {
        Self {
            use_colors,
            preview_chars,
        }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{}\n", title.color(Color::Blue).bold())
        } else {
            format!("\n{}\n", title)
        }
    }

    fn score_color(score: f64) -> Color {
        match score {
            s if s >= 80.0 => Color::Green,
            s if s >= 50.0 => Color::Yellow,
            _ => Color::Red,
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_record(&self, record: &SessionRecord) -> Result<String> {
        let result = &record.result;
        let mut output = String::new();

        if let Some(max_chars) = self.preview_chars {
            output.push_str(&self.format_header("📝 Extracted text preview"));
            output.push_str(&preview_text(&record.extracted_text, max_chars));
            output.push('\n');
        }

        output.push_str(&self.format_header("📊 Results"));
        let score = format!("{:.1}%", result.score);
        output.push_str(&format!(
            "Score: {}  |  Found: {}  |  Missing: {}\n",
            self.colorize(&score, Self::score_color(result.score)),
            result.found_count(),
            result.missing_count()
        ));

        output.push_str(&self.format_header("✅ Found"));
        if result.found_skills.is_empty() {
            output.push_str("No skills found\n");
        } else {
            for skill in result.sorted_found() {
                output.push_str(&format!("  {}\n", self.colorize(&format!("✓ {}", skill), Color::Green)));
            }
        }

        output.push_str(&self.format_header("❌ Missing"));
        if result.missing_skills.is_empty() {
            output.push_str(&format!("{}\n", self.colorize("All skills found!", Color::Green)));
        } else {
            for skill in result.sorted_missing() {
                output.push_str(&format!("  {}\n", self.colorize(&format!("✗ {}", skill), Color::Yellow)));
            }
        }

        Ok(output)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_record(&self, record: &SessionRecord) -> Result<String> {
        let report = JsonReport {
            filename: &record.filename,
            analyzed_at: record.analyzed_at,
            score: record.result.score,
            found_skills: record.result.sorted_found(),
            missing_skills: record.result.sorted_missing(),
            total_skills: record.result.total_skills,
            text_chars: record.extracted_text.chars().count(),
        };

        if self.pretty {
            Ok(serde_json::to_string_pretty(&report)?)
        } else {
            Ok(serde_json::to_string(&report)?)
        }
    }
}

impl ReportGenerator {
    pub fn new(use_colors: bool, preview_chars: Option<usize>) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, preview_chars),
            json_formatter: JsonFormatter::new(true),
        }
    }

    pub fn generate(&self, record: &SessionRecord, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_record(record),
            OutputFormat::Json => self.json_formatter.format_record(record),
        }
    }
}

impl StatusPrinter {
    pub fn for_format(format: OutputFormat) -> Self {
        Self {
            to_stderr: format == OutputFormat::Json,
        }
    }

    pub fn uses_stderr(&self) -> bool {
        self.to_stderr
    }

    pub fn line(&self, message: impl Display) {
        if self.to_stderr {
            eprintln!("{}", message);
        } else {
            println!("{}", message);
        }
    }
}

/// First `max_chars` characters of `text`, with a note when truncated
pub fn preview_text(text: &str, max_chars: usize) -> String {
    let total = text.chars().count();
    if total <= max_chars {
        return text.to_string();
    }

    let mut preview: String = text.chars().take(max_chars).collect();
    preview.push_str(&format!(
        "\n\n... (showing first {} chars of {} total)",
        max_chars, total
    ));
    preview
}

/// Write an artifact into `dir`, creating the directory if needed
pub fn save_artifact(dir: &Path, artifact: &Artifact) -> Result<PathBuf> {
    use std::fs;

    if artifact.file_name.contains(['/', '\\']) {
        return Err(ResumeScorerError::OutputFormatting(format!(
            "Invalid artifact name: {}",
            artifact.file_name
        )));
    }

    fs::create_dir_all(dir)?;
    let path = dir.join(&artifact.file_name);
    fs::write(&path, &artifact.content)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::report::build_artifacts;
    use crate::processing::matcher::MatchResult;
    use tempfile::tempdir;

    fn record(found: &[&str], missing: &[&str]) -> SessionRecord {
        let total = found.len() + missing.len();
        SessionRecord {
            filename: "cv.pdf".to_string(),
            extracted_text: "experienced python and sql developer".to_string(),
            result: MatchResult {
                score: if total == 0 { 0.0 } else { found.len() as f64 / total as f64 * 100.0 },
                found_skills: found.iter().map(|s| s.to_string()).collect(),
                missing_skills: missing.iter().map(|s| s.to_string()).collect(),
                total_skills: total,
            },
            analyzed_at: Local::now(),
        }
    }

    #[test]
    fn test_console_output_without_colors() {
        let formatter = ConsoleFormatter::new(false, None);
        let output = formatter.format_record(&record(&["sql", "python"], &["java"])).unwrap();

        assert!(output.contains("Score: 66.7%  |  Found: 2  |  Missing: 1"));
        assert!(output.contains("  ✓ python\n  ✓ sql\n"));
        assert!(output.contains("  ✗ java\n"));
        assert!(!output.contains("preview"));
    }

    #[test]
    fn test_console_empty_lists() {
        let formatter = ConsoleFormatter::new(false, None);

        let none_found = formatter.format_record(&record(&[], &["java"])).unwrap();
        assert!(none_found.contains("No skills found"));

        let all_found = formatter.format_record(&record(&["java"], &[])).unwrap();
        assert!(all_found.contains("All skills found!"));
    }

    #[test]
    fn test_console_preview() {
        let formatter = ConsoleFormatter::new(false, Some(11));
        let output = formatter.format_record(&record(&["python"], &[])).unwrap();
        assert!(output.contains("experienced\n\n... (showing first 11 chars of 36 total)"));
    }

    #[test]
    fn test_json_output() {
        let formatter = JsonFormatter::new(false);
        let output = formatter.format_record(&record(&["sql", "python"], &["java"])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["filename"], "cv.pdf");
        assert_eq!(value["found_skills"], serde_json::json!(["python", "sql"]));
        assert_eq!(value["missing_skills"], serde_json::json!(["java"]));
        assert_eq!(value["total_skills"], 3);
        assert_eq!(value["text_chars"], 36);
    }

    #[test]
    fn test_generator_dispatch() {
        let generator = ReportGenerator::new(false, None);
        let rec = record(&["python"], &["java"]);

        let json = generator.generate(&rec, OutputFormat::Json).unwrap();
        assert!(json.trim_start().starts_with('{'));

        let console = generator.generate(&rec, OutputFormat::Console).unwrap();
        assert!(console.contains("Score: 50.0%"));
    }

    #[test]
    fn test_status_lines_leave_json_stdout_clean() {
        assert!(StatusPrinter::for_format(OutputFormat::Json).uses_stderr());
        assert!(!StatusPrinter::for_format(OutputFormat::Console).uses_stderr());
    }

    #[test]
    fn test_preview_text() {
        assert_eq!(preview_text("short", 2000), "short");
        assert_eq!(
            preview_text("résumé text", 6),
            "résumé\n\n... (showing first 6 chars of 11 total)"
        );
    }

    #[test]
    fn test_save_artifacts() {
        let dir = tempdir().unwrap();
        let out_dir = dir.path().join("reports");
        let rec = record(&["python"], &["java"]);

        for artifact in build_artifacts(&rec) {
            let path = save_artifact(&out_dir, &artifact).unwrap();
            assert_eq!(std::fs::read_to_string(path).unwrap(), artifact.content);
        }
        assert!(out_dir.join("cv.pdf_extracted.txt").exists());
        assert!(out_dir.join("cv.pdf_analysis.txt").exists());
    }

    #[test]
    fn test_save_artifact_rejects_path_separators() {
        let dir = tempdir().unwrap();
        let artifact = Artifact {
            file_name: "../escape.txt".to_string(),
            content: String::new(),
            mime: "text/plain",
        };
        assert!(save_artifact(dir.path(), &artifact).is_err());
    }
}

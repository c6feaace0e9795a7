//! Keyword skill matching and scoring

use crate::input::catalog::SkillCatalog;
use aho_corasick::AhoCorasick;
use log::warn;
use serde::{Deserialize, Serialize};

/// Outcome of matching one resume text against a catalog.
///
/// `found_skills` and `missing_skills` partition the catalog and keep
/// catalog order; duplicated catalog entries land in the same partition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Percentage of catalog entries found, 0 to 100
    pub score: f64,
    pub found_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub total_skills: usize,
}

impl MatchResult {
    pub fn found_count(&self) -> usize {
        self.found_skills.len()
    }

    pub fn missing_count(&self) -> usize {
        self.missing_skills.len()
    }

    pub fn sorted_found(&self) -> Vec<&str> {
        sorted(&self.found_skills)
    }

    pub fn sorted_missing(&self) -> Vec<&str> {
        sorted(&self.missing_skills)
    }
}

fn sorted(skills: &[String]) -> Vec<&str> {
    let mut skills: Vec<&str> = skills.iter().map(String::as_str).collect();
    skills.sort_unstable();
    skills
}

/// Match `text` (already lowercased) against every catalog entry.
///
/// An entry is found when it occurs as a contiguous substring of the text.
/// There is no tokenization or word-boundary check, so "java" is found
/// inside "javascript".
pub fn analyze(text: &str, catalog: &SkillCatalog) -> MatchResult {
    let present = find_present(text, catalog.skills());

    let mut found_skills = Vec::new();
    let mut missing_skills = Vec::new();
    for (skill, is_present) in catalog.iter().zip(present) {
        if is_present {
            found_skills.push(skill.clone());
        } else {
            missing_skills.push(skill.clone());
        }
    }

    let total_skills = catalog.len();
    let score = if total_skills == 0 {
        0.0
    } else {
        found_skills.len() as f64 / total_skills as f64 * 100.0
    };

    MatchResult {
        score,
        found_skills,
        missing_skills,
        total_skills,
    }
}

/// One flag per catalog entry, true when the entry occurs in `text`
fn find_present(text: &str, skills: &[String]) -> Vec<bool> {
    // The empty string is a substring of every text
    let mut present: Vec<bool> = skills.iter().map(|s| s.is_empty()).collect();

    let (ids, patterns): (Vec<usize>, Vec<&str>) = skills
        .iter()
        .enumerate()
        .filter(|(_, s)| !s.is_empty())
        .map(|(i, s)| (i, s.as_str()))
        .unzip();

    if patterns.is_empty() {
        return present;
    }

    match AhoCorasick::new(&patterns) {
        Ok(automaton) => {
            // Overlapping search reports every pattern occurring at any position
            for mat in automaton.find_overlapping_iter(text) {
                present[ids[mat.pattern().as_usize()]] = true;
            }
        }
        Err(e) => {
            warn!("Failed to build skill matcher, scanning entries one by one: {}", e);
            for (id, pattern) in ids.iter().zip(&patterns) {
                present[*id] = text.contains(pattern);
            }
        }
    }

    present
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(skills: &[&str]) -> SkillCatalog {
        SkillCatalog::new(skills.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_end_to_end_example() {
        let result = analyze(
            "experienced python and sql developer",
            &catalog(&["python", "sql", "java"]),
        );

        assert_eq!(format!("{:.1}", result.score), "66.7");
        assert_eq!(result.found_skills, vec!["python", "sql"]);
        assert_eq!(result.missing_skills, vec!["java"]);
        assert_eq!(result.total_skills, 3);
    }

    #[test]
    fn test_empty_catalog_scores_zero() {
        let result = analyze("python developer", &catalog(&[]));
        assert_eq!(result.score, 0.0);
        assert!(result.found_skills.is_empty());
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn test_all_found_scores_hundred() {
        let result = analyze(
            "rust, go, docker and kubernetes",
            &catalog(&["rust", "go", "docker", "kubernetes"]),
        );
        assert_eq!(result.score, 100.0);
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn test_partition_covers_catalog() {
        let skills = ["sql", "nosql", "c", "c++", "machine learning", "git", "sql", "rust"];
        let texts = [
            "",
            "nosql databases and machine learning",
            "c++ programmer using git daily",
            "sql",
        ];
        let cat = catalog(&skills);

        for text in texts {
            let result = analyze(text, &cat);
            let mut combined: Vec<String> = result
                .found_skills
                .iter()
                .chain(&result.missing_skills)
                .cloned()
                .collect();
            combined.sort();
            let mut expected: Vec<String> = skills.iter().map(|s| s.to_string()).collect();
            expected.sort();
            assert_eq!(combined, expected, "partition mismatch for {:?}", text);

            for skill in &result.found_skills {
                assert!(text.contains(skill.as_str()));
            }
            for skill in &result.missing_skills {
                assert!(!text.contains(skill.as_str()));
            }
        }
    }

    #[test]
    fn test_overlapping_entries_are_all_found() {
        // "sql" sits inside "nosql" and "postgresql"; all three must be reported
        let result = analyze("postgresql and nosql", &catalog(&["nosql", "sql", "postgresql"]));
        assert_eq!(result.found_skills, vec!["nosql", "sql", "postgresql"]);
    }

    #[test]
    fn test_substring_without_word_boundary() {
        let result = analyze("senior javascript engineer", &catalog(&["java", "script"]));
        assert_eq!(result.found_skills, vec!["java", "script"]);
    }

    #[test]
    fn test_matching_is_case_sensitive_on_normalized_input() {
        let result = analyze("python", &catalog(&["Python"]));
        assert_eq!(result.missing_skills, vec!["Python"]);
    }

    #[test]
    fn test_duplicates_share_partition() {
        let result = analyze("git user", &catalog(&["git", "git", "svn"]));
        assert_eq!(result.found_skills, vec!["git", "git"]);
        assert_eq!(format!("{:.1}", result.score), "66.7");
    }

    #[test]
    fn test_empty_entry_is_always_found() {
        let result = analyze("anything", &catalog(&["", "rust"]));
        assert_eq!(result.found_skills, vec![""]);
        assert_eq!(result.missing_skills, vec!["rust"]);
    }

    #[test]
    fn test_analyze_is_deterministic() {
        let cat = catalog(&["python", "sql", "java", "aws"]);
        let text = "python and aws on linux";
        assert_eq!(analyze(text, &cat), analyze(text, &cat));
    }

    #[test]
    fn test_sorted_views() {
        let result = analyze("sql and python", &catalog(&["sql", "python", "java", "c#"]));
        assert_eq!(result.sorted_found(), vec!["python", "sql"]);
        assert_eq!(result.sorted_missing(), vec!["c#", "java"]);
    }
}

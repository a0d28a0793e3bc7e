//! Result shaping: dedup, caps and word count for the analysis response.

use std::collections::HashSet;

use serde::Serialize;

pub const PREVIEW_MAX_CHARS: usize = 1000;
pub const TRUNCATION_MARKER: &str = "...";
pub const MAX_SKILLS: usize = 15;

/// The only thing `/analyze-job` returns. Built once, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    #[serde(rename = "raw_text")]
    pub text_preview: String,
    pub skills: Vec<String>,
    pub word_count: usize,
}

pub fn shape_result(normalized_text: &str, candidates: Vec<String>) -> AnalysisResult {
    AnalysisResult {
        text_preview: preview(normalized_text),
        skills: dedup_capped(candidates, MAX_SKILLS),
        word_count: normalized_text.split_whitespace().count(),
    }
}

/// First `PREVIEW_MAX_CHARS` characters, with the marker appended only when
/// something was cut.
fn preview(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_MAX_CHARS) {
        Some((cut, _)) => format!("{}{TRUNCATION_MARKER}", &text[..cut]),
        None => text.to_string(),
    }
}

/// Exact-match dedup, first occurrence wins, then truncate to `cap`.
fn dedup_capped(candidates: Vec<String>, cap: usize) -> Vec<String> {
    let mut seen = HashSet::with_capacity(candidates.len());
    candidates
        .into_iter()
        .filter(|term| seen.insert(term.clone()))
        .take(cap)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(terms: &[&str]) -> Vec<String> {
        terms.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_preview_exactly_at_limit_is_untouched() {
        let text = "a".repeat(PREVIEW_MAX_CHARS);
        let result = shape_result(&text, vec![]);
        assert_eq!(result.text_preview, text);
        assert!(!result.text_preview.ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn test_preview_one_over_limit_is_truncated_with_marker() {
        let text = "b".repeat(PREVIEW_MAX_CHARS + 1);
        let result = shape_result(&text, vec![]);
        assert_eq!(
            result.text_preview,
            format!("{}{}", "b".repeat(PREVIEW_MAX_CHARS), TRUNCATION_MARKER)
        );
    }

    #[test]
    fn test_preview_counts_characters_not_bytes() {
        let text = "é".repeat(PREVIEW_MAX_CHARS + 5);
        let result = shape_result(&text, vec![]);
        assert_eq!(
            result.text_preview.chars().count(),
            PREVIEW_MAX_CHARS + TRUNCATION_MARKER.len()
        );
        assert!(result.text_preview.starts_with("ééé"));
    }

    #[test]
    fn test_short_text_preview_is_full_text() {
        let result = shape_result("Senior Go Engineer needed.", vec![]);
        assert_eq!(result.text_preview, "Senior Go Engineer needed.");
    }

    #[test]
    fn test_skills_are_deduplicated_by_exact_surface_text() {
        let result = shape_result(
            "",
            words(&["Rust", "rust", "Rust", "AWS", "Rust.", "AWS"]),
        );
        assert_eq!(result.skills, words(&["Rust", "rust", "AWS", "Rust."]));
    }

    #[test]
    fn test_skills_are_capped_after_dedup() {
        let mut candidates = Vec::new();
        for i in 0..40 {
            // every term appears twice; 40 distinct terms overall
            candidates.push(format!("skill{i}"));
            candidates.push(format!("skill{i}"));
        }

        let result = shape_result("", candidates);
        assert_eq!(result.skills.len(), MAX_SKILLS);
        assert_eq!(result.skills[0], "skill0");
        assert_eq!(result.skills[MAX_SKILLS - 1], format!("skill{}", MAX_SKILLS - 1));

        let unique: HashSet<_> = result.skills.iter().collect();
        assert_eq!(unique.len(), result.skills.len());
    }

    #[test]
    fn test_word_count_uses_full_text_not_preview() {
        let text = vec!["word"; 600].join(" "); // 2999 chars, 600 words
        let result = shape_result(&text, vec![]);
        assert_eq!(result.word_count, 600);
        assert!(result.text_preview.ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn test_word_count_of_empty_text_is_zero() {
        assert_eq!(shape_result("", vec![]).word_count, 0);
    }

    #[test]
    fn test_serializes_with_wire_field_names() {
        let result = shape_result("Go Engineer", words(&["Go", "Engineer"]));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["raw_text"], "Go Engineer");
        assert_eq!(json["skills"], serde_json::json!(["Go", "Engineer"]));
        assert_eq!(json["word_count"], 2);
    }
}

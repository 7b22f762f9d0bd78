//! Output formatting utilities.

use idmatch_core::Verdict;
use serde::Serialize;

/// Formats a value as pretty JSON.
pub fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Prints a verdict as a table followed by its status line.
#[allow(clippy::print_literal)]
pub fn print_verdict_table(verdict: &Verdict) {
    println!(
        "{:<6} {:<7} {:<24} {:<24} {}",
        "FIELD", "MATCH", "EXTRACTED", "CANDIDATE", "SCORE"
    );
    println!("{}", "-".repeat(70));
    for (field, comparison) in verdict.details() {
        let score = comparison
            .score
            .map(|s| format!("{:.2}", s))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<6} {:<7} {:<24} {:<24} {}",
            field.as_str(),
            if comparison.matched { "yes" } else { "no" },
            truncate(comparison.extracted.as_deref().unwrap_or("(absent)"), 24),
            truncate(comparison.candidate.as_deref().unwrap_or("(absent)"), 24),
            score
        );
    }
    println!();
    println!(
        "STATUS: {} (overall_match: {})",
        verdict.status().as_str(),
        verdict.overall_match()
    );
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

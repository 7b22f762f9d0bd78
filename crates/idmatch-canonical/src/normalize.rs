use serde::Serialize;

use crate::hygiene::{HygieneReport, HygieneStatus};
use crate::identifiers::STANDARD_DIGITS;
use crate::record::ExtractedIdentity;

/// Strips every character that is not an ASCII decimal digit.
///
/// Absent input normalizes to the empty string.
pub fn normalize_identity_number(raw: Option<&str>) -> String {
    raw.map(|s| s.chars().filter(char::is_ascii_digit).collect())
        .unwrap_or_default()
}

/// Lowercases, collapses whitespace runs to one space and trims both ends.
///
/// Whitespace is Unicode `White_Space` plus the ASCII information separators
/// `U+001C..=U+001F`. Absent input normalizes to the empty string.
pub fn normalize_name(raw: Option<&str>) -> String {
    match raw {
        Some(s) => s
            .to_lowercase()
            .split(is_name_separator)
            .filter(|word| !word.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
        None => String::new(),
    }
}

fn is_name_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c)
}

/// Normalized compared fields of an extracted identity, with the hygiene
/// report describing what had to be cleaned up.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedIdentity {
    /// Digit-only identity number.
    pub identity_number: String,
    /// Lowercased, whitespace-collapsed name.
    pub full_name: String,
    /// Date of birth, passed through unchanged.
    pub date_of_birth: Option<String>,
    /// What normalization changed or could not resolve.
    pub hygiene: HygieneReport,
}

/// Normalizes the compared fields of `identity` and reports what changed.
pub fn normalize_with_report(identity: &ExtractedIdentity) -> NormalizedIdentity {
    let mut report = HygieneReport::new();

    let raw_id = identity.identity_number.as_deref();
    let identity_number = normalize_identity_number(raw_id);
    match raw_id {
        None => {
            report.warn("MissingIdentityNumber");
            report.escalate(HygieneStatus::Ambiguous);
        }
        Some(raw) => {
            let stripped = raw.chars().count() - identity_number.len();
            if stripped > 0 {
                report.warn("IdentitySeparatorsStripped");
                report.add_metric("identity_chars_stripped", stripped as u64);
                report.escalate(HygieneStatus::Lossy);
            }
            if identity_number.is_empty() {
                report.warn("MissingIdentityNumber");
                report.escalate(HygieneStatus::Ambiguous);
            } else if identity_number.len() != STANDARD_DIGITS {
                report.warn("IdentityNonStandardFormat");
            }
        }
    }

    let raw_name = identity.full_name.as_deref();
    let full_name = normalize_name(raw_name);
    match raw_name {
        None => {
            report.warn("MissingName");
            report.escalate(HygieneStatus::Ambiguous);
        }
        Some(raw) => {
            if raw.to_lowercase() != raw {
                report.warn("NameCaseFolded");
                report.escalate(HygieneStatus::Lossy);
            }
            let collapsed = extra_whitespace_runs(raw);
            if collapsed > 0 {
                report.warn("NameWhitespaceCollapsed");
                report.add_metric("name_whitespace_runs_collapsed", collapsed);
                report.escalate(HygieneStatus::Lossy);
            }
            if full_name.is_empty() {
                report.warn("MissingName");
                report.escalate(HygieneStatus::Ambiguous);
            }
        }
    }

    if identity.date_of_birth.is_none() {
        report.warn("MissingDateOfBirth");
        report.escalate(HygieneStatus::Ambiguous);
    }

    NormalizedIdentity {
        identity_number,
        full_name,
        date_of_birth: identity.date_of_birth.clone(),
        hygiene: report,
    }
}

/// Counts whitespace runs that are not already a single interior space.
fn extra_whitespace_runs(s: &str) -> u64 {
    let chars: Vec<char> = s.chars().collect();
    let mut count = 0;
    let mut i = 0;
    while i < chars.len() {
        if !is_name_separator(chars[i]) {
            i += 1;
            continue;
        }
        let start = i;
        while i < chars.len() && is_name_separator(chars[i]) {
            i += 1;
        }
        let at_edge = start == 0 || i == chars.len();
        let single_space = i - start == 1 && chars[start] == ' ';
        if at_edge || !single_space {
            count += 1;
        }
    }
    count
}

//! Normalize command implementation.

use idmatch_canonical::{normalize_with_report, ExtractedIdentity};

use crate::input;
use crate::output;

pub fn run(input: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let identity: ExtractedIdentity = input::read_json(input.as_deref())?;
    let normalized = normalize_with_report(&identity);
    println!("{}", output::format_json(&normalized));
    Ok(())
}

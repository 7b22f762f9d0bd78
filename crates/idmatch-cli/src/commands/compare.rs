//! Match command implementation.

use idmatch_canonical::{CandidateRecord, ExtractedIdentity};
use idmatch_core::MatchStatus;
use tracing::info;

use crate::config::Settings;
use crate::input;
use crate::output;

pub fn run(
    settings: &Settings,
    extracted: String,
    candidate: String,
    json_output: bool,
    strict: bool,
    threshold: Option<f64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let matcher = settings.matcher(threshold)?;

    let extracted: ExtractedIdentity = input::read_json(Some(&extracted))?;
    let candidate: CandidateRecord = input::read_json(Some(&candidate))?;

    let verdict = matcher.match_records(&extracted, &candidate);
    info!(status = verdict.status().as_str(), "match completed");

    if json_output {
        println!("{}", output::format_json(&verdict));
    } else {
        output::print_verdict_table(&verdict);
    }

    if strict && verdict.status() != MatchStatus::Verified {
        std::process::exit(1);
    }

    Ok(())
}

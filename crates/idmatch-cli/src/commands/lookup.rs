//! Lookup command implementation.

use idmatch_canonical::ExtractedIdentity;
use idmatch_core::MatchStatus;
use idmatch_store::{verify_against, JsonCandidateStore, LookupOutcome};

use crate::config::Settings;
use crate::input;
use crate::output;

/// Exit code when no candidate exists for the identity number.
const EXIT_NOT_FOUND: i32 = 2;

pub fn run(
    settings: &Settings,
    extracted: String,
    store: String,
    json_output: bool,
    strict: bool,
    threshold: Option<f64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let matcher = settings.matcher(threshold)?;
    let extracted: ExtractedIdentity = input::read_json(Some(&extracted))?;
    let store = JsonCandidateStore::open(&store)
        .map_err(|e| format!("Failed to open candidate store: {}", e))?;

    let outcome = verify_against(&store, &matcher, &extracted)?;

    if json_output {
        println!("{}", output::format_json(&outcome));
    }

    match outcome {
        LookupOutcome::Matched { verdict } => {
            if !json_output {
                output::print_verdict_table(&verdict);
            }
            if strict && verdict.status() != MatchStatus::Verified {
                std::process::exit(1);
            }
            Ok(())
        }
        LookupOutcome::NotFound { identity_number } => {
            if !json_output {
                if identity_number.is_empty() {
                    eprintln!("Candidate not found: extracted identity has no identity number");
                } else {
                    eprintln!("Candidate not found for identity number {}", identity_number);
                }
            }
            std::process::exit(EXIT_NOT_FOUND);
        }
    }
}

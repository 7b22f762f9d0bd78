//! Parse command implementation.

use idmatch_extract::{parse_fields, ExtractionOutcome};

use crate::input;
use crate::output;

pub fn run(input: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let content = input::read_text(input.as_deref())?;

    let outcome = match parse_fields(&content) {
        Ok(fields) => ExtractionOutcome::Extracted(fields),
        Err(failure) => ExtractionOutcome::Unparsable(failure),
    };

    // Parse failures are reported as data on stdout, like the pipeline does.
    if let Some(error) = outcome.error_object() {
        println!("{}", output::format_json(&error));
        std::process::exit(1);
    }
    if let Some(fields) = outcome.fields() {
        println!("{}", output::format_json(fields));
    }
    Ok(())
}

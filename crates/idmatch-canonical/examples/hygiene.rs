use idmatch_canonical::{normalize_with_report, ExtractedIdentity};
use serde_json::json;

fn main() {
    let extracted = json!({
        "cnic_number": " 35202-1234567-3 ",
        "name": "  Muhammad   ALI ",
        "dob": null
    });

    let identity: ExtractedIdentity = match serde_json::from_value(extracted) {
        Ok(identity) => identity,
        Err(err) => {
            eprintln!("invalid extracted identity: {}", err);
            std::process::exit(1);
        }
    };

    let normalized = normalize_with_report(&identity);
    match serde_json::to_string_pretty(&normalized) {
        Ok(out) => println!("{}", out),
        Err(err) => {
            eprintln!("serialization failed: {}", err);
            std::process::exit(1);
        }
    }
}

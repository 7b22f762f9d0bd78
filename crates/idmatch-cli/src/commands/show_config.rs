//! Config command implementation.

use crate::config::Settings;

pub fn run(settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    print!("{}", toml::to_string_pretty(settings)?);
    Ok(())
}

//! Input reading helpers.

use serde::de::DeserializeOwned;
use std::io::{self, Read};

/// Reads a file, or stdin when no path is given.
pub fn read_text(input: Option<&str>) -> Result<String, Box<dyn std::error::Error>> {
    match input {
        Some(path) => Ok(std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read file {}: {}", path, e))?),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Reads and deserializes a JSON file, or stdin when no path is given.
pub fn read_json<T: DeserializeOwned>(input: Option<&str>) -> Result<T, Box<dyn std::error::Error>> {
    let text = read_text(input)?;
    let value = serde_json::from_str(&text).map_err(|e| {
        format!(
            "Invalid JSON in {}: {}",
            input.unwrap_or("stdin"),
            e
        )
    })?;
    Ok(value)
}

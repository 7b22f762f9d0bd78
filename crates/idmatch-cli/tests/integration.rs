//! Integration tests for CLI commands.

use serde_json::json;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tempfile::TempDir;

fn write_json(dir: &Path, name: &str, value: serde_json::Value) -> String {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_vec_pretty(&value).unwrap()).unwrap();
    path.to_string_lossy().to_string()
}

fn make_extracted(dir: &Path) -> String {
    write_json(
        dir,
        "extracted.json",
        json!({
            "cnic_number": "12345-1234567-1",
            "name": "Ali Khan",
            "dob": "1990-01-01"
        }),
    )
}

fn make_candidate(dir: &Path, cnic: &str, name: &str) -> String {
    write_json(
        dir,
        "candidate.json",
        json!({"cnic": cnic, "name": name, "dob": "1990-01-01"}),
    )
}

fn make_store(dir: &Path) -> String {
    write_json(
        dir,
        "candidates.json",
        json!([
            {"cnic": "1234512345671", "name": "ali   khan", "dob": "1990-01-01"},
            {"cnic": "5430198765432", "name": "Ayesha Siddiqui", "dob": "1988-07-14"}
        ]),
    )
}

fn run_cli(args: &[&str]) -> (Option<i32>, String, String) {
    run_cli_with_stdin(args, None)
}

fn run_cli_with_stdin(args: &[&str], stdin: Option<&str>) -> (Option<i32>, String, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_idmatch"))
        .args(args)
        .env_remove("IDMATCH_CONFIG")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI");

    {
        let mut handle = child.stdin.take().unwrap();
        if let Some(text) = stdin {
            handle.write_all(text.as_bytes()).unwrap();
        }
    }

    let output = child.wait_with_output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    (output.status.code(), stdout, stderr)
}

#[test]
fn test_match_verified_table() {
    let temp_dir = TempDir::new().unwrap();
    let extracted = make_extracted(temp_dir.path());
    let candidate = make_candidate(temp_dir.path(), "1234512345671", "ali   khan");

    let (code, stdout, _) = run_cli(&["match", &extracted, &candidate]);
    assert_eq!(code, Some(0));
    assert!(stdout.contains("FIELD"));
    assert!(stdout.contains("STATUS: VERIFIED"));
    assert!(stdout.contains("1.00"));
}

#[test]
fn test_match_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let extracted = make_extracted(temp_dir.path());
    let candidate = make_candidate(temp_dir.path(), "1234512345671", "Ali Akbar");

    let (code, stdout, _) = run_cli(&["match", &extracted, &candidate, "--json"]);
    assert_eq!(code, Some(0));
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["status"], "NAME_MISMATCH");
    assert_eq!(parsed["overall_match"], false);
    assert_eq!(parsed["details"]["name"]["score"], 0.71);
}

#[test]
fn test_match_strict_fails_on_mismatch() {
    let temp_dir = TempDir::new().unwrap();
    let extracted = make_extracted(temp_dir.path());
    let candidate = make_candidate(temp_dir.path(), "9999999999999", "Ali Khan");

    let (code, stdout, _) = run_cli(&["match", &extracted, &candidate, "--strict"]);
    assert_eq!(code, Some(1));
    assert!(stdout.contains("CNIC_MISMATCH"));
}

#[test]
fn test_match_threshold_override() {
    let temp_dir = TempDir::new().unwrap();
    let extracted = make_extracted(temp_dir.path());
    let candidate = make_candidate(temp_dir.path(), "1234512345671", "Ali Akbar");

    let (code, stdout, _) = run_cli(&[
        "match", &extracted, &candidate, "--json", "--threshold", "0.7",
    ]);
    assert_eq!(code, Some(0));
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["status"], "VERIFIED");
}

#[test]
fn test_invalid_threshold_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let extracted = make_extracted(temp_dir.path());
    let candidate = make_candidate(temp_dir.path(), "1234512345671", "Ali Khan");

    let (code, _, stderr) = run_cli(&["match", &extracted, &candidate, "--threshold", "1.5"]);
    assert_eq!(code, Some(1));
    assert!(stderr.contains("Error"));
    assert!(stderr.contains("name_threshold"));
}

#[test]
fn test_config_file_sets_threshold() {
    let temp_dir = TempDir::new().unwrap();
    let extracted = make_extracted(temp_dir.path());
    let candidate = make_candidate(temp_dir.path(), "1234512345671", "Ali Akbar");
    let config_path = temp_dir.path().join("idmatch.toml");
    fs::write(
        &config_path,
        "[matching]\nname_threshold = 0.7\n\n[extraction]\nregion = \"eu-west-1\"\n",
    )
    .unwrap();
    let config = config_path.to_string_lossy().to_string();

    let (code, stdout, _) = run_cli(&["--config", &config, "match", &extracted, &candidate, "--json"]);
    assert_eq!(code, Some(0));
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["status"], "VERIFIED");
}

#[test]
fn test_config_command_prints_defaults() {
    let (code, stdout, _) = run_cli(&["config"]);
    assert_eq!(code, Some(0));
    assert!(stdout.contains("[matching]"));
    assert!(stdout.contains("name_threshold = 0.8"));
    assert!(stdout.contains("anthropic.claude-3-sonnet-20240229-v1:0"));
    assert!(stdout.contains("region = \"us-east-1\""));
}

#[test]
fn test_config_command_reflects_file_region() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("idmatch.toml");
    fs::write(&config_path, "[extraction]\nregion = \"eu-west-1\"\n").unwrap();

    let (code, stdout, _) = run_cli(&["--config", &config_path.to_string_lossy(), "config"]);
    assert_eq!(code, Some(0));
    assert!(stdout.contains("region = \"eu-west-1\""));
    assert!(stdout.contains("name_threshold = 0.8"));
}

#[test]
fn test_missing_config_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing: PathBuf = temp_dir.path().join("absent.toml");
    let (code, _, stderr) = run_cli(&["--config", &missing.to_string_lossy(), "config"]);
    assert_eq!(code, Some(1));
    assert!(stderr.contains("failed to read config file"));
}

#[test]
fn test_lookup_found() {
    let temp_dir = TempDir::new().unwrap();
    let extracted = make_extracted(temp_dir.path());
    let store = make_store(temp_dir.path());

    let (code, stdout, _) = run_cli(&["lookup", &extracted, "--store", &store, "--json"]);
    assert_eq!(code, Some(0));
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["outcome"], "matched");
    assert_eq!(parsed["verdict"]["status"], "VERIFIED");
}

#[test]
fn test_lookup_not_found_is_distinct() {
    let temp_dir = TempDir::new().unwrap();
    let extracted = write_json(
        temp_dir.path(),
        "unknown.json",
        json!({"cnic_number": "11111-1111111-1", "name": "Ali Khan", "dob": null}),
    );
    let store = make_store(temp_dir.path());

    let (code, stdout, _) = run_cli(&["lookup", &extracted, "--store", &store, "--json"]);
    assert_eq!(code, Some(2));
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["outcome"], "not_found");
    assert_eq!(parsed["identity_number"], "1111111111111");

    let (code, _, stderr) = run_cli(&["lookup", &extracted, "--store", &store]);
    assert_eq!(code, Some(2));
    assert!(stderr.contains("not found"));
}

#[test]
fn test_normalize_from_stdin() {
    let input = json!({"cnic_number": "12345-1234567-1", "name": "  ALI   Khan ", "dob": null});
    let (code, stdout, _) = run_cli_with_stdin(&["normalize"], Some(&input.to_string()));
    assert_eq!(code, Some(0));
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["identity_number"], "1234512345671");
    assert_eq!(parsed["full_name"], "ali khan");
    assert_eq!(parsed["hygiene"]["status"], "Ambiguous");
}

#[test]
fn test_parse_fenced_output() {
    let raw = "```json\n{\"name\": \"Ali Khan\", \"cnic_number\": \"12345-1234567-1\", \"dob\": null}\n```";
    let (code, stdout, _) = run_cli_with_stdin(&["parse"], Some(raw));
    assert_eq!(code, Some(0));
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["name"], "Ali Khan");
    assert_eq!(parsed["cnic_number"], "12345-1234567-1");
    assert!(parsed["dob"].is_null());
}

#[test]
fn test_parse_failure_reports_raw_content() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("output.txt");
    fs::write(&path, "The image is too blurry.").unwrap();

    let (code, stdout, _) = run_cli(&["parse", &path.to_string_lossy()]);
    assert_eq!(code, Some(1));
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["error"], "Failed to parse extraction result");
    assert_eq!(parsed["raw_content"], "The image is too blurry.");
}

#[test]
fn test_invalid_json_input_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let bad = temp_dir.path().join("bad.json");
    fs::write(&bad, "not json").unwrap();
    let candidate = make_candidate(temp_dir.path(), "1234512345671", "Ali Khan");

    let (code, _, stderr) = run_cli(&["match", &bad.to_string_lossy(), &candidate]);
    assert_eq!(code, Some(1));
    assert!(stderr.contains("Invalid JSON"));
}

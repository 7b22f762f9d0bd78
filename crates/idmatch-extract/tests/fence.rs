use idmatch_extract::{parse_fields, strip_code_fence};

#[test]
fn plain_json_is_returned_trimmed() {
    assert_eq!(strip_code_fence("  {\"name\": \"Ali\"}\n"), "{\"name\": \"Ali\"}");
}

#[test]
fn json_tagged_fence_is_unwrapped() {
    let text = "```json\n{\"name\": \"Ali\"}\n```";
    assert_eq!(strip_code_fence(text), "{\"name\": \"Ali\"}");
}

#[test]
fn json_tag_is_case_insensitive() {
    let text = "```JSON\n{\"a\": 1}\n```";
    assert_eq!(strip_code_fence(text), "{\"a\": 1}");
}

#[test]
fn untagged_fence_is_unwrapped() {
    let text = "```\n{\"a\": 1}\n```";
    assert_eq!(strip_code_fence(text), "{\"a\": 1}");
}

#[test]
fn other_language_tags_are_skipped() {
    let text = "```javascript\n{\"a\": 1}\n```";
    assert_eq!(strip_code_fence(text), "{\"a\": 1}");
}

#[test]
fn prose_around_the_fence_is_dropped() {
    let text = "Here is the data:\n```json\n{\"a\": 1}\n```\nLet me know if you need more.";
    assert_eq!(strip_code_fence(text), "{\"a\": 1}");
}

#[test]
fn json_fence_wins_over_an_earlier_untagged_fence() {
    let text = "```\nnot this\n```\n```json\n{\"a\": 1}\n```";
    assert_eq!(strip_code_fence(text), "{\"a\": 1}");
}

#[test]
fn unclosed_fence_runs_to_the_end() {
    assert_eq!(strip_code_fence("```json\n{\"a\": 1}"), "{\"a\": 1}");
}

#[test]
fn lone_trailing_fence_keeps_preceding_content() {
    assert_eq!(strip_code_fence("{\"a\": 1}\n```"), "{\"a\": 1}");
}

#[test]
fn empty_input_stays_empty() {
    assert_eq!(strip_code_fence("   "), "");
    assert_eq!(strip_code_fence("```json\n```"), "");
}

#[test]
fn parse_fields_reads_fenced_output() {
    let text = "```json\n{\"name\": \"Ali Khan\", \"cnic_number\": \"12345-1234567-1\", \"dob\": null}\n```";
    let fields = parse_fields(text).unwrap();
    assert_eq!(fields.full_name.as_deref(), Some("Ali Khan"));
    assert_eq!(fields.identity_number.as_deref(), Some("12345-1234567-1"));
    assert!(fields.date_of_birth.is_none());
}

#[test]
fn parse_failure_keeps_raw_content() {
    let text = "I could not read the card.";
    let failure = parse_fields(text).unwrap_err();
    assert_eq!(failure.raw_content, text);
    assert!(!failure.reason.is_empty());
    assert!(failure
        .to_string()
        .starts_with("failed to parse extraction result"));
}

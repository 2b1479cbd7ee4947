use super::*;

#[test]
fn output_format_from_str() {
    assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
    assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
    assert!("sarif".parse::<OutputFormat>().is_err());
}

#[test]
fn formatter_for_json_emits_json() {
    let formatter = formatter_for(OutputFormat::Json, ColorMode::Always);
    let output = formatter.format(&DiffResult::default()).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert!(parsed["results"].as_array().unwrap().is_empty());
}

#[test]
fn formatter_for_text_reports_no_changes() {
    let formatter = formatter_for(OutputFormat::Text, ColorMode::Never);
    let output = formatter.format(&DiffResult::default()).unwrap();

    assert!(output.contains("No changes"));
}

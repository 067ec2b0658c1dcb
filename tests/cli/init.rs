use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    for field in [
        "reference",
        "translated",
        "auditJson",
        "auditMarkdown",
        "missingValues",
        "asciiThreshold",
        "reportLimit",
    ] {
        assert!(
            parsed.get(field).is_some(),
            "Config should have '{field}' field"
        );
    }
    assert_eq!(parsed["reference"], "_en.json");
    assert_eq!(parsed["asciiThreshold"], 0.85);

    assert!(
        content.contains("\n  \""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "\u{2713} Created .transauditrc.json\n");
    assert!(test.root().join(".transauditrc.json").exists());

    let content = test.read_file(".transauditrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".transauditrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Error: .transauditrc.json already exists"));
    assert_eq!(test.read_file(".transauditrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_used_by_audit() -> Result<()> {
    let test = CliTest::with_locales(r#"{"a": "A"}"#, r#"{"a": "甲"}"#)?;

    let init = test.command().arg("init").output()?;
    assert!(init.status.success());

    let output = test.audit_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(test.root().join("translation_audit.json").exists());

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Usage:"));
    assert!(stdout(&output).contains("audit"));

    Ok(())
}

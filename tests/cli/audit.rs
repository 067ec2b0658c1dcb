use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{CliTest, stderr, stdout};

const EN: &str = r#"{"menu": {"open": "Open {file}", "close": "Close", "count": 2, "help": "Help"}, "tips": ["First tip", "Second tip"], "only_en": "Only", "title": "Settings"}"#;

const ZH: &str = r#"{"menu": {"open": "開啟 {檔案}", "close": "Close", "count": "2", "help": "Help me 說"}, "tips": ["第一個提示"], "only_zh": "只有", "title": "設定 Settings"}"#;

const EXPECTED_JSON: &str = r#"{
  "summary": {
    "en_leaf_count": 8,
    "zh_leaf_count": 7,
    "missing_keys_count": 2,
    "extra_keys_count": 1,
    "placeholder_mismatch_count": 1,
    "identical_to_en_count": 1,
    "mostly_ascii_count": 2
  },
  "missing_keys": [
    "only_en",
    "tips[1]"
  ],
  "extra_keys": [
    "only_zh"
  ],
  "placeholder_mismatch": [
    {
      "key": "menu.open",
      "en_placeholders": [
        "{file}"
      ],
      "zh_placeholders": [
        "{檔案}"
      ],
      "en": "Open {file}",
      "zh": "開啟 {檔案}"
    }
  ],
  "identical_to_en": [
    {
      "key": "menu.close",
      "en": "Close",
      "zh": "Close"
    }
  ],
  "mostly_ascii": [
    {
      "key": "menu.close",
      "en": "Close",
      "zh": "Close",
      "ascii_ratio": 1.0
    },
    {
      "key": "menu.help",
      "en": "Help",
      "zh": "Help me 說",
      "ascii_ratio": 0.8888888888888888
    }
  ]
}"#;

const EXPECTED_MARKDOWN: &str = r#"# Translation Audit

## Summary

- **en_leaf_count**: 8
- **zh_leaf_count**: 7
- **missing_keys_count**: 2
- **extra_keys_count**: 1
- **placeholder_mismatch_count**: 1
- **identical_to_en_count**: 1
- **mostly_ascii_count**: 2

## Missing keys in zh-tw (first 200)

- only_en
- tips[1]

## Placeholder mismatches

- menu.open
  - EN: Open {file}
  - ZH: 開啟 {檔案}
  - EN placeholders: ['{file}']
  - ZH placeholders: ['{檔案}']

## Identical to EN (first 200)

- menu.close = Close

## Mostly ASCII (first 200)

- menu.close (ascii_ratio=1.00) = Close
- menu.help (ascii_ratio=0.89) = Help me 說"#;

const EXPECTED_STDOUT: &str = "OK\n\
{\"en_leaf_count\": 8, \"zh_leaf_count\": 7, \"missing_keys_count\": 2, \"extra_keys_count\": 1, \
\"placeholder_mismatch_count\": 1, \"identical_to_en_count\": 1, \"mostly_ascii_count\": 2}\n\
WROTE translation_audit.json and translation_audit.md\n";

#[test]
fn test_audit_writes_reports() -> Result<()> {
    let test = CliTest::with_locales(EN, ZH)?;

    let output = test.audit_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), EXPECTED_STDOUT);
    assert_eq!(test.read_file("translation_audit.json")?, EXPECTED_JSON);
    assert_eq!(test.read_file("translation_audit.md")?, EXPECTED_MARKDOWN);

    Ok(())
}

#[test]
fn test_audit_is_idempotent() -> Result<()> {
    let test = CliTest::with_locales(EN, ZH)?;

    test.audit_command().output()?;
    let first_json = test.read_file("translation_audit.json")?;
    let first_markdown = test.read_file("translation_audit.md")?;

    test.audit_command().output()?;
    assert_eq!(test.read_file("translation_audit.json")?, first_json);
    assert_eq!(test.read_file("translation_audit.md")?, first_markdown);

    Ok(())
}

#[test]
fn test_audit_missing_sequence_element() -> Result<()> {
    let test = CliTest::with_locales(
        r#"{"a": "Hello {name}", "b": ["x", "y"]}"#,
        r#"{"a": "Hola {name}", "b": ["x"]}"#,
    )?;

    let output = test.audit_command().output()?;
    assert!(output.status.success());

    let report = test.read_json("translation_audit.json")?;
    assert_eq!(report["missing_keys"], json!(["b[1]"]));
    assert_eq!(report["extra_keys"], json!([]));
    assert_eq!(report["placeholder_mismatch"], json!([]));

    Ok(())
}

#[test]
fn test_audit_dropped_placeholder() -> Result<()> {
    let test = CliTest::with_locales(r#"{"a": "Hi {n}"}"#, r#"{"a": "Hi"}"#)?;

    test.audit_command().output()?;

    let report = test.read_json("translation_audit.json")?;
    assert_eq!(
        report["placeholder_mismatch"],
        json!([{
            "key": "a",
            "en_placeholders": ["{n}"],
            "zh_placeholders": [],
            "en": "Hi {n}",
            "zh": "Hi"
        }])
    );

    Ok(())
}

#[test]
fn test_audit_identical_and_mostly_ascii() -> Result<()> {
    let test = CliTest::with_locales(
        r#"{"save": "Save", "ok": "X"}"#,
        r#"{"save": "Save", "ok": "OK Button"}"#,
    )?;

    test.audit_command().output()?;

    let report = test.read_json("translation_audit.json")?;
    assert_eq!(
        report["identical_to_en"],
        json!([{"key": "save", "en": "Save", "zh": "Save"}])
    );
    assert_eq!(report["mostly_ascii"][0]["key"], json!("ok"));
    assert_eq!(report["mostly_ascii"][0]["ascii_ratio"], json!(1.0));
    assert_eq!(report["summary"]["mostly_ascii_count"], json!(2));

    Ok(())
}

#[test]
fn test_audit_strict_fails_on_missing_keys() -> Result<()> {
    let test = CliTest::with_locales(r#"{"a": "A", "b": "B"}"#, r#"{"a": "甲"}"#)?;

    let output = test.audit_command().arg("--strict").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).starts_with("OK\n"));
    assert!(stderr(&output).contains("1 error (missing keys or placeholder mismatches)"));
    assert!(test.root().join("translation_audit.json").exists());

    Ok(())
}

#[test]
fn test_audit_strict_passes_when_clean() -> Result<()> {
    let test = CliTest::with_locales(r#"{"a": "Save"}"#, r#"{"a": "儲存"}"#)?;

    let output = test.audit_command().arg("--strict").output()?;

    assert_eq!(output.status.code(), Some(0));

    Ok(())
}

#[test]
fn test_audit_missing_input_is_fatal() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("_en.json", r#"{"a": "A"}"#)?;

    let output = test.audit_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error: Failed to read JSON file"));
    assert!(stdout(&output).is_empty());
    assert!(!test.root().join("translation_audit.json").exists());
    assert!(!test.root().join("translation_audit.md").exists());

    Ok(())
}

#[test]
fn test_audit_malformed_input_is_fatal() -> Result<()> {
    let test = CliTest::with_locales(r#"{"a": "A"}"#, r#"{"a": "A",}"#)?;

    let output = test.audit_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to parse JSON file"));
    assert!(!test.root().join("translation_audit.json").exists());

    Ok(())
}

#[test]
fn test_audit_with_flags() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/en.json", r#"{"a": "Save", "b": "Open"}"#)?;
    test.write_file("locales/ja.json", r#"{"a": "Save"}"#)?;

    let output = test
        .audit_command()
        .args(["--reference", "locales/en.json"])
        .args(["--translated", "locales/ja.json"])
        .args(["--json-out", "out/audit.json"])
        .args(["--markdown-out", "out/audit.md"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).ends_with("WROTE out/audit.json and out/audit.md\n"));

    let markdown = test.read_file("out/audit.md")?;
    assert!(markdown.contains("## Missing keys in ja (first 200)\n\n- b\n"));

    Ok(())
}

#[test]
fn test_audit_with_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".transauditrc.json",
        r#"{
            "reference": "i18n/en.json",
            "translated": "i18n/fr.json",
            "auditMarkdown": "reports/audit.md",
            "reportLimit": 1
        }"#,
    )?;
    test.write_file("i18n/en.json", r#"{"a": "A", "b": "B", "c": "C"}"#)?;
    test.write_file("i18n/fr.json", r#"{}"#)?;

    let output = test.audit_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let markdown = test.read_file("reports/audit.md")?;
    assert!(markdown.contains("## Missing keys in fr (first 1)\n\n- a\n\n"));
    assert!(!markdown.contains("- b\n"));

    let report = test.read_json("translation_audit.json")?;
    assert_eq!(report["missing_keys"], json!(["a", "b", "c"]));

    Ok(())
}

#[test]
fn test_audit_verbose_prints_rule_table() -> Result<()> {
    let test = CliTest::with_locales(EN, ZH)?;

    let output = test.audit_command().arg("-v").output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), EXPECTED_STDOUT);
    let err = stderr(&output);
    assert!(err.contains("8 reference leaves, 7 zh-tw leaves"));
    assert!(err.contains("mostly-ascii"));

    Ok(())
}

#[test]
fn test_audit_ignore_case() -> Result<()> {
    let test = CliTest::with_locales(
        r#"{"Menu": {"Save": "Save", "Quit": "Quit"}}"#,
        r#"{"menu": {"save": "儲存"}, "Extra": "多"}"#,
    )?;

    let output = test.audit_command().arg("--ignore-case").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let report = test.read_json("translation_audit.json")?;
    assert_eq!(report["missing_keys"], json!(["Menu.Quit"]));
    assert_eq!(report["extra_keys"], json!(["Extra"]));

    Ok(())
}

#[test]
fn test_audit_from_subdirectory_uses_config_dir() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".transauditrc.json",
        r#"{"reference": "i18n/en.json", "translated": "i18n/zh-tw.json"}"#,
    )?;
    test.write_file("i18n/en.json", r#"{"a": "A", "b": "B"}"#)?;
    test.write_file("i18n/zh-tw.json", r#"{"a": "甲"}"#)?;
    test.write_file("app/.keep", "")?;

    let output = test
        .audit_command()
        .current_dir(test.root().join("app"))
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(test.root().join("translation_audit.json").exists());
    assert!(!test.root().join("app/translation_audit.json").exists());
    let report = test.read_json("translation_audit.json")?;
    assert_eq!(report["missing_keys"], json!(["b"]));

    Ok(())
}

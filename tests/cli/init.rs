use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout, theme_snapshot};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["snapshot"], "./variables.json");
    assert_eq!(parsed["format"], "cssVar");
    assert_eq!(parsed["valueFormat"], "rawValue");
    assert_eq!(parsed["selector"], ":root");

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
    assert_eq!(stdout(&output), "\u{2713} Created .varportrc.json\n");
    assert!(test.root().join(".varportrc.json").exists());

    let content = test.read_file(".varportrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".varportrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "Error: .varportrc.json already exists\n");
    assert_eq!(test.read_file(".varportrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_json("variables.json", &theme_snapshot())?;

    let output = test
        .export_command()
        .args(["-c", "Theme", "-m", "Light"])
        .output()?;
    assert!(
        output.status.success(),
        "Export should work with initialized config. stderr: {}",
        stderr(&output)
    );

    Ok(())
}

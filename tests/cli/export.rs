use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, stderr, stdout, theme_snapshot};

#[test]
fn test_export_css() -> Result<()> {
    let test = CliTest::with_theme()?;

    let output = test
        .export_command()
        .args(["--collection", "Theme", "--mode", "Light"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    insta::assert_snapshot!(stdout(&output), @r"
    :root {
      --spacing-small: 4;
      --color-brand-primary: rgba(255, 0, 0, 1);
      --font-family: 'Inter';
    }
    ");
    assert_eq!(stderr(&output), "\u{2713} Exported 3 tokens.\n");

    Ok(())
}

#[test]
fn test_export_css_alias_names() -> Result<()> {
    let test = CliTest::with_theme()?;

    let output = test
        .export_command()
        .args(["-c", "Theme", "-m", "Dark", "--value-format", "alias-name"])
        .args(["--selector", "[data-theme=dark]"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    insta::assert_snapshot!(stdout(&output), @r"
    [data-theme=dark] {
      --spacing-small: 4;
      --color-brand-primary: var(--gray-900);
      --font-family: 'Inter';
    }
    ");

    Ok(())
}

#[test]
fn test_export_camel_case() -> Result<()> {
    let test = CliTest::with_theme()?;

    let output = test
        .export_command()
        .args(["-c", "Theme", "-m", "Light", "--format", "camelCase"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    let document: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(
        document,
        json!({
            "spacingSmall": 4,
            "colorBrandPrimary": {"r": 1.0, "g": 0.0, "b": 0.0, "a": 1.0},
            "fontFamily": "Inter"
        })
    );
    let keys: Vec<_> = document.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["spacingSmall", "colorBrandPrimary", "fontFamily"]);

    Ok(())
}

#[test]
fn test_export_dot_notation() -> Result<()> {
    let test = CliTest::with_theme()?;

    let output = test
        .export_command()
        .args(["-c", "Theme", "-m", "Light", "--format", "dot-notation"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    insta::assert_snapshot!(stdout(&output), @r#"
    {
      "spacing": {
        "small": "4"
      },
      "color": {
        "brand": {
          "primary": "rgba(255, 0, 0, 1)"
        }
      },
      "font": {
        "family": "Inter"
      }
    }
    "#);
    assert_eq!(stderr(&output), "\u{2713} Exported 3 tokens.\n");

    Ok(())
}

#[test]
fn test_export_w3c_alias_names() -> Result<()> {
    let test = CliTest::with_theme()?;

    let output = test
        .export_command()
        .args(["-c", "Theme", "-m", "Light", "-f", "w3c"])
        .args(["--value-format", "aliasName"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    let document: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(
        document["color"]["brand"]["primary"],
        json!({"value": "{red.500}", "original": "color/brand/primary"})
    );
    assert_eq!(
        document["spacing"]["small"],
        json!({"value": 4, "original": "spacing/small"})
    );

    Ok(())
}

#[test]
fn test_export_minimized_set() -> Result<()> {
    let test = CliTest::new()?;
    test.write_json(
        "variables.json",
        &json!({
            "variableCollections": {
                "c1": {
                    "id": "c1",
                    "name": "Palette",
                    "defaultModeId": "m1",
                    "modes": [{"modeId": "m1", "name": "Default"}],
                    "variableIds": ["a", "b", "c"]
                }
            },
            "variables": {
                "a": {"id": "a", "name": "color/brand/primary", "valuesByMode": {"m1": "#FF0000"}},
                "b": {"id": "b", "name": "color/accent/main", "valuesByMode": {"m1": "#FF0000"}},
                "c": {"id": "c", "name": "color/text", "valuesByMode": {"m1": "#111111"}}
            }
        }),
    )?;

    let output = test
        .export_command()
        .args(["-c", "Palette", "-m", "Default", "-f", "minimizedSet"])
        .args(["--structure-mode", "Default", "--value-mode", "Default"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    let document: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(
        document,
        json!({"--color-accent-main": "#FF0000", "--color-text": "#111111"})
    );
    assert_eq!(stderr(&output), "\u{2713} Exported 2 tokens.\n");

    Ok(())
}

#[test]
fn test_minimized_set_without_modes() -> Result<()> {
    let test = CliTest::with_theme()?;

    let output = test
        .export_command()
        .args(["-c", "Theme", "-m", "Light", "-f", "minimized-set"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert!(
        stderr(&output)
            .contains("Please select a structure mode and value mode for the minimized set.")
    );

    Ok(())
}

#[test]
fn test_export_without_selection() -> Result<()> {
    let test = CliTest::with_theme()?;

    let output = test.export_command().output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Please select a collection and mode to export."));

    let output = test
        .export_command()
        .args(["-c", "Theme", "-m", "Sepia"])
        .output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Please select a collection and mode to export."));

    Ok(())
}

#[test]
fn test_export_to_file() -> Result<()> {
    let test = CliTest::with_theme()?;

    let output = test
        .export_command()
        .args(["-c", "Theme", "-m", "Light", "--output", "tokens.css"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("Written to tokens.css"));
    assert!(
        test.read_file("tokens.css")?
            .starts_with(":root {\n  --spacing-small: 4;\n")
    );

    Ok(())
}

#[test]
fn test_skipped_variables_are_reported() -> Result<()> {
    let test = CliTest::new()?;
    let mut snapshot = theme_snapshot();
    snapshot["meta"]["variables"]["VariableID:2:4"] = json!({
        "id": "VariableID:2:4",
        "name": "button/background",
        "variableCollectionId": "VariableCollectionId:2:0",
        "valuesByMode": {"2:0": {"type": "VARIABLE_ALIAS", "id": "VariableID:7:7"}}
    });
    snapshot["meta"]["variableCollections"]["VariableCollectionId:2:0"]["variableIds"]
        .as_array_mut()
        .unwrap()
        .push(json!("VariableID:2:4"));
    test.write_json("variables.json", &snapshot)?;

    let output = test
        .export_command()
        .args(["-c", "Theme", "-m", "Light"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(!stdout(&output).contains("--button-background"));
    insta::assert_snapshot!(stderr(&output), @r"
    ✓ Exported 3 tokens.
    warning: 1 variable(s) could not be resolved (use -v for details)
    ");

    let output = test
        .export_command()
        .args(["-c", "Theme", "-m", "Light", "-v"])
        .output()?;
    assert!(stderr(&output).contains(
        "warning: skipped 'button/background' aliases a variable that could not be fetched (VariableID:7:7)"
    ));

    Ok(())
}

#[test]
fn test_unreadable_variable_is_left_out() -> Result<()> {
    let test = CliTest::new()?;
    let mut snapshot = theme_snapshot();
    snapshot["meta"]["variables"]["VariableID:2:5"] = json!({
        "id": "VariableID:2:5",
        "name": "broken/value",
        "valuesByMode": {"2:0": null}
    });
    snapshot["meta"]["variableCollections"]["VariableCollectionId:2:0"]["variableIds"]
        .as_array_mut()
        .unwrap()
        .push(json!("VariableID:2:5"));
    test.write_json("variables.json", &snapshot)?;

    let output = test
        .export_command()
        .args(["-c", "Theme", "-m", "Light"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("--spacing-small: 4;"));
    assert!(!stdout(&output).contains("--broken-value"));
    let stderr = stderr(&output);
    assert!(stderr.contains("dropping unreadable variables entry"));
    assert!(stderr.contains("\u{2713} Exported 3 tokens."));

    Ok(())
}

#[test]
fn test_config_supplies_defaults() -> Result<()> {
    let test = CliTest::new()?;
    test.write_json("design/vars.json", &theme_snapshot())?;
    test.write_file(
        ".varportrc.json",
        r#"{ "snapshot": "design/vars.json", "format": "camelCase" }"#,
    )?;

    let output = test
        .export_command()
        .args(["-c", "Theme", "-m", "Light"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    let document: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(document["spacingSmall"], json!(4));

    let output = test
        .export_command()
        .args(["-c", "Theme", "-m", "Light", "-f", "css-var"])
        .output()?;
    assert!(stdout(&output).starts_with(":root {"));

    Ok(())
}

#[test]
fn test_missing_snapshot_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .export_command()
        .args(["-c", "Theme", "-m", "Light"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to read snapshot file"));

    Ok(())
}

#[test]
fn test_unknown_format_is_rejected() -> Result<()> {
    let test = CliTest::with_theme()?;

    let output = test
        .export_command()
        .args(["-c", "Theme", "-m", "Light", "-f", "yaml"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("invalid value 'yaml'"));

    Ok(())
}

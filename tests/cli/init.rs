use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, run};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["localeRoot"], "./locale");
    assert_eq!(parsed["i18nFunctionName"], "i18next.t");
    assert!(parsed["scanFileExtensions"].is_array());
    assert!(
        parsed.get("openAiApiKey").is_none(),
        "Config should not contain an API key"
    );
    assert!(
        content.contains("\n  \""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let result = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(result.code, 0);
    insta::assert_snapshot!(result.stdout.trim_end(), @"✓ Created .i18nscanrc.json");
    assert!(test.root().join(".i18nscanrc.json").exists());

    let content = test.read_file(".i18nscanrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18nscanrc.json", "{}")?;

    let result = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(result.code, 1);
    assert_eq!(result.stderr, "Error: .i18nscanrc.json already exists\n");
    assert_eq!(test.read_file(".i18nscanrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("src/app.js", "const a = i18next.t('default.save');\n")?;
    test.write_file("locale/default.json", "{ \"save\": \"Save\" }")?;

    let result = run(test.unused_command())?;
    assert_eq!(
        result.code, 0,
        "unused should work with initialized config. stderr: {}",
        result.stderr
    );

    Ok(())
}

use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, run};

const PAGE: &str = "const a = 1;\nconst title = 'Account settings';\nexport default title;\n";

#[test]
fn test_extract_dry_run() -> Result<()> {
    let test = CliTest::with_file("src/app.js", PAGE)?;

    let result = run({
        let mut cmd = test.extract_command();
        cmd.args(["--file", "src/app.js", "--line", "2"]);
        cmd
    })?;

    assert_eq!(result.code, 0);
    assert!(result.stdout.contains("- const title = 'Account settings';"));
    assert!(
        result
            .stdout
            .contains("+ const title = i18next.t('default.account_settings');")
    );
    assert!(result.stdout.contains("would add key account_settings"));
    assert!(result.stdout.contains("Run with --apply"));
    assert_eq!(test.read_file("src/app.js")?, PAGE);
    assert!(!test.root().join("locale/default.json").exists());

    Ok(())
}

#[test]
fn test_extract_apply() -> Result<()> {
    let test = CliTest::with_file("src/app.js", PAGE)?;
    test.write_file("locale/default.json", "{\n  \"save\": \"Save\"\n}\n")?;

    let result = run({
        let mut cmd = test.extract_command();
        cmd.args([
            "--file",
            "src/app.js",
            "--line",
            "2",
            "--key",
            "settings.title",
            "--apply",
        ]);
        cmd
    })?;

    assert_eq!(result.code, 0);
    assert!(
        result
            .stdout
            .contains("Extracted \"Account settings\" as default.settings.title")
    );
    assert_eq!(
        test.read_file("src/app.js")?,
        "const a = 1;\nconst title = i18next.t('default.settings.title');\nexport default title;\n"
    );

    let locale: Value = serde_json::from_str(&test.read_file("locale/default.json")?)?;
    assert_eq!(locale["save"], "Save");
    assert_eq!(locale["settings"]["title"], "Account settings");

    Ok(())
}

#[test]
fn test_extract_reuses_existing_key() -> Result<()> {
    let test = CliTest::with_file("src/app.js", PAGE)?;
    test.write_file(
        "locale/default.json",
        "{\n  \"account\": \"Account settings\"\n}\n",
    )?;

    let result = run({
        let mut cmd = test.extract_command();
        cmd.args(["--file", "src/app.js", "--line", "2", "--reuse", "--apply"]);
        cmd
    })?;

    assert_eq!(result.code, 0);
    assert!(result.stdout.contains("reusing key account"));
    assert!(
        test.read_file("src/app.js")?
            .contains("const title = i18next.t('default.account');")
    );

    Ok(())
}

#[test]
fn test_extract_key_conflict_is_an_error() -> Result<()> {
    let test = CliTest::with_file("src/app.js", PAGE)?;
    test.write_file("locale/default.json", "{\n  \"title\": \"Dashboard\"\n}\n")?;

    let result = run({
        let mut cmd = test.extract_command();
        cmd.args([
            "--file", "src/app.js", "--line", "2", "--key", "title", "--apply",
        ]);
        cmd
    })?;

    assert_eq!(result.code, 2);
    assert!(result.stderr.contains("already taken"));
    assert_eq!(test.read_file("src/app.js")?, PAGE);

    Ok(())
}

#[test]
fn test_extract_line_without_text() -> Result<()> {
    let test = CliTest::with_file("src/app.js", PAGE)?;

    let result = run({
        let mut cmd = test.extract_command();
        cmd.args(["--file", "src/app.js", "--line", "1"]);
        cmd
    })?;

    assert_eq!(result.code, 2);
    assert!(result.stderr.contains("No unlocalized text found on line 1"));

    Ok(())
}

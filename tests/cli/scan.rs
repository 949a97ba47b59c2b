use anyhow::Result;

use crate::{CliTest, run};

const SETTINGS_PAGE: &str = "const a = 1;\nconst title = 'Account settings';\nexport default title;\n";

#[test]
fn test_scan_reports_unlocalized_text() -> Result<()> {
    let test = CliTest::with_file("src/app.js", SETTINGS_PAGE)?;

    let result = run(test.scan_command())?;

    assert_eq!(result.code, 1);
    insta::assert_snapshot!(result.stdout.trim_end(), @r#"
error: "Account settings"  unlocalized-text
  --> ./src/app.js:2:15
  |
2 | const title = 'Account settings';
  |               ^
  = hint: wrap the text in a translation call, or run `i18nscan extract`

✘ 1 problem (1 error, 0 warnings)
"#);

    Ok(())
}

#[test]
fn test_scan_clean_project() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.js",
        "const text = i18next.t('key.to.translate');\n",
    )?;

    let result = run(test.scan_command())?;

    assert_eq!(result.code, 0);
    assert_eq!(
        result.stdout,
        "\u{2713} Checked 1 source file - no issues found\n"
    );

    Ok(())
}

#[test]
fn test_scan_jsx_tag_text() -> Result<()> {
    let test = CliTest::with_file(
        "src/components/Button.jsx",
        r#"
      <Button onClick={handleClick}>
        Click me
      </Button>
    "#,
    )?;

    let result = run(test.scan_command())?;

    assert_eq!(result.code, 1);
    assert!(result.stdout.contains("error: \"Click me\"  unlocalized-text"));
    assert!(result.stdout.contains("--> ./src/components/Button.jsx:3:9"));

    Ok(())
}

#[test]
fn test_scan_path_argument_limits_files() -> Result<()> {
    let test = CliTest::with_file("src/settings.js", SETTINGS_PAGE)?;
    test.write_file("src/about.js", "const heading = 'About this project';\n")?;

    let result = run({
        let mut cmd = test.scan_command();
        cmd.arg("src/about.js");
        cmd
    })?;

    assert_eq!(result.code, 1);
    assert!(result.stdout.contains("About this project"));
    assert!(!result.stdout.contains("Account settings"));

    Ok(())
}

#[test]
fn test_scan_missing_path_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let result = run({
        let mut cmd = test.scan_command();
        cmd.arg("src/missing.js");
        cmd
    })?;

    assert_eq!(result.code, 2);
    assert!(result.stderr.contains("does not exist"));

    Ok(())
}

#[test]
fn test_scan_skips_ignored_and_test_files() -> Result<()> {
    let test = CliTest::with_file("src/settings.js", SETTINGS_PAGE)?;
    test.write_file(
        ".i18nscanrc.json",
        r#"{ "ignores": ["**/generated/**"] }"#,
    )?;
    test.write_file("src/generated/strings.js", "const a = 'Generated label text';\n")?;
    test.write_file("src/settings.test.js", "const b = 'Expected label text';\n")?;
    test.write_file("node_modules/lib/index.js", "const c = 'Vendored label text';\n")?;

    let result = run(test.scan_command())?;

    assert_eq!(result.code, 1);
    assert!(result.stdout.contains("Account settings"));
    assert!(!result.stdout.contains("Generated label text"));
    assert!(!result.stdout.contains("Expected label text"));
    assert!(!result.stdout.contains("Vendored label text"));

    Ok(())
}

#[test]
fn test_scan_ignore_texts() -> Result<()> {
    let test = CliTest::with_file("src/settings.js", SETTINGS_PAGE)?;
    test.write_file(
        ".i18nscanrc.json",
        r#"{ "ignoreTexts": ["Account settings"] }"#,
    )?;

    let result = run(test.scan_command())?;

    assert_eq!(result.code, 0);

    Ok(())
}

#[test]
fn test_scan_ai_without_api_key_warns() -> Result<()> {
    let test = CliTest::with_file("src/settings.js", SETTINGS_PAGE)?;

    let result = run({
        let mut cmd = test.scan_command();
        cmd.arg("--ai");
        cmd
    })?;

    assert_eq!(result.code, 1);
    assert!(result.stderr.contains("no OpenAI API key configured"));
    assert!(result.stdout.contains("Account settings"));
    assert!(!result.stdout.contains("confirmed by AI review"));

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file("src/settings.js", SETTINGS_PAGE)?;
    test.write_file(".i18nscanrc.json", r#"{ "ignoredProps": ["(unclosed"] }"#)?;

    let result = run(test.scan_command())?;

    assert_eq!(result.code, 2);
    assert!(result.stderr.starts_with("Error:"));

    Ok(())
}

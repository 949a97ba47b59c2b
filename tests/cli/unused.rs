use anyhow::Result;

use crate::{CliTest, run};

const LOCALE: &str = r#"{
  "save": "Save",
  "cancel": "Cancel",
  "menu": {
    "open": "Open",
    "close": "Close"
  }
}
"#;

fn project() -> Result<CliTest> {
    let test = CliTest::with_file("locale/default.json", LOCALE)?;
    test.write_file(
        "src/toolbar.js",
        "i18next.t('default.save');\nconst label = i18next.t(`default.menu.${action}`);\n",
    )?;
    Ok(test)
}

#[test]
fn test_unused_keys_are_reported() -> Result<()> {
    let test = project()?;

    let result = run(test.unused_command())?;

    assert_eq!(result.code, 1);
    assert!(result.stdout.contains("warning: \"default.cancel\"  unused-key"));
    assert!(result.stdout.contains("--> ./locale/default.json:3:"));
    assert!(result.stdout.contains("= note: (\"Cancel\")"));
    assert!(!result.stdout.contains("default.save\""));
    assert!(!result.stdout.contains("default.menu.open"));
    assert!(result.stdout.contains("1 problem (0 errors, 1 warning)"));

    Ok(())
}

#[test]
fn test_all_keys_used() -> Result<()> {
    let test = project()?;
    test.write_file("src/dialog.js", "i18next.t('default.cancel');\n")?;

    let result = run(test.unused_command())?;

    assert_eq!(result.code, 0);
    assert_eq!(
        result.stdout,
        "\u{2713} Checked 2 source files, 1 locale file - no issues found\n"
    );

    Ok(())
}

#[test]
fn test_malformed_locale_file_is_a_parse_error() -> Result<()> {
    let test = project()?;
    test.write_file("src/dialog.js", "i18next.t('default.cancel');\n")?;
    test.write_file("locale/broken.json", "{ \"a\": ")?;

    let result = run(test.unused_command())?;

    assert_eq!(result.code, 1);
    assert!(result.stdout.contains("parse-error"));
    assert!(result.stdout.contains("--> ./locale/broken.json"));
    assert!(result.stderr.contains("1 file(s) could not be read or parsed"));

    Ok(())
}

#[test]
fn test_missing_locale_root_is_a_hinted_error() -> Result<()> {
    let test = CliTest::with_file("src/app.js", "i18next.t('default.save');\n")?;

    let result = run(test.unused_command())?;

    assert_eq!(result.code, 2);
    assert!(result.stderr.contains("Locale directory './locale' does not exist"));
    assert!(result.stderr.contains("--locale-root"));

    Ok(())
}

#[test]
fn test_locale_root_override() -> Result<()> {
    let test = CliTest::with_file("i18n/default.json", r#"{ "save": "Save" }"#)?;
    test.write_file("src/app.js", "i18next.t('default.save');\n")?;

    let result = run({
        let mut cmd = test.unused_command();
        cmd.args(["--locale-root", "i18n"]);
        cmd
    })?;

    assert_eq!(result.code, 0);

    Ok(())
}

use anyhow::Result;

use crate::{CliTest, run};

const LOCALE: &str = r#"{
  "greeting": "hello wrold",
  "actions": {
    "save": "save changes"
  }
}
"#;

/// Project with a tiny Hunspell dictionary under `dict/`.
fn project() -> Result<CliTest> {
    let test = CliTest::with_file("locale/default.json", LOCALE)?;
    test.write_file("dict/en_US.aff", "SET UTF-8\n")?;
    test.write_file("dict/en_US.dic", "4\nhello\nworld\nsave\nchanges\n")?;
    test.write_file(".i18nscanrc.json", r#"{ "typoDictionary": "dict/en_US" }"#)?;
    Ok(test)
}

#[test]
fn test_typos_are_reported() -> Result<()> {
    let test = project()?;

    let result = run(test.typos_command())?;

    assert_eq!(result.code, 1);
    assert!(result.stdout.contains("warning: \"wrold\"  typo"));
    assert!(result.stdout.contains("--> ./locale/default.json:2:"));
    assert!(result.stdout.contains("= note: greeting: \"hello wrold\""));
    assert!(result.stdout.contains("1 problem (0 errors, 1 warning)"));

    Ok(())
}

#[test]
fn test_cspell_words_are_ignored() -> Result<()> {
    let test = project()?;
    test.write_file("cspell.json", r#"{ "words": ["Wrold"] }"#)?;

    let result = run(test.typos_command())?;

    assert_eq!(result.code, 0);
    assert_eq!(
        result.stdout,
        "\u{2713} Checked 1 locale file - no issues found\n"
    );

    Ok(())
}

#[test]
fn test_cspell_flag_words_are_reported() -> Result<()> {
    let test = project()?;
    test.write_file(
        "cspell.json",
        "{\n  // words the team never wants in the UI\n  \"words\": [\"wrold\"],\n  \"flagWords\": [\"changes\"]\n}\n",
    )?;

    let result = run(test.typos_command())?;

    assert_eq!(result.code, 1);
    assert!(result.stdout.contains("warning: \"changes\"  typo"));
    assert!(result.stdout.contains("--> ./locale/default.json:4:"));
    assert!(!result.stdout.contains("\"wrold\""));

    Ok(())
}

#[test]
fn test_dictionary_flag_overrides_config() -> Result<()> {
    let test = project()?;
    test.write_file(".i18nscanrc.json", r#"{ "typoDictionary": "missing/en_US" }"#)?;

    let mut cmd = test.typos_command();
    cmd.args(["--dictionary", "dict/en_US"]);
    let result = run(cmd)?;

    assert_eq!(result.code, 1);
    assert!(result.stdout.contains("warning: \"wrold\"  typo"));

    Ok(())
}

#[test]
fn test_missing_dictionary_is_an_error() -> Result<()> {
    let test = project()?;
    test.write_file(".i18nscanrc.json", r#"{ "typoDictionary": "missing/en_US" }"#)?;

    let result = run(test.typos_command())?;

    assert_eq!(result.code, 2);
    assert!(result.stderr.contains("Failed to read dictionary file"));

    Ok(())
}

use anyhow::Result;

use crate::{CliTest, run};

#[test]
fn test_keys_lists_used_keys() -> Result<()> {
    let test = CliTest::with_file(
        "src/toolbar.js",
        "i18next.t('default.save');\nconst label = i18next.t(`status.${code}`);\n",
    )?;

    let result = run({
        let mut cmd = test.command();
        cmd.arg("keys");
        cmd
    })?;

    assert_eq!(result.code, 0);
    insta::assert_snapshot!(result.stdout.trim_end(), @r"
default.save
status.*
✓ 2 keys in use
");

    Ok(())
}

#[test]
fn test_keys_for_one_file() -> Result<()> {
    let test = CliTest::with_file("src/a.js", "i18next.t('nav.home');\n")?;
    test.write_file("src/b.js", "i18next.t('nav.about');\n")?;

    let result = run({
        let mut cmd = test.command();
        cmd.args(["keys", "src/b.js"]);
        cmd
    })?;

    assert_eq!(result.code, 0);
    assert!(result.stdout.contains("nav.about"));
    assert!(!result.stdout.contains("nav.home"));

    Ok(())
}

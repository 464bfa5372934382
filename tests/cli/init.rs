use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;
    let mut cmd = test.command();
    cmd.arg("init");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        "✓ Created .i18nizerc.json\n  baseDir: views/articles\n  files: edit.ejs, detail.ejs, index.ejs, create.ejs\n  languagesFile: utils/languages.js\n"
    );
    assert!(test.root().join(".i18nizerc.json").exists());

    let config: Value = serde_json::from_str(&test.read_file(".i18nizerc.json")?)?;
    assert_eq!(config["baseDir"], "views/articles");
    assert_eq!(config["files"].as_array().map(Vec::len), Some(4));
    assert_eq!(config["languagesFile"], "utils/languages.js");
    Ok(())
}

#[test]
fn test_init_refuses_existing_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18nizerc.json", "{}")?;
    let mut cmd = test.command();
    cmd.arg("init");
    let (code, _, stderr) = run(cmd)?;

    assert_eq!(code, 1);
    assert!(stderr.contains("Error: .i18nizerc.json already exists"));
    assert_eq!(test.read_file(".i18nizerc.json")?, "{}");
    Ok(())
}

use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_keys_json() -> Result<()> {
    let test = CliTest::new()?;
    let mut cmd = test.command();
    cmd.arg("keys");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    let json: Value = serde_json::from_str(&stdout)?;
    let map = json.as_object().expect("keys output should be a JSON object");
    assert_eq!(map.len(), 123);
    assert_eq!(map["editArticle"], "แก้ไขบทความ");
    assert_eq!(map["thai"], "ไทย (Thai)");
    // Insertion order, not substitution order
    assert_eq!(map.keys().next().map(String::as_str), Some("editArticle"));
    Ok(())
}

#[test]
fn test_keys_js_includes_extra_translations() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".i18nizerc.json",
        r#"{"extraTranslations": {"อ่านต่อ": "readMore"}}"#,
    )?;
    let mut cmd = test.command();
    cmd.args(["keys", "--format", "js"]);
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(stdout.starts_with("        editArticle: 'แก้ไขบทความ',\n"));
    assert!(stdout.contains("        save: 'บันทึก',\n"));
    assert!(stdout.ends_with("        readMore: 'อ่านต่อ',\n"));
    Ok(())
}

#[test]
fn test_keys_warns_on_shared_key() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".i18nizerc.json",
        r#"{"extraTranslations": {"บันทึกร่าง": "save"}}"#,
    )?;
    let mut cmd = test.command();
    cmd.args(["keys", "--format", "js"]);
    let (code, stdout, stderr) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(stdout.contains("        save: 'บันทึกร่าง',\n"));
    assert!(!stdout.contains("save: 'บันทึก',"));
    assert!(stderr.contains("lookup key shared by two source texts"));
    Ok(())
}

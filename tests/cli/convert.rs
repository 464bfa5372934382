use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

const EDIT_EJS: &str = r#"<h1 class="text-2xl">แก้ไขบทความ</h1>
<input type="text" placeholder="สรุปสั้นๆ ของบทความ...">
<button><i class="fas fa-save"></i>บันทึก
</button>
<script>
  showToast('บันทึกการแก้ไขเรียบร้อยแล้ว');
  if (!confirm('คุณแน่ใจหรือไม่ที่จะลบบทความนี้? การกระทำนี้ไม่สามารถยกเลิกได้')) return;
</script>
"#;

const EDIT_EJS_CONVERTED: &str = r#"<h1 class="text-2xl"><%=  t('editArticle') %></h1>
<input type="text" placeholder="<%= t('briefSummaryOfArticle') %>">
<button><i class="fas fa-save"></i><%= t('save') %>
</button>
<script>
  showToast('<%= t('changesSavedSuccessfully') %>');
  if (!confirm('<%= t('confirmDeleteArticle') %>')) return;
</script>
"#;

fn setup_articles(test: &CliTest) -> Result<()> {
    test.write_file("views/articles/edit.ejs", EDIT_EJS)?;
    test.write_file("views/articles/detail.ejs", "<p>English only</p>\n")?;
    test.write_file(
        "views/articles/create.ejs",
        "<option value=\"th\">ไทย (Thai)</option>\n",
    )?;
    Ok(())
}

#[test]
fn test_convert_all_files_missing() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Starting Article files i18n conversion...
    ============================================================
    ! views/articles/edit.ejs: File not found
    ! views/articles/detail.ejs: File not found
    ! views/articles/index.ejs: File not found
    ! views/articles/create.ejs: File not found
    ============================================================
    Conversion complete! 0 files modified.

    Next step: Add translations to utils/languages.js

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_convert_rewrites_templates() -> Result<()> {
    let test = CliTest::new()?;
    setup_articles(&test)?;

    assert_cmd_snapshot!(test.convert_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Starting Article files i18n conversion...
    ============================================================
    ✓ views/articles/edit.ejs: 5 replacements made
    ✗ views/articles/detail.ejs: No changes needed
    ! views/articles/index.ejs: File not found
    ✓ views/articles/create.ejs: 1 replacements made
    ============================================================
    Conversion complete! 2 files modified.

    Next step: Add translations to utils/languages.js

    ----- stderr -----
    ");

    assert_eq!(test.read_file("views/articles/edit.ejs")?, EDIT_EJS_CONVERTED);
    assert_eq!(
        test.read_file("views/articles/detail.ejs")?,
        "<p>English only</p>\n"
    );
    assert_eq!(
        test.read_file("views/articles/create.ejs")?,
        "<option value=\"th\"><%=  t('thai') %></option>\n"
    );
    Ok(())
}

#[test]
fn test_convert_second_run_changes_nothing() -> Result<()> {
    let test = CliTest::new()?;
    setup_articles(&test)?;

    let (code, _, _) = run(test.convert_command())?;
    assert_eq!(code, 0);

    let (code, stdout, _) = run(test.convert_command())?;
    assert_eq!(code, 0);
    assert!(stdout.contains("✗ views/articles/edit.ejs: No changes needed"));
    assert!(stdout.contains("✗ views/articles/create.ejs: No changes needed"));
    assert!(stdout.contains("Conversion complete! 0 files modified."));
    assert_eq!(test.read_file("views/articles/edit.ejs")?, EDIT_EJS_CONVERTED);
    Ok(())
}

#[test]
fn test_convert_dry_run_leaves_files() -> Result<()> {
    let test = CliTest::new()?;
    setup_articles(&test)?;

    let mut cmd = test.convert_command();
    cmd.arg("--dry-run");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(stdout.contains("~ views/articles/edit.ejs: 5 replacements would be made"));
    assert!(stdout.contains("Dry run complete! 2 files would be modified."));
    assert!(stdout.contains("Run without --dry-run to write these changes."));
    assert!(!stdout.contains("Next step"));
    assert_eq!(test.read_file("views/articles/edit.ejs")?, EDIT_EJS);
    Ok(())
}

#[test]
fn test_convert_verbose_lists_rule_hits() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "views/articles/index.ejs",
        "<span>ล่าสุด</span>\n<b>ล่าสุด</b>\n",
    )?;

    let mut cmd = test.convert_command();
    cmd.arg("--verbose");
    let (code, stdout, stderr) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(stdout.contains("✓ views/articles/index.ejs: 1 replacements made"));
    assert!(stdout.contains("    - \"ล่าสุด\" -> t('latest') [element-text, 2x]"));
    // Debug events for each replacement go to stderr
    assert!(stderr.contains("replaced"));
    assert!(stderr.contains("occurrences"));
    Ok(())
}

#[test]
fn test_convert_base_dir_flag() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("templates/edit.ejs", "<h2>สถิติ</h2>\n")?;

    let mut cmd = test.command();
    cmd.args(["--base-dir", "templates"]);
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(stdout.contains("✓ templates/edit.ejs: 1 replacements made"));
    assert!(stdout.contains("! templates/detail.ejs: File not found"));
    assert_eq!(
        test.read_file("templates/edit.ejs")?,
        "<h2><%=  t('stats') %></h2>\n"
    );
    Ok(())
}

#[test]
fn test_convert_with_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".i18nizerc.json",
        r#"{
            "baseDir": "views/blog",
            "files": ["post.ejs"],
            "extraTranslations": {"อ่านต่อ": "readMore"}
        }"#,
    )?;
    test.write_file(
        "views/blog/post.ejs",
        "<a href=\"#\"><i class=\"fas fa-book\"></i>อ่านต่อ</a>\n",
    )?;

    let (code, stdout, _) = run(test.command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("✓ views/blog/post.ejs: 1 replacements made"));
    assert!(!stdout.contains("edit.ejs"));
    assert_eq!(
        test.read_file("views/blog/post.ejs")?,
        "<a href=\"#\"><i class=\"fas fa-book\"></i><%=  t('readMore') %></a>\n"
    );
    Ok(())
}

#[test]
fn test_convert_invalid_utf8_aborts() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("views/articles/edit.ejs", [0xffu8, 0xfe, 0x00])?;
    test.write_file("views/articles/detail.ejs", "<p>แชร์</p>\n")?;

    let (code, stdout, stderr) = run(test.command())?;

    assert_eq!(code, 2);
    assert!(stderr.contains("Error: Failed to read file"));
    assert!(!stdout.contains("detail.ejs"));
    assert_eq!(test.read_file("views/articles/detail.ejs")?, "<p>แชร์</p>\n");
    Ok(())
}

#[test]
fn test_convert_invalid_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18nizerc.json", r#"{"files": ["*.ejs"]}"#)?;

    let (code, _, stderr) = run(test.command())?;

    assert_eq!(code, 2);
    assert!(stderr.contains("Wildcards are not supported"));
    Ok(())
}

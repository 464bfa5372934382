//! Detection of Thai text left behind after conversion.
//!
//! A line counts as converted once it calls `t(...)`. Line comments are
//! ignored, as is anything after `//` on a code line.

use std::{fs, path::Path, sync::LazyLock};

use anyhow::{Context, Result};
use regex::Regex;

use super::table::TranslationTable;
use crate::issues::{SourceContext, UntranslatedTextIssue};

/// A run of Thai characters, allowing inner spaces between words.
static THAI_RUN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\u{0E01}-\u{0E59}]+(?:[ \t]+[\u{0E01}-\u{0E59}]+)*")
        .expect("Invalid Thai run regex")
});

static LOOKUP_CALL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bt\(").expect("Invalid lookup call regex"));

pub fn scan_text(
    file_path: &str,
    content: &str,
    table: &TranslationTable,
) -> Vec<UntranslatedTextIssue> {
    content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            if line.trim_start().starts_with("//") {
                return None;
            }
            let code = match line.find("//") {
                Some(pos) => &line[..pos],
                None => line,
            };
            if LOOKUP_CALL_REGEX.is_match(code) {
                return None;
            }

            let found = THAI_RUN_REGEX.find(code)?;
            let text = found.as_str().to_string();
            Some(UntranslatedTextIssue {
                context: SourceContext {
                    file_path: file_path.to_string(),
                    line: index + 1,
                    col: code[..found.start()].chars().count() + 1,
                    source_line: line.to_string(),
                },
                known_key: table.key_for(&text).map(str::to_string),
                text,
            })
        })
        .collect()
}

pub fn scan_file(path: &Path, table: &TranslationTable) -> Result<Vec<UntranslatedTextIssue>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(scan_text(&path.display().to_string(), &content, table))
}

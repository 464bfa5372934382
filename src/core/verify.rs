//! Lookup key verification against the JavaScript language file.
//!
//! Templates are searched for `<%= t('key') %>` and `<%- t('key') %>`
//! calls. The language file is not evaluated: any `key: 'text'` entry
//! outside a line comment counts as defined, in every language block.

use std::{
    collections::HashSet,
    fs,
    path::Path,
    sync::LazyLock,
};

use anyhow::{Context, Result};
use regex::Regex;

use crate::issues::{MissingKeyIssue, SourceContext};

/// A lookup call with a literal key inside an output tag.
static TEMPLATE_KEY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<%[=-]\s*t\(\s*['"]([^'"]+)['"]\s*\)"#).expect("Invalid template key regex")
});

/// A `key: 'text'` entry, with the key optionally quoted.
static LANGUAGE_KEY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"['"]?(\w+)['"]?\s*:\s*['"`]"#).expect("Invalid language key regex")
});

/// One lookup call found in a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyUsage {
    pub key: String,
    pub context: SourceContext,
}

/// Every lookup call in `content`, in source order.
pub fn used_keys(file_path: &str, content: &str) -> Vec<KeyUsage> {
    content
        .lines()
        .enumerate()
        .flat_map(|(index, line)| {
            TEMPLATE_KEY_REGEX.captures_iter(line).filter_map(move |caps| {
                let key = caps.get(1)?;
                Some(KeyUsage {
                    key: key.as_str().to_string(),
                    context: SourceContext {
                        file_path: file_path.to_string(),
                        line: index + 1,
                        col: line[..key.start()].chars().count() + 1,
                        source_line: line.to_string(),
                    },
                })
            })
        })
        .collect()
}

/// Keys defined anywhere in the language file content.
pub fn defined_keys(content: &str) -> HashSet<String> {
    content
        .lines()
        .filter(|line| !line.trim_start().starts_with("//"))
        .flat_map(|line| LANGUAGE_KEY_REGEX.captures_iter(line))
        .filter_map(|caps| caps.get(1).map(|key| key.as_str().to_string()))
        .collect()
}

pub fn load_defined_keys(path: &Path) -> Result<HashSet<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read language file: {}", path.display()))?;
    Ok(defined_keys(&content))
}

/// Result of checking one template.
#[derive(Debug, Clone, Default)]
pub struct FileVerification {
    /// Distinct keys used in the file.
    pub used: usize,
    /// First usage of each undefined key.
    pub missing: Vec<MissingKeyIssue>,
}

pub fn verify_text(
    file_path: &str,
    content: &str,
    defined: &HashSet<String>,
    languages_file: &str,
) -> FileVerification {
    let mut seen = HashSet::new();
    let mut missing = Vec::new();

    for usage in used_keys(file_path, content) {
        if !seen.insert(usage.key.clone()) || defined.contains(&usage.key) {
            continue;
        }
        missing.push(MissingKeyIssue {
            context: usage.context,
            key: usage.key,
            languages_file: languages_file.to_string(),
        });
    }

    FileVerification {
        used: seen.len(),
        missing,
    }
}

pub fn verify_file(
    path: &Path,
    defined: &HashSet<String>,
    languages_file: &str,
) -> Result<FileVerification> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(verify_text(
        &path.display().to_string(),
        &content,
        defined,
        languages_file,
    ))
}

//! File converter.
//!
//! Applies every substitution rule for every table entry, in table order.
//! Replacements are sequential: text produced for one entry is visible to
//! the patterns of all later entries.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::debug;

use super::{rules::SubstitutionRule, table::TranslationTable};

/// Whether a conversion may write back to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Write,
    DryRun,
}

/// One rule that matched at least once for one table entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleHit {
    pub source: String,
    pub key: String,
    pub rule: SubstitutionRule,
    /// Non-overlapping occurrences replaced by this hit.
    pub occurrences: usize,
}

#[derive(Debug, Clone)]
pub struct Conversion {
    pub content: String,
    pub hits: Vec<RuleHit>,
}

impl Conversion {
    /// Number of rules that matched at least once.
    ///
    /// This is the figure shown in the per-file report. It does not count
    /// individual occurrences; see [`occurrences`](Self::occurrences).
    pub fn rule_hits(&self) -> usize {
        self.hits.len()
    }

    pub fn occurrences(&self) -> usize {
        self.hits.iter().map(|hit| hit.occurrences).sum()
    }
}

pub fn convert_text(original: &str, table: &TranslationTable) -> Conversion {
    let mut content = original.to_string();
    let mut hits = Vec::new();

    for entry in table.entries() {
        for rule in SubstitutionRule::ALL {
            let pattern = rule.pattern(&entry.source);
            let occurrences = content.matches(pattern.as_str()).count();
            if occurrences == 0 {
                continue;
            }

            content = content.replace(&pattern, &rule.replacement(&entry.key));
            debug!(
                source = %entry.source,
                key = %entry.key,
                %rule,
                occurrences,
                "replaced"
            );
            hits.push(RuleHit {
                source: entry.source.clone(),
                key: entry.key.clone(),
                rule,
                occurrences,
            });
        }
    }

    Conversion { content, hits }
}

/// Outcome of converting one file.
#[derive(Debug, Clone)]
pub struct FileConversion {
    pub path: PathBuf,
    pub changed: bool,
    pub hits: Vec<RuleHit>,
}

impl FileConversion {
    pub fn rule_hits(&self) -> usize {
        self.hits.len()
    }
}

/// Convert the file at `path`, writing it back only when its text changed.
///
/// The file must be valid UTF-8. Read and write failures are returned with
/// the path attached.
pub fn convert_file(
    path: &Path,
    table: &TranslationTable,
    mode: WriteMode,
) -> Result<FileConversion> {
    let original = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let conversion = convert_text(&original, table);
    let changed = conversion.content != original;

    if changed && mode == WriteMode::Write {
        fs::write(path, &conversion.content)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
    }
    debug!(
        path = %path.display(),
        changed,
        rule_hits = conversion.rule_hits(),
        occurrences = conversion.occurrences(),
        "converted"
    );

    Ok(FileConversion {
        path: path.to_path_buf(),
        changed,
        hits: conversion.hits,
    })
}

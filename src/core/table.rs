//! Translation table: source text to lookup key.
//!
//! The table is built once and never mutated. Entries are kept sorted by
//! descending source length so that a longer text is always substituted
//! before any shorter text it contains.

use std::{cmp::Reverse, collections::HashMap};

use anyhow::{Result, bail};

use super::builtin::ARTICLE_TRANSLATIONS;
use crate::config::Config;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationEntry {
    pub source: String,
    pub key: String,
    /// Position of the first insertion of `source`.
    position: usize,
}

impl TranslationEntry {
    /// Length in Unicode scalar values, the unit used for ordering.
    pub fn source_len(&self) -> usize {
        self.source.chars().count()
    }
}

#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    entries: Vec<TranslationEntry>,
}

impl TranslationTable {
    /// Build a table from `(source, key)` pairs with mapping semantics.
    ///
    /// A repeated source text replaces the earlier key but keeps the earlier
    /// position. Equal-length sources keep their insertion order.
    pub fn from_pairs<I, S, K>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, K)>,
        S: Into<String>,
        K: Into<String>,
    {
        let mut entries: Vec<TranslationEntry> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for (source, key) in pairs {
            let source = source.into();
            let key = key.into();
            if source.is_empty() {
                bail!("Translation source text must not be empty (key: \"{}\")", key);
            }
            if key.is_empty() {
                bail!("Translation key must not be empty (text: \"{}\")", source);
            }

            match index.get(&source).copied() {
                Some(i) => entries[i].key = key,
                None => {
                    let position = entries.len();
                    index.insert(source.clone(), position);
                    entries.push(TranslationEntry {
                        source,
                        key,
                        position,
                    });
                }
            }
        }

        entries.sort_by_key(|entry| Reverse(entry.source_len()));
        Ok(Self { entries })
    }

    /// The built-in article dictionary.
    pub fn builtin() -> Result<Self> {
        Self::from_pairs(ARTICLE_TRANSLATIONS.iter().copied())
    }

    /// Built-in entries followed by the configured extra translations.
    pub fn load(config: &Config) -> Result<Self> {
        let extras = config.extra_translations()?;
        Self::from_pairs(
            ARTICLE_TRANSLATIONS
                .iter()
                .map(|&(source, key)| (source.to_string(), key.to_string()))
                .chain(extras),
        )
    }

    /// Entries in substitution order (longest source first).
    pub fn entries(&self) -> &[TranslationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn key_for(&self, source: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.source == source)
            .map(|entry| entry.key.as_str())
    }

    /// Entries in the order their source texts were first inserted.
    pub fn entries_in_insertion_order(&self) -> Vec<&TranslationEntry> {
        let mut entries: Vec<&TranslationEntry> = self.entries.iter().collect();
        entries.sort_by_key(|entry| entry.position);
        entries
    }
}

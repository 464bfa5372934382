//! Keys command - print the translation table for the language file.
//!
//! Output is keyed by lookup key. When two source texts share a key, only
//! the later text is exported, at the earlier one's position.

use std::io::{self, Write};

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use tracing::warn;

use super::super::{
    args::{CommonArgs, KeysCommand, KeysFormat},
    exit_status::ExitStatus,
};
use super::context::RunContext;
use crate::core::TranslationTable;

pub fn keys(cmd: KeysCommand, common: &CommonArgs) -> Result<ExitStatus> {
    let ctx = RunContext::new(common)?;
    let rendered = render(&ctx.table, cmd.format)?;

    let mut out = io::stdout().lock();
    writeln!(out, "{}", rendered).context("Failed to write to stdout")?;
    Ok(ExitStatus::Success)
}

fn render(table: &TranslationTable, format: KeysFormat) -> Result<String> {
    let mut map: Map<String, Value> = Map::new();
    for entry in table.entries_in_insertion_order() {
        let previous = map.insert(entry.key.clone(), Value::String(entry.source.clone()));
        if let Some(previous) = previous {
            warn!(
                key = %entry.key,
                dropped = %previous.as_str().unwrap_or_default(),
                kept = %entry.source,
                "lookup key shared by two source texts"
            );
        }
    }

    match format {
        KeysFormat::Json => {
            serde_json::to_string_pretty(&map).context("Failed to serialize translation keys")
        }
        KeysFormat::Js => Ok(map
            .iter()
            .map(|(key, source)| {
                format!(
                    "        {}: '{}',",
                    key,
                    escape_js(source.as_str().unwrap_or_default())
                )
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn escape_js(text: &str) -> String {
    text.replace('\\', "\\\\").replace('\'', "\\'")
}

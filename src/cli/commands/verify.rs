//! Verify command - check that every key used by the target templates is
//! defined in the language file.
//!
//! The language file must exist. Missing templates are skipped as in
//! `convert`.

use std::io;

use anyhow::Result;
use tracing::info;

use super::super::{
    args::{CommonArgs, VerifyCommand},
    exit_status::ExitStatus,
    report,
};
use super::context::RunContext;
use crate::core::{load_defined_keys, verify_file};

pub fn verify(cmd: VerifyCommand, common: &CommonArgs) -> Result<ExitStatus> {
    let ctx = RunContext::new(common)?;
    let languages_path = cmd
        .languages_file
        .unwrap_or_else(|| ctx.languages_path());
    let languages_file = languages_path.display().to_string();

    let defined = load_defined_keys(&languages_path)?;
    info!(file = %languages_file, keys = defined.len(), "loaded language keys");

    let mut out = io::stdout().lock();
    let mut missing = Vec::new();
    let mut files_checked = 0;
    let mut files_with_missing = 0;
    let mut keys_used = 0;

    for path in ctx.target_paths() {
        if !path.exists() {
            report::print_not_found(&path.display().to_string(), &mut out);
            continue;
        }

        let result = verify_file(&path, &defined, &languages_file)?;
        files_checked += 1;
        keys_used += result.used;
        if !result.missing.is_empty() {
            files_with_missing += 1;
        }
        missing.extend(result.missing);
    }

    if missing.is_empty() {
        report::print_verify_success(files_checked, keys_used, &mut out);
        return Ok(ExitStatus::Success);
    }

    report::print_issues(&missing, &mut out);
    report::print_verify_summary(missing.len(), files_with_missing, &mut out);
    Ok(ExitStatus::Failure)
}

//! Scan command - report Thai text still present in the target templates.
//!
//! Scans the same fixed file list as `convert`. Missing files are skipped.

use std::io;

use anyhow::Result;

use super::super::{args::CommonArgs, exit_status::ExitStatus, report};
use super::context::RunContext;
use crate::core::scan_file;

pub fn scan(common: &CommonArgs) -> Result<ExitStatus> {
    let ctx = RunContext::new(common)?;
    let mut out = io::stdout().lock();

    let mut issues = Vec::new();
    let mut files_scanned = 0;
    let mut files_with_issues = 0;

    for path in ctx.target_paths() {
        if !path.exists() {
            report::print_not_found(&path.display().to_string(), &mut out);
            continue;
        }

        let found = scan_file(&path, &ctx.table)?;
        files_scanned += 1;
        if !found.is_empty() {
            files_with_issues += 1;
        }
        issues.extend(found);
    }

    if issues.is_empty() {
        report::print_scan_success(files_scanned, &mut out);
        return Ok(ExitStatus::Success);
    }

    report::print_issues(&issues, &mut out);
    report::print_scan_summary(issues.len(), files_with_issues, &mut out);
    Ok(ExitStatus::Failure)
}

//! Convert command - replace known Thai text with `t()` lookups.
//!
//! Walks the fixed list of target templates. A missing file is reported and
//! skipped; any other I/O failure aborts the run.
//!
//! Use `--dry-run` to see what would change without writing.

use std::io;

use anyhow::Result;
use tracing::info;

use super::super::{
    args::{CommonArgs, ConvertCommand},
    exit_status::ExitStatus,
    report,
};
use super::context::RunContext;
use crate::core::{WriteMode, convert_file};

pub fn convert(cmd: ConvertCommand, common: &CommonArgs) -> Result<ExitStatus> {
    let ctx = RunContext::new(common)?;
    let mode = if cmd.dry_run {
        WriteMode::DryRun
    } else {
        WriteMode::Write
    };
    info!(base_dir = %ctx.base_dir.display(), ?mode, "starting conversion");

    let mut out = io::stdout().lock();
    report::print_convert_header(&mut out);

    let mut modified = 0;
    for path in ctx.target_paths() {
        if !path.exists() {
            report::print_not_found(&path.display().to_string(), &mut out);
            continue;
        }

        let outcome = convert_file(&path, &ctx.table, mode)?;
        report::print_file_outcome(&outcome, mode, common.verbose, &mut out);
        if outcome.changed {
            modified += 1;
        }
    }

    report::print_convert_summary(modified, mode, &mut out);
    Ok(ExitStatus::Success)
}

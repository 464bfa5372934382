//! Report formatting and printing utilities.
//!
//! Every printer takes a writer so tests can capture output; callers pass a
//! locked stdout.

use std::io::Write;

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::{
    config::{CONFIG_FILE_NAME, Config, NEXT_STEP_HINT},
    core::{FileConversion, WriteMode},
    issues::{Report, Severity},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Mark for a file that needed no changes.
pub const UNCHANGED_MARK: &str = "\u{2717}"; // ✗

const RULE_WIDTH: usize = 60;

// ============================================================
// Conversion
// ============================================================

pub fn print_convert_header<W: Write>(writer: &mut W) {
    let _ = writeln!(writer, "Starting Article files i18n conversion...");
    print_rule(writer);
}

pub fn print_rule<W: Write>(writer: &mut W) {
    let _ = writeln!(writer, "{}", "=".repeat(RULE_WIDTH));
}

pub fn print_not_found<W: Write>(path: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}: File not found", "!".yellow().bold(), path);
}

pub fn print_file_outcome<W: Write>(
    outcome: &FileConversion,
    mode: WriteMode,
    verbose: bool,
    writer: &mut W,
) {
    let path = outcome.path.display();

    if !outcome.changed {
        let _ = writeln!(
            writer,
            "{} {}: No changes needed",
            UNCHANGED_MARK.dimmed(),
            path
        );
        return;
    }

    match mode {
        WriteMode::Write => {
            let _ = writeln!(
                writer,
                "{} {}: {} replacements made",
                SUCCESS_MARK.green(),
                path,
                outcome.rule_hits()
            );
        }
        WriteMode::DryRun => {
            let _ = writeln!(
                writer,
                "{} {}: {} replacements would be made",
                "~".yellow(),
                path,
                outcome.rule_hits()
            );
        }
    }

    if verbose {
        for hit in &outcome.hits {
            let _ = writeln!(
                writer,
                "    - \"{}\" -> t('{}') [{}, {}x]",
                hit.source,
                hit.key,
                hit.rule.to_string().cyan(),
                hit.occurrences
            );
        }
    }
}

pub fn print_convert_summary<W: Write>(modified: usize, mode: WriteMode, writer: &mut W) {
    print_rule(writer);
    match mode {
        WriteMode::Write => {
            let _ = writeln!(
                writer,
                "{} {} files modified.",
                "Conversion complete!".green().bold(),
                modified
            );
            let _ = writeln!(writer);
            let _ = writeln!(writer, "Next step: {}", NEXT_STEP_HINT);
        }
        WriteMode::DryRun => {
            let _ = writeln!(
                writer,
                "{} {} files would be modified.",
                "Dry run complete!".yellow().bold(),
                modified
            );
            let _ = writeln!(writer);
            let _ = writeln!(writer, "Run without {} to write these changes.", "--dry-run".cyan());
        }
    }
}

// ============================================================
// Scan
// ============================================================

/// Print findings in cargo-style format.
pub fn print_issues<I: Report, W: Write>(issues: &[I], writer: &mut W) {
    let max_line_width = issues
        .iter()
        .map(|issue| issue.context().line.to_string().len())
        .max()
        .unwrap_or(1);

    for issue in issues {
        print_issue(issue, writer, max_line_width);
    }
}

pub fn print_scan_success<W: Write>(files_scanned: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Scanned {} {} - no untranslated text found",
            files_scanned,
            if files_scanned == 1 { "file" } else { "files" }
        )
        .green()
    );
}

pub fn print_scan_summary<W: Write>(issue_count: usize, file_count: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {} untranslated text(s) in {} file(s)",
        FAILURE_MARK.red(),
        issue_count,
        file_count
    );
}

// ============================================================
// Verify
// ============================================================

pub fn print_verify_success<W: Write>(files_checked: usize, keys_used: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Verified {} {} - all {} used keys are defined",
            files_checked,
            if files_checked == 1 { "file" } else { "files" },
            keys_used
        )
        .green()
    );
}

pub fn print_verify_summary<W: Write>(missing_count: usize, file_count: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {} missing key(s) in {} file(s)",
        FAILURE_MARK.red(),
        missing_count,
        file_count
    );
}

// ============================================================
// Init
// ============================================================

/// Confirm the written config file and the settings it holds.
pub fn print_init<W: Write>(config: &Config, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", CONFIG_FILE_NAME).green()
    );
    let _ = writeln!(writer, "  baseDir: {}", config.base_dir);
    let _ = writeln!(writer, "  files: {}", config.files.join(", "));
    let _ = writeln!(writer, "  languagesFile: {}", config.languages_file);
}

fn print_issue<I: Report, W: Write>(issue: &I, writer: &mut W, max_line_width: usize) {
    let ctx = issue.context();
    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().dimmed().cyan()
    );
    let _ = writeln!(
        writer,
        "{:>width$}{} {}:{}:{}",
        "",
        "-->".blue(),
        ctx.file_path,
        ctx.line,
        ctx.col,
        width = max_line_width
    );
    let _ = writeln!(
        writer,
        "{:>width$} {}",
        "",
        "|".blue(),
        width = max_line_width
    );
    let _ = writeln!(
        writer,
        "{:>width$} {} {}",
        ctx.line.to_string().blue(),
        "|".blue(),
        ctx.source_line,
        width = max_line_width
    );

    // Caret under the reported column (1-based)
    let prefix: String = ctx.source_line.chars().take(ctx.col.saturating_sub(1)).collect();
    let caret_padding = UnicodeWidthStr::width(prefix.as_str());
    let _ = writeln!(
        writer,
        "{:>width$} {} {:>padding$}{}",
        "",
        "|".blue(),
        "",
        "^".yellow(),
        width = max_line_width,
        padding = caret_padding
    );
    let _ = writeln!(
        writer,
        "{:>width$} {} {} {}",
        "",
        "=".blue(),
        "hint:".bold().cyan(),
        issue.report_hint(),
        width = max_line_width
    );
    let _ = writeln!(writer);
}

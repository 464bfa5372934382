use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed. Conversion always ends here, whether
///   files were changed, unchanged or missing.
/// - `Failure` (1): `scan` found leftover text, or `init` refused to overwrite
/// - `Error` (2): Command failed (I/O error, invalid config, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}

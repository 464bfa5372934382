use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{convert::convert, init::init, keys::keys, scan::scan, verify::verify},
    exit_status::ExitStatus,
};

/// Dispatch to the command handler; a bare invocation runs `convert`.
pub fn run(args: Arguments) -> Result<ExitStatus> {
    let (command, common) = args.command_or_default();
    match command {
        Command::Convert(cmd) => convert(cmd, &common),
        Command::Scan => scan(&common),
        Command::Keys(cmd) => keys(cmd, &common),
        Command::Verify(cmd) => verify(cmd, &common),
        Command::Init => init(),
    }
}

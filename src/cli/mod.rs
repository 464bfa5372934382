use anyhow::Result;

mod args;
mod commands;
mod exit_status;
mod logging;
mod report;
mod run;

pub use args::{
    Arguments, Command, CommonArgs, ConvertCommand, KeysCommand, KeysFormat, VerifyCommand,
};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    logging::init(args.common.verbose);
    run::run(args)
}

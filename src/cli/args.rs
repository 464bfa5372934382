//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `convert`: Replace known Thai text with lookup calls (default)
//! - `scan`: Report Thai text the conversion left behind
//! - `keys`: Print the translation table for the language file
//! - `verify`: Check that every key the templates use is defined
//! - `init`: Write a default configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl Arguments {
    /// The command to run; a bare invocation converts.
    pub fn command_or_default(self) -> (Command, CommonArgs) {
        let command = self
            .command
            .unwrap_or(Command::Convert(ConvertCommand::default()));
        (command, self.common)
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Directory holding the target templates (overrides config file)
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Default, Args)]
pub struct ConvertCommand {
    /// Report what would change without writing files
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum KeysFormat {
    /// JSON object of key to text
    #[default]
    Json,
    /// `key: 'text',` lines for a JavaScript language map
    Js,
}

#[derive(Debug, Args)]
pub struct KeysCommand {
    /// Output format
    #[arg(long, value_enum, default_value_t = KeysFormat::Json)]
    pub format: KeysFormat,
}

#[derive(Debug, Default, Args)]
pub struct VerifyCommand {
    /// Language file to check against (overrides config file)
    #[arg(long)]
    pub languages_file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Replace known Thai text in the target templates with t() lookups
    Convert(ConvertCommand),
    /// Report Thai text remaining in the target templates
    Scan,
    /// Print the translation table as key/text pairs
    Keys(KeysCommand),
    /// Check that every t() key used in the target templates is defined
    Verify(VerifyCommand),
    /// Initialize a new .i18nizerc.json configuration file
    Init,
}

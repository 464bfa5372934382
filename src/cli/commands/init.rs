//! Init command - write a default `.i18nizerc.json` into the working
//! directory. An existing file is never overwritten.

use std::{fs, io, path::Path};

use anyhow::{Context, Result};

use super::super::{exit_status::ExitStatus, report};
use crate::config::{CONFIG_FILE_NAME, Config, default_config_json};

pub fn init() -> Result<ExitStatus> {
    let config_path = Path::new(CONFIG_FILE_NAME);

    if config_path.exists() {
        eprintln!("Error: {} already exists", CONFIG_FILE_NAME);
        return Ok(ExitStatus::Failure);
    }

    fs::write(config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;
    report::print_init(&Config::default(), &mut io::stdout().lock());

    Ok(ExitStatus::Success)
}

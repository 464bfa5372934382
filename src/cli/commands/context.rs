use std::{env, path::PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use super::super::args::CommonArgs;
use crate::{
    config::{Config, load_config},
    core::TranslationTable,
};

/// Everything a command needs: effective config, target directory, table.
pub struct RunContext {
    pub config: Config,
    pub base_dir: PathBuf,
    pub table: TranslationTable,
}

impl RunContext {
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to read current directory")?;
        let loaded = load_config(&cwd)?;
        if let Some(path) = &loaded.source {
            info!(config = %path.display(), "loaded configuration");
        }

        let config = loaded.config;
        let base_dir = common
            .base_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.base_dir));
        let table = TranslationTable::load(&config)?;
        debug!(
            entries = table.len(),
            base_dir = %base_dir.display(),
            "translation table ready"
        );

        Ok(Self {
            config,
            base_dir,
            table,
        })
    }

    pub fn target_paths(&self) -> Vec<PathBuf> {
        self.config.target_paths(&self.base_dir)
    }

    pub fn languages_path(&self) -> PathBuf {
        PathBuf::from(&self.config.languages_file)
    }
}

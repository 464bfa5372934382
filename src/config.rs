use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const CONFIG_FILE_NAME: &str = ".i18nizerc.json";

/// Follow-up printed after a conversion run.
pub const NEXT_STEP_HINT: &str = "Add translations to utils/languages.js";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_base_dir", alias = "basePath")]
    pub base_dir: String,
    #[serde(default = "default_files")]
    pub files: Vec<String>,
    /// Source text to key, applied after the built-in dictionary.
    #[serde(default)]
    pub extra_translations: Map<String, Value>,
    /// JavaScript language map checked by `verify`.
    #[serde(default = "default_languages_file")]
    pub languages_file: String,
}

fn default_base_dir() -> String {
    "views/articles".to_string()
}

fn default_files() -> Vec<String> {
    ["edit.ejs", "detail.ejs", "index.ejs", "create.ejs"]
        .map(String::from)
        .to_vec()
}

fn default_languages_file() -> String {
    "utils/languages.js".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            files: default_files(),
            extra_translations: Map::new(),
            languages_file: default_languages_file(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Target files must be plain file names inside `baseDir`; there is no
    /// discovery, so wildcards and nested paths are rejected.
    pub fn validate(&self) -> Result<()> {
        for file in &self.files {
            if file.trim().is_empty() {
                bail!("Empty file name in 'files'");
            }
            if file.contains(['*', '?', '[']) {
                bail!("Wildcards are not supported in 'files': \"{}\"", file);
            }
            if file.contains(['/', '\\']) {
                bail!("Expected a file name in 'files', got a path: \"{}\"", file);
            }
        }

        if self.languages_file.trim().is_empty() {
            bail!("'languagesFile' must not be empty");
        }

        self.extra_translations()?;
        Ok(())
    }

    /// `extraTranslations` as `(source, key)` pairs in file order.
    pub fn extra_translations(&self) -> Result<Vec<(String, String)>> {
        self.extra_translations
            .iter()
            .map(|(source, key)| match key {
                Value::String(key) if !key.is_empty() => Ok((source.clone(), key.clone())),
                _ => bail!(
                    "Invalid key for \"{}\" in 'extraTranslations': expected a non-empty string",
                    source
                ),
            })
            .collect()
    }

    /// Full paths of the target files, in configured order.
    pub fn target_paths(&self, base_dir: &Path) -> Vec<PathBuf> {
        self.files.iter().map(|file| base_dir.join(file)).collect()
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the file the config was read from, `None` for defaults.
    pub source: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                source: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            source: None,
        }),
    }
}

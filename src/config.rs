use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".jspcheckrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_template_root_path")]
    pub template_root_path: String,
    #[serde(default = "default_message_properties_path")]
    pub message_properties_path: String,
    #[serde(default = "default_template_extension")]
    pub template_extension: String,
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_template_root_path() -> String {
    "src/main/webapp/WEB-INF/views".to_string()
}

fn default_message_properties_path() -> String {
    "src/main/resources/messages.properties".to_string()
}

fn default_template_extension() -> String {
    "jsp".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template_root_path: default_template_root_path(),
            message_properties_path: default_message_properties_path(),
            template_extension: default_template_extension(),
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Both input paths are required. An empty path is a configuration error
    /// and must stop the run before anything is scanned.
    pub fn validate(&self) -> Result<()> {
        if self.template_root_path.trim().is_empty() {
            bail!("'templateRootPath' can't be empty");
        }
        if self.message_properties_path.trim().is_empty() {
            bail!("'messagePropertiesPath' can't be empty");
        }
        if self.template_extension.trim_start_matches('.').is_empty() {
            bail!("'templateExtension' can't be empty");
        }

        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        Ok(())
    }

    /// Extension without the leading dot, e.g. `jsp`.
    pub fn extension(&self) -> &str {
        self.template_extension.trim_start_matches('.')
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
    /// Config file that was used, `None` when running on defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}

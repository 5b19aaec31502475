use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, InitSummary, helper::finish};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write a default config file into `dir`. An existing file is left untouched.
pub fn init(dir: &Path) -> Result<CommandResult> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    let created = if config_path.exists() {
        false
    } else {
        fs::write(&config_path, default_config_json()?)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        true
    };

    let mut result = finish(
        CommandSummary::Init(InitSummary { created }),
        Vec::new(),
        0,
        0,
        true,
    );
    if !created {
        result.error_count += 1;
    }
    Ok(result)
}

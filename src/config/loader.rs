//! Configuration loading

use crate::constants::CONFIG_FILENAMES;
use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// User settings read from the workspace root.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Extra template folders, absolute or relative to the workspace root.
    #[serde(default)]
    pub user_templates_folders: Vec<String>,
}

impl Settings {
    /// Loads the first configuration file found in `workspace_root`.
    ///
    /// # Returns
    /// * `Ok(Settings::default())` - if no configuration file exists
    /// * `Err(Error::ConfigError)` - if the file exists but cannot be parsed
    pub fn load<P: AsRef<Path>>(workspace_root: P) -> Result<Self> {
        let workspace_root = workspace_root.as_ref();

        for config_file_name in CONFIG_FILENAMES.iter() {
            let config_file_path = workspace_root.join(config_file_name);
            if !config_file_path.is_file() {
                continue;
            }

            debug!("Loading settings from '{}'", config_file_path.display());
            let content = std::fs::read_to_string(&config_file_path)?;
            let config_error = |reason: String| Error::ConfigError {
                path: config_file_path.display().to_string(),
                reason,
            };
            let settings: Settings = if config_file_name.ends_with(".json") {
                serde_json::from_str(&content).map_err(|e| config_error(e.to_string()))?
            } else {
                serde_yaml::from_str(&content).map_err(|e| config_error(e.to_string()))?
            };
            return Ok(settings);
        }

        debug!("No settings file in '{}', using defaults", workspace_root.display());
        Ok(Self::default())
    }

    /// Configured folders in order, empty entries dropped.
    pub fn user_folders(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.user_templates_folders
            .iter()
            .filter(|folder| !folder.is_empty())
            .map(PathBuf::from)
    }
}

use super::{get_global_config_dir, Config, CONFIG_FILE_NAME};
use crate::error::{common, AdsightError, ErrorExt, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Resolves and loads the configuration for one run
///
/// Lookup order: an explicit path, then `adsight.toml` in the working
/// directory, then the per-user config directory, then built-in defaults.
/// Environment overrides are applied last.
pub struct ConfigLoader {
    search_dirs: Vec<PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        let mut search_dirs = Vec::new();
        if let Ok(cwd) = std::env::current_dir() {
            search_dirs.push(cwd);
        }
        if let Some(global) = get_global_config_dir() {
            search_dirs.push(global);
        }
        Self { search_dirs }
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loader that only searches the given directories
    pub fn with_search_dirs(search_dirs: Vec<PathBuf>) -> Self {
        Self { search_dirs }
    }

    pub fn load(&self, explicit: Option<&Path>) -> Result<Config> {
        let mut config = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(common::config_not_found(path));
                }
                load_file(path)?
            }
            None => match self.discover() {
                Some(path) => load_file(&path)?,
                None => {
                    debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                    Config::new()
                }
            },
        };

        config.merge_env_vars()?;
        config.validate()?;
        Ok(config)
    }

    /// First `adsight.toml` found in the search directories
    pub fn discover(&self) -> Option<PathBuf> {
        self.search_dirs
            .iter()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .find(|candidate| candidate.is_file())
    }
}

/// Read and parse one configuration file
pub fn load_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .to_config_error("Failed to read configuration file")
        .map_err(|e| e.with_path(path))?;
    let config: Config = toml::from_str(&content)
        .map_err(|e| AdsightError::from(e).with_path(path))?;
    info!("Loaded configuration from {}", path.display());
    Ok(config)
}

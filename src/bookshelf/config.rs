use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// File name used when nothing else selects the catalog location.
pub const DEFAULT_DATA_FILE: &str = "library_records.txt";

/// Environment variable that overrides the configured catalog location.
pub const DATA_FILE_ENV: &str = "BOOKSHELF_FILE";

/// Configuration for bookshelf, stored as config.json in the config directory
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Catalog file to use when neither `--file` nor `BOOKSHELF_FILE` is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

impl CatalogConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CatalogError::Io)?;
        let config: CatalogConfig =
            serde_json::from_str(&content).map_err(CatalogError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CatalogError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CatalogError::Serialization)?;
        fs::write(config_path, content).map_err(CatalogError::Io)?;
        Ok(())
    }

    pub fn set_data_file(&mut self, path: impl Into<PathBuf>) {
        self.data_file = Some(path.into());
    }

    /// Pick the catalog file: explicit flag, then environment, then config,
    /// then [`DEFAULT_DATA_FILE`] in `cwd`.
    pub fn resolve_data_file(
        &self,
        flag: Option<&Path>,
        env: Option<&Path>,
        cwd: &Path,
    ) -> PathBuf {
        flag.or(env)
            .or(self.data_file.as_deref())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cwd.join(DEFAULT_DATA_FILE))
    }
}

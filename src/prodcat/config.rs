use crate::commands::helpers::LoadPolicy;
use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_FILE_NAME: &str = "products.json";

/// Configuration for a catalog, stored in `<catalog dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Name of the backing file, relative to the catalog directory
    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// Surface read/parse failures of the backing file instead of treating it as empty
    #[serde(default)]
    pub strict_load: bool,

    /// Continue id assignment after the highest id already stored
    #[serde(default = "default_resume_ids")]
    pub resume_ids: bool,
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

fn default_resume_ids() -> bool {
    true
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
            strict_load: false,
            resume_ids: default_resume_ids(),
        }
    }
}

impl CatalogConfig {
    pub const KEYS: [&'static str; 3] = ["file-name", "strict-load", "resume-ids"];

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

    pub fn data_file<P: AsRef<Path>>(&self, config_dir: P) -> PathBuf {
        config_dir.as_ref().join(&self.file_name)
    }

    pub fn load_policy(&self) -> LoadPolicy {
        if self.strict_load {
            LoadPolicy::Strict
        } else {
            LoadPolicy::Lenient
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "file-name" => Some(self.file_name.clone()),
            "strict-load" => Some(self.strict_load.to_string()),
            "resume-ids" => Some(self.resume_ids.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "file-name" => {
                let name = value.trim();
                if name.is_empty() {
                    return Err("file-name cannot be empty".to_string());
                }
                self.file_name = name.to_string();
            }
            "strict-load" => self.strict_load = parse_bool(key, value)?,
            "resume-ids" => self.resume_ids = parse_bool(key, value)?,
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> std::result::Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(format!(
            "Invalid value for {}: {} (expected true or false)",
            key, value
        )),
    }
}

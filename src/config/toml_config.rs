use crate::utils::error::{FixletError, Result};
use crate::utils::validation::{validate_delimiter, validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional settings file. Every key may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub loader: LoaderConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    pub delimiter: String,
    pub trim: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter: ",".to_string(),
            trim: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(&path).map_err(|e| FixletError::ConfigError {
                message: format!("cannot read {}: {}", path.as_ref().display(), e),
            })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn delimiter_byte(&self) -> Result<u8> {
        validate_delimiter("loader.delimiter", &self.loader.delimiter)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.delimiter_byte()?;

        if let Some(level) = &self.logging.level {
            validate_non_empty_string("logging.level", level)?;
        }

        Ok(())
    }
}

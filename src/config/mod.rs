pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "fixlet-manager")]
#[command(about = "Interactive manager for fixlet records loaded from a CSV file")]
pub struct CliConfig {
    /// CSV file to load (first row is a header)
    pub file: String,

    /// Optional TOML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("file", &self.file)?;
        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }
        Ok(())
    }
}

/// Resolved settings handed to the loader.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub file_path: String,
    pub delimiter: u8,
    pub trim: bool,
    pub log_level: Option<String>,
}

impl AppConfig {
    pub fn from_settings(file_path: impl Into<String>, settings: &TomlConfig) -> Result<Self> {
        settings.validate()?;
        let file_path = file_path.into();
        validate_path("file", &file_path)?;

        Ok(Self {
            file_path,
            delimiter: settings.delimiter_byte()?,
            trim: settings.loader.trim,
            log_level: settings.logging.level.clone(),
        })
    }

    #[cfg(feature = "cli")]
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        cli.validate()?;
        let settings = match &cli.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        Self::from_settings(cli.file.clone(), &settings)
    }
}

impl ConfigProvider for AppConfig {
    fn file_path(&self) -> &str {
        &self.file_path
    }

    fn delimiter(&self) -> u8 {
        self.delimiter
    }

    fn trim_fields(&self) -> bool {
        self.trim
    }
}

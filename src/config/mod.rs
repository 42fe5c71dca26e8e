//! Configuration loading and management

use crate::core::error::{CatalogResult, ConfigError};
use crate::core::query::SearchMode;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Application configuration
///
/// Every field has a default, so an empty YAML document is a valid
/// configuration.
///
/// ```yaml
/// bind: 0.0.0.0:8080
/// data_dir: ./data
/// source_url: http://localhost:8080/data/
/// search_mode: regex
/// cors: true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Address the HTTP server listens on
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Directory served under `/data`, laid out as `beers/beers.json`,
    /// `beers/details/{id}.json` and image files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Fetch the JSON resources from this URL instead of reading `data_dir`
    #[serde(default)]
    pub source_url: Option<String>,

    /// How the search box text is matched against beer names
    #[serde(default)]
    pub search_mode: SearchMode,

    /// Allow cross-origin GETs of the static data
    #[serde(default)]
    pub cors: bool,
}

fn default_bind() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> CatalogResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: Some(path.to_string()),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> CatalogResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values serde cannot check on its own
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bind
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue {
                field: "bind".to_string(),
                value: self.bind.clone(),
                message: e.to_string(),
            })?;

        let bad_url = self
            .source_url
            .as_ref()
            .filter(|url| !(url.starts_with("http://") || url.starts_with("https://")));
        if let Some(url) = bad_url {
            return Err(ConfigError::InvalidValue {
                field: "source_url".to_string(),
                value: url.clone(),
                message: "expected an http:// or https:// URL".to_string(),
            });
        }

        Ok(())
    }

    /// Configuration used when no file is given
    pub fn default_config() -> Self {
        Self {
            bind: default_bind(),
            data_dir: default_data_dir(),
            source_url: None,
            search_mode: SearchMode::Substring,
            cors: false,
        }
    }
}

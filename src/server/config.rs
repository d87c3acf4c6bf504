use serde::Deserialize;
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use crate::server::error::{config::ConfigError, AppError};

/// Settings file looked up in the working directory.
pub const APPSETTINGS_FILE: &str = "appsettings.json";

/// Name of the connection string under `ConnectionStrings`.
pub const LIBRARY_DB: &str = "LibraryDb";

/// Environment variable overriding the connection string from the settings file.
const LIBRARY_DB_ENV: &str = "LIBRARY_DB";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Contents of `appsettings.json`.
///
/// ```json
/// { "ConnectionStrings": { "LibraryDb": "sqlite://library.db?mode=rwc" } }
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AppSettings {
    #[serde(default)]
    pub connection_strings: HashMap<String, String>,
}

impl AppSettings {
    /// Reads and parses a settings file.
    ///
    /// # Returns
    /// - `Ok(AppSettings)` - Parsed settings
    /// - `Err(ConfigError::MissingFile)` - The file could not be read
    /// - `Err(ConfigError::InvalidFile)` - The file is not valid settings JSON
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::MissingFile {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|source| ConfigError::InvalidFile {
            path: path.display().to_string(),
            source,
        })
    }

    /// Returns the named connection string, treating an empty value as absent.
    pub fn connection_string(&self, name: &str) -> Option<&str> {
        self.connection_strings
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}

/// Runtime configuration for the HTTP server.
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Loads configuration from the environment and `appsettings.json` in the working
    /// directory.
    ///
    /// `LIBRARY_DB` takes precedence over `ConnectionStrings.LibraryDb`; the settings file
    /// is optional when the variable is set.
    pub fn from_env() -> Result<Self, AppError> {
        let base_path = std::env::current_dir()?;
        let database_url = std::env::var(LIBRARY_DB_ENV)
            .ok()
            .filter(|value| !value.is_empty());

        let mut config = Self::load(&base_path, database_url)?;

        config.host = std::env::var("HOST").unwrap_or(config.host);
        if let Ok(port) = std::env::var("PORT") {
            config.port = port.parse().map_err(|_| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                value: port,
            })?;
        }

        Ok(config)
    }

    /// Builds a configuration from the settings file in `base_path`, unless
    /// `database_url` already supplies the connection string.
    pub fn load(base_path: &Path, database_url: Option<String>) -> Result<Self, ConfigError> {
        let database_url = match database_url {
            Some(url) => url,
            None => {
                let settings = AppSettings::from_file(&settings_path(base_path))?;
                settings
                    .connection_string(LIBRARY_DB)
                    .map(str::to_string)
                    .ok_or_else(|| ConfigError::MissingConnectionString(LIBRARY_DB.to_string()))?
            }
        };

        Ok(Self {
            database_url,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        })
    }

    /// Address the listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Location of `appsettings.json` relative to `base_path`.
pub fn settings_path(base_path: &Path) -> PathBuf {
    base_path.join(APPSETTINGS_FILE)
}

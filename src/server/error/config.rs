use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// The settings file could not be read.
    ///
    /// The design-time context factory treats this as fatal; the server only reports it
    /// when no `LIBRARY_DB` override is available either.
    #[error("Failed to read settings file {path}: {source}")]
    MissingFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The settings file exists but is not valid JSON of the expected shape.
    #[error("Failed to parse settings file {path}: {source}")]
    InvalidFile {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// No connection string with the given name was configured.
    #[error("Missing required connection string: {0}")]
    MissingConnectionString(String),

    /// Environment variable is set but could not be parsed.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar { name: String, value: String },
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration file error: {0}")]
    ConfigFileError(#[from] toml::de::Error),

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl PageError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            PageError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            PageError::ConfigFileError(e) => {
                format!("Configuration file could not be parsed: {}", e)
            }
            PageError::IoError(e) => format!("File operation failed: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PageError::InvalidConfigValueError { .. } => {
                "Check the command line flags and the [server] section of the config file"
            }
            PageError::ConfigFileError(_) => "Check the TOML syntax of the config file",
            PageError::IoError(_) => {
                "Check that the address is free and the path exists and is writable"
            }
            PageError::SerializationError(_) => "Re-run with --verbose for details",
        }
    }
}

pub type Result<T> = std::result::Result<T, PageError>;

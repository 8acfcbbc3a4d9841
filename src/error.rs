use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

#[derive(Debug, Display, Error, Serialize, Deserialize)]
pub enum GuardError {
    #[display("{message}")]
    ConfigurationError { message: String },
    #[display("{message}")]
    Other { message: String },
}

impl From<std::io::Error> for GuardError {
    fn from(cause: std::io::Error) -> Self {
        GuardError::Other {
            message: format!("IO error: {:?}", cause),
        }
    }
}

impl From<toml::de::Error> for GuardError {
    fn from(cause: toml::de::Error) -> Self {
        GuardError::ConfigurationError {
            message: cause.to_string(),
        }
    }
}

impl From<toml::ser::Error> for GuardError {
    fn from(cause: toml::ser::Error) -> Self {
        GuardError::ConfigurationError {
            message: cause.to_string(),
        }
    }
}

impl From<serde_json::Error> for GuardError {
    fn from(cause: serde_json::Error) -> Self {
        GuardError::Other {
            message: format!("{:?}", cause),
        }
    }
}

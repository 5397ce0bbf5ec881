use mq_binary::ProtocolError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error on {path}: {source}")]
    Io { path: String, source: std::io::Error },

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Structure error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("No default named '{0}'")]
    UnknownDefault(String),

    #[error("Invalid log level '{0}'")]
    InvalidLogLevel(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AppError::UnknownDefault("MQXYZ_DEFAULT".to_string());
        assert_eq!(err.to_string(), "No default named 'MQXYZ_DEFAULT'");

        let err: AppError = ProtocolError::InvalidLength { expected: 364, actual: 12 }.into();
        assert_eq!(err.to_string(), "Structure error: Invalid structure length: expected 364 bytes, got 12 bytes");
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HoroscopeError {
    #[error("API request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("Failed to decode API response: {0}")]
    DecodingError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Validation error on field '{field}': {reason}")]
    ValidationError { field: String, reason: String },

    #[error("Unrecognized {kind} value: '{value}'")]
    UnrecognizedEnumValue { kind: &'static str, value: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// 錯誤分類，供 CLI 決定退出碼
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
}

impl HoroscopeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            HoroscopeError::TransportError(_) => ErrorCategory::Network,
            HoroscopeError::DecodingError(_)
            | HoroscopeError::ValidationError { .. }
            | HoroscopeError::UnrecognizedEnumValue { .. } => ErrorCategory::Data,
            HoroscopeError::UrlError(_)
            | HoroscopeError::IoError(_)
            | HoroscopeError::ConfigError { .. }
            | HoroscopeError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check network connectivity and the configured API URL",
            ErrorCategory::Data => "The upstream response changed shape; retry later or report it",
            ErrorCategory::Configuration => "Fix the configuration file or command-line arguments",
        }
    }

    pub(crate) fn validation(field: &str, reason: impl Into<String>) -> Self {
        HoroscopeError::ValidationError {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HoroscopeError>;

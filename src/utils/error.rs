use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Upstream {endpoint} responded with status {status}")]
    UpstreamStatusError { endpoint: String, status: u16 },

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("{message}")]
    MissingSelection { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    Validation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DirectoryError {
    pub fn validation(message: impl Into<String>) -> Self {
        DirectoryError::ValidationError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            DirectoryError::ApiError(_) | DirectoryError::UpstreamStatusError { .. } => {
                ErrorCategory::Network
            }
            DirectoryError::IoError(_) | DirectoryError::SerializationError(_) => {
                ErrorCategory::Data
            }
            DirectoryError::UrlError(_)
            | DirectoryError::ConfigError { .. }
            | DirectoryError::InvalidConfigValueError { .. }
            | DirectoryError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            DirectoryError::ValidationError { .. } | DirectoryError::MissingSelection { .. } => {
                ErrorCategory::Validation
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的訊息，不含內部細節
    pub fn user_friendly_message(&self) -> String {
        match self {
            DirectoryError::ApiError(_) => "Could not reach the directory service.".to_string(),
            DirectoryError::UpstreamStatusError { status, .. } => {
                format!("The directory service returned an error ({}).", status)
            }
            DirectoryError::UrlError(e) => format!("An endpoint URL is invalid: {}", e),
            DirectoryError::IoError(e) => format!("File access failed: {}", e),
            DirectoryError::SerializationError(_) => {
                "The directory service returned data in an unexpected format.".to_string()
            }
            DirectoryError::ConfigError { message } => format!("Configuration problem: {}", message),
            DirectoryError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            DirectoryError::ConfigValidationError { field, message } => {
                format!("Configuration '{}' is invalid: {}", field, message)
            }
            DirectoryError::ValidationError { message }
            | DirectoryError::MissingSelection { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check your network connection and the configured endpoints, then try again.",
            ErrorCategory::Data => "Verify the upstream API contract or the file contents.",
            ErrorCategory::Configuration => "Review the command line flags or the TOML configuration file.",
            ErrorCategory::Validation => "Correct the highlighted input and submit again.",
        }
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;

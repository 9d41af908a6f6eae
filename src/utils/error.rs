use thiserror::Error;

#[derive(Error, Debug)]
pub enum RankingError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid shape for {field}: expected {expected} values, got {actual}")]
    InvalidShape {
        field: String,
        expected: usize,
        actual: usize,
    },

    #[error("Non-finite value for {field}: {value}")]
    NonFiniteValue { field: String, value: f64 },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Storage error: {message}")]
    StorageError { message: String },

    #[error("Failed to render report: {message}")]
    RenderError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Storage,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RankingError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::StorageError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidShape { .. } | Self::NonFiniteValue { .. } | Self::ValidationError { .. } => {
                ErrorCategory::Input
            }
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::IoError(_) | Self::CsvError(_) | Self::StorageError { .. } => ErrorCategory::Storage,
            Self::SerializationError(_) | Self::RenderError { .. } => ErrorCategory::Internal,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Medium,
            ErrorCategory::Internal => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidShape { .. } => "Every course and round must carry exactly 18 hole values",
            Self::NonFiniteValue { .. } => "Check the score data for corrupted entries",
            Self::ValidationError { .. } => "Correct the highlighted input and submit again",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Check the configuration file and command line flags"
            }
            Self::IoError(_) => "Make sure the data files exist and are readable",
            Self::CsvError(_) => "Make sure the data files are valid CSV with the expected columns",
            Self::StorageError { .. } => "Check the data files and try again",
            Self::SerializationError(_) | Self::RenderError { .. } => "Report this as a bug",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Invalid input: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Storage => format!("Could not access score data: {}", self),
            ErrorCategory::Internal => format!("Internal error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, RankingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_errors_are_input_errors() {
        let err = RankingError::InvalidShape {
            field: "pars".to_string(),
            expected: 18,
            actual: 9,
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.to_string().contains("got 9"));
    }

    #[test]
    fn test_io_errors_are_storage_errors() {
        let err: RankingError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.category(), ErrorCategory::Storage);
        assert!(err.user_friendly_message().starts_with("Could not access score data"));
    }
}

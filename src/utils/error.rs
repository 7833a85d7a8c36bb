use thiserror::Error;

#[derive(Error, Debug)]
pub enum VariantError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Source file not found: {path}")]
    SourceNotFound { path: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Processing error: {message}")]
    ProcessingError { message: String },
}

pub type Result<T> = std::result::Result<T, VariantError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Config,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl VariantError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            VariantError::IoError(_) | VariantError::SourceNotFound { .. } => ErrorCategory::Io,
            VariantError::ConfigValidationError { .. }
            | VariantError::InvalidConfigValueError { .. }
            | VariantError::MissingConfigError { .. } => ErrorCategory::Config,
            VariantError::SerializationError(_) | VariantError::ProcessingError { .. } => {
                ErrorCategory::Processing
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 來源缺失會在寫入任何檔案前中止整個流程
            VariantError::SourceNotFound { .. } => ErrorSeverity::High,
            VariantError::IoError(_) => ErrorSeverity::Critical,
            VariantError::SerializationError(_) | VariantError::ProcessingError { .. } => {
                ErrorSeverity::High
            }
            VariantError::ConfigValidationError { .. }
            | VariantError::InvalidConfigValueError { .. }
            | VariantError::MissingConfigError { .. } => ErrorSeverity::Medium,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            VariantError::SourceNotFound { path } => {
                format!("Source file '{}' was not found; no output was written", path)
            }
            VariantError::IoError(e) => format!("File operation failed: {}", e),
            VariantError::SerializationError(e) => {
                format!("Could not serialize the run report: {}", e)
            }
            VariantError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            VariantError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not a valid value for '{}': {}", value, field, reason),
            VariantError::MissingConfigError { field } => {
                format!("Required configuration '{}' is missing", field)
            }
            VariantError::ProcessingError { message } => format!("Processing failed: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            VariantError::SourceNotFound { .. } => {
                "Check that the source path exists and is readable".to_string()
            }
            VariantError::IoError(_) => {
                "Check filesystem permissions and available disk space".to_string()
            }
            VariantError::SerializationError(_) => {
                "Re-run without a report filename to skip the JSON report".to_string()
            }
            VariantError::ConfigValidationError { .. }
            | VariantError::InvalidConfigValueError { .. }
            | VariantError::MissingConfigError { .. } => {
                "Fix the configuration value and run again".to_string()
            }
            VariantError::ProcessingError { .. } => {
                "Inspect the source content and the variant specs for a mismatch".to_string()
            }
        }
    }
}

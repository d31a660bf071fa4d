use thiserror::Error;

#[derive(Error, Debug)]
pub enum IconError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Cannot read {path}: {source}")]
    InputFileError {
        path: String,
        source: std::io::Error,
    },

    #[error("Template error: {message}")]
    TemplateError { message: String },

    #[error("Render error at {size}x{size}: {message}")]
    RenderError { size: u32, message: String },

    #[error("PNG encoding failed at {size}x{size}: {message}")]
    EncodeError { size: u32, message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Background task failed: {0}")]
    TaskError(#[from] tokio::task::JoinError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Io,
    Rendering,
    Internal,
}

impl IconError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            IconError::TemplateError { .. }
            | IconError::InputFileError { .. }
            | IconError::ConfigValidationError { .. }
            | IconError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            IconError::IoError(_) => ErrorCategory::Io,
            IconError::RenderError { .. } | IconError::EncodeError { .. } => {
                ErrorCategory::Rendering
            }
            IconError::SerializationError(_) | IconError::TaskError(_) => ErrorCategory::Internal,
        }
    }

    /// Process exit code for a failure that reached `main`.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Io => 2,
            ErrorCategory::Rendering | ErrorCategory::Internal => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            IconError::IoError(e) => format!("Could not access the output location: {}", e),
            IconError::InputFileError { path, source } => {
                format!("Could not read input file {}: {}", path, source)
            }
            IconError::TemplateError { message } => format!("The icon template is unusable: {}", message),
            IconError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            IconError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for '{}' ({})", value, field, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => "Check the command-line flags or the TOML config file",
            ErrorCategory::Io => "Check that the output directory is writable",
            ErrorCategory::Rendering => "Check that the template is well-formed SVG",
            ErrorCategory::Internal => "Re-run with --verbose and report the log",
        }
    }
}

pub type Result<T> = std::result::Result<T, IconError>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AreaError {
    #[error("Invalid argument: radius {value} {reason}")]
    InvalidArgument { value: f64, reason: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 依嚴重程度決定程序結束碼
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl AreaError {
    pub fn invalid_argument(value: f64, reason: impl Into<String>) -> Self {
        AreaError::InvalidArgument {
            value,
            reason: reason.into(),
        }
    }

    pub fn config(field: impl Into<String>, message: impl Into<String>) -> Self {
        AreaError::ConfigError {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, AreaError::InvalidArgument { .. })
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            AreaError::InvalidArgument { .. } => ErrorCategory::Input,
            AreaError::ConfigError { .. } => ErrorCategory::Configuration,
            AreaError::IoError(_) | AreaError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AreaError::InvalidArgument { .. } => ErrorSeverity::Medium,
            AreaError::ConfigError { .. } => ErrorSeverity::High,
            AreaError::IoError(_) | AreaError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.severity().exit_code()
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            AreaError::InvalidArgument { value, reason } => {
                format!("Cannot compute an area for radius {}: {}", value, reason)
            }
            AreaError::ConfigError { field, message } => {
                format!("Configuration problem with '{}': {}", field, message)
            }
            AreaError::IoError(e) => format!("Could not read input: {}", e),
            AreaError::SerializationError(e) => format!("Could not format output: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AreaError::InvalidArgument { .. } => "Pass a finite radius greater than or equal to zero",
            AreaError::ConfigError { .. } => "Check the command line flags or the TOML config file",
            AreaError::IoError(_) => "Make sure the config file exists and is readable",
            AreaError::SerializationError(_) => "Try the text output format instead",
        }
    }
}

pub type Result<T> = std::result::Result<T, AreaError>;

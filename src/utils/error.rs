use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Invalid email address: {reason}")]
    InvalidEmail { reason: String },

    #[error("Collector request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Collector returned HTTP {status}")]
    NetworkStatus { status: u16 },

    #[error("Collector rejected the signup: {message}")]
    RejectedByCollector { message: String },

    #[error("Local store error: {message}")]
    Storage { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Network,
    Collector,
    Storage,
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SubmitError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SubmitError::InvalidEmail { .. } => ErrorCategory::Validation,
            SubmitError::Network(_) | SubmitError::NetworkStatus { .. } => ErrorCategory::Network,
            SubmitError::RejectedByCollector { .. } => ErrorCategory::Collector,
            SubmitError::Storage { .. }
            | SubmitError::Io(_)
            | SubmitError::Serialization(_)
            | SubmitError::Csv(_) => ErrorCategory::Storage,
            SubmitError::Config { .. }
            | SubmitError::InvalidConfigValue { .. }
            | SubmitError::MissingConfig { .. } => ErrorCategory::Config,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation => ErrorSeverity::High,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Collector => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
            ErrorCategory::Config => ErrorSeverity::Critical,
        }
    }

    /// Message fit for end users. Everything except a validation failure is
    /// deliberately generic so collector internals never leak.
    pub fn user_friendly_message(&self) -> String {
        match self {
            SubmitError::InvalidEmail { reason } => reason.clone(),
            SubmitError::InvalidConfigValue { field, reason, .. } => {
                format!("Configuration problem with '{}': {}", field, reason)
            }
            SubmitError::MissingConfig { field } => {
                format!("Missing configuration: '{}'", field)
            }
            SubmitError::Config { message } => format!("Configuration problem: {}", message),
            _ => "Something went wrong. Please try again.".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Validation => "Check the email address and resubmit",
            ErrorCategory::Network => {
                "Check your network connection and the collector endpoint, then try again"
            }
            ErrorCategory::Collector => "The collector refused the signup; try a different address",
            ErrorCategory::Storage => "Check that the store directory exists and is writable",
            ErrorCategory::Config => "Fix the configuration and rerun",
        }
    }
}

pub type Result<T> = std::result::Result<T, SubmitError>;

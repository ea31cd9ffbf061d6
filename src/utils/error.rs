use thiserror::Error;

#[derive(Error, Debug)]
pub enum DepotError {
    #[error("Validation error: {field} = '{value}': {reason}")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },

    /// `report` is the analysis line produced just before the collapse.
    #[error("QUANTUM COLLAPSE! Object exploded: {id}")]
    CollapseError { id: String, report: String },

    #[error("Duplicate object id: {id}")]
    DuplicateIdError { id: String },

    #[error("Object {id} does not support emergency cooling")]
    NotCoolableError { id: String },

    #[error("Session is no longer running")]
    SessionTerminated,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Processing error: {message}")]
    ProcessingError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DepotError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DepotError::ValidationError { .. }
            | DepotError::DuplicateIdError { .. }
            | DepotError::NotCoolableError { .. } => ErrorSeverity::Low,
            DepotError::ConfigError { .. } => ErrorSeverity::Medium,
            DepotError::ProcessingError { .. }
            | DepotError::IoError(_)
            | DepotError::SerializationError(_) => ErrorSeverity::High,
            DepotError::CollapseError { .. } | DepotError::SessionTerminated => {
                ErrorSeverity::Critical
            }
        }
    }

    /// Collapse ends the whole run; nothing else does.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            DepotError::CollapseError { .. } | DepotError::SessionTerminated
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DepotError::ValidationError { field, reason, .. } => {
                format!("Invalid value for {}: {}", field, reason)
            }
            DepotError::CollapseError { id, .. } => {
                format!("Quantum collapse! Object {} exploded", id)
            }
            DepotError::DuplicateIdError { id } => {
                format!("An object with id {} is already stored", id)
            }
            DepotError::NotCoolableError { .. } => "This object cannot be cooled!".to_string(),
            DepotError::SessionTerminated => "The session is no longer running".to_string(),
            DepotError::ConfigError { message } => format!("Configuration problem: {}", message),
            DepotError::ProcessingError { message } => message.clone(),
            DepotError::IoError(e) => format!("Terminal I/O failed: {}", e),
            DepotError::SerializationError(e) => format!("Could not render status: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DepotError::ValidationError { .. } => "Check the value and try again",
            DepotError::CollapseError { .. } | DepotError::SessionTerminated => {
                "Start a new session; collapsed objects cannot be recovered"
            }
            DepotError::DuplicateIdError { .. } => "Generate a new object instead",
            DepotError::NotCoolableError { .. } => {
                "Only DarkMatter and AntiMatter support emergency cooling"
            }
            DepotError::ConfigError { .. } => "Fix the configuration file or command line flags",
            DepotError::ProcessingError { .. } => "Retry the operation",
            DepotError::IoError(_) => "Check that stdin/stdout are available",
            DepotError::SerializationError(_) => "Switch to --format text",
        }
    }
}

pub type Result<T> = std::result::Result<T, DepotError>;

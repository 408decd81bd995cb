use thiserror::Error;

#[derive(Error, Debug)]
pub enum HrmError {
    #[error("An employee named '{name}' already exists")]
    DuplicateName { name: String },

    #[error("No employee named '{name}'")]
    UnknownName { name: String },

    #[error("'{name}' is not a manager")]
    NotAManager { name: String },

    #[error("Line {line}: {reason}")]
    LineFormat { line: usize, reason: String },

    #[error("Resource not found: {resource}")]
    ResourceNotFound { resource: String },

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
}

impl HrmError {
    /// Unknown names and names in the wrong role form one "invalid argument"
    /// family; callers that only care about that distinction check here.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            HrmError::UnknownName { .. } | HrmError::NotAManager { .. }
        )
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            HrmError::ConfigError { .. } | HrmError::InvalidConfigValueError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, HrmError>;

//! Error handling module for the JDOM catalog core.
//!
//! All failures in the core are represented as return values, never panics.
//! Malformed durable data is not an error: the load path falls back to seed
//! data and only logs a warning.

/// Error codes as constants to avoid stringly-typed errors.
#[allow(dead_code)]
pub mod codes {
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const DUPLICATE: &str = "DUPLICATE";
    pub const INVALID_CREDENTIALS: &str = "INVALID_CREDENTIALS";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Record not found for update/delete
    NotFound(String),
    /// Registration with an email that already exists
    Duplicate(String),
    /// Login with an unknown email, inactive account, or wrong password
    InvalidCredentials(String),
    /// Validation error
    Validation(String),
    /// Failure serializing a collection for the durable store
    Serialization(String),
}

impl AppError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => codes::NOT_FOUND,
            AppError::Duplicate(_) => codes::DUPLICATE,
            AppError::InvalidCredentials(_) => codes::INVALID_CREDENTIALS,
            AppError::Validation(_) => codes::VALIDATION_ERROR,
            AppError::Serialization(_) => codes::SERIALIZATION_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            AppError::NotFound(msg) => msg.clone(),
            AppError::Duplicate(msg) => msg.clone(),
            AppError::InvalidCredentials(msg) => msg.clone(),
            AppError::Validation(msg) => msg.clone(),
            AppError::Serialization(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        AppError::Serialization(format!("JSON error: {}", err))
    }
}

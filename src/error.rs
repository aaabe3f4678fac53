//! # Resolver Error Types
//!
//! Only caller mistakes are errors. A reference that does not resolve, a
//! malformed token, or an unavailable host cache all surface as absence.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolverError {
    #[error("Invalid argument: {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("Invalid UDI: {value}: {reason}")]
    InvalidUdi { value: String, reason: String },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ResolverError {
    pub fn invalid_argument(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Raised when a transform callback was required but not supplied
    pub fn missing_transform() -> Self {
        Self::invalid_argument("transform", "a transform function must be specified")
    }

    pub fn invalid_udi(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUdi {
            value: value.into(),
            reason: reason.into(),
        }
    }
}

impl From<config::ConfigError> for ResolverError {
    fn from(err: config::ConfigError) -> Self {
        ResolverError::Configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ResolverError>;

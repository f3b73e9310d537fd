//! Error types for confmate

use thiserror::Error;

use crate::SessionId;

/// Core error type for confmate operations
#[derive(Debug, Error)]
pub enum CompanionError {
    #[error("Registration required")]
    NotRegistered,

    #[error("Session already in schedule: {0}")]
    AlreadyScheduled(SessionId),

    #[error("Session not found in catalog: {0}")]
    SessionNotFound(SessionId),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Failed to parse session time '{value}': {message}")]
    TimeParse { value: String, message: String },
}

impl CompanionError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn time_parse(value: impl Into<String>, message: impl Into<String>) -> Self {
        Self::TimeParse {
            value: value.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CompanionError>;

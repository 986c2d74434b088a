// src/error/types.rs
use crate::domain::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Resource not found: {0}")]
    NotFound(String),
}

/// The five failure categories the UI distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InputFormat,
    RangeViolation,
    InvariantViolation,
    NotFound,
    PersistenceFailure,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Domain(DomainError::InputFormat(_)) => ErrorKind::InputFormat,
            AppError::Domain(DomainError::RangeViolation(_)) => ErrorKind::RangeViolation,
            AppError::Domain(DomainError::InvariantViolation(_)) => ErrorKind::InvariantViolation,
            AppError::Domain(DomainError::NotFound(_)) | AppError::NotFound(_) => {
                ErrorKind::NotFound
            }
            AppError::Serialization(_) | AppError::Io(_) => ErrorKind::PersistenceFailure,
        }
    }

    pub fn is_persistence(&self) -> bool {
        self.kind() == ErrorKind::PersistenceFailure
    }
}

pub type AppResult<T> = Result<T, AppError>;

// src/application/error_handling.rs
//
// Error presentation for the terminal UI
//
// ARCHITECTURE:
// - Maps internal errors → user-friendly responses
// - Provides consistent error format for the menus
// - Logs persistence failures for debugging

use crate::domain::DomainError;
use crate::error::{AppError, ErrorKind};

/// Standard error response for UI
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories for UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    /// Text that could not be parsed, or blank required text
    Validation,

    /// Number or date outside its allowed range
    OutOfRange,

    /// Operation refused by a domain rule
    Rejected,

    /// No results / nothing to do
    NotFound,

    /// Data files could not be read or written
    Persistence,
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        let (error_type, message) = match error.kind() {
            ErrorKind::InputFormat => (ErrorType::Validation, "Entrada inválida"),
            ErrorKind::RangeViolation => (ErrorType::OutOfRange, "Valor fora do intervalo permitido"),
            ErrorKind::InvariantViolation => (ErrorType::Rejected, "Operação não permitida"),
            ErrorKind::NotFound => (ErrorType::NotFound, "Nenhum resultado encontrado"),
            ErrorKind::PersistenceFailure => {
                log::error!("Persistence failure: {:?}", error);
                (
                    ErrorType::Persistence,
                    "Falha ao gravar os dados (a alteração continua em memória)",
                )
            }
        };

        let details = match &error {
            AppError::Domain(e) => domain_detail(e),
            outro => outro.to_string(),
        };

        Self {
            error_type,
            message: message.to_string(),
            details: Some(details),
        }
    }

    pub fn from_domain_error(error: DomainError) -> Self {
        Self::from_app_error(AppError::Domain(error))
    }

    /// Create not found error
    pub fn not_found(resource: &str) -> Self {
        Self {
            error_type: ErrorType::NotFound,
            message: format!("{} não encontrado", resource),
            details: None,
        }
    }
}

fn domain_detail(error: &DomainError) -> String {
    match error {
        DomainError::InputFormat(m)
        | DomainError::RangeViolation(m)
        | DomainError::InvariantViolation(m)
        | DomainError::NotFound(m) => m.clone(),
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.details {
            Some(details) => write!(f, "{}: {}", self.message, details),
            None => write!(f, "{}", self.message),
        }
    }
}

// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod audiovisual;
pub mod book;
pub mod film;
pub mod input;
pub mod media;
pub mod review;
pub mod series;
pub mod text;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Normalization
pub use text::{contains_normalized, equivalent, normalize};

// Media capability set
pub use media::{validate_media_info, Media, MediaId, MediaInfo, MediaKind};

// Review
pub use review::{validate_review, Review, FORMATO_DATA_AVALIACAO, FORMATO_DATA_CONSUMO};

// Audiovisual (shared by Film, Series, Season)
pub use audiovisual::{Audiovisual, AudiovisualMedia, Elenco};

// Book
pub use book::{validate_book, Book};

// Film
pub use film::{validate_film, Film};

// Series & Season
pub use series::{validate_season, validate_series, Season, Series};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent rejected inputs and violations of business rules
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Text could not be parsed, or required text is blank
    #[error("Invalid input: {0}")]
    InputFormat(String),

    /// Numeric or date value outside its allowed range
    #[error("Out of range: {0}")]
    RangeViolation(String),

    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;

use super::entity::Film;
use crate::domain::{validate_media_info, DomainError, DomainResult, Media};

/// Validates all Film invariants
pub fn validate_film(film: &Film) -> DomainResult<()> {
    validate_media_info(film.info())?;
    validate_duracao(film.duracao())?;
    Ok(())
}

/// Duration must be a positive number of minutes
pub fn validate_duracao(duracao: u32) -> DomainResult<()> {
    if duracao == 0 {
        return Err(DomainError::RangeViolation(
            "Film duration must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

/// Invariants that must hold true for Film domain:
///
/// 1. Every MediaInfo invariant holds
/// 2. Duration is > 0 minutes
/// 3. Cast roles are unique under normalization; a role never has an empty list

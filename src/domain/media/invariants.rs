use super::entity::MediaInfo;
use crate::domain::{validate_review, DomainError, DomainResult};

/// Validates the invariants shared by every Media
pub fn validate_media_info(info: &MediaInfo) -> DomainResult<()> {
    validate_titulo(info.titulo())?;
    for review in info.avaliacoes() {
        validate_review(review)?;
    }
    Ok(())
}

/// Title cannot be empty
pub fn validate_titulo(titulo: &str) -> DomainResult<()> {
    if titulo.trim().is_empty() {
        return Err(DomainError::InputFormat(
            "Title cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Invariants that must hold true for every Media:
///
/// 1. Title cannot be empty
/// 2. Identity (UUID) is immutable and is not a natural key
/// 3. Duplicated media and duplicated genres are tolerated
/// 4. Reviews are kept in append order, the last one is the latest
/// 5. A review can only be attached while `ja_consumiu` is true
/// 6. Genre removal removes every equivalent entry

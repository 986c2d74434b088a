use super::entity::Book;
use crate::domain::{validate_media_info, DomainResult, Media};

/// Validates all Book invariants
pub fn validate_book(book: &Book) -> DomainResult<()> {
    validate_media_info(book.info())
}

/// Invariants that must hold true for Book domain:
///
/// 1. Every MediaInfo invariant holds
/// 2. Author, publisher and ISBN are free text and may be blank
/// 3. ISBN is not a primary key, two books may share it

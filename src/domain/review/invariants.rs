use chrono::{Local, NaiveDate, NaiveDateTime};

use super::entity::{Review, FORMATO_DATA_AVALIACAO, NOTA_MAXIMA, NOTA_MINIMA};
use crate::domain::{DomainError, DomainResult};

/// Validates all Review invariants
pub fn validate_review(review: &Review) -> DomainResult<()> {
    validate_nota(review.nota())?;
    validate_comentario(review.comentario())?;
    validate_data_avaliacao(review.data_avaliacao())?;
    if let Some(data) = review.data_consumo() {
        validate_data_consumo(data, Local::now().date_naive())?;
    }
    Ok(())
}

/// Score must lie in [1, 5]
pub fn validate_nota(nota: f32) -> DomainResult<()> {
    if !(NOTA_MINIMA..=NOTA_MAXIMA).contains(&nota) {
        return Err(DomainError::RangeViolation(format!(
            "Score {} must be between {:.1} and {:.1}",
            nota, NOTA_MINIMA, NOTA_MAXIMA
        )));
    }
    Ok(())
}

fn validate_comentario(comentario: &str) -> DomainResult<()> {
    if comentario.trim().is_empty() {
        return Err(DomainError::InputFormat(
            "Review comment cannot be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_data_avaliacao(data_avaliacao: &str) -> DomainResult<()> {
    NaiveDateTime::parse_from_str(data_avaliacao, FORMATO_DATA_AVALIACAO)
        .map(|_| ())
        .map_err(|e| {
            DomainError::InputFormat(format!(
                "Review timestamp '{}' is not dd/MM/yyyy HH:mm:ss: {}",
                data_avaliacao, e
            ))
        })
}

/// Consumption date cannot be after `hoje`
pub fn validate_data_consumo(data: NaiveDate, hoje: NaiveDate) -> DomainResult<()> {
    if data > hoje {
        return Err(DomainError::RangeViolation(format!(
            "Consumption date {} is in the future",
            data
        )));
    }
    Ok(())
}

/// Critical Review Invariants:
///
/// 1. Score is in [1.0, 5.0] (fractional scores allowed)
/// 2. Comment is not blank
/// 3. Consumption date, when present, is not in the future
/// 4. Recording timestamp is `dd/MM/yyyy HH:mm:ss`
/// 5. A review only attaches to consumed media (enforced by MediaInfo)

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    #[test]
    fn test_valid_review() {
        let review = Review::new(4.5, "Muito bom".to_string(), Some(today())).unwrap();
        assert_eq!(review.nota(), 4.5);
        assert!(NaiveDateTime::parse_from_str(review.data_avaliacao(), FORMATO_DATA_AVALIACAO).is_ok());
    }

    #[test]
    fn test_score_out_of_range_fails() {
        for nota in [0.0, 0.99, 5.01, 6.0, -1.0] {
            let err = Review::new(nota, "x".to_string(), None).unwrap_err();
            assert!(matches!(err, DomainError::RangeViolation(_)), "{}", nota);
        }
        assert!(Review::new(1.0, "x".to_string(), None).is_ok());
        assert!(Review::new(5.0, "x".to_string(), None).is_ok());
    }

    #[test]
    fn test_future_consumption_fails() {
        let amanha = today() + Duration::days(1);
        let err = Review::new(3.0, "x".to_string(), Some(amanha)).unwrap_err();
        assert!(matches!(err, DomainError::RangeViolation(_)));
    }

    #[test]
    fn test_blank_comment_fails() {
        let err = Review::new(3.0, "   ".to_string(), None).unwrap_err();
        assert!(matches!(err, DomainError::InputFormat(_)));
    }

    #[test]
    fn test_bad_timestamp_fails() {
        let err = Review::with_timestamp(3.0, "x".to_string(), "2025-04-08".to_string(), None)
            .unwrap_err();
        assert!(matches!(err, DomainError::InputFormat(_)));
    }
}

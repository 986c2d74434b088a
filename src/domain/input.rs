// src/domain/input.rs
//
// Parsing of user-typed text into domain values.
// Every failure is an InputFormat error, except values that parse but fall
// outside their allowed range (RangeViolation).

use chrono::{Local, NaiveDate};

use crate::domain::review::{validate_data_consumo, validate_nota, FORMATO_DATA_CONSUMO};
use crate::domain::{DomainError, DomainResult};

pub fn parse_int(texto: &str) -> DomainResult<i32> {
    texto
        .trim()
        .parse::<i32>()
        .map_err(|_| DomainError::InputFormat(format!("'{}' is not an integer", texto.trim())))
}

/// Integer > 0 (durations, season numbers, episode counts)
pub fn parse_positive_int(texto: &str) -> DomainResult<u32> {
    let valor = texto
        .trim()
        .parse::<u32>()
        .map_err(|_| DomainError::InputFormat(format!("'{}' is not a positive integer", texto.trim())))?;
    if valor == 0 {
        return Err(DomainError::RangeViolation(
            "Value must be greater than zero".to_string(),
        ));
    }
    Ok(valor)
}

/// Score in [1, 5]; accepts both "4.5" and "4,5"
pub fn parse_score(texto: &str) -> DomainResult<f32> {
    let nota = texto
        .trim()
        .replace(',', ".")
        .parse::<f32>()
        .map_err(|_| DomainError::InputFormat(format!("'{}' is not a number", texto.trim())))?;
    if !nota.is_finite() {
        return Err(DomainError::InputFormat(format!(
            "'{}' is not a number",
            texto.trim()
        )));
    }
    validate_nota(nota)?;
    Ok(nota)
}

/// Consumption date typed as dd/MM/yyyy, never after today
pub fn parse_date(texto: &str) -> DomainResult<NaiveDate> {
    let data = NaiveDate::parse_from_str(texto.trim(), FORMATO_DATA_CONSUMO).map_err(|_| {
        DomainError::InputFormat(format!("'{}' is not a dd/MM/yyyy date", texto.trim()))
    })?;
    validate_data_consumo(data, Local::now().date_naive())?;
    Ok(data)
}

/// Comma separated list; entries are trimmed and blanks skipped
pub fn parse_list(texto: &str) -> Vec<String> {
    texto
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// "sim"/"s" or "não"/"nao"/"n", any case
pub fn parse_yes_no(texto: &str) -> DomainResult<bool> {
    match crate::domain::normalize(texto).as_str() {
        "sim" | "s" => Ok(true),
        "nao" | "n" => Ok(false),
        _ => Err(DomainError::InputFormat(format!(
            "'{}' is not sim/não",
            texto.trim()
        ))),
    }
}

/// Non-blank text, trimmed
pub fn require_text(texto: &str, campo: &str) -> DomainResult<String> {
    let texto = texto.trim();
    if texto.is_empty() {
        return Err(DomainError::InputFormat(format!("{} cannot be empty", campo)));
    }
    Ok(texto.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int(" 1937 ").unwrap(), 1937);
        assert_eq!(parse_int("-5").unwrap(), -5);
        assert!(matches!(parse_int("mil"), Err(DomainError::InputFormat(_))));
    }

    #[test]
    fn test_parse_positive_int() {
        assert_eq!(parse_positive_int("169").unwrap(), 169);
        assert!(matches!(parse_positive_int("0"), Err(DomainError::RangeViolation(_))));
        assert!(matches!(parse_positive_int("-3"), Err(DomainError::InputFormat(_))));
    }

    #[test]
    fn test_parse_score() {
        assert_eq!(parse_score("4,5").unwrap(), 4.5);
        assert_eq!(parse_score("5").unwrap(), 5.0);
        assert!(matches!(parse_score("6.0"), Err(DomainError::RangeViolation(_))));
        assert!(matches!(parse_score("NaN"), Err(DomainError::InputFormat(_))));
        assert!(matches!(parse_score("bom"), Err(DomainError::InputFormat(_))));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("25/07/2012").unwrap(),
            NaiveDate::from_ymd_opt(2012, 7, 25).unwrap()
        );
        assert!(matches!(parse_date("2012-07-25"), Err(DomainError::InputFormat(_))));

        let amanha = (Local::now().date_naive() + Duration::days(1))
            .format(FORMATO_DATA_CONSUMO)
            .to_string();
        assert!(matches!(parse_date(&amanha), Err(DomainError::RangeViolation(_))));
    }

    #[test]
    fn test_parse_list_and_yes_no() {
        assert_eq!(
            parse_list("Drama, , Crime ,Ação"),
            vec!["Drama".to_string(), "Crime".to_string(), "Ação".to_string()]
        );
        assert!(parse_yes_no("Sim").unwrap());
        assert!(!parse_yes_no("NÃO").unwrap());
        assert!(parse_yes_no("talvez").is_err());
        assert!(require_text("  ", "Título").is_err());
        assert_eq!(require_text(" Duna ", "Título").unwrap(), "Duna");
    }
}

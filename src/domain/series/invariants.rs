use super::entity::Series;
use super::season::Season;
use crate::domain::{validate_media_info, DomainError, DomainResult, Media, Review};

/// Tolerance used when checking a stored aggregate against a recomputed one
const NOTA_EPSILON: f32 = 1e-4;

/// Validates all Series invariants, seasons included
pub fn validate_series(series: &Series) -> DomainResult<()> {
    validate_media_info(series.info())?;
    validate_season_order(series)?;
    for temporada in series.temporadas() {
        validate_season(temporada)?;
    }
    validate_aggregate(series)?;
    Ok(())
}

/// Validates a single season
pub fn validate_season(season: &Season) -> DomainResult<()> {
    validate_media_info(season.info())?;
    validate_numero(season.numero())?;
    validate_quantidade_episodios(season.quantidade_episodios())?;
    Ok(())
}

/// Season numbers start at 1
pub fn validate_numero(numero: u32) -> DomainResult<()> {
    if numero == 0 {
        return Err(DomainError::RangeViolation(
            "Season number must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_quantidade_episodios(quantidade: u32) -> DomainResult<()> {
    if quantidade == 0 {
        return Err(DomainError::RangeViolation(
            "Episode count must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

/// Season numbers must be strictly increasing
fn validate_season_order(series: &Series) -> DomainResult<()> {
    for par in series.temporadas().windows(2) {
        if par[0].numero() >= par[1].numero() {
            return Err(DomainError::InvariantViolation(format!(
                "Seasons of '{}' are not strictly increasing ({} then {})",
                series.titulo(),
                par[0].numero(),
                par[1].numero()
            )));
        }
    }
    Ok(())
}

/// Stored aggregate must match the mean of the latest season scores
fn validate_aggregate(series: &Series) -> DomainResult<()> {
    let notas: Vec<f32> = series
        .temporadas()
        .iter()
        .filter_map(|t| t.latest_review().map(Review::nota))
        .collect();
    let esperado = if notas.is_empty() {
        0.0
    } else {
        notas.iter().sum::<f32>() / notas.len() as f32
    };
    if (series.nota() - esperado).abs() > NOTA_EPSILON {
        return Err(DomainError::InvariantViolation(format!(
            "Aggregate score of '{}' is {} but its seasons average {}",
            series.titulo(),
            series.nota(),
            esperado
        )));
    }
    Ok(())
}

/// Invariants that must hold true for Series domain:
///
/// 1. Every MediaInfo invariant holds, for the series and for each season
/// 2. Season numbers are unique and kept sorted ascending
/// 3. Season number and episode count are > 0
/// 4. `nota` is the mean of the latest review score of each reviewed season, 0.0 if none
/// 5. `ano_encerramento == 0` means still running
/// 6. A Series exclusively owns its seasons

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::invariants::validate_review;
use crate::domain::DomainResult;

/// Lowest accepted score
pub const NOTA_MINIMA: f32 = 1.0;

/// Highest accepted score
pub const NOTA_MAXIMA: f32 = 5.0;

/// Format of `data_avaliacao` (local time)
pub const FORMATO_DATA_AVALIACAO: &str = "%d/%m/%Y %H:%M:%S";

/// Format in which the user types and reads `data_consumo`
pub const FORMATO_DATA_CONSUMO: &str = "%d/%m/%Y";

/// A user-authored review attached to a Media (or a Season)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Score in [1.0, 5.0], fractional values allowed
    nota: f32,

    /// Free text comment
    comentario: String,

    /// When the review was recorded, `dd/MM/yyyy HH:mm:ss`
    data_avaliacao: String,

    /// When the work was consumed (never in the future)
    data_consumo: Option<NaiveDate>,
}

impl Review {
    /// Create a review stamped with the current local time.
    /// Rejects out-of-range scores, blank comments and future consumption dates.
    pub fn new(nota: f32, comentario: String, data_consumo: Option<NaiveDate>) -> DomainResult<Self> {
        let data_avaliacao = Local::now().format(FORMATO_DATA_AVALIACAO).to_string();
        Self::with_timestamp(nota, comentario, data_avaliacao, data_consumo)
    }

    /// Create a review with an explicit recording timestamp
    pub fn with_timestamp(
        nota: f32,
        comentario: String,
        data_avaliacao: String,
        data_consumo: Option<NaiveDate>,
    ) -> DomainResult<Self> {
        let review = Self {
            nota,
            comentario: comentario.trim().to_string(),
            data_avaliacao,
            data_consumo,
        };
        validate_review(&review)?;
        Ok(review)
    }

    pub fn nota(&self) -> f32 {
        self.nota
    }

    pub fn comentario(&self) -> &str {
        &self.comentario
    }

    pub fn data_avaliacao(&self) -> &str {
        &self.data_avaliacao
    }

    pub fn data_consumo(&self) -> Option<NaiveDate> {
        self.data_consumo
    }

    /// Consumption date as `dd/MM/yyyy`
    pub fn data_consumo_formatada(&self) -> Option<String> {
        self.data_consumo
            .map(|data| data.format(FORMATO_DATA_CONSUMO).to_string())
    }
}

impl std::fmt::Display for Review {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "  - Nota: {:.1}", self.nota)?;
        writeln!(f, "    Comentário: {}", self.comentario)?;
        writeln!(
            f,
            "    Data de consumo: {}",
            self.data_consumo_formatada()
                .unwrap_or_else(|| "Sem data de consumo".to_string())
        )?;
        write!(f, "    Data da avaliação: {}", self.data_avaliacao)
    }
}

// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - DTOs are simple, display-ready structs
// - Conversion FROM domain entities only (never TO)

use crate::catalog::MediaRef;
use crate::domain::{Media, Review};

// ============================================================================
// MEDIA DTOs
// ============================================================================

/// One line of a listing
#[derive(Debug, Clone, PartialEq)]
pub struct MediaSummaryDto {
    pub id: String,
    pub tipo: String,
    pub titulo: String,
    pub ano_lancamento: i32,
    pub generos: Vec<String>,
    /// Latest score (series: own latest review or the season aggregate)
    pub nota: Option<f32>,
    pub ja_consumiu: bool,
    /// "Temporada N" / series status, empty for books and films
    pub detalhe: String,
}

impl From<MediaRef<'_>> for MediaSummaryDto {
    fn from(media: MediaRef<'_>) -> Self {
        let nota = match media {
            MediaRef::Series(s) if s.avaliacoes().is_empty() && s.temporadas().is_empty() => None,
            MediaRef::Series(s) => Some(s.latest_score()),
            outro => outro.latest_review().map(Review::nota),
        };
        let detalhe = match media {
            MediaRef::Series(s) => s.status_label(),
            MediaRef::Season(t) => format!("Temporada {}", t.numero()),
            _ => String::new(),
        };

        Self {
            id: media.id().to_string(),
            tipo: media.kind().to_string(),
            titulo: media.titulo().to_string(),
            ano_lancamento: media.ano_lancamento(),
            generos: media.generos().to_vec(),
            nota,
            ja_consumiu: media.ja_consumiu(),
            detalhe,
        }
    }
}

impl std::fmt::Display for MediaSummaryDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {} ({})", self.tipo, self.titulo, self.ano_lancamento)?;
        if !self.detalhe.is_empty() {
            write!(f, " - {}", self.detalhe)?;
        }
        match self.nota {
            Some(nota) => write!(f, " - nota {:.1}", nota)?,
            None => write!(f, " - sem avaliação")?,
        }
        if !self.generos.is_empty() {
            write!(f, " - {}", self.generos.join(", "))?;
        }
        Ok(())
    }
}

// ============================================================================
// REVIEW DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewDto {
    /// 1-based position shown to the user
    pub posicao: usize,
    /// Season the review belongs to, when listed through its series
    pub temporada: Option<u32>,
    pub nota: f32,
    pub comentario: String,
    pub data_avaliacao: String,
    pub data_consumo: Option<String>,
}

impl ReviewDto {
    pub fn from_review(posicao: usize, review: &Review) -> Self {
        Self {
            posicao,
            temporada: None,
            nota: review.nota(),
            comentario: review.comentario().to_string(),
            data_avaliacao: review.data_avaliacao().to_string(),
            data_consumo: review.data_consumo_formatada(),
        }
    }

    pub fn from_season_review(posicao: usize, temporada: u32, review: &Review) -> Self {
        Self {
            temporada: Some(temporada),
            ..Self::from_review(posicao, review)
        }
    }
}

impl std::fmt::Display for ReviewDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.temporada {
            Some(numero) => writeln!(f, "{}. Temporada {} - nota {:.1}", self.posicao, numero, self.nota)?,
            None => writeln!(f, "{}. Nota {:.1}", self.posicao, self.nota)?,
        }
        writeln!(f, "   Comentário: {}", self.comentario)?;
        writeln!(
            f,
            "   Data de consumo: {}",
            self.data_consumo.as_deref().unwrap_or("não informada")
        )?;
        write!(f, "   Avaliado em: {}", self.data_avaliacao)
    }
}

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::invariants::validate_titulo;
use crate::domain::text::equivalent;
use crate::domain::{DomainError, DomainResult, Review};

/// Opaque identity of a cataloged item.
/// Not a natural key: two items with identical content are still distinct.
pub type MediaId = Uuid;

/// Kind tag of a cataloged item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Book,
    Film,
    Series,
    Season,
}

/// Attributes shared by every cataloged item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaInfo {
    /// Internal immutable identifier
    id: MediaId,

    /// Title (never blank)
    titulo: String,

    /// Genres in insertion order; duplicates are tolerated
    generos: Vec<String>,

    /// Release year
    ano_lancamento: i32,

    /// Reviews in append order (last = most recent)
    avaliacoes: Vec<Review>,

    /// Whether the owner already read/watched it
    ja_consumiu: bool,
}

impl MediaInfo {
    /// Create the shared part of a new Media
    pub fn new(titulo: String, generos: Vec<String>, ano_lancamento: i32) -> DomainResult<Self> {
        validate_titulo(&titulo)?;
        Ok(Self {
            id: Uuid::new_v4(),
            titulo: titulo.trim().to_string(),
            generos,
            ano_lancamento,
            avaliacoes: Vec::new(),
            ja_consumiu: false,
        })
    }

    pub fn id(&self) -> MediaId {
        self.id
    }

    pub fn titulo(&self) -> &str {
        &self.titulo
    }

    pub fn generos(&self) -> &[String] {
        &self.generos
    }

    pub fn ano_lancamento(&self) -> i32 {
        self.ano_lancamento
    }

    pub fn avaliacoes(&self) -> &[Review] {
        &self.avaliacoes
    }

    pub fn ja_consumiu(&self) -> bool {
        self.ja_consumiu
    }

    pub fn set_titulo(&mut self, titulo: String) -> DomainResult<()> {
        validate_titulo(&titulo)?;
        self.titulo = titulo.trim().to_string();
        Ok(())
    }

    pub fn set_ano_lancamento(&mut self, ano: i32) {
        self.ano_lancamento = ano;
    }

    pub fn set_ja_consumiu(&mut self, ja_consumiu: bool) {
        self.ja_consumiu = ja_consumiu;
    }

    /// Replace the whole genre list
    pub fn set_generos(&mut self, generos: Vec<String>) {
        self.generos = generos;
    }

    /// Append genres (no duplicate check)
    pub fn add_generos(&mut self, generos: Vec<String>) {
        self.generos.extend(generos);
    }

    /// Remove every genre equivalent to `genero`. Returns how many were removed.
    pub fn remove_genero(&mut self, genero: &str) -> usize {
        let antes = self.generos.len();
        self.generos.retain(|g| !equivalent(g, genero));
        antes - self.generos.len()
    }

    /// Attach a review. The item must already be consumed.
    pub fn add_avaliacao(&mut self, avaliacao: Review) -> DomainResult<usize> {
        if !self.ja_consumiu {
            return Err(DomainError::InvariantViolation(format!(
                "'{}' must be marked as consumed before it can be reviewed",
                self.titulo
            )));
        }
        self.avaliacoes.push(avaliacao);
        Ok(self.avaliacoes.len() - 1)
    }

    /// Overwrite the review at `indice`, returning the previous one
    pub fn replace_avaliacao(&mut self, indice: usize, avaliacao: Review) -> DomainResult<Review> {
        let slot = self
            .avaliacoes
            .get_mut(indice)
            .ok_or_else(|| review_not_found(indice, &self.titulo))?;
        Ok(std::mem::replace(slot, avaliacao))
    }

    /// Delete the review at `indice`
    pub fn remove_avaliacao(&mut self, indice: usize) -> DomainResult<Review> {
        if indice >= self.avaliacoes.len() {
            return Err(review_not_found(indice, &self.titulo));
        }
        Ok(self.avaliacoes.remove(indice))
    }
}

fn review_not_found(indice: usize, titulo: &str) -> DomainError {
    DomainError::NotFound(format!("review #{} of '{}'", indice + 1, titulo))
}

/// Read-only capability set shared by every cataloged item.
///
/// Query and ranking code depends only on this trait.
pub trait Media {
    fn info(&self) -> &MediaInfo;

    fn kind(&self) -> MediaKind;

    fn id(&self) -> MediaId {
        self.info().id()
    }

    fn titulo(&self) -> &str {
        self.info().titulo()
    }

    fn generos(&self) -> &[String] {
        self.info().generos()
    }

    fn ano_lancamento(&self) -> i32 {
        self.info().ano_lancamento()
    }

    fn avaliacoes(&self) -> &[Review] {
        self.info().avaliacoes()
    }

    fn ja_consumiu(&self) -> bool {
        self.info().ja_consumiu()
    }

    /// Most recently appended review
    fn latest_review(&self) -> Option<&Review> {
        self.avaliacoes().last()
    }

    /// Score used for ranking: latest review, 0.0 when there is none
    fn latest_score(&self) -> f32 {
        self.latest_review().map_or(0.0, Review::nota)
    }
}

impl<M: Media + ?Sized> Media for &M {
    fn info(&self) -> &MediaInfo {
        (**self).info()
    }

    fn kind(&self) -> MediaKind {
        (**self).kind()
    }

    fn latest_score(&self) -> f32 {
        (**self).latest_score()
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Book => write!(f, "Livro"),
            MediaKind::Film => write!(f, "Filme"),
            MediaKind::Series => write!(f, "Série"),
            MediaKind::Season => write!(f, "Temporada"),
        }
    }
}

impl std::fmt::Display for MediaInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Título: {}", self.titulo)?;
        writeln!(f, "Ano de Lançamento: {}", self.ano_lancamento)?;
        writeln!(
            f,
            "Gêneros: {}",
            if self.generos.is_empty() {
                "Nenhum".to_string()
            } else {
                self.generos.join(", ")
            }
        )?;
        write!(
            f,
            "Status: {}",
            if self.ja_consumiu { "Já consumido" } else { "Não consumido" }
        )
    }
}

// src/services/query_service.rs
//
// Searches, filters and rankings over any sequence of cataloged items.
// Every function is pure and keeps source order (stable).

use crate::domain::{contains_normalized, equivalent, normalize, AudiovisualMedia, Book, Film, Media};

// ============================================================================
// SEARCH
// ============================================================================

/// Items whose title is equivalent to `titulo`
pub fn by_title<'a, M, I>(titulo: &str, src: I) -> Vec<&'a M>
where
    M: Media + 'a,
    I: IntoIterator<Item = &'a M>,
{
    let chave = normalize(titulo);
    src.into_iter()
        .filter(|m| normalize(m.titulo()) == chave)
        .collect()
}

/// Items with at least one genre whose key contains the key of `genero`
pub fn by_genre<'a, M, I>(genero: &str, src: I) -> Vec<&'a M>
where
    M: Media + 'a,
    I: IntoIterator<Item = &'a M>,
{
    src.into_iter()
        .filter(|m| m.generos().iter().any(|g| contains_normalized(g, genero)))
        .collect()
}

pub fn by_year<'a, M, I>(ano: i32, src: I) -> Vec<&'a M>
where
    M: Media + 'a,
    I: IntoIterator<Item = &'a M>,
{
    src.into_iter()
        .filter(|m| m.ano_lancamento() == ano)
        .collect()
}

pub fn by_author<'a, I>(autor: &str, src: I) -> Vec<&'a Book>
where
    I: IntoIterator<Item = &'a Book>,
{
    src.into_iter()
        .filter(|b| equivalent(b.autor(), autor))
        .collect()
}

/// ISBN compared under normalization, so "85-359-0277-5" matches "8535902775"
pub fn by_isbn<'a, I>(isbn: &str, src: I) -> Vec<&'a Book>
where
    I: IntoIterator<Item = &'a Book>,
{
    src.into_iter()
        .filter(|b| equivalent(b.isbn(), isbn))
        .collect()
}

pub fn by_director<'a, I>(direcao: &str, src: I) -> Vec<&'a Film>
where
    I: IntoIterator<Item = &'a Film>,
{
    src.into_iter()
        .filter(|f| equivalent(f.direcao(), direcao))
        .collect()
}

/// Items whose cast lists `nome` under role `funcao`.
/// Role and name are both matched as whole normalized keys.
pub fn by_cast<'a, M, I>(funcao: &str, nome: &str, src: I) -> Vec<&'a M>
where
    M: AudiovisualMedia + 'a,
    I: IntoIterator<Item = &'a M>,
{
    src.into_iter()
        .filter(|m| m.audiovisual().has_cast_member(funcao, nome))
        .collect()
}

// ============================================================================
// FILTERS
// ============================================================================

/// Items with a genre equivalent to `genero` (dropdown semantics, no substring)
pub fn filter_genre<'a, M, I>(genero: &str, src: I) -> Vec<&'a M>
where
    M: Media + 'a,
    I: IntoIterator<Item = &'a M>,
{
    src.into_iter()
        .filter(|m| m.generos().iter().any(|g| equivalent(g, genero)))
        .collect()
}

pub fn filter_year<'a, M, I>(ano: i32, src: I) -> Vec<&'a M>
where
    M: Media + 'a,
    I: IntoIterator<Item = &'a M>,
{
    by_year(ano, src)
}

// ============================================================================
// RANKING
// ============================================================================

/// Highest latest-review score first; ties keep source order
pub fn rank_best_first<'a, M, I>(src: I) -> Vec<&'a M>
where
    M: Media + 'a,
    I: IntoIterator<Item = &'a M>,
{
    let mut ordenados: Vec<&'a M> = src.into_iter().collect();
    ordenados.sort_by(|a, b| b.latest_score().total_cmp(&a.latest_score()));
    ordenados
}

/// Lowest latest-review score first; ties keep source order
pub fn rank_worst_first<'a, M, I>(src: I) -> Vec<&'a M>
where
    M: Media + 'a,
    I: IntoIterator<Item = &'a M>,
{
    let mut ordenados: Vec<&'a M> = src.into_iter().collect();
    ordenados.sort_by(|a, b| a.latest_score().total_cmp(&b.latest_score()));
    ordenados
}

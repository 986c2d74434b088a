// src/repositories/catalog_repository.rs
//
// Whole-collection persistence, one JSON file per media kind.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

use crate::domain::{validate_book, validate_film, validate_series, Book, DomainResult, Film, Series};
use crate::error::AppResult;
use crate::storage::DataPaths;

/// Load-all / save-all access to the three collections.
///
/// Loading fails (and the caller treats the kind as "not loaded") when the
/// file is missing, unreadable, not valid JSON, or holds a record that
/// breaks a domain invariant.
#[cfg_attr(test, mockall::automock)]
pub trait CatalogRepository: Send + Sync {
    fn load_books(&self) -> AppResult<Vec<Book>>;
    fn load_films(&self) -> AppResult<Vec<Film>>;
    fn load_series(&self) -> AppResult<Vec<Series>>;

    fn save_books(&self, livros: &[Book]) -> AppResult<()>;
    fn save_films(&self, filmes: &[Film]) -> AppResult<()>;
    fn save_series(&self, series: &[Series]) -> AppResult<()>;
}

pub struct FileCatalogRepository {
    paths: DataPaths,
}

impl FileCatalogRepository {
    pub fn new(paths: DataPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &DataPaths {
        &self.paths
    }

    fn read_all<T, F>(path: &Path, validate: F) -> AppResult<Vec<T>>
    where
        T: DeserializeOwned,
        F: Fn(&T) -> DomainResult<()>,
    {
        let texto = std::fs::read_to_string(path)?;
        let registros: Vec<T> = serde_json::from_str(&texto)?;
        for registro in &registros {
            validate(registro)?;
        }
        log::info!("Loaded {} records from {}", registros.len(), path.display());
        Ok(registros)
    }

    fn write_all<T: Serialize>(&self, path: &Path, registros: &[T]) -> AppResult<()> {
        // The directory may have been removed since start-up
        std::fs::create_dir_all(&self.paths.dir)?;
        let texto = serde_json::to_string_pretty(registros)?;
        std::fs::write(path, texto)?;
        log::debug!("Saved {} records to {}", registros.len(), path.display());
        Ok(())
    }
}

impl CatalogRepository for FileCatalogRepository {
    fn load_books(&self) -> AppResult<Vec<Book>> {
        Self::read_all(&self.paths.livros, validate_book)
    }

    fn load_films(&self) -> AppResult<Vec<Film>> {
        Self::read_all(&self.paths.filmes, validate_film)
    }

    fn load_series(&self) -> AppResult<Vec<Series>> {
        Self::read_all(&self.paths.series, validate_series)
    }

    fn save_books(&self, livros: &[Book]) -> AppResult<()> {
        self.write_all(&self.paths.livros, livros)
    }

    fn save_films(&self, filmes: &[Film]) -> AppResult<()> {
        self.write_all(&self.paths.filmes, filmes)
    }

    fn save_series(&self, series: &[Series]) -> AppResult<()> {
        self.write_all(&self.paths.series, series)
    }
}

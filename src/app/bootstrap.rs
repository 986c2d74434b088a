// src/app/bootstrap.rs
//
// Start-up wiring: data directory -> repository -> catalog -> service.
//
// Each kind is loaded independently. A kind that fails to load keeps an empty
// collection. When no kind loads at all, the demo dataset is installed and
// written out right away.

use std::sync::Arc;

use super::seed::demo_catalog;
use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::domain::MediaKind;
use crate::error::AppResult;
use crate::repositories::{CatalogRepository, FileCatalogRepository};
use crate::services::CatalogService;
use crate::storage::resolve_data_dir;

/// Which collections were read back from disk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub livros: bool,
    pub filmes: bool,
    pub series: bool,
}

impl LoadReport {
    pub fn nothing_loaded(&self) -> bool {
        !(self.livros || self.filmes || self.series)
    }
}

/// Read every collection the repository can provide
pub fn load_catalog(repository: &dyn CatalogRepository) -> (Catalog, LoadReport) {
    let mut catalog = Catalog::new();
    let mut report = LoadReport::default();

    match repository.load_books() {
        Ok(livros) => {
            catalog.replace_books(livros);
            report.livros = true;
        }
        Err(e) => log::warn!("{} collection not loaded: {}", MediaKind::Book, e),
    }
    match repository.load_films() {
        Ok(filmes) => {
            catalog.replace_films(filmes);
            report.filmes = true;
        }
        Err(e) => log::warn!("{} collection not loaded: {}", MediaKind::Film, e),
    }
    match repository.load_series() {
        Ok(series) => {
            catalog.replace_series(series);
            report.series = true;
        }
        Err(e) => log::warn!("{} collection not loaded: {}", MediaKind::Series, e),
    }

    (catalog, report)
}

/// Load the catalog, seeding it when nothing could be loaded and `seed` is set
pub fn initialize(repository: Arc<dyn CatalogRepository>, seed: bool) -> AppResult<CatalogService> {
    let (catalog, report) = load_catalog(repository.as_ref());

    if !(seed && report.nothing_loaded()) {
        log::info!(
            "Catalog loaded: {} books, {} films, {} series",
            catalog.list_books().len(),
            catalog.list_films().len(),
            catalog.list_series().len()
        );
        return Ok(CatalogService::new(catalog, repository));
    }

    log::info!("No saved data found, installing the demo catalog");
    let demo = demo_catalog()?;
    repository.save_books(demo.list_books())?;
    repository.save_films(demo.list_films())?;
    repository.save_series(demo.list_series())?;
    Ok(CatalogService::new(demo, repository))
}

/// Build the service from configuration
pub fn bootstrap(config: &AppConfig) -> AppResult<CatalogService> {
    let paths = resolve_data_dir(&config.data_dir)?;
    let repository: Arc<dyn CatalogRepository> = Arc::new(FileCatalogRepository::new(paths));
    initialize(repository, config.seed)
}

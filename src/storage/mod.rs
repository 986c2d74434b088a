// src/storage/mod.rs
//
// Data directory layout: one JSON file per media kind.

use std::path::{Path, PathBuf};

use crate::error::AppResult;

/// Directory used when none is configured (relative to the working directory)
pub const DEFAULT_DATA_DIR: &str = "arquivos";

pub const ARQUIVO_LIVROS: &str = "livros.dat";
pub const ARQUIVO_FILMES: &str = "filmes.dat";
pub const ARQUIVO_SERIES: &str = "series.dat";

/// Resolved locations of the three data files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub dir: PathBuf,
    pub livros: PathBuf,
    pub filmes: PathBuf,
    pub series: PathBuf,
}

impl DataPaths {
    /// Paths under `dir`, without touching the filesystem
    pub fn under(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
            livros: dir.join(ARQUIVO_LIVROS),
            filmes: dir.join(ARQUIVO_FILMES),
            series: dir.join(ARQUIVO_SERIES),
        }
    }
}

/// Ensure the data directory exists and return the data file paths
pub fn resolve_data_dir(dir: &Path) -> AppResult<DataPaths> {
    // Ensure directory exists
    std::fs::create_dir_all(dir)?;
    log::debug!("Data directory: {}", dir.display());
    Ok(DataPaths::under(dir))
}

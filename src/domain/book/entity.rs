use serde::{Deserialize, Serialize};

use crate::domain::{Media, MediaInfo, MediaKind};

/// A book read (or to be read) by the owner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Title, genres, year, reviews and consumption flag
    #[serde(flatten)]
    info: MediaInfo,

    autor: String,

    editora: String,

    /// Not a key; duplicates between books are allowed
    isbn: String,

    /// Whether the owner has a physical copy
    possui_exemplar: bool,
}

impl Book {
    pub fn new(
        info: MediaInfo,
        autor: String,
        editora: String,
        isbn: String,
        possui_exemplar: bool,
    ) -> Self {
        Self {
            info,
            autor: autor.trim().to_string(),
            editora: editora.trim().to_string(),
            isbn: isbn.trim().to_string(),
            possui_exemplar,
        }
    }

    pub fn info_mut(&mut self) -> &mut MediaInfo {
        &mut self.info
    }

    pub fn autor(&self) -> &str {
        &self.autor
    }

    pub fn editora(&self) -> &str {
        &self.editora
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn possui_exemplar(&self) -> bool {
        self.possui_exemplar
    }

    pub fn set_autor(&mut self, autor: String) {
        self.autor = autor.trim().to_string();
    }

    pub fn set_editora(&mut self, editora: String) {
        self.editora = editora.trim().to_string();
    }

    pub fn set_isbn(&mut self, isbn: String) {
        self.isbn = isbn.trim().to_string();
    }

    pub fn set_possui_exemplar(&mut self, possui_exemplar: bool) {
        self.possui_exemplar = possui_exemplar;
    }
}

impl Media for Book {
    fn info(&self) -> &MediaInfo {
        &self.info
    }

    fn kind(&self) -> MediaKind {
        MediaKind::Book
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.info)?;
        writeln!(f, "Autor: {}", self.autor)?;
        writeln!(f, "Editora: {}", self.editora)?;
        writeln!(f, "ISBN: {}", self.isbn)?;
        write!(
            f,
            "Possui exemplar: {}",
            if self.possui_exemplar { "Sim" } else { "Não" }
        )
    }
}

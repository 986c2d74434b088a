// src/services/catalog_service.rs
//
// Mutation service: every committed edit goes through here.
//
// Each operation addresses its target by MediaId, lets the domain validate
// before anything changes, and then writes the owning collection once.
// A failed write is returned to the caller; the in-memory edit stays.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::domain::{
    validate_book, validate_film, validate_series, Audiovisual, Book, DomainError, DomainResult,
    Elenco, Film, Media, MediaId, MediaInfo, MediaKind, Season, Series,
};
use crate::error::{AppError, AppResult};
use crate::repositories::CatalogRepository;

#[derive(Debug, Clone)]
pub struct CreateBookRequest {
    pub titulo: String,
    pub generos: Vec<String>,
    pub ano_lancamento: i32,
    pub ja_consumiu: bool,
    pub autor: String,
    pub editora: String,
    pub isbn: String,
    pub possui_exemplar: bool,
}

#[derive(Debug, Clone)]
pub struct CreateFilmRequest {
    pub titulo: String,
    pub generos: Vec<String>,
    pub ano_lancamento: i32,
    pub ja_consumiu: bool,
    pub duracao: u32,
    pub direcao: String,
    pub roteiro: String,
    pub elenco: Elenco,
    pub titulo_original: String,
    pub onde_assistir: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct CreateSeriesRequest {
    pub titulo: String,
    pub generos: Vec<String>,
    pub ano_lancamento: i32,
    pub ja_consumiu: bool,
    /// 0 while still running
    pub ano_encerramento: i32,
    pub elenco: Elenco,
    pub titulo_original: String,
    pub onde_assistir: Vec<String>,
}

pub struct CatalogService {
    catalog: Catalog,
    repository: Arc<dyn CatalogRepository>,
}

impl CatalogService {
    pub fn new(catalog: Catalog, repository: Arc<dyn CatalogRepository>) -> Self {
        Self {
            catalog,
            repository,
        }
    }

    /// Read-only access for listing and queries
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // ========================================================================
    // CREATE / DELETE
    // ========================================================================

    pub fn create_book(&mut self, request: CreateBookRequest) -> AppResult<MediaId> {
        let info = new_info(
            request.titulo,
            request.generos,
            request.ano_lancamento,
            request.ja_consumiu,
        )?;
        let book = Book::new(
            info,
            request.autor,
            request.editora,
            request.isbn,
            request.possui_exemplar,
        );
        validate_book(&book)?;

        let id = self.catalog.add_book(book);
        log::debug!("Book {} added", id);
        self.persist(MediaKind::Book)?;
        Ok(id)
    }

    pub fn create_film(&mut self, request: CreateFilmRequest) -> AppResult<MediaId> {
        let info = new_info(
            request.titulo,
            request.generos,
            request.ano_lancamento,
            request.ja_consumiu,
        )?;
        let film = Film::new(
            info,
            Audiovisual::new(request.elenco, request.titulo_original, request.onde_assistir),
            request.duracao,
            request.direcao,
            request.roteiro,
        )?;
        validate_film(&film)?;

        let id = self.catalog.add_film(film);
        log::debug!("Film {} added", id);
        self.persist(MediaKind::Film)?;
        Ok(id)
    }

    pub fn create_series(&mut self, request: CreateSeriesRequest) -> AppResult<MediaId> {
        let info = new_info(
            request.titulo,
            request.generos,
            request.ano_lancamento,
            request.ja_consumiu,
        )?;
        let series = Series::new(
            info,
            Audiovisual::new(request.elenco, request.titulo_original, request.onde_assistir),
            request.ano_encerramento,
        );
        validate_series(&series)?;

        let id = self.catalog.add_series(series);
        log::debug!("Series {} added", id);
        self.persist(MediaKind::Series)?;
        Ok(id)
    }

    /// Remove a book, film or series. Seasons are removed through their series.
    pub fn remove_media(&mut self, id: MediaId) -> AppResult<MediaKind> {
        let kind = self
            .catalog
            .remove(id)
            .ok_or_else(|| AppError::NotFound(format!("media {}", id)))?;
        log::debug!("{} {} removed", kind, id);
        self.persist(kind)?;
        Ok(kind)
    }

    // ========================================================================
    // SHARED MEDIA ATTRIBUTES (books, films, series and seasons)
    // ========================================================================

    pub fn set_title(&mut self, id: MediaId, titulo: String) -> AppResult<()> {
        self.edit_info(id, |info| info.set_titulo(titulo))
    }

    pub fn set_release_year(&mut self, id: MediaId, ano: i32) -> AppResult<()> {
        self.edit_info(id, |info| {
            info.set_ano_lancamento(ano);
            Ok(())
        })
    }

    pub fn set_consumed(&mut self, id: MediaId, ja_consumiu: bool) -> AppResult<()> {
        self.edit_info(id, |info| {
            info.set_ja_consumiu(ja_consumiu);
            Ok(())
        })
    }

    pub fn set_genres(&mut self, id: MediaId, generos: Vec<String>) -> AppResult<()> {
        self.edit_info(id, |info| {
            info.set_generos(generos);
            Ok(())
        })
    }

    pub fn add_genres(&mut self, id: MediaId, generos: Vec<String>) -> AppResult<()> {
        self.edit_info(id, |info| {
            info.add_generos(generos);
            Ok(())
        })
    }

    /// Remove every genre equivalent to `genero`. NotFound when none matches.
    pub fn remove_genre(&mut self, id: MediaId, genero: &str) -> AppResult<usize> {
        self.edit_info(id, |info| match info.remove_genero(genero) {
            0 => Err(DomainError::NotFound(format!("genre '{}'", genero))),
            removidos => Ok(removidos),
        })
    }

    // ========================================================================
    // BOOK
    // ========================================================================

    pub fn set_author(&mut self, id: MediaId, autor: String) -> AppResult<()> {
        self.edit_book(id, |book| {
            book.set_autor(autor);
            Ok(())
        })
    }

    pub fn set_publisher(&mut self, id: MediaId, editora: String) -> AppResult<()> {
        self.edit_book(id, |book| {
            book.set_editora(editora);
            Ok(())
        })
    }

    pub fn set_isbn(&mut self, id: MediaId, isbn: String) -> AppResult<()> {
        self.edit_book(id, |book| {
            book.set_isbn(isbn);
            Ok(())
        })
    }

    pub fn set_has_copy(&mut self, id: MediaId, possui_exemplar: bool) -> AppResult<()> {
        self.edit_book(id, |book| {
            book.set_possui_exemplar(possui_exemplar);
            Ok(())
        })
    }

    // ========================================================================
    // FILM
    // ========================================================================

    pub fn set_duration(&mut self, id: MediaId, duracao: u32) -> AppResult<()> {
        self.edit_film(id, |film| film.set_duracao(duracao))
    }

    pub fn set_director(&mut self, id: MediaId, direcao: String) -> AppResult<()> {
        self.edit_film(id, |film| {
            film.set_direcao(direcao);
            Ok(())
        })
    }

    pub fn set_screenwriter(&mut self, id: MediaId, roteiro: String) -> AppResult<()> {
        self.edit_film(id, |film| {
            film.set_roteiro(roteiro);
            Ok(())
        })
    }

    // ========================================================================
    // EDIT PLUMBING
    // ========================================================================

    /// Kind of the item with this id, seasons included
    pub(crate) fn locate(&self, id: MediaId) -> AppResult<MediaKind> {
        self.catalog
            .find(id)
            .map(|m| m.kind())
            .ok_or_else(|| not_found(id))
    }

    /// Apply `edit` to the shared attributes of any item, then persist its owner
    pub(crate) fn edit_info<T, F>(&mut self, id: MediaId, edit: F) -> AppResult<T>
    where
        F: FnOnce(&mut MediaInfo) -> DomainResult<T>,
    {
        let kind = self.locate(id)?;
        let resultado = match kind {
            MediaKind::Book => self.catalog.book_mut(id).map(|b| edit(b.info_mut())),
            MediaKind::Film => self.catalog.film_mut(id).map(|f| edit(f.info_mut())),
            MediaKind::Series => self.catalog.series_mut(id).map(|s| edit(s.info_mut())),
            MediaKind::Season => self
                .catalog
                .series_of_season_mut(id)
                .map(|s| s.edit_temporada(id, |t| edit(t.info_mut()))),
        };
        let valor = resultado.ok_or_else(|| not_found(id))??;
        log::debug!("{} {} updated", kind, id);
        self.persist(kind)?;
        Ok(valor)
    }

    pub(crate) fn edit_book<T, F>(&mut self, id: MediaId, edit: F) -> AppResult<T>
    where
        F: FnOnce(&mut Book) -> DomainResult<T>,
    {
        let book = self.catalog.book_mut(id).ok_or_else(|| not_found(id))?;
        let valor = edit(book)?;
        log::debug!("Book {} updated", id);
        self.persist(MediaKind::Book)?;
        Ok(valor)
    }

    pub(crate) fn edit_film<T, F>(&mut self, id: MediaId, edit: F) -> AppResult<T>
    where
        F: FnOnce(&mut Film) -> DomainResult<T>,
    {
        let film = self.catalog.film_mut(id).ok_or_else(|| not_found(id))?;
        let valor = edit(film)?;
        log::debug!("Film {} updated", id);
        self.persist(MediaKind::Film)?;
        Ok(valor)
    }

    pub(crate) fn edit_series<T, F>(&mut self, id: MediaId, edit: F) -> AppResult<T>
    where
        F: FnOnce(&mut Series) -> DomainResult<T>,
    {
        let series = self.catalog.series_mut(id).ok_or_else(|| not_found(id))?;
        let valor = edit(series)?;
        log::debug!("Series {} updated", id);
        self.persist(MediaKind::Series)?;
        Ok(valor)
    }

    pub(crate) fn edit_season<T, F>(&mut self, id: MediaId, edit: F) -> AppResult<T>
    where
        F: FnOnce(&mut Season) -> DomainResult<T>,
    {
        let series = self
            .catalog
            .series_of_season_mut(id)
            .ok_or_else(|| not_found(id))?;
        let valor = series.edit_temporada(id, edit)?;
        log::debug!("Season {} updated", id);
        self.persist(MediaKind::Season)?;
        Ok(valor)
    }

    /// Write the collection owning `kind` (seasons live in the series file)
    pub(crate) fn persist(&self, kind: MediaKind) -> AppResult<()> {
        let resultado = match kind {
            MediaKind::Book => self.repository.save_books(self.catalog.list_books()),
            MediaKind::Film => self.repository.save_films(self.catalog.list_films()),
            MediaKind::Series | MediaKind::Season => {
                self.repository.save_series(self.catalog.list_series())
            }
        };
        if let Err(e) = &resultado {
            log::warn!("Failed to persist {} collection: {}", kind, e);
        }
        resultado
    }
}

fn new_info(
    titulo: String,
    generos: Vec<String>,
    ano_lancamento: i32,
    ja_consumiu: bool,
) -> DomainResult<MediaInfo> {
    let mut info = MediaInfo::new(titulo, generos, ano_lancamento)?;
    info.set_ja_consumiu(ja_consumiu);
    Ok(info)
}

pub(crate) fn not_found(id: MediaId) -> AppError {
    AppError::NotFound(format!("media {}", id))
}

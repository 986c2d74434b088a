// src/services/audiovisual_service.rs
//
// Cast, platform and original-title edits for films, series and seasons.

use super::catalog_service::CatalogService;
use crate::domain::{Audiovisual, DomainError, DomainResult, Elenco, MediaId, MediaKind};
use crate::error::AppResult;

impl CatalogService {
    pub fn set_original_title(&mut self, id: MediaId, titulo_original: String) -> AppResult<()> {
        self.edit_audiovisual(id, |av| av.set_titulo_original(titulo_original))
    }

    pub fn set_platforms(&mut self, id: MediaId, plataformas: Vec<String>) -> AppResult<()> {
        self.edit_audiovisual(id, |av| {
            av.set_onde_assistir(plataformas);
            Ok(())
        })
    }

    pub fn add_platforms(&mut self, id: MediaId, plataformas: Vec<String>) -> AppResult<()> {
        self.edit_audiovisual(id, |av| {
            av.add_onde_assistir(plataformas);
            Ok(())
        })
    }

    /// Remove every platform equivalent to `plataforma`. NotFound when none matches.
    pub fn remove_platform(&mut self, id: MediaId, plataforma: &str) -> AppResult<usize> {
        self.edit_audiovisual(id, |av| match av.remove_onde_assistir(plataforma) {
            0 => Err(DomainError::NotFound(format!("platform '{}'", plataforma))),
            removidas => Ok(removidas),
        })
    }

    pub fn set_cast(&mut self, id: MediaId, elenco: Elenco) -> AppResult<()> {
        self.edit_audiovisual(id, |av| {
            av.set_elenco(elenco);
            Ok(())
        })
    }

    pub fn add_cast_member(&mut self, id: MediaId, funcao: &str, nome: &str) -> AppResult<()> {
        self.edit_audiovisual(id, |av| av.add_cast_member(funcao, nome))
    }

    pub fn set_cast_role(&mut self, id: MediaId, funcao: &str, nomes: Vec<String>) -> AppResult<()> {
        self.edit_audiovisual(id, |av| av.set_cast_role(funcao, nomes))
    }

    pub fn remove_cast_member(&mut self, id: MediaId, funcao: &str, nome: &str) -> AppResult<()> {
        self.edit_audiovisual(id, |av| av.remove_cast_member(funcao, nome))
    }

    pub fn remove_cast_role(&mut self, id: MediaId, funcao: &str) -> AppResult<Vec<String>> {
        self.edit_audiovisual(id, |av| av.remove_cast_role(funcao))
    }

    /// Apply `edit` to the audiovisual part of a film, series or season
    fn edit_audiovisual<T, F>(&mut self, id: MediaId, edit: F) -> AppResult<T>
    where
        F: FnOnce(&mut Audiovisual) -> DomainResult<T>,
    {
        match self.locate(id)? {
            MediaKind::Book => Err(DomainError::InvariantViolation(
                "Books have no cast, platforms or original title".to_string(),
            )
            .into()),
            MediaKind::Film => self.edit_film(id, |f| edit(f.audiovisual_mut())),
            MediaKind::Series => self.edit_series(id, |s| edit(s.audiovisual_mut())),
            MediaKind::Season => self.edit_season(id, |t| edit(t.audiovisual_mut())),
        }
    }
}

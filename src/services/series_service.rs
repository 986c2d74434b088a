// src/services/series_service.rs
//
// Season management and the series aggregate score.

use super::catalog_service::{not_found, CatalogService};
use crate::domain::{Audiovisual, Elenco, Media, MediaId, MediaInfo, Season};
use crate::error::AppResult;

#[derive(Debug, Clone)]
pub struct CreateSeasonRequest {
    pub titulo: String,
    pub generos: Vec<String>,
    pub ano_lancamento: i32,
    pub ja_consumiu: bool,
    /// Must not be taken by another season of the same series
    pub numero: u32,
    pub quantidade_episodios: u32,
    pub elenco: Elenco,
    pub titulo_original: String,
    pub onde_assistir: Vec<String>,
}

impl CatalogService {
    /// Add a season to a series, keeping seasons sorted by number
    pub fn add_season(&mut self, series_id: MediaId, request: CreateSeasonRequest) -> AppResult<MediaId> {
        let mut info = MediaInfo::new(request.titulo, request.generos, request.ano_lancamento)?;
        info.set_ja_consumiu(request.ja_consumiu);
        let temporada = Season::new(
            info,
            Audiovisual::new(request.elenco, request.titulo_original, request.onde_assistir),
            request.numero,
            request.quantidade_episodios,
        )?;
        let id = temporada.id();

        self.edit_series(series_id, |series| series.add_temporada(temporada))?;
        Ok(id)
    }

    pub fn remove_season(&mut self, series_id: MediaId, numero: u32) -> AppResult<Season> {
        self.edit_series(series_id, |series| series.remove_temporada(numero))
    }

    pub fn set_end_year(&mut self, series_id: MediaId, ano: i32) -> AppResult<()> {
        self.edit_series(series_id, |series| {
            series.set_ano_encerramento(ano);
            Ok(())
        })
    }

    /// Renumber a season; the number must stay unique within its series
    pub fn set_season_number(&mut self, season_id: MediaId, numero: u32) -> AppResult<()> {
        let series_id = self
            .catalog()
            .list_series()
            .iter()
            .find(|s| s.temporada_por_id(season_id).is_some())
            .map(Media::id)
            .ok_or_else(|| not_found(season_id))?;
        self.edit_series(series_id, |series| series.renumber_temporada(season_id, numero))
    }

    pub fn set_episode_count(&mut self, season_id: MediaId, quantidade: u32) -> AppResult<()> {
        self.edit_season(season_id, |t| t.set_quantidade_episodios(quantidade))
    }

    /// Recompute the aggregate score from the seasons' latest reviews
    pub fn recalculate_series_score(&mut self, series_id: MediaId) -> AppResult<f32> {
        self.edit_series(series_id, |series| {
            series.recalculate_nota();
            Ok(series.nota())
        })
    }
}

use serde::{Deserialize, Serialize};

use super::season::Season;
use crate::domain::{
    Audiovisual, AudiovisualMedia, DomainError, DomainResult, Media, MediaId, MediaInfo, MediaKind,
    Review,
};

/// A television series and its seasons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    #[serde(flatten)]
    info: MediaInfo,

    #[serde(flatten)]
    audiovisual: Audiovisual,

    /// 0 while the series is still running
    ano_encerramento: i32,

    /// Sorted ascending by `numero`, numbers unique
    temporadas: Vec<Season>,

    /// Mean of the latest score of each reviewed season (0.0 if none)
    nota: f32,
}

impl Series {
    pub fn new(info: MediaInfo, audiovisual: Audiovisual, ano_encerramento: i32) -> Self {
        Self {
            info,
            audiovisual,
            ano_encerramento,
            temporadas: Vec::new(),
            nota: 0.0,
        }
    }

    pub fn info_mut(&mut self) -> &mut MediaInfo {
        &mut self.info
    }

    pub fn audiovisual_mut(&mut self) -> &mut Audiovisual {
        &mut self.audiovisual
    }

    pub fn ano_encerramento(&self) -> i32 {
        self.ano_encerramento
    }

    pub fn set_ano_encerramento(&mut self, ano: i32) {
        self.ano_encerramento = ano;
    }

    pub fn em_exibicao(&self) -> bool {
        self.ano_encerramento == 0
    }

    /// "Em exibição" or "Encerrada em <ano>"
    pub fn status_label(&self) -> String {
        if self.em_exibicao() {
            "Em exibição".to_string()
        } else {
            format!("Encerrada em {}", self.ano_encerramento)
        }
    }

    pub fn temporadas(&self) -> &[Season] {
        &self.temporadas
    }

    pub fn quantidade_temporadas(&self) -> usize {
        self.temporadas.len()
    }

    pub fn nota(&self) -> f32 {
        self.nota
    }

    pub fn temporada(&self, numero: u32) -> Option<&Season> {
        self.position(numero).ok().map(|i| &self.temporadas[i])
    }

    pub fn temporada_por_id(&self, id: MediaId) -> Option<&Season> {
        self.temporadas.iter().find(|t| t.id() == id)
    }

    fn position(&self, numero: u32) -> Result<usize, usize> {
        self.temporadas.binary_search_by_key(&numero, Season::numero)
    }

    /// Insert a season keeping the list sorted. Duplicate numbers are rejected.
    pub fn add_temporada(&mut self, temporada: Season) -> DomainResult<()> {
        match self.position(temporada.numero()) {
            Ok(_) => Err(duplicate_season(temporada.numero(), self.info.titulo())),
            Err(pos) => {
                self.temporadas.insert(pos, temporada);
                self.recalculate_nota();
                Ok(())
            }
        }
    }

    pub fn remove_temporada(&mut self, numero: u32) -> DomainResult<Season> {
        let pos = self.position(numero).map_err(|_| {
            DomainError::NotFound(format!(
                "season {} of '{}'",
                numero,
                self.info.titulo()
            ))
        })?;
        let removida = self.temporadas.remove(pos);
        self.recalculate_nota();
        Ok(removida)
    }

    /// Drop every season; the aggregate falls back to zero
    pub fn clear_temporadas(&mut self) {
        self.temporadas.clear();
        self.recalculate_nota();
    }

    /// Apply an edit to the season with the given id, then refresh the aggregate.
    /// `edit` must leave the season untouched when it fails.
    pub fn edit_temporada<T, F>(&mut self, id: MediaId, edit: F) -> DomainResult<T>
    where
        F: FnOnce(&mut Season) -> DomainResult<T>,
    {
        let titulo = self.info.titulo().to_string();
        let temporada = self
            .temporadas
            .iter_mut()
            .find(|t| t.id() == id)
            .ok_or_else(|| DomainError::NotFound(format!("season {} of '{}'", id, titulo)))?;
        let resultado = edit(temporada);
        self.recalculate_nota();
        resultado
    }

    /// Change a season number; the new number must not be taken by another season
    pub fn renumber_temporada(&mut self, id: MediaId, novo: u32) -> DomainResult<()> {
        if let Some(outra) = self.temporada(novo) {
            if outra.id() != id {
                return Err(duplicate_season(novo, self.info.titulo()));
            }
        }
        self.edit_temporada(id, |t| t.set_numero(novo))?;
        self.temporadas.sort_by_key(Season::numero);
        Ok(())
    }

    /// Recompute `nota` from the latest review of each reviewed season
    pub fn recalculate_nota(&mut self) {
        let notas: Vec<f32> = self
            .temporadas
            .iter()
            .filter_map(|t| t.latest_review().map(Review::nota))
            .collect();
        self.nota = if notas.is_empty() {
            0.0
        } else {
            notas.iter().sum::<f32>() / notas.len() as f32
        };
    }

    /// Reviews of every season, in season order
    pub fn all_season_reviews(&self) -> Vec<(u32, &Review)> {
        self.temporadas
            .iter()
            .flat_map(|t| t.avaliacoes().iter().map(move |r| (t.numero(), r)))
            .collect()
    }
}

fn duplicate_season(numero: u32, titulo: &str) -> DomainError {
    DomainError::InvariantViolation(format!(
        "'{}' already has a season {}",
        titulo, numero
    ))
}

impl Media for Series {
    fn info(&self) -> &MediaInfo {
        &self.info
    }

    fn kind(&self) -> MediaKind {
        MediaKind::Series
    }

    /// A series without reviews of its own ranks by its season aggregate
    fn latest_score(&self) -> f32 {
        self.latest_review().map_or(self.nota, Review::nota)
    }
}

impl AudiovisualMedia for Series {
    fn audiovisual(&self) -> &Audiovisual {
        &self.audiovisual
    }
}

impl std::fmt::Display for Series {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.info)?;
        writeln!(f, "Situação: {}", self.status_label())?;
        writeln!(f, "{}", self.audiovisual)?;
        writeln!(f, "Temporadas: {}", self.temporadas.len())?;
        for temporada in &self.temporadas {
            writeln!(
                f,
                "  Temporada {} ({} episódios): nota {:.1}",
                temporada.numero(),
                temporada.quantidade_episodios(),
                temporada.latest_score()
            )?;
        }
        write!(f, "Nota da série: {:.2}", self.nota)
    }
}

use serde::{Deserialize, Serialize};

use super::invariants::{validate_numero, validate_quantidade_episodios};
use crate::domain::{Audiovisual, AudiovisualMedia, DomainResult, Media, MediaInfo, MediaKind};

/// One season of a Series. Carries its own cast, platforms and reviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    #[serde(flatten)]
    info: MediaInfo,

    #[serde(flatten)]
    audiovisual: Audiovisual,

    /// Unique within the owning Series
    numero: u32,

    quantidade_episodios: u32,
}

impl Season {
    pub fn new(
        info: MediaInfo,
        audiovisual: Audiovisual,
        numero: u32,
        quantidade_episodios: u32,
    ) -> DomainResult<Self> {
        validate_numero(numero)?;
        validate_quantidade_episodios(quantidade_episodios)?;
        Ok(Self {
            info,
            audiovisual,
            numero,
            quantidade_episodios,
        })
    }

    pub fn info_mut(&mut self) -> &mut MediaInfo {
        &mut self.info
    }

    pub fn audiovisual_mut(&mut self) -> &mut Audiovisual {
        &mut self.audiovisual
    }

    pub fn numero(&self) -> u32 {
        self.numero
    }

    pub fn quantidade_episodios(&self) -> u32 {
        self.quantidade_episodios
    }

    pub fn set_quantidade_episodios(&mut self, quantidade: u32) -> DomainResult<()> {
        validate_quantidade_episodios(quantidade)?;
        self.quantidade_episodios = quantidade;
        Ok(())
    }

    /// Only the owning Series may renumber, it keeps numbers unique
    pub(crate) fn set_numero(&mut self, numero: u32) -> DomainResult<()> {
        validate_numero(numero)?;
        self.numero = numero;
        Ok(())
    }
}

impl Media for Season {
    fn info(&self) -> &MediaInfo {
        &self.info
    }

    fn kind(&self) -> MediaKind {
        MediaKind::Season
    }
}

impl AudiovisualMedia for Season {
    fn audiovisual(&self) -> &Audiovisual {
        &self.audiovisual
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Temporada {}", self.numero)?;
        writeln!(f, "{}", self.info)?;
        writeln!(f, "Episódios: {}", self.quantidade_episodios)?;
        write!(f, "{}", self.audiovisual)
    }
}

use serde::{Deserialize, Serialize};

use super::invariants::validate_duracao;
use crate::domain::{Audiovisual, AudiovisualMedia, DomainResult, Media, MediaInfo, MediaKind};

/// A feature film
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    #[serde(flatten)]
    info: MediaInfo,

    #[serde(flatten)]
    audiovisual: Audiovisual,

    /// Running time in minutes (> 0)
    duracao: u32,

    direcao: String,

    roteiro: String,
}

impl Film {
    pub fn new(
        info: MediaInfo,
        audiovisual: Audiovisual,
        duracao: u32,
        direcao: String,
        roteiro: String,
    ) -> DomainResult<Self> {
        validate_duracao(duracao)?;
        Ok(Self {
            info,
            audiovisual,
            duracao,
            direcao: direcao.trim().to_string(),
            roteiro: roteiro.trim().to_string(),
        })
    }

    pub fn info_mut(&mut self) -> &mut MediaInfo {
        &mut self.info
    }

    pub fn audiovisual_mut(&mut self) -> &mut Audiovisual {
        &mut self.audiovisual
    }

    pub fn duracao(&self) -> u32 {
        self.duracao
    }

    pub fn direcao(&self) -> &str {
        &self.direcao
    }

    pub fn roteiro(&self) -> &str {
        &self.roteiro
    }

    pub fn set_duracao(&mut self, duracao: u32) -> DomainResult<()> {
        validate_duracao(duracao)?;
        self.duracao = duracao;
        Ok(())
    }

    pub fn set_direcao(&mut self, direcao: String) {
        self.direcao = direcao.trim().to_string();
    }

    pub fn set_roteiro(&mut self, roteiro: String) {
        self.roteiro = roteiro.trim().to_string();
    }
}

impl Media for Film {
    fn info(&self) -> &MediaInfo {
        &self.info
    }

    fn kind(&self) -> MediaKind {
        MediaKind::Film
    }
}

impl AudiovisualMedia for Film {
    fn audiovisual(&self) -> &Audiovisual {
        &self.audiovisual
    }
}

impl std::fmt::Display for Film {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.info)?;
        writeln!(f, "Duração: {} min", self.duracao)?;
        writeln!(f, "Direção: {}", self.direcao)?;
        writeln!(f, "Roteiro: {}", self.roteiro)?;
        write!(f, "{}", self.audiovisual)
    }
}

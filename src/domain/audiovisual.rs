// src/domain/audiovisual.rs
//
// Cast, original title and platforms shared by Film, Series and Season.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::text::{equivalent, normalize};
use crate::domain::{DomainError, DomainResult, Media};

/// Role name -> people in that role, in insertion order
pub type Elenco = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Audiovisual {
    /// Cast grouped by role ("Ator", "Coadjuvante", ...)
    elenco: Elenco,

    /// Title in the language of production
    titulo_original: String,

    /// Where it can be watched; duplicates are tolerated
    onde_assistir: Vec<String>,
}

impl Audiovisual {
    pub fn new(elenco: Elenco, titulo_original: String, onde_assistir: Vec<String>) -> Self {
        Self {
            elenco,
            titulo_original: titulo_original.trim().to_string(),
            onde_assistir,
        }
    }

    pub fn elenco(&self) -> &Elenco {
        &self.elenco
    }

    pub fn titulo_original(&self) -> &str {
        &self.titulo_original
    }

    pub fn onde_assistir(&self) -> &[String] {
        &self.onde_assistir
    }

    pub fn set_titulo_original(&mut self, titulo_original: String) -> DomainResult<()> {
        if titulo_original.trim().is_empty() {
            return Err(DomainError::InputFormat(
                "Original title cannot be empty".to_string(),
            ));
        }
        self.titulo_original = titulo_original.trim().to_string();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Platforms
    // ------------------------------------------------------------------

    pub fn set_onde_assistir(&mut self, plataformas: Vec<String>) {
        self.onde_assistir = plataformas;
    }

    pub fn add_onde_assistir(&mut self, plataformas: Vec<String>) {
        self.onde_assistir.extend(plataformas);
    }

    /// Remove every platform equivalent to `plataforma`; returns the count removed
    pub fn remove_onde_assistir(&mut self, plataforma: &str) -> usize {
        let antes = self.onde_assistir.len();
        self.onde_assistir.retain(|p| !equivalent(p, plataforma));
        antes - self.onde_assistir.len()
    }

    // ------------------------------------------------------------------
    // Cast
    // ------------------------------------------------------------------

    /// Key of the existing role equivalent to `funcao`, if any
    fn role_key(&self, funcao: &str) -> Option<String> {
        let chave = normalize(funcao);
        self.elenco
            .keys()
            .find(|k| normalize(k) == chave)
            .cloned()
    }

    pub fn set_elenco(&mut self, elenco: Elenco) {
        self.elenco = elenco;
    }

    /// Append a person to a role, creating the role when it does not exist yet
    pub fn add_cast_member(&mut self, funcao: &str, nome: &str) -> DomainResult<()> {
        let (funcao, nome) = (funcao.trim(), nome.trim());
        if funcao.is_empty() || nome.is_empty() {
            return Err(DomainError::InputFormat(
                "Cast role and name cannot be empty".to_string(),
            ));
        }
        let chave = self.role_key(funcao).unwrap_or_else(|| funcao.to_string());
        self.elenco.entry(chave).or_default().push(nome.to_string());
        Ok(())
    }

    /// Replace the list of people of a role (the role is created if absent)
    pub fn set_cast_role(&mut self, funcao: &str, nomes: Vec<String>) -> DomainResult<()> {
        let funcao = funcao.trim();
        if funcao.is_empty() {
            return Err(DomainError::InputFormat(
                "Cast role cannot be empty".to_string(),
            ));
        }
        let chave = self.role_key(funcao).unwrap_or_else(|| funcao.to_string());
        self.elenco.insert(chave, nomes);
        Ok(())
    }

    /// Remove every entry equivalent to `nome` from a role.
    /// A role left without people is dropped.
    pub fn remove_cast_member(&mut self, funcao: &str, nome: &str) -> DomainResult<()> {
        let chave = self
            .role_key(funcao)
            .ok_or_else(|| DomainError::NotFound(format!("cast role '{}'", funcao)))?;
        let nomes = self.elenco.entry(chave.clone()).or_default();
        let antes = nomes.len();
        nomes.retain(|n| !equivalent(n, nome));
        if nomes.len() == antes {
            return Err(DomainError::NotFound(format!(
                "'{}' in cast role '{}'",
                nome, chave
            )));
        }
        if nomes.is_empty() {
            self.elenco.remove(&chave);
        }
        Ok(())
    }

    /// Remove a whole role
    pub fn remove_cast_role(&mut self, funcao: &str) -> DomainResult<Vec<String>> {
        let chave = self
            .role_key(funcao)
            .ok_or_else(|| DomainError::NotFound(format!("cast role '{}'", funcao)))?;
        Ok(self.elenco.remove(&chave).unwrap_or_default())
    }

    /// True if a role equivalent to `funcao` lists a person equivalent to `nome`
    pub fn has_cast_member(&self, funcao: &str, nome: &str) -> bool {
        let funcao = normalize(funcao);
        let nome = normalize(nome);
        self.elenco.iter().any(|(papel, pessoas)| {
            normalize(papel) == funcao && pessoas.iter().any(|p| normalize(p) == nome)
        })
    }
}

/// Capability of items that carry cast/platform data
pub trait AudiovisualMedia: Media {
    fn audiovisual(&self) -> &Audiovisual;
}

impl<M: AudiovisualMedia + ?Sized> AudiovisualMedia for &M {
    fn audiovisual(&self) -> &Audiovisual {
        (**self).audiovisual()
    }
}

impl std::fmt::Display for Audiovisual {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Título Original: {}", self.titulo_original)?;
        if self.elenco.is_empty() {
            writeln!(f, "Elenco: Sem cadastro de elenco")?;
        } else {
            writeln!(f, "Elenco:")?;
            for (funcao, nomes) in &self.elenco {
                writeln!(f, "  {}: {}", funcao, nomes.join(", "))?;
            }
        }
        write!(
            f,
            "Onde Assistir: {}",
            if self.onde_assistir.is_empty() {
                "Nenhum".to_string()
            } else {
                self.onde_assistir.join(", ")
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Audiovisual {
        let mut elenco = Elenco::new();
        elenco.insert(
            "Protagonista".to_string(),
            vec!["Leonardo DiCaprio".to_string(), "Joseph Gordon-Levitt".to_string()],
        );
        Audiovisual::new(
            elenco,
            "Inception".to_string(),
            vec!["HBO Max".to_string(), "Netflix".to_string()],
        )
    }

    #[test]
    fn test_cast_lookup_is_normalized() {
        let av = sample();
        assert!(av.has_cast_member("protagonista", "leonardo dicáprio"));
        assert!(!av.has_cast_member("Coadjuvante", "Leonardo DiCaprio"));
        // whole-key match only
        assert!(!av.has_cast_member("Protagonista", "Leonardo"));
        assert!(!av.has_cast_member("Prota", "Leonardo DiCaprio"));
    }

    #[test]
    fn test_add_member_reuses_equivalent_role() {
        let mut av = sample();
        av.add_cast_member("PROTAGONISTA", "Elliot Page").unwrap();
        assert_eq!(av.elenco().len(), 1);
        assert_eq!(av.elenco()["Protagonista"].len(), 3);

        av.add_cast_member("Coadjuvante", "Tom Hardy").unwrap();
        assert_eq!(av.elenco()["Coadjuvante"], vec!["Tom Hardy".to_string()]);
        assert!(av.add_cast_member(" ", "X").is_err());
    }

    #[test]
    fn test_remove_member_and_role() {
        let mut av = sample();
        assert!(matches!(
            av.remove_cast_member("Protagonista", "Ninguém"),
            Err(DomainError::NotFound(_))
        ));
        av.remove_cast_member("protagonista", "joseph gordon levitt").unwrap();
        assert_eq!(av.elenco()["Protagonista"], vec!["Leonardo DiCaprio".to_string()]);

        av.remove_cast_member("Protagonista", "Leonardo DiCaprio").unwrap();
        assert!(av.elenco().is_empty());
        assert!(matches!(av.remove_cast_role("Protagonista"), Err(DomainError::NotFound(_))));
    }

    #[test]
    fn test_platforms() {
        let mut av = sample();
        av.add_onde_assistir(vec!["netflix".to_string()]);
        assert_eq!(av.remove_onde_assistir("NETFLIX"), 2);
        assert_eq!(av.onde_assistir(), ["HBO Max".to_string()]);
        av.set_onde_assistir(vec!["Globoplay".to_string()]);
        assert_eq!(av.onde_assistir(), ["Globoplay".to_string()]);
    }
}

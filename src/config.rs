// src/config.rs
//
// Command line / environment configuration

use clap::Parser;
use std::path::PathBuf;

use crate::storage::DEFAULT_DATA_DIR;

fn parse_path(s: &str) -> anyhow::Result<PathBuf> {
    let original_path = PathBuf::from(s);
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

/// Diário cultural: books, films and series you have read or watched
#[derive(Parser, Debug, Clone)]
#[command(name = "diario-cultural", version)]
pub struct AppConfig {
    /// Directory holding livros.dat, filmes.dat and series.dat
    #[arg(
        long = "data-dir",
        env = "DIARIO_DATA_DIR",
        default_value = DEFAULT_DATA_DIR,
        value_parser = parse_path
    )]
    pub data_dir: PathBuf,

    /// Increase log verbosity (-v warn, -vv info, -vvv debug, -vvvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Start empty instead of installing the demo data when nothing can be loaded
    #[arg(long = "no-seed", action = clap::ArgAction::SetFalse)]
    pub seed: bool,
}

impl AppConfig {
    /// Configuration rooted at `data_dir`, seeding enabled
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            verbose: 0,
            seed: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::try_parse_from(["diario-cultural"]).unwrap();
        assert!(config.seed);
        assert_eq!(config.verbose, 0);
        assert!(config.data_dir.ends_with(DEFAULT_DATA_DIR) || std::env::var("DIARIO_DATA_DIR").is_ok());
    }

    #[test]
    fn test_flags() {
        let config = AppConfig::try_parse_from([
            "diario-cultural",
            "--data-dir",
            "/tmp/diario",
            "-vvv",
            "--no-seed",
        ])
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/diario"));
        assert_eq!(config.verbose, 3);
        assert!(!config.seed);
    }
}

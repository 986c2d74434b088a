// src/application/menu.rs
//
// Main menu loop. Closing the input ends the session like option 10.

use std::io::Write;

use super::commands::{
    add_review, delete_media, delete_review, list_media, overwrite_review, register_media,
    search_media, update_media, view_reviews,
};
use super::prompt::{Console, LineSource, UiError, UiResult};
use super::state::AppState;

const OPCOES: [&str; 10] = [
    "Cadastrar mídia",
    "Listar mídias",
    "Atualizar mídia",
    "Remover mídia",
    "Avaliar mídia",
    "Ver avaliações",
    "Sobrescrever avaliação",
    "Remover avaliação",
    "Buscar mídia",
    "Sair",
];

pub fn run_menu<S: LineSource, W: Write>(
    console: &mut Console<S, W>,
    state: &mut AppState,
) -> UiResult<()> {
    console.say(format!(
        "Diário Cultural (dados em {})",
        state.config.data_dir.display()
    ))?;

    loop {
        let opcao = match console.menu("\n=== MENU ===", &OPCOES) {
            Ok(opcao) => opcao,
            Err(UiError::Closed) => break,
            Err(e) => return Err(e),
        };

        let service = &mut state.catalog_service;
        let resultado = match opcao {
            0 => register_media(console, service),
            1 => list_media(console, service),
            2 => update_media(console, service),
            3 => delete_media(console, service),
            4 => add_review(console, service),
            5 => view_reviews(console, service),
            6 => overwrite_review(console, service),
            7 => delete_review(console, service),
            8 => search_media(console, service),
            _ => break,
        };

        match resultado {
            Ok(()) => {}
            Err(UiError::Closed) => break,
            Err(e) => return Err(e),
        }
    }

    log::debug!("Menu closed");
    console.say("Até a próxima!")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::demo_catalog;
    use crate::application::prompt::ScriptedInput;
    use crate::config::AppConfig;
    use crate::domain::{Media, MediaKind};
    use crate::repositories::catalog_repository::MockCatalogRepository;
    use crate::services::CatalogService;
    use std::sync::Arc;

    fn state(mock: MockCatalogRepository) -> AppState {
        let service = CatalogService::new(demo_catalog().unwrap(), Arc::new(mock));
        AppState::new(AppConfig::with_data_dir("arquivos".into()), service)
    }

    fn run(state: &mut AppState, linhas: &[&str]) -> String {
        let mut console = Console::new(ScriptedInput::new(linhas.iter().copied()), Vec::new());
        run_menu(&mut console, state).unwrap();
        String::from_utf8_lossy(console.output()).to_string()
    }

    #[test]
    fn test_exit_option() {
        let mut state = state(MockCatalogRepository::new());
        let saida = run(&mut state, &["10"]);
        assert!(saida.ends_with("Até a próxima!\n"));
    }

    #[test]
    fn test_closed_input_ends_session() {
        let mut state = state(MockCatalogRepository::new());
        // list menu abandoned half way
        let saida = run(&mut state, &["2", "1"]);
        assert!(saida.contains("Até a próxima!"));
    }

    #[test]
    fn test_list_films_best_first() {
        let mut state = state(MockCatalogRepository::new());
        let saida = run(&mut state, &["2", "3", "1", "1", "10"]);
        let pulp = saida.find("[Filme] Pulp Fiction").unwrap();
        let cidade = saida.find("[Filme] Cidade de Deus").unwrap();
        let interestelar = saida.find("[Filme] Interestelar").unwrap();
        assert!(pulp < cidade && cidade < interestelar);
    }

    #[test]
    fn test_search_by_director() {
        let mut state = state(MockCatalogRepository::new());
        let saida = run(&mut state, &["9", "6", "christopher nolan", "10"]);
        assert!(saida.contains("[Filme] Interestelar (2014)"));
    }

    #[test]
    fn test_review_season_updates_series() {
        let mut mock = MockCatalogRepository::new();
        mock.expect_save_series().times(1).returning(|_| Ok(()));
        let mut state = state(mock);

        run(
            &mut state,
            &["5", "2", "the boys", "1", "3", "Nota três", "", "10"],
        );

        let catalog = state.catalog_service.catalog();
        let the_boys = &catalog.list_series()[0];
        assert_eq!(the_boys.temporada(1).unwrap().latest_score(), 3.0);
        assert!((the_boys.nota() - 3.9).abs() < 1e-5);
        assert_eq!(catalog.list_all(MediaKind::Season).len(), 5);
    }

    const CADASTRO_DUNA: [&str; 10] = [
        "1", "1", "Duna", "Ficção Científica", "1965", "não", "Frank Herbert", "Aleph", "", "sim",
    ];

    #[test]
    fn test_abandoned_review_leaves_item_unconsumed() {
        let mut mock = MockCatalogRepository::new();
        // registration only
        mock.expect_save_books().times(1).returning(|_| Ok(()));
        let mut state = state(mock);

        let mut linhas = CADASTRO_DUNA.to_vec();
        linhas.extend(["5", "1", "duna", "sim", "4"]);
        run(&mut state, &linhas);

        let duna = &state.catalog_service.catalog().list_books()[3];
        assert!(!duna.ja_consumiu());
        assert!(duna.avaliacoes().is_empty());
    }

    #[test]
    fn test_review_marks_item_consumed() {
        let mut mock = MockCatalogRepository::new();
        // registration, consumed flag, review
        mock.expect_save_books().times(3).returning(|_| Ok(()));
        let mut state = state(mock);

        let mut linhas = CADASTRO_DUNA.to_vec();
        linhas.extend(["5", "1", "duna", "sim", "4", "Clássico", "", "10"]);
        let saida = run(&mut state, &linhas);

        assert!(saida.contains("Avaliação registrada."));
        let duna = &state.catalog_service.catalog().list_books()[3];
        assert!(duna.ja_consumiu());
        assert_eq!(duna.latest_score(), 4.0);
    }

    #[test]
    fn test_invalid_input_is_retried() {
        let mut mock = MockCatalogRepository::new();
        mock.expect_save_books().times(1).returning(|_| Ok(()));
        let mut state = state(mock);

        let saida = run(
            &mut state,
            &["1", "1", "Duna", "Ficção Científica", "mil", "1965", "talvez", "não",
              "Frank Herbert", "Aleph", "", "sim", "10"],
        );

        assert!(saida.contains("Entrada inválida"));
        assert!(saida.contains("Cadastro realizado."));
        let livros = state.catalog_service.catalog().list_books();
        assert_eq!(livros.len(), 4);
        assert_eq!(livros[3].titulo(), "Duna");
        assert!(!livros[3].ja_consumiu());
    }
}

// src/application/commands/search_commands.rs
//
// Menu option 9: search

use std::io::Write;

use super::show_list;
use crate::application::prompt::{Console, LineSource, UiResult};
use crate::catalog::MediaRef;
use crate::domain::input::parse_int;
use crate::services::query_service::{
    by_author, by_cast, by_director, by_genre, by_isbn, by_title, by_year,
};
use crate::services::CatalogService;

const CRITERIOS: [&str; 7] = [
    "Título",
    "Gênero",
    "Ano de lançamento",
    "Autor (livros)",
    "ISBN (livros)",
    "Direção (filmes)",
    "Elenco (filmes e séries)",
];

pub fn search_media<S: LineSource, W: Write>(
    console: &mut Console<S, W>,
    service: &CatalogService,
) -> UiResult<()> {
    let catalog = service.catalog();
    let todos = catalog.list_unified();

    let criterio = console.menu("Buscar por:", &CRITERIOS)?;
    let resultados: Vec<MediaRef<'_>> = match criterio {
        0 => {
            let titulo = console.ask_text("Título: ", "Título")?;
            by_title(&titulo, &todos).into_iter().copied().collect()
        }
        1 => {
            let genero = console.ask_text("Gênero: ", "Gênero")?;
            by_genre(&genero, &todos).into_iter().copied().collect()
        }
        2 => {
            let ano = console.ask("Ano: ", parse_int)?;
            by_year(ano, &todos).into_iter().copied().collect()
        }
        3 => {
            let autor = console.ask_text("Autor: ", "Autor")?;
            by_author(&autor, catalog.list_books())
                .into_iter()
                .map(MediaRef::Book)
                .collect()
        }
        4 => {
            let isbn = console.ask_text("ISBN: ", "ISBN")?;
            by_isbn(&isbn, catalog.list_books())
                .into_iter()
                .map(MediaRef::Book)
                .collect()
        }
        5 => {
            let direcao = console.ask_text("Direção: ", "Direção")?;
            by_director(&direcao, catalog.list_films())
                .into_iter()
                .map(MediaRef::Film)
                .collect()
        }
        _ => {
            let funcao = console.ask_text("Função: ", "Função")?;
            let nome = console.ask_text("Nome: ", "Nome")?;
            by_cast(&funcao, &nome, catalog.list_films())
                .into_iter()
                .map(MediaRef::Film)
                .chain(
                    by_cast(&funcao, &nome, catalog.list_series())
                        .into_iter()
                        .map(MediaRef::Series),
                )
                .collect()
        }
    };

    show_list(console, &resultados)
}

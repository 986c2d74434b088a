// src/application/commands/list_commands.rs
//
// Menu option 2: list by kind, optionally filtered, ranked by latest score

use std::io::Write;

use super::show_list;
use crate::application::prompt::{Console, LineSource, UiResult};
use crate::catalog::MediaRef;
use crate::domain::MediaKind;
use crate::services::query_service::{filter_genre, filter_year, rank_best_first, rank_worst_first};
use crate::services::CatalogService;

pub fn list_media<S: LineSource, W: Write>(
    console: &mut Console<S, W>,
    service: &CatalogService,
) -> UiResult<()> {
    let catalog = service.catalog();

    let tipo = console.menu("Listar:", &["Todas as mídias", "Livros", "Filmes", "Séries"])?;
    let itens = match tipo {
        0 => catalog.list_unified(),
        1 => catalog.list_all(MediaKind::Book),
        2 => catalog.list_all(MediaKind::Film),
        _ => catalog.list_all(MediaKind::Series),
    };

    let filtro = console.menu("Filtrar por:", &["Sem filtro", "Gênero", "Ano de lançamento"])?;
    let filtrados: Vec<&MediaRef<'_>> = match filtro {
        0 => itens.iter().collect(),
        1 => {
            let generos = catalog.distinct_genres();
            if generos.is_empty() {
                return console.say("Nenhum gênero cadastrado.");
            }
            let escolhido = console.menu("Gênero:", &generos)?;
            filter_genre(&generos[escolhido], &itens)
        }
        _ => {
            let anos: Vec<i32> = catalog.distinct_years().into_iter().collect();
            if anos.is_empty() {
                return console.say("Nenhum ano cadastrado.");
            }
            let escolhido = console.menu("Ano:", &anos)?;
            filter_year(anos[escolhido], &itens)
        }
    };

    let ordem = console.menu(
        "Ordenar por:",
        &["Melhor avaliadas primeiro", "Pior avaliadas primeiro"],
    )?;
    let ordenados = if ordem == 0 {
        rank_best_first(filtrados)
    } else {
        rank_worst_first(filtrados)
    };

    let linhas: Vec<MediaRef<'_>> = ordenados.into_iter().copied().collect();
    show_list(console, &linhas)
}

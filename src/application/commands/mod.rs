// src/application/commands/mod.rs
//
// Menu Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between the terminal and the services
// - Commands read input through `Console`, call services, print DTOs
// - Service errors are printed and the menu goes on
// - Commands NEVER contain business logic

pub mod delete_commands;
pub mod list_commands;
pub mod register_commands;
pub mod review_commands;
pub mod search_commands;
pub mod update_commands;

pub use delete_commands::delete_media;
pub use list_commands::list_media;
pub use register_commands::register_media;
pub use review_commands::{add_review, delete_review, overwrite_review, view_reviews};
pub use search_commands::search_media;
pub use update_commands::update_media;

use std::io::Write;

use crate::application::dto::MediaSummaryDto;
use crate::application::error_handling::ErrorResponse;
use crate::application::prompt::{Console, LineSource, UiResult};
use crate::catalog::{Catalog, MediaRef};
use crate::domain::input::parse_positive_int;
use crate::domain::{Media, MediaId, MediaKind};
use crate::error::AppResult;
use crate::services::query_service;

/// Kinds that live directly in the catalog
pub(crate) const TOP_LEVEL: [MediaKind; 3] = [MediaKind::Book, MediaKind::Film, MediaKind::Series];

/// A season picked through its series
#[derive(Debug, Clone, Copy)]
pub(crate) struct SeasonChoice {
    pub series_id: MediaId,
    pub numero: u32,
    pub season_id: MediaId,
}

/// Ask a title and resolve it to one item of the given kinds
pub(crate) fn select_media<S: LineSource, W: Write>(
    console: &mut Console<S, W>,
    catalog: &Catalog,
    kinds: &[MediaKind],
) -> UiResult<Option<MediaId>> {
    let titulo = console.ask_text("Título: ", "Título")?;
    let candidatos: Vec<MediaRef<'_>> = catalog
        .list_unified()
        .into_iter()
        .filter(|m| kinds.contains(&m.kind()))
        .collect();
    let encontrados: Vec<MediaRef<'_>> = query_service::by_title(&titulo, &candidatos)
        .into_iter()
        .copied()
        .collect();
    pick(console, &encontrados)
}

pub(crate) fn select_season<S: LineSource, W: Write>(
    console: &mut Console<S, W>,
    catalog: &Catalog,
) -> UiResult<Option<SeasonChoice>> {
    let Some(series_id) = select_media(console, catalog, &[MediaKind::Series])? else {
        return Ok(None);
    };
    let Some(MediaRef::Series(series)) = catalog.find(series_id) else {
        return Ok(None);
    };
    if series.temporadas().is_empty() {
        console.say("Esta série não possui temporadas cadastradas.")?;
        return Ok(None);
    }

    for temporada in series.temporadas() {
        console.say(MediaSummaryDto::from(MediaRef::Season(temporada)))?;
    }
    let numero = console.ask("Número da temporada: ", parse_positive_int)?;
    match series.temporada(numero) {
        Some(temporada) => Ok(Some(SeasonChoice {
            series_id,
            numero,
            season_id: temporada.id(),
        })),
        None => {
            console.say(ErrorResponse::not_found("Temporada"))?;
            Ok(None)
        }
    }
}

/// Any item, seasons included
pub(crate) fn select_any<S: LineSource, W: Write>(
    console: &mut Console<S, W>,
    catalog: &Catalog,
) -> UiResult<Option<MediaId>> {
    let alvo = console.menu(
        "Selecionar:",
        &["Livro, filme ou série", "Temporada de uma série"],
    )?;
    if alvo == 0 {
        select_media(console, catalog, &TOP_LEVEL)
    } else {
        Ok(select_season(console, catalog)?.map(|t| t.season_id))
    }
}

/// Disambiguate a result set
pub(crate) fn pick<S: LineSource, W: Write>(
    console: &mut Console<S, W>,
    encontrados: &[MediaRef<'_>],
) -> UiResult<Option<MediaId>> {
    match encontrados {
        [] => {
            console.say(ErrorResponse::not_found("Título"))?;
            Ok(None)
        }
        [unico] => Ok(Some(unico.id())),
        varios => {
            let linhas: Vec<MediaSummaryDto> =
                varios.iter().copied().map(MediaSummaryDto::from).collect();
            let escolhido = console.menu("Mais de um resultado, escolha um:", &linhas)?;
            Ok(Some(varios[escolhido].id()))
        }
    }
}

pub(crate) fn show_list<S: LineSource, W: Write>(
    console: &mut Console<S, W>,
    itens: &[MediaRef<'_>],
) -> UiResult<()> {
    if itens.is_empty() {
        return console.say("Nenhum resultado encontrado.");
    }
    for item in itens {
        console.say(MediaSummaryDto::from(*item))?;
    }
    Ok(())
}

/// Print the outcome of a service call
pub(crate) fn finish<S: LineSource, W: Write, T>(
    console: &mut Console<S, W>,
    resultado: AppResult<T>,
    sucesso: &str,
) -> UiResult<()> {
    match resultado {
        Ok(_) => console.say(sucesso),
        Err(e) => console.report(e),
    }
}

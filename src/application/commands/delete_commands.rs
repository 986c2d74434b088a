// src/application/commands/delete_commands.rs
//
// Menu option 4: delete an item or a season, after confirmation

use std::io::Write;

use super::{finish, select_media, select_season, TOP_LEVEL};
use crate::application::prompt::{Console, LineSource, UiResult};
use crate::domain::Media;
use crate::services::CatalogService;

pub fn delete_media<S: LineSource, W: Write>(
    console: &mut Console<S, W>,
    service: &mut CatalogService,
) -> UiResult<()> {
    let alvo = console.menu(
        "Remover:",
        &["Livro, filme ou série", "Temporada de uma série"],
    )?;

    if alvo == 0 {
        let Some(id) = select_media(console, service.catalog(), &TOP_LEVEL)? else {
            return Ok(());
        };
        let descricao = service
            .catalog()
            .find(id)
            .map(|m| format!("{} '{}'", m.kind(), m.titulo()))
            .unwrap_or_default();
        if !console.confirm(&format!("Remover {}? (sim/não): ", descricao))? {
            return console.say("Remoção cancelada.");
        }
        return finish(console, service.remove_media(id), "Mídia removida.");
    }

    let Some(escolha) = select_season(console, service.catalog())? else {
        return Ok(());
    };
    if !console.confirm(&format!("Remover a temporada {}? (sim/não): ", escolha.numero))? {
        return console.say("Remoção cancelada.");
    }
    finish(
        console,
        service.remove_season(escolha.series_id, escolha.numero),
        "Temporada removida.",
    )
}

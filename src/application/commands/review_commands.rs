// src/application/commands/review_commands.rs
//
// Menu options 5 to 8: add, view, overwrite and delete reviews

use std::io::Write;

use super::{finish, select_any};
use crate::application::dto::ReviewDto;
use crate::application::prompt::{Console, LineSource, UiResult};
use crate::catalog::{Catalog, MediaRef};
use crate::domain::input::{parse_date, parse_score};
use crate::domain::{Media, MediaId};
use crate::services::{CatalogService, CreateReviewRequest};

pub(crate) fn ask_review<S: LineSource, W: Write>(
    console: &mut Console<S, W>,
) -> UiResult<CreateReviewRequest> {
    Ok(CreateReviewRequest {
        nota: console.ask("Nota (1 a 5): ", parse_score)?,
        comentario: console.ask_text("Comentário: ", "Comentário")?,
        data_consumo: console.ask_optional(
            "Data de consumo (dd/MM/aaaa, Enter para pular): ",
            parse_date,
        )?,
    })
}

pub fn add_review<S: LineSource, W: Write>(
    console: &mut Console<S, W>,
    service: &mut CatalogService,
) -> UiResult<()> {
    let Some(id) = select_any(console, service.catalog())? else {
        return Ok(());
    };

    let consumido = service.catalog().find(id).is_some_and(|m| m.ja_consumiu());
    if !consumido
        && !console.confirm("Esta mídia ainda não foi consumida. Marcar como consumida? (sim/não): ")?
    {
        return console.say("Só é possível avaliar o que já foi consumido.");
    }

    // nothing is written until the whole review has been read
    let request = ask_review(console)?;
    if !consumido {
        if let Err(e) = service.set_consumed(id, true) {
            return console.report(e);
        }
    }
    finish(console, service.add_review(id, request), "Avaliação registrada.")
}

/// Series without reviews of their own show their seasons' reviews
pub fn view_reviews<S: LineSource, W: Write>(
    console: &mut Console<S, W>,
    service: &CatalogService,
) -> UiResult<()> {
    let catalog = service.catalog();
    let Some(id) = select_any(console, catalog)? else {
        return Ok(());
    };
    let Some(media) = catalog.find(id) else {
        return Ok(());
    };

    let linhas: Vec<ReviewDto> = match media {
        MediaRef::Series(series) if series.avaliacoes().is_empty() => series
            .all_season_reviews()
            .into_iter()
            .enumerate()
            .map(|(i, (numero, review))| ReviewDto::from_season_review(i + 1, numero, review))
            .collect(),
        outro => outro
            .avaliacoes()
            .iter()
            .enumerate()
            .map(|(i, review)| ReviewDto::from_review(i + 1, review))
            .collect(),
    };

    if let MediaRef::Series(series) = media {
        console.say(format!("Nota da série: {:.2}", series.nota()))?;
    }
    if linhas.is_empty() {
        return console.say("Nenhuma avaliação registrada.");
    }
    for linha in linhas {
        console.say(linha)?;
    }
    Ok(())
}

/// List an item's own reviews and pick one; returns its 0-based index
fn choose_review<S: LineSource, W: Write>(
    console: &mut Console<S, W>,
    catalog: &Catalog,
    id: MediaId,
) -> UiResult<Option<usize>> {
    let avaliacoes = catalog
        .find(id)
        .map(|m| m.avaliacoes().to_vec())
        .unwrap_or_default();
    if avaliacoes.is_empty() {
        console.say("Nenhuma avaliação registrada.")?;
        return Ok(None);
    }
    for (i, review) in avaliacoes.iter().enumerate() {
        console.say(ReviewDto::from_review(i + 1, review))?;
    }
    let posicao = console.choose("Avaliação: ", 1, avaliacoes.len())?;
    Ok(Some(posicao - 1))
}

pub fn overwrite_review<S: LineSource, W: Write>(
    console: &mut Console<S, W>,
    service: &mut CatalogService,
) -> UiResult<()> {
    let Some(id) = select_any(console, service.catalog())? else {
        return Ok(());
    };
    let Some(indice) = choose_review(console, service.catalog(), id)? else {
        return Ok(());
    };

    let request = ask_review(console)?;
    finish(
        console,
        service.replace_review(id, indice, request),
        "Avaliação sobrescrita.",
    )
}

pub fn delete_review<S: LineSource, W: Write>(
    console: &mut Console<S, W>,
    service: &mut CatalogService,
) -> UiResult<()> {
    let Some(id) = select_any(console, service.catalog())? else {
        return Ok(());
    };
    let Some(indice) = choose_review(console, service.catalog(), id)? else {
        return Ok(());
    };

    if !console.confirm("Confirma a remoção? (sim/não): ")? {
        return console.say("Remoção cancelada.");
    }
    finish(console, service.remove_review(id, indice), "Avaliação removida.")
}

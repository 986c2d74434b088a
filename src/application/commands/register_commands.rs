// src/application/commands/register_commands.rs
//
// Menu option 1: register a book, film, series or season

use std::io::Write;

use super::{finish, select_media};
use crate::application::commands::review_commands::ask_review;
use crate::application::prompt::{Console, LineSource, UiResult};
use crate::domain::input::{parse_int, parse_list, parse_positive_int};
use crate::domain::{Elenco, MediaId, MediaKind};
use crate::error::AppResult;
use crate::services::{
    CatalogService, CreateBookRequest, CreateFilmRequest, CreateSeasonRequest, CreateSeriesRequest,
};

struct CommonFields {
    titulo: String,
    generos: Vec<String>,
    ano_lancamento: i32,
    ja_consumiu: bool,
}

struct AudiovisualFields {
    elenco: Elenco,
    titulo_original: String,
    onde_assistir: Vec<String>,
}

fn read_common<S: LineSource, W: Write>(console: &mut Console<S, W>) -> UiResult<CommonFields> {
    Ok(CommonFields {
        titulo: console.ask_text("Título: ", "Título")?,
        generos: parse_list(&console.ask_any("Gêneros (separados por vírgula): ")?),
        ano_lancamento: console.ask("Ano de lançamento: ", parse_int)?,
        ja_consumiu: console.confirm("Já consumiu? (sim/não): ")?,
    })
}

/// Roles until a blank one
pub(crate) fn read_elenco<S: LineSource, W: Write>(console: &mut Console<S, W>) -> UiResult<Elenco> {
    let mut elenco = Elenco::new();
    loop {
        let funcao = console.ask_any("Função no elenco (Enter para terminar): ")?;
        if funcao.is_empty() {
            return Ok(elenco);
        }
        let nomes = parse_list(&console.ask_any("Nomes (separados por vírgula): ")?);
        if nomes.is_empty() {
            continue;
        }
        elenco.entry(funcao).or_default().extend(nomes);
    }
}

fn read_audiovisual<S: LineSource, W: Write>(
    console: &mut Console<S, W>,
) -> UiResult<AudiovisualFields> {
    Ok(AudiovisualFields {
        titulo_original: console.ask_text("Título original: ", "Título original")?,
        onde_assistir: parse_list(&console.ask_any("Onde assistir (separados por vírgula): ")?),
        elenco: read_elenco(console)?,
    })
}

pub fn register_media<S: LineSource, W: Write>(
    console: &mut Console<S, W>,
    service: &mut CatalogService,
) -> UiResult<()> {
    let tipo = console.menu(
        "Cadastrar:",
        &["Livro", "Filme", "Série", "Temporada de uma série"],
    )?;
    let (resultado, consumido) = match tipo {
        0 => register_book(console, service)?,
        1 => register_film(console, service)?,
        2 => register_series(console, service)?,
        _ => match register_season(console, service)? {
            Some(r) => r,
            None => return Ok(()),
        },
    };

    let id = match resultado {
        Ok(id) => id,
        Err(e) => return console.report(e),
    };
    console.say("Cadastro realizado.")?;

    if consumido && console.confirm("Deseja avaliar agora? (sim/não): ")? {
        let request = ask_review(console)?;
        finish(console, service.add_review(id, request), "Avaliação registrada.")?;
    }
    Ok(())
}

type Registered = (AppResult<MediaId>, bool);

fn register_book<S: LineSource, W: Write>(
    console: &mut Console<S, W>,
    service: &mut CatalogService,
) -> UiResult<Registered> {
    let comum = read_common(console)?;
    let request = CreateBookRequest {
        autor: console.ask_text("Autor: ", "Autor")?,
        editora: console.ask_any("Editora: ")?,
        isbn: console.ask_any("ISBN: ")?,
        possui_exemplar: console.confirm("Possui exemplar? (sim/não): ")?,
        titulo: comum.titulo,
        generos: comum.generos,
        ano_lancamento: comum.ano_lancamento,
        ja_consumiu: comum.ja_consumiu,
    };
    Ok((service.create_book(request), comum.ja_consumiu))
}

fn register_film<S: LineSource, W: Write>(
    console: &mut Console<S, W>,
    service: &mut CatalogService,
) -> UiResult<Registered> {
    let comum = read_common(console)?;
    let duracao = console.ask("Duração (minutos): ", parse_positive_int)?;
    let direcao = console.ask_text("Direção: ", "Direção")?;
    let roteiro = console.ask_any("Roteiro: ")?;
    let av = read_audiovisual(console)?;
    let request = CreateFilmRequest {
        titulo: comum.titulo,
        generos: comum.generos,
        ano_lancamento: comum.ano_lancamento,
        ja_consumiu: comum.ja_consumiu,
        duracao,
        direcao,
        roteiro,
        elenco: av.elenco,
        titulo_original: av.titulo_original,
        onde_assistir: av.onde_assistir,
    };
    Ok((service.create_film(request), comum.ja_consumiu))
}

fn register_series<S: LineSource, W: Write>(
    console: &mut Console<S, W>,
    service: &mut CatalogService,
) -> UiResult<Registered> {
    let comum = read_common(console)?;
    let ano_encerramento =
        console.ask("Ano de encerramento (0 se ainda em exibição): ", parse_int)?;
    let av = read_audiovisual(console)?;
    let request = CreateSeriesRequest {
        titulo: comum.titulo,
        generos: comum.generos,
        ano_lancamento: comum.ano_lancamento,
        ja_consumiu: comum.ja_consumiu,
        ano_encerramento,
        elenco: av.elenco,
        titulo_original: av.titulo_original,
        onde_assistir: av.onde_assistir,
    };
    Ok((service.create_series(request), comum.ja_consumiu))
}

/// None when the series could not be found
fn register_season<S: LineSource, W: Write>(
    console: &mut Console<S, W>,
    service: &mut CatalogService,
) -> UiResult<Option<Registered>> {
    console.say("Série à qual a temporada pertence")?;
    let Some(series_id) = select_media(console, service.catalog(), &[MediaKind::Series])? else {
        return Ok(None);
    };

    let numero = console.ask("Número da temporada: ", parse_positive_int)?;
    let quantidade_episodios = console.ask("Quantidade de episódios: ", parse_positive_int)?;
    let comum = read_common(console)?;
    let av = read_audiovisual(console)?;
    let request = CreateSeasonRequest {
        titulo: comum.titulo,
        generos: comum.generos,
        ano_lancamento: comum.ano_lancamento,
        ja_consumiu: comum.ja_consumiu,
        numero,
        quantidade_episodios,
        elenco: av.elenco,
        titulo_original: av.titulo_original,
        onde_assistir: av.onde_assistir,
    };
    Ok(Some((service.add_season(series_id, request), comum.ja_consumiu)))
}

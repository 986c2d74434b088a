// src/application/commands/update_commands.rs
//
// Menu option 3: edit one field of an item. The field list depends on the kind.

use std::io::Write;

use super::{finish, select_any};
use crate::application::commands::register_commands::read_elenco;
use crate::application::prompt::{Console, LineSource, UiResult};
use crate::domain::input::{parse_int, parse_list, parse_positive_int};
use crate::domain::{Media, MediaId, MediaKind};
use crate::error::AppResult;
use crate::services::CatalogService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Campo {
    Titulo,
    AnoLancamento,
    Generos,
    Consumido,
    Autor,
    Editora,
    Isbn,
    Exemplar,
    Duracao,
    Direcao,
    Roteiro,
    AnoEncerramento,
    NumeroTemporada,
    Episodios,
    TituloOriginal,
    Plataformas,
    Elenco,
}

impl std::fmt::Display for Campo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let nome = match self {
            Campo::Titulo => "Título",
            Campo::AnoLancamento => "Ano de lançamento",
            Campo::Generos => "Gêneros",
            Campo::Consumido => "Já consumiu",
            Campo::Autor => "Autor",
            Campo::Editora => "Editora",
            Campo::Isbn => "ISBN",
            Campo::Exemplar => "Possui exemplar",
            Campo::Duracao => "Duração",
            Campo::Direcao => "Direção",
            Campo::Roteiro => "Roteiro",
            Campo::AnoEncerramento => "Ano de encerramento",
            Campo::NumeroTemporada => "Número da temporada",
            Campo::Episodios => "Quantidade de episódios",
            Campo::TituloOriginal => "Título original",
            Campo::Plataformas => "Onde assistir",
            Campo::Elenco => "Elenco",
        };
        write!(f, "{}", nome)
    }
}

fn campos(kind: MediaKind) -> Vec<Campo> {
    use Campo::*;

    let mut campos = vec![Titulo, AnoLancamento, Generos, Consumido];
    match kind {
        MediaKind::Book => campos.extend([Autor, Editora, Isbn, Exemplar]),
        MediaKind::Film => {
            campos.extend([Duracao, Direcao, Roteiro, TituloOriginal, Plataformas, Elenco])
        }
        MediaKind::Series => campos.extend([AnoEncerramento, TituloOriginal, Plataformas, Elenco]),
        MediaKind::Season => {
            campos.extend([NumeroTemporada, Episodios, TituloOriginal, Plataformas, Elenco])
        }
    }
    campos
}

pub fn update_media<S: LineSource, W: Write>(
    console: &mut Console<S, W>,
    service: &mut CatalogService,
) -> UiResult<()> {
    let Some(id) = select_any(console, service.catalog())? else {
        return Ok(());
    };
    let Some(atual) = service.catalog().find(id) else {
        return Ok(());
    };
    let kind = atual.kind();
    console.say(atual)?;

    let campos = campos(kind);
    let campo = campos[console.menu("Qual campo deseja alterar?", &campos)?];
    let resultado = apply(console, service, id, campo)?;
    finish(console, resultado, "Mídia atualizada.")
}

fn apply<S: LineSource, W: Write>(
    console: &mut Console<S, W>,
    service: &mut CatalogService,
    id: MediaId,
    campo: Campo,
) -> UiResult<AppResult<()>> {
    let resultado = match campo {
        Campo::Titulo => service.set_title(id, console.ask_text("Novo título: ", "Título")?),
        Campo::AnoLancamento => {
            service.set_release_year(id, console.ask("Novo ano de lançamento: ", parse_int)?)
        }
        Campo::Generos => return update_genres(console, service, id),
        Campo::Consumido => service.set_consumed(id, console.confirm("Já consumiu? (sim/não): ")?),
        Campo::Autor => service.set_author(id, console.ask_text("Autor: ", "Autor")?),
        Campo::Editora => service.set_publisher(id, console.ask_any("Editora: ")?),
        Campo::Isbn => service.set_isbn(id, console.ask_any("ISBN: ")?),
        Campo::Exemplar => {
            service.set_has_copy(id, console.confirm("Possui exemplar? (sim/não): ")?)
        }
        Campo::Duracao => {
            service.set_duration(id, console.ask("Duração (minutos): ", parse_positive_int)?)
        }
        Campo::Direcao => service.set_director(id, console.ask_text("Direção: ", "Direção")?),
        Campo::Roteiro => service.set_screenwriter(id, console.ask_any("Roteiro: ")?),
        Campo::AnoEncerramento => service.set_end_year(
            id,
            console.ask("Ano de encerramento (0 se ainda em exibição): ", parse_int)?,
        ),
        Campo::NumeroTemporada => service.set_season_number(
            id,
            console.ask("Novo número da temporada: ", parse_positive_int)?,
        ),
        Campo::Episodios => service.set_episode_count(
            id,
            console.ask("Quantidade de episódios: ", parse_positive_int)?,
        ),
        Campo::TituloOriginal => service.set_original_title(
            id,
            console.ask_text("Título original: ", "Título original")?,
        ),
        Campo::Plataformas => return update_platforms(console, service, id),
        Campo::Elenco => return update_cast(console, service, id),
    };
    Ok(resultado)
}

fn update_genres<S: LineSource, W: Write>(
    console: &mut Console<S, W>,
    service: &mut CatalogService,
    id: MediaId,
) -> UiResult<AppResult<()>> {
    let acao = console.menu("Gêneros:", &["Substituir todos", "Adicionar", "Remover"])?;
    Ok(match acao {
        0 => service.set_genres(id, parse_list(&console.ask_any("Gêneros (separados por vírgula): ")?)),
        1 => service.add_genres(id, parse_list(&console.ask_any("Gêneros (separados por vírgula): ")?)),
        _ => service
            .remove_genre(id, &console.ask_text("Gênero a remover: ", "Gênero")?)
            .map(|_| ()),
    })
}

fn update_platforms<S: LineSource, W: Write>(
    console: &mut Console<S, W>,
    service: &mut CatalogService,
    id: MediaId,
) -> UiResult<AppResult<()>> {
    let acao = console.menu("Onde assistir:", &["Substituir todas", "Adicionar", "Remover"])?;
    Ok(match acao {
        0 => service.set_platforms(id, parse_list(&console.ask_any("Plataformas (separadas por vírgula): ")?)),
        1 => service.add_platforms(id, parse_list(&console.ask_any("Plataformas (separadas por vírgula): ")?)),
        _ => service
            .remove_platform(id, &console.ask_text("Plataforma a remover: ", "Plataforma")?)
            .map(|_| ()),
    })
}

fn update_cast<S: LineSource, W: Write>(
    console: &mut Console<S, W>,
    service: &mut CatalogService,
    id: MediaId,
) -> UiResult<AppResult<()>> {
    let acao = console.menu(
        "Elenco:",
        &[
            "Substituir elenco inteiro",
            "Adicionar pessoa a uma função",
            "Substituir as pessoas de uma função",
            "Remover pessoa de uma função",
            "Remover função",
        ],
    )?;
    if acao == 0 {
        return Ok(service.set_cast(id, read_elenco(console)?));
    }

    let funcao = console.ask_text("Função: ", "Função")?;
    Ok(match acao {
        1 => service.add_cast_member(id, &funcao, &console.ask_text("Nome: ", "Nome")?),
        2 => service.set_cast_role(
            id,
            &funcao,
            parse_list(&console.ask_any("Nomes (separados por vírgula): ")?),
        ),
        3 => service.remove_cast_member(id, &funcao, &console.ask_text("Nome: ", "Nome")?),
        _ => service.remove_cast_role(id, &funcao).map(|_| ()),
    })
}

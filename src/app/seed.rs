// src/app/seed.rs
//
// Built-in demo dataset, installed on a cold start so the menus are never empty.

use chrono::NaiveDate;

use crate::catalog::Catalog;
use crate::domain::{
    Audiovisual, Book, DomainError, DomainResult, Elenco, Film, MediaInfo, Review, Season, Series,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn elenco(papeis: &[(&str, Vec<&str>)]) -> Elenco {
    papeis
        .iter()
        .map(|(funcao, nomes)| (funcao.to_string(), strings(nomes)))
        .collect()
}

fn data(ano: i32, mes: u32, dia: u32) -> DomainResult<NaiveDate> {
    NaiveDate::from_ymd_opt(ano, mes, dia)
        .ok_or_else(|| DomainError::InputFormat(format!("{}-{}-{} is not a date", ano, mes, dia)))
}

fn review(nota: f32, comentario: &str, gravada_em: &str, consumo: NaiveDate) -> DomainResult<Review> {
    Review::with_timestamp(
        nota,
        comentario.to_string(),
        gravada_em.to_string(),
        Some(consumo),
    )
}

/// Consumed MediaInfo carrying one review
fn reviewed(titulo: &str, generos: &[&str], ano: i32, avaliacao: Review) -> DomainResult<MediaInfo> {
    let mut info = consumed(titulo, generos, ano)?;
    info.add_avaliacao(avaliacao)?;
    Ok(info)
}

fn consumed(titulo: &str, generos: &[&str], ano: i32) -> DomainResult<MediaInfo> {
    let mut info = MediaInfo::new(titulo.to_string(), strings(generos), ano)?;
    info.set_ja_consumiu(true);
    Ok(info)
}

fn books() -> DomainResult<Vec<Book>> {
    Ok(vec![
        Book::new(
            reviewed(
                "O Pequeno Príncipe",
                &["Fábula", "Filosofia", "Infantil"],
                1943,
                review(5.0, "Atemporal!!", "08/04/2025 14:00:23", data(2012, 7, 25)?)?,
            )?,
            "Antoine de Saint-Exupéry".to_string(),
            "Agir".to_string(),
            "978-85-220-0844-8".to_string(),
            true,
        ),
        Book::new(
            reviewed(
                "1984",
                &["Ficção Científica", "Distopia", "Política"],
                1949,
                review(4.7, "Assustadoramente atual", "08/04/2025 14:02:15", data(2023, 6, 15)?)?,
            )?,
            "George Orwell".to_string(),
            "Companhia das Letras".to_string(),
            "978-85-359-0277-1".to_string(),
            true,
        ),
        Book::new(
            reviewed(
                "Dom Casmurro",
                &["Romance", "Literatura Brasileira", "Clássico"],
                1899,
                review(4.9, "Obra-prima da literatura", "08/04/2025 14:03:30", data(2024, 1, 10)?)?,
            )?,
            "Machado de Assis".to_string(),
            "Martin Claret".to_string(),
            "978-85-7232-233-4".to_string(),
            false,
        ),
    ])
}

fn films() -> DomainResult<Vec<Film>> {
    Ok(vec![
        Film::new(
            reviewed(
                "Interestelar",
                &["Ficção Científica", "Drama", "Aventura"],
                2014,
                review(4.8, "Muito massa", "08/04/2025 14:01:12", data(2018, 4, 13)?)?,
            )?,
            Audiovisual::new(
                elenco(&[("Ator", vec!["Matthew McConaughey", "Michael Caine"])]),
                "Interstellar".to_string(),
                strings(&["HBO Max", "Amazon Prime Video"]),
            ),
            169,
            "Christopher Nolan".to_string(),
            "Christopher Nolan, Jonathan Nolan".to_string(),
        )?,
        Film::new(
            reviewed(
                "Cidade de Deus",
                &["Drama", "Crime", "Ação"],
                2002,
                review(4.9, "Cinema brasileiro no seu melhor", "08/04/2025 14:02:45", data(2023, 8, 20)?)?,
            )?,
            Audiovisual::new(
                elenco(&[
                    ("Ator", vec!["Alexandre Rodrigues", "Leandro Firmino"]),
                    ("Coadjuvante", vec!["Seu Jorge", "Matheus Nachtergaele"]),
                ]),
                "City of God".to_string(),
                strings(&["Globoplay", "Netflix"]),
            ),
            130,
            "Fernando Meirelles".to_string(),
            "Bráulio Mantovani".to_string(),
        )?,
        Film::new(
            reviewed(
                "Pulp Fiction",
                &["Crime", "Drama", "Sátira"],
                1994,
                review(5.0, "Obra-prima do cinema", "08/04/2025 14:03:30", data(2024, 2, 15)?)?,
            )?,
            Audiovisual::new(
                elenco(&[
                    ("Ator", vec!["John Travolta", "Samuel L. Jackson"]),
                    ("Coadjuvante", vec!["Uma Thurman", "Bruce Willis"]),
                ]),
                "Pulp Fiction".to_string(),
                strings(&["Prime Video", "Apple TV+"]),
            ),
            154,
            "Quentin Tarantino".to_string(),
            "Quentin Tarantino".to_string(),
        )?,
    ])
}

struct SeasonSeed<'a> {
    generos: &'a [&'a str],
    ano: i32,
    elenco: Elenco,
    titulo_original: &'a str,
    numero: u32,
    episodios: u32,
    avaliacao: Review,
}

fn series_with(
    titulo: &str,
    generos: &[&str],
    ano: i32,
    ano_encerramento: i32,
    audiovisual: Audiovisual,
    temporadas: Vec<SeasonSeed<'_>>,
) -> DomainResult<Series> {
    let plataformas = audiovisual.onde_assistir().to_vec();
    let mut series = Series::new(consumed(titulo, generos, ano)?, audiovisual, ano_encerramento);
    for t in temporadas {
        let temporada = Season::new(
            reviewed(titulo, t.generos, t.ano, t.avaliacao)?,
            Audiovisual::new(t.elenco, t.titulo_original.to_string(), plataformas.clone()),
            t.numero,
            t.episodios,
        )?;
        series.add_temporada(temporada)?;
    }
    Ok(series)
}

fn series() -> DomainResult<Vec<Series>> {
    let the_boys_elenco = elenco(&[("Ator", vec!["Karl Urban", "Jack Quaid", "Antony Starr"])]);
    let mut the_boys_s2 = the_boys_elenco.clone();
    the_boys_s2
        .entry("Ator".to_string())
        .or_default()
        .push("Aya Cash".to_string());

    let breaking_bad_elenco = elenco(&[
        ("Ator", vec!["Bryan Cranston", "Aaron Paul"]),
        ("Coadjuvante", vec!["Bob Odenkirk", "Giancarlo Esposito"]),
    ]);
    let supernatural_elenco = elenco(&[("Ator", vec!["Jensen Ackles"])]);

    Ok(vec![
        series_with(
            "The Boys",
            &["Ação", "Drama", "Super-herói"],
            2019,
            0,
            Audiovisual::new(
                the_boys_elenco.clone(),
                "The Boys".to_string(),
                strings(&["Amazon Prime Video"]),
            ),
            vec![
                SeasonSeed {
                    generos: &["Ação", "Drama"],
                    ano: 2019,
                    elenco: the_boys_elenco,
                    titulo_original: "The Boys",
                    numero: 1,
                    episodios: 8,
                    avaliacao: review(4.2, "Ótimo começo", "08/04/2025 13:49:41", data(2020, 1, 5)?)?,
                },
                SeasonSeed {
                    generos: &["Ação", "Drama", "Política"],
                    ano: 2020,
                    elenco: the_boys_s2,
                    titulo_original: "The Boys",
                    numero: 2,
                    episodios: 8,
                    avaliacao: review(4.8, "Bizarro", "08/04/2025 13:51:39", data(2021, 9, 5)?)?,
                },
            ],
        )?,
        series_with(
            "SuperNatural",
            &["Ação", "Drama", "Sombrio", "Fantasia"],
            2005,
            2020,
            Audiovisual::new(
                supernatural_elenco.clone(),
                "Supernatural".to_string(),
                strings(&["Amazon Prime Video"]),
            ),
            vec![SeasonSeed {
                generos: &["Ação", "Drama", "Sombrio", "Fantasia"],
                ano: 2005,
                elenco: supernatural_elenco,
                titulo_original: "Supernatural",
                numero: 1,
                episodios: 25,
                avaliacao: review(4.5, "Maneirão, hein?", "08/04/2025 13:52:16", data(2016, 5, 25)?)?,
            }],
        )?,
        series_with(
            "Breaking Bad",
            &["Drama", "Crime", "Suspense"],
            2008,
            2013,
            Audiovisual::new(
                breaking_bad_elenco.clone(),
                "Breaking Bad".to_string(),
                strings(&["Netflix"]),
            ),
            vec![SeasonSeed {
                generos: &["Drama", "Crime"],
                ano: 2008,
                elenco: breaking_bad_elenco,
                titulo_original: "Breaking Bad",
                numero: 1,
                episodios: 7,
                avaliacao: review(5.0, "Melhor piloto de série", "08/04/2025 13:53:30", data(2023, 12, 1)?)?,
            }],
        )?,
        series_with(
            "Black Mirror",
            &["Ficção Científica", "Drama", "Suspense"],
            2011,
            0,
            Audiovisual::new(
                elenco(&[("Ator", vec!["Diversos"])]),
                "Black Mirror".to_string(),
                strings(&["Netflix"]),
            ),
            vec![SeasonSeed {
                generos: &["Ficção Científica", "Drama", "Suspense"],
                ano: 2011,
                elenco: elenco(&[("Ator", vec!["Daniel Kaluuya"])]),
                titulo_original: "Fifteen Million Merits",
                numero: 1,
                episodios: 3,
                avaliacao: review(4.7, "Perturbador", "08/04/2025 13:54:45", data(2024, 1, 15)?)?,
            }],
        )?,
    ])
}

/// The demo catalog: 3 books, 3 films and 4 series, all consumed and reviewed
pub fn demo_catalog() -> DomainResult<Catalog> {
    let mut catalog = Catalog::new();
    catalog.replace_books(books()?);
    catalog.replace_films(films()?);
    catalog.replace_series(series()?);
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{validate_book, validate_film, validate_series, Media};

    #[test]
    fn test_demo_catalog_is_valid() {
        let catalog = demo_catalog().unwrap();
        assert_eq!(catalog.list_books().len(), 3);
        assert_eq!(catalog.list_films().len(), 3);
        assert_eq!(catalog.list_series().len(), 4);

        catalog.list_books().iter().for_each(|b| validate_book(b).unwrap());
        catalog.list_films().iter().for_each(|f| validate_film(f).unwrap());
        catalog.list_series().iter().for_each(|s| validate_series(s).unwrap());
        assert!(catalog.list_unified().iter().all(|m| m.ja_consumiu()));
    }

    #[test]
    fn test_demo_series_aggregates() {
        let catalog = demo_catalog().unwrap();
        let the_boys = &catalog.list_series()[0];
        assert_eq!(the_boys.titulo(), "The Boys");
        assert_eq!(the_boys.quantidade_temporadas(), 2);
        assert!((the_boys.nota() - 4.5).abs() < 1e-5);
        assert_eq!(the_boys.status_label(), "Em exibição");
        assert_eq!(catalog.list_series()[2].status_label(), "Encerrada em 2013");
    }
}

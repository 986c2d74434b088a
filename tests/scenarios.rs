// tests/scenarios.rs
//
// End-to-end flows through the public API, backed by real data files in a
// temporary directory.

use std::sync::Arc;

use chrono::{Duration, Local, NaiveDateTime};
use tempfile::TempDir;

use diario_cultural::query_service::{by_cast, by_director, by_isbn};
use diario_cultural::{
    bootstrap, initialize, resolve_data_dir, AppConfig, AppError, CatalogRepository,
    CatalogService, CreateBookRequest, CreateFilmRequest, CreateReviewRequest,
    CreateSeasonRequest, CreateSeriesRequest, DomainError, Elenco, ErrorKind,
    FileCatalogRepository, Media, MediaKind,
};

// ============================================================================
// HELPERS
// ============================================================================

fn empty_service(tmp: &TempDir) -> CatalogService {
    let paths = resolve_data_dir(&tmp.path().join("arquivos")).unwrap();
    let repository: Arc<dyn CatalogRepository> = Arc::new(FileCatalogRepository::new(paths));
    initialize(repository, false).unwrap()
}

fn film(titulo: &str, direcao: &str, elenco: Elenco) -> CreateFilmRequest {
    CreateFilmRequest {
        titulo: titulo.to_string(),
        generos: vec!["Ficção Científica".to_string()],
        ano_lancamento: 2010,
        ja_consumiu: true,
        duracao: 148,
        direcao: direcao.to_string(),
        roteiro: direcao.to_string(),
        elenco,
        titulo_original: titulo.to_string(),
        onde_assistir: vec!["Netflix".to_string()],
    }
}

fn season(numero: u32) -> CreateSeasonRequest {
    CreateSeasonRequest {
        titulo: "Dark".to_string(),
        generos: vec!["Suspense".to_string()],
        ano_lancamento: 2016 + numero as i32,
        ja_consumiu: true,
        numero,
        quantidade_episodios: 10,
        elenco: Elenco::new(),
        titulo_original: "Dark".to_string(),
        onde_assistir: vec!["Netflix".to_string()],
    }
}

fn series(service: &mut CatalogService) -> diario_cultural::MediaId {
    service
        .create_series(CreateSeriesRequest {
            titulo: "Dark".to_string(),
            generos: vec!["Suspense".to_string(), "Ficção Científica".to_string()],
            ano_lancamento: 2017,
            ja_consumiu: true,
            ano_encerramento: 2020,
            elenco: Elenco::new(),
            titulo_original: "Dark".to_string(),
            onde_assistir: vec!["Netflix".to_string()],
        })
        .unwrap()
}

fn review(nota: f32) -> CreateReviewRequest {
    CreateReviewRequest {
        nota,
        comentario: format!("Nota {}", nota),
        data_consumo: None,
    }
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn test_register_and_round_trip_a_book() {
    let tmp = TempDir::new().unwrap();
    let mut service = empty_service(&tmp);

    let id = service
        .create_book(CreateBookRequest {
            titulo: "O Hobbit".to_string(),
            generos: vec!["Ficção".to_string(), "Aventura".to_string()],
            ano_lancamento: 1937,
            ja_consumiu: false,
            autor: "J.R.R. Tolkien".to_string(),
            editora: "HarperCollins".to_string(),
            isbn: "0123456789".to_string(),
            possui_exemplar: true,
        })
        .unwrap();

    let encontrados = by_isbn("0123456789", service.catalog().list_books());
    assert_eq!(encontrados.len(), 1);
    assert_eq!(encontrados[0].id(), id);

    let config = AppConfig::with_data_dir(tmp.path().join("arquivos"));
    let recarregado = bootstrap(&config).unwrap();
    assert_eq!(recarregado.catalog().list_books(), service.catalog().list_books());
    assert_eq!(recarregado.catalog().list_books()[0].autor(), "J.R.R. Tolkien");
}

#[test]
fn test_accent_insensitive_director_search() {
    let tmp = TempDir::new().unwrap();
    let mut service = empty_service(&tmp);
    service
        .create_film(film("Inception", "Christopher Nolan", Elenco::new()))
        .unwrap();

    let encontrados = by_director("christopher nolán", service.catalog().list_films());
    assert_eq!(encontrados.len(), 1);
    assert_eq!(encontrados[0].titulo(), "Inception");
}

#[test]
fn test_cast_search() {
    let tmp = TempDir::new().unwrap();
    let mut service = empty_service(&tmp);

    let mut elenco = Elenco::new();
    elenco.insert(
        "Protagonista".to_string(),
        vec!["Leonardo DiCaprio".to_string(), "Joseph Gordon-Levitt".to_string()],
    );
    service
        .create_film(film("Inception", "Christopher Nolan", elenco))
        .unwrap();
    let filmes = service.catalog().list_films();

    assert_eq!(by_cast("Protagonista", "Leonardo DiCaprio", filmes).len(), 1);
    assert_eq!(by_cast("Protagonista", "leonardo dicáprio", filmes).len(), 1);
    assert!(by_cast("Coadjuvante", "Leonardo DiCaprio", filmes).is_empty());
}

#[test]
fn test_season_ordering() {
    let tmp = TempDir::new().unwrap();
    let mut service = empty_service(&tmp);
    let dark = series(&mut service);

    for numero in [2, 1, 3] {
        service.add_season(dark, season(numero)).unwrap();
    }

    let numeros = |service: &CatalogService| -> Vec<u32> {
        service.catalog().list_series()[0]
            .temporadas()
            .iter()
            .map(|t| t.numero())
            .collect()
    };
    assert_eq!(numeros(&service), vec![1, 2, 3]);

    let erro = service.add_season(dark, season(2)).unwrap_err();
    assert_eq!(erro.kind(), ErrorKind::InvariantViolation);
    assert_eq!(numeros(&service), vec![1, 2, 3]);
}

#[test]
fn test_series_aggregate() {
    let tmp = TempDir::new().unwrap();
    let mut service = empty_service(&tmp);
    let dark = series(&mut service);
    let primeira = service.add_season(dark, season(1)).unwrap();
    let segunda = service.add_season(dark, season(2)).unwrap();

    service.add_review(primeira, review(4.5)).unwrap();
    service.add_review(segunda, review(5.0)).unwrap();
    assert!((service.catalog().list_series()[0].nota() - 4.75).abs() < 1e-5);

    service.remove_review(primeira, 0).unwrap();
    assert!((service.catalog().list_series()[0].nota() - 5.0).abs() < 1e-5);

    service.remove_review(segunda, 0).unwrap();
    assert_eq!(service.catalog().list_series()[0].nota(), 0.0);

    // the aggregate survives a reload
    service.add_review(segunda, review(3.0)).unwrap();
    let recarregado = bootstrap(&AppConfig::with_data_dir(tmp.path().join("arquivos"))).unwrap();
    assert!((recarregado.catalog().list_series()[0].nota() - 3.0).abs() < 1e-5);
}

#[test]
fn test_replacing_a_season_review_refreshes_the_aggregate() {
    let tmp = TempDir::new().unwrap();
    let mut service = empty_service(&tmp);
    let dark = series(&mut service);
    let primeira = service.add_season(dark, season(1)).unwrap();
    let segunda = service.add_season(dark, season(2)).unwrap();
    service.add_review(primeira, review(4.5)).unwrap();
    service.add_review(segunda, review(5.0)).unwrap();

    let antiga = service.replace_review(primeira, 0, review(2.0)).unwrap();
    assert_eq!(antiga.nota(), 4.5);
    assert!((service.catalog().list_series()[0].nota() - 3.5).abs() < 1e-5);

    let erro = service.replace_review(primeira, 0, review(9.0)).unwrap_err();
    assert_eq!(erro.kind(), ErrorKind::RangeViolation);
    assert_eq!(service.reviews(primeira).unwrap()[0].nota(), 2.0);
    assert!((service.catalog().list_series()[0].nota() - 3.5).abs() < 1e-5);

    let recarregado = bootstrap(&AppConfig::with_data_dir(tmp.path().join("arquivos"))).unwrap();
    assert!((recarregado.catalog().list_series()[0].nota() - 3.5).abs() < 1e-5);
}

#[test]
fn test_review_preconditions() {
    let tmp = TempDir::new().unwrap();
    let mut service = empty_service(&tmp);
    let id = service
        .create_film(film("Inception", "Christopher Nolan", Elenco::new()))
        .unwrap();

    let erro = service.add_review(id, review(6.0)).unwrap_err();
    assert!(matches!(erro, AppError::Domain(DomainError::RangeViolation(_))));
    assert!(service.reviews(id).unwrap().is_empty());

    let amanha = Local::now().date_naive() + Duration::days(1);
    let erro = service
        .add_review(
            id,
            CreateReviewRequest {
                data_consumo: Some(amanha),
                ..review(4.0)
            },
        )
        .unwrap_err();
    assert_eq!(erro.kind(), ErrorKind::RangeViolation);
    assert!(service.reviews(id).unwrap().is_empty());

    service.add_review(id, review(4.0)).unwrap();
    let avaliacoes = service.reviews(id).unwrap();
    assert_eq!(avaliacoes.len(), 1);
    assert!(NaiveDateTime::parse_from_str(avaliacoes[0].data_avaliacao(), "%d/%m/%Y %H:%M:%S").is_ok());
}

#[test]
fn test_unconsumed_item_cannot_be_reviewed() {
    let tmp = TempDir::new().unwrap();
    let mut service = empty_service(&tmp);
    let id = service
        .create_film(CreateFilmRequest {
            ja_consumiu: false,
            ..film("Tenet", "Christopher Nolan", Elenco::new())
        })
        .unwrap();

    let erro = service.add_review(id, review(4.0)).unwrap_err();
    assert_eq!(erro.kind(), ErrorKind::InvariantViolation);

    service.set_consumed(id, true).unwrap();
    service.add_review(id, review(4.0)).unwrap();
    assert_eq!(service.catalog().find(id).unwrap().kind(), MediaKind::Film);
}

// tests/properties.rs
//
// Properties checked over hand-picked sample sets: normalization, searches,
// ranking, season order, series aggregate, persistence and seeding.

use std::sync::Arc;

use tempfile::TempDir;

use diario_cultural::domain::{contains_normalized, equivalent, normalize};
use diario_cultural::query_service::{
    by_author, by_director, by_genre, by_isbn, by_title, rank_best_first, rank_worst_first,
};
use diario_cultural::{
    bootstrap, demo_catalog, initialize, AppConfig, Audiovisual, Book, CatalogRepository,
    CatalogService, DataPaths, Elenco, FileCatalogRepository, Media, MediaInfo, MediaRef,
    Review, Season, Series,
};

const AMOSTRAS: [&str; 12] = [
    "Ficção Científica",
    "  O PEQUENO príncipe ",
    "J.R.R. Tolkien",
    "978-85-359-0277-1",
    "Christopher Nolan",
    "São Paulo",
    "",
    "ÀÉÎÕÜ ç",
    "Pulp Fiction!",
    "Super-herói",
    "Rocky Ⅱ",
    "½",
];

fn info(titulo: &str, generos: &[&str]) -> MediaInfo {
    let generos = generos.iter().map(|g| g.to_string()).collect();
    let mut info = MediaInfo::new(titulo.to_string(), generos, 2000).unwrap();
    info.set_ja_consumiu(true);
    info
}

fn book(titulo: &str, autor: &str, isbn: &str, generos: &[&str]) -> Book {
    Book::new(
        info(titulo, generos),
        autor.to_string(),
        "Editora".to_string(),
        isbn.to_string(),
        false,
    )
}

fn reviewed_book(titulo: &str, nota: Option<f32>) -> Book {
    let mut livro = book(titulo, "Autor", "", &[]);
    if let Some(nota) = nota {
        let review = Review::new(nota, "ok".to_string(), None).unwrap();
        livro.info_mut().add_avaliacao(review).unwrap();
    }
    livro
}

// ============================================================================
// NORMALIZATION
// ============================================================================

#[test]
fn test_normalize_is_idempotent() {
    for s in AMOSTRAS {
        let chave = normalize(s);
        assert_eq!(normalize(&chave), chave, "{:?}", s);
    }
}

#[test]
fn test_normalize_ignores_case_marks_punctuation_and_spaces() {
    let pares = [
        ("Ficção Científica", "ficcao cientifica"),
        ("O Pequeno Príncipe", "o pequeno principe"),
        ("J.R.R. Tolkien", "jrr tolkien"),
        ("978-85-359-0277-1", "9788535902771"),
        ("Super-herói", "SUPER HEROI"),
        ("Nolán", "nolan"),
        ("Rocky Ⅱ", "rocky"),
        ("½", ""),
    ];
    for (a, b) in pares {
        assert!(equivalent(a, b), "{} ~ {}", a, b);
    }
    assert!(!equivalent("Drama", "Dramas"));
}

// ============================================================================
// SEARCHES
// ============================================================================

#[test]
fn test_equality_searches_are_normalization_closed() {
    for campo in AMOSTRAS {
        let titulo = if campo.trim().is_empty() { "x" } else { campo };
        let livro = book(titulo, campo, campo, &[]);
        let fonte = [livro];
        for consulta in AMOSTRAS {
            let esperado = normalize(consulta) == normalize(campo);
            assert_eq!(by_author(consulta, &fonte).len() == 1, esperado);
            assert_eq!(by_isbn(consulta, &fonte).len() == 1, esperado);
            if !campo.trim().is_empty() {
                assert_eq!(by_title(consulta, &fonte).len() == 1, esperado);
            }
        }
    }

    let catalog = demo_catalog().unwrap();
    let filmes = catalog.list_films();
    for filme in filmes {
        assert_eq!(by_director(&filme.direcao().to_uppercase(), filmes)[0].id(), filme.id());
    }
}

#[test]
fn test_genre_search_is_substring_and_stable() {
    let fonte = vec![
        book("A", "", "", &["Ficção Científica"]),
        book("B", "", "", &["Drama"]),
        book("C", "", "", &["ficção", "Romance"]),
        book("D", "", "", &[]),
        book("E", "", "", &["Não Ficção"]),
    ];

    for consulta in ["ficcao", "FICÇÃO CIENT", "drama", "", "terror"] {
        let esperado: Vec<&str> = fonte
            .iter()
            .filter(|b| b.generos().iter().any(|g| contains_normalized(g, consulta)))
            .map(|b| b.titulo())
            .collect();
        let obtido: Vec<&str> = by_genre(consulta, &fonte).into_iter().map(|b| b.titulo()).collect();
        assert_eq!(obtido, esperado, "{}", consulta);
    }
    let titulos: Vec<&str> = by_genre("ficcao", &fonte).into_iter().map(|b| b.titulo()).collect();
    assert_eq!(titulos, vec!["A", "C", "E"]);
}

// ============================================================================
// RANKING
// ============================================================================

#[test]
fn test_ranking_orders_by_latest_score_and_is_stable() {
    let fonte = vec![
        reviewed_book("a", Some(3.0)),
        reviewed_book("b", None),
        reviewed_book("c", Some(5.0)),
        reviewed_book("d", Some(3.0)),
        reviewed_book("e", Some(4.5)),
    ];

    let melhores: Vec<&str> = rank_best_first(&fonte).into_iter().map(|b| b.titulo()).collect();
    assert_eq!(melhores, vec!["c", "e", "a", "d", "b"]);

    let piores: Vec<&str> = rank_worst_first(&fonte).into_iter().map(|b| b.titulo()).collect();
    assert_eq!(piores, vec!["b", "a", "d", "e", "c"]);
}

#[test]
fn test_ranking_uses_series_aggregate() {
    let catalog = demo_catalog().unwrap();
    let todos = catalog.list_unified();
    let ranking = rank_best_first(&todos);

    for par in ranking.windows(2) {
        assert!(par[0].latest_score() >= par[1].latest_score());
    }
    let the_boys = ranking
        .iter()
        .find(|m| m.titulo() == "The Boys")
        .unwrap();
    assert!(matches!(the_boys, MediaRef::Series(_)));
    assert!((the_boys.latest_score() - 4.5).abs() < 1e-5);
}

// ============================================================================
// SERIES
// ============================================================================

fn season(numero: u32) -> Season {
    Season::new(info("Dark", &[]), Audiovisual::default(), numero, 8).unwrap()
}

#[test]
fn test_seasons_stay_strictly_increasing() {
    for ordem in [[1, 2, 3, 4], [4, 3, 2, 1], [3, 1, 4, 2], [2, 4, 1, 3]] {
        let mut series = Series::new(info("Dark", &[]), Audiovisual::default(), 0);
        for numero in ordem {
            series.add_temporada(season(numero)).unwrap();
            assert!(series.add_temporada(season(numero)).is_err());
        }
        let numeros: Vec<u32> = series.temporadas().iter().map(|t| t.numero()).collect();
        assert!(numeros.windows(2).all(|p| p[0] < p[1]));
        assert_eq!(numeros.len(), 4);
    }
}

#[test]
fn test_aggregate_is_mean_of_latest_season_scores() {
    let mut series = Series::new(info("Dark", &[]), Audiovisual::default(), 2020);
    let ids: Vec<_> = (1..=3)
        .map(|n| {
            let t = season(n);
            let id = t.id();
            series.add_temporada(t).unwrap();
            id
        })
        .collect();

    let passos: [(usize, f32); 6] = [(0, 4.0), (1, 2.0), (0, 5.0), (2, 3.5), (1, 1.0), (2, 4.5)];
    let mut ultimas: [Option<f32>; 3] = [None; 3];
    for (indice, nota) in passos {
        let review = Review::new(nota, "ok".to_string(), None).unwrap();
        series
            .edit_temporada(ids[indice], |t| t.info_mut().add_avaliacao(review))
            .unwrap();
        ultimas[indice] = Some(nota);

        let avaliadas: Vec<f32> = ultimas.iter().flatten().copied().collect();
        let media = avaliadas.iter().sum::<f32>() / avaliadas.len() as f32;
        assert!((series.nota() - media).abs() < 1e-5);
    }

    for id in &ids {
        while series
            .edit_temporada(*id, |t| t.info_mut().remove_avaliacao(0))
            .is_ok()
        {}
    }
    assert_eq!(series.nota(), 0.0);
}

// ============================================================================
// PERSISTENCE & SEEDING
// ============================================================================

#[test]
fn test_every_kind_round_trips() {
    let tmp = TempDir::new().unwrap();
    let repository = FileCatalogRepository::new(DataPaths::under(tmp.path()));
    let catalog = demo_catalog().unwrap();

    repository.save_books(catalog.list_books()).unwrap();
    repository.save_films(catalog.list_films()).unwrap();
    repository.save_series(catalog.list_series()).unwrap();

    assert_eq!(repository.load_books().unwrap(), catalog.list_books());
    assert_eq!(repository.load_films().unwrap(), catalog.list_films());
    assert_eq!(repository.load_series().unwrap(), catalog.list_series());

    repository.save_films(&[]).unwrap();
    assert!(repository.load_films().unwrap().is_empty());
}

#[test]
fn test_cast_round_trips() {
    let tmp = TempDir::new().unwrap();
    let repository = FileCatalogRepository::new(DataPaths::under(tmp.path()));
    let mut elenco = Elenco::new();
    elenco.insert("Direção de arte".to_string(), vec!["Ana".to_string()]);
    let series = Series::new(
        info("Dark", &["Suspense"]),
        Audiovisual::new(elenco, "Dark".to_string(), vec![]),
        0,
    );

    repository.save_series(std::slice::from_ref(&series)).unwrap();
    assert_eq!(repository.load_series().unwrap(), vec![series]);
}

#[test]
fn test_cold_start_seeds_and_warm_start_does_not() {
    let tmp = TempDir::new().unwrap();
    let config = AppConfig::with_data_dir(tmp.path().join("frio"));
    let service = bootstrap(&config).unwrap();
    assert!(!service.catalog().is_empty());
    assert!(!service.catalog().list_books().is_empty());

    // only one loadable (empty) file: no seeding
    let dir = tmp.path().join("morno");
    let paths = diario_cultural::resolve_data_dir(&dir).unwrap();
    std::fs::write(&paths.filmes, "[]").unwrap();
    let repository: Arc<dyn CatalogRepository> = Arc::new(FileCatalogRepository::new(paths));
    let service: CatalogService = initialize(repository, true).unwrap();
    assert!(service.catalog().is_empty());
}

#[test]
fn test_corrupt_file_is_skipped_not_fatal() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("arquivos");
    let paths = diario_cultural::resolve_data_dir(&dir).unwrap();
    std::fs::write(&paths.livros, "isto não é json").unwrap();
    std::fs::write(&paths.series, "[]").unwrap();

    let service = bootstrap(&AppConfig::with_data_dir(dir)).unwrap();
    assert!(service.catalog().is_empty());
}

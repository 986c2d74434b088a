use std::collections::{BTreeMap, BTreeSet};

use crate::domain::{normalize, Book, Film, Media, MediaId, MediaInfo, MediaKind, Season, Series};

/// Borrowed view of any cataloged item, used by the unified listing
#[derive(Debug, Clone, Copy)]
pub enum MediaRef<'a> {
    Book(&'a Book),
    Film(&'a Film),
    Series(&'a Series),
    Season(&'a Season),
}

impl<'a> Media for MediaRef<'a> {
    fn info(&self) -> &MediaInfo {
        match self {
            MediaRef::Book(b) => b.info(),
            MediaRef::Film(f) => f.info(),
            MediaRef::Series(s) => s.info(),
            MediaRef::Season(t) => t.info(),
        }
    }

    fn kind(&self) -> MediaKind {
        match self {
            MediaRef::Book(_) => MediaKind::Book,
            MediaRef::Film(_) => MediaKind::Film,
            MediaRef::Series(_) => MediaKind::Series,
            MediaRef::Season(_) => MediaKind::Season,
        }
    }

    fn latest_score(&self) -> f32 {
        match self {
            MediaRef::Book(b) => b.latest_score(),
            MediaRef::Film(f) => f.latest_score(),
            MediaRef::Series(s) => s.latest_score(),
            MediaRef::Season(t) => t.latest_score(),
        }
    }
}

impl std::fmt::Display for MediaRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaRef::Book(b) => std::fmt::Display::fmt(b, f),
            MediaRef::Film(m) => std::fmt::Display::fmt(m, f),
            MediaRef::Series(s) => std::fmt::Display::fmt(s, f),
            MediaRef::Season(t) => std::fmt::Display::fmt(t, f),
        }
    }
}

/// In-memory owner of every cataloged item, one typed collection per kind.
///
/// Adding never checks for duplicates. Items are addressed by their `MediaId`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Catalog {
    livros: Vec<Book>,
    filmes: Vec<Film>,
    series: Vec<Series>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_book(&mut self, book: Book) -> MediaId {
        let id = book.id();
        self.livros.push(book);
        id
    }

    pub fn add_film(&mut self, film: Film) -> MediaId {
        let id = film.id();
        self.filmes.push(film);
        id
    }

    pub fn add_series(&mut self, series: Series) -> MediaId {
        let id = series.id();
        self.series.push(series);
        id
    }

    /// Remove a top-level item by identity. Returns the kind removed, `None` when absent.
    pub fn remove(&mut self, id: MediaId) -> Option<MediaKind> {
        if let Some(pos) = self.livros.iter().position(|b| b.id() == id) {
            self.livros.remove(pos);
            return Some(MediaKind::Book);
        }
        if let Some(pos) = self.filmes.iter().position(|f| f.id() == id) {
            self.filmes.remove(pos);
            return Some(MediaKind::Film);
        }
        if let Some(pos) = self.series.iter().position(|s| s.id() == id) {
            self.series.remove(pos);
            return Some(MediaKind::Series);
        }
        None
    }

    pub fn list_books(&self) -> &[Book] {
        &self.livros
    }

    pub fn list_films(&self) -> &[Film] {
        &self.filmes
    }

    pub fn list_series(&self) -> &[Series] {
        &self.series
    }

    /// Every item of one kind. Seasons are gathered from all series, in series order.
    pub fn list_all(&self, kind: MediaKind) -> Vec<MediaRef<'_>> {
        match kind {
            MediaKind::Book => self.livros.iter().map(MediaRef::Book).collect(),
            MediaKind::Film => self.filmes.iter().map(MediaRef::Film).collect(),
            MediaKind::Series => self.series.iter().map(MediaRef::Series).collect(),
            MediaKind::Season => self
                .series
                .iter()
                .flat_map(|s| s.temporadas().iter().map(MediaRef::Season))
                .collect(),
        }
    }

    /// Books ++ Films ++ Series
    pub fn list_unified(&self) -> Vec<MediaRef<'_>> {
        self.livros
            .iter()
            .map(MediaRef::Book)
            .chain(self.filmes.iter().map(MediaRef::Film))
            .chain(self.series.iter().map(MediaRef::Series))
            .collect()
    }

    /// Genres of every book, film and series, one spelling per normalized key,
    /// ordered by key. The first spelling met wins.
    pub fn distinct_genres(&self) -> Vec<String> {
        let mut por_chave: BTreeMap<String, String> = BTreeMap::new();
        for media in self.list_unified() {
            for genero in media.generos() {
                let chave = normalize(genero);
                if chave.is_empty() {
                    continue;
                }
                por_chave
                    .entry(chave)
                    .or_insert_with(|| genero.trim().to_string());
            }
        }
        por_chave.into_values().collect()
    }

    pub fn distinct_years(&self) -> BTreeSet<i32> {
        self.list_unified()
            .iter()
            .map(Media::ano_lancamento)
            .collect()
    }

    /// Empty one collection. Clearing `Season` empties the seasons of every series.
    pub fn clear(&mut self, kind: MediaKind) {
        match kind {
            MediaKind::Book => self.livros.clear(),
            MediaKind::Film => self.filmes.clear(),
            MediaKind::Series => self.series.clear(),
            MediaKind::Season => {
                for series in &mut self.series {
                    series.clear_temporadas();
                }
            }
        }
    }

    pub fn replace_books(&mut self, livros: Vec<Book>) {
        self.livros = livros;
    }

    pub fn replace_films(&mut self, filmes: Vec<Film>) {
        self.filmes = filmes;
    }

    pub fn replace_series(&mut self, series: Vec<Series>) {
        self.series = series;
    }

    pub fn is_empty(&self) -> bool {
        self.livros.is_empty() && self.filmes.is_empty() && self.series.is_empty()
    }

    // ------------------------------------------------------------------
    // Lookup by identity
    // ------------------------------------------------------------------

    /// Any item by id, seasons included
    pub fn find(&self, id: MediaId) -> Option<MediaRef<'_>> {
        if let Some(b) = self.livros.iter().find(|b| b.id() == id) {
            return Some(MediaRef::Book(b));
        }
        if let Some(f) = self.filmes.iter().find(|f| f.id() == id) {
            return Some(MediaRef::Film(f));
        }
        for s in &self.series {
            if s.id() == id {
                return Some(MediaRef::Series(s));
            }
            if let Some(t) = s.temporada_por_id(id) {
                return Some(MediaRef::Season(t));
            }
        }
        None
    }

    pub fn book_mut(&mut self, id: MediaId) -> Option<&mut Book> {
        self.livros.iter_mut().find(|b| b.id() == id)
    }

    pub fn film_mut(&mut self, id: MediaId) -> Option<&mut Film> {
        self.filmes.iter_mut().find(|f| f.id() == id)
    }

    pub fn series_mut(&mut self, id: MediaId) -> Option<&mut Series> {
        self.series.iter_mut().find(|s| s.id() == id)
    }

    /// The series owning the season with the given id
    pub fn series_of_season_mut(&mut self, season_id: MediaId) -> Option<&mut Series> {
        self.series
            .iter_mut()
            .find(|s| s.temporada_por_id(season_id).is_some())
    }
}

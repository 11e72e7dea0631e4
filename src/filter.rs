//! Catalog filtering
//!
//! Pure functions over an in-memory catalog. Nothing here touches state:
//! the filtered view is recomputed from (catalog, criteria) on every change.

use std::collections::BTreeSet;

use crate::models::{Book, Category, Facets, FilterCriteria};

/// Apply `criteria` to `catalog`.
///
/// Stages run in order (category, genre, year, search), each narrowing the
/// output of the previous one. Order is preserved and string comparisons are
/// case-insensitive; the year is compared as text.
pub fn apply(catalog: &[Book], criteria: &FilterCriteria) -> Vec<Book> {
    let category = match &criteria.category {
        Category::All => None,
        Category::Named(name) => Some(name.to_lowercase()),
    };
    let genre = criteria.genre().map(str::to_lowercase);
    let year = criteria.year();
    let term = criteria.search().map(str::to_lowercase);

    catalog
        .iter()
        .filter(|book| {
            category
                .as_deref()
                .map_or(true, |c| book.record.category.to_lowercase() == c)
        })
        .filter(|book| {
            genre
                .as_deref()
                .map_or(true, |g| book.record.genre.to_lowercase() == g)
        })
        .filter(|book| year.map_or(true, |y| book.record.year == y))
        .filter(|book| term.as_deref().map_or(true, |t| matches_term(book, t)))
        .cloned()
        .collect()
}

/// Title, author or description contains `term` (already lowercased)
fn matches_term(book: &Book, term: &str) -> bool {
    book.record.title.to_lowercase().contains(term)
        || book.record.author.to_lowercase().contains(term)
        || book.record.description.to_lowercase().contains(term)
}

/// Distinct categories, genres and years plus read/favorite counts
pub fn facets(catalog: &[Book]) -> Facets {
    let mut categories = BTreeSet::new();
    let mut genres = BTreeSet::new();
    let mut years = BTreeSet::new();

    for book in catalog {
        if !book.record.category.is_empty() {
            categories.insert(book.record.category.to_lowercase());
        }
        if !book.record.genre.is_empty() {
            genres.insert(book.record.genre.to_lowercase());
        }
        if !book.record.year.is_empty() {
            years.insert(book.record.year.clone());
        }
    }

    Facets {
        categories: categories.into_iter().collect(),
        genres: genres.into_iter().collect(),
        years: years.into_iter().collect(),
        read_count: catalog.iter().filter(|b| b.is_read).count(),
        favorite_count: catalog.iter().filter(|b| b.is_favorite).count(),
    }
}

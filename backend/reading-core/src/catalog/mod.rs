//! Read-only library of books offered to readers.
//!
//! The catalog is built once at start-up and shared by every request
//! through [`SharedCatalog`]; nothing mutates it afterwards.

mod samples;

pub use samples::sample_books;

use crate::error::ConfigError;

use common::ErrorLocation;
use models::Book;

use std::collections::HashSet;
use std::panic::Location;
use std::path::Path;
use std::sync::Arc;

use log::info;

/// Lookup of books by id.
pub trait BookRepository: Send + Sync {
    /// All books, in catalog order.
    fn list(&self) -> Vec<Book>;

    fn find(&self, id: u32) -> Option<Book>;
}

pub type SharedCatalog = Arc<dyn BookRepository>;

/// Books held in memory, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    books: Vec<Book>,
}

impl InMemoryCatalog {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// Catalog of the built-in sample books.
    pub fn with_samples() -> Self {
        Self::new(sample_books())
    }

    /// Load a JSON array of books.
    ///
    /// Every entry is re-validated and ids must be unique.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file can't be read or parsed, or any
    /// book is invalid.
    pub fn load_json(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            location: ErrorLocation::from(Location::caller()),
            path: path.to_path_buf(),
            source: e,
        })?;

        let raw: Vec<Book> =
            serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let mut seen = HashSet::with_capacity(raw.len());
        let mut books = Vec::with_capacity(raw.len());

        for book in raw {
            if !seen.insert(book.id) {
                return Err(ConfigError::ValidationError {
                    location: ErrorLocation::from(Location::caller()),
                    reason: format!("Duplicate book id {} in {}", book.id, path.display()),
                });
            }

            let validated = Book::builder()
                .with_id(book.id)
                .with_title(book.title)
                .with_author(book.author)
                .with_level(book.level)
                .with_language(book.language)
                .with_content(book.content)
                .build()
                .map_err(|e| ConfigError::ValidationError {
                    location: ErrorLocation::from(Location::caller()),
                    reason: e.to_string(),
                })?;

            books.push(validated);
        }

        info!("Loaded {} books from {}", books.len(), path.display());
        Ok(Self::new(books))
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn into_shared(self) -> SharedCatalog {
        Arc::new(self)
    }
}

impl BookRepository for InMemoryCatalog {
    fn list(&self) -> Vec<Book> {
        self.books.clone()
    }

    fn find(&self, id: u32) -> Option<Book> {
        self.books.iter().find(|book| book.id == id).cloned()
    }
}

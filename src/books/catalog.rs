use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;

/// Shared handle to the catalog. Every read and write of the catalog goes through this lock.
pub type GuardedCatalog = Arc<RwLock<Catalog>>;

/// In-memory catalog of books keyed by isbn.
///
/// `Catalog` itself is not synchronized; share it as a [`GuardedCatalog`].
#[derive(Debug, Default)]
pub struct Catalog {
    books: HashMap<String, BookEntity>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books<I: IntoIterator<Item = BookEntity>>(books: I) -> Self {
        let mut catalog = Self::new();
        for book in books {
            catalog.put(book);
        }
        catalog
    }

    pub fn guarded(self) -> GuardedCatalog {
        Arc::new(RwLock::new(self))
    }

    pub fn get(&self, isbn: &str) -> Option<&BookEntity> {
        self.books.get(isbn)
    }

    pub fn contains(&self, isbn: &str) -> bool {
        self.books.contains_key(isbn)
    }

    /// Inserts or replaces the book under its own isbn, returning the one it displaced.
    pub fn put(&mut self, book: BookEntity) -> Option<BookEntity> {
        self.books.insert(book.id(), book)
    }

    pub fn remove(&mut self, isbn: &str) -> Option<BookEntity> {
        self.books.remove(isbn)
    }

    pub fn values(&self) -> impl Iterator<Item = &BookEntity> {
        self.books.values()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

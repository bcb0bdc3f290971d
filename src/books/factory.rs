use crate::books::catalog::{Catalog, GuardedCatalog};
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;

pub fn create_book_repository(catalog: GuardedCatalog) -> Box<dyn BookRepository> {
    Box::new(MemoryBookRepository::new(catalog))
}

pub fn seed_books() -> Vec<BookEntity> {
    vec![
        BookEntity::new("1", "Star Wars", "George Lucas"),
        BookEntity::new("2", "The Empire Strikes Back", "George Lucas"),
        BookEntity::new("3", "Return Of The Jedi", "George Lucas"),
    ]
}

pub fn create_seeded_catalog() -> GuardedCatalog {
    Catalog::with_books(seed_books()).guarded()
}

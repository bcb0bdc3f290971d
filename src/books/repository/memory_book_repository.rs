use async_trait::async_trait;

use crate::books::catalog::GuardedCatalog;
use crate::books::domain::model::BookEntity;
use crate::books::domain::validation::verify;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

#[derive(Debug, Clone)]
pub struct MemoryBookRepository {
    catalog: GuardedCatalog,
}

impl MemoryBookRepository {
    pub fn new(catalog: GuardedCatalog) -> Self {
        Self {
            catalog,
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        // verification and insert share one write lock so two creates cannot both pass
        let mut catalog = self.catalog.write().await;
        verify(entity, &catalog)?;
        catalog.put(entity.clone());
        Ok(1)
    }

    async fn update(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut catalog = self.catalog.write().await;
        if !catalog.contains(entity.isbn.as_str()) {
            return Err(LibraryError::not_found(format!("book not found for {}", entity.isbn).as_str()));
        }
        catalog.put(entity.clone());
        Ok(1)
    }

    async fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        let catalog = self.catalog.read().await;
        catalog.get(id).cloned()
            .ok_or_else(|| LibraryError::not_found(format!("book not found for {}", id).as_str()))
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        let mut catalog = self.catalog.write().await;
        let isbn = match catalog.get(id) {
            Some(book) => book.isbn.to_string(),
            None => {
                return Err(LibraryError::not_found(format!("book not found for {}", id).as_str()));
            }
        };
        Ok(catalog.remove(isbn.as_str()).map(|_| 1).unwrap_or(0))
    }

    async fn find_all(&self) -> LibraryResult<Vec<BookEntity>> {
        let catalog = self.catalog.read().await;
        Ok(catalog.values().cloned().collect())
    }
}

impl BookRepository for MemoryBookRepository {}

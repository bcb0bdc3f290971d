use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

pub(crate) struct CatalogServiceImpl {
    branch_id: String,
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        let _ = self.book_repository.create(&BookEntity::from(book)).await?;
        tracing::info!(branch = %self.branch_id, isbn = %book.isbn, "added book");
        Ok(book.clone())
    }

    async fn remove_book(&self, id: &str) -> LibraryResult<()> {
        let _ = self.book_repository.delete(id).await?;
        tracing::info!(branch = %self.branch_id, isbn = %id, "removed book");
        Ok(())
    }

    async fn update_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        let _ = self.book_repository.update(&BookEntity::from(book)).await?;
        tracing::info!(branch = %self.branch_id, isbn = %book.isbn, "updated book");
        Ok(book.clone())
    }

    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto> {
        self.book_repository.get(id).await.map(|b| BookDto::from(&b))
    }

    async fn find_books(&self) -> LibraryResult<Vec<BookDto>> {
        let mut books: Vec<BookDto> = self.book_repository.find_all().await?
            .iter().map(BookDto::from).collect();
        books.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(books)
    }
}

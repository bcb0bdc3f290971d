use async_trait::async_trait;
use serde::Deserialize;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryError;

pub struct UpdateBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// the isbn names the book to replace; every other field is taken as given
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct UpdateBookCommandRequest {
    pub book: BookDto,
}

impl UpdateBookCommandRequest {
    pub fn new(isbn: &str, title: &str, author: &str) -> Self {
        Self {
            book: BookDto::new(isbn, title, author),
        }
    }
}


#[derive(Debug)]
pub struct UpdateBookCommandResponse {}

impl UpdateBookCommandResponse {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        self.catalog_service.update_book(&req.book).await
            .map_err(|err| match err {
                // no upsert: an unknown isbn is rejected as a bad request
                LibraryError::NotFound { message } => CommandError::BadRequest { message },
                other => CommandError::from(other),
            })
            .map(|_| UpdateBookCommandResponse::new())
    }
}

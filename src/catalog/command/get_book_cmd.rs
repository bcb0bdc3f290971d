use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct GetBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl GetBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct GetBookCommandRequest {
    pub book_id: String,
}

impl GetBookCommandRequest {
    pub fn new(book_id: String) -> Self {
        Self {
            book_id,
        }
    }
}


#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct GetBookCommandResponse {
    pub book: BookDto,
}

impl GetBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        self.catalog_service.find_book_by_id(req.book_id.as_str())
            .await.map_err(CommandError::from).map(GetBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::books::factory::create_seeded_catalog;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_run_get_book() {
        let catalog = create_seeded_catalog();
        let config = Configuration::new("test");
        let add_cmd = AddBookCommand::new(factory::create_catalog_service(&config, catalog.clone()));
        let get_cmd = GetBookCommand::new(factory::create_catalog_service(&config, catalog));

        let book = BookDto::new("4", "A New Hope", "George Lucas");
        let res = add_cmd.execute(AddBookCommandRequest::new(book.isbn.as_str(), book.title.as_str(), book.author.as_str()))
            .await.expect("should add book");
        let loaded = get_cmd.execute(GetBookCommandRequest::new(res.book.isbn.to_string())).await.expect("should get book");
        assert_eq!(book, loaded.book);
    }

    #[tokio::test]
    async fn test_should_not_find_unknown_book() {
        let get_cmd = GetBookCommand::new(
            factory::create_catalog_service(&Configuration::new("test"), create_seeded_catalog()));
        let res = get_cmd.execute(GetBookCommandRequest::new("404".to_string())).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}

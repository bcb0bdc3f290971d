use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_response, json_to_server_error, ServerError};

pub const WELCOME: &str = "Welcome...";

fn build_service(state: &AppState) -> Box<dyn CatalogService> {
    factory::create_catalog_service(&state.config, state.catalog.clone())
}

pub async fn index() -> &'static str {
    WELCOME
}

pub async fn list_books(
    State(state): State<AppState>) -> Result<Response, ServerError> {
    let res = ListBooksCommand::new(build_service(&state)).execute(ListBooksCommandRequest::default()).await?;
    tracing::debug!("listing {} books", res.books.len());
    json_response(StatusCode::OK, &res)
}

pub async fn find_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Response, ServerError> {
    let req = GetBookCommandRequest { book_id };
    let res = GetBookCommand::new(build_service(&state)).execute(req).await?;
    json_response(StatusCode::OK, &res)
}

pub async fn add_book(
    State(state): State<AppState>,
    body: Bytes) -> Result<Response, ServerError> {
    let req: AddBookCommandRequest = serde_json::from_slice(&body).map_err(json_to_server_error)?;
    let res = AddBookCommand::new(build_service(&state)).execute(req).await?;
    json_response(StatusCode::CREATED, &res)
}

pub async fn update_book(
    State(state): State<AppState>,
    body: Bytes) -> Result<StatusCode, ServerError> {
    let req: UpdateBookCommandRequest = serde_json::from_slice(&body).map_err(json_to_server_error)?;
    let _ = UpdateBookCommand::new(build_service(&state)).execute(req).await?;
    Ok(StatusCode::OK)
}

pub async fn remove_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<StatusCode, ServerError> {
    let req = RemoveBookCommandRequest { book_id };
    let _ = RemoveBookCommand::new(build_service(&state)).execute(req).await?;
    Ok(StatusCode::OK)
}

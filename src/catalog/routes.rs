use axum::{
    routing::{any, get},
    Router,
};
use crate::catalog::controller::{add_book, find_book_by_id, index, list_books, remove_book, update_book};
use crate::core::controller::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", any(index))
        .route("/books",
               get(list_books).post(add_book).put(update_book))
        .route("/books/:id",
               get(find_book_by_id).delete(remove_book))
        .with_state(state)
}

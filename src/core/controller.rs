use axum::http::StatusCode;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use crate::books::catalog::GuardedCatalog;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::library::LibraryError;

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Configuration,
    pub catalog: GuardedCatalog,
}

impl AppState {
    pub fn new(config: Configuration, catalog: GuardedCatalog) -> AppState {
        AppState {
            config,
            catalog,
        }
    }
}

pub type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    tracing::warn!("rejecting malformed json body: {}", err);
    (StatusCode::BAD_REQUEST, String::new())
}

// serializes a body up front so that encoding failures surface as 500 with no body
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Result<Response, ServerError> {
    let out = serde_json::to_vec(body)
        .map_err(|err| ServerError::from(CommandError::from(LibraryError::from(err))))?;
    Ok((status, [(header::CONTENT_TYPE, "application/json")], out).into_response())
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Validation { message } => {
                tracing::info!("validation failed: {}", message);
                (StatusCode::BAD_REQUEST, message)
            }
            CommandError::DuplicateKey { message } => {
                tracing::info!("duplicate key: {}", message);
                (StatusCode::BAD_REQUEST, message)
            }
            CommandError::BadRequest { message } => {
                tracing::info!("bad request: {}", message);
                (StatusCode::BAD_REQUEST, String::new())
            }
            CommandError::NotFound { message } => {
                tracing::info!("not found: {}", message);
                (StatusCode::NOT_FOUND, String::new())
            }
            CommandError::Serialization { message } => {
                tracing::error!("serialization failed: {}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, String::new())
            }
        }
    }
}

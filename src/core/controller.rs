use std::sync::Arc;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::checkout::domain::CheckoutService;
use crate::core::command::CommandError;

pub const BOOK_NOT_FOUND: &str = "Book not found.";
pub const BOOK_NOT_AVAILABLE: &str = "Book not available.";
pub const MISSING_ID_PARAM: &str = "Missing id query parameter.";

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogService>,
    pub checkout: Arc<dyn CheckoutService>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn CatalogService>, checkout: Arc<dyn CheckoutService>) -> AppState {
        AppState {
            catalog,
            checkout,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub message: String,
}

pub type ServerError = (StatusCode, Json<ErrorMessage>);

pub fn server_error(status: StatusCode, message: &str) -> ServerError {
    (status, Json(ErrorMessage { message: message.to_string() }))
}

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    server_error(StatusCode::BAD_REQUEST, format!("{}", err).as_str())
}

pub fn missing_id_error() -> ServerError {
    server_error(StatusCode::BAD_REQUEST, MISSING_ID_PARAM)
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::DuplicateKey { .. } => {
                server_error(StatusCode::CONFLICT, err.message())
            }
            CommandError::NotFound { .. } => {
                server_error(StatusCode::NOT_FOUND, BOOK_NOT_FOUND)
            }
            CommandError::Unavailable { .. } => {
                server_error(StatusCode::BAD_REQUEST, BOOK_NOT_AVAILABLE)
            }
            CommandError::Overflow { .. } => {
                server_error(StatusCode::BAD_REQUEST, err.message())
            }
            CommandError::Runtime { .. } => {
                server_error(StatusCode::INTERNAL_SERVER_ERROR, err.message())
            }
            CommandError::Serialization { .. } => {
                server_error(StatusCode::BAD_REQUEST, err.message())
            }
            CommandError::Validation { .. } => {
                server_error(StatusCode::BAD_REQUEST, err.message())
            }
        }
    }
}

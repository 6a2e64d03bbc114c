use axum::{
    body::HttpBody,
    extract::State,
    response::Json,
    routing::{get, patch},
    BoxError,
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use crate::books::factory::create_book_repository;
use crate::catalog::controller::{add_book, find_book_by_id, list_books};
use crate::catalog::factory::create_catalog_service;
use crate::checkout::controller::{checkout_book, return_book};
use crate::checkout::factory::create_checkout_service;
use crate::core::command::CommandError;
use crate::core::controller::{AppState, ServerError};
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::gateway::factory::create_publisher;
use crate::gateway::GatewayPublisherVia;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub books: usize,
}

/// Wires one shared book store and publisher into both services.
pub async fn build_state(config: &Configuration) -> LibraryResult<AppState> {
    build_state_with(config, GatewayPublisherVia::Logs).await
}

pub async fn build_state_with(config: &Configuration, via: GatewayPublisherVia) -> LibraryResult<AppState> {
    let repo = create_book_repository(config).await?;
    let publisher = create_publisher(via);
    let catalog = create_catalog_service(config, repo.clone(), publisher.clone());
    let checkout = create_checkout_service(config, repo, publisher);
    info!(branch_id = config.branch_id.as_str(), unique_ids = config.unique_ids, "inventory ready");
    Ok(AppState::new(catalog, checkout))
}

/// Generic over the request body so the same routes serve hyper and the Lambda runtime.
pub fn build_app<B>(state: AppState) -> Router<(), B>
    where
        B: HttpBody + Send + 'static,
        B::Data: Send,
        B::Error: Into<BoxError>,
{
    Router::new()
        .route("/books", get(list_books).post(add_book))
        .route("/books/:id", get(find_book_by_id))
        .route("/checkout", patch(checkout_book))
        .route("/return", patch(return_book))
        .route("/health", get(health))
        .with_state(state)
}

pub async fn health(State(state): State<AppState>) -> Result<Json<HealthStatus>, ServerError> {
    let books = state.catalog.count_books().await.map_err(CommandError::from)?;
    Ok(Json(HealthStatus { status: "ok".to_string(), books }))
}

pub async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        return;
    }
    info!("shutting down");
}

use std::sync::Arc;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::Json,
};
use crate::checkout::command::checkout_book_cmd::{CheckoutBookCommand, CheckoutBookCommandRequest, CheckoutBookCommandResponse};
use crate::checkout::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest, ReturnBookCommandResponse};
use crate::checkout::domain::CheckoutService;
use crate::core::command::Command;
use crate::core::controller::{AppState, missing_id_error, server_error, ServerError};

pub type QueryPairs = Result<Query<Vec<(String, String)>>, QueryRejection>;

fn build_service(state: &AppState) -> Arc<dyn CheckoutService> {
    state.checkout.clone()
}

// the first `id` wins when the parameter is repeated
fn book_id(query: QueryPairs) -> Result<String, ServerError> {
    let Query(pairs) = query.map_err(|err| server_error(StatusCode::BAD_REQUEST, err.body_text().as_str()))?;
    pairs.into_iter()
        .find(|(key, _)| key == "id")
        .map(|(_, value)| value)
        .ok_or_else(missing_id_error)
}

pub async fn checkout_book(
    State(state): State<AppState>,
    query: QueryPairs) -> Result<Json<CheckoutBookCommandResponse>, ServerError> {
    let book_id = book_id(query)?;
    let svc = build_service(&state);
    let res = CheckoutBookCommand::new(svc).execute(CheckoutBookCommandRequest::new(book_id)).await?;
    Ok(Json(res))
}

pub async fn return_book(
    State(state): State<AppState>,
    query: QueryPairs) -> Result<Json<ReturnBookCommandResponse>, ServerError> {
    let book_id = book_id(query)?;
    let svc = build_service(&state);
    let res = ReturnBookCommand::new(svc).execute(ReturnBookCommandRequest::new(book_id)).await?;
    Ok(Json(res))
}

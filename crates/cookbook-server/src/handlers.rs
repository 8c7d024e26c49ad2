//! Request handlers: decode the request, call the cookbook, encode the result.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cookbook::{CookbookError, EntryDescriptor, QueryError, RegistryError};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::handwriting::parse_handwriting;
use crate::SharedCookbook;

/// Request body for name parsing
#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    #[serde(default)]
    pub input: String,
}

/// Response for successful name parsing
#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub msg: String,
}

/// Query string for summaries
#[derive(Debug, Deserialize)]
pub struct SummaryParams {
    pub name: String,
}

/// Normalize a hand-written recipe name
///
/// POST /parse
pub async fn parse(Json(request): Json<ParseRequest>) -> Response {
    match parse_handwriting(&request.input) {
        Some(msg) => (StatusCode::OK, Json(ParseResponse { msg })).into_response(),
        None => (StatusCode::BAD_REQUEST, "Invalid recipe name").into_response(),
    }
}

/// Register an ingredient or recipe
///
/// POST /entry
pub async fn create_entry(
    State(cookbook): State<SharedCookbook>,
    Json(descriptor): Json<EntryDescriptor>,
) -> Response {
    match cookbook.create_entry(&descriptor).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(CookbookError::Registry(e)) => {
            (StatusCode::BAD_REQUEST, rejection_message(&e)).into_response()
        }
        Err(e) => internal_error(e),
    }
}

/// Summarize a recipe
///
/// GET /summary?name=
pub async fn summary(
    State(cookbook): State<SharedCookbook>,
    Query(params): Query<SummaryParams>,
) -> Response {
    match cookbook.summary(&params.name).await {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(CookbookError::Query(QueryError::InvalidQueryTarget(_))) => {
            (StatusCode::BAD_REQUEST, "Ingredient").into_response()
        }
        Err(e) if e.is_rejection() => StatusCode::BAD_REQUEST.into_response(),
        Err(e) => internal_error(e),
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}

fn rejection_message(e: &RegistryError) -> &'static str {
    match e {
        RegistryError::DuplicateName(_) | RegistryError::DuplicateRequiredItem { .. } => {
            "Duplicate name"
        }
        RegistryError::InvalidType(_) => "Invalid type",
        RegistryError::NegativeCookTime { .. } => "Negative cook time",
        RegistryError::InvalidQuantity { .. } => "Invalid quantity",
        RegistryError::InvalidName => "Invalid name",
        RegistryError::MissingField { .. } => "Missing field",
    }
}

fn internal_error(e: CookbookError) -> Response {
    error!(error = %e, "request failed");
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}

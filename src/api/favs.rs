//! Favorites API handlers using repository pattern

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::{Value, json};
use utoipa::ToSchema;

use crate::domain::{DomainError, FavoriteChanges, FavoriteInput};
use crate::infrastructure::AppState;
use crate::models::Favorite;

/// Request DTO for creating or updating a favorite
///
/// Fields are loosely typed: strings are kept as-is, numbers and booleans are
/// stored as their text, anything else counts as missing. On create, `0` and
/// `false` count as missing too.
#[derive(Debug, Deserialize, ToSchema)]
pub struct FavoriteRequest {
    #[serde(rename = "type")]
    #[schema(value_type = Option<String>, example = "Movies")]
    pub kind: Option<Value>,
    #[schema(value_type = Option<String>, example = "Dune")]
    pub title: Option<Value>,
    #[schema(value_type = Option<String>, example = "2021")]
    pub year: Option<Value>,
}

impl FavoriteRequest {
    pub fn into_input(self) -> Result<FavoriteInput, DomainError> {
        FavoriteInput::new(
            required_text(self.kind),
            required_text(self.title),
            required_text(self.year),
        )
    }

    pub fn into_changes(self) -> FavoriteChanges {
        FavoriteChanges::new(
            field_text(self.kind),
            field_text(self.title),
            field_text(self.year),
        )
    }
}

fn field_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn required_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Bool(false) => None,
        other => field_text(Some(other)),
    }
}

/// Map a domain error onto an HTTP status with a `{"error": ...}` body
pub fn error_response(err: DomainError) -> Response {
    let status = match &err {
        DomainError::NotFound => StatusCode::NOT_FOUND,
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Database(_) | DomainError::Internal(_) => {
            tracing::error!("Favorites request failed: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (status, Json(json!({ "error": err.to_string() }))).into_response()
}

fn parse_input(
    payload: Result<Json<FavoriteRequest>, JsonRejection>,
) -> Result<FavoriteInput, DomainError> {
    match payload {
        Ok(Json(request)) => request.into_input(),
        Err(rejection) => {
            tracing::debug!("Rejected favorite body: {}", rejection.body_text());
            Err(DomainError::Validation(
                crate::domain::MISSING_FIELDS.to_string(),
            ))
        }
    }
}

/// A PUT without a JSON body changes nothing; a body that is not valid JSON is rejected.
fn parse_changes(
    payload: Result<Json<FavoriteRequest>, JsonRejection>,
) -> Result<FavoriteChanges, DomainError> {
    match payload {
        Ok(Json(request)) => Ok(request.into_changes()),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(FavoriteChanges::default()),
        Err(rejection) => {
            tracing::debug!("Rejected favorite changes: {}", rejection.body_text());
            Err(DomainError::Validation(rejection.body_text()))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/favs",
    responses(
        (status = 200, description = "All favorites in store order", body = [Favorite])
    )
)]
pub async fn list_favs(State(state): State<AppState>) -> Response {
    match state.favorite_repo.find_all().await {
        Ok(favorites) => Json(favorites).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    post,
    path = "/api/favs",
    request_body = FavoriteRequest,
    responses(
        (status = 201, description = "Favorite created", body = Favorite),
        (status = 400, description = "A required field is missing")
    )
)]
pub async fn create_fav(
    State(state): State<AppState>,
    payload: Result<Json<FavoriteRequest>, JsonRejection>,
) -> Response {
    let input = match parse_input(payload) {
        Ok(input) => input,
        Err(e) => return error_response(e),
    };

    match state.favorite_repo.create(input).await {
        Ok(favorite) => (StatusCode::CREATED, Json(favorite)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    put,
    path = "/api/favs/{id}",
    params(("id" = String, Path, description = "Favorite identifier")),
    request_body = FavoriteRequest,
    responses(
        (status = 200, description = "Favorite updated; absent fields keep their value", body = Favorite),
        (status = 400, description = "Body is not valid JSON"),
        (status = 404, description = "Favorite not found")
    )
)]
pub async fn update_fav(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<FavoriteRequest>, JsonRejection>,
) -> Response {
    match state.favorite_repo.find_by_id(&id).await {
        Ok(Some(_)) => {}
        Ok(None) => return error_response(DomainError::NotFound),
        Err(e) => return error_response(e),
    }

    let changes = match parse_changes(payload) {
        Ok(changes) => changes,
        Err(e) => return error_response(e),
    };

    match state.favorite_repo.update(&id, changes).await {
        Ok(favorite) => Json(favorite).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/favs/{id}",
    params(("id" = String, Path, description = "Favorite identifier")),
    responses(
        (status = 204, description = "Favorite deleted, or it never existed")
    )
)]
pub async fn delete_fav(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.favorite_repo.delete(&id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}

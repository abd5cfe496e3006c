use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use async_trait::async_trait;
use favvault::api;
use favvault::db;
use favvault::domain::{DomainError, FavoriteChanges, FavoriteInput, FavoriteRepository};
use favvault::infrastructure::AppState;
use favvault::models::Favorite;
use favvault::models::favorite::Entity as FavoriteEntity;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`

async fn setup_test_db() -> DatabaseConnection {
    db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB")
}

fn app(db: &DatabaseConnection) -> Router {
    api::api_router(AppState::new(db.clone()))
}

fn json_request(method: &str, uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method(method)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(payload).unwrap()))
        .unwrap()
}

async fn error_message(response: axum::response::Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    json["error"].as_str().unwrap().to_string()
}

async fn stored(db: &DatabaseConnection) -> u64 {
    FavoriteEntity::find().count(db).await.unwrap()
}

#[tokio::test]
async fn test_create_missing_title_is_rejected() {
    let db = setup_test_db().await;

    let payload = json!({"type": "Movies", "year": "2021"});
    let response = app(&db)
        .oneshot(json_request("POST", "/favs", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_message(response).await, "Please fill all fields");
    assert_eq!(stored(&db).await, 0);
}

#[tokio::test]
async fn test_create_blank_fields_are_rejected() {
    let db = setup_test_db().await;

    for payload in [
        json!({"type": "", "title": "Dune", "year": "2021"}),
        json!({"type": "Movies", "title": "Dune", "year": ""}),
        json!({"type": "Movies", "title": null, "year": "2021"}),
        json!({}),
    ] {
        let response = app(&db)
            .oneshot(json_request("POST", "/favs", &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", payload);
    }

    assert_eq!(stored(&db).await, 0);
}

#[tokio::test]
async fn test_create_malformed_body_is_rejected() {
    let db = setup_test_db().await;

    let req = Request::builder()
        .uri("/favs")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app(&db).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let req = Request::builder()
        .uri("/favs")
        .method("POST")
        .body(Body::empty())
        .unwrap();
    let response = app(&db).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert_eq!(stored(&db).await, 0);
}

#[tokio::test]
async fn test_update_not_found() {
    let db = setup_test_db().await;

    let payload = json!({"type": "Movies", "title": "Dune", "year": "2021"});
    for id in [uuid::Uuid::new_v4().to_string(), "not-a-real-id".to_string()] {
        let response = app(&db)
            .oneshot(json_request("PUT", &format!("/favs/{}", id), &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(error_message(response).await, "Favorite not found");
    }

    assert_eq!(stored(&db).await, 0);
}

async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_create_zero_year_is_rejected() {
    let db = setup_test_db().await;

    let payload = json!({"type": "Movies", "title": "Dune", "year": 0});
    let response = app(&db)
        .oneshot(json_request("POST", "/favs", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(stored(&db).await, 0);
}

#[tokio::test]
async fn test_update_with_partial_body_merges_fields() {
    let db = setup_test_db().await;

    let payload = json!({"type": "Movies", "title": "Dune", "year": "2021"});
    let response = app(&db)
        .oneshot(json_request("POST", "/favs", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_str().unwrap();

    let response = app(&db)
        .oneshot(json_request(
            "PUT",
            &format!("/favs/{}", id),
            &json!({"title": "Dune Part Two"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["id"], id);
    assert_eq!(updated["type"], "Movies");
    assert_eq!(updated["title"], "Dune Part Two");
    assert_eq!(updated["year"], "2021");

    let model = FavoriteEntity::find_by_id(id.to_string())
        .one(&db)
        .await
        .unwrap()
        .expect("record should still exist");
    assert_eq!(model.kind, "Movies");
    assert_eq!(model.title, "Dune Part Two");
    assert_eq!(model.year, "2021");
}

#[tokio::test]
async fn test_update_without_body_leaves_record_unchanged() {
    let db = setup_test_db().await;

    let payload = json!({"type": "Books", "title": "Dune", "year": "1965"});
    let response = app(&db)
        .oneshot(json_request("POST", "/favs", &payload))
        .await
        .unwrap();
    let created = body_json(response).await;
    let id = created["id"].as_str().unwrap();

    let req = Request::builder()
        .uri(format!("/favs/{}", id))
        .method("PUT")
        .body(Body::empty())
        .unwrap();
    let response = app(&db).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let unchanged = body_json(response).await;
    assert_eq!(unchanged["type"], "Books");
    assert_eq!(unchanged["title"], "Dune");
    assert_eq!(unchanged["year"], "1965");
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let db = setup_test_db().await;

    // Deleting something that never existed is still 204
    for id in [uuid::Uuid::new_v4().to_string(), "999".to_string()] {
        let req = Request::builder()
            .uri(format!("/favs/{}", id))
            .method("DELETE")
            .body(Body::empty())
            .unwrap();
        let response = app(&db).oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}

/// Repository whose store is always unreachable
struct UnreachableStore;

#[async_trait]
impl FavoriteRepository for UnreachableStore {
    async fn find_all(&self) -> Result<Vec<Favorite>, DomainError> {
        Err(DomainError::Database("connection refused".to_string()))
    }

    async fn find_by_id(&self, _id: &str) -> Result<Option<Favorite>, DomainError> {
        Err(DomainError::Database("connection refused".to_string()))
    }

    async fn create(&self, _input: FavoriteInput) -> Result<Favorite, DomainError> {
        Err(DomainError::Database("connection refused".to_string()))
    }

    async fn update(&self, _id: &str, _changes: FavoriteChanges) -> Result<Favorite, DomainError> {
        Err(DomainError::Database("connection refused".to_string()))
    }

    async fn delete(&self, _id: &str) -> Result<(), DomainError> {
        Err(DomainError::Database("connection refused".to_string()))
    }
}

#[tokio::test]
async fn test_store_failures_are_500() {
    let db = setup_test_db().await;
    let mut state = AppState::new(db);
    state.favorite_repo = Arc::new(UnreachableStore);
    let app = api::api_router(state);

    let valid = json!({"type": "Movies", "title": "Dune", "year": "2021"});
    let requests = vec![
        Request::builder()
            .uri("/favs")
            .method("GET")
            .body(Body::empty())
            .unwrap(),
        json_request("POST", "/favs", &valid),
        json_request("PUT", "/favs/abc", &valid),
        Request::builder()
            .uri("/favs/abc")
            .method("DELETE")
            .body(Body::empty())
            .unwrap(),
    ];

    for req in requests {
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(error_message(response).await.contains("connection refused"));
    }
}

pub mod favs;
pub mod health;

use axum::{Router, routing::get};

use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Favorites
        .route("/favs", get(favs::list_favs).post(favs::create_fav))
        .route("/favs/:id", axum::routing::put(favs::update_fav).delete(favs::delete_fav))
        .with_state(state)
}

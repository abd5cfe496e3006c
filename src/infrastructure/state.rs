//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::FavoriteRepository;
use crate::infrastructure::SeaOrmFavoriteRepository;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    /// Favorite repository
    pub favorite_repo: Arc<dyn FavoriteRepository>,
}

impl AppState {
    /// Create a new AppState with all repositories initialized
    pub fn new(db: DatabaseConnection) -> Self {
        let favorite_repo = Arc::new(SeaOrmFavoriteRepository::new(db.clone()));

        Self { db, favorite_repo }
    }
}

// Handlers that only need the raw connection can extract it directly
impl axum::extract::FromRef<AppState> for DatabaseConnection {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

//! SeaORM implementation of FavoriteRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::domain::{DomainError, FavoriteChanges, FavoriteInput, FavoriteRepository};
use crate::models::Favorite;
use crate::models::favorite::{ActiveModel, Entity as FavoriteEntity};

/// SeaORM-based implementation of FavoriteRepository
pub struct SeaOrmFavoriteRepository {
    db: DatabaseConnection,
}

impl SeaOrmFavoriteRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FavoriteRepository for SeaOrmFavoriteRepository {
    async fn find_all(&self) -> Result<Vec<Favorite>, DomainError> {
        // No ORDER BY: callers get the store's natural order
        let favorites = FavoriteEntity::find().all(&self.db).await?;
        Ok(favorites.into_iter().map(Favorite::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Favorite>, DomainError> {
        let favorite = FavoriteEntity::find_by_id(id.to_string())
            .one(&self.db)
            .await?;
        Ok(favorite.map(Favorite::from))
    }

    async fn create(&self, input: FavoriteInput) -> Result<Favorite, DomainError> {
        let now = chrono::Utc::now();

        let new_favorite = ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            kind: Set(input.kind),
            title: Set(input.title),
            year: Set(input.year),
            created_at: Set(now.to_rfc3339()),
            updated_at: Set(now.to_rfc3339()),
        };

        let result = new_favorite.insert(&self.db).await?;
        tracing::debug!(id = %result.id, "Favorite created");
        Ok(Favorite::from(result))
    }

    async fn update(&self, id: &str, changes: FavoriteChanges) -> Result<Favorite, DomainError> {
        let existing = FavoriteEntity::find_by_id(id.to_string())
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)?;

        let mut active: ActiveModel = existing.into();
        if let Some(kind) = changes.kind {
            active.kind = Set(kind);
        }
        if let Some(title) = changes.title {
            active.title = Set(title);
        }
        if let Some(year) = changes.year {
            active.year = Set(year);
        }
        active.updated_at = Set(chrono::Utc::now().to_rfc3339());

        let result = active.update(&self.db).await?;
        Ok(Favorite::from(result))
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let result = FavoriteEntity::delete_by_id(id.to_string())
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            tracing::debug!(id, "Delete requested for unknown favorite");
        }

        Ok(())
    }
}

//! The in-memory list the UI renders, kept in step with the service.
//!
//! Mutations are optimistic: local state changes first, the service call
//! follows, and a failed call is logged rather than reported back.

use chrono::Utc;

use super::form::{FavoriteForm, FormError};
use super::item::MediaItem;
use super::query::CatalogQuery;
use super::stats::CatalogStats;
use crate::client::{ClientError, FavoritesApi};

pub struct Collection<A> {
    api: A,
    items: Vec<MediaItem>,
    draft: FavoriteForm,
    editing: Option<String>,
}

impl<A: FavoritesApi> Collection<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            items: Vec::new(),
            draft: FavoriteForm::default(),
            editing: None,
        }
    }

    /// Replace local state with whatever the service holds.
    pub async fn load(&mut self) -> Result<usize, ClientError> {
        let favorites = self.api.get_all().await?;
        self.items = favorites.into_iter().map(MediaItem::from).collect();
        tracing::debug!(count = self.items.len(), "Collection loaded");
        Ok(self.items.len())
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&MediaItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn visible(&self, query: &CatalogQuery) -> Vec<&MediaItem> {
        query.apply(&self.items)
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats::from_items(&self.items)
    }

    pub fn draft(&self) -> &FavoriteForm {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut FavoriteForm {
        &mut self.draft
    }

    /// ID of the item currently being edited, if any
    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    /// Load an item into the draft for editing. Returns false for unknown IDs.
    pub fn start_edit(&mut self, id: &str) -> bool {
        match self.items.iter().find(|item| item.id == id) {
            Some(item) => {
                self.draft = FavoriteForm::from_item(item);
                self.editing = Some(item.id.clone());
                true
            }
            None => false,
        }
    }

    /// Drop the draft and leave edit mode.
    pub fn cancel(&mut self) {
        self.draft = FavoriteForm::default();
        self.editing = None;
    }

    /// Add or update depending on whether an edit is in progress.
    pub async fn submit(&mut self) -> Result<MediaItem, FormError> {
        if self.editing.is_some() {
            self.update().await
        } else {
            self.add().await
        }
    }

    /// Prepend the draft as a new item, then persist it.
    ///
    /// The item starts with a local ID; once the service accepts it the
    /// store-assigned ID replaces it.
    pub async fn add(&mut self) -> Result<MediaItem, FormError> {
        let local_id = uuid::Uuid::new_v4().to_string();
        let mut item = self.draft.to_new_item(local_id.clone(), Utc::now())?;

        self.items.insert(0, item.clone());
        self.draft = FavoriteForm::default();

        match self.api.create(&item).await {
            Ok(saved) => {
                if let Some(local) = self.items.iter_mut().find(|i| i.id == local_id) {
                    local.id = saved.id.clone();
                }
                item.id = saved.id;
            }
            Err(e) => tracing::warn!("Failed to save favorite '{}': {}", item.title, e),
        }

        Ok(item)
    }

    /// Apply the draft to the item being edited, then persist it.
    pub async fn update(&mut self) -> Result<MediaItem, FormError> {
        let id = self.editing.clone().ok_or(FormError::NotEditing)?;
        let position = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(FormError::NotEditing)?;

        let updated = self.draft.apply_to(&self.items[position])?;
        self.items[position] = updated.clone();
        self.cancel();

        if let Err(e) = self.api.update(&id, &updated).await {
            tracing::warn!("Failed to update favorite {}: {}", id, e);
        }

        Ok(updated)
    }

    /// Remove locally and ask the service to delete it.
    pub async fn remove(&mut self, id: &str) {
        if let Err(e) = self.api.remove(id).await {
            tracing::warn!("Failed to delete favorite {}: {}", id, e);
        }
        self.items.retain(|item| item.id != id);
        if self.editing.as_deref() == Some(id) {
            self.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, CategoryFilter, Status};
    use crate::models::Favorite;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records calls; optionally fails every write.
    #[derive(Default)]
    struct FakeApi {
        stored: Mutex<Vec<Favorite>>,
        calls: Mutex<Vec<String>>,
        fail_writes: bool,
    }

    impl FakeApi {
        fn failing() -> Self {
            Self {
                fail_writes: true,
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn write(&self, call: String) -> Result<(), ClientError> {
            self.calls.lock().unwrap().push(call);
            if self.fail_writes {
                return Err(ClientError::Status {
                    status: 400,
                    message: "Please fill all fields".to_string(),
                });
            }
            Ok(())
        }
    }

    #[async_trait]
    impl FavoritesApi for FakeApi {
        async fn get_all(&self) -> Result<Vec<Favorite>, ClientError> {
            Ok(self.stored.lock().unwrap().clone())
        }

        async fn create(&self, item: &MediaItem) -> Result<Favorite, ClientError> {
            self.write(format!("create {}", item.title))?;
            let fav = Favorite {
                id: format!("srv-{}", self.stored.lock().unwrap().len() + 1),
                kind: item.category.label().to_string(),
                title: item.title.clone(),
                year: item.year.clone(),
                created_at: item.created_at.to_rfc3339(),
            };
            self.stored.lock().unwrap().push(fav.clone());
            Ok(fav)
        }

        async fn update(&self, id: &str, item: &MediaItem) -> Result<Favorite, ClientError> {
            self.write(format!("update {} {}", id, item.title))?;
            Err(ClientError::Decode("not modelled".to_string()))
        }

        async fn remove(&self, id: &str) -> Result<(), ClientError> {
            self.write(format!("remove {}", id))
        }
    }

    fn fill(collection: &mut Collection<FakeApi>, title: &str, creator: &str) {
        let draft = collection.draft_mut();
        draft.title = title.to_string();
        draft.creator = creator.to_string();
        draft.year = "2021".to_string();
    }

    #[tokio::test]
    async fn add_prepends_and_adopts_the_server_id() {
        let mut collection = Collection::new(FakeApi::default());
        fill(&mut collection, "Dune", "Denis Villeneuve");
        collection.submit().await.unwrap();
        fill(&mut collection, "Arrival", "Denis Villeneuve");
        let added = collection.submit().await.unwrap();

        assert_eq!(added.id, "srv-2");
        let titles: Vec<_> = collection.items().iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Arrival", "Dune"]);
        assert_eq!(collection.items()[1].id, "srv-1");
        assert_eq!(collection.draft(), &FavoriteForm::default());
    }

    #[tokio::test]
    async fn failed_save_still_keeps_the_item_locally() {
        let mut collection = Collection::new(FakeApi::failing());
        fill(&mut collection, "Dune", "Frank Herbert");

        let added = collection.add().await.unwrap();
        assert_eq!(collection.items().len(), 1);
        assert_eq!(collection.items()[0].id, added.id);
        assert_eq!(collection.api.calls(), vec!["create Dune"]);
    }

    #[tokio::test]
    async fn invalid_draft_changes_nothing() {
        let mut collection = Collection::new(FakeApi::default());
        collection.draft_mut().title = "No creator".to_string();

        assert_eq!(collection.add().await, Err(FormError::MissingCreator));
        assert!(collection.items().is_empty());
        assert!(collection.api.calls().is_empty());
        assert_eq!(collection.draft().title, "No creator");
    }

    #[tokio::test]
    async fn edit_replaces_in_place_even_when_the_service_fails() {
        let mut collection = Collection::new(FakeApi::default());
        fill(&mut collection, "Dune", "Frank Herbert");
        let dune = collection.add().await.unwrap();
        fill(&mut collection, "Akira", "Katsuhiro Otomo");
        collection.add().await.unwrap();

        assert!(collection.start_edit(&dune.id));
        assert_eq!(collection.editing(), Some(dune.id.as_str()));
        collection.draft_mut().set_category(Category::Books);
        collection.draft_mut().tags = "classic, desert".to_string();

        let updated = collection.submit().await.unwrap();
        assert_eq!(updated.id, dune.id);
        assert_eq!(updated.created_at, dune.created_at);
        assert_eq!(updated.status, Status::WantToRead);
        assert_eq!(collection.items()[1], updated);
        assert_eq!(collection.editing(), None);

        let calls = collection.api.calls();
        assert_eq!(calls.last().unwrap(), &format!("update {} Dune", dune.id));
    }

    #[tokio::test]
    async fn update_without_edit_is_rejected() {
        let mut collection = Collection::new(FakeApi::default());
        fill(&mut collection, "Dune", "Frank Herbert");
        assert_eq!(collection.update().await, Err(FormError::NotEditing));
        assert!(!collection.start_edit("missing"));
    }

    #[tokio::test]
    async fn remove_drops_locally_even_when_the_service_fails() {
        let mut collection = Collection::new(FakeApi::failing());
        fill(&mut collection, "Dune", "Frank Herbert");
        let dune = collection.add().await.unwrap();
        collection.start_edit(&dune.id);

        collection.remove(&dune.id).await;
        assert!(collection.items().is_empty());
        assert_eq!(collection.editing(), None);
        assert_eq!(
            collection.api.calls().last().unwrap(),
            &format!("remove {}", dune.id)
        );
    }

    #[tokio::test]
    async fn load_replaces_local_items_and_feeds_queries() {
        let api = FakeApi::default();
        api.stored.lock().unwrap().push(Favorite {
            id: "a".to_string(),
            kind: "Anime".to_string(),
            title: "Cowboy Bebop".to_string(),
            year: "1998".to_string(),
            created_at: "2026-02-01T00:00:00+00:00".to_string(),
        });
        let mut collection = Collection::new(api);
        fill(&mut collection, "Local only", "Nobody");
        collection.add().await.unwrap();

        assert_eq!(collection.load().await.unwrap(), 2);
        assert_eq!(collection.items()[0].id, "a");

        let anime = CatalogQuery {
            category: CategoryFilter::Only(Category::Anime),
            ..CatalogQuery::default()
        };
        assert_eq!(collection.visible(&anime).len(), 1);
        assert_eq!(collection.stats().total, 2);
    }
}

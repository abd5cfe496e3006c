//! Add/edit form draft.

use chrono::{DateTime, Utc};
use std::fmt;

use super::category::{Category, Status};
use super::item::{MediaItem, Rating};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    MissingTitle,
    MissingCreator,
    /// Update requested while no item is being edited
    NotEditing,
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::MissingTitle => write!(f, "Title is required"),
            FormError::MissingCreator => write!(f, "Creator is required"),
            FormError::NotEditing => write!(f, "No item is being edited"),
        }
    }
}

impl std::error::Error for FormError {}

#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteForm {
    pub title: String,
    pub creator: String,
    pub year: String,
    pub description: String,
    category: Category,
    /// Comma-separated, as typed
    pub tags: String,
    pub rating: Rating,
    status: Status,
    pub cover_url: String,
    pub notes: String,
}

impl Default for FavoriteForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            creator: String::new(),
            year: String::new(),
            description: String::new(),
            category: Category::Movies,
            tags: String::new(),
            rating: Rating::default(),
            status: Category::Movies.default_status(),
            cover_url: String::new(),
            notes: String::new(),
        }
    }
}

impl FavoriteForm {
    /// Pre-fill a draft from an existing item.
    pub fn from_item(item: &MediaItem) -> Self {
        Self {
            title: item.title.clone(),
            creator: item.creator.clone(),
            year: item.year.clone(),
            description: item.description.clone(),
            category: item.category,
            tags: item.tags.join(", "),
            rating: item.rating,
            status: item.status,
            cover_url: item.cover_url.clone(),
            notes: item.notes.clone(),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Switching category resets the status to the new category's default.
    pub fn set_category(&mut self, category: Category) {
        self.category = category;
        self.status = category.default_status();
    }

    /// Returns false (and leaves the draft untouched) if the status
    /// is not offered for the current category.
    pub fn set_status(&mut self, status: Status) -> bool {
        if !self.category.allows(status) {
            return false;
        }
        self.status = status;
        true
    }

    pub fn parse_tags(&self) -> Vec<String> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.title.trim().is_empty() {
            return Err(FormError::MissingTitle);
        }
        if self.creator.trim().is_empty() {
            return Err(FormError::MissingCreator);
        }
        Ok(())
    }

    /// Build a brand-new item from the draft.
    pub fn to_new_item(
        &self,
        id: String,
        created_at: DateTime<Utc>,
    ) -> Result<MediaItem, FormError> {
        self.validate()?;
        Ok(MediaItem {
            id,
            title: self.title.clone(),
            creator: self.creator.clone(),
            year: self.year.clone(),
            description: self.description.clone(),
            category: self.category,
            tags: self.parse_tags(),
            rating: self.rating,
            status: self.status,
            cover_url: self.cover_url.clone(),
            notes: self.notes.clone(),
            created_at,
        })
    }

    /// Apply the draft over an existing item, keeping its id and creation time.
    pub fn apply_to(&self, item: &MediaItem) -> Result<MediaItem, FormError> {
        self.to_new_item(item.id.clone(), item.created_at)
    }
}

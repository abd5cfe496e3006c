//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;

use super::DomainError;
use crate::models::favorite::Favorite;

/// Message returned when a required favorite field is missing or blank
pub const MISSING_FIELDS: &str = "Please fill all fields";

/// Validated input for creating a favorite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteInput {
    pub kind: String,
    pub title: String,
    pub year: String,
}

impl FavoriteInput {
    /// Build an input from optional raw fields.
    ///
    /// All three fields are required and must be non-empty.
    pub fn new(
        kind: Option<String>,
        title: Option<String>,
        year: Option<String>,
    ) -> Result<Self, DomainError> {
        match (non_empty(kind), non_empty(title), non_empty(year)) {
            (Some(kind), Some(title), Some(year)) => Ok(Self { kind, title, year }),
            _ => Err(DomainError::Validation(MISSING_FIELDS.to_string())),
        }
    }
}

/// Field changes for an existing favorite. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteChanges {
    pub kind: Option<String>,
    pub title: Option<String>,
    pub year: Option<String>,
}

impl FavoriteChanges {
    /// Absent and empty fields are dropped, so they keep their stored value.
    pub fn new(kind: Option<String>, title: Option<String>, year: Option<String>) -> Self {
        Self {
            kind: non_empty(kind),
            title: non_empty(title),
            year: non_empty(year),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.kind.is_none() && self.title.is_none() && self.year.is_none()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Repository trait for Favorite entity
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Find all favorites, in whatever order the store yields them
    async fn find_all(&self) -> Result<Vec<Favorite>, DomainError>;

    /// Find a single favorite by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<Favorite>, DomainError>;

    /// Create a new favorite with a store-assigned ID
    async fn create(&self, input: FavoriteInput) -> Result<Favorite, DomainError>;

    /// Apply the present type/title/year changes to an existing favorite
    async fn update(&self, id: &str, changes: FavoriteChanges) -> Result<Favorite, DomainError>;

    /// Delete a favorite. Deleting a missing ID is not an error.
    async fn delete(&self, id: &str) -> Result<(), DomainError>;
}

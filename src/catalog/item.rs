use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::{Category, Status};
use crate::models::Favorite;

/// A 1-10 score. Out-of-range input is clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(value: i64) -> Self {
        Rating(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Rating(5)
    }
}

impl From<i64> for Rating {
    fn from(value: i64) -> Self {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

/// Client-side record with the full set of catalog fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub id: String,
    pub title: String,
    pub creator: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub rating: Rating,
    pub status: Status,
    #[serde(default)]
    pub cover_url: String,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

impl From<Favorite> for MediaItem {
    /// The service only keeps type/title/year, so everything else starts from defaults.
    fn from(fav: Favorite) -> Self {
        let category: Category = fav.kind.parse().unwrap_or_default();
        let created_at = DateTime::parse_from_rfc3339(&fav.created_at)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now());

        Self {
            id: fav.id,
            title: fav.title,
            creator: String::new(),
            year: fav.year,
            description: String::new(),
            category,
            tags: Vec::new(),
            rating: Rating::default(),
            status: category.default_status(),
            cover_url: String::new(),
            notes: String::new(),
            created_at,
        }
    }
}

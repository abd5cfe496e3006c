//! Category filter, free-text search and ordering over the local list.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::category::{Category, UnknownLabel};
use super::item::MediaItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
    /// Highest rated first
    Rating,
    /// A-Z
    Title,
}

impl SortOrder {
    pub fn key(self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
            SortOrder::Rating => "rating",
            SortOrder::Title => "title",
        }
    }

    fn compare(self, a: &MediaItem, b: &MediaItem) -> Ordering {
        match self {
            SortOrder::Newest => b.created_at.cmp(&a.created_at),
            SortOrder::Oldest => a.created_at.cmp(&b.created_at),
            SortOrder::Rating => b.rating.cmp(&a.rating),
            SortOrder::Title => a
                .title
                .to_lowercase()
                .cmp(&b.title.to_lowercase())
                .then_with(|| a.title.cmp(&b.title)),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SortOrder {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newest" => Ok(SortOrder::Newest),
            "oldest" => Ok(SortOrder::Oldest),
            "rating" => Ok(SortOrder::Rating),
            "title" => Ok(SortOrder::Title),
            _ => Err(UnknownLabel(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    pub category: CategoryFilter,
    pub search: String,
    pub sort: SortOrder,
}

impl CatalogQuery {
    pub fn matches(&self, item: &MediaItem) -> bool {
        if !self.category.matches(item.category) {
            return false;
        }

        let needle = self.search.to_lowercase();
        if needle.is_empty() {
            return true;
        }

        item.title.to_lowercase().contains(&needle)
            || item.creator.to_lowercase().contains(&needle)
            || item.description.to_lowercase().contains(&needle)
            || item
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
    }

    /// Filtered and sorted view. Ties keep their list order.
    pub fn apply<'a>(&self, items: &'a [MediaItem]) -> Vec<&'a MediaItem> {
        let mut visible: Vec<&MediaItem> = items.iter().filter(|item| self.matches(item)).collect();
        visible.sort_by(|a, b| self.sort.compare(a, b));
        visible
    }
}

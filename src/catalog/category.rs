//! Media categories and the progress statuses each one allows.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Movies,
    #[serde(rename = "TV Shows")]
    TvShows,
    Anime,
    Books,
    Comics,
    Manga,
}

const WATCH_STATUSES: [Status; 5] = [
    Status::WantToWatch,
    Status::Watching,
    Status::Completed,
    Status::Dropped,
    Status::OnHold,
];

const READ_STATUSES: [Status; 5] = [
    Status::WantToRead,
    Status::Reading,
    Status::Completed,
    Status::Dropped,
    Status::OnHold,
];

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Movies,
        Category::TvShows,
        Category::Anime,
        Category::Books,
        Category::Comics,
        Category::Manga,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Movies => "Movies",
            Category::TvShows => "TV Shows",
            Category::Anime => "Anime",
            Category::Books => "Books",
            Category::Comics => "Comics",
            Category::Manga => "Manga",
        }
    }

    /// Statuses offered for this category; the first one is the default.
    pub fn statuses(self) -> &'static [Status] {
        match self {
            Category::Movies | Category::TvShows | Category::Anime => &WATCH_STATUSES,
            Category::Books | Category::Comics | Category::Manga => &READ_STATUSES,
        }
    }

    pub fn default_status(self) -> Status {
        self.statuses()[0]
    }

    pub fn allows(self, status: Status) -> bool {
        self.statuses().contains(&status)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLabel(pub String);

impl fmt::Display for UnknownLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown label '{}'", self.0)
    }
}

impl std::error::Error for UnknownLabel {}

impl FromStr for Category {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownLabel(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "Want to Watch")]
    WantToWatch,
    Watching,
    #[serde(rename = "Want to Read")]
    WantToRead,
    Reading,
    Completed,
    Dropped,
    #[serde(rename = "On Hold")]
    OnHold,
}

impl Status {
    const ALL: [Status; 7] = [
        Status::WantToWatch,
        Status::Watching,
        Status::WantToRead,
        Status::Reading,
        Status::Completed,
        Status::Dropped,
        Status::OnHold,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Status::WantToWatch => "Want to Watch",
            Status::Watching => "Watching",
            Status::WantToRead => "Want to Read",
            Status::Reading => "Reading",
            Status::Completed => "Completed",
            Status::Dropped => "Dropped",
            Status::OnHold => "On Hold",
        }
    }

    /// Counted as "in progress" by the stats panel, planned items included.
    pub fn is_in_progress(self) -> bool {
        matches!(
            self,
            Status::WantToWatch | Status::Watching | Status::WantToRead | Status::Reading
        )
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Status {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|st| st.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownLabel(s.to_string()))
    }
}

//! Client-side catalog: the records a front end renders, with local
//! filtering, sorting, stats and add/edit form state.

pub mod category;
pub mod collection;
pub mod form;
pub mod item;
pub mod query;
pub mod stats;

pub use category::{Category, Status, UnknownLabel};
pub use collection::Collection;
pub use form::{FavoriteForm, FormError};
pub use item::{MediaItem, Rating};
pub use query::{CatalogQuery, CategoryFilter, SortOrder};
pub use stats::CatalogStats;

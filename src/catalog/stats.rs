use super::category::Status;
use super::item::MediaItem;

/// Summary numbers shown above the list.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CatalogStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    /// Rounded to one decimal, 0 for an empty collection
    pub average_rating: f64,
}

impl CatalogStats {
    pub fn from_items(items: &[MediaItem]) -> Self {
        if items.is_empty() {
            return Self::default();
        }

        let rating_sum: u32 = items.iter().map(|i| u32::from(i.rating.get())).sum();
        let average = f64::from(rating_sum) / items.len() as f64;

        Self {
            total: items.len(),
            completed: items
                .iter()
                .filter(|i| i.status == Status::Completed)
                .count(),
            in_progress: items.iter().filter(|i| i.status.is_in_progress()).count(),
            average_rating: (average * 10.0).round() / 10.0,
        }
    }
}

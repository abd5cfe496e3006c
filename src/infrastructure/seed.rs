use crate::models::favorite;
use sea_orm::*;

const DEMO_FAVORITES: &[(&str, &str, &str)] = &[
    ("Movies", "Dune", "2021"),
    ("TV Shows", "Severance", "2022"),
    ("Anime", "Cowboy Bebop", "1998"),
    ("Books", "The Left Hand of Darkness", "1969"),
    ("Comics", "Saga", "2012"),
    ("Manga", "Vinland Saga", "2005"),
];

/// Insert a handful of sample favorites. Skipped when the table already has rows.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<u64, DbErr> {
    if favorite::Entity::find().count(db).await? > 0 {
        return Ok(0);
    }

    let mut inserted = 0;
    for (kind, title, year) in DEMO_FAVORITES {
        let now = chrono::Utc::now().to_rfc3339();
        let fav = favorite::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            kind: Set(kind.to_string()),
            title: Set(title.to_string()),
            year: Set(year.to_string()),
            created_at: Set(now.clone()),
            updated_at: Set(now),
        };
        fav.insert(db).await?;
        inserted += 1;
    }

    Ok(inserted)
}

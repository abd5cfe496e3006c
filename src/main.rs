use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use favvault::{config, db, seed, server};

#[tokio::main]
async fn main() {
    // Load configuration
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "favvault=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = config::Config::from_env();

    tracing::info!("Connecting to {}", config.database_url);
    let db = match db::init_db(&config.database_url).await {
        Ok(db) => {
            tracing::info!("Connected to database");
            db
        }
        Err(e) => {
            tracing::error!("Failed to initialize database: {}", e);
            std::process::exit(1);
        }
    };

    if config.seed_demo {
        tracing::info!("Seeding demo data...");
        match seed::seed_demo_data(&db).await {
            Ok(count) => tracing::info!("Demo data seeded ({} favorites).", count),
            Err(e) => tracing::error!("Failed to seed data: {}", e),
        }
    }

    if let Err(e) = server::run(db, &config).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

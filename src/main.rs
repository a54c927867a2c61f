//! JDOM Catalog demo
//!
//! Seeds (or reopens) a catalog, logs the collection sizes and prints the
//! dashboard statistics. Uses file-backed storage when `JDOM_DATA_DIR` is
//! set, in-memory storage otherwise.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jdom_catalog::storage::shared;
use jdom_catalog::{AppStore, AuthStore, Config, FileStorage, MemoryStorage, Stats};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting JDOM catalog demo");

    let storage = match &config.data_dir {
        Some(dir) => {
            tracing::info!("Data directory: {:?}", dir);
            shared(FileStorage::open(dir)?)
        }
        None => {
            tracing::warn!("No JDOM_DATA_DIR configured; using in-memory storage");
            shared(MemoryStorage::new())
        }
    };

    let store = AppStore::open(storage.clone())?;
    let auth = AuthStore::with_session_hours(storage, config.session_hours);

    let stats = Stats::compute(&store);
    println!("JDOM catalog");
    println!(
        "  datasets:      {} ({} published, {} draft, {} featured)",
        stats.overview.total_datasets,
        stats.overview.published_datasets,
        stats.overview.draft_datasets,
        stats.overview.featured_datasets,
    );
    println!("  organizations: {}", stats.overview.total_organizations);
    println!("  themes:        {}", stats.overview.total_themes);
    println!("  licenses:      {}", stats.overview.total_licenses);
    println!(
        "  users:         {} ({} staff)",
        stats.overview.total_users, stats.overview.active_users
    );
    println!(
        "  downloads:     {}  views: {}",
        stats.overview.total_downloads, stats.overview.total_views
    );

    for theme in &stats.datasets_by_theme {
        println!("  theme {:<14} {} datasets", theme.slug, theme.datasets_count);
    }

    if auth.is_authenticated() {
        if let Some(user) = auth.current_user() {
            println!("  session:       {} ({})", user.email, user.role.as_str());
        }
    } else {
        println!("  session:       none");
    }

    Ok(())
}

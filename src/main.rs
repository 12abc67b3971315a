use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use products::config::Config;
use products::db::{create_pool, init_db, migrations, queries, AppState};
use products::handlers;
use products::models::CreateProduct;

#[derive(Parser, Debug)]
#[command(name = "products")]
#[command(about = "Product catalog CRUD service")]
struct Cli {
    /// Seed an empty database with sample products (dev mode only)
    #[arg(long)]
    seed: bool,

    /// Delete the database on exit (dev mode only, useful for fresh starts)
    #[arg(long)]
    ephemeral: bool,
}

/// Seeds the database with a few sample products.
/// Only runs when the products table is empty.
fn seed_dev_data(state: &AppState) {
    let conn = state.db.get().expect("Failed to get db connection for seeding");

    let count = queries::count_products(&conn).expect("Failed to count products");
    if count > 0 {
        tracing::info!("Database already has data, skipping seed");
        return;
    }

    let samples = [
        ("Starter Plan", "Single seat, community support", "active", 9.99),
        ("Team Plan", "Up to ten seats, email support", "active", 49.0),
        ("Legacy Plan", "No longer sold", "archived", 4.5),
    ];

    for (title, description, status, price) in samples {
        let input = CreateProduct {
            title: title.to_string(),
            description: description.to_string(),
            status: status.to_string(),
            price,
        };
        let product = queries::create_product(&conn, &input).expect("Failed to create sample product");
        tracing::info!("Seeded product: {} (id: {})", product.title, product.id);
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "products=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    if config.dev_mode {
        tracing::info!("Running in DEVELOPMENT mode");
    }

    let db_pool =
        create_pool(&config.database_path, config.pool_size).expect("Failed to create database pool");

    {
        let conn = db_pool.get().expect("Failed to get connection");
        init_db(&conn).expect("Failed to initialize database");
        let version = migrations::get_version(&conn).expect("Failed to read schema version");
        tracing::info!("Database {} at schema version {}", config.database_path, version);
    }

    let state = AppState::new(db_pool);

    if cli.seed {
        if !config.dev_mode {
            tracing::warn!("--seed flag ignored: not in dev mode (set PRODUCTS_ENV=dev)");
        } else {
            seed_dev_data(&state);
        }
    }

    let app = handlers::router()
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    let cleanup_on_exit = cli.ephemeral && config.dev_mode;
    if cli.ephemeral && !config.dev_mode {
        tracing::warn!("--ephemeral flag ignored: not in dev mode (set PRODUCTS_ENV=dev)");
    }
    if cleanup_on_exit {
        tracing::info!("EPHEMERAL MODE: database will be deleted on exit");
    }

    tracing::info!("Products server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Failed to start server");

    if cleanup_on_exit {
        let db_path = &config.database_path;
        if let Err(e) = std::fs::remove_file(db_path) {
            tracing::warn!("Failed to remove {}: {}", db_path, e);
        } else {
            tracing::info!("Removed {}", db_path);
        }
        // WAL and SHM files may or may not exist
        let _ = std::fs::remove_file(format!("{}-wal", db_path));
        let _ = std::fs::remove_file(format!("{}-shm", db_path));
    }
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

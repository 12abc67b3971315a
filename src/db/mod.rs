mod from_row;
pub mod migrations;
pub mod queries;

pub use from_row::{FromRow, PRODUCT_COLS};
pub use migrations::init_db;

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;

pub type DbPool = Pool<SqliteConnectionManager>;

/// Application state shared by every request handler
#[derive(Clone)]
pub struct AppState {
    /// Products database pool
    pub db: DbPool,
}

impl AppState {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }
}

pub fn create_pool(database_path: &str, max_size: u32) -> Result<DbPool, r2d2::Error> {
    // WAL lets readers proceed while a writer holds the lock
    let manager = SqliteConnectionManager::file(database_path).with_init(|conn| {
        conn.execute_batch(
            "PRAGMA busy_timeout = 5000;
             PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;",
        )
    });
    Pool::builder().max_size(max_size).build(manager)
}

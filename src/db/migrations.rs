//! Schema migrations.
//!
//! Migrations are embedded in the binary and run on startup. The applied
//! version is tracked with `PRAGMA user_version`.

use rusqlite::Connection;
use thiserror::Error;

/// A database migration.
pub struct Migration {
    /// Version number (sequential, starting from 1).
    pub version: i32,
    pub description: &'static str,
    pub up: fn(&Connection) -> rusqlite::Result<()>,
}

/// All migrations in order.
/// Add new migrations to the end of this list.
pub const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    description: "create products table",
    up: migration_001_products,
}];

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("Migration {version} failed: {message}")]
    MigrationFailed { version: i32, message: String },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// Get the current schema version from the database.
pub fn get_version(conn: &Connection) -> rusqlite::Result<i32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
}

fn set_version(conn: &Connection, version: i32) -> rusqlite::Result<()> {
    conn.pragma_update(None, "user_version", version)
}

/// Latest version known to this binary.
pub fn latest_version() -> i32 {
    MIGRATIONS.last().map(|m| m.version).unwrap_or(0)
}

/// Run pending migrations, each in its own transaction.
pub fn run_migrations(conn: &Connection) -> Result<(), MigrationError> {
    let current_version = get_version(conn)?;

    let pending: Vec<_> = MIGRATIONS
        .iter()
        .filter(|m| m.version > current_version)
        .collect();

    if pending.is_empty() {
        tracing::debug!("Database at version {} (up to date)", current_version);
        return Ok(());
    }

    tracing::info!(
        "Database at version {}, {} migration(s) pending",
        current_version,
        pending.len()
    );

    for migration in pending {
        tracing::info!(
            "Running migration {}: {}",
            migration.version,
            migration.description
        );

        let tx = conn.unchecked_transaction()?;

        match (migration.up)(&tx) {
            Ok(()) => {
                set_version(&tx, migration.version)?;
                tx.commit()?;
                tracing::info!("Migration {} completed", migration.version);
            }
            Err(e) => {
                // Transaction rolls back on drop
                tracing::error!(
                    "Migration {} failed: {}. Database unchanged.",
                    migration.version,
                    e
                );
                return Err(MigrationError::MigrationFailed {
                    version: migration.version,
                    message: e.to_string(),
                });
            }
        }
    }

    Ok(())
}

/// Initialize the database schema by applying every pending migration.
pub fn init_db(conn: &Connection) -> Result<(), MigrationError> {
    run_migrations(conn)
}

// ============================================================================
// Migration Functions
// ============================================================================

fn migration_001_products(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            status TEXT NOT NULL,
            price REAL NOT NULL,
            created_at INTEGER,
            updated_at INTEGER
        );
        "#,
    )
}

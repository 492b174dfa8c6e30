//! Apply the database schema
//!
//! Reads configuration from the environment (and `.env`), opens the pool,
//! runs every pending migration, then closes the pool.
//! The default directory is this crate's `migrations/` at build time, so a
//! binary run away from the source tree needs `MIGRATIONS_DIR`.

use std::path::PathBuf;

use anyhow::Context;
use shoplist_common::{try_init_tracing, AppConfig, TracingConfig};
use shoplist_db::Database;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("failed to load configuration")?;
    try_init_tracing(&TracingConfig::for_environment(config.app.env))?;

    let dir = std::env::var_os("MIGRATIONS_DIR").map_or_else(
        || PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("migrations"),
        PathBuf::from,
    );

    info!(app = %config.app.name, dir = %dir.display(), "Running migrations");

    let db = Database::connect(&config.database)
        .await
        .context("failed to connect to database")?;

    let result = db.migrate(&dir).await;
    db.close().await;

    if let Err(e) = &result {
        error!(error = %e, "Migration failed");
    }
    result.context("failed to apply migrations")
}

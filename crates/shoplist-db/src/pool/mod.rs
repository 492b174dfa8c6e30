//! Database connection pool management

mod postgres;

pub use postgres::Database;
pub use shoplist_common::DatabaseConfig;

// Re-export PgPool for convenience
pub use sqlx::postgres::PgPool;

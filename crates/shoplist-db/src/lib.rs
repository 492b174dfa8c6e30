//! # shoplist-db
//!
//! Database layer implementing the repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `shoplist-core`. It handles:
//!
//! - The shared connection pool ([`Database`])
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers, including list/product aggregation
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shoplist_common::DatabaseConfig;
//! use shoplist_core::traits::ListRepository;
//! use shoplist_db::{Database, PgListRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env()?;
//!     let db = Database::connect(&config).await?;
//!     let lists = PgListRepository::new(db.clone());
//!
//!     let groceries = lists.get_lists_for_user(1.into()).await?;
//!
//!     db.close().await;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{Database, DatabaseConfig, PgPool};
pub use repositories::{PgListRepository, PgProductRepository, PgUserRepository};

//! # shoplist-core
//!
//! Domain layer for the shopping list application: entities, typed identifiers,
//! the domain error type and the repository traits (ports) that the database
//! layer implements. This crate has no dependency on the database driver.

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{List, ListData, Product, User};
pub use error::DomainError;
pub use traits::{ListRepository, ProductRepository, RepoResult, UserRepository};
pub use value_objects::{ListId, ProductId, UserId};

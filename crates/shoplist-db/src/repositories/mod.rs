//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in
//! shoplist-core. Each repository handles database operations for a specific
//! domain entity and holds a clone of the shared [`Database`](crate::Database).

mod error;
mod list;
mod product;
mod user;

pub use list::PgListRepository;
pub use product::PgProductRepository;
pub use user::PgUserRepository;

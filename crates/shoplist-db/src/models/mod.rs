//! Database models - SQLx-compatible structs for PostgreSQL tables

mod list;
mod product;
mod user;

pub use list::{ListModel, ListProductRow};
pub use product::ProductModel;
pub use user::{CredentialsRow, UserModel};

//! Domain entities - core business objects

mod list;
mod product;
mod user;

pub use list::{List, ListData};
pub use product::Product;
pub use user::User;

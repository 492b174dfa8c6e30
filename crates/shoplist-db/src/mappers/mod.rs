//! Model to entity mappers
//!
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - [`group_list_rows`]: Fold joined list/product rows into nested aggregates

mod list;
mod product;
mod user;

pub use list::group_list_rows;

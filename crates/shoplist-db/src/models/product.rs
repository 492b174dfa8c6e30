//! Product database model

use sqlx::FromRow;

/// Database model for products table
#[derive(Debug, Clone, FromRow)]
pub struct ProductModel {
    pub id: i64,
    pub list_id: i64,
    pub name: String,
    pub quantity: i32,
    pub store: String,
}

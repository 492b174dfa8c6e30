//! List database models

use sqlx::FromRow;

/// Database model for lists table
#[derive(Debug, Clone, FromRow)]
pub struct ListModel {
    pub id: i64,
    pub owner_id: i64,
    pub name: String,
}

/// One row of `lists LEFT JOIN products`
///
/// The product columns are all `NULL` for a list that has no products.
#[derive(Debug, Clone, FromRow)]
pub struct ListProductRow {
    pub list_id: i64,
    pub list_name: String,
    pub product_id: Option<i64>,
    pub product_name: Option<String>,
    pub quantity: Option<i32>,
    pub store: Option<String>,
}

//! List entity and its read-side aggregate

use serde::Serialize;

use super::Product;
use crate::value_objects::{ListId, UserId};

/// Named shopping list owned by a user
///
/// Names are unique across all lists, not per owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct List {
    pub id: ListId,
    pub owner_id: UserId,
    pub name: String,
}

impl List {
    /// Create a new List
    pub fn new(id: ListId, owner_id: UserId, name: String) -> Self {
        Self { id, owner_id, name }
    }
}

/// A list's name together with its products, in insertion order
///
/// Not persisted; built by the list repository when reading a user's lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListData {
    pub name: String,
    pub products: Vec<Product>,
}

impl ListData {
    /// Create an aggregate with no products yet
    pub fn new(name: String) -> Self {
        Self {
            name,
            products: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::ProductId;

    fn product(id: i64, name: &str, quantity: i32, store: &str) -> Product {
        Product::new(
            ProductId::new(id),
            ListId::new(1),
            name.to_string(),
            quantity,
            store.to_string(),
        )
    }

    #[test]
    fn test_new_list_data_has_no_products() {
        let data = ListData::new("Groceries".to_string());
        assert_eq!(data.name, "Groceries");
        assert!(data.products.is_empty());
    }

    #[test]
    fn test_list_data_serializes_nested_products() {
        let mut data = ListData::new("Groceries".to_string());
        data.products.push(product(1, "Milk", 2, "StoreA"));

        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["name"], "Groceries");
        assert_eq!(json["products"][0]["name"], "Milk");
        assert_eq!(json["products"][0]["quantity"], 2);
        assert_eq!(json["products"][0]["store"], "StoreA");
    }
}

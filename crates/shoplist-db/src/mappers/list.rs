//! List model -> entity mapper and list/product aggregation

use shoplist_core::entities::{List, ListData, Product};
use shoplist_core::value_objects::{ListId, ProductId, UserId};

use crate::models::{ListModel, ListProductRow};

impl From<ListModel> for List {
    fn from(model: ListModel) -> Self {
        List {
            id: ListId::new(model.id),
            owner_id: UserId::new(model.owner_id),
            name: model.name,
        }
    }
}

/// Group joined rows into one [`ListData`] per list
///
/// Rows must arrive ordered by list id; product order inside each list is
/// kept as given. A list whose only row has `NULL` product columns yields an
/// aggregate with no products.
pub fn group_list_rows(rows: impl IntoIterator<Item = ListProductRow>) -> Vec<ListData> {
    let mut lists: Vec<ListData> = Vec::new();
    let mut current: Option<i64> = None;

    for row in rows {
        let ListProductRow {
            list_id,
            list_name,
            product_id,
            product_name,
            quantity,
            store,
        } = row;

        if current != Some(list_id) {
            current = Some(list_id);
            lists.push(ListData::new(list_name));
        }

        let (Some(id), Some(name), Some(quantity), Some(store)) =
            (product_id, product_name, quantity, store)
        else {
            continue;
        };

        if let Some(list) = lists.last_mut() {
            list.products.push(Product {
                id: ProductId::new(id),
                list_id: ListId::new(list_id),
                name,
                quantity,
                store,
            });
        }
    }

    lists
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(list_id: i64, list_name: &str, product: Option<(i64, &str, i32, &str)>) -> ListProductRow {
        ListProductRow {
            list_id,
            list_name: list_name.to_string(),
            product_id: product.map(|p| p.0),
            product_name: product.map(|p| p.1.to_string()),
            quantity: product.map(|p| p.2),
            store: product.map(|p| p.3.to_string()),
        }
    }

    #[test]
    fn test_no_rows_yields_no_lists() {
        assert!(group_list_rows(Vec::new()).is_empty());
    }

    #[test]
    fn test_groups_products_under_their_list() {
        let lists = group_list_rows(vec![
            row(1, "Groceries", Some((10, "Milk", 2, "StoreA"))),
            row(1, "Groceries", Some((11, "Bread", 1, "StoreB"))),
            row(2, "Hardware", Some((12, "Nails", 100, "StoreC"))),
        ]);

        assert_eq!(lists.len(), 2);
        assert_eq!(lists[0].name, "Groceries");
        let names: Vec<_> = lists[0].products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Milk", "Bread"]);
        assert_eq!(lists[0].products[0].quantity, 2);
        assert_eq!(lists[0].products[0].store, "StoreA");
        assert_eq!(lists[0].products[1].list_id, ListId::new(1));

        assert_eq!(lists[1].name, "Hardware");
        assert_eq!(lists[1].products.len(), 1);
        assert_eq!(lists[1].products[0].id, ProductId::new(12));
    }

    #[test]
    fn test_list_without_products_is_kept_empty() {
        let lists = group_list_rows(vec![
            row(1, "Empty", None),
            row(2, "Groceries", Some((10, "Milk", 2, "StoreA"))),
        ]);

        assert_eq!(lists.len(), 2);
        assert!(lists[0].products.is_empty());
        assert_eq!(lists[1].products.len(), 1);
    }

    #[test]
    fn test_list_model_into_entity() {
        let list = List::from(ListModel {
            id: 5,
            owner_id: 1,
            name: "Groceries".to_string(),
        });

        assert_eq!(list.id, ListId::new(5));
        assert_eq!(list.owner_id, UserId::new(1));
        assert_eq!(list.name, "Groceries");
    }
}

use shared::models::{CartEntry, Product};
use storefront_cart::{CART_KEY, CartStore, JsonFileStorage, KeyValueStorage, SAVED_KEY};

fn catalog() -> Vec<Product> {
    vec![
        Product::new("p1", "Granule za mačke").with_price("1200", None),
        Product::new("p2", "Povodac").with_price("2490", Some("1990")),
    ]
}

#[test]
fn test_cart_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("local-storage.json");

    {
        let mut store = CartStore::new(JsonFileStorage::open(&path));
        store.add_to_cart("p1", 2).unwrap();
        store.add_to_cart("p2", 1).unwrap();
        store.add_to_saved("p3").unwrap();
    }

    let mut store = CartStore::new(JsonFileStorage::open(&path));
    assert_eq!(
        store.get_cart(),
        vec![CartEntry::new("p1", 2), CartEntry::new("p2", 1)]
    );
    assert!(store.is_saved("p3"));

    let totals = store.cart_totals(&catalog());
    assert_eq!(totals.item_count, 3);
    assert_eq!(totals.display_total(), "4,390.00 RSD");
}

#[test]
fn test_legacy_file_is_migrated_on_first_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("local-storage.json");
    std::fs::write(
        &path,
        serde_json::json!({ CART_KEY: r#"["p1","p2"]"#, SAVED_KEY: r#"["p2"]"# }).to_string(),
    )
    .unwrap();

    let mut store = CartStore::new(JsonFileStorage::open(&path));
    assert_eq!(store.cart_item_quantity("p1"), 1);

    let reopened = JsonFileStorage::open(&path);
    assert_eq!(
        reopened.get_item(CART_KEY).unwrap().as_deref(),
        Some(r#"[{"id":"p1","quantity":1},{"id":"p2","quantity":1}]"#)
    );
}

#[test]
fn test_move_all_then_totals() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = CartStore::new(JsonFileStorage::open(dir.path().join("s.json")));
    store.add_to_saved("p1").unwrap();
    store.add_to_saved("p2").unwrap();
    store.add_to_saved("stale").unwrap();

    assert_eq!(store.move_all_saved_to_cart().unwrap(), 3);
    assert!(store.get_saved().is_empty());

    let totals = store.cart_totals(&catalog());
    assert_eq!(totals.distinct_products, 2);
    assert_eq!(totals.item_count, 2);
    // 过期条目保留在购物车中
    assert_eq!(store.get_cart().len(), 3);
}

use bakery_storefront_api::{
    error::AppError,
    inventory::{
        DEFAULT_INVENTORY_CATEGORY, LOW_STOCK_THRESHOLD, StockProjection, filter_inventory,
        is_low_stock, normalize_category,
    },
    models::{CakeStatus, InventoryItem},
};
use chrono::Utc;
use uuid::Uuid;

fn item(ingredient: &str, quantity: i32, unit: &str, category: &str) -> InventoryItem {
    InventoryItem {
        id: Uuid::new_v4(),
        ingredient: ingredient.to_string(),
        quantity,
        unit: unit.to_string(),
        category: category.to_string(),
        low_stock: is_low_stock(quantity),
        created_at: Utc::now(),
    }
}

fn pantry() -> Vec<InventoryItem> {
    vec![
        item("All-Purpose Flour", 25, "kg", "Baking"),
        item("Cocoa Powder", 3, "kg", "Flavoring"),
        item("Fresh Eggs", 120, "pcs", "Dairy"),
        item("Heavy Cream", 5, "liters", "Dairy"),
    ]
}

#[test]
fn threshold_boundary() {
    assert_eq!(LOW_STOCK_THRESHOLD, 5);
    assert!(is_low_stock(0));
    assert!(is_low_stock(4));
    assert!(!is_low_stock(5));
}

#[test]
fn projection_recomputes_low_stock_flag() {
    let down = StockProjection::project(6, -2).expect("valid projection");
    assert_eq!(down.previous, 6);
    assert_eq!(down.projected, 4);
    assert!(down.low_stock);

    let up = StockProjection::project(4, 1).expect("valid projection");
    assert_eq!(up.projected, 5);
    assert!(!up.low_stock);
}

#[test]
fn projection_rejects_zero_delta_and_negative_results() {
    assert!(matches!(
        StockProjection::project(3, 0),
        Err(AppError::BadRequest(msg)) if msg == "delta must not be 0"
    ));
    assert!(matches!(
        StockProjection::project(3, -4),
        Err(AppError::BadRequest(msg)) if msg == "stock cannot be negative"
    ));
    assert!(StockProjection::project(i32::MAX, 1).is_err());

    let empty = StockProjection::project(3, -3).expect("drain to zero");
    assert_eq!(empty.projected, 0);
    assert!(empty.low_stock);
}

#[test]
fn absolute_set_projection() {
    let same = StockProjection::set(7, 7).expect("valid");
    assert!(same.is_noop());

    let drop = StockProjection::set(7, 2).expect("valid");
    assert!(!drop.is_noop());
    assert!(drop.low_stock);

    assert!(StockProjection::set(7, -1).is_err());
}

#[test]
fn cake_status_follows_stock() {
    assert_eq!(CakeStatus::from_stock(0), CakeStatus::OutOfStock);
    assert_eq!(CakeStatus::from_stock(-3), CakeStatus::OutOfStock);
    assert_eq!(CakeStatus::from_stock(4), CakeStatus::LowStock);
    assert_eq!(CakeStatus::from_stock(5), CakeStatus::Available);
    assert_eq!(CakeStatus::LowStock.as_str(), "Low Stock");
}

#[test]
fn inventory_search_matches_ingredient_category_or_unit() {
    let items = pantry();

    let dairy = filter_inventory(&items, "dairy");
    assert_eq!(dairy.len(), 2);

    let kg = filter_inventory(&items, " KG ");
    assert_eq!(
        kg.iter().map(|i| i.ingredient.as_str()).collect::<Vec<_>>(),
        vec!["All-Purpose Flour", "Cocoa Powder"]
    );

    assert_eq!(filter_inventory(&items, "cocoa").len(), 1);
    assert!(filter_inventory(&items, "yeast").is_empty());
}

#[test]
fn blank_inventory_search_is_identity() {
    let items = pantry();

    assert_eq!(filter_inventory(&items, ""), items);
    assert_eq!(filter_inventory(&items, "   "), items);
    assert!(filter_inventory(&[], "flour").is_empty());
}

#[test]
fn blank_category_defaults_to_general() {
    assert_eq!(normalize_category(""), DEFAULT_INVENTORY_CATEGORY);
    assert_eq!(normalize_category("  "), "General");
    assert_eq!(normalize_category(" Dairy "), "Dairy");
}

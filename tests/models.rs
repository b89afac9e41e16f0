use bakery_storefront_api::{
    entity::cakes,
    models::{Cake, CakeStatus, DEFAULT_CATEGORY, PLACEHOLDER_IMAGE},
};
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

fn stored_cake() -> cakes::Model {
    cakes::Model {
        id: Uuid::new_v4(),
        name: "Chocolate Delight".into(),
        description: Some("Rich dark chocolate".into()),
        price: 4500,
        category: "Chocolate".into(),
        images: json!(["https://img/choc-1.jpg", "https://img/choc-2.jpg"]),
        status: "Available".into(),
        stock: 12,
        rating: Some(4.8),
        discount_percent: Some(10),
        deleted: false,
        created_at: Utc::now().fixed_offset(),
    }
}

#[test]
fn well_formed_row_reads_back_unchanged() {
    let model = stored_cake();
    let cake = Cake::from(model.clone());

    assert_eq!(cake.id, model.id);
    assert_eq!(cake.category, "Chocolate");
    assert_eq!(cake.images.len(), 2);
    assert_eq!(cake.thumbnail(), "https://img/choc-1.jpg");
    assert_eq!(cake.status, CakeStatus::Available);
    assert_eq!(cake.rating, Some(4.8));
    assert_eq!(cake.discount_percent, Some(10));
}

#[test]
fn malformed_row_falls_back_to_safe_defaults() {
    let model = cakes::Model {
        status: "Available".into(),
        stock: 0,
        images: json!({ "x": 1 }),
        rating: Some(f64::NAN),
        discount_percent: Some(150),
        category: String::new(),
        ..stored_cake()
    };
    let cake = Cake::from(model);

    assert_eq!(cake.status, CakeStatus::OutOfStock);
    assert!(cake.images.is_empty());
    assert_eq!(cake.thumbnail(), PLACEHOLDER_IMAGE);
    assert_eq!(cake.rating, None);
    assert_eq!(cake.discount_percent, Some(100));
    assert_eq!(cake.category, DEFAULT_CATEGORY);
    assert_eq!(cake.final_price(), 0);
    assert!(!cake.is_available());
}

#[test]
fn negative_values_are_clamped() {
    let model = cakes::Model {
        stock: -4,
        price: -100,
        rating: Some(-1.0),
        discount_percent: Some(-20),
        ..stored_cake()
    };
    let cake = Cake::from(model);

    assert_eq!(cake.stock, 0);
    assert_eq!(cake.status, CakeStatus::OutOfStock);
    assert_eq!(cake.price, 0);
    assert_eq!(cake.rating, None);
    assert_eq!(cake.discount_percent, Some(0));
}

#[test]
fn stock_decides_status_over_stored_label() {
    let low = Cake::from(cakes::Model {
        status: "Out of Stock".into(),
        stock: 3,
        ..stored_cake()
    });
    assert_eq!(low.status, CakeStatus::LowStock);

    let restocked = Cake::from(cakes::Model {
        status: "Low Stock".into(),
        stock: 40,
        ..stored_cake()
    });
    assert_eq!(restocked.status, CakeStatus::Available);
    assert!(restocked.is_available());
}

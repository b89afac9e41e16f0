use bakery_storefront_api::validation::{
    MAX_PRICE, validate_category_label, validate_discount, validate_email, validate_password,
    validate_phone, validate_price, validate_rating, validate_required, validate_stock,
};

#[test]
fn email_shape() {
    assert!(validate_email("baker@example.com").is_ok());
    assert!(validate_email("a@b.co").is_ok());

    for bad in ["", "baker", "baker@example", "@example.com", "baker@.com", "ba ker@example.com", "baker@example."] {
        assert!(validate_email(bad).is_err(), "{bad} should be rejected");
    }
}

#[test]
fn password_length() {
    assert!(validate_password("secret").is_ok());
    assert!(validate_password("short").is_err());
    assert!(validate_password("").is_err());
}

#[test]
fn vietnamese_mobile_numbers() {
    for good in ["0912345678", "0381234567", "84987654321", "0512345678", ""] {
        assert!(validate_phone(good).is_ok(), "{good} should be accepted");
    }
    for bad in ["0212345678", "091234567", "09123456789", "+84912345678", "09123a5678", "1912345678", "8412345678"] {
        assert!(validate_phone(bad).is_err(), "{bad} should be rejected");
    }
}

#[test]
fn numeric_ranges() {
    assert!(validate_price(0).is_ok());
    assert!(validate_price(-1).is_err());
    assert!(validate_price(MAX_PRICE).is_ok());
    assert!(validate_price(MAX_PRICE + 1).is_err());
    assert!(validate_price(i64::MAX).is_err());

    assert!(validate_stock(0).is_ok());
    assert!(validate_stock(-1).is_err());

    assert!(validate_discount(None).is_ok());
    assert!(validate_discount(Some(0)).is_ok());
    assert!(validate_discount(Some(100)).is_ok());
    assert!(validate_discount(Some(101)).is_err());
    assert!(validate_discount(Some(-5)).is_err());

    assert!(validate_rating(None).is_ok());
    assert!(validate_rating(Some(4.5)).is_ok());
    assert!(validate_rating(Some(-0.1)).is_err());
    assert!(validate_rating(Some(f64::NAN)).is_err());
}

#[test]
fn required_fields() {
    assert!(validate_required("name", "Red Velvet").is_ok());
    assert!(validate_required("name", "   ").is_err());
}

#[test]
fn category_labels() {
    assert!(validate_category_label("Chocolate").is_ok());
    assert!(validate_category_label("All Seasons").is_ok());
    assert!(validate_category_label("all").is_ok());

    assert!(validate_category_label("All").is_err());
    assert!(validate_category_label("  All ").is_err());
    assert!(validate_category_label("").is_err());
}

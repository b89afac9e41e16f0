use bakery_storefront_api::{
    catalog::{
        ALL_CATEGORIES, DEFAULT_FEED_LIMIT, QueryState, apply_filters, count_by_status,
        count_low_stock, count_total, filter_by_category, filter_by_search_text, paginate,
        recent_arrivals, sort_cakes, top_rated,
    },
    inventory::is_low_stock,
    models::{Cake, CakeStatus, InventoryItem},
    routes::params::{CakeSortBy, Pagination, SortOrder},
};
use chrono::{Duration, TimeZone, Utc};
use uuid::Uuid;

fn cake(name: &str, category: &str, rating: Option<f64>) -> Cake {
    Cake {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: None,
        price: 4000,
        category: category.to_string(),
        images: vec![],
        status: CakeStatus::Available,
        stock: 10,
        rating,
        discount_percent: None,
        created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
    }
}

fn shelf() -> Vec<Cake> {
    vec![
        cake("Chocolate Delight", "Chocolate", Some(4.8)),
        cake("Strawberry Dream", "Fruit", Some(4.5)),
        cake("Vanilla Classic", "Classic", Some(3.9)),
        cake("Dark Chocolate Torte", "Chocolate", None),
        cake("Red Velvet", "Special", Some(4.5)),
    ]
}

fn names(cakes: &[Cake]) -> Vec<&str> {
    cakes.iter().map(|c| c.name.as_str()).collect()
}

fn ingredient(quantity: i32) -> InventoryItem {
    InventoryItem {
        id: Uuid::new_v4(),
        ingredient: "Butter".to_string(),
        quantity,
        unit: "kg".to_string(),
        category: "Dairy".to_string(),
        low_stock: is_low_stock(quantity),
        created_at: Utc::now(),
    }
}

#[test]
fn search_with_all_category_matches_name_case_insensitively() {
    let cakes = vec![
        cake("Chocolate Delight", "Chocolate", Some(4.8)),
        cake("Vanilla Classic", "Classic", Some(3.9)),
    ];

    let result = apply_filters(&cakes, ALL_CATEGORIES, "choc");

    assert_eq!(names(&result), vec!["Chocolate Delight"]);
}

#[test]
fn category_filter_is_an_ordered_subsequence() {
    let cakes = shelf();

    let result = filter_by_category(&cakes, "Chocolate");

    assert!(result.iter().all(|c| c.category == "Chocolate"));
    assert_eq!(names(&result), vec!["Chocolate Delight", "Dark Chocolate Torte"]);
}

#[test]
fn category_filter_is_case_sensitive() {
    let cakes = shelf();

    assert!(filter_by_category(&cakes, "chocolate").is_empty());
    assert!(filter_by_category(&cakes, "Nonexistent").is_empty());
}

#[test]
fn all_category_and_empty_query_are_identity() {
    let cakes = shelf();

    assert_eq!(filter_by_category(&cakes, ALL_CATEGORIES), cakes);
    assert_eq!(filter_by_search_text(&cakes, ""), cakes);
    assert_eq!(apply_filters(&cakes, ALL_CATEGORIES, ""), cakes);
    assert_eq!(QueryState::default().apply(&cakes), cakes);
}

#[test]
fn apply_filters_is_the_intersection_of_both_filters() {
    let cakes = shelf();

    for (category, query) in [("Chocolate", "dark"), ("Fruit", "e"), (ALL_CATEGORIES, "VEL"), ("Classic", "choc")] {
        let by_category = filter_by_category(&cakes, category);
        let by_text = filter_by_search_text(&cakes, query);
        let expected: Vec<Cake> = by_category
            .into_iter()
            .filter(|c| by_text.iter().any(|t| t.id == c.id))
            .collect();

        assert_eq!(apply_filters(&cakes, category, query), expected);
        assert_eq!(QueryState::new(query, category).apply(&cakes), expected);
    }
}

#[test]
fn search_results_contain_the_query() {
    let cakes = shelf();

    let result = filter_by_search_text(&cakes, "ChOcO");

    assert_eq!(result.len(), 2);
    assert!(result.iter().all(|c| c.name.to_lowercase().contains("choco")));
}

#[test]
fn recent_arrivals_is_reversed_prefix() {
    let cakes = shelf();

    let three = recent_arrivals(&cakes, 3);
    assert_eq!(names(&three), vec!["Red Velvet", "Dark Chocolate Torte", "Vanilla Classic"]);

    let all = recent_arrivals(&cakes, DEFAULT_FEED_LIMIT);
    assert_eq!(all.len(), cakes.len());
    let reversed: Vec<Cake> = cakes.iter().rev().cloned().collect();
    assert_eq!(all, reversed);

    assert!(recent_arrivals(&cakes, 0).is_empty());
}

#[test]
fn top_rated_sorts_descending_with_stable_ties() {
    let cakes = shelf();

    let result = top_rated(&cakes, DEFAULT_FEED_LIMIT);

    assert_eq!(result.len(), cakes.len());
    assert!(result.windows(2).all(|w| w[0].rating_or_zero() >= w[1].rating_or_zero()));
    assert_eq!(
        names(&result),
        vec![
            "Chocolate Delight",
            "Strawberry Dream",
            "Red Velvet",
            "Vanilla Classic",
            "Dark Chocolate Torte",
        ]
    );
    assert_eq!(names(&top_rated(&cakes, 2)), vec!["Chocolate Delight", "Strawberry Dream"]);
}

#[test]
fn ten_items_at_quantity_three_are_all_low_stock() {
    let items: Vec<InventoryItem> = (0..10).map(|_| ingredient(3)).collect();

    assert_eq!(count_low_stock(&items), 10);
    assert_eq!(count_total(&items), 10);
}

#[test]
fn low_stock_counts_quantities_below_five() {
    let items: Vec<InventoryItem> = [0, 1, 4, 5, 6, 25].into_iter().map(ingredient).collect();

    let expected = items.iter().filter(|i| i.quantity < 5).count();
    assert_eq!(count_low_stock(&items), expected);
    assert_eq!(expected, 3);
}

#[test]
fn empty_inputs_yield_empty_outputs() {
    let cakes: Vec<Cake> = Vec::new();

    assert!(filter_by_category(&cakes, "Chocolate").is_empty());
    assert!(filter_by_search_text(&cakes, "choc").is_empty());
    assert!(apply_filters(&cakes, ALL_CATEGORIES, "").is_empty());
    assert!(recent_arrivals(&cakes, DEFAULT_FEED_LIMIT).is_empty());
    assert!(top_rated(&cakes, DEFAULT_FEED_LIMIT).is_empty());
    assert_eq!(count_low_stock(&[]), 0);
    assert_eq!(count_total(&cakes), 0);
}

#[test]
fn repeated_calls_return_identical_results() {
    let cakes = shelf();

    assert_eq!(apply_filters(&cakes, "Chocolate", "d"), apply_filters(&cakes, "Chocolate", "d"));
    assert_eq!(top_rated(&cakes, 3), top_rated(&cakes, 3));
    assert_eq!(recent_arrivals(&cakes, 3), recent_arrivals(&cakes, 3));
    assert_eq!(
        sort_cakes(&cakes, CakeSortBy::Rating, SortOrder::Desc),
        sort_cakes(&cakes, CakeSortBy::Rating, SortOrder::Desc)
    );
}

#[test]
fn sort_by_price_and_created_at() {
    let base = Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap();
    let mut cakes = shelf();
    for (i, (cake, price)) in cakes.iter_mut().zip([4500, 3800, 3500, 5200, 4200]).enumerate() {
        cake.price = price;
        cake.created_at = base - Duration::hours(i as i64);
    }

    let cheapest_first = sort_cakes(&cakes, CakeSortBy::Price, SortOrder::Asc);
    assert_eq!(
        cheapest_first.iter().map(|c| c.price).collect::<Vec<_>>(),
        vec![3500, 3800, 4200, 4500, 5200]
    );

    let oldest_first = sort_cakes(&cakes, CakeSortBy::CreatedAt, SortOrder::Asc);
    assert_eq!(oldest_first.first().map(|c| c.name.as_str()), Some("Red Velvet"));

    let by_name = sort_cakes(&cakes, CakeSortBy::Name, SortOrder::Desc);
    assert_eq!(by_name.first().map(|c| c.name.as_str()), Some("Vanilla Classic"));
}

#[test]
fn count_by_status_and_pagination() {
    let mut cakes = shelf();
    cakes[0].status = CakeStatus::OutOfStock;
    cakes[1].status = CakeStatus::LowStock;
    cakes[2].status = CakeStatus::LowStock;

    assert_eq!(count_by_status(&cakes, CakeStatus::LowStock), 2);
    assert_eq!(count_by_status(&cakes, CakeStatus::OutOfStock), 1);
    assert_eq!(count_by_status(&cakes, CakeStatus::Available), 2);

    assert_eq!(names(&paginate(&cakes, 2, 2)), vec!["Vanilla Classic", "Dark Chocolate Torte"]);
    assert_eq!(names(&paginate(&cakes, 3, 2)), vec!["Red Velvet"]);
    assert!(paginate(&cakes, 4, 2).is_empty());
}

#[test]
fn cake_pricing_and_thumbnail_defaults() {
    let mut c = cake("Red Velvet", "Special", None);
    c.price = 4200;
    c.discount_percent = Some(15);
    assert_eq!(c.final_price(), 3570);

    c.discount_percent = Some(33);
    assert_eq!(c.final_price(), 2814);

    assert_eq!(c.thumbnail(), bakery_storefront_api::models::PLACEHOLDER_IMAGE);
    c.images = vec!["https://img/1.jpg".into(), "https://img/2.jpg".into()];
    assert_eq!(c.thumbnail(), "https://img/1.jpg");

    c.stock = 0;
    c.status = CakeStatus::from_stock(0);
    assert!(!c.is_available());
}

#[test]
fn pricing_stays_exact_for_large_prices() {
    let mut pricey = cake("Wedding Tower", "Special", None);
    pricey.price = i64::MAX / 2;
    pricey.discount_percent = Some(10);
    assert_eq!(pricey.final_price(), 4_150_517_416_584_649_112);

    let mut cakes = shelf();
    cakes.push(pricey.clone());
    let dearest_first = sort_cakes(&cakes, CakeSortBy::Price, SortOrder::Desc);
    assert_eq!(dearest_first.first().map(|c| c.name.as_str()), Some("Wedding Tower"));

    assert_eq!(pricey.line_total(1), Some(pricey.final_price()));
    assert_eq!(pricey.line_total(3), None);

    let regular = cake("Vanilla Classic", "Classic", None);
    assert_eq!(regular.line_total(3), Some(12_000));
}

#[test]
fn pagination_offset_saturates() {
    let (page, per_page, offset) = Pagination {
        page: Some(i64::MAX),
        per_page: Some(20),
    }
    .normalize();
    assert_eq!((page, per_page), (i64::MAX, 20));
    assert_eq!(offset, i64::MAX);

    let (page, per_page, offset) = Pagination {
        page: Some(-3),
        per_page: Some(500),
    }
    .normalize();
    assert_eq!((page, per_page, offset), (1, 100, 0));

    let (_, _, offset) = Pagination {
        page: Some(3),
        per_page: None,
    }
    .normalize();
    assert_eq!(offset, 40);
}

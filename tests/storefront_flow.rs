use bakery_storefront_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    dto::{
        cakes::CreateCakeRequest,
        cart::AddToCartRequest,
        inventory::{CreateInventoryItemRequest, QuantityAdjustRequest},
        orders::{CheckoutRequest, UpdateOrderStatusRequest},
    },
    entity::users::ActiveModel as UserActive,
    error::AppError,
    middleware::auth::AuthUser,
    models::{CakeStatus, OrderStatus, Role},
    routes::params::{CakeQuery, HomeQuery, InventoryQuery},
    services::{
        admin_service, cake_service, cart_service, inventory_service, order_service,
        storefront_service,
    },
    state::AppState,
};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ConnectionTrait, Set, Statement};
use uuid::Uuid;

// Admin stocks a cake, client buys and cancels, admin adjusts ingredient stock.
#[tokio::test]
async fn catalog_checkout_cancel_and_inventory_flow() -> anyhow::Result<()> {
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!(
                "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration flow tests."
            );
            return Ok(());
        }
    };

    let state = setup_state(&database_url).await?;

    let client = AuthUser {
        user_id: create_user(&state, Role::Client, "client@example.com").await?,
        role: Role::Client,
    };
    let admin = AuthUser {
        user_id: create_user(&state, Role::Admin, "admin@example.com").await?,
        role: Role::Admin,
    };

    // Clients cannot manage the catalog.
    let denied = cake_service::create_cake(&state, &client, cake_request("Nope", "Classic", 1, None)).await;
    assert!(matches!(denied, Err(AppError::Forbidden)));

    let velvet = cake_service::create_cake(&state, &admin, cake_request("Red Velvet", "Special", 6, Some(4.5)))
        .await?
        .data
        .expect("cake");
    cake_service::create_cake(&state, &admin, cake_request("Chocolate Delight", "Chocolate", 20, Some(4.8))).await?;
    assert_eq!(velvet.status, CakeStatus::Available);

    // Catalog filtering goes through the same view functions as the client.
    let listed = cake_service::list_cakes(
        &state,
        CakeQuery {
            q: Some("choc".into()),
            category: Some("All".into()),
            ..Default::default()
        },
    )
    .await?;
    let names: Vec<String> = listed.data.expect("cakes").items.into_iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["Chocolate Delight".to_string()]);

    let home = storefront_service::home_feed(&state, HomeQuery { limit: Some(1) })
        .await?
        .data
        .expect("feed");
    assert_eq!(home.new_arrivals[0].name, "Chocolate Delight");
    assert_eq!(home.popular[0].name, "Chocolate Delight");

    // 10% off 4000 is 3600 per cake.
    cart_service::add_to_cart(
        &state,
        &client,
        AddToCartRequest {
            cake_id: velvet.id,
            quantity: 2,
        },
    )
    .await?;
    let cart = cart_service::list_cart(&state, &client).await?.data.expect("cart");
    assert_eq!(cart.total_amount, 7200);

    let placed = order_service::checkout(
        &state,
        &client,
        CheckoutRequest {
            address: "12 Baker Street".into(),
            note: None,
        },
    )
    .await?
    .data
    .expect("order");
    assert_eq!(placed.order.total_amount, 7200);
    assert_eq!(placed.order.status, OrderStatus::Pending);
    assert!(placed.order.invoice_number.starts_with("INV-"));
    assert_eq!(placed.items[0].price, 3600);

    let after_checkout = cake_service::get_cake(&state, velvet.id).await?.data.expect("cake");
    assert_eq!(after_checkout.stock, 4);
    assert_eq!(after_checkout.status, CakeStatus::LowStock);

    let empty = order_service::checkout(
        &state,
        &client,
        CheckoutRequest {
            address: "12 Baker Street".into(),
            note: None,
        },
    )
    .await;
    assert!(matches!(empty, Err(AppError::BadRequest(_))));

    // Cancelling restocks and is final.
    order_service::cancel_order(&state, &client, placed.order.id).await?;
    let restocked = cake_service::get_cake(&state, velvet.id).await?.data.expect("cake");
    assert_eq!(restocked.stock, 6);
    assert_eq!(restocked.status, CakeStatus::Available);

    let reopen = admin_service::update_order_status(
        &state,
        &admin,
        placed.order.id,
        UpdateOrderStatusRequest {
            status: OrderStatus::Processing,
        },
    )
    .await;
    assert!(matches!(reopen, Err(AppError::BadRequest(_))));

    // Inventory: stale expectations are rejected with the current quantity.
    let butter = inventory_service::create_item(
        &state,
        &admin,
        CreateInventoryItemRequest {
            ingredient: "Butter".into(),
            quantity: 6,
            unit: "kg".into(),
            category: String::new(),
        },
    )
    .await?
    .data
    .expect("item");
    assert_eq!(butter.category, "General");
    assert!(!butter.low_stock);

    let stale = inventory_service::adjust_quantity(
        &state,
        &admin,
        butter.id,
        QuantityAdjustRequest {
            delta: -1,
            expected_quantity: Some(9),
        },
    )
    .await;
    assert!(matches!(stale, Err(AppError::Conflict(msg)) if msg.contains('6')));

    let adjusted = inventory_service::adjust_quantity(
        &state,
        &admin,
        butter.id,
        QuantityAdjustRequest {
            delta: -2,
            expected_quantity: Some(6),
        },
    )
    .await?
    .data
    .expect("item");
    assert_eq!(adjusted.quantity, 4);
    assert!(adjusted.low_stock);

    let negative = inventory_service::adjust_quantity(
        &state,
        &admin,
        butter.id,
        QuantityAdjustRequest {
            delta: -5,
            expected_quantity: None,
        },
    )
    .await;
    assert!(matches!(negative, Err(AppError::BadRequest(_))));

    let listing = inventory_service::list_items(&state, &admin, InventoryQuery { q: Some("dairy".into()) }).await?;
    assert_eq!(listing.meta.as_ref().and_then(|m| m.low_stock), Some(1));
    assert!(listing.data.expect("items").items.is_empty());

    let stats = admin_service::dashboard(&state, &admin).await?.data.expect("stats");
    assert_eq!(stats.total_cakes, 2);
    assert_eq!(stats.low_stock_cakes, 0);
    assert_eq!(stats.inventory_items, 1);
    assert_eq!(stats.inventory_low_stock, 1);
    assert_eq!(stats.pending_orders, 0);
    assert_eq!(stats.total_users, 2);

    Ok(())
}

fn cake_request(name: &str, category: &str, stock: i32, rating: Option<f64>) -> CreateCakeRequest {
    CreateCakeRequest {
        name: name.to_string(),
        description: None,
        price: 4000,
        category: category.to_string(),
        images: vec![format!("https://images.example.com/{}.jpg", name.to_lowercase().replace(' ', "-"))],
        stock,
        rating,
        discount_percent: Some(10),
    }
}

async fn setup_state(database_url: &str) -> anyhow::Result<AppState> {
    let orm = create_orm_conn(database_url).await?;
    run_migrations(&orm).await?;

    // Clean tables between runs
    let backend = orm.get_database_backend();
    orm.execute(Statement::from_string(
        backend,
        "TRUNCATE TABLE order_items, orders, cart_items, favorites, audit_logs, inventory_items, banners, categories, cakes, users RESTART IDENTITY CASCADE",
    ))
    .await?;

    let config = AppConfig {
        database_url: database_url.to_string(),
        host: "127.0.0.1".into(),
        port: 0,
        jwt_secret: "test-secret".into(),
        jwt_ttl_hours: 1,
        cors_allow_origin: None,
    };
    Ok(AppState::new(orm, config))
}

async fn create_user(state: &AppState, role: Role, email: &str) -> anyhow::Result<Uuid> {
    let user = UserActive {
        id: Set(Uuid::new_v4()),
        email: Set(email.to_string()),
        password_hash: Set("dummy".into()),
        role: Set(role.as_str().to_string()),
        phone: Set(String::new()),
        address: Set(String::new()),
        avatar_url: Set(String::new()),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    Ok(user.id)
}

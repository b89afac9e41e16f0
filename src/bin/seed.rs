use bakery_storefront_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    entity::{
        banners::{ActiveModel as BannerActive, Entity as Banners},
        cakes::{ActiveModel as CakeActive, Column as CakeCol, Entity as Cakes},
        categories::{ActiveModel as CategoryActive, Column as CategoryCol, Entity as Categories},
        inventory_items::{
            ActiveModel as InventoryActive, Column as InventoryCol, Entity as InventoryItems,
        },
        users::{Column as UserCol, Entity as Users},
    },
    inventory::is_low_stock,
    models::{CakeStatus, Role},
    services::auth_service::{NewAccount, create_account},
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, Set,
};
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    run_migrations(&orm).await?;

    let admin_id = ensure_user(&orm, "admin@example.com", "admin123", Role::Admin).await?;
    let user_id = ensure_user(&orm, "user@example.com", "user123", Role::Client).await?;
    seed_categories(&orm).await?;
    seed_cakes(&orm).await?;
    seed_banners(&orm).await?;
    seed_inventory(&orm).await?;

    println!("Seed completed. Admin ID: {admin_id}, User ID: {user_id}");
    Ok(())
}

async fn ensure_user(
    orm: &DatabaseConnection,
    email: &str,
    password: &str,
    role: Role,
) -> anyhow::Result<Uuid> {
    if let Some(existing) = Users::find()
        .filter(UserCol::Email.eq(email))
        .one(orm)
        .await?
    {
        return Ok(existing.id);
    }

    let user = create_account(
        orm,
        NewAccount {
            email: email.to_string(),
            password: password.to_string(),
            role,
            phone: String::new(),
            address: String::new(),
            avatar_url: String::new(),
        },
    )
    .await?;

    println!("Ensured user {email} (role={})", role.as_str());
    Ok(user.id)
}

async fn seed_categories(orm: &DatabaseConnection) -> anyhow::Result<()> {
    let categories = [
        ("Chocolate", "https://img.icons8.com/color/96/chocolate-bar.png"),
        ("Fruit", "https://img.icons8.com/color/96/strawberry.png"),
        ("Classic", "https://img.icons8.com/color/96/cake.png"),
        ("Special", "https://img.icons8.com/color/96/birthday-cake.png"),
    ];

    for (name, icon_url) in categories {
        let exists = Categories::find()
            .filter(CategoryCol::Name.eq(name))
            .one(orm)
            .await?
            .is_some();
        if exists {
            continue;
        }
        CategoryActive {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            icon_url: Set(icon_url.to_string()),
            created_at: NotSet,
        }
        .insert(orm)
        .await?;
    }

    println!("Seeded categories");
    Ok(())
}

async fn seed_cakes(orm: &DatabaseConnection) -> anyhow::Result<()> {
    // (name, price in cents, category, image, stock, rating, discount)
    let cakes = [
        (
            "Chocolate Delight",
            4500,
            "Chocolate",
            "https://images.pexels.com/photos/291528/pexels-photo-291528.jpeg",
            20,
            Some(4.8),
            None,
        ),
        (
            "Strawberry Dream",
            3800,
            "Fruit",
            "https://images.pexels.com/photos/1120970/pexels-photo-1120970.jpeg",
            12,
            Some(4.5),
            Some(10),
        ),
        (
            "Vanilla Classic",
            3500,
            "Classic",
            "https://images.pexels.com/photos/140831/pexels-photo-140831.jpeg",
            3,
            Some(4.2),
            None,
        ),
        (
            "Red Velvet",
            4200,
            "Special",
            "https://images.pexels.com/photos/1721934/pexels-photo-1721934.jpeg",
            0,
            None,
            Some(15),
        ),
    ];

    for (name, price, category, image, stock, rating, discount) in cakes {
        let exists = Cakes::find()
            .filter(CakeCol::Name.eq(name))
            .one(orm)
            .await?
            .is_some();
        if exists {
            continue;
        }
        CakeActive {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            description: Set(None),
            price: Set(price),
            category: Set(category.to_string()),
            images: Set(serde_json::json!([image])),
            status: Set(CakeStatus::from_stock(stock).as_str().to_string()),
            stock: Set(stock),
            rating: Set(rating),
            discount_percent: Set(discount),
            deleted: Set(false),
            created_at: NotSet,
        }
        .insert(orm)
        .await?;
    }

    println!("Seeded cakes");
    Ok(())
}

async fn seed_banners(orm: &DatabaseConnection) -> anyhow::Result<()> {
    if Banners::find().count(orm).await? > 0 {
        return Ok(());
    }

    BannerActive {
        id: Set(Uuid::new_v4()),
        image_url: Set("https://images.pexels.com/photos/1854652/pexels-photo-1854652.jpeg".into()),
        title: Set("Weekend Special".into()),
        discount: Set("40%".into()),
        deleted: Set(false),
        created_at: NotSet,
    }
    .insert(orm)
    .await?;

    println!("Seeded banners");
    Ok(())
}

async fn seed_inventory(orm: &DatabaseConnection) -> anyhow::Result<()> {
    let items = [
        ("All-Purpose Flour", 25, "kg", "Baking"),
        ("Granulated Sugar", 18, "kg", "Baking"),
        ("Cocoa Powder", 3, "kg", "Flavoring"),
        ("Fresh Eggs", 120, "pcs", "Dairy"),
        ("Butter", 2, "kg", "Dairy"),
        ("Vanilla Extract", 8, "bottles", "Flavoring"),
        ("Heavy Cream", 5, "liters", "Dairy"),
        ("Strawberries", 1, "kg", "Fruit"),
    ];

    for (ingredient, quantity, unit, category) in items {
        let exists = InventoryItems::find()
            .filter(InventoryCol::Ingredient.eq(ingredient))
            .one(orm)
            .await?
            .is_some();
        if exists {
            continue;
        }
        InventoryActive {
            id: Set(Uuid::new_v4()),
            ingredient: Set(ingredient.to_string()),
            quantity: Set(quantity),
            unit: Set(unit.to_string()),
            category: Set(category.to_string()),
            low_stock: Set(is_low_stock(quantity)),
            created_at: NotSet,
        }
        .insert(orm)
        .await?;
    }

    println!("Seeded inventory");
    Ok(())
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    entity::{banners, cakes, categories, favorites, inventory_items, order_items, orders, users},
    inventory::LOW_STOCK_THRESHOLD,
};

/// Shown when a cake has no images.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/150";

pub const DEFAULT_CATEGORY: &str = "Uncategorized";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Client,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Client => "client",
        }
    }

    /// Anything that is not exactly `admin` is a client.
    pub fn from_label(label: &str) -> Self {
        if label == "admin" { Role::Admin } else { Role::Client }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
    pub phone: String,
    pub address: String,
    pub avatar_url: String,
    pub created_at: DateTime<Utc>,
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            role: Role::from_label(&model.role),
            phone: model.phone,
            address: model.address,
            avatar_url: model.avatar_url,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum CakeStatus {
    Available,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl CakeStatus {
    /// Stock is the source of truth; status is always derived from it.
    pub fn from_stock(stock: i32) -> Self {
        if stock <= 0 {
            CakeStatus::OutOfStock
        } else if stock < LOW_STOCK_THRESHOLD {
            CakeStatus::LowStock
        } else {
            CakeStatus::Available
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CakeStatus::Available => "Available",
            CakeStatus::LowStock => "Low Stock",
            CakeStatus::OutOfStock => "Out of Stock",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Cake {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// Minor currency units.
    pub price: i64,
    pub category: String,
    pub images: Vec<String>,
    pub status: CakeStatus,
    pub stock: i32,
    pub rating: Option<f64>,
    pub discount_percent: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl Cake {
    pub fn thumbnail(&self) -> &str {
        self.images
            .first()
            .map(String::as_str)
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    pub fn is_available(&self) -> bool {
        self.status != CakeStatus::OutOfStock && self.stock > 0
    }

    pub fn rating_or_zero(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }

    /// Unit price after discount, rounded down.
    pub fn final_price(&self) -> i64 {
        match self.discount_percent {
            Some(discount) if discount > 0 => {
                let keep = i128::from(100 - discount.min(100));
                i64::try_from(i128::from(self.price) * keep / 100).unwrap_or(self.price)
            }
            _ => self.price,
        }
    }

    /// Discounted price times `quantity`, `None` when it does not fit in an `i64`.
    pub fn line_total(&self, quantity: i32) -> Option<i64> {
        self.final_price().checked_mul(i64::from(quantity))
    }
}

impl From<cakes::Model> for Cake {
    fn from(model: cakes::Model) -> Self {
        let stock = model.stock.max(0);
        let status = CakeStatus::from_stock(stock);
        if status.as_str() != model.status {
            tracing::debug!(
                cake_id = %model.id,
                stored = %model.status,
                derived = status.as_str(),
                "cake status out of sync with stock"
            );
        }
        let images = serde_json::from_value::<Vec<String>>(model.images).unwrap_or_default();
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price.max(0),
            category: if model.category.is_empty() {
                DEFAULT_CATEGORY.to_string()
            } else {
                model.category
            },
            images,
            status,
            stock,
            rating: model.rating.filter(|r| r.is_finite() && *r >= 0.0),
            discount_percent: model.discount_percent.map(|d| d.clamp(0, 100)),
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub icon_url: String,
    pub created_at: DateTime<Utc>,
}

impl From<categories::Model> for Category {
    fn from(model: categories::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            icon_url: model.icon_url,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Banner {
    pub id: Uuid,
    pub image_url: String,
    pub title: String,
    pub discount: String,
    pub created_at: DateTime<Utc>,
}

impl From<banners::Model> for Banner {
    fn from(model: banners::Model) -> Self {
        Self {
            id: model.id,
            image_url: model.image_url,
            title: model.title,
            discount: model.discount,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct InventoryItem {
    pub id: Uuid,
    pub ingredient: String,
    pub quantity: i32,
    pub unit: String,
    pub category: String,
    pub low_stock: bool,
    pub created_at: DateTime<Utc>,
}

impl From<inventory_items::Model> for InventoryItem {
    fn from(model: inventory_items::Model) -> Self {
        Self {
            id: model.id,
            ingredient: model.ingredient,
            quantity: model.quantity,
            unit: model.unit,
            category: model.category,
            low_stock: model.low_stock,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Favorite {
    pub id: Uuid,
    pub cake_id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<favorites::Model> for Favorite {
    fn from(model: favorites::Model) -> Self {
        Self {
            id: model.id,
            cake_id: model.cake_id,
            user_id: model.user_id,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Processing,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "pending" => Some(OrderStatus::Pending),
            "processing" => Some(OrderStatus::Processing),
            "completed" => Some(OrderStatus::Completed),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    pub fn is_final(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Order {
    pub id: Uuid,
    pub user_id: Uuid,
    pub total_amount: i64,
    pub status: OrderStatus,
    pub invoice_number: String,
    pub address: String,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<orders::Model> for Order {
    fn from(model: orders::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            total_amount: model.total_amount,
            // Only this crate writes the column, so an unknown label means a manual edit.
            status: OrderStatus::parse(&model.status).unwrap_or(OrderStatus::Pending),
            invoice_number: model.invoice_number,
            address: model.address,
            note: model.note,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct OrderItem {
    pub id: Uuid,
    pub order_id: Uuid,
    pub cake_id: Uuid,
    pub quantity: i32,
    pub price: i64,
    pub created_at: DateTime<Utc>,
}

impl From<order_items::Model> for OrderItem {
    fn from(model: order_items::Model) -> Self {
        Self {
            id: model.id,
            order_id: model.order_id,
            cake_id: model.cake_id,
            quantity: model.quantity,
            price: model.price,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::InventoryItem;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateInventoryItemRequest {
    pub ingredient: String,
    pub quantity: i32,
    pub unit: String,
    #[serde(default)]
    pub category: String,
}

#[derive(Debug, Deserialize, ToSchema, Default)]
pub struct UpdateInventoryItemRequest {
    pub ingredient: Option<String>,
    pub quantity: Option<i32>,
    pub unit: Option<String>,
    pub category: Option<String>,
}

/// `expected_quantity` is the value the client last saw; when present the
/// change is rejected if the stored quantity moved in the meantime.
#[derive(Debug, Deserialize, ToSchema)]
pub struct QuantityAdjustRequest {
    pub delta: i32,
    pub expected_quantity: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct InventoryList {
    #[schema(value_type = Vec<InventoryItem>)]
    pub items: Vec<InventoryItem>,
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::Cake;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddToCartRequest {
    pub cake_id: Uuid,
    pub quantity: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartList {
    pub items: Vec<CartItemDto>,
    /// Sum of discounted line totals.
    pub total_amount: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartItemDto {
    pub id: Uuid,
    pub cake: Cake,
    /// First cake image, or a placeholder.
    pub thumbnail: String,
    pub quantity: i32,
    pub line_total: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartItemView {
    pub id: Uuid,
    pub cake_id: Uuid,
    pub quantity: i32,
}

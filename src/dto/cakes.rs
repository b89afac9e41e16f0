use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Cake;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCakeRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: i64,
    pub category: String,
    /// Already-hosted image URLs, thumbnail first.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub stock: i32,
    pub rating: Option<f64>,
    pub discount_percent: Option<i32>,
}

/// Stock is changed through the stock endpoint only.
#[derive(Debug, Deserialize, ToSchema, Default)]
pub struct UpdateCakeRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub category: Option<String>,
    pub images: Option<Vec<String>>,
    pub rating: Option<f64>,
    pub discount_percent: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct StockAdjustRequest {
    pub delta: i32,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct CakeList {
    #[schema(value_type = Vec<Cake>)]
    pub items: Vec<Cake>,
}

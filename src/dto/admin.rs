use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Role, User};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    #[serde(default = "default_role")]
    pub role: Role,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub avatar_url: String,
}

fn default_role() -> Role {
    Role::Client
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserList {
    pub items: Vec<User>,
}

#[derive(Debug, Serialize, ToSchema, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_cakes: usize,
    pub low_stock_cakes: usize,
    pub out_of_stock_cakes: usize,
    pub inventory_items: usize,
    pub inventory_low_stock: usize,
    pub pending_orders: u64,
    pub total_users: u64,
}

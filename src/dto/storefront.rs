use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Banner, Cake, Category};

/// Everything the client home screen renders.
#[derive(Debug, Serialize, ToSchema)]
pub struct HomeFeed {
    pub banners: Vec<Banner>,
    pub categories: Vec<Category>,
    pub new_arrivals: Vec<Cake>,
    pub popular: Vec<Cake>,
}

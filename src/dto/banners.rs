use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Banner;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBannerRequest {
    pub image_url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub discount: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct BannerList {
    #[schema(value_type = Vec<Banner>)]
    pub items: Vec<Banner>,
}

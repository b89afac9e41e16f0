use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::Cake;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct AddFavoriteRequest {
    pub cake_id: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct FavoriteCakeList {
    #[schema(value_type = Vec<Cake>)]
    pub items: Vec<Cake>,
}

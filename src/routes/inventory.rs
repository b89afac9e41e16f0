use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, patch, put},
};
use uuid::Uuid;

use crate::{
    dto::inventory::{
        CreateInventoryItemRequest, InventoryList, QuantityAdjustRequest,
        UpdateInventoryItemRequest,
    },
    error::AppResult,
    middleware::auth::AuthUser,
    models::InventoryItem,
    response::ApiResponse,
    routes::params::InventoryQuery,
    services::inventory_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/{id}", put(update_item).delete(delete_item))
        .route("/{id}/quantity", patch(adjust_quantity))
}

#[utoipa::path(
    get,
    path = "/api/admin/inventory",
    params(
        ("q" = Option<String>, Query, description = "Search ingredient, category or unit")
    ),
    responses(
        (status = 200, description = "Inventory, `meta.low_stock` counts every item below threshold", body = ApiResponse<InventoryList>),
        (status = 403, description = "Forbidden")
    ),
    security(("bearer_auth" = [])),
    tag = "Inventory"
)]
pub async fn list_items(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<InventoryQuery>,
) -> AppResult<Json<ApiResponse<InventoryList>>> {
    let resp = inventory_service::list_items(&state, &user, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/inventory",
    request_body = CreateInventoryItemRequest,
    responses(
        (status = 200, description = "Item added", body = ApiResponse<InventoryItem>),
        (status = 400, description = "Validation failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Inventory"
)]
pub async fn create_item(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateInventoryItemRequest>,
) -> AppResult<Json<ApiResponse<InventoryItem>>> {
    let resp = inventory_service::create_item(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/admin/inventory/{id}",
    params(("id" = Uuid, Path, description = "Inventory item ID")),
    request_body = UpdateInventoryItemRequest,
    responses(
        (status = 200, description = "Item updated", body = ApiResponse<InventoryItem>),
        (status = 404, description = "Item not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Inventory"
)]
pub async fn update_item(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateInventoryItemRequest>,
) -> AppResult<Json<ApiResponse<InventoryItem>>> {
    let resp = inventory_service::update_item(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/admin/inventory/{id}/quantity",
    params(("id" = Uuid, Path, description = "Inventory item ID")),
    request_body = QuantityAdjustRequest,
    responses(
        (status = 200, description = "Quantity adjusted", body = ApiResponse<InventoryItem>),
        (status = 400, description = "Zero delta or negative quantity"),
        (status = 409, description = "Quantity changed concurrently, resync from the message")
    ),
    security(("bearer_auth" = [])),
    tag = "Inventory"
)]
pub async fn adjust_quantity(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<QuantityAdjustRequest>,
) -> AppResult<Json<ApiResponse<InventoryItem>>> {
    let resp = inventory_service::adjust_quantity(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/admin/inventory/{id}",
    params(("id" = Uuid, Path, description = "Inventory item ID")),
    responses(
        (status = 200, description = "Item deleted", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Item not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Inventory"
)]
pub async fn delete_item(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = inventory_service::delete_item(&state, &user, id).await?;
    Ok(Json(resp))
}

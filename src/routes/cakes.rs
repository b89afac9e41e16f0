use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, patch},
};
use uuid::Uuid;

use crate::{
    dto::cakes::{CakeList, CreateCakeRequest, StockAdjustRequest, UpdateCakeRequest},
    error::AppResult,
    middleware::auth::AuthUser,
    models::Cake,
    response::ApiResponse,
    routes::params::CakeQuery,
    services::cake_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_cakes).post(create_cake))
        .route("/{id}", get(get_cake).put(update_cake).delete(delete_cake))
        .route("/{id}/stock", patch(adjust_stock))
}

#[utoipa::path(
    get,
    path = "/api/cakes",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
        ("q" = Option<String>, Query, description = "Case-insensitive name search"),
        ("category" = Option<String>, Query, description = "Exact category label, `All` for every category"),
        ("sort_by" = Option<String>, Query, description = "created_at, price, name, rating"),
        ("sort_order" = Option<String>, Query, description = "asc, desc")
    ),
    responses(
        (status = 200, description = "Filtered catalog", body = ApiResponse<CakeList>)
    ),
    tag = "Cakes"
)]
pub async fn list_cakes(
    State(state): State<AppState>,
    Query(query): Query<CakeQuery>,
) -> AppResult<Json<ApiResponse<CakeList>>> {
    let resp = cake_service::list_cakes(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/cakes/{id}",
    params(("id" = Uuid, Path, description = "Cake ID")),
    responses(
        (status = 200, description = "Get cake", body = ApiResponse<Cake>),
        (status = 404, description = "Cake not found")
    ),
    tag = "Cakes"
)]
pub async fn get_cake(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Cake>>> {
    let resp = cake_service::get_cake(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/cakes",
    request_body = CreateCakeRequest,
    responses(
        (status = 200, description = "Cake created", body = ApiResponse<Cake>),
        (status = 400, description = "Validation failed"),
        (status = 403, description = "Forbidden")
    ),
    security(("bearer_auth" = [])),
    tag = "Cakes"
)]
pub async fn create_cake(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateCakeRequest>,
) -> AppResult<Json<ApiResponse<Cake>>> {
    let resp = cake_service::create_cake(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/cakes/{id}",
    params(("id" = Uuid, Path, description = "Cake ID")),
    request_body = UpdateCakeRequest,
    responses(
        (status = 200, description = "Cake updated", body = ApiResponse<Cake>),
        (status = 404, description = "Cake not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Cakes"
)]
pub async fn update_cake(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCakeRequest>,
) -> AppResult<Json<ApiResponse<Cake>>> {
    let resp = cake_service::update_cake(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/cakes/{id}",
    params(("id" = Uuid, Path, description = "Cake ID")),
    responses(
        (status = 200, description = "Cake archived", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Cake not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Cakes"
)]
pub async fn delete_cake(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = cake_service::delete_cake(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/cakes/{id}/stock",
    params(("id" = Uuid, Path, description = "Cake ID")),
    request_body = StockAdjustRequest,
    responses(
        (status = 200, description = "Stock adjusted, status recomputed", body = ApiResponse<Cake>),
        (status = 400, description = "Zero delta or negative stock")
    ),
    security(("bearer_auth" = [])),
    tag = "Cakes"
)]
pub async fn adjust_stock(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<StockAdjustRequest>,
) -> AppResult<Json<ApiResponse<Cake>>> {
    let resp = cake_service::adjust_stock(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get},
};
use uuid::Uuid;

use crate::{
    dto::banners::{BannerList, CreateBannerRequest},
    error::AppResult,
    middleware::auth::AuthUser,
    models::Banner,
    response::ApiResponse,
    services::banner_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_banners).post(create_banner))
        .route("/{id}", delete(delete_banner))
}

#[utoipa::path(
    get,
    path = "/api/banners",
    responses(
        (status = 200, description = "Active banners, newest first", body = ApiResponse<BannerList>)
    ),
    tag = "Banners"
)]
pub async fn list_banners(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<BannerList>>> {
    let resp = banner_service::list_banners(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/banners",
    request_body = CreateBannerRequest,
    responses(
        (status = 200, description = "Banner created", body = ApiResponse<Banner>),
        (status = 403, description = "Forbidden")
    ),
    security(("bearer_auth" = [])),
    tag = "Banners"
)]
pub async fn create_banner(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateBannerRequest>,
) -> AppResult<Json<ApiResponse<Banner>>> {
    let resp = banner_service::create_banner(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/banners/{id}",
    params(("id" = Uuid, Path, description = "Banner ID")),
    responses(
        (status = 200, description = "Banner hidden", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Banner not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Banners"
)]
pub async fn delete_banner(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = banner_service::delete_banner(&state, &user, id).await?;
    Ok(Json(resp))
}

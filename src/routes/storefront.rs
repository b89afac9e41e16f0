use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};

use crate::{
    dto::storefront::HomeFeed, error::AppResult, response::ApiResponse,
    routes::params::HomeQuery, services::storefront_service, state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/home", get(home))
}

#[utoipa::path(
    get,
    path = "/api/storefront/home",
    params(
        ("limit" = Option<usize>, Query, description = "Cakes per section, default 8")
    ),
    responses(
        (status = 200, description = "Banners, categories, new arrivals and popular cakes", body = ApiResponse<HomeFeed>)
    ),
    tag = "Storefront"
)]
pub async fn home(
    State(state): State<AppState>,
    Query(query): Query<HomeQuery>,
) -> AppResult<Json<ApiResponse<HomeFeed>>> {
    let resp = storefront_service::home_feed(&state, query).await?;
    Ok(Json(resp))
}

use crate::{
    catalog::{self, DEFAULT_FEED_LIMIT},
    dto::storefront::HomeFeed,
    error::AppResult,
    response::{ApiResponse, Meta},
    routes::params::HomeQuery,
    services::{banner_service, cake_service, category_service},
    state::AppState,
};

const MAX_FEED_LIMIT: usize = 50;

/// A failing cake fetch degrades to an empty catalog so the screen still
/// renders banners and categories.
pub async fn home_feed(state: &AppState, query: HomeQuery) -> AppResult<ApiResponse<HomeFeed>> {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_FEED_LIMIT)
        .clamp(1, MAX_FEED_LIMIT);

    let (cakes, banners, categories) = tokio::join!(
        cake_service::fetch_cakes(&state.orm),
        banner_service::fetch_banners(&state.orm),
        category_service::fetch_categories(&state.orm),
    );
    let cakes = cakes.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "cake fetch failed, serving empty catalog");
        Vec::new()
    });

    let feed = HomeFeed {
        banners: banners?,
        categories: categories?,
        new_arrivals: catalog::recent_arrivals(&cakes, limit),
        popular: catalog::top_rated(&cakes, limit),
    };
    let meta = Meta::total(catalog::count_total(&cakes));
    Ok(ApiResponse::success("Home", feed, Some(meta)))
}

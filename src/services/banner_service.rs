use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use sea_orm::sea_query::Expr;
use uuid::Uuid;

use crate::{
    audit,
    dto::banners::{BannerList, CreateBannerRequest},
    entity::banners::{ActiveModel, Column, Entity as Banners},
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::Banner,
    response::{ApiResponse, Meta},
    state::AppState,
    validation::validate_required,
};

/// Live banners, newest first.
pub async fn fetch_banners<C: ConnectionTrait>(conn: &C) -> AppResult<Vec<Banner>> {
    let items = Banners::find()
        .filter(Column::Deleted.eq(false))
        .order_by_desc(Column::CreatedAt)
        .all(conn)
        .await?
        .into_iter()
        .map(Banner::from)
        .collect();
    Ok(items)
}

pub async fn list_banners(state: &AppState) -> AppResult<ApiResponse<BannerList>> {
    let items = fetch_banners(&state.orm).await?;
    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Banners", BannerList { items }, Some(meta)))
}

pub async fn create_banner(
    state: &AppState,
    user: &AuthUser,
    payload: CreateBannerRequest,
) -> AppResult<ApiResponse<Banner>> {
    ensure_admin(user)?;
    validate_required("image_url", &payload.image_url)?;

    let banner = ActiveModel {
        id: Set(Uuid::new_v4()),
        image_url: Set(payload.image_url.trim().to_string()),
        title: Set(payload.title.trim().to_string()),
        discount: Set(payload.discount.trim().to_string()),
        deleted: Set(false),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    audit::record(
        &state.orm,
        Some(user.user_id),
        "banner_create",
        "banners",
        serde_json::json!({ "banner_id": banner.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Banner created",
        Banner::from(banner),
        Some(Meta::empty()),
    ))
}

pub async fn delete_banner(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let result = Banners::update_many()
        .col_expr(Column::Deleted, Expr::value(true))
        .filter(Column::Id.eq(id))
        .filter(Column::Deleted.eq(false))
        .exec(&state.orm)
        .await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit::record(
        &state.orm,
        Some(user.user_id),
        "banner_delete",
        "banners",
        serde_json::json!({ "banner_id": id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

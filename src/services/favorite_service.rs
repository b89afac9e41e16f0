use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::{
    audit,
    dto::favorites::{AddFavoriteRequest, FavoriteCakeList},
    entity::{
        cakes::{Column as CakeCol, Entity as Cakes},
        favorites::{ActiveModel as FavoriteActive, Column as FavCol, Entity as Favorites},
    },
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::{Cake, Favorite},
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    services::cake_service::find_visible_cake,
    state::AppState,
};

/// Favorites pointing at archived cakes are hidden, not removed.
pub async fn list_favorites(
    state: &AppState,
    user: &AuthUser,
    pagination: Pagination,
) -> AppResult<ApiResponse<FavoriteCakeList>> {
    let (page, limit, offset) = pagination.normalize();
    let finder = Cakes::find()
        .inner_join(Favorites)
        .filter(FavCol::UserId.eq(user.user_id))
        .filter(CakeCol::Deleted.eq(false));

    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .order_by_desc(FavCol::CreatedAt)
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Cake::from)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("OK", FavoriteCakeList { items }, Some(meta)))
}

pub async fn add_favorite(
    state: &AppState,
    user: &AuthUser,
    payload: AddFavoriteRequest,
) -> AppResult<ApiResponse<Favorite>> {
    find_visible_cake(&state.orm, payload.cake_id)
        .await
        .map_err(|err| match err {
            AppError::NotFound => AppError::BadRequest("Cake not found".into()),
            other => other,
        })?;

    let existing = Favorites::find()
        .filter(FavCol::UserId.eq(user.user_id))
        .filter(FavCol::CakeId.eq(payload.cake_id))
        .one(&state.orm)
        .await?;

    let favorite = match existing {
        Some(fav) => fav,
        None => {
            FavoriteActive {
                id: Set(Uuid::new_v4()),
                user_id: Set(user.user_id),
                cake_id: Set(payload.cake_id),
                created_at: NotSet,
            }
            .insert(&state.orm)
            .await?
        }
    };

    audit::record(
        &state.orm,
        Some(user.user_id),
        "favorite_add",
        "favorites",
        serde_json::json!({ "cake_id": payload.cake_id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Added to favorites",
        Favorite::from(favorite),
        Some(Meta::empty()),
    ))
}

pub async fn remove_favorite(
    state: &AppState,
    user: &AuthUser,
    cake_id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = Favorites::delete_many()
        .filter(FavCol::UserId.eq(user.user_id))
        .filter(FavCol::CakeId.eq(cake_id))
        .exec(&state.orm)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit::record(
        &state.orm,
        Some(user.user_id),
        "favorite_remove",
        "favorites",
        serde_json::json!({ "cake_id": cake_id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Removed from favorites",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::{
    audit,
    dto::cart::{AddToCartRequest, CartItemDto, CartItemView, CartList},
    entity::{
        cakes::Entity as Cakes,
        cart_items::{ActiveModel as CartActive, Column as CartCol, Entity as CartItems},
    },
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::Cake,
    response::{ApiResponse, Meta},
    services::cake_service::find_visible_cake,
    state::AppState,
};

pub async fn list_cart(state: &AppState, user: &AuthUser) -> AppResult<ApiResponse<CartList>> {
    let rows = CartItems::find()
        .filter(CartCol::UserId.eq(user.user_id))
        .order_by_desc(CartCol::CreatedAt)
        .find_also_related(Cakes)
        .all(&state.orm)
        .await?;

    let mut items = Vec::with_capacity(rows.len());
    let mut total_amount: i64 = 0;
    for (item, cake) in rows {
        let Some(cake) = cake.filter(|c| !c.deleted).map(Cake::from) else {
            continue;
        };
        let line_total = cake
            .line_total(item.quantity)
            .ok_or_else(amount_too_large)?;
        total_amount = total_amount
            .checked_add(line_total)
            .ok_or_else(amount_too_large)?;
        items.push(CartItemDto {
            id: item.id,
            line_total,
            thumbnail: cake.thumbnail().to_string(),
            cake,
            quantity: item.quantity,
        });
    }

    let meta = Meta::total(items.len());
    Ok(ApiResponse::success(
        "OK",
        CartList {
            items,
            total_amount,
        },
        Some(meta),
    ))
}

/// Sets the quantity for a cake, creating the line when missing.
pub async fn add_to_cart(
    state: &AppState,
    user: &AuthUser,
    payload: AddToCartRequest,
) -> AppResult<ApiResponse<CartItemView>> {
    if payload.quantity <= 0 {
        return Err(AppError::BadRequest(
            "quantity must be greater than 0".to_string(),
        ));
    }

    let cake = find_visible_cake(&state.orm, payload.cake_id)
        .await
        .map_err(|err| match err {
            AppError::NotFound => AppError::BadRequest("cake not found".to_string()),
            other => other,
        })?;
    if !cake.is_available() {
        return Err(AppError::BadRequest(format!("{} is out of stock", cake.name)));
    }
    if payload.quantity > cake.stock {
        return Err(AppError::BadRequest(format!(
            "only {} left for {}",
            cake.stock, cake.name
        )));
    }

    let exist = CartItems::find()
        .filter(CartCol::UserId.eq(user.user_id))
        .filter(CartCol::CakeId.eq(payload.cake_id))
        .one(&state.orm)
        .await?;

    let cart_item = match exist {
        Some(item) => {
            let mut active: CartActive = item.into();
            active.quantity = Set(payload.quantity);
            active.update(&state.orm).await?
        }
        None => {
            CartActive {
                id: Set(Uuid::new_v4()),
                user_id: Set(user.user_id),
                cake_id: Set(payload.cake_id),
                quantity: Set(payload.quantity),
                created_at: NotSet,
            }
            .insert(&state.orm)
            .await?
        }
    };

    audit::record(
        &state.orm,
        Some(user.user_id),
        "cart_update",
        "cart_items",
        serde_json::json!({ "cake_id": payload.cake_id, "quantity": payload.quantity }),
    )
    .await;

    Ok(ApiResponse::success(
        "OK",
        CartItemView {
            id: cart_item.id,
            cake_id: cart_item.cake_id,
            quantity: cart_item.quantity,
        },
        Some(Meta::empty()),
    ))
}

pub async fn remove_from_cart(
    state: &AppState,
    user: &AuthUser,
    cake_id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = CartItems::delete_many()
        .filter(CartCol::CakeId.eq(cake_id))
        .filter(CartCol::UserId.eq(user.user_id))
        .exec(&state.orm)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit::record(
        &state.orm,
        Some(user.user_id),
        "cart_remove",
        "cart_items",
        serde_json::json!({ "cake_id": cake_id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Removed from cart",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

fn amount_too_large() -> AppError {
    AppError::BadRequest("Cart total is too large".into())
}

use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use sea_orm::sea_query::Expr;
use uuid::Uuid;

use crate::{
    audit, catalog,
    dto::inventory::{
        CreateInventoryItemRequest, InventoryList, QuantityAdjustRequest,
        UpdateInventoryItemRequest,
    },
    entity::inventory_items::{ActiveModel, Column, Entity as InventoryItems},
    error::{AppError, AppResult},
    inventory::{StockProjection, filter_inventory, is_low_stock, normalize_category},
    middleware::auth::{AuthUser, ensure_admin},
    models::InventoryItem,
    response::{ApiResponse, Meta},
    routes::params::InventoryQuery,
    state::AppState,
    validation::{validate_required, validate_stock},
};

/// Newest first.
pub async fn fetch_inventory<C: ConnectionTrait>(conn: &C) -> AppResult<Vec<InventoryItem>> {
    let items = InventoryItems::find()
        .order_by_desc(Column::CreatedAt)
        .all(conn)
        .await?
        .into_iter()
        .map(InventoryItem::from)
        .collect();
    Ok(items)
}

/// `meta.low_stock` counts the whole inventory, not only the matches.
pub async fn list_items(
    state: &AppState,
    user: &AuthUser,
    query: InventoryQuery,
) -> AppResult<ApiResponse<InventoryList>> {
    ensure_admin(user)?;
    let all = fetch_inventory(&state.orm).await?;
    let items = filter_inventory(&all, query.q.as_deref().unwrap_or(""));
    let meta = Meta::total(catalog::count_total(&items)).with_low_stock(catalog::count_low_stock(&all));
    Ok(ApiResponse::success("Inventory", InventoryList { items }, Some(meta)))
}

pub async fn create_item(
    state: &AppState,
    user: &AuthUser,
    payload: CreateInventoryItemRequest,
) -> AppResult<ApiResponse<InventoryItem>> {
    ensure_admin(user)?;
    validate_required("ingredient", &payload.ingredient)?;
    validate_required("unit", &payload.unit)?;
    validate_stock(payload.quantity)?;

    let item = ActiveModel {
        id: Set(Uuid::new_v4()),
        ingredient: Set(payload.ingredient.trim().to_string()),
        quantity: Set(payload.quantity),
        unit: Set(payload.unit.trim().to_string()),
        category: Set(normalize_category(&payload.category)),
        low_stock: Set(is_low_stock(payload.quantity)),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    audit::record(
        &state.orm,
        Some(user.user_id),
        "inventory_create",
        "inventory_items",
        serde_json::json!({ "item_id": item.id, "quantity": item.quantity }),
    )
    .await;

    Ok(ApiResponse::success(
        "Item added",
        InventoryItem::from(item),
        Some(Meta::empty()),
    ))
}

pub async fn update_item(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateInventoryItemRequest,
) -> AppResult<ApiResponse<InventoryItem>> {
    ensure_admin(user)?;
    let existing = InventoryItems::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    let previous = existing.quantity;

    let mut active: ActiveModel = existing.into();
    if let Some(ingredient) = payload.ingredient {
        validate_required("ingredient", &ingredient)?;
        active.ingredient = Set(ingredient.trim().to_string());
    }
    if let Some(unit) = payload.unit {
        validate_required("unit", &unit)?;
        active.unit = Set(unit.trim().to_string());
    }
    if let Some(category) = payload.category {
        active.category = Set(normalize_category(&category));
    }
    if let Some(quantity) = payload.quantity {
        let projection = StockProjection::set(previous, quantity)?;
        if !projection.is_noop() {
            active.quantity = Set(projection.projected);
            active.low_stock = Set(projection.low_stock);
        }
    }
    let item = active.update(&state.orm).await?;

    audit::record(
        &state.orm,
        Some(user.user_id),
        "inventory_update",
        "inventory_items",
        serde_json::json!({ "item_id": item.id, "quantity": item.quantity }),
    )
    .await;

    Ok(ApiResponse::success(
        "Updated",
        InventoryItem::from(item),
        Some(Meta::empty()),
    ))
}

/// Optimistic +/- on a quantity. The projected value is written only if the
/// stored quantity is still the one it was projected from; otherwise the
/// current row is re-read and reported as a conflict so the caller resyncs.
pub async fn adjust_quantity(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: QuantityAdjustRequest,
) -> AppResult<ApiResponse<InventoryItem>> {
    ensure_admin(user)?;
    let current = InventoryItems::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    if let Some(expected) = payload.expected_quantity {
        if expected != current.quantity {
            return Err(stale_quantity(current.quantity));
        }
    }

    let projection = StockProjection::project(current.quantity, payload.delta)?;
    let result = InventoryItems::update_many()
        .col_expr(Column::Quantity, Expr::value(projection.projected))
        .col_expr(Column::LowStock, Expr::value(projection.low_stock))
        .filter(Column::Id.eq(id))
        .filter(Column::Quantity.eq(projection.previous))
        .exec(&state.orm)
        .await?;

    let authoritative = InventoryItems::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    if result.rows_affected == 0 {
        tracing::info!(
            item_id = %id,
            projected = projection.projected,
            current = authoritative.quantity,
            "inventory projection rejected"
        );
        return Err(stale_quantity(authoritative.quantity));
    }

    audit::record(
        &state.orm,
        Some(user.user_id),
        "inventory_adjust",
        "inventory_items",
        serde_json::json!({ "item_id": id, "delta": payload.delta, "quantity": authoritative.quantity }),
    )
    .await;

    Ok(ApiResponse::success(
        "Inventory updated",
        InventoryItem::from(authoritative),
        Some(Meta::empty()),
    ))
}

pub async fn delete_item(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let result = InventoryItems::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit::record(
        &state.orm,
        Some(user.user_id),
        "inventory_delete",
        "inventory_items",
        serde_json::json!({ "item_id": id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

fn stale_quantity(current: i32) -> AppError {
    AppError::Conflict(format!("quantity changed, current quantity is {current}"))
}

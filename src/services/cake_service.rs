use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};
use sea_orm::sea_query::{Expr, LockType};
use uuid::Uuid;

use crate::{
    audit,
    catalog::{self, ALL_CATEGORIES},
    dto::cakes::{CakeList, CreateCakeRequest, StockAdjustRequest, UpdateCakeRequest},
    entity::cakes::{ActiveModel, Column, Entity as Cakes},
    error::{AppError, AppResult},
    inventory::StockProjection,
    middleware::auth::{AuthUser, ensure_admin},
    models::{Cake, CakeStatus, DEFAULT_CATEGORY},
    response::{ApiResponse, Meta},
    routes::params::{CakeQuery, SortOrder},
    state::AppState,
    validation::{
        validate_category_label, validate_discount, validate_price, validate_rating,
        validate_required, validate_stock,
    },
};

/// Every visible cake in insertion order. Catalog views are computed from
/// this list in memory.
pub async fn fetch_cakes<C: ConnectionTrait>(conn: &C) -> AppResult<Vec<Cake>> {
    let cakes = Cakes::find()
        .filter(Column::Deleted.eq(false))
        .order_by_asc(Column::CreatedAt)
        .order_by_asc(Column::Id)
        .all(conn)
        .await?
        .into_iter()
        .map(Cake::from)
        .collect();
    Ok(cakes)
}

pub async fn find_visible_cake<C: ConnectionTrait>(conn: &C, id: Uuid) -> AppResult<Cake> {
    Cakes::find_by_id(id)
        .filter(Column::Deleted.eq(false))
        .one(conn)
        .await?
        .map(Cake::from)
        .ok_or(AppError::NotFound)
}

pub async fn list_cakes(state: &AppState, query: CakeQuery) -> AppResult<ApiResponse<CakeList>> {
    let (page, limit, _) = query.pagination().normalize();
    let search = query.q.as_deref().map(str::trim).unwrap_or("");
    let category = query
        .category
        .as_deref()
        .filter(|c| !c.is_empty())
        .unwrap_or(ALL_CATEGORIES);

    let cakes = fetch_cakes(&state.orm).await?;
    let mut filtered = catalog::apply_filters(&cakes, category, search);
    if let Some(sort_by) = query.sort_by {
        let order = query.sort_order.unwrap_or(SortOrder::Asc);
        filtered = catalog::sort_cakes(&filtered, sort_by, order);
    }

    let total = catalog::count_total(&filtered) as i64;
    let items = catalog::paginate(&filtered, page, limit);
    tracing::debug!(search, category, total, "cake listing");

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Cakes", CakeList { items }, Some(meta)))
}

pub async fn get_cake(state: &AppState, id: Uuid) -> AppResult<ApiResponse<Cake>> {
    let cake = find_visible_cake(&state.orm, id).await?;
    Ok(ApiResponse::success("Cake", cake, None))
}

pub async fn create_cake(
    state: &AppState,
    user: &AuthUser,
    payload: CreateCakeRequest,
) -> AppResult<ApiResponse<Cake>> {
    ensure_admin(user)?;
    validate_required("name", &payload.name)?;
    validate_price(payload.price)?;
    validate_stock(payload.stock)?;
    validate_discount(payload.discount_percent)?;
    validate_rating(payload.rating)?;

    let category = match payload.category.trim() {
        "" => DEFAULT_CATEGORY.to_string(),
        label => {
            validate_category_label(label)?;
            label.to_string()
        }
    };
    let active = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name.trim().to_string()),
        description: Set(payload.description.filter(|d| !d.trim().is_empty())),
        price: Set(payload.price),
        category: Set(category),
        images: Set(images_json(payload.images)),
        status: Set(CakeStatus::from_stock(payload.stock).as_str().to_string()),
        stock: Set(payload.stock),
        rating: Set(payload.rating),
        discount_percent: Set(payload.discount_percent),
        deleted: Set(false),
        created_at: NotSet,
    };
    let cake = active.insert(&state.orm).await?;

    audit::record(
        &state.orm,
        Some(user.user_id),
        "cake_create",
        "cakes",
        serde_json::json!({ "cake_id": cake.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Cake created",
        Cake::from(cake),
        Some(Meta::empty()),
    ))
}

pub async fn update_cake(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateCakeRequest,
) -> AppResult<ApiResponse<Cake>> {
    ensure_admin(user)?;
    let existing = Cakes::find_by_id(id)
        .filter(Column::Deleted.eq(false))
        .one(&state.orm)
        .await?;
    let existing = match existing {
        Some(c) => c,
        None => return Err(AppError::NotFound),
    };

    let mut active: ActiveModel = existing.into();
    if let Some(name) = payload.name {
        validate_required("name", &name)?;
        active.name = Set(name.trim().to_string());
    }
    if let Some(description) = payload.description {
        active.description = Set(Some(description).filter(|d| !d.trim().is_empty()));
    }
    if let Some(price) = payload.price {
        validate_price(price)?;
        active.price = Set(price);
    }
    if let Some(category) = payload.category {
        validate_category_label(&category)?;
        active.category = Set(category.trim().to_string());
    }
    if let Some(images) = payload.images {
        active.images = Set(images_json(images));
    }
    if payload.rating.is_some() {
        validate_rating(payload.rating)?;
        active.rating = Set(payload.rating);
    }
    if payload.discount_percent.is_some() {
        validate_discount(payload.discount_percent)?;
        active.discount_percent = Set(payload.discount_percent);
    }

    let cake = active.update(&state.orm).await?;

    audit::record(
        &state.orm,
        Some(user.user_id),
        "cake_update",
        "cakes",
        serde_json::json!({ "cake_id": cake.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Updated",
        Cake::from(cake),
        Some(Meta::empty()),
    ))
}

/// Cakes are archived, never removed, so past orders keep their references.
pub async fn delete_cake(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let result = Cakes::update_many()
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
        "cake_delete",
        "cakes",
        serde_json::json!({ "cake_id": id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub async fn adjust_stock(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: StockAdjustRequest,
) -> AppResult<ApiResponse<Cake>> {
    ensure_admin(user)?;

    let txn = state.orm.begin().await?;
    let cake = Cakes::find_by_id(id)
        .filter(Column::Deleted.eq(false))
        .lock(LockType::Update)
        .one(&txn)
        .await?;
    let cake = match cake {
        Some(c) => c,
        None => return Err(AppError::NotFound),
    };

    let projection = StockProjection::project(cake.stock, payload.delta)?;
    let updated = write_stock(&txn, cake, projection.projected).await?;
    txn.commit().await?;

    audit::record(
        &state.orm,
        Some(user.user_id),
        "cake_stock_adjust",
        "cakes",
        serde_json::json!({ "cake_id": updated.id, "delta": payload.delta, "stock": updated.stock }),
    )
    .await;

    Ok(ApiResponse::success(
        "Stock updated",
        Cake::from(updated),
        Some(Meta::empty()),
    ))
}

/// Writes `stock` and its status mirror in one statement.
pub async fn write_stock<C: ConnectionTrait>(
    conn: &C,
    cake: crate::entity::cakes::Model,
    stock: i32,
) -> AppResult<crate::entity::cakes::Model> {
    let mut active: ActiveModel = cake.into();
    active.stock = Set(stock);
    active.status = Set(CakeStatus::from_stock(stock).as_str().to_string());
    Ok(active.update(conn).await?)
}

fn images_json(images: Vec<String>) -> serde_json::Value {
    let images: Vec<String> = images
        .into_iter()
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .collect();
    serde_json::json!(images)
}

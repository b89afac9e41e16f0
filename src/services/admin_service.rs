use sea_orm::sea_query::LockType;
use sea_orm::{
    ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    TransactionTrait,
};
use uuid::Uuid;

use crate::{
    audit, catalog,
    dto::{
        admin::{CreateUserRequest, DashboardStats, UserList},
        orders::{OrderList, OrderWithItems, UpdateOrderStatusRequest},
    },
    entity::{
        orders::{Column as OrderCol, Entity as Orders},
        users::{Column as UserCol, Entity as Users},
    },
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::{CakeStatus, OrderStatus, User},
    response::{ApiResponse, Meta},
    routes::params::{OrderListQuery, Pagination},
    services::{
        auth_service::{NewAccount, create_account},
        cake_service::fetch_cakes,
        inventory_service::fetch_inventory,
        order_service::{fetch_items, page_orders, transition},
    },
    state::AppState,
};

pub async fn list_all_orders(
    state: &AppState,
    user: &AuthUser,
    query: OrderListQuery,
) -> AppResult<ApiResponse<OrderList>> {
    ensure_admin(user)?;
    page_orders(state, Orders::find(), &query).await
}

pub async fn get_order_admin(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<OrderWithItems>> {
    ensure_admin(user)?;
    let order = Orders::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    let items = fetch_items(&state.orm, order.id).await?;

    Ok(ApiResponse::success(
        "Order found",
        OrderWithItems {
            order: order.into(),
            items,
        },
        Some(Meta::empty()),
    ))
}

pub async fn update_order_status(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateOrderStatusRequest,
) -> AppResult<ApiResponse<OrderWithItems>> {
    ensure_admin(user)?;

    let txn = state.orm.begin().await?;
    let existing = Orders::find_by_id(id)
        .lock(LockType::Update)
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound)?;

    let previous = existing.status.clone();
    let (order, items) = transition(&txn, existing, payload.status).await?;
    txn.commit().await?;

    tracing::info!(order_id = %order.id, from = %previous, to = order.status.as_str(), "order status changed");
    audit::record(
        &state.orm,
        Some(user.user_id),
        "order_status_update",
        "orders",
        serde_json::json!({ "order_id": order.id, "status": order.status.as_str() }),
    )
    .await;

    Ok(ApiResponse::success(
        "Order updated",
        OrderWithItems { order, items },
        Some(Meta::empty()),
    ))
}

pub async fn list_users(
    state: &AppState,
    user: &AuthUser,
    pagination: Pagination,
) -> AppResult<ApiResponse<UserList>> {
    ensure_admin(user)?;
    let (page, limit, offset) = pagination.normalize();

    let finder = Users::find().order_by_desc(UserCol::CreatedAt);
    let total = finder.clone().count(&state.orm).await? as i64;
    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(User::from)
        .collect();

    Ok(ApiResponse::success(
        "Users",
        UserList { items },
        Some(Meta::new(page, limit, total)),
    ))
}

pub async fn create_user(
    state: &AppState,
    user: &AuthUser,
    payload: CreateUserRequest,
) -> AppResult<ApiResponse<User>> {
    ensure_admin(user)?;
    let created = create_account(
        &state.orm,
        NewAccount {
            email: payload.email,
            password: payload.password,
            role: payload.role,
            phone: payload.phone,
            address: payload.address,
            avatar_url: payload.avatar_url,
        },
    )
    .await?;

    audit::record(
        &state.orm,
        Some(user.user_id),
        "user_create",
        "users",
        serde_json::json!({ "user_id": created.id, "role": created.role.as_str() }),
    )
    .await;

    Ok(ApiResponse::success(
        "User created",
        created,
        Some(Meta::empty()),
    ))
}

/// Widget counters for the admin home screen.
pub async fn dashboard(state: &AppState, user: &AuthUser) -> AppResult<ApiResponse<DashboardStats>> {
    ensure_admin(user)?;

    let cakes = fetch_cakes(&state.orm).await?;
    let inventory = fetch_inventory(&state.orm).await?;
    let pending_orders = Orders::find()
        .filter(OrderCol::Status.eq(OrderStatus::Pending.as_str()))
        .count(&state.orm)
        .await?;
    let total_users = Users::find().count(&state.orm).await?;

    let stats = DashboardStats {
        total_cakes: catalog::count_total(&cakes),
        low_stock_cakes: catalog::count_by_status(&cakes, CakeStatus::LowStock),
        out_of_stock_cakes: catalog::count_by_status(&cakes, CakeStatus::OutOfStock),
        inventory_items: catalog::count_total(&inventory),
        inventory_low_stock: catalog::count_low_stock(&inventory),
        pending_orders,
        total_users,
    };

    Ok(ApiResponse::success("Dashboard", stats, None))
}

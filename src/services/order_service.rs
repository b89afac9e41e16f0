use std::collections::HashMap;

use chrono::Utc;
use sea_orm::sea_query::LockType;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, Condition, ConnectionTrait, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::{
    audit,
    dto::orders::{CheckoutRequest, OrderList, OrderWithItems},
    entity::{
        cakes::{Column as CakeCol, Entity as Cakes},
        cart_items::{Column as CartCol, Entity as CartItems},
        order_items::{ActiveModel as OrderItemActive, Column as OrderItemCol, Entity as OrderItems},
        orders::{ActiveModel as OrderActive, Column as OrderCol, Entity as Orders},
    },
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::{Cake, Order, OrderItem, OrderStatus},
    response::{ApiResponse, Meta},
    routes::params::{OrderListQuery, SortOrder},
    services::cake_service::write_stock,
    state::AppState,
    validation::validate_required,
};

pub async fn list_orders(
    state: &AppState,
    user: &AuthUser,
    query: OrderListQuery,
) -> AppResult<ApiResponse<OrderList>> {
    let finder = Orders::find().filter(OrderCol::UserId.eq(user.user_id));
    page_orders(state, finder, &query).await
}

/// Shared by the client and admin listings; `finder` carries the ownership scope.
pub async fn page_orders(
    state: &AppState,
    finder: Select<Orders>,
    query: &OrderListQuery,
) -> AppResult<ApiResponse<OrderList>> {
    let (page, limit, offset) = query.pagination().normalize();
    let mut condition = Condition::all();
    if let Some(status) = query.status {
        condition = condition.add(OrderCol::Status.eq(status.as_str()));
    }

    let mut finder = finder.filter(condition);
    finder = match query.sort_order.unwrap_or(SortOrder::Desc) {
        SortOrder::Asc => finder.order_by_asc(OrderCol::CreatedAt),
        SortOrder::Desc => finder.order_by_desc(OrderCol::CreatedAt),
    };

    let total = finder.clone().count(&state.orm).await? as i64;

    let orders = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Order::from)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("OK", OrderList { items: orders }, Some(meta)))
}

/// Turns the caller's cart into a pending order. Cakes are locked for the
/// whole transaction; the unit price is the discounted price at this moment.
pub async fn checkout(
    state: &AppState,
    user: &AuthUser,
    payload: CheckoutRequest,
) -> AppResult<ApiResponse<OrderWithItems>> {
    validate_required("address", &payload.address)?;

    let txn = state.orm.begin().await?;

    let cart = CartItems::find()
        .filter(CartCol::UserId.eq(user.user_id))
        .order_by_asc(CartCol::CreatedAt)
        .all(&txn)
        .await?;
    if cart.is_empty() {
        return Err(AppError::BadRequest("Cart is empty".into()));
    }

    let cake_ids: Vec<Uuid> = cart.iter().map(|item| item.cake_id).collect();
    let mut locked: HashMap<Uuid, _> = Cakes::find()
        .filter(CakeCol::Id.is_in(cake_ids))
        .filter(CakeCol::Deleted.eq(false))
        .lock(LockType::Update)
        .all(&txn)
        .await?
        .into_iter()
        .map(|cake| (cake.id, cake))
        .collect();

    let mut lines = Vec::with_capacity(cart.len());
    let mut total_amount: i64 = 0;
    for item in &cart {
        let model = locked.remove(&item.cake_id).ok_or_else(|| {
            AppError::BadRequest(format!("Cake {} is no longer available", item.cake_id))
        })?;
        let cake = Cake::from(model.clone());
        if item.quantity <= 0 {
            return Err(AppError::BadRequest("Cart has invalid quantity".into()));
        }
        if !cake.is_available() || cake.stock < item.quantity {
            return Err(AppError::BadRequest(format!(
                "Insufficient stock for {}",
                cake.name
            )));
        }
        let unit_price = cake.final_price();
        total_amount = cake
            .line_total(item.quantity)
            .and_then(|line| total_amount.checked_add(line))
            .ok_or_else(|| AppError::BadRequest("Order total is too large".into()))?;
        lines.push((model, cake.stock, item.quantity, unit_price));
    }

    let order_id = Uuid::new_v4();
    let order = OrderActive {
        id: Set(order_id),
        user_id: Set(user.user_id),
        total_amount: Set(total_amount),
        status: Set(OrderStatus::Pending.as_str().to_string()),
        invoice_number: Set(build_invoice_number(order_id)),
        address: Set(payload.address.trim().to_string()),
        note: Set(payload.note.filter(|n| !n.trim().is_empty())),
        created_at: NotSet,
        updated_at: NotSet,
    }
    .insert(&txn)
    .await?;

    let mut items = Vec::with_capacity(lines.len());
    for (model, stock, quantity, unit_price) in lines {
        let item = OrderItemActive {
            id: Set(Uuid::new_v4()),
            order_id: Set(order.id),
            cake_id: Set(model.id),
            quantity: Set(quantity),
            price: Set(unit_price),
            created_at: NotSet,
        }
        .insert(&txn)
        .await?;
        items.push(OrderItem::from(item));

        write_stock(&txn, model, stock - quantity).await?;
    }

    CartItems::delete_many()
        .filter(CartCol::UserId.eq(user.user_id))
        .exec(&txn)
        .await?;

    txn.commit().await?;

    tracing::info!(order_id = %order.id, total_amount, "order placed");
    audit::record(
        &state.orm,
        Some(user.user_id),
        "checkout",
        "orders",
        serde_json::json!({ "order_id": order.id, "total_amount": total_amount }),
    )
    .await;

    Ok(ApiResponse::success(
        "Checkout success",
        OrderWithItems {
            order: Order::from(order),
            items,
        },
        Some(Meta::empty()),
    ))
}

pub async fn get_order(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<OrderWithItems>> {
    let order = Orders::find()
        .filter(
            Condition::all()
                .add(OrderCol::UserId.eq(user.user_id))
                .add(OrderCol::Id.eq(id)),
        )
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let items = fetch_items(&state.orm, order.id).await?;
    Ok(ApiResponse::success(
        "OK",
        OrderWithItems {
            order: Order::from(order),
            items,
        },
        Some(Meta::empty()),
    ))
}

/// Clients may only cancel their own orders while still pending.
pub async fn cancel_order(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<OrderWithItems>> {
    let txn = state.orm.begin().await?;

    let order = Orders::find()
        .filter(
            Condition::all()
                .add(OrderCol::UserId.eq(user.user_id))
                .add(OrderCol::Id.eq(id)),
        )
        .lock(LockType::Update)
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound)?;

    if OrderStatus::parse(&order.status) != Some(OrderStatus::Pending) {
        return Err(AppError::BadRequest(
            "Only pending orders can be cancelled".into(),
        ));
    }

    let (order, items) = transition(&txn, order, OrderStatus::Cancelled).await?;
    txn.commit().await?;

    audit::record(
        &state.orm,
        Some(user.user_id),
        "order_cancel",
        "orders",
        serde_json::json!({ "order_id": order.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Order cancelled",
        OrderWithItems { order, items },
        Some(Meta::empty()),
    ))
}

/// Moves a locked order to `next`. Final states are immutable and entering
/// `cancelled` puts every line back on the shelf.
pub async fn transition<C: ConnectionTrait>(
    conn: &C,
    order: crate::entity::orders::Model,
    next: OrderStatus,
) -> AppResult<(Order, Vec<OrderItem>)> {
    let current = OrderStatus::parse(&order.status).unwrap_or(OrderStatus::Pending);
    if current.is_final() {
        return Err(AppError::BadRequest(format!(
            "Order is already {}",
            current.as_str()
        )));
    }

    let items = fetch_items(conn, order.id).await?;
    if next == OrderStatus::Cancelled {
        restock(conn, &items).await?;
    }

    let mut active: OrderActive = order.into();
    active.status = Set(next.as_str().to_string());
    active.updated_at = Set(Utc::now().into());
    let order = active.update(conn).await?;

    Ok((Order::from(order), items))
}

pub async fn fetch_items<C: ConnectionTrait>(conn: &C, order_id: Uuid) -> AppResult<Vec<OrderItem>> {
    let items = OrderItems::find()
        .filter(OrderItemCol::OrderId.eq(order_id))
        .order_by_asc(OrderItemCol::CreatedAt)
        .all(conn)
        .await?
        .into_iter()
        .map(OrderItem::from)
        .collect();
    Ok(items)
}

async fn restock<C: ConnectionTrait>(conn: &C, items: &[OrderItem]) -> AppResult<()> {
    for item in items {
        // Archived cakes keep their row, so stock still goes back.
        let Some(cake) = Cakes::find_by_id(item.cake_id)
            .lock(LockType::Update)
            .one(conn)
            .await?
        else {
            tracing::warn!(cake_id = %item.cake_id, "restock skipped, cake missing");
            continue;
        };
        let stock = cake.stock.max(0).saturating_add(item.quantity);
        write_stock(conn, cake, stock).await?;
    }
    Ok(())
}

pub fn build_invoice_number(order_id: Uuid) -> String {
    let date = Utc::now().format("%Y%m%d");
    let suffix = order_id.simple().to_string();
    format!("INV-{}-{}", date, &suffix[..8])
}

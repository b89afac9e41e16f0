//! Stock rules shared by cakes and ingredient inventory.

use crate::{
    error::{AppError, AppResult},
    models::InventoryItem,
};

/// A quantity strictly below this is "low stock".
pub const LOW_STOCK_THRESHOLD: i32 = 5;

/// Category given to ingredients saved without one.
pub const DEFAULT_INVENTORY_CATEGORY: &str = "General";

pub fn is_low_stock(quantity: i32) -> bool {
    quantity < LOW_STOCK_THRESHOLD
}

pub fn normalize_category(label: &str) -> String {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        DEFAULT_INVENTORY_CATEGORY.to_string()
    } else {
        trimmed.to_string()
    }
}

/// First phase of a stock change: the quantity we expect to write, computed
/// before touching storage. The write must be conditional on `previous` still
/// being current; otherwise the caller discards the projection and re-reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockProjection {
    pub previous: i32,
    pub projected: i32,
    pub low_stock: bool,
}

impl StockProjection {
    pub fn project(previous: i32, delta: i32) -> AppResult<Self> {
        if delta == 0 {
            return Err(AppError::BadRequest("delta must not be 0".into()));
        }
        let projected = previous
            .checked_add(delta)
            .ok_or_else(|| AppError::BadRequest("stock out of range".into()))?;
        if projected < 0 {
            return Err(AppError::BadRequest("stock cannot be negative".into()));
        }
        Ok(Self {
            previous,
            projected,
            low_stock: is_low_stock(projected),
        })
    }

    /// Projection for an absolute quantity, as sent by an edit form.
    pub fn set(previous: i32, quantity: i32) -> AppResult<Self> {
        if quantity < 0 {
            return Err(AppError::BadRequest(
                "quantity must be a non-negative number".into(),
            ));
        }
        Ok(Self {
            previous,
            projected: quantity,
            low_stock: is_low_stock(quantity),
        })
    }

    pub fn is_noop(&self) -> bool {
        self.previous == self.projected
    }
}

/// Admin inventory search: case-insensitive substring over ingredient,
/// category and unit. A blank query keeps everything.
pub fn filter_inventory(items: &[InventoryItem], query: &str) -> Vec<InventoryItem> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| {
            item.ingredient.to_lowercase().contains(&needle)
                || item.category.to_lowercase().contains(&needle)
                || item.unit.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

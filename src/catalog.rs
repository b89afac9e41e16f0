//! Storefront catalog views.
//!
//! Everything in here is a pure function over a cake list that has already
//! been fetched. Inputs are borrowed and every call returns a fresh `Vec`, so
//! the same inputs always produce the same output and concurrent callers never
//! observe each other.

use std::cmp::Ordering;

use crate::{
    models::{Cake, CakeStatus, InventoryItem},
    routes::params::{CakeSortBy, SortOrder},
};

/// Selected-category value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All";

/// Size of the "new arrivals" and "popular" rows on the home screen.
pub const DEFAULT_FEED_LIMIT: usize = 8;

/// Search box text and category chip of a storefront screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub search: String,
    pub category: String,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl QueryState {
    pub fn new(search: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            category: category.into(),
        }
    }

    pub fn apply(&self, cakes: &[Cake]) -> Vec<Cake> {
        apply_filters(cakes, &self.category, &self.search)
    }
}

/// Keeps cakes whose category equals `category` exactly (case-sensitive).
/// `"All"` keeps everything in the original order.
pub fn filter_by_category(cakes: &[Cake], category: &str) -> Vec<Cake> {
    cakes
        .iter()
        .filter(|cake| matches_category(cake, category))
        .cloned()
        .collect()
}

/// Keeps cakes whose name contains `query`, ignoring case. An empty query
/// keeps everything.
pub fn filter_by_search_text(cakes: &[Cake], query: &str) -> Vec<Cake> {
    let needle = query.to_lowercase();
    cakes
        .iter()
        .filter(|cake| matches_search(cake, &needle))
        .cloned()
        .collect()
}

/// Logical AND of [`filter_by_category`] and [`filter_by_search_text`].
pub fn apply_filters(cakes: &[Cake], category: &str, query: &str) -> Vec<Cake> {
    let needle = query.to_lowercase();
    cakes
        .iter()
        .filter(|cake| matches_category(cake, category) && matches_search(cake, &needle))
        .cloned()
        .collect()
}

/// Most recently added first. The input is expected in insertion order, so
/// this is the reversed list cut to `limit`.
pub fn recent_arrivals(cakes: &[Cake], limit: usize) -> Vec<Cake> {
    cakes.iter().rev().take(limit).cloned().collect()
}

/// Highest rating first; unrated cakes count as 0 and ties keep input order.
pub fn top_rated(cakes: &[Cake], limit: usize) -> Vec<Cake> {
    let mut rated = cakes.to_vec();
    rated.sort_by(|a, b| b.rating_or_zero().total_cmp(&a.rating_or_zero()));
    rated.truncate(limit);
    rated
}

/// Stable sort; equal keys keep their input order in both directions.
pub fn sort_cakes(cakes: &[Cake], by: CakeSortBy, order: SortOrder) -> Vec<Cake> {
    let mut sorted = cakes.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare_by(a, b, by);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
    sorted
}

/// Items flagged low stock. Relies on the flag being rewritten with every
/// quantity change, see [`crate::inventory::StockProjection`].
pub fn count_low_stock(items: &[InventoryItem]) -> usize {
    items.iter().filter(|item| item.low_stock).count()
}

pub fn count_total<T>(items: &[T]) -> usize {
    items.len()
}

pub fn count_by_status(cakes: &[Cake], status: CakeStatus) -> usize {
    cakes.iter().filter(|cake| cake.status == status).count()
}

/// One page of an in-memory listing. `page` is 1-based.
pub fn paginate<T: Clone>(items: &[T], page: i64, per_page: i64) -> Vec<T> {
    let per_page = per_page.max(0) as usize;
    let offset = (page.max(1) as usize - 1).saturating_mul(per_page);
    items.iter().skip(offset).take(per_page).cloned().collect()
}

fn matches_category(cake: &Cake, category: &str) -> bool {
    category == ALL_CATEGORIES || cake.category == category
}

fn matches_search(cake: &Cake, lowered_query: &str) -> bool {
    lowered_query.is_empty() || cake.name.to_lowercase().contains(lowered_query)
}

fn compare_by(a: &Cake, b: &Cake, by: CakeSortBy) -> Ordering {
    match by {
        CakeSortBy::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        CakeSortBy::Price => a.final_price().cmp(&b.final_price()),
        CakeSortBy::Rating => a.rating_or_zero().total_cmp(&b.rating_or_zero()),
        CakeSortBy::CreatedAt => a.created_at.cmp(&b.created_at),
    }
}

pub mod audit_logs;
pub mod banners;
pub mod cakes;
pub mod cart_items;
pub mod categories;
pub mod favorites;
pub mod inventory_items;
pub mod order_items;
pub mod orders;
pub mod users;

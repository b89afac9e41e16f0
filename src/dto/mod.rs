pub mod admin;
pub mod auth;
pub mod banners;
pub mod cakes;
pub mod cart;
pub mod categories;
pub mod favorites;
pub mod inventory;
pub mod orders;
pub mod storefront;

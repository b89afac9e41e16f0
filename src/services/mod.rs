pub mod admin_service;
pub mod auth_service;
pub mod banner_service;
pub mod cake_service;
pub mod cart_service;
pub mod category_service;
pub mod favorite_service;
pub mod inventory_service;
pub mod order_service;
pub mod storefront_service;

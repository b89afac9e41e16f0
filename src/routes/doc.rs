use utoipa::{
    Modify, OpenApi,
    openapi::{
        self, OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        admin::{CreateUserRequest, DashboardStats, UserList},
        auth::{
            ChangePasswordRequest, LoginRequest, LoginResponse, RegisterRequest,
            UpdateProfileRequest,
        },
        banners::{BannerList, CreateBannerRequest},
        cakes::{CakeList, CreateCakeRequest, StockAdjustRequest, UpdateCakeRequest},
        cart::{AddToCartRequest, CartItemDto, CartItemView, CartList},
        categories::{CategoryList, CreateCategoryRequest, UpdateCategoryRequest},
        favorites::{AddFavoriteRequest, FavoriteCakeList},
        inventory::{
            CreateInventoryItemRequest, InventoryList, QuantityAdjustRequest,
            UpdateInventoryItemRequest,
        },
        orders::{CheckoutRequest, OrderList, OrderWithItems, UpdateOrderStatusRequest},
        storefront::HomeFeed,
    },
    models::{
        Banner, Cake, CakeStatus, Category, Favorite, InventoryItem, Order, OrderItem,
        OrderStatus, Role, User,
    },
    response::{ApiResponse, Meta},
    routes::{
        admin, auth, banners, cakes, cart, categories, favorites, health, inventory, orders,
        params, storefront,
    },
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        health::readiness,
        auth::register,
        auth::login,
        auth::me,
        auth::update_me,
        auth::change_password,
        cakes::list_cakes,
        cakes::get_cake,
        cakes::create_cake,
        cakes::update_cake,
        cakes::delete_cake,
        cakes::adjust_stock,
        storefront::home,
        categories::list_categories,
        categories::create_category,
        categories::update_category,
        categories::delete_category,
        banners::list_banners,
        banners::create_banner,
        banners::delete_banner,
        favorites::list_favorites,
        favorites::add_favorite,
        favorites::remove_favorite,
        cart::cart_list,
        cart::add_to_cart,
        cart::remove_from_cart,
        orders::list_orders,
        orders::checkout,
        orders::get_order,
        orders::cancel_order,
        admin::dashboard,
        admin::list_all_orders,
        admin::get_order_admin,
        admin::update_order_status,
        admin::list_users,
        admin::create_user,
        inventory::list_items,
        inventory::create_item,
        inventory::update_item,
        inventory::adjust_quantity,
        inventory::delete_item
    ),
    components(
        schemas(
            User,
            Role,
            Cake,
            CakeStatus,
            Category,
            Banner,
            InventoryItem,
            Favorite,
            Order,
            OrderItem,
            OrderStatus,
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            UpdateProfileRequest,
            ChangePasswordRequest,
            CreateCakeRequest,
            UpdateCakeRequest,
            StockAdjustRequest,
            CakeList,
            CreateCategoryRequest,
            UpdateCategoryRequest,
            CategoryList,
            CreateBannerRequest,
            BannerList,
            CreateInventoryItemRequest,
            UpdateInventoryItemRequest,
            QuantityAdjustRequest,
            InventoryList,
            AddToCartRequest,
            CartList,
            CartItemDto,
            CartItemView,
            AddFavoriteRequest,
            FavoriteCakeList,
            CheckoutRequest,
            UpdateOrderStatusRequest,
            OrderList,
            OrderWithItems,
            HomeFeed,
            CreateUserRequest,
            UserList,
            DashboardStats,
            params::Pagination,
            params::CakeQuery,
            params::OrderListQuery,
            params::SortOrder,
            params::CakeSortBy,
            Meta,
            ApiResponse<Cake>,
            ApiResponse<CakeList>,
            ApiResponse<HomeFeed>,
            ApiResponse<OrderWithItems>,
            ApiResponse<OrderList>,
            ApiResponse<InventoryList>,
            ApiResponse<DashboardStats>
        )
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness and readiness"),
        (name = "Auth", description = "Registration, login and profile"),
        (name = "Cakes", description = "Catalog browsing and cake administration"),
        (name = "Storefront", description = "Home screen feed"),
        (name = "Categories", description = "Category labels"),
        (name = "Banners", description = "Promotional banners"),
        (name = "Favorites", description = "Favorite cakes"),
        (name = "Cart", description = "Shopping cart"),
        (name = "Orders", description = "Checkout and order history"),
        (name = "Admin", description = "Order, user and dashboard administration"),
        (name = "Inventory", description = "Ingredient stock"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}

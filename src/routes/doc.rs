use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        cart::{CartItemKey, CartItemRequest},
        favorites::AddFavoriteRequest,
        products::ProductPayload,
    },
    models::{CartEntry, CartLine, FavoriteLine, Product},
    response::{ErrorResponse, MessageResponse},
    routes::{cart, favorites, health, products},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::list_products,
        products::create_product,
        products::replace_product,
        products::update_product,
        products::delete_product,
        cart::cart_list,
        cart::add_to_cart,
        cart::update_quantity,
        cart::remove_from_cart,
        cart::clear_cart,
        favorites::list_favorites,
        favorites::add_favorite
    ),
    components(
        schemas(
            Product,
            CartEntry,
            CartLine,
            FavoriteLine,
            ProductPayload,
            CartItemRequest,
            CartItemKey,
            AddFavoriteRequest,
            MessageResponse,
            ErrorResponse,
            health::HealthData
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Product endpoints"),
        (name = "Cart", description = "Cart endpoints"),
        (name = "Favorites", description = "Favorite endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}

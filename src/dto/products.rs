use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Full field set for creating or replacing a product.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ProductPayload {
    pub name: String,
    pub description: Option<String>,
    pub price: i64,
    pub stock: i32,
    pub image_url: Option<String>,
}

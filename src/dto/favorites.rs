use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AddFavoriteRequest {
    pub user_id: i32,
    pub product_id: i32,
}

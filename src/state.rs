use std::sync::Arc;

use crate::store::ShopStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ShopStore>,
}

impl AppState {
    pub fn new(store: impl ShopStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

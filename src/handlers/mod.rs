pub mod common;
pub mod commerce;

use crate::db::DbPool;
use crate::services::commerce::{ProductCatalogService, WishlistService};
use std::sync::Arc;

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// Services layer that encapsulates business logic used by HTTP handlers
#[derive(Clone)]
pub struct AppServices {
    pub product_catalog: Arc<ProductCatalogService>,
    pub wishlist: Arc<WishlistService>,
}

impl AppServices {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self {
            product_catalog: Arc::new(ProductCatalogService::new(db_pool.clone())),
            wishlist: Arc::new(WishlistService::new(db_pool)),
        }
    }
}

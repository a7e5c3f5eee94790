/// Commerce services module - catalog queries, wishlist and navigation
pub mod navigation;
pub mod product_catalog_service;
pub mod wishlist_service;

// Re-export services for convenience
pub use navigation::{navigation_data, NavigationCategory, NavigationEntry};
pub use product_catalog_service::{CategoryGroup, ProductCatalogService, ProductListQuery};
pub use wishlist_service::{WishEntry, WishlistService};

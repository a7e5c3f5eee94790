/// Commerce API handlers module
pub mod navigation;
pub mod products;
pub mod wishlist;

// Re-export route builders
pub use navigation::navigation_routes;
pub use products::products_routes;
pub use wishlist::wishlist_routes;

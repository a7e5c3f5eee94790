// Catalog and wishlist services
pub mod commerce;

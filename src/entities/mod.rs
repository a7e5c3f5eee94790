/// Persistence entities for the catalog and wishlist tables
pub mod commerce;

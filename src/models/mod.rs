pub mod category;

pub use category::{
    AnimalCategory, CategoryFilter, CategoryInfo, Page, ProductCategory, SmallAnimalCategory,
    SortBy,
};

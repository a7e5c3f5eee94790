/// Commerce entities module
pub mod product;
pub mod store;
pub mod user;
pub mod wish;

// Re-export entities
pub use product::{Entity as Product, Model as ProductModel, ProductView};
pub use store::{Entity as Store, Model as StoreModel};
pub use user::{Entity as User, Model as UserModel};
pub use wish::{Entity as Wish, Model as WishModel};

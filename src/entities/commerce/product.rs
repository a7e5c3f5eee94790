use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Product entity for the catalog system
///
/// `animal_category` and `product_category` hold the integer codes from
/// [`crate::models::category`]; the meaning of `product_category` depends on
/// the animal. Counters are maintained by the order and wishlist flows of
/// other services and are read-only here.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub store_id: Option<i64>,
    pub image_url: Option<String>,
    pub animal_category: i32,
    pub product_category: i32,
    pub product_name: String,
    pub model_num: Option<String>,
    pub origin_label: Option<String>,
    /// Price in whole won
    pub price: i64,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub stock: i32,
    pub wish_count: i32,
    pub purchase_count: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::store::Entity",
        from = "Column::StoreId",
        to = "super::store::Column::Id"
    )]
    Store,

    #[sea_orm(has_many = "super::wish::Entity")]
    Wishes,
}

impl Related<super::store::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Store.def()
    }
}

impl Related<super::wish::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Wishes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Read projection returned by every catalog query: the product row plus the
/// name of its store (left joined, so products without a store still appear).
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "id": 17,
    "image_url": "https://cdn.petmall.example/products/17.jpg",
    "animal_category": 1,
    "product_category": 1,
    "product_name": "Grain-free salmon kibble 2kg",
    "store_name": "Happy Paws",
    "model_num": "HP-SAL-2000",
    "origin_label": "Korea",
    "price": 32000,
    "description": "Single-protein dry food for adult dogs",
    "stock": 40,
    "wish_count": 12,
    "purchase_count": 87,
    "created_at": "2024-12-09T10:30:00Z"
}))]
pub struct ProductView {
    pub id: i64,
    pub image_url: Option<String>,
    pub animal_category: i32,
    pub product_category: i32,
    pub product_name: String,
    pub store_name: Option<String>,
    pub model_num: Option<String>,
    pub origin_label: Option<String>,
    pub price: i64,
    pub description: Option<String>,
    pub stock: i32,
    pub wish_count: i32,
    pub purchase_count: i32,
    pub created_at: DateTime<Utc>,
}

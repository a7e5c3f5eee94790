use crate::{
    entities::commerce::{product, wish, Product, ProductView, User, Wish, WishModel},
    errors::ServiceError,
    services::commerce::product_catalog_service::product_views,
};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument};
use utoipa::ToSchema;

/// Wishlist service for saving products per user
#[derive(Clone)]
pub struct WishlistService {
    db: Arc<DatabaseConnection>,
}

impl WishlistService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Saves a product to the user's wishlist.
    ///
    /// Fails with `UserNotFound`, `ProductNotFound` or `AlreadyInWishlist`.
    /// Concurrent duplicates are caught by the unique `(user_id, product_id)`
    /// index and reported the same way.
    #[instrument(skip(self))]
    pub async fn add_wish(&self, user_id: i64, product_id: i64) -> Result<WishModel, ServiceError> {
        let txn = self.db.begin().await?;

        ensure_user_exists(&txn, user_id).await?;

        Product::find_by_id(product_id)
            .one(&txn)
            .await?
            .ok_or(ServiceError::ProductNotFound(product_id))?;

        if find_wish(&txn, user_id, product_id).await?.is_some() {
            return Err(ServiceError::AlreadyInWishlist {
                user_id,
                product_id,
            });
        }

        let wish = wish::ActiveModel {
            user_id: Set(user_id),
            product_id: Set(product_id),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| ServiceError::from_wish_insert(e, user_id, product_id))?;

        txn.commit().await?;

        info!("Added product {} to wishlist of user {}", product_id, user_id);
        Ok(wish)
    }

    /// Lists the user's wishes in the order they were added.
    #[instrument(skip(self))]
    pub async fn list_wishes(&self, user_id: i64) -> Result<Vec<WishEntry>, ServiceError> {
        let txn = self.db.begin().await?;

        ensure_user_exists(&txn, user_id).await?;

        let wishes = Wish::find()
            .filter(wish::Column::UserId.eq(user_id))
            .order_by_asc(wish::Column::Id)
            .all(&txn)
            .await?;

        if wishes.is_empty() {
            txn.commit().await?;
            return Ok(Vec::new());
        }

        let product_ids: Vec<i64> = wishes.iter().map(|w| w.product_id).collect();
        let mut products: HashMap<i64, ProductView> = product_views()
            .filter(product::Column::Id.is_in(product_ids))
            .into_model::<ProductView>()
            .all(&txn)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        txn.commit().await?;

        // Wishes cascade with their product, so every id resolves.
        let entries = wishes
            .into_iter()
            .filter_map(|w| {
                products.remove(&w.product_id).map(|product| WishEntry {
                    wish_id: w.id,
                    created_at: w.created_at,
                    product,
                })
            })
            .collect();

        Ok(entries)
    }

    /// Removes a product from the user's wishlist.
    #[instrument(skip(self))]
    pub async fn remove_wish(&self, user_id: i64, product_id: i64) -> Result<(), ServiceError> {
        let txn = self.db.begin().await?;

        let result = Wish::delete_many()
            .filter(wish::Column::UserId.eq(user_id))
            .filter(wish::Column::ProductId.eq(product_id))
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            return Err(ServiceError::NotInWishlist {
                user_id,
                product_id,
            });
        }

        txn.commit().await?;

        info!(
            "Removed product {} from wishlist of user {}",
            product_id, user_id
        );
        Ok(())
    }
}

async fn ensure_user_exists<C: ConnectionTrait>(conn: &C, user_id: i64) -> Result<(), ServiceError> {
    User::find_by_id(user_id)
        .one(conn)
        .await?
        .map(|_| ())
        .ok_or(ServiceError::UserNotFound(user_id))
}

async fn find_wish<C: ConnectionTrait>(
    conn: &C,
    user_id: i64,
    product_id: i64,
) -> Result<Option<WishModel>, ServiceError> {
    Ok(Wish::find()
        .filter(wish::Column::UserId.eq(user_id))
        .filter(wish::Column::ProductId.eq(product_id))
        .one(conn)
        .await?)
}

/// A saved product with the id of the wish that holds it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WishEntry {
    pub wish_id: i64,
    pub created_at: chrono::DateTime<Utc>,
    pub product: ProductView,
}

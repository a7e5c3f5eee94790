use crate::{
    entities::commerce::{product, store, Product, ProductView},
    errors::ServiceError,
    models::category::{AnimalCategory, CategoryFilter, Page, SortBy},
};
use sea_orm::{
    sea_query::{Condition, LikeExpr},
    ColumnTrait, DatabaseConnection, EntityTrait, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Select,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument};
use utoipa::ToSchema;

const POPULAR_LIMIT: u64 = 10;
const RECOMMENDED_PER_CATEGORY: u64 = 3;
const MOST_PURCHASED_PER_CATEGORY: u64 = 4;
const LIKE_ESCAPE: char = '\\';

/// Read-only catalog queries over the products table
#[derive(Clone)]
pub struct ProductCatalogService {
    db: Arc<DatabaseConnection>,
}

impl ProductCatalogService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Lists one page of products in a category, optionally narrowed by a
    /// search word matched against name and description.
    #[instrument(skip(self))]
    pub async fn list_products(
        &self,
        query: ProductListQuery,
    ) -> Result<Vec<ProductView>, ServiceError> {
        let mut db_query = Self::in_category(query.filter);

        if let Some(word) = query
            .search_word
            .as_deref()
            .map(str::trim)
            .filter(|w| !w.is_empty())
        {
            let pattern = contains_pattern(word);
            db_query = db_query.filter(
                Condition::any()
                    .add(product::Column::ProductName.like(pattern.clone()))
                    .add(product::Column::Description.like(pattern)),
            );
        }

        let db_query = match query.sort_by {
            SortBy::Price => db_query.order_by_asc(product::Column::Price),
            SortBy::Popularity => db_query.order_by_desc(product::Column::WishCount),
            SortBy::Newest => db_query.order_by_desc(product::Column::CreatedAt),
        };

        let products = db_query
            .order_by_asc(product::Column::Id)
            .offset(query.page.offset())
            .limit(query.page.limit())
            .into_model::<ProductView>()
            .all(&*self.db)
            .await?;

        debug!(
            "Listed {} products for page {}",
            products.len(),
            query.page.number()
        );
        Ok(products)
    }

    /// Top ten products of a category by wish count
    #[instrument(skip(self))]
    pub async fn popular_ten(&self, filter: CategoryFilter) -> Result<Vec<ProductView>, ServiceError> {
        let products = Self::in_category(filter)
            .order_by_desc(product::Column::WishCount)
            .order_by_asc(product::Column::Id)
            .limit(POPULAR_LIMIT)
            .into_model::<ProductView>()
            .all(&*self.db)
            .await?;

        Ok(products)
    }

    /// Up to three best-stocked products for every product category of the animal
    #[instrument(skip(self))]
    pub async fn recommend_three(
        &self,
        animal: AnimalCategory,
    ) -> Result<Vec<CategoryGroup>, ServiceError> {
        self.top_per_category(
            animal,
            product::Column::Stock,
            RECOMMENDED_PER_CATEGORY,
        )
        .await
    }

    /// Up to four most purchased products for every product category of the animal.
    ///
    /// `user_id` is only logged; results are not personalised.
    #[instrument(skip(self))]
    pub async fn most_purchased(
        &self,
        animal: AnimalCategory,
        user_id: Option<i64>,
    ) -> Result<Vec<CategoryGroup>, ServiceError> {
        if let Some(user_id) = user_id {
            info!("Most purchased products requested by user {}", user_id);
        }

        self.top_per_category(
            animal,
            product::Column::PurchaseCount,
            MOST_PURCHASED_PER_CATEGORY,
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, product_id: i64) -> Result<ProductView, ServiceError> {
        product_views()
            .filter(product::Column::Id.eq(product_id))
            .into_model::<ProductView>()
            .one(&*self.db)
            .await?
            .ok_or(ServiceError::ProductNotFound(product_id))
    }

    async fn top_per_category(
        &self,
        animal: AnimalCategory,
        rank_by: product::Column,
        per_category: u64,
    ) -> Result<Vec<CategoryGroup>, ServiceError> {
        let mut groups = Vec::new();

        for category in animal.product_categories() {
            let products = product_views()
                .filter(product::Column::AnimalCategory.eq(animal.code()))
                .filter(product::Column::ProductCategory.eq(category.code))
                .order_by_desc(rank_by)
                .order_by_asc(product::Column::Id)
                .limit(per_category)
                .into_model::<ProductView>()
                .all(&*self.db)
                .await?;

            groups.push(CategoryGroup {
                category: category.label.to_string(),
                products,
            });
        }

        Ok(groups)
    }

    fn in_category(filter: CategoryFilter) -> Select<Product> {
        product_views()
            .filter(product::Column::AnimalCategory.eq(filter.animal_code()))
            .filter(product::Column::ProductCategory.eq(filter.product_category))
    }
}

/// Products joined with their (optional) store name
pub(crate) fn product_views() -> Select<Product> {
    Product::find()
        .column_as(store::Column::StoreName, "store_name")
        .join(JoinType::LeftJoin, product::Relation::Store.def())
}

/// `%word%` with LIKE wildcards in `word` escaped, so the search is a plain
/// substring match.
fn contains_pattern(word: &str) -> LikeExpr {
    LikeExpr::new(format!("%{}%", escape_like(word))).escape(LIKE_ESCAPE)
}

fn escape_like(word: &str) -> String {
    let mut escaped = String::with_capacity(word.len());
    for c in word.chars() {
        if matches!(c, '%' | '_') || c == LIKE_ESCAPE {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// Listing request resolved from query parameters
#[derive(Debug, Clone)]
pub struct ProductListQuery {
    pub filter: CategoryFilter,
    pub search_word: Option<String>,
    pub sort_by: SortBy,
    pub page: Page,
}

impl ProductListQuery {
    pub fn new(filter: CategoryFilter) -> Self {
        Self {
            filter,
            search_word: None,
            sort_by: SortBy::default(),
            page: Page::default(),
        }
    }
}

/// Products of one product category, labelled for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryGroup {
    /// Display label of the product category
    #[schema(example = "사료")]
    pub category: String,
    #[serde(rename = "product")]
    pub products: Vec<ProductView>,
}

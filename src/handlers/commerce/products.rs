use crate::entities::commerce::ProductView;
use crate::handlers::common::{
    map_service_error, normalize_optional_string, success_response, validate_input, ApiPath,
    ApiQuery,
};
use crate::{
    errors::ApiError,
    models::category::{AnimalCategory, CategoryFilter, Page, SortBy},
    services::commerce::{CategoryGroup, ProductListQuery},
    AppState,
};
use axum::{
    extract::State,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

/// Creates the router for product endpoints
pub fn products_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products))
        .route("/popular", get(popular_products))
        .route("/recommended", get(recommended_products))
        .route("/most-purchased", get(most_purchased_products))
        .route("/:id", get(get_product))
}

fn default_page() -> u32 {
    1
}

/// Query parameters of the category listing
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductListParams {
    /// Animal token (`dog`, `cat`, `small`)
    pub animal: String,
    /// Product category token within the animal section
    pub category: String,
    /// `price` (default), `popularity` or `newest`
    pub sort_by: Option<String>,
    /// Word matched against product name and description
    pub search: Option<String>,
    /// One-based page; the first page holds 32 products, later pages 12
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: u32,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CategoryParams {
    pub animal: String,
    pub category: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AnimalParams {
    pub animal: String,
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MostPurchasedParams {
    pub animal: String,
    /// Requesting user; accepted for logging only
    #[validate(range(min = 1))]
    pub user_id: Option<i64>,
}

/// List products of a category
#[utoipa::path(
    get,
    path = "/api/v1/products",
    params(ProductListParams),
    responses(
        (status = 200, description = "Products retrieved", body = [ProductView]),
        (status = 400, description = "Unknown category or sort token, or invalid page", body = crate::errors::ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ProductListParams>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    validate_input(&params)?;

    let filter =
        CategoryFilter::parse(&params.animal, &params.category).map_err(map_service_error)?;
    let query = ProductListQuery {
        filter,
        search_word: normalize_optional_string(params.search),
        sort_by: SortBy::parse(params.sort_by.as_deref()).map_err(map_service_error)?,
        page: Page::new(params.page).map_err(map_service_error)?,
    };

    let products = state
        .services
        .product_catalog
        .list_products(query)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(products))
}

/// Ten most wished products of a category
#[utoipa::path(
    get,
    path = "/api/v1/products/popular",
    params(CategoryParams),
    responses(
        (status = 200, description = "Popular products retrieved", body = [ProductView]),
        (status = 400, description = "Unknown category token", body = crate::errors::ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn popular_products(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<CategoryParams>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let filter =
        CategoryFilter::parse(&params.animal, &params.category).map_err(map_service_error)?;

    let products = state
        .services
        .product_catalog
        .popular_ten(filter)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(products))
}

/// Best-stocked products per product category of an animal
#[utoipa::path(
    get,
    path = "/api/v1/products/recommended",
    params(AnimalParams),
    responses(
        (status = 200, description = "Recommendations retrieved", body = [CategoryGroup]),
        (status = 400, description = "Unknown animal token", body = crate::errors::ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn recommended_products(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<AnimalParams>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let animal = AnimalCategory::parse(&params.animal).map_err(map_service_error)?;

    let groups = state
        .services
        .product_catalog
        .recommend_three(animal)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(groups))
}

/// Most purchased products per product category of an animal
#[utoipa::path(
    get,
    path = "/api/v1/products/most-purchased",
    params(MostPurchasedParams),
    responses(
        (status = 200, description = "Best sellers retrieved", body = [CategoryGroup]),
        (status = 400, description = "Unknown animal token", body = crate::errors::ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn most_purchased_products(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<MostPurchasedParams>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    validate_input(&params)?;
    let animal = AnimalCategory::parse(&params.animal).map_err(map_service_error)?;

    let groups = state
        .services
        .product_catalog
        .most_purchased(animal, params.user_id)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(groups))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product found", body = ProductView),
        (status = 400, description = "Malformed product id", body = crate::errors::ErrorResponse),
        (status = 404, description = "Product not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let product = state
        .services
        .product_catalog
        .get_product(id)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(product))
}

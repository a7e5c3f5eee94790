use crate::entities::commerce::WishModel;
use crate::handlers::common::{
    created_response, map_service_error, no_content_response, success_response, validate_input,
    ApiJson, ApiPath,
};
use crate::{errors::ApiError, services::commerce::WishEntry, AppState};
use axum::{
    extract::State,
    routing::{delete, get},
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Creates the router for wishlist endpoints, nested under `/users`
pub fn wishlist_routes() -> Router<AppState> {
    Router::new()
        .route("/:user_id/wishlist", get(list_wishes).post(add_wish))
        .route("/:user_id/wishlist/:product_id", delete(remove_wish))
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddWishRequest {
    #[validate(range(min = 1))]
    #[schema(example = 17)]
    pub product_id: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WishResponse {
    pub id: i64,
    pub user_id: i64,
    pub product_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<WishModel> for WishResponse {
    fn from(model: WishModel) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            product_id: model.product_id,
            created_at: model.created_at,
        }
    }
}

/// Add a product to a user's wishlist
#[utoipa::path(
    post,
    path = "/api/v1/users/{user_id}/wishlist",
    params(("user_id" = i64, Path, description = "User ID")),
    request_body = AddWishRequest,
    responses(
        (status = 201, description = "Wish created", body = WishResponse),
        (status = 400, description = "Invalid payload", body = crate::errors::ErrorResponse),
        (status = 404, description = "User or product not found", body = crate::errors::ErrorResponse),
        (status = 409, description = "Product already in wishlist", body = crate::errors::ErrorResponse)
    ),
    tag = "Wishlist"
)]
pub async fn add_wish(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i64>,
    ApiJson(payload): ApiJson<AddWishRequest>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    validate_input(&payload)?;

    let wish = state
        .services
        .wishlist
        .add_wish(user_id, payload.product_id)
        .await
        .map_err(map_service_error)?;

    Ok(created_response(WishResponse::from(wish)))
}

/// List a user's wishlist
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}/wishlist",
    params(("user_id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "Wishlist retrieved", body = [WishEntry]),
        (status = 400, description = "Malformed user id", body = crate::errors::ErrorResponse),
        (status = 404, description = "User not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Wishlist"
)]
pub async fn list_wishes(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i64>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let entries = state
        .services
        .wishlist
        .list_wishes(user_id)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(entries))
}

/// Remove a product from a user's wishlist
#[utoipa::path(
    delete,
    path = "/api/v1/users/{user_id}/wishlist/{product_id}",
    params(
        ("user_id" = i64, Path, description = "User ID"),
        ("product_id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Wish removed"),
        (status = 400, description = "Malformed user or product id", body = crate::errors::ErrorResponse),
        (status = 404, description = "Product not in wishlist", body = crate::errors::ErrorResponse)
    ),
    tag = "Wishlist"
)]
pub async fn remove_wish(
    State(state): State<AppState>,
    ApiPath((user_id, product_id)): ApiPath<(i64, i64)>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    state
        .services
        .wishlist
        .remove_wish(user_id, product_id)
        .await
        .map_err(map_service_error)?;

    Ok(no_content_response())
}

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pet-Mall Catalog API",
        version = "1.0.0",
        description = r#"
# Pet-Mall Catalog API

Product catalog and wishlist endpoints for the pet-supplies shop.

## Categories

Products are filtered by an animal token (`dog`, `cat`, `small`) and a product
category token that is resolved within that animal section. The full menu is
available from `GET /api/v1/navigation`.

## Pagination

`GET /api/v1/products` returns 32 products on page 1 and 12 on every later page.

## Error Handling

Errors share one body format and echo the `x-request-id` of the request:

```json
{
  "error": "Not Found",
  "message": "Product 42 does not exist",
  "request_id": "3f2c...",
  "timestamp": "2024-01-01T00:00:00Z"
}
```
        "#,
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development")
    ),
    tags(
        (name = "Products", description = "Catalog listing and lookup endpoints"),
        (name = "Wishlist", description = "Per-user saved products"),
        (name = "Navigation", description = "Category menu metadata"),
        (name = "Health", description = "Health check endpoints")
    ),
    paths(
        // Products
        crate::handlers::commerce::products::list_products,
        crate::handlers::commerce::products::popular_products,
        crate::handlers::commerce::products::recommended_products,
        crate::handlers::commerce::products::most_purchased_products,
        crate::handlers::commerce::products::get_product,

        // Wishlist
        crate::handlers::commerce::wishlist::add_wish,
        crate::handlers::commerce::wishlist::list_wishes,
        crate::handlers::commerce::wishlist::remove_wish,

        // Navigation
        crate::handlers::commerce::navigation::get_navigation,

        // Health
        crate::health_check,
    ),
    components(
        schemas(
            crate::entities::commerce::ProductView,
            crate::services::commerce::CategoryGroup,
            crate::services::commerce::WishEntry,
            crate::services::commerce::NavigationEntry,
            crate::services::commerce::NavigationCategory,
            crate::handlers::commerce::wishlist::AddWishRequest,
            crate::handlers::commerce::wishlist::WishResponse,
            crate::HealthResponse,

            // Error types
            crate::errors::ErrorResponse
        )
    )
)]
pub struct ApiDocV1;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDocV1::openapi())
        .config(utoipa_swagger_ui::Config::from("/api-docs/openapi.json").try_it_out_enabled(true))
}

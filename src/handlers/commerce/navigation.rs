use crate::handlers::common::success_response;
use crate::services::commerce::{navigation_data, NavigationEntry};
use crate::AppState;
use axum::{response::IntoResponse, routing::get, Router};

pub fn navigation_routes() -> Router<AppState> {
    Router::new().route("/", get(get_navigation))
}

/// Animal sections and their product categories
#[utoipa::path(
    get,
    path = "/api/v1/navigation",
    responses(
        (status = 200, description = "Navigation menu", body = [NavigationEntry])
    ),
    tag = "Navigation"
)]
pub async fn get_navigation() -> impl IntoResponse {
    success_response(navigation_data())
}

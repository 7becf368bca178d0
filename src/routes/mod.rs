/// Application routes configuration
use crate::docs::{ApiDoc, OPENAPI_JSON_PATH, SWAGGER_UI_PATH};
use crate::handlers::{
    get_apod, health, root_redirect, web_index, web_redirect, web_today, AppState,
};
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Build the application router with all routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Web UI
        .route("/", get(root_redirect))
        .route("/web", get(web_redirect))
        .route("/web/", get(web_index))
        .route("/web/today", get(web_today))
        // JSON API
        .route("/api/apod", get(get_apod))
        .merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// HTTP request handlers
use crate::domain::{ApodParams, ApodRecord, Health};
use crate::errors::{ApiError, ApiResult, ErrorBody};
use crate::services::ApodService;
use crate::views::{index_page, WebPage};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect},
    Json,
};
use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub apod_service: Arc<ApodService>,
}

/// Health check handler
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        now: Utc::now(),
    })
}

/// `/` always redirects to the web landing page with a 302
pub async fn root_redirect() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, "/web/")])
}

/// `/web` without the trailing slash
pub async fn web_redirect() -> Redirect {
    Redirect::permanent("/web/")
}

/// Landing page
pub async fn web_index() -> Html<String> {
    Html(index_page().into_string())
}

/// Today's picture. Upstream failures are rendered as page content, still with 200.
pub async fn web_today(State(state): State<AppState>) -> Html<String> {
    let page = WebPage::from(state.apod_service.today().await);
    if let WebPage::Error(view) = &page {
        debug!(error = %view.error, "rendering APOD error page");
    }
    Html(page.render().into_string())
}

/// Get Astronomy Picture of the Day
#[utoipa::path(
    get,
    path = "/api/apod",
    operation_id = "get_apod",
    tag = "apod",
    params(ApodParams),
    responses(
        (status = 200, description = "Success", body = ApodRecord),
        (status = 400, description = "Bad Request", body = ErrorBody),
        (status = 500, description = "Internal Server Error", body = ErrorBody)
    )
)]
pub async fn get_apod(
    State(state): State<AppState>,
    query: Result<Query<ApodParams>, QueryRejection>,
) -> ApiResult<Json<Value>> {
    let Query(params) = query.map_err(|e| ApiError::InvalidInput(e.body_text()))?;
    let data = state.apod_service.lookup(&params).await?;
    Ok(Json(data))
}

/// Local stand-in for the NASA APOD endpoint used by tests
use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

#[derive(Clone)]
pub enum MockUpstream {
    /// Full APOD record plus the query it received under `received`
    Echo,
    /// Fixed JSON payload
    Payload(Value),
    /// Empty body with the given status
    Status(u16),
    /// 200 with a body that is not JSON
    NotJson,
    /// Sleep before answering
    Slow(Duration),
    /// Count every hit, then answer with an empty body and the given status
    Counting(Arc<AtomicUsize>, u16),
}

pub fn full_record() -> Value {
    json!({
        "date": "2023-01-01",
        "explanation": "Test explanation",
        "url": "https://example.com/image.jpg",
        "title": "Test Title",
        "media_type": "image",
        "service_version": "v1",
        "hdurl": "https://example.com/image_hd.jpg",
        "copyright": "Test Photographer"
    })
}

async fn respond(mock: MockUpstream, query: HashMap<String, String>) -> Response {
    match mock {
        MockUpstream::Echo => {
            let mut body = full_record();
            body["received"] = json!(query);
            Json(body).into_response()
        }
        MockUpstream::Payload(body) => Json(body).into_response(),
        MockUpstream::Status(code) => StatusCode::from_u16(code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            .into_response(),
        MockUpstream::NotJson => "<html>maintenance</html>".into_response(),
        MockUpstream::Counting(hits, code) => {
            hits.fetch_add(1, Ordering::SeqCst);
            StatusCode::from_u16(code)
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
                .into_response()
        }
        MockUpstream::Slow(delay) => {
            tokio::time::sleep(delay).await;
            Json(full_record()).into_response()
        }
    }
}

/// Serve `mock` on an ephemeral port and return its APOD URL
pub async fn spawn_upstream(mock: MockUpstream) -> String {
    let app = Router::new().route(
        "/planetary/apod",
        get(move |Query(query): Query<HashMap<String, String>>| {
            let mock = mock.clone();
            async move { respond(mock, query).await }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}/planetary/apod")
}

/// URL of a port nothing listens on
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/planetary/apod")
}

use axum::{
    Router,
    extract::State,
    http::{HeaderValue, Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::any,
};
use seismos_core::QuakeResponse;
use std::sync::Arc;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::fetcher::PageFetcher;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";
pub const ALLOWED_METHODS: &str = "GET, PUT, OPTIONS";

pub struct AppState {
    pub fetcher: Arc<dyn PageFetcher>,
    /// Page holding the listing
    pub source_url: String,
    /// Prefix for every entry link
    pub base_url: String,
}

/// JSON payload with an explicit status and a UTF-8 content type.
pub struct JsonBody(pub StatusCode, pub QuakeResponse);

impl IntoResponse for JsonBody {
    fn into_response(self) -> Response {
        let JsonBody(status, payload) = self;
        match serde_json::to_vec(&payload) {
            Ok(body) => (status, [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)], body).into_response(),
            Err(e) => {
                tracing::error!("Failed to serialize response: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
            }
        }
    }
}

/// Fetch, extract, then dispatch on the request method.
async fn quakes(State(state): State<Arc<AppState>>, method: Method) -> Result<JsonBody, ApiError> {
    let html = state.fetcher.fetch(&state.source_url).await?;

    let records = seismos_core::extract(&html, &state.base_url);
    tracing::info!("{} {} quake entries", method, records.len());

    let (payload, status) = seismos_core::handle(method.as_str(), &records);
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    Ok(JsonBody(status, payload))
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", any(quakes))
        .with_state(state)
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        ))
        .layer(TraceLayer::new_for_http())
}

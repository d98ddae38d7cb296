use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use seismos_core::QuakeResponse;

use crate::fetcher::FetchError;
use crate::routes::JsonBody;

pub const FETCH_FAILED_MESSAGE: &str = "Failed to retrieve the webpage.";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Fetch(e) => {
                tracing::error!(error = %e, "Failed to retrieve quake listing");
                (StatusCode::BAD_GATEWAY, FETCH_FAILED_MESSAGE)
            }
        };

        JsonBody(status, QuakeResponse::error(message)).into_response()
    }
}

// --- File: crates/hireloop_common/src/http.rs ---
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{debug, error};

use crate::error::{HireloopError, HttpStatusCode};

/// Extension trait for HireloopError to convert it to an Axum HTTP response.
pub trait IntoHttpResponse {
    /// Converts the error into an Axum HTTP response.
    fn into_http_response(self) -> Response;
}

impl IntoHttpResponse for HireloopError {
    fn into_http_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status_code.is_server_error() {
            error!("Request failed: {}", self);
        } else {
            debug!("Request rejected ({}): {}", self.kind(), self);
        }

        let body = Json(json!({
            "error": {
                "message": self.to_string(),
                "code": status_code.as_u16(),
                "kind": self.kind(),
            }
        }));

        (status_code, body).into_response()
    }
}

/// Implement IntoResponse for HireloopError to make it easier to use in Axum handlers.
impl IntoResponse for HireloopError {
    fn into_response(self) -> Response {
        self.into_http_response()
    }
}

/// Converts a domain result into a JSON handler result.
pub fn handle_json_result<T, E>(result: Result<T, E>) -> Result<Json<T>, HireloopError>
where
    T: serde::Serialize,
    E: Into<HireloopError>,
{
    result.map(Json).map_err(Into::into)
}

use axum::{
    Json,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::domain::error::DwijabakeError;

impl IntoResponse for DwijabakeError {
    fn into_response(self) -> Response {
        let status = match self {
            DwijabakeError::NotFound(_) => StatusCode::NOT_FOUND,
            DwijabakeError::Http(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> DwijabakeError {
    DwijabakeError::NotFound(uri.path().to_string())
}

use crate::app_error::AppError;
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

const GENERIC_FAILURE: &str = "Something went wrong";
const FETCH_FAILURE: &str = "Failed to fetch entries";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error before it gets converted into a status response.
        // Only the fixed public message below leaves the process.
        if self.is_client_error() {
            tracing::warn!(error = %self, "Request rejected");
        } else {
            tracing::error!(error = %self, "Request failed");
        }

        match self {
            AppError::EmailRequired | AppError::InvalidEmail => {
                let message = self.to_string();
                error_resp(StatusCode::BAD_REQUEST, &message)
            }
            AppError::FetchFailed(_) => {
                error_resp(StatusCode::INTERNAL_SERVER_ERROR, FETCH_FAILURE)
            }
            AppError::Database(_) => {
                error_resp(StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE)
            }
        }
    }
}

fn error_resp(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

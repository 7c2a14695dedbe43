use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("database error: `{0}`")]
    RepoError(#[from] repos::error::RepoError),

    #[error("annotation {0} has a malformed bbox")]
    InvalidBbox(usize),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            // Persistence faults all surface as a single internal error kind.
            ApiError::RepoError(err) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Error processing annotations: {err}"))
            }
            ApiError::InvalidBbox(index) => (
                StatusCode::BAD_REQUEST,
                format!("annotation {index} must have a 4-element bbox"),
            ),
        };

        let body = Json(serde_json::json!({
            "result": "failed",
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::prelude::AppError;

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) | AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Io(_) | AppError::Parse(_) | AppError::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match &self {
            AppError::Validation(errors) => json!({ "errors": errors }),
            AppError::NotFound(item) => json!({ "message": format!("{} Not Found", item) }),
            AppError::RouteNotFound => json!({ "message": "Not Found" }),
            AppError::MethodNotAllowed => json!({ "message": "Method Not Allowed" }),
            _ => {
                // Internal details stay in the log
                tracing::error!(error = %self, "request failed");
                json!({ "message": "Server Error" })
            }
        };

        (status, Json(body)).into_response()
    }
}

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use intake_store::StoreError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Form not found")]
    NotFound,
    #[error("Invalid request body: {0}")]
    Validation(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

// Body rejections (unparseable JSON, missing fields, wrong types, wrong
// content type) all surface as 422, never axum's default status mix.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Form not found".to_string()),
            ApiError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::Store(err) => {
                tracing::error!("Store failure: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        let body = Json(json!({
            "detail": detail
        }));

        (status, body).into_response()
    }
}

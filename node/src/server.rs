// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use axum::{
    routing::{get, post},
    Router,
    extract::{Path, State},
    http::HeaderValue,
    Json,
};
use axum_extra::extract::WithRejection;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};

use intake_store::{FormRecord, FormStore};

use crate::api::{SaveFormRequest, SaveFormResponse};
use crate::errors::ApiError;

/// Shared handle to the store. Handlers only see the `FormStore` trait, so
/// the backing implementation can change without touching this module.
pub type SharedStore = Arc<dyn FormStore + Send + Sync>;

pub fn build_router(store: SharedStore, allowed_origin: HeaderValue) -> Router {
    // One exact origin, echoed methods and headers. Wildcards are off the
    // table because the layer also allows credentials.
    let cors = CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .route("/api/save-form", post(save_form))
        .route("/api/forms/:form_id", get(get_form))
        // Observability
        .route("/metrics", get(metrics_handler))
        .layer(cors)
        .with_state(store)
}

async fn save_form(
    State(store): State<SharedStore>,
    WithRejection(Json(payload), _): WithRejection<Json<SaveFormRequest>, ApiError>,
) -> Result<Json<SaveFormResponse>, ApiError> {
    let record: FormRecord = payload.into();
    store.append(&record)?;

    metrics::counter!("intake_forms_saved_total", 1);
    tracing::debug!("Saved form {:?}", record.form_id);

    Ok(Json(SaveFormResponse {
        message: "Form saved successfully".to_string(),
    }))
}

async fn get_form(
    State(store): State<SharedStore>,
    Path(form_id): Path<String>,
) -> Result<Json<FormRecord>, ApiError> {
    metrics::counter!("intake_form_lookups_total", 1);

    match store.find(&form_id)? {
        Some(record) => Ok(Json(record)),
        None => Err(ApiError::NotFound),
    }
}

async fn metrics_handler() -> String {
    crate::telemetry::get_metrics()
}

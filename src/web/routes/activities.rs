use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::registry::{RegistryError, SharedRegistry};

#[derive(Debug, Deserialize)]
pub struct StudentQuery {
    email: String,
}

pub async fn activities_handler(State(registry): State<SharedRegistry>) -> Json<Value> {
    Json(serde_json::json!(registry.snapshot()))
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<StudentQuery>,
    State(registry): State<SharedRegistry>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    registry
        .signup(&activity_name, &query.email)
        .map(|message| Json(serde_json::json!({ "message": message })))
        .map_err(|e| {
            warn!("Signup for {} rejected: {}", activity_name, e);
            error_response(e)
        })
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<StudentQuery>,
    State(registry): State<SharedRegistry>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    registry
        .unregister(&activity_name, &query.email)
        .map(|message| Json(serde_json::json!({ "message": message })))
        .map_err(|e| {
            warn!("Unregister from {} rejected: {}", activity_name, e);
            error_response(e)
        })
}

fn error_response(err: RegistryError) -> (StatusCode, Json<Value>) {
    (
        err.status(),
        Json(serde_json::json!({ "detail": err.to_string() })),
    )
}

//! `POST /api/save` — decode the body, insert one row, respond.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::error::ApiError;
use crate::routes::AppState;

/// Request body for the save endpoint.
///
/// `text` defaults to the empty string when absent: an object without
/// the field is accepted and stored as-is. The endpoint is deliberately
/// permissive beyond JSON well-formedness.
#[derive(Debug, Deserialize)]
pub struct SaveRequest {
    #[serde(default)]
    pub text: String,
}

/// Decode → insert → respond. Decode failures never touch the store.
pub async fn save_text(
    State(state): State<AppState>,
    payload: Result<Json<SaveRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Json(data) = payload.map_err(|_| ApiError::InvalidBody)?;

    if let Err(err) = state.store.insert_text(&data.text).await {
        error!(%err, "insert failed");
        return Err(ApiError::SaveFailed);
    }

    Ok(Json(json!({ "status": "success" })))
}

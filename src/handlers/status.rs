//! Service status handler

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    status: &'static str,
    version: &'static str,
    ai_enabled: bool,
}

/// Report service liveness and capability flags.
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "online",
        version: env!("CARGO_PKG_VERSION"),
        ai_enabled: true,
    })
}

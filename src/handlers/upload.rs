//! Sensor file upload handler

use axum::extract::{Multipart, Query, State};
use axum::Json;
use serde::Serialize;

use crate::vessel::ingest::{self, SensorOverrides};
use crate::{AppError, AppResult, AppState};

use super::VesselSelector;

/// Multipart field name the dashboard sends the file under.
const UPLOAD_FIELD: &str = "sensorFile";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    success: bool,
    message: &'static str,
    data: SensorOverrides,
}

/// Accept a sensor data file and fold recognized values into the vessel baseline.
///
/// The file arrives as the `sensorFile` multipart field in JSON, CSV, or
/// `key: value` form. Unrecognized fields are ignored; a recognized field
/// with a non-numeric value rejects the whole upload without touching the
/// baseline.
pub async fn upload_sensor_data(
    State(state): State<AppState>,
    Query(selector): Query<VesselSelector>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let mut file: Option<(Option<String>, String)> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(UPLOAD_FIELD) {
            let content_type = field.content_type().map(str::to_string);
            let content = field.text().await?;
            file = Some((content_type, content));
            break;
        }
    }

    let (content_type, content) = file.ok_or(AppError::MissingUpload)?;
    let overrides = ingest::parse_sensor_file(&content, content_type.as_deref())?;

    let vessel = state.registry.get_or_create(selector.id());
    vessel.apply_overrides(&overrides);

    tracing::info!(
        vessel = %vessel.id(),
        applied = !overrides.is_empty(),
        "sensor file processed"
    );

    Ok(Json(UploadResponse {
        success: true,
        message: "Sensor data uploaded and applied",
        data: overrides,
    }))
}

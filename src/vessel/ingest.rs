//! Uploaded sensor file parsing
//!
//! Accepts the three formats crews actually send: JSON documents, two-line
//! CSV (dotted headers, then values), and plain `key: value` text. Only
//! the engine fields are recognized; everything else in a file is ignored.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Values recognized from an uploaded sensor file.
///
/// Doubles as the response echo, so absent fields stay off the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensorOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<EngineOverrides>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oil_pressure: Option<f64>,
}

impl SensorOverrides {
    /// Whether the file contained any recognized value at all.
    pub fn is_empty(&self) -> bool {
        self.engine.is_none()
    }

    fn engine_mut(&mut self) -> &mut EngineOverrides {
        self.engine.get_or_insert_with(EngineOverrides::default)
    }
}

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("uploaded file is empty")]
    Empty,

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV needs a header row and a value row")]
    MissingCsvValues,

    #[error("field {field} is not numeric: {value:?}")]
    NonNumeric { field: String, value: String },
}

/// Parse an uploaded sensor file into overrides.
///
/// Format detection mirrors what the dashboard has always accepted: a JSON
/// content type or a leading brace means JSON, a CSV content type or any
/// comma means CSV, and everything else is treated as `key: value` lines.
pub fn parse_sensor_file(
    content: &str,
    content_type: Option<&str>,
) -> Result<SensorOverrides, IngestError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(IngestError::Empty);
    }
    let content_type = content_type.unwrap_or("");

    if content_type.contains("json") || trimmed.starts_with('{') {
        return parse_json(trimmed);
    }
    if content_type.contains("csv") || trimmed.contains(',') {
        return parse_csv(trimmed);
    }
    parse_key_values(trimmed)
}

fn parse_json(content: &str) -> Result<SensorOverrides, IngestError> {
    Ok(serde_json::from_str(content)?)
}

fn parse_csv(content: &str) -> Result<SensorOverrides, IngestError> {
    let mut lines = content.lines();
    let headers = lines.next().ok_or(IngestError::MissingCsvValues)?;
    let values = lines.next().ok_or(IngestError::MissingCsvValues)?;

    let mut overrides = SensorOverrides::default();
    for (header, value) in headers.split(',').zip(values.split(',')) {
        apply_field(&mut overrides, header.trim(), value.trim())?;
    }
    Ok(overrides)
}

fn parse_key_values(content: &str) -> Result<SensorOverrides, IngestError> {
    let mut overrides = SensorOverrides::default();
    for line in content.lines() {
        if let Some((key, value)) = line.split_once(':') {
            let (key, value) = (key.trim(), value.trim());
            if !key.is_empty() && !value.is_empty() {
                apply_field(&mut overrides, key, value)?;
            }
        }
    }
    Ok(overrides)
}

/// Route one dotted field name to the override it names, if recognized.
fn apply_field(
    overrides: &mut SensorOverrides,
    field: &str,
    raw: &str,
) -> Result<(), IngestError> {
    match field {
        "engine.temperature" => {
            overrides.engine_mut().temperature = Some(parse_numeric(field, raw)?);
        }
        "engine.rpm" => {
            overrides.engine_mut().rpm = Some(parse_numeric(field, raw)?);
        }
        "engine.oilPressure" => {
            overrides.engine_mut().oil_pressure = Some(parse_numeric(field, raw)?);
        }
        _ => {}
    }
    Ok(())
}

fn parse_numeric(field: &str, raw: &str) -> Result<f64, IngestError> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| IngestError::NonNumeric {
            field: field.to_string(),
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_extracts_recognized_engine_fields() {
        let content =
            r#"{"engine": {"temperature": 95.5, "rpm": 1500, "spare": 1}, "cabin": {"humidity": 60}}"#;
        let overrides = parse_sensor_file(content, Some("application/json")).unwrap();

        let engine = overrides.engine.unwrap();
        assert_eq!(engine.temperature, Some(95.5));
        assert_eq!(engine.rpm, Some(1500.0));
        assert_eq!(engine.oil_pressure, None);
    }

    #[test]
    fn leading_brace_means_json_without_a_content_type() {
        let overrides = parse_sensor_file(r#"{"engine":{"oilPressure":38}}"#, None).unwrap();
        assert_eq!(overrides.engine.unwrap().oil_pressure, Some(38.0));
    }

    #[test]
    fn json_with_non_numeric_engine_value_is_rejected() {
        let err = parse_sensor_file(r#"{"engine": {"temperature": "hot"}}"#, Some("application/json"))
            .unwrap_err();
        assert!(matches!(err, IngestError::Json(_)));
    }

    #[test]
    fn csv_maps_dotted_headers_to_values() {
        let content = "engine.temperature, engine.rpm, navigation.speed\n88.5, 1650, 12\n";
        let overrides = parse_sensor_file(content, Some("text/csv")).unwrap();

        let engine = overrides.engine.unwrap();
        assert_eq!(engine.temperature, Some(88.5));
        assert_eq!(engine.rpm, Some(1650.0));
        assert_eq!(engine.oil_pressure, None);
    }

    #[test]
    fn csv_without_a_value_row_is_rejected() {
        let err = parse_sensor_file("engine.temperature,engine.rpm", None).unwrap_err();
        assert!(matches!(err, IngestError::MissingCsvValues));
    }

    #[test]
    fn csv_with_non_numeric_recognized_value_is_rejected() {
        let err = parse_sensor_file("engine.rpm,engine.temperature\nfast,90\n", None).unwrap_err();
        assert!(matches!(err, IngestError::NonNumeric { .. }));
    }

    #[test]
    fn key_value_lines_parse_and_skip_unknown_keys() {
        let content = "engine.temperature: 91.2\nnotes: checked at dock\nengine.oilPressure: 41\n";
        let overrides = parse_sensor_file(content, Some("text/plain")).unwrap();

        let engine = overrides.engine.unwrap();
        assert_eq!(engine.temperature, Some(91.2));
        assert_eq!(engine.oil_pressure, Some(41.0));
        assert_eq!(engine.rpm, None);
    }

    #[test]
    fn key_value_non_numeric_recognized_value_is_rejected() {
        let err = parse_sensor_file("engine.temperature: warm\n", None).unwrap_err();
        assert!(matches!(err, IngestError::NonNumeric { .. }));
    }

    #[test]
    fn empty_file_is_rejected() {
        let err = parse_sensor_file("  \n ", None).unwrap_err();
        assert!(matches!(err, IngestError::Empty));
    }

    #[test]
    fn unrecognized_content_yields_empty_overrides() {
        let overrides = parse_sensor_file("hello world", None).unwrap();
        assert!(overrides.is_empty());
    }
}

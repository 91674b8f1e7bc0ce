//! Anomaly record model

use serde::{Deserialize, Serialize};

/// Which detection rule fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyKind {
    EngineOverheat,
    LowOilPressure,
    LowBattery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Medium,
    High,
    Critical,
}

/// One rule violation raised against a single reading.
///
/// `baseline` carries the rolling average the reading was judged against,
/// rounded to one decimal. Rules with a fixed threshold leave it unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    #[serde(rename = "type")]
    pub kind: AnomalyKind,
    pub severity: Severity,
    pub message: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anomaly_serializes_with_type_tag() {
        let anomaly = Anomaly {
            kind: AnomalyKind::EngineOverheat,
            severity: Severity::High,
            message: "Engine temperature significantly above baseline".to_string(),
            value: 97.3,
            baseline: Some(81.9),
        };
        let value = serde_json::to_value(&anomaly).unwrap();
        assert_eq!(value["type"], "engine_overheat");
        assert_eq!(value["severity"], "high");
        assert_eq!(value["value"], 97.3);
        assert_eq!(value["baseline"], 81.9);
    }

    #[test]
    fn fixed_threshold_anomaly_has_no_baseline_field() {
        let anomaly = Anomaly {
            kind: AnomalyKind::LowBattery,
            severity: Severity::Medium,
            message: "Battery voltage low - charging system may need attention".to_string(),
            value: 12.1,
            baseline: None,
        };
        let value = serde_json::to_value(&anomaly).unwrap();
        assert_eq!(value["type"], "low_battery");
        assert!(value.get("baseline").is_none());
    }
}

//! Baseline-relative anomaly detection
//!
//! Compares the newest reading against rolling averages of the recent
//! history. Detection stays quiet until enough samples have accumulated
//! for the averages to mean anything.

use crate::models::{Anomaly, AnomalyKind, Severity, Snapshot};

use super::history::HistoryWindow;

/// Samples required before the rolling averages count as calibrated.
pub const CALIBRATION_SAMPLES: usize = 10;

/// Degrees above the rolling average temperature that trip an overheat.
const OVERHEAT_MARGIN: f64 = 15.0;

/// PSI below the rolling average oil pressure that trips a pressure alarm.
const OIL_PRESSURE_MARGIN: f64 = 8.0;

/// Fixed low-voltage floor, in volts.
const LOW_BATTERY_VOLTS: f64 = 12.5;

/// Whether `window` holds enough samples to judge readings against.
pub fn is_calibrated(window: &HistoryWindow) -> bool {
    window.len() >= CALIBRATION_SAMPLES
}

/// Evaluate `reading` against the rolling window.
///
/// Rules fire independently, so one reading can raise several anomalies
/// at once. Returns an empty list until the window is calibrated.
pub fn detect_anomalies(reading: &Snapshot, window: &HistoryWindow) -> Vec<Anomaly> {
    let mut anomalies = Vec::new();
    if !is_calibrated(window) {
        return anomalies;
    }

    let samples = window.len() as f64;
    let avg_temperature: f64 =
        window.iter().map(|r| r.engine.temperature).sum::<f64>() / samples;
    let avg_oil_pressure: f64 =
        window.iter().map(|r| r.engine.oil_pressure).sum::<f64>() / samples;

    if reading.engine.temperature > avg_temperature + OVERHEAT_MARGIN {
        anomalies.push(Anomaly {
            kind: AnomalyKind::EngineOverheat,
            severity: Severity::High,
            message: "Engine temperature significantly above baseline".to_string(),
            value: reading.engine.temperature,
            baseline: Some(round_tenth(avg_temperature)),
        });
    }

    if reading.engine.oil_pressure < avg_oil_pressure - OIL_PRESSURE_MARGIN {
        anomalies.push(Anomaly {
            kind: AnomalyKind::LowOilPressure,
            severity: Severity::Critical,
            message: "Oil pressure below safe operating range".to_string(),
            value: reading.engine.oil_pressure,
            baseline: Some(round_tenth(avg_oil_pressure)),
        });
    }

    if reading.electrical.battery_voltage < LOW_BATTERY_VOLTS {
        anomalies.push(Anomaly {
            kind: AnomalyKind::LowBattery,
            severity: Severity::Medium,
            message: "Battery voltage low - charging system may need attention".to_string(),
            value: reading.electrical.battery_voltage,
            baseline: None,
        });
    }

    anomalies
}

/// Round to one decimal for display next to raw values.
fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

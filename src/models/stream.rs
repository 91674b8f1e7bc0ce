//! Streaming payload model
//!
//! The JSON object pushed to every connected dashboard once per tick.

use serde::{Deserialize, Serialize};

use super::anomaly::Anomaly;
use super::snapshot::Snapshot;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamPayload {
    pub sensor_data: Snapshot,
    pub anomalies: Vec<Anomaly>,
    pub ai_status: MonitorStatus,
}

/// Detector state as shown to the client.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorStatus {
    pub monitoring: bool,
    pub samples_collected: usize,
    pub baseline_calibrated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monitor_status_serializes_in_camel_case() {
        let status = MonitorStatus {
            monitoring: true,
            samples_collected: 7,
            baseline_calibrated: false,
        };
        let value = serde_json::to_value(status).unwrap();
        assert_eq!(value["monitoring"], true);
        assert_eq!(value["samplesCollected"], 7);
        assert_eq!(value["baselineCalibrated"], false);
    }
}

//! Sensor snapshot model
//!
//! One point-in-time reading of every vessel sensor. Snapshots are produced
//! by the simulator once per tick and never modified afterwards.

use serde::{Deserialize, Serialize};

/// Full reading of all vessel sensors at one instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub engine: EngineReading,
    pub fuel: FuelReading,
    pub electrical: ElectricalReading,
    pub navigation: NavigationReading,
    pub sonar: SonarReading,
    pub resonance: ResonanceReading,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineReading {
    /// Degrees Fahrenheit.
    pub temperature: f64,
    /// Never negative.
    pub rpm: f64,
    /// PSI.
    pub oil_pressure: f64,
    pub run_hours: f64,
    pub status: EngineStatus,
}

/// Engine health as reported alongside each reading.
///
/// The simulator only ever reports `Normal` or `Warning`; `Testing` is
/// reserved for readings sourced from uploaded test data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineStatus {
    Normal,
    Warning,
    Testing,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelReading {
    /// Percent of tank capacity, clamped to [0, 100].
    pub level: f64,
    /// Gallons per hour.
    pub consumption_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectricalReading {
    pub battery_voltage: f64,
    pub amperage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationReading {
    /// Water depth under the keel, in feet.
    pub depth: f64,
    /// Knots, never negative.
    pub speed: f64,
    /// Degrees, [0, 360).
    pub heading: f64,
    pub gps: GpsFix,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GpsFix {
    pub latitude: f64,
    pub longitude: f64,
}

/// Fish finder output. Contact fields are only present when a contact
/// was actually detected on this reading.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SonarReading {
    pub fish_detected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fish_depth: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fish_size: Option<FishSize>,
    pub bottom_hardness: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FishSize {
    Small,
    Medium,
    Large,
}

/// Vibration amplitudes picked up by the hull-mounted resonance sensors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResonanceReading {
    pub propeller: f64,
    pub hull: f64,
    pub engine: f64,
}

//! Vessel state and registry
//!
//! Each vessel owns a simulator and a rolling history window. A registry
//! keyed by vessel id hands out shared handles so stream connections and
//! uploads targeting the same vessel land on the same state.

pub mod baseline;
pub mod detector;
pub mod history;
pub mod ingest;
pub mod simulator;

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::models::{MonitorStatus, StreamPayload};

use baseline::Baseline;
use detector::CALIBRATION_SAMPLES;
use history::HistoryWindow;
use ingest::SensorOverrides;
use simulator::ReadingSimulator;

/// Vessel id used when clients do not name one.
pub const DEFAULT_VESSEL_ID: &str = "default";

/// Live state for one vessel.
///
/// Locks guard the simulator and history independently and are never held
/// across await points.
pub struct Vessel {
    id: String,
    simulator: Mutex<ReadingSimulator>,
    history: Mutex<HistoryWindow>,
}

impl Vessel {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            simulator: Mutex::new(ReadingSimulator::new(Baseline::default())),
            history: Mutex::new(HistoryWindow::new()),
        }
    }

    /// Vessel with a seeded simulator, for reproducible streams.
    pub fn with_seed(id: impl Into<String>, seed: u64) -> Self {
        Self {
            id: id.into(),
            simulator: Mutex::new(ReadingSimulator::with_seed(Baseline::default(), seed)),
            history: Mutex::new(HistoryWindow::new()),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Advance the vessel by one reading and evaluate it.
    ///
    /// The reading joins the history before evaluation, so the rolling
    /// averages include the newest sample and `samples_collected` matches
    /// exactly what the evaluation saw.
    pub fn tick(&self) -> StreamPayload {
        let reading = self.simulator.lock().next_reading();

        let mut history = self.history.lock();
        history.push(reading.clone());
        let anomalies = detector::detect_anomalies(&reading, &history);
        let samples_collected = history.len();
        drop(history);

        if !anomalies.is_empty() {
            tracing::warn!(
                vessel = %self.id,
                count = anomalies.len(),
                "anomalies detected"
            );
        }

        StreamPayload {
            sensor_data: reading,
            anomalies,
            ai_status: MonitorStatus {
                monitoring: true,
                samples_collected,
                baseline_calibrated: samples_collected >= CALIBRATION_SAMPLES,
            },
        }
    }

    /// Fold uploaded sensor values into this vessel's baseline.
    pub fn apply_overrides(&self, overrides: &SensorOverrides) {
        let mut simulator = self.simulator.lock();
        simulator.apply_overrides(overrides);

        let baseline = simulator.baseline();
        tracing::info!(
            vessel = %self.id,
            engine_temperature = baseline.engine_temperature,
            engine_rpm = baseline.engine_rpm,
            oil_pressure = baseline.oil_pressure,
            "baseline updated"
        );
    }
}

/// All live vessels, keyed by id.
///
/// Vessels are created on first reference and live for the life of the
/// process.
#[derive(Default)]
pub struct VesselRegistry {
    vessels: RwLock<HashMap<String, Arc<Vessel>>>,
    seed: Option<u64>,
}

impl VesselRegistry {
    /// Registry whose vessels draw from OS entropy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry whose vessels run seeded, reproducible simulations.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            vessels: RwLock::new(HashMap::new()),
            seed: Some(seed),
        }
    }

    /// Shared handle to the named vessel, creating it on first use.
    pub fn get_or_create(&self, id: &str) -> Arc<Vessel> {
        if let Some(vessel) = self.vessels.read().get(id) {
            return Arc::clone(vessel);
        }

        let mut vessels = self.vessels.write();
        let vessel = vessels.entry(id.to_string()).or_insert_with(|| {
            tracing::info!(vessel = %id, "vessel registered");
            Arc::new(match self.seed {
                Some(seed) => Vessel::with_seed(id, seed),
                None => Vessel::new(id),
            })
        });
        Arc::clone(vessel)
    }
}

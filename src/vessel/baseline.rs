//! Nominal operating values

/// The operating point a healthy vessel idles around.
///
/// Every generated reading starts from these values before noise is
/// applied. Uploaded sensor files can retune the engine values at runtime;
/// the rest stay fixed for the life of the vessel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Baseline {
    pub engine_temperature: f64,
    pub engine_rpm: f64,
    pub oil_pressure: f64,
    pub fuel_level: f64,
    pub battery_voltage: f64,
    pub water_depth: f64,
    pub boat_speed: f64,
    pub gps_latitude: f64,
    pub gps_longitude: f64,
    pub engine_run_hours: f64,
}

impl Default for Baseline {
    fn default() -> Self {
        Self {
            engine_temperature: 82.0,
            engine_rpm: 1200.0,
            oil_pressure: 45.0,
            fuel_level: 75.0,
            battery_voltage: 13.8,
            water_depth: 45.0,
            boat_speed: 0.0,
            gps_latitude: 37.7749,
            gps_longitude: -122.4194,
            engine_run_hours: 1247.5,
        }
    }
}

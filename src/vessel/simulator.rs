//! Sensor reading simulator
//!
//! Produces one full snapshot per call by jittering the vessel baseline
//! with uniform noise. A small fraction of readings carry an injected
//! engine fault so the detector has something to find. Stands in for a
//! real sensor-acquisition layer.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{
    ElectricalReading, EngineReading, EngineStatus, FishSize, FuelReading, GpsFix,
    NavigationReading, ResonanceReading, Snapshot, SonarReading,
};

use super::baseline::Baseline;
use super::ingest::SensorOverrides;

/// Chance that a reading carries an injected engine fault.
const FAULT_PROBABILITY: f64 = 0.02;

/// Chance that the sonar reports a fish contact.
const FISH_PROBABILITY: f64 = 0.15;

/// Temperature boost during an injected fault, in degrees.
const FAULT_TEMPERATURE_BOOST: f64 = 20.0;

/// Oil pressure drop during an injected fault, in PSI.
const FAULT_OIL_PRESSURE_DROP: f64 = 10.0;

pub struct ReadingSimulator {
    baseline: Baseline,
    rng: StdRng,
}

impl ReadingSimulator {
    /// Simulator seeded from the OS entropy source.
    pub fn new(baseline: Baseline) -> Self {
        Self {
            baseline,
            rng: StdRng::from_entropy(),
        }
    }

    /// Simulator with a fixed seed. The reading stream becomes reproducible.
    pub fn with_seed(baseline: Baseline, seed: u64) -> Self {
        Self {
            baseline,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn baseline(&self) -> &Baseline {
        &self.baseline
    }

    /// Fold uploaded sensor values into the baseline.
    ///
    /// Later readings jitter around the new values, so a retuned engine
    /// temperature shifts the whole stream rather than a single snapshot.
    pub fn apply_overrides(&mut self, overrides: &SensorOverrides) {
        if let Some(engine) = &overrides.engine {
            if let Some(temperature) = engine.temperature {
                self.baseline.engine_temperature = temperature;
            }
            if let Some(rpm) = engine.rpm {
                self.baseline.engine_rpm = rpm;
            }
            if let Some(oil_pressure) = engine.oil_pressure {
                self.baseline.oil_pressure = oil_pressure;
            }
        }
    }

    /// Generate the next reading.
    pub fn next_reading(&mut self) -> Snapshot {
        let base = self.baseline;
        let fault = self.rng.gen_bool(FAULT_PROBABILITY);

        let mut temperature = self.noise(base.engine_temperature, 4.0);
        let mut oil_pressure = self.noise(base.oil_pressure, 3.0);
        if fault {
            temperature += FAULT_TEMPERATURE_BOOST;
            oil_pressure -= FAULT_OIL_PRESSURE_DROP;
        }

        let fish_detected = self.rng.gen_bool(FISH_PROBABILITY);
        let (fish_depth, fish_size) = if fish_detected {
            (Some(self.noise(30.0, 10.0)), Some(self.fish_size()))
        } else {
            (None, None)
        };

        Snapshot {
            timestamp: Utc::now().timestamp_millis(),
            engine: EngineReading {
                temperature,
                rpm: self.noise(base.engine_rpm, 100.0).max(0.0),
                oil_pressure,
                run_hours: base.engine_run_hours + self.rng.gen::<f64>() * 0.01,
                status: if fault {
                    EngineStatus::Warning
                } else {
                    EngineStatus::Normal
                },
            },
            fuel: FuelReading {
                level: (base.fuel_level - self.rng.gen::<f64>() * 0.01).clamp(0.0, 100.0),
                consumption_rate: self.noise(2.5, 0.5),
            },
            electrical: ElectricalReading {
                battery_voltage: self.noise(base.battery_voltage, 0.2),
                amperage: self.noise(15.0, 3.0),
            },
            navigation: NavigationReading {
                depth: self.noise(base.water_depth, 5.0),
                speed: self.noise(base.boat_speed, 2.0).max(0.0),
                heading: self.rng.gen::<f64>() * 360.0,
                gps: GpsFix {
                    latitude: base.gps_latitude + (self.rng.gen::<f64>() - 0.5) * 0.001,
                    longitude: base.gps_longitude + (self.rng.gen::<f64>() - 0.5) * 0.001,
                },
            },
            sonar: SonarReading {
                fish_detected,
                fish_depth,
                fish_size,
                bottom_hardness: self.noise(50.0, 20.0),
            },
            resonance: ResonanceReading {
                propeller: self.noise(120.0, 5.0),
                hull: self.noise(60.0, 3.0),
                engine: self.noise(200.0, 10.0),
            },
        }
    }

    /// Uniform jitter of total width `variance`, centered on `base`.
    fn noise(&mut self, base: f64, variance: f64) -> f64 {
        base + (self.rng.gen::<f64>() - 0.5) * variance
    }

    fn fish_size(&mut self) -> FishSize {
        match self.rng.gen_range(0..3) {
            0 => FishSize::Small,
            1 => FishSize::Medium,
            _ => FishSize::Large,
        }
    }
}

//! Configuration module

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Milliseconds between stream payloads on each connection
    pub tick_interval_ms: u64,

    /// Fixed simulator seed for reproducible streams (unset = OS entropy)
    pub simulator_seed: Option<u64>,

    /// Environment (development, production)
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3001),

            tick_interval_ms: env::var("TICK_INTERVAL_MS")
                .ok()
                .and_then(|ms| ms.parse().ok())
                .unwrap_or(1000),

            simulator_seed: env::var("SIMULATOR_SEED")
                .ok()
                .and_then(|seed| seed.parse().ok()),

            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_flag_matches_environment() {
        let config = Config {
            port: 3001,
            tick_interval_ms: 1000,
            simulator_seed: None,
            environment: "production".to_string(),
        };
        assert!(config.is_production());

        let config = Config {
            environment: "development".to_string(),
            ..config
        };
        assert!(!config.is_production());
    }
}

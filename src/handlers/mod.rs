//! HTTP and WebSocket handlers

pub mod status;
pub mod stream;
pub mod upload;

use serde::Deserialize;

use crate::vessel::DEFAULT_VESSEL_ID;

/// Optional `?vessel=<id>` query parameter shared by stream and upload.
#[derive(Debug, Deserialize)]
pub struct VesselSelector {
    vessel: Option<String>,
}

impl VesselSelector {
    /// The vessel id to operate on, falling back to the shared default.
    pub fn id(&self) -> &str {
        self.vessel.as_deref().unwrap_or(DEFAULT_VESSEL_ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_falls_back_to_the_default_vessel() {
        let unnamed = VesselSelector { vessel: None };
        assert_eq!(unnamed.id(), DEFAULT_VESSEL_ID);

        let named = VesselSelector {
            vessel: Some("skua".to_string()),
        };
        assert_eq!(named.id(), "skua");
    }
}

//! Wire-format models
//!
//! Everything the dashboard sees over the wire lives here. Field names
//! serialize in camelCase to match the frontend.

pub mod snapshot;
pub mod anomaly;
pub mod stream;

pub use snapshot::*;
pub use anomaly::*;
pub use stream::*;

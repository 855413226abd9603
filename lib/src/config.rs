use serde::{Deserialize, Serialize};

use crate::flight::ShotInputs;
use crate::model::FlightModel;
use crate::units::UnitSystem;

// ---------------------------------------------------------------------------
// Persisted config types (shared between app and HTTP clients)
// ---------------------------------------------------------------------------

/// Top-level persisted config. Every section is optional in the TOML file;
/// missing sections and keys take the built-in defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BallflightConfig {
    /// Unit system for shot readouts (freedom units by default)
    #[serde(default)]
    pub default_units: UnitSystem,
    #[serde(default)]
    pub webserver: WebserverSection,
    /// Inputs used when a CLI flag is omitted
    #[serde(default)]
    pub shot: ShotInputs,
    /// Tuning overrides for the flight model
    #[serde(default)]
    pub model: FlightModel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebserverSection {
    pub bind: String,
}

impl Default for WebserverSection {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3030".into(),
        }
    }
}

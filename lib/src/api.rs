//! REST API request/response types shared between the server and clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::flight::{ShotInputs, ShotResult, simulate_with};
use crate::model::FlightModel;
use crate::shape::ShotShape;
use crate::summary::ShotSummary;
use crate::units::UnitSystem;

/// A form value as typed by the user: a JSON number, raw text, or anything
/// else a client happens to send.
///
/// Text that doesn't parse to a finite number coerces to 0, as do `null`,
/// booleans, arrays, objects and a missing field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormNumber {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl FormNumber {
    pub fn value(&self) -> f64 {
        let v = match self {
            Self::Number(v) => *v,
            Self::Text(s) => s.trim().parse().unwrap_or(0.0),
            Self::Other(_) => 0.0,
        };
        if v.is_finite() { v } else { 0.0 }
    }
}

impl Default for FormNumber {
    fn default() -> Self {
        Self::Number(0.0)
    }
}

/// POST /api/shot request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShotRequest {
    #[serde(default)]
    pub club_face_deg: FormNumber,
    #[serde(default)]
    pub club_path_deg: FormNumber,
    #[serde(default)]
    pub swing_speed_mph: FormNumber,
    #[serde(default)]
    pub launch_angle_deg: FormNumber,
    #[serde(default)]
    pub target_yards: Option<FormNumber>,
}

impl ShotRequest {
    pub fn to_inputs(&self) -> ShotInputs {
        ShotInputs {
            face_deg: self.club_face_deg.value(),
            path_deg: self.club_path_deg.value(),
            swing_speed_mph: self.swing_speed_mph.value(),
            launch_deg: self.launch_angle_deg.value(),
            target_yards: self
                .target_yards
                .as_ref()
                .map(FormNumber::value)
                .unwrap_or(ShotInputs::default().target_yards),
        }
    }
}

/// One computed shot as held in the server's current-result slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShotRecord {
    pub shot_number: u64,
    pub timestamp: DateTime<Utc>,
    pub inputs: ShotInputs,
    pub result: ShotResult,
    pub summary: ShotSummary,
}

impl ShotRecord {
    /// Simulate `inputs` and stamp the result with the current UTC time.
    pub fn compute(shot_number: u64, inputs: ShotInputs, model: &FlightModel) -> Self {
        let result = simulate_with(&inputs, model);
        let summary = ShotSummary::new(&inputs, &result);
        Self {
            shot_number,
            timestamp: Utc::now(),
            inputs,
            result,
            summary,
        }
    }

    /// Copy of this record with the summary in the given unit system.
    pub fn with_units(&self, system: UnitSystem) -> Self {
        Self {
            summary: self.summary.to_unit_system(system),
            ..self.clone()
        }
    }
}

/// POST /api/classify request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    pub face_deg: f64,
    pub path_deg: f64,
    /// When absent, estimated from `swing_speed_mph` like the integrator does
    #[serde(default)]
    pub side_spin: Option<f64>,
    #[serde(default)]
    pub swing_speed_mph: Option<f64>,
}

/// POST /api/classify response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub shot_category: ShotShape,
    pub side_spin: f64,
}

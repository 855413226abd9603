//! Flight model tuning constants.
//!
//! These are empirical knobs, not derived physics. [`FlightModel::default`]
//! uses them exactly; a config file may override individual fields.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Club head speed to ball speed ratio.
pub const SPEED_TRANSFER: f64 = 1.4;

/// mph to m/s factor used by the flight model. Calibrated together with the
/// other constants, so it is kept as-is rather than the exact 0.44704.
pub const FLIGHT_MPH_TO_MPS: f64 = 0.4704;

/// Side spin per degree of face-to-path per mph of swing speed.
pub const SIDE_SPIN_SCALE: f64 = 10.0;

/// Linear Magnus coefficient applied to `spin x velocity`.
pub const MAGNUS_COEFFICIENT: f64 = 0.0003;

/// Vertical acceleration (m/s^2).
pub const GRAVITY: f64 = -9.81;

/// Integration step (s).
pub const TIME_STEP: f64 = 0.002;

/// Maximum simulated flight time (s).
pub const TIME_CAP: f64 = 8.0;

/// Ball height on the tee at impact (m).
pub const TEE_HEIGHT: f64 = 0.1;

/// Largest step budget a model may ask for.
pub const MAX_STEP_BUDGET: usize = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightModel {
    pub speed_transfer: f64,
    pub mph_to_mps: f64,
    pub side_spin_scale: f64,
    pub magnus_coefficient: f64,
    pub gravity: f64,
    pub time_step: f64,
    pub time_cap: f64,
    pub tee_height: f64,
}

impl Default for FlightModel {
    fn default() -> Self {
        Self {
            speed_transfer: SPEED_TRANSFER,
            mph_to_mps: FLIGHT_MPH_TO_MPS,
            side_spin_scale: SIDE_SPIN_SCALE,
            magnus_coefficient: MAGNUS_COEFFICIENT,
            gravity: GRAVITY,
            time_step: TIME_STEP,
            time_cap: TIME_CAP,
            tee_height: TEE_HEIGHT,
        }
    }
}

impl FlightModel {
    /// Ball speed (m/s) for a swing speed in mph.
    pub fn ball_speed(&self, swing_speed_mph: f64) -> f64 {
        swing_speed_mph * self.speed_transfer * self.mph_to_mps
    }

    /// Side-spin estimate from the face-to-path difference and swing speed.
    ///
    /// Same value feeds the classifier and the Magnus term.
    pub fn side_spin(&self, face_deg: f64, path_deg: f64, swing_speed_mph: f64) -> f64 {
        (path_deg - face_deg) * swing_speed_mph * self.side_spin_scale
    }

    /// Number of integration steps that fit in the time cap.
    ///
    /// Counted as an integer so float drift in an accumulated clock can't add
    /// or drop a step. A non-positive or non-finite step yields zero steps.
    pub fn max_steps(&self) -> usize {
        let steps = (self.time_cap / self.time_step).round();
        if steps.is_finite() && steps > 0.0 {
            steps as usize
        } else {
            0
        }
    }

    /// Check that the integrator can run with these parameters: every field
    /// finite, a positive time step, and a step budget in
    /// `1..=MAX_STEP_BUDGET`.
    pub fn validate(&self) -> Result<(), ModelError> {
        let fields = [
            ("speed_transfer", self.speed_transfer),
            ("mph_to_mps", self.mph_to_mps),
            ("side_spin_scale", self.side_spin_scale),
            ("magnus_coefficient", self.magnus_coefficient),
            ("gravity", self.gravity),
            ("time_step", self.time_step),
            ("time_cap", self.time_cap),
            ("tee_height", self.tee_height),
        ];
        if let Some(&(field, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ModelError::NonFinite { field });
        }
        if self.time_step <= 0.0 {
            return Err(ModelError::NonPositiveTimeStep(self.time_step));
        }
        let steps = (self.time_cap / self.time_step).round();
        if !(1.0..=MAX_STEP_BUDGET as f64).contains(&steps) {
            return Err(ModelError::StepBudget {
                steps,
                max: MAX_STEP_BUDGET,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_named_constants() {
        let m = FlightModel::default();
        assert_eq!(m.speed_transfer, 1.4);
        assert_eq!(m.mph_to_mps, 0.4704);
        assert_eq!(m.side_spin_scale, 10.0);
        assert_eq!(m.magnus_coefficient, 0.0003);
        assert_eq!(m.gravity, -9.81);
        assert_eq!(m.time_step, 0.002);
        assert_eq!(m.time_cap, 8.0);
        assert_eq!(m.tee_height, 0.1);
    }

    #[test]
    fn step_budget_is_four_thousand() {
        assert_eq!(FlightModel::default().max_steps(), 4000);
        let broken = FlightModel {
            time_step: 0.0,
            ..FlightModel::default()
        };
        assert_eq!(broken.max_steps(), 0);
    }

    #[test]
    fn default_model_is_valid() {
        assert_eq!(FlightModel::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_unrunnable_overrides() {
        let with = |f: fn(&mut FlightModel)| {
            let mut m = FlightModel::default();
            f(&mut m);
            m.validate()
        };
        assert_eq!(
            with(|m| m.time_step = f64::NAN),
            Err(ModelError::NonFinite { field: "time_step" })
        );
        assert_eq!(
            with(|m| m.gravity = f64::INFINITY),
            Err(ModelError::NonFinite { field: "gravity" })
        );
        assert_eq!(
            with(|m| m.time_step = -0.002),
            Err(ModelError::NonPositiveTimeStep(-0.002))
        );
        assert!(matches!(
            with(|m| m.time_step = 1e-12),
            Err(ModelError::StepBudget { .. })
        ));
        assert!(matches!(
            with(|m| m.time_cap = 0.0),
            Err(ModelError::StepBudget { .. })
        ));
        // large but runnable values are left alone
        assert_eq!(with(|m| m.magnus_coefficient = f64::MAX), Ok(()));
        assert_eq!(with(|m| m.gravity = 0.0), Ok(()));
    }

    #[test]
    fn ball_speed_and_side_spin() {
        let m = FlightModel::default();
        assert!((m.ball_speed(75.0) - 75.0 * 1.4 * 0.4704).abs() < 1e-12);
        assert_eq!(m.side_spin(0.0, 3.0, 80.0), 2400.0);
        assert_eq!(m.side_spin(3.0, 0.0, 80.0), -2400.0);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let m: FlightModel = serde_json::from_str(r#"{"magnus_coefficient": 0.001}"#).unwrap();
        assert_eq!(m.magnus_coefficient, 0.001);
        assert_eq!(m.speed_transfer, SPEED_TRANSFER);
    }
}

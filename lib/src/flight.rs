//! Ball flight integration from club delivery to first ground contact.
//!
//! Launch conditions are derived once from the swing inputs, then position
//! and velocity are stepped with semi-implicit Euler under gravity and a
//! linear Magnus force about a fixed vertical spin axis:
//!
//! ```text
//! for each step:
//!   pos += vel * dt                    (velocity from the previous step)
//!   stop if pos.y <= 0                 (clamp y, record carry)
//!   vel.y += g * dt
//!   vel += k * (spin x vel) * dt       (vel after gravity)
//! ```
//!
//! Only side spin is modeled. The vertical spin axis bends the path left or
//! right but never adds lift.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::FlightError;
use crate::model::FlightModel;
use crate::shape::{ShotShape, classify};
use crate::units::{Distance, METERS_PER_YARD};
use crate::vector::Vec3;

/// Club delivery for a single shot. Angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShotInputs {
    /// + = face open (points right of target at impact)
    pub face_deg: f64,
    /// Swing path relative to the target line
    pub path_deg: f64,
    pub swing_speed_mph: f64,
    pub launch_deg: f64,
    /// Pin placement for the renderer. Never used by the physics.
    pub target_yards: f64,
}

impl Default for ShotInputs {
    fn default() -> Self {
        Self {
            face_deg: 0.0,
            path_deg: 0.0,
            swing_speed_mph: 75.0,
            launch_deg: 19.0,
            target_yards: 150.0,
        }
    }
}

/// Side spin derived from delivery, and the spin vector it drives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpinState {
    /// RPM-like rate, signed like `path - face`
    pub side_spin: f64,
    /// Angular velocity (rad/s), purely vertical
    pub axis: Vec3,
}

impl SpinState {
    pub fn from_side_spin(side_spin: f64) -> Self {
        let rad_per_sec = side_spin * 2.0 * PI / 60.0;
        Self {
            side_spin,
            axis: Vec3::new(0.0, rad_per_sec, 0.0),
        }
    }
}

/// Initial kinematics for a shot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaunchConditions {
    /// m/s
    pub ball_speed: f64,
    /// Horizontal launch direction (rad). Sign-inverted from the face angle
    /// so an open face starts the ball toward negative X.
    pub azimuth: f64,
    /// rad
    pub elevation: f64,
    pub velocity: Vec3,
    pub spin: SpinState,
}

impl LaunchConditions {
    pub fn new(inputs: &ShotInputs, model: &FlightModel) -> Self {
        let azimuth = (-inputs.face_deg).to_radians();
        let elevation = inputs.launch_deg.to_radians();
        let ball_speed = model.ball_speed(inputs.swing_speed_mph);
        let velocity = Vec3::new(
            ball_speed * elevation.cos() * azimuth.sin(),
            ball_speed * elevation.sin(),
            ball_speed * elevation.cos() * azimuth.cos(),
        );
        let side_spin = model.side_spin(inputs.face_deg, inputs.path_deg, inputs.swing_speed_mph);
        Self {
            ball_speed,
            azimuth,
            elevation,
            velocity,
            spin: SpinState::from_side_spin(side_spin),
        }
    }

    fn is_finite(&self) -> bool {
        self.velocity.is_finite() && self.spin.axis.is_finite()
    }
}

/// How the integration ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FlightOutcome {
    /// Ball reached the ground; carry is valid.
    Landed,
    /// Time cap reached while still airborne.
    DidNotLand,
    /// Position or velocity went non-finite at `step` (0 = at launch).
    Unstable { step: usize },
}

/// Output of one simulated shot. Fully replaces any previous result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotResult {
    /// One position per step while airborne (y > 0). The grounding
    /// position is not included.
    pub trajectory: Vec<Vec3>,
    /// 0 unless `outcome` is `Landed`
    pub carry_yards: f64,
    #[serde(rename = "shot_category")]
    pub shape: ShotShape,
    pub launch: LaunchConditions,
    pub outcome: FlightOutcome,
    /// Clamped ground contact point, when landed
    #[serde(default)]
    pub landing: Option<Vec3>,
    /// s
    pub flight_time: f64,
}

impl ShotResult {
    /// Carry distance, or why there isn't one.
    pub fn carry(&self) -> Result<Distance, FlightError> {
        match self.outcome {
            FlightOutcome::Landed => Ok(Distance::Yards(self.carry_yards)),
            FlightOutcome::DidNotLand => Err(FlightError::DidNotLand {
                flight_time: self.flight_time,
            }),
            FlightOutcome::Unstable { step } => Err(FlightError::Unstable { step }),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.outcome == FlightOutcome::Landed
    }

    /// Highest sample height (m), 0 for an empty trajectory.
    pub fn apex(&self) -> f64 {
        self.trajectory.iter().map(|p| p.y).fold(0.0, f64::max)
    }
}

/// Simulate a shot with the default flight model.
pub fn simulate(inputs: &ShotInputs) -> ShotResult {
    simulate_with(inputs, &FlightModel::default())
}

/// Simulate a shot with an explicit flight model.
pub fn simulate_with(inputs: &ShotInputs, model: &FlightModel) -> ShotResult {
    let launch = LaunchConditions::new(inputs, model);
    let shape = classify(inputs.face_deg, inputs.path_deg, launch.spin.side_spin);
    let tee = Vec3::new(0.0, model.tee_height, 0.0);

    let mut result = ShotResult {
        trajectory: Vec::new(),
        carry_yards: 0.0,
        shape,
        launch,
        outcome: FlightOutcome::DidNotLand,
        landing: None,
        flight_time: 0.0,
    };

    if let Err(e) = model.validate() {
        result.outcome = FlightOutcome::Unstable { step: 0 };
        tracing::warn!("shot rejected: invalid flight model: {e}");
        return result;
    }
    if !launch.is_finite() {
        result.outcome = FlightOutcome::Unstable { step: 0 };
        tracing::warn!("shot rejected at launch: non-finite launch conditions");
        return result;
    }

    // No swing, no flight: the ball stays on the tee.
    if inputs.swing_speed_mph <= 0.0 {
        result.trajectory.push(tee);
        result.landing = Some(Vec3::new(tee.x, 0.0, tee.z));
        result.outcome = FlightOutcome::Landed;
        return result;
    }

    let dt = model.time_step;
    let spin = launch.spin.axis;
    let max_steps = model.max_steps();
    let mut pos = tee;
    let mut vel = launch.velocity;
    result.trajectory.reserve(max_steps.min(4096));

    let mut steps = 0;
    while steps < max_steps {
        steps += 1;

        pos += vel * dt;
        if !pos.is_finite() {
            result.outcome = FlightOutcome::Unstable { step: steps };
            break;
        }
        if pos.y <= 0.0 {
            pos.y = 0.0;
            result.carry_yards = pos.horizontal_magnitude() / METERS_PER_YARD;
            result.landing = Some(pos);
            result.outcome = FlightOutcome::Landed;
            break;
        }
        result.trajectory.push(pos);

        vel.y += model.gravity * dt;
        let magnus = spin.cross(&vel) * model.magnus_coefficient;
        vel += magnus * dt;
        if !vel.is_finite() {
            result.outcome = FlightOutcome::Unstable { step: steps };
            break;
        }
    }
    result.flight_time = steps as f64 * dt;

    match result.outcome {
        FlightOutcome::Unstable { step } => {
            tracing::warn!(
                "integration aborted at step {step}; keeping {} finite samples",
                result.trajectory.len()
            );
        }
        outcome => {
            tracing::debug!(
                "{shape}: {outcome:?} after {steps} steps, carry={:.1}yd",
                result.carry_yards
            );
        }
    }

    result
}

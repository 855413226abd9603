//! Launch-monitor style readout of a simulated shot.

use serde::{Deserialize, Serialize};

use crate::flight::{FlightOutcome, ShotInputs, ShotResult};
use crate::shape::ShotShape;
use crate::units::{Distance, UnitSystem, Velocity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotSummary {
    pub shape: ShotShape,
    pub outcome: FlightOutcome,
    // Launch conditions
    pub ball_speed: Velocity,
    pub launch_elevation: f64, // deg
    pub launch_azimuth: f64,   // deg, same sign convention as the integrator
    pub side_spin: f64,
    // Flight results
    #[serde(default)]
    pub carry_distance: Option<Distance>,
    pub max_height: Distance,
    pub flight_time: f64, // s
    #[serde(default)]
    pub offline: Option<Distance>, // lateral X at landing
    #[serde(default)]
    pub to_target: Option<Distance>, // carry - target; + = long
}

impl ShotSummary {
    /// Summarize in SI units. Use [`ShotSummary::to_unit_system`] for display.
    pub fn new(inputs: &ShotInputs, result: &ShotResult) -> Self {
        let carry = result.carry().ok();
        let to_target = carry.map(|c| Distance::Yards(c.as_yards() - inputs.target_yards));
        Self {
            shape: result.shape,
            outcome: result.outcome,
            ball_speed: Velocity::MetersPerSecond(result.launch.ball_speed),
            launch_elevation: result.launch.elevation.to_degrees(),
            launch_azimuth: result.launch.azimuth.to_degrees(),
            side_spin: result.launch.spin.side_spin,
            carry_distance: carry,
            max_height: Distance::Meters(result.apex()),
            flight_time: result.flight_time,
            offline: result.landing.map(|p| Distance::Meters(p.x)),
            to_target,
        }
    }

    /// Convert all distance and velocity fields to the given unit system.
    pub fn to_unit_system(&self, system: UnitSystem) -> ShotSummary {
        match system {
            UnitSystem::Imperial => ShotSummary {
                ball_speed: Velocity::MilesPerHour(self.ball_speed.as_mph()),
                carry_distance: self.carry_distance.map(|d| Distance::Yards(d.as_yards())),
                max_height: Distance::Feet(self.max_height.as_feet()),
                offline: self.offline.map(|d| Distance::Yards(d.as_yards())),
                to_target: self.to_target.map(|d| Distance::Yards(d.as_yards())),
                ..self.clone()
            },
            UnitSystem::Metric => ShotSummary {
                ball_speed: Velocity::MetersPerSecond(self.ball_speed.as_mps()),
                carry_distance: self.carry_distance.map(|d| Distance::Meters(d.as_meters())),
                max_height: Distance::Meters(self.max_height.as_meters()),
                offline: self.offline.map(|d| Distance::Meters(d.as_meters())),
                to_target: self.to_target.map(|d| Distance::Meters(d.as_meters())),
                ..self.clone()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flight::simulate;
    use crate::model::FlightModel;

    fn reference() -> ShotInputs {
        ShotInputs {
            face_deg: 0.0,
            path_deg: 3.0,
            swing_speed_mph: 75.0,
            launch_deg: 19.0,
            target_yards: 150.0,
        }
    }

    #[test]
    fn summary_reports_carry_and_target_delta() {
        let inputs = reference();
        let result = simulate(&inputs);
        let s = ShotSummary::new(&inputs, &result);
        let carry = s.carry_distance.unwrap().as_yards();
        assert!((carry - result.carry_yards).abs() < 1e-12);
        assert!((s.to_target.unwrap().as_yards() - (carry - 150.0)).abs() < 1e-9);
        assert!((s.launch_elevation - 19.0).abs() < 1e-9);
        assert!(s.offline.unwrap().as_meters() > 0.0);
        assert_eq!(s.max_height, Distance::Meters(result.apex()));
    }

    #[test]
    fn imperial_and_metric_views() {
        let inputs = reference();
        let s = ShotSummary::new(&inputs, &simulate(&inputs));
        let imp = s.to_unit_system(UnitSystem::Imperial);
        assert!(matches!(imp.ball_speed, Velocity::MilesPerHour(_)));
        assert!(matches!(imp.max_height, Distance::Feet(_)));
        assert!(matches!(imp.carry_distance, Some(Distance::Yards(_))));

        let met = imp.to_unit_system(UnitSystem::Metric);
        assert!(matches!(met.carry_distance, Some(Distance::Meters(_))));
        let a = s.carry_distance.unwrap().as_meters();
        let b = met.carry_distance.unwrap().as_meters();
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn unlanded_shot_has_no_carry() {
        let inputs = reference();
        let model = FlightModel {
            gravity: 0.0,
            ..FlightModel::default()
        };
        let result = crate::flight::simulate_with(&inputs, &model);
        let s = ShotSummary::new(&inputs, &result);
        assert!(s.carry_distance.is_none());
        assert!(s.to_target.is_none());
        assert!(s.offline.is_none());
        assert!((s.flight_time - 8.0).abs() < 1e-9);
    }
}

//! Plain-text shot readout for the terminal.

use std::fmt::Write;

use ballflight::{Distance, FlightOutcome, ShotRecord, UnitSystem};

fn fmt_distance(d: Distance) -> String {
    format!("{:.1}{}", d.value(), d.unit_suffix())
}

/// Render a shot record in the given unit system. With `trajectory`, every
/// sample is appended as `x y z` meters, one per line.
pub fn render(record: &ShotRecord, units: UnitSystem, trajectory: bool) -> String {
    let s = record.summary.to_unit_system(units);
    let mut out = String::new();

    let _ = writeln!(out, "Shot #{}  {}", record.shot_number, s.shape);
    let _ = writeln!(
        out,
        "  ball speed  {:.1}{}",
        s.ball_speed.value(),
        s.ball_speed.unit_suffix()
    );
    let _ = writeln!(
        out,
        "  launch      {:.1}°  azimuth {:.1}°",
        s.launch_elevation, s.launch_azimuth
    );
    let _ = writeln!(out, "  side spin   {:.0}", s.side_spin);
    match s.outcome {
        FlightOutcome::Landed => {
            if let Some(carry) = s.carry_distance {
                let _ = writeln!(out, "  carry       {}", fmt_distance(carry));
            }
            if let Some(offline) = s.offline {
                let _ = writeln!(out, "  offline     {}", fmt_distance(offline));
            }
            if let Some(delta) = s.to_target {
                let side = if delta.value() >= 0.0 { "long" } else { "short" };
                let _ = writeln!(
                    out,
                    "  to target   {:.1}{} {side}",
                    delta.value().abs(),
                    delta.unit_suffix()
                );
            }
        }
        FlightOutcome::DidNotLand => {
            let _ = writeln!(out, "  carry       - (did not land)");
        }
        FlightOutcome::Unstable { step } => {
            let _ = writeln!(out, "  carry       - (unstable at step {step})");
        }
    }
    let _ = writeln!(out, "  apex        {}", fmt_distance(s.max_height));
    let _ = writeln!(out, "  flight time {:.2}s", s.flight_time);

    if trajectory {
        for p in &record.result.trajectory {
            let _ = writeln!(out, "{:.4} {:.4} {:.4}", p.x, p.y, p.z);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ballflight::{FlightModel, ShotInputs};

    #[test]
    fn renders_carry_and_shape() {
        let record = ShotRecord::compute(1, ShotInputs::default(), &FlightModel::default());
        let text = render(&record, UnitSystem::Imperial, false);
        assert!(text.starts_with("Shot #1  Straight"));
        assert!(text.contains("carry"));
        assert!(text.contains("yd"));
        assert!(text.contains("mph"));
    }

    #[test]
    fn trajectory_lines_follow_summary() {
        let record = ShotRecord::compute(1, ShotInputs::default(), &FlightModel::default());
        let text = render(&record, UnitSystem::Metric, true);
        let samples = text
            .lines()
            .filter(|l| {
                let fields: Vec<&str> = l.split_whitespace().collect();
                fields.len() == 3 && fields.iter().all(|f| f.parse::<f64>().is_ok())
            })
            .count();
        assert_eq!(samples, record.result.trajectory.len());
    }

    #[test]
    fn unlanded_shot_has_no_carry_value() {
        let model = FlightModel {
            gravity: 0.0,
            ..FlightModel::default()
        };
        let record = ShotRecord::compute(3, ShotInputs::default(), &model);
        let text = render(&record, UnitSystem::Imperial, false);
        assert!(text.contains("did not land"));
    }
}

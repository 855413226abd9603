//! Shot shape classification from club delivery.
//!
//! The start direction comes from the face angle alone. Curvature comes from
//! the face-to-path difference (`path - face`): positive curves left (draw),
//! negative curves right (fade), and a side-spin magnitude above
//! [`SEVERE_SPIN_THRESHOLD`] escalates draw/fade to hook/slice.

use std::fmt;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Face angle (deg) beyond which the ball starts off the target line.
pub const START_THRESHOLD_DEG: f64 = 0.5;

/// `path - face` (deg) beyond which the ball curves.
pub const CURVE_THRESHOLD_DEG: f64 = 0.5;

/// Side-spin magnitude above which a draw becomes a hook and a fade a slice.
pub const SEVERE_SPIN_THRESHOLD: f64 = 2400.0;

/// Initial direction of the ball relative to the target line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StartDirection {
    Straight,
    Push,
    Pull,
}

impl StartDirection {
    pub fn from_face(face_deg: f64) -> Self {
        if face_deg > START_THRESHOLD_DEG {
            Self::Push
        } else if face_deg < -START_THRESHOLD_DEG {
            Self::Pull
        } else {
            Self::Straight
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Straight => "Straight",
            Self::Push => "Push",
            Self::Pull => "Pull",
        }
    }
}

/// Curvature of the ball in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Curvature {
    Straight,
    Draw,
    Hook,
    Fade,
    Slice,
}

impl Curvature {
    pub fn from_delivery(face_deg: f64, path_deg: f64, side_spin: f64) -> Self {
        let diff = path_deg - face_deg;
        let severe = side_spin.abs() > SEVERE_SPIN_THRESHOLD;
        if diff > CURVE_THRESHOLD_DEG {
            if severe { Self::Hook } else { Self::Draw }
        } else if diff < -CURVE_THRESHOLD_DEG {
            if severe { Self::Slice } else { Self::Fade }
        } else {
            Self::Straight
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Straight => "Straight",
            Self::Draw => "Draw",
            Self::Hook => "Hook",
            Self::Fade => "Fade",
            Self::Slice => "Slice",
        }
    }
}

/// Combined shot shape.
///
/// Displays (and serializes) as the golfer-facing label: `"Straight"`,
/// `"Push"`, `"Draw"`, or a compound such as `"Push-Hook"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShotShape {
    pub start: StartDirection,
    pub curve: Curvature,
}

impl ShotShape {
    pub const STRAIGHT: ShotShape = ShotShape {
        start: StartDirection::Straight,
        curve: Curvature::Straight,
    };

    /// Every label the classifier can produce.
    pub fn all() -> impl Iterator<Item = ShotShape> {
        const STARTS: [StartDirection; 3] = [
            StartDirection::Straight,
            StartDirection::Push,
            StartDirection::Pull,
        ];
        const CURVES: [Curvature; 5] = [
            Curvature::Straight,
            Curvature::Draw,
            Curvature::Hook,
            Curvature::Fade,
            Curvature::Slice,
        ];
        STARTS
            .into_iter()
            .flat_map(|start| CURVES.into_iter().map(move |curve| ShotShape { start, curve }))
    }
}

impl fmt::Display for ShotShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.start, self.curve) {
            (StartDirection::Straight, Curvature::Straight) => f.write_str("Straight"),
            (StartDirection::Straight, curve) => f.write_str(curve.label()),
            (start, Curvature::Straight) => f.write_str(start.label()),
            (start, curve) => write!(f, "{}-{}", start.label(), curve.label()),
        }
    }
}

impl std::str::FromStr for ShotShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShotShape::all()
            .find(|shape| shape.to_string() == s.trim())
            .ok_or_else(|| format!("unknown shot shape {s:?}"))
    }
}

impl Serialize for ShotShape {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ShotShape {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Classify a shot from face angle, path angle (degrees) and side-spin rate.
///
/// Total over all inputs. NaN angles fail every threshold comparison and
/// classify as straight.
pub fn classify(face_deg: f64, path_deg: f64, side_spin: f64) -> ShotShape {
    ShotShape {
        start: StartDirection::from_face(face_deg),
        curve: Curvature::from_delivery(face_deg, path_deg, side_spin),
    }
}

use std::fmt;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Meters per yard. Carry distance is reported in yards by dividing by this.
pub const METERS_PER_YARD: f64 = 0.9144;

const METERS_PER_FOOT: f64 = 0.3048;

/// A distance value with unit. Serializes as a suffix string: `"150yd"`,
/// `"12.5m"`, `"88ft"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distance {
    Meters(f64),
    Yards(f64),
    Feet(f64),
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Distance {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

impl std::str::FromStr for Distance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        for (suffix, ctor) in &[
            ("yd", Self::Yards as fn(f64) -> Self),
            ("ft", Self::Feet as fn(f64) -> Self),
            ("m", Self::Meters as fn(f64) -> Self),
        ] {
            if let Some(num) = s.strip_suffix(suffix) {
                let v: f64 = num
                    .trim()
                    .parse()
                    .map_err(|_| format!("invalid number in distance: {s:?}"))?;
                return Ok(ctor(v));
            }
        }
        Err(format!(
            "invalid distance {s:?}: expected number with suffix (yd, ft, m)"
        ))
    }
}

impl Distance {
    pub fn value(self) -> f64 {
        match self {
            Self::Meters(v) | Self::Yards(v) | Self::Feet(v) => v,
        }
    }

    pub fn unit_suffix(self) -> &'static str {
        match self {
            Self::Meters(_) => "m",
            Self::Yards(_) => "yd",
            Self::Feet(_) => "ft",
        }
    }

    pub fn as_meters(self) -> f64 {
        match self {
            Self::Meters(v) => v,
            Self::Yards(v) => v * METERS_PER_YARD,
            Self::Feet(v) => v * METERS_PER_FOOT,
        }
    }

    pub fn as_yards(self) -> f64 {
        match self {
            Self::Meters(v) => v / METERS_PER_YARD,
            Self::Yards(v) => v,
            Self::Feet(v) => v / 3.0,
        }
    }

    pub fn as_feet(self) -> f64 {
        match self {
            Self::Meters(v) => v / METERS_PER_FOOT,
            Self::Yards(v) => v * 3.0,
            Self::Feet(v) => v,
        }
    }
}

impl Default for Distance {
    fn default() -> Self {
        Self::Yards(0.0)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value(), self.unit_suffix())
    }
}

/// A velocity value with unit. Serializes as a suffix string: `"75mph"`,
/// `"49.4mps"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Velocity {
    MilesPerHour(f64),
    MetersPerSecond(f64),
}

impl Serialize for Velocity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Velocity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

impl std::str::FromStr for Velocity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // "mps" and "mph" share a prefix, so match the full suffix only
        for (suffix, ctor) in &[
            ("mph", Self::MilesPerHour as fn(f64) -> Self),
            ("mps", Self::MetersPerSecond as fn(f64) -> Self),
        ] {
            if let Some(num) = s.strip_suffix(suffix) {
                let v: f64 = num
                    .trim()
                    .parse()
                    .map_err(|_| format!("invalid number in velocity: {s:?}"))?;
                return Ok(ctor(v));
            }
        }
        Err(format!(
            "invalid velocity {s:?}: expected number with suffix (mph, mps)"
        ))
    }
}

impl Velocity {
    pub fn value(self) -> f64 {
        match self {
            Self::MilesPerHour(v) | Self::MetersPerSecond(v) => v,
        }
    }

    pub fn unit_suffix(self) -> &'static str {
        match self {
            Self::MilesPerHour(_) => "mph",
            Self::MetersPerSecond(_) => "mps",
        }
    }

    pub fn as_mph(self) -> f64 {
        match self {
            Self::MilesPerHour(v) => v,
            Self::MetersPerSecond(v) => v * 2.23694,
        }
    }

    pub fn as_mps(self) -> f64 {
        match self {
            Self::MilesPerHour(v) => v * 0.44704,
            Self::MetersPerSecond(v) => v,
        }
    }
}

impl Default for Velocity {
    fn default() -> Self {
        Self::MilesPerHour(0.0)
    }
}

impl fmt::Display for Velocity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value(), self.unit_suffix())
    }
}

/// Unit system for display. Imperial = yards/feet/mph, Metric = meters/m/s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    Imperial,
    Metric,
}

impl Default for UnitSystem {
    fn default() -> Self {
        Self::Imperial
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Imperial => write!(f, "imperial"),
            Self::Metric => write!(f, "metric"),
        }
    }
}

impl std::str::FromStr for UnitSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "imperial" => Ok(Self::Imperial),
            "metric" => Ok(Self::Metric),
            other => Err(format!("unknown unit system {other:?}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_parses_suffixes() {
        assert_eq!("150yd".parse::<Distance>(), Ok(Distance::Yards(150.0)));
        assert_eq!(" 12.5 m".parse::<Distance>(), Ok(Distance::Meters(12.5)));
        assert_eq!("88ft".parse::<Distance>(), Ok(Distance::Feet(88.0)));
        assert!("150".parse::<Distance>().is_err());
        assert!("abcyd".parse::<Distance>().is_err());
    }

    #[test]
    fn distance_conversions() {
        let d = Distance::Meters(91.44);
        assert!((d.as_yards() - 100.0).abs() < 1e-9);
        assert!((Distance::Yards(1.0).as_feet() - 3.0).abs() < 1e-12);
        assert!((Distance::Feet(10.0).as_meters() - 3.048).abs() < 1e-12);
    }

    #[test]
    fn velocity_parses_mph_before_mps() {
        assert_eq!("75mph".parse::<Velocity>(), Ok(Velocity::MilesPerHour(75.0)));
        assert_eq!("30mps".parse::<Velocity>(), Ok(Velocity::MetersPerSecond(30.0)));
        assert!("30kph".parse::<Velocity>().is_err());
    }

    #[test]
    fn distance_serializes_as_suffix_string() {
        let json = serde_json::to_string(&Distance::Yards(150.0)).unwrap();
        assert_eq!(json, "\"150yd\"");
        let back: Distance = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Distance::Yards(150.0));
    }

    #[test]
    fn unit_system_from_str() {
        assert_eq!("metric".parse::<UnitSystem>(), Ok(UnitSystem::Metric));
        assert!("furlongs".parse::<UnitSystem>().is_err());
    }
}

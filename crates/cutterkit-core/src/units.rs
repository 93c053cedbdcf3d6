//! Unit systems and scaling
//!
//! Every geometric value carries a unit system. Converting between systems
//! multiplies all length-valued fields by a factor; angles and counts stay put.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Millimetres per inch
pub const INCH_TO_MM: f64 = 25.4;
/// Inches per millimetre
pub const MM_TO_INCH: f64 = 1.0 / INCH_TO_MM;

/// Measurement system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Metric system (mm)
    #[default]
    Metric,
    /// Imperial system (inches)
    Imperial,
}

impl Units {
    /// Factor that converts a length expressed in `from` into `to`
    pub fn conversion_factor(from: Units, to: Units) -> f64 {
        match (from, to) {
            (Units::Metric, Units::Imperial) => MM_TO_INCH,
            (Units::Imperial, Units::Metric) => INCH_TO_MM,
            _ => 1.0,
        }
    }

    /// Unit label ("mm" or "in")
    pub fn label(&self) -> &'static str {
        match self {
            Units::Metric => "mm",
            Units::Imperial => "in",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "Metric"),
            Self::Imperial => write!(f, "Imperial"),
        }
    }
}

impl FromStr for Units {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "mm" => Ok(Self::Metric),
            "imperial" | "inch" | "in" => Ok(Self::Imperial),
            _ => Err(format!("Unknown measurement system: {}", s)),
        }
    }
}

/// A value that carries a unit system and can be rescaled
pub trait Measurable {
    /// Current unit system
    fn units(&self) -> Units;

    /// Multiply every length-valued field by `factor` and relabel as `units`
    ///
    /// Calling this twice with the same factor scales twice.
    fn scale(&mut self, units: Units, factor: f64);

    /// Convert to `units`, scaling lengths by the matching factor
    fn set_units(&mut self, units: Units) {
        let factor = Units::conversion_factor(self.units(), units);
        self.scale(units, factor);
    }

    /// Change the unit label without touching any value
    fn relabel_units(&mut self, units: Units) {
        self.scale(units, 1.0);
    }
}

//! Thread cutting tools

use super::{write_header, TypedRevolved};
use crate::shaft::ShaftGeometry;
use crate::types::ToolType;
use crate::validate;
use cutterkit_core::{Measurable, Result, ToolError, Units, INCH_TO_MM};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Single form thread mill
///
/// The shaft above the thread form is necked down to `core_diameter`.
#[derive(Debug, Clone, PartialEq)]
pub struct ThreadMillSingleForm {
    shaft: ShaftGeometry,
    core_diameter: f64,
    thread_angle: f64,
    thread_height: f64,
}

impl ThreadMillSingleForm {
    /// Create a single form thread mill
    pub fn new(
        shaft: ShaftGeometry,
        core_diameter: f64,
        thread_angle: f64,
        thread_height: f64,
    ) -> Result<Self> {
        validate::positive("core_diameter", core_diameter)?;
        validate::at_most("core_diameter", core_diameter, "diameter", shaft.diameter())?;
        validate::finite("thread_angle", thread_angle)?;
        if thread_angle <= 0.0 || thread_angle >= 180.0 {
            return Err(ToolError::invalid(
                "thread_angle",
                thread_angle,
                "must be strictly between 0 and 180",
            )
            .into());
        }
        validate::non_negative("thread_height", thread_height)?;
        Ok(Self {
            shaft,
            core_diameter,
            thread_angle,
            thread_height,
        })
    }

    /// Neck diameter above the thread form
    pub fn core_diameter(&self) -> f64 {
        self.core_diameter
    }

    /// Included angle of the thread form
    pub fn thread_angle(&self) -> f64 {
        self.thread_angle
    }

    /// Height of the thread form
    pub fn thread_height(&self) -> f64 {
        self.thread_height
    }
}

impl TypedRevolved for ThreadMillSingleForm {
    fn tool_type(&self) -> ToolType {
        ToolType::ThreadMillSingleForm
    }

    fn shaft(&self) -> &ShaftGeometry {
        &self.shaft
    }

    fn has_advanced_shoulder_definition(&self) -> bool {
        self.shaft.has_advanced_shoulder_definition() || self.core_diameter < self.shaft.diameter()
    }
}

impl Measurable for ThreadMillSingleForm {
    fn units(&self) -> Units {
        self.shaft.units()
    }

    fn scale(&mut self, units: Units, factor: f64) {
        self.shaft.scale(units, factor);
        self.core_diameter *= factor;
        self.thread_height *= factor;
    }
}

impl fmt::Display for ThreadMillSingleForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, ToolType::ThreadMillSingleForm, &self.shaft)?;
        write!(f, "\n  core diameter: {}", self.core_diameter)?;
        write!(f, "\n  thread angle: {}", self.thread_angle)?;
        write!(f, "\n  thread height: {}", self.thread_height)
    }
}

/// How the thread pitch was specified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThreadType {
    /// Pitch as a length
    #[default]
    Pitch,
    /// Threads per inch
    Tpi,
}

/// Thread hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThreadDirection {
    /// Left handed thread
    LeftHanded,
    /// Right handed thread
    #[default]
    RightHanded,
}

/// Source of the core diameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CoreDiameterType {
    /// Derived from diameter and pitch
    #[default]
    Automatic,
    /// Given explicitly
    UserDefined,
}

impl fmt::Display for ThreadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pitch => write!(f, "pitch"),
            Self::Tpi => write!(f, "tpi"),
        }
    }
}

impl fmt::Display for ThreadDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LeftHanded => write!(f, "left handed"),
            Self::RightHanded => write!(f, "right handed"),
        }
    }
}

impl fmt::Display for CoreDiameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Automatic => write!(f, "automatic"),
            Self::UserDefined => write!(f, "user defined"),
        }
    }
}

/// Depth factor of a 60 degree thread relative to its pitch
const CORE_DEPTH_FACTOR: f64 = 1.0825;

/// Thread tap
#[derive(Debug, Clone, PartialEq)]
pub struct ThreadTap {
    shaft: ShaftGeometry,
    pitch: f64,
    core_diameter: f64,
    thread_direction: ThreadDirection,
    thread_type: ThreadType,
    core_diameter_type: CoreDiameterType,
}

impl ThreadTap {
    /// Create a tap from its pitch
    ///
    /// With [`CoreDiameterType::Automatic`] the given core diameter is
    /// ignored and derived from diameter and pitch.
    pub fn new(
        shaft: ShaftGeometry,
        pitch: f64,
        core_diameter: f64,
        thread_direction: ThreadDirection,
        core_diameter_type: CoreDiameterType,
    ) -> Result<Self> {
        Self::build(
            shaft,
            pitch,
            core_diameter,
            thread_direction,
            ThreadType::Pitch,
            core_diameter_type,
        )
    }

    /// Create a tap from threads per inch
    pub fn from_tpi(
        shaft: ShaftGeometry,
        threads_per_inch: f64,
        core_diameter: f64,
        thread_direction: ThreadDirection,
        core_diameter_type: CoreDiameterType,
    ) -> Result<Self> {
        validate::positive("threads_per_inch", threads_per_inch)?;
        let inch = match shaft.units() {
            Units::Metric => INCH_TO_MM,
            Units::Imperial => 1.0,
        };
        Self::build(
            shaft,
            inch / threads_per_inch,
            core_diameter,
            thread_direction,
            ThreadType::Tpi,
            core_diameter_type,
        )
    }

    fn build(
        shaft: ShaftGeometry,
        pitch: f64,
        core_diameter: f64,
        thread_direction: ThreadDirection,
        thread_type: ThreadType,
        core_diameter_type: CoreDiameterType,
    ) -> Result<Self> {
        validate::positive("pitch", pitch)?;
        let core_diameter = match core_diameter_type {
            CoreDiameterType::Automatic => shaft.diameter() - CORE_DEPTH_FACTOR * pitch,
            CoreDiameterType::UserDefined => core_diameter,
        };
        validate::positive("core_diameter", core_diameter)?;
        validate::at_most("core_diameter", core_diameter, "diameter", shaft.diameter())?;
        Ok(Self {
            shaft,
            pitch,
            core_diameter,
            thread_direction,
            thread_type,
            core_diameter_type,
        })
    }

    /// Thread pitch, in the tool's units
    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// Threads per inch
    pub fn threads_per_inch(&self) -> f64 {
        let inch = match self.shaft.units() {
            Units::Metric => INCH_TO_MM,
            Units::Imperial => 1.0,
        };
        inch / self.pitch
    }

    /// Core diameter
    pub fn core_diameter(&self) -> f64 {
        self.core_diameter
    }

    /// Thread hand
    pub fn thread_direction(&self) -> ThreadDirection {
        self.thread_direction
    }

    /// How the pitch was specified
    pub fn thread_type(&self) -> ThreadType {
        self.thread_type
    }

    /// Source of the core diameter
    pub fn core_diameter_type(&self) -> CoreDiameterType {
        self.core_diameter_type
    }
}

impl TypedRevolved for ThreadTap {
    fn tool_type(&self) -> ToolType {
        ToolType::ThreadTap
    }

    fn shaft(&self) -> &ShaftGeometry {
        &self.shaft
    }
}

impl Measurable for ThreadTap {
    fn units(&self) -> Units {
        self.shaft.units()
    }

    fn scale(&mut self, units: Units, factor: f64) {
        self.shaft.scale(units, factor);
        self.pitch *= factor;
        self.core_diameter *= factor;
    }
}

impl fmt::Display for ThreadTap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, ToolType::ThreadTap, &self.shaft)?;
        write!(f, "\n  pitch: {}", self.pitch)?;
        write!(f, "\n  thread type: {}", self.thread_type)?;
        write!(f, "\n  thread direction: {}", self.thread_direction)?;
        write!(f, "\n  core diameter type: {}", self.core_diameter_type)?;
        write!(f, "\n  core diameter: {}", self.core_diameter)
    }
}

shaft_access!(ThreadMillSingleForm, ThreadTap);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn shaft(diameter: f64) -> ShaftGeometry {
        ShaftGeometry::cylindrical(diameter, 15.0, 40.0, Units::Metric).unwrap()
    }

    #[test]
    fn test_thread_mill_single_form() {
        let mill = ThreadMillSingleForm::new(shaft(10.0), 7.0, 60.0, 1.5).unwrap();
        assert!(mill.has_advanced_shoulder_definition());
        let plain = ThreadMillSingleForm::new(shaft(10.0), 10.0, 60.0, 1.5).unwrap();
        assert!(!plain.has_advanced_shoulder_definition());
        assert!(ThreadMillSingleForm::new(shaft(10.0), 11.0, 60.0, 1.5).is_err());
        assert!(ThreadMillSingleForm::new(shaft(10.0), 7.0, 180.0, 1.5).is_err());
        assert!(ThreadMillSingleForm::new(shaft(10.0), 7.0, 0.0, 1.5).is_err());
    }

    #[test]
    fn test_thread_tap_automatic_core() {
        let tap = ThreadTap::new(
            shaft(10.0),
            1.5,
            0.0,
            ThreadDirection::RightHanded,
            CoreDiameterType::Automatic,
        )
        .unwrap();
        assert_relative_eq!(tap.core_diameter(), 10.0 - 1.0825 * 1.5);
        assert_eq!(tap.thread_type(), ThreadType::Pitch);
    }

    #[test]
    fn test_thread_tap_from_tpi() {
        let tap = ThreadTap::from_tpi(
            shaft(12.7),
            20.0,
            11.0,
            ThreadDirection::LeftHanded,
            CoreDiameterType::UserDefined,
        )
        .unwrap();
        assert_relative_eq!(tap.pitch(), 1.27);
        assert_relative_eq!(tap.threads_per_inch(), 20.0);
        assert_eq!(tap.thread_type(), ThreadType::Tpi);
        assert_eq!(tap.core_diameter(), 11.0);
    }

    #[test]
    fn test_thread_tap_validation() {
        assert!(ThreadTap::new(shaft(10.0), 0.0, 8.0, ThreadDirection::RightHanded, CoreDiameterType::UserDefined).is_err());
        assert!(ThreadTap::new(shaft(10.0), 1.5, 12.0, ThreadDirection::RightHanded, CoreDiameterType::UserDefined).is_err());
        assert!(ThreadTap::new(shaft(1.0), 1.5, 0.0, ThreadDirection::RightHanded, CoreDiameterType::Automatic).is_err());
    }
}

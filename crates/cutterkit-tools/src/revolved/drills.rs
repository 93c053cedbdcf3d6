//! Hole making tools: drills, sinks, bores, reamers and taps

use super::{write_header, TypedRevolved};
use crate::corner::CornerRadiusType;
use crate::shaft::ShaftGeometry;
use crate::types::ToolType;
use crate::validate;
use cutterkit_core::{Measurable, Result, ToolError, Units};
use std::fmt;
use tracing::debug;

/// Twist drill
#[derive(Debug, Clone, PartialEq)]
pub struct Drill {
    shaft: ShaftGeometry,
    tip_angle: f64,
}

impl Drill {
    /// Create a drill
    pub fn new(shaft: ShaftGeometry, tip_angle: f64) -> Result<Self> {
        validate::tip_angle("tip_angle", tip_angle)?;
        debug!(diameter = shaft.diameter(), tip_angle, "created drill");
        Ok(Self { shaft, tip_angle })
    }

    /// Included tip angle
    pub fn tip_angle(&self) -> f64 {
        self.tip_angle
    }
}

impl TypedRevolved for Drill {
    fn tool_type(&self) -> ToolType {
        ToolType::Drill
    }

    fn shaft(&self) -> &ShaftGeometry {
        &self.shaft
    }
}

impl Measurable for Drill {
    fn units(&self) -> Units {
        self.shaft.units()
    }

    fn scale(&mut self, units: Units, factor: f64) {
        self.shaft.scale(units, factor);
    }
}

impl fmt::Display for Drill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, ToolType::Drill, &self.shaft)?;
        write!(f, "\n  tip angle: {}", self.tip_angle)
    }
}

/// Spot drill
///
/// The whole tip cone must fit below the shoulder.
#[derive(Debug, Clone, PartialEq)]
pub struct SpotDrill {
    shaft: ShaftGeometry,
    tip_angle: f64,
}

impl SpotDrill {
    /// Create a spot drill
    pub fn new(shaft: ShaftGeometry, tip_angle: f64) -> Result<Self> {
        validate::tip_angle("tip_angle", tip_angle)?;
        let drill = Self { shaft, tip_angle };
        let tip_height = drill.tip_height();
        if tip_height > drill.shaft.shoulder_length() {
            return Err(ToolError::infeasible(
                "tip_angle, diameter, shoulder_length",
                format!(
                    "tip cone height ({:.4}) exceeds the shoulder length ({})",
                    tip_height,
                    drill.shaft.shoulder_length()
                ),
            )
            .into());
        }
        Ok(drill)
    }

    /// Included tip angle
    pub fn tip_angle(&self) -> f64 {
        self.tip_angle
    }

    /// Height of the tip cone
    pub fn tip_height(&self) -> f64 {
        self.shaft.diameter() / 2.0 / (self.tip_angle / 2.0).to_radians().tan()
    }
}

impl TypedRevolved for SpotDrill {
    fn tool_type(&self) -> ToolType {
        ToolType::SpotDrill
    }

    fn shaft(&self) -> &ShaftGeometry {
        &self.shaft
    }
}

impl Measurable for SpotDrill {
    fn units(&self) -> Units {
        self.shaft.units()
    }

    fn scale(&mut self, units: Units, factor: f64) {
        self.shaft.scale(units, factor);
    }
}

impl fmt::Display for SpotDrill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, ToolType::SpotDrill, &self.shaft)?;
        write!(f, "\n  tip angle: {}", self.tip_angle)
    }
}

/// Center drill: a pilot core followed by a countersink shoulder
#[derive(Debug, Clone, PartialEq)]
pub struct CenterDrill {
    shaft: ShaftGeometry,
    tip_angle: f64,
    shoulder_angle: f64,
    core_diameter: f64,
    core_height: f64,
}

impl CenterDrill {
    /// Create a center drill
    pub fn new(
        shaft: ShaftGeometry,
        tip_angle: f64,
        shoulder_angle: f64,
        core_diameter: f64,
        core_height: f64,
    ) -> Result<Self> {
        validate::tip_angle("tip_angle", tip_angle)?;
        validate::tip_angle("shoulder_angle", shoulder_angle)?;
        validate::positive("core_diameter", core_diameter)?;
        validate::less_than("core_diameter", core_diameter, "diameter", shaft.diameter())?;
        validate::non_negative("core_height", core_height)?;
        validate::at_most("core_height", core_height, "flute_length", shaft.flute_length())?;
        Ok(Self {
            shaft,
            tip_angle,
            shoulder_angle,
            core_diameter,
            core_height,
        })
    }

    /// Tip angle of the core
    pub fn tip_angle(&self) -> f64 {
        self.tip_angle
    }

    /// Angle of the countersink shoulder
    pub fn shoulder_angle(&self) -> f64 {
        self.shoulder_angle
    }

    /// Pilot core diameter
    pub fn core_diameter(&self) -> f64 {
        self.core_diameter
    }

    /// Pilot core height
    pub fn core_height(&self) -> f64 {
        self.core_height
    }
}

impl TypedRevolved for CenterDrill {
    fn tool_type(&self) -> ToolType {
        ToolType::CenterDrill
    }

    fn shaft(&self) -> &ShaftGeometry {
        &self.shaft
    }
}

impl Measurable for CenterDrill {
    fn units(&self) -> Units {
        self.shaft.units()
    }

    fn scale(&mut self, units: Units, factor: f64) {
        self.shaft.scale(units, factor);
        self.core_diameter *= factor;
        self.core_height *= factor;
    }
}

impl fmt::Display for CenterDrill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, ToolType::CenterDrill, &self.shaft)?;
        write!(f, "\n  tip angle: {}", self.tip_angle)?;
        write!(f, "\n  shoulder angle: {}", self.shoulder_angle)?;
        write!(f, "\n  core diameter: {}", self.core_diameter)?;
        write!(f, "\n  core height: {}", self.core_height)
    }
}

/// Counter sink
///
/// `Full` resolves to half the tool diameter.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterSink {
    shaft: ShaftGeometry,
    tip_angle: f64,
    bottom_diameter: f64,
    corner_radius_type: CornerRadiusType,
    corner_radius: f64,
}

impl CounterSink {
    /// Create a counter sink
    pub fn new(
        shaft: ShaftGeometry,
        tip_angle: f64,
        bottom_diameter: f64,
        corner_radius: f64,
        corner_radius_type: CornerRadiusType,
    ) -> Result<Self> {
        validate::tip_angle("tip_angle", tip_angle)?;
        validate::non_negative("bottom_diameter", bottom_diameter)?;
        validate::less_than("bottom_diameter", bottom_diameter, "diameter", shaft.diameter())?;
        corner_radius_type.validate(corner_radius, false)?;
        let resolved = corner_radius_type.resolve(corner_radius, shaft.diameter() / 2.0);
        validate::diameter_vs_corner_radius(shaft.diameter(), resolved)?;
        Ok(Self {
            shaft,
            tip_angle,
            bottom_diameter,
            corner_radius_type,
            corner_radius: resolved,
        })
    }

    /// Included tip angle
    pub fn tip_angle(&self) -> f64 {
        self.tip_angle
    }

    /// Diameter of the flat bottom
    pub fn bottom_diameter(&self) -> f64 {
        self.bottom_diameter
    }

    /// Corner radius type
    pub fn corner_radius_type(&self) -> CornerRadiusType {
        self.corner_radius_type
    }

    /// Effective corner radius
    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }
}

impl TypedRevolved for CounterSink {
    fn tool_type(&self) -> ToolType {
        ToolType::CounterSink
    }

    fn shaft(&self) -> &ShaftGeometry {
        &self.shaft
    }
}

impl Measurable for CounterSink {
    fn units(&self) -> Units {
        self.shaft.units()
    }

    fn scale(&mut self, units: Units, factor: f64) {
        self.shaft.scale(units, factor);
        self.bottom_diameter *= factor;
        self.corner_radius *= factor;
    }
}

impl fmt::Display for CounterSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, ToolType::CounterSink, &self.shaft)?;
        write!(f, "\n  tip angle: {}", self.tip_angle)?;
        write!(f, "\n  bottom diameter: {}", self.bottom_diameter)?;
        write!(f, "\n  corner radius type: {}", self.corner_radius_type)?;
        write!(f, "\n  corner radius: {}", self.corner_radius)
    }
}

/// Counter bore
#[derive(Debug, Clone, PartialEq)]
pub struct CounterBore {
    shaft: ShaftGeometry,
}

impl CounterBore {
    /// Create a counter bore
    pub fn new(shaft: ShaftGeometry) -> Self {
        Self { shaft }
    }
}

impl TypedRevolved for CounterBore {
    fn tool_type(&self) -> ToolType {
        ToolType::CounterBore
    }

    fn shaft(&self) -> &ShaftGeometry {
        &self.shaft
    }
}

impl Measurable for CounterBore {
    fn units(&self) -> Units {
        self.shaft.units()
    }

    fn scale(&mut self, units: Units, factor: f64) {
        self.shaft.scale(units, factor);
    }
}

impl fmt::Display for CounterBore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, ToolType::CounterBore, &self.shaft)
    }
}

/// Reamer
#[derive(Debug, Clone, PartialEq)]
pub struct Reamer {
    shaft: ShaftGeometry,
    factor: f64,
}

impl Reamer {
    /// Create a reamer
    pub fn new(shaft: ShaftGeometry, factor: f64) -> Result<Self> {
        validate::positive("factor", factor)?;
        Ok(Self { shaft, factor })
    }

    /// Reaming factor
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Change the reaming factor
    pub fn set_factor(&mut self, factor: f64) -> Result<()> {
        validate::positive("factor", factor)?;
        self.factor = factor;
        Ok(())
    }
}

impl TypedRevolved for Reamer {
    fn tool_type(&self) -> ToolType {
        ToolType::Reamer
    }

    fn shaft(&self) -> &ShaftGeometry {
        &self.shaft
    }
}

impl Measurable for Reamer {
    fn units(&self) -> Units {
        self.shaft.units()
    }

    fn scale(&mut self, units: Units, factor: f64) {
        self.shaft.scale(units, factor);
    }
}

impl fmt::Display for Reamer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, ToolType::Reamer, &self.shaft)?;
        write!(f, "\n  factor: {}", self.factor)
    }
}

/// Boring bar
///
/// `Full` resolves to half the tool diameter.
#[derive(Debug, Clone, PartialEq)]
pub struct BoreBar {
    shaft: ShaftGeometry,
    taper_angle: f64,
    corner_radius_type: CornerRadiusType,
    corner_radius: f64,
}

impl BoreBar {
    /// Create a boring bar
    pub fn new(
        shaft: ShaftGeometry,
        taper_angle: f64,
        corner_radius: f64,
        corner_radius_type: CornerRadiusType,
    ) -> Result<Self> {
        validate::taper_angle(taper_angle)?;
        corner_radius_type.validate(corner_radius, true)?;
        let resolved = corner_radius_type.resolve(corner_radius, shaft.diameter() / 2.0);
        Ok(Self {
            shaft,
            taper_angle,
            corner_radius_type,
            corner_radius: resolved,
        })
    }

    /// Taper angle
    pub fn taper_angle(&self) -> f64 {
        self.taper_angle
    }

    /// Corner radius type
    pub fn corner_radius_type(&self) -> CornerRadiusType {
        self.corner_radius_type
    }

    /// Effective corner radius
    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }
}

impl TypedRevolved for BoreBar {
    fn tool_type(&self) -> ToolType {
        ToolType::BoreBar
    }

    fn shaft(&self) -> &ShaftGeometry {
        &self.shaft
    }
}

impl Measurable for BoreBar {
    fn units(&self) -> Units {
        self.shaft.units()
    }

    fn scale(&mut self, units: Units, factor: f64) {
        self.shaft.scale(units, factor);
        self.corner_radius *= factor;
    }
}

impl fmt::Display for BoreBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, ToolType::BoreBar, &self.shaft)?;
        write!(f, "\n  taper angle: {}", self.taper_angle)?;
        write!(f, "\n  corner radius type: {}", self.corner_radius_type)?;
        write!(f, "\n  corner radius: {}", self.corner_radius)
    }
}

/// Parameters shared by left and right hand taps
///
/// Built by the tap constructors, which resolve the corner radius against
/// the shaft diameter. `Full` resolves to half of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapParameters {
    tip_angle: f64,
    corner_radius_type: CornerRadiusType,
    corner_radius: f64,
    threads_number: f64,
}

impl TapParameters {
    fn for_diameter(
        diameter: f64,
        tip_angle: f64,
        corner_radius: f64,
        corner_radius_type: CornerRadiusType,
        threads_number: f64,
    ) -> Result<Self> {
        validate::tip_angle("tip_angle", tip_angle)?;
        corner_radius_type.validate(corner_radius, false)?;
        validate_threads_number(threads_number)?;
        let resolved = corner_radius_type.resolve(corner_radius, diameter / 2.0);
        validate::diameter_vs_corner_radius(diameter, resolved)?;
        Ok(Self {
            tip_angle,
            corner_radius_type,
            corner_radius: resolved,
            threads_number,
        })
    }

    /// Included tip angle
    pub fn tip_angle(&self) -> f64 {
        self.tip_angle
    }

    /// Corner radius type
    pub fn corner_radius_type(&self) -> CornerRadiusType {
        self.corner_radius_type
    }

    /// Effective corner radius
    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }

    /// Number of threads
    pub fn threads_number(&self) -> f64 {
        self.threads_number
    }

    fn dump(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n  tip angle: {}", self.tip_angle)?;
        write!(f, "\n  corner radius type: {}", self.corner_radius_type)?;
        write!(f, "\n  corner radius: {}", self.corner_radius)?;
        write!(f, "\n  threads number: {}", self.threads_number)
    }
}

fn validate_threads_number(threads_number: f64) -> Result<()> {
    validate::finite("threads_number", threads_number)?;
    if threads_number < 1.0 {
        return Err(ToolError::invalid(
            "threads_number",
            threads_number,
            "must be greater than or equal to 1",
        )
        .into());
    }
    Ok(())
}

macro_rules! tap {
    ($(#[$meta:meta])* $name:ident, $tool_type:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            shaft: ShaftGeometry,
            tap: TapParameters,
        }

        impl $name {
            /// Create a tap, checking the corner radius against the shaft diameter
            pub fn new(
                shaft: ShaftGeometry,
                tip_angle: f64,
                corner_radius: f64,
                corner_radius_type: CornerRadiusType,
                threads_number: f64,
            ) -> Result<Self> {
                let tap = TapParameters::for_diameter(
                    shaft.diameter(),
                    tip_angle,
                    corner_radius,
                    corner_radius_type,
                    threads_number,
                )?;
                Ok(Self { shaft, tap })
            }

            /// Tap parameters
            pub fn parameters(&self) -> &TapParameters {
                &self.tap
            }

            /// Included tip angle
            pub fn tip_angle(&self) -> f64 {
                self.tap.tip_angle
            }

            /// Effective corner radius
            pub fn corner_radius(&self) -> f64 {
                self.tap.corner_radius
            }

            /// Number of threads
            pub fn threads_number(&self) -> f64 {
                self.tap.threads_number
            }

            /// Change the number of threads
            pub fn set_threads_number(&mut self, threads_number: f64) -> Result<()> {
                validate_threads_number(threads_number)?;
                self.tap.threads_number = threads_number;
                Ok(())
            }
        }

        impl TypedRevolved for $name {
            fn tool_type(&self) -> ToolType {
                $tool_type
            }

            fn shaft(&self) -> &ShaftGeometry {
                &self.shaft
            }
        }

        impl Measurable for $name {
            fn units(&self) -> Units {
                self.shaft.units()
            }

            fn scale(&mut self, units: Units, factor: f64) {
                self.shaft.scale(units, factor);
                self.tap.corner_radius *= factor;
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write_header(f, $tool_type, &self.shaft)?;
                self.tap.dump(f)
            }
        }
    };
}

tap!(
    /// Left hand tap
    LeftHandTap,
    ToolType::LeftHandTap
);

tap!(
    /// Right hand tap
    RightHandTap,
    ToolType::RightHandTap
);

shaft_access!(
    Drill,
    SpotDrill,
    CenterDrill,
    CounterSink,
    CounterBore,
    Reamer,
    BoreBar,
    LeftHandTap,
    RightHandTap,
);

#[cfg(test)]
mod tests {
    use super::*;

    fn shaft(diameter: f64, flute: f64, shoulder: f64) -> ShaftGeometry {
        ShaftGeometry::cylindrical(diameter, flute, shoulder, Units::Metric).unwrap()
    }

    #[test]
    fn test_drill_tip_angle_range() {
        assert!(Drill::new(shaft(6.0, 30.0, 50.0), 118.0).is_ok());
        assert!(Drill::new(shaft(6.0, 30.0, 50.0), 0.0).is_err());
        assert!(Drill::new(shaft(6.0, 30.0, 50.0), 181.0).is_err());
    }

    #[test]
    fn test_spot_drill_tip_must_fit_shoulder() {
        // 90 degrees: tip height equals the radius
        let drill = SpotDrill::new(shaft(10.0, 5.0, 20.0), 90.0).unwrap();
        assert!((drill.tip_height() - 5.0).abs() < 1e-9);
        let err = SpotDrill::new(shaft(10.0, 2.0, 4.0), 90.0).unwrap_err();
        assert!(err.is_geometric_infeasibility());
    }

    #[test]
    fn test_center_drill() {
        assert!(CenterDrill::new(shaft(8.0, 10.0, 40.0), 118.0, 60.0, 3.0, 4.0).is_ok());
        assert!(CenterDrill::new(shaft(8.0, 10.0, 40.0), 118.0, 60.0, 8.0, 4.0).is_err());
        assert!(CenterDrill::new(shaft(8.0, 10.0, 40.0), 118.0, 60.0, 3.0, 11.0).is_err());
    }

    #[test]
    fn test_counter_sink() {
        let sink = CounterSink::new(shaft(12.0, 6.0, 40.0), 90.0, 2.0, 0.0, CornerRadiusType::Full).unwrap();
        assert_eq!(sink.corner_radius(), 6.0);
        assert!(CounterSink::new(shaft(12.0, 6.0, 40.0), 90.0, 12.0, 0.0, CornerRadiusType::None).is_err());
    }

    #[test]
    fn test_reamer_set_factor_revalidates() {
        let mut reamer = Reamer::new(shaft(6.0, 20.0, 40.0), 1.0).unwrap();
        assert!(reamer.set_factor(0.0).is_err());
        assert_eq!(reamer.factor(), 1.0);
        reamer.set_factor(1.5).unwrap();
        assert_eq!(reamer.factor(), 1.5);
    }

    #[test]
    fn test_bore_bar_strict_corner() {
        assert!(BoreBar::new(shaft(20.0, 10.0, 40.0), 10.0, 0.0, CornerRadiusType::Corner).is_err());
        let bar = BoreBar::new(shaft(20.0, 10.0, 40.0), 10.0, 0.0, CornerRadiusType::Full).unwrap();
        assert_eq!(bar.corner_radius(), 10.0);
    }

    #[test]
    fn test_taps() {
        let mut tap =
            RightHandTap::new(shaft(8.0, 20.0, 40.0), 120.0, 0.2, CornerRadiusType::Corner, 4.0).unwrap();
        assert_eq!(tap.tool_type(), ToolType::RightHandTap);
        assert!(tap.set_threads_number(0.5).is_err());
        tap.set_threads_number(6.0).unwrap();
        assert_eq!(tap.threads_number(), 6.0);
        let left =
            LeftHandTap::new(shaft(8.0, 20.0, 40.0), 120.0, 0.2, CornerRadiusType::Corner, 4.0).unwrap();
        assert_eq!(left.tool_type(), ToolType::LeftHandTap);
        assert!(left.to_string().contains("threads number: 4"));
        assert!(LeftHandTap::new(shaft(8.0, 20.0, 40.0), 120.0, 0.2, CornerRadiusType::Corner, 0.0).is_err());
    }

    #[test]
    fn test_tap_corner_radius_checked_against_shaft() {
        let err = RightHandTap::new(shaft(10.0, 20.0, 40.0), 118.0, 40.0, CornerRadiusType::Corner, 4.0)
            .unwrap_err();
        assert!(err.is_invalid_parameter());
        assert!(LeftHandTap::new(shaft(10.0, 20.0, 40.0), 118.0, 5.1, CornerRadiusType::Corner, 4.0).is_err());

        let full = RightHandTap::new(shaft(10.0, 20.0, 40.0), 118.0, 0.0, CornerRadiusType::Full, 4.0).unwrap();
        assert_eq!(full.corner_radius(), 5.0);
        assert!(full.tool_diameter() >= 2.0 * full.corner_radius());
    }
}

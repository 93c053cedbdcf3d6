//! Milling cutters
//!
//! Angles are in degrees. Corner radius policies follow
//! [`CornerRadiusType`]; each tool documents what `Full` means for it.

use super::{write_header, TypedRevolved};
use crate::corner::CornerRadiusType;
use crate::shaft::ShaftGeometry;
use crate::types::ToolType;
use crate::validate;
use cutterkit_core::{BoundingBox3d, Measurable, Result, ToolError, Units};
use std::fmt;
use tracing::debug;

fn tan_deg(angle: f64) -> f64 {
    angle.to_radians().tan()
}

/// Height needed for a cone of `taper_angle` (from the axis) to grow from
/// `lower` to `upper` diameter
fn taper_reach(lower: f64, upper: f64, taper_angle: f64) -> f64 {
    (upper - lower) / 2.0 / tan_deg(taper_angle)
}

/// Flat end mill
#[derive(Debug, Clone, PartialEq)]
pub struct EndMill {
    shaft: ShaftGeometry,
}

impl EndMill {
    /// Create a flat end mill
    pub fn new(shaft: ShaftGeometry) -> Self {
        debug!(diameter = shaft.diameter(), "created end mill");
        Self { shaft }
    }
}

impl TypedRevolved for EndMill {
    fn tool_type(&self) -> ToolType {
        ToolType::EndMill
    }

    fn shaft(&self) -> &ShaftGeometry {
        &self.shaft
    }
}

impl Measurable for EndMill {
    fn units(&self) -> Units {
        self.shaft.units()
    }

    fn scale(&mut self, units: Units, factor: f64) {
        self.shaft.scale(units, factor);
    }
}

impl fmt::Display for EndMill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, ToolType::EndMill, &self.shaft)
    }
}

/// Bull nose mill: flat bottom with a corner radius
#[derive(Debug, Clone, PartialEq)]
pub struct BullMill {
    shaft: ShaftGeometry,
    corner_radius: f64,
}

impl BullMill {
    /// Create a bull nose mill
    pub fn new(shaft: ShaftGeometry, corner_radius: f64) -> Result<Self> {
        validate::non_negative("corner_radius", corner_radius)?;
        validate::diameter_vs_corner_radius(shaft.diameter(), corner_radius)?;
        Ok(Self {
            shaft,
            corner_radius,
        })
    }

    /// Corner radius
    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }
}

impl TypedRevolved for BullMill {
    fn tool_type(&self) -> ToolType {
        ToolType::BullMill
    }

    fn shaft(&self) -> &ShaftGeometry {
        &self.shaft
    }
}

impl Measurable for BullMill {
    fn units(&self) -> Units {
        self.shaft.units()
    }

    fn scale(&mut self, units: Units, factor: f64) {
        self.shaft.scale(units, factor);
        self.corner_radius *= factor;
    }
}

impl fmt::Display for BullMill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, ToolType::BullMill, &self.shaft)?;
        write!(f, "\n  corner radius: {}", self.corner_radius)
    }
}

/// Ball end mill; the corner radius is half the diameter
#[derive(Debug, Clone, PartialEq)]
pub struct SphereMill {
    shaft: ShaftGeometry,
}

impl SphereMill {
    /// Create a ball end mill
    pub fn new(shaft: ShaftGeometry) -> Self {
        Self { shaft }
    }

    /// Ball radius
    pub fn corner_radius(&self) -> f64 {
        self.shaft.diameter() / 2.0
    }
}

impl TypedRevolved for SphereMill {
    fn tool_type(&self) -> ToolType {
        ToolType::SphereMill
    }

    fn shaft(&self) -> &ShaftGeometry {
        &self.shaft
    }
}

impl Measurable for SphereMill {
    fn units(&self) -> Units {
        self.shaft.units()
    }

    fn scale(&mut self, units: Units, factor: f64) {
        self.shaft.scale(units, factor);
    }
}

impl fmt::Display for SphereMill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, ToolType::SphereMill, &self.shaft)
    }
}

/// Corner rounding mill
#[derive(Debug, Clone, PartialEq)]
pub struct RadMill {
    shaft: ShaftGeometry,
    corner_radius: f64,
}

impl RadMill {
    /// Create a corner rounding mill
    pub fn new(shaft: ShaftGeometry, corner_radius: f64) -> Result<Self> {
        validate::non_negative("corner_radius", corner_radius)?;
        Ok(Self {
            shaft,
            corner_radius,
        })
    }

    /// Rounding radius
    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }
}

impl TypedRevolved for RadMill {
    fn tool_type(&self) -> ToolType {
        ToolType::RadMill
    }

    fn shaft(&self) -> &ShaftGeometry {
        &self.shaft
    }
}

impl Measurable for RadMill {
    fn units(&self) -> Units {
        self.shaft.units()
    }

    fn scale(&mut self, units: Units, factor: f64) {
        self.shaft.scale(units, factor);
        self.corner_radius *= factor;
    }
}

impl fmt::Display for RadMill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, ToolType::RadMill, &self.shaft)?;
        write!(f, "\n  corner radius: {}", self.corner_radius)
    }
}

/// Slot (disk) mill with lower and upper corner radii
///
/// `Full` resolves both radii to half the flute length.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotMill {
    shaft: ShaftGeometry,
    corner_radius_type: CornerRadiusType,
    lower_corner_radius: f64,
    upper_corner_radius: f64,
}

impl SlotMill {
    /// Create a slot mill with equal lower and upper radii
    pub fn new(
        shaft: ShaftGeometry,
        corner_radius: f64,
        corner_radius_type: CornerRadiusType,
    ) -> Result<Self> {
        Self::with_corner_radii(shaft, corner_radius, corner_radius, corner_radius_type)
    }

    /// Create a slot mill with distinct lower and upper radii
    pub fn with_corner_radii(
        shaft: ShaftGeometry,
        lower_corner_radius: f64,
        upper_corner_radius: f64,
        corner_radius_type: CornerRadiusType,
    ) -> Result<Self> {
        corner_radius_type.validate(lower_corner_radius, false)?;
        corner_radius_type.validate(upper_corner_radius, false)?;
        let full = shaft.flute_length() / 2.0;
        let lower = corner_radius_type.resolve(lower_corner_radius, full);
        let upper = corner_radius_type.resolve(upper_corner_radius, full);
        validate::at_most(
            "lower_corner_radius + upper_corner_radius",
            lower + upper,
            "flute_length",
            shaft.flute_length(),
        )?;
        Ok(Self {
            shaft,
            corner_radius_type: corner_radius_type.compute(lower.max(upper)),
            lower_corner_radius: lower,
            upper_corner_radius: upper,
        })
    }

    /// Effective corner radius type
    pub fn corner_radius_type(&self) -> CornerRadiusType {
        self.corner_radius_type
    }

    /// Effective lower corner radius
    pub fn corner_radius(&self) -> f64 {
        self.lower_corner_radius
    }

    /// Effective lower corner radius
    pub fn lower_corner_radius(&self) -> f64 {
        self.lower_corner_radius
    }

    /// Effective upper corner radius
    pub fn upper_corner_radius(&self) -> f64 {
        self.upper_corner_radius
    }
}

impl TypedRevolved for SlotMill {
    fn tool_type(&self) -> ToolType {
        ToolType::SlotMill
    }

    fn shaft(&self) -> &ShaftGeometry {
        &self.shaft
    }
}

impl Measurable for SlotMill {
    fn units(&self) -> Units {
        self.shaft.units()
    }

    fn scale(&mut self, units: Units, factor: f64) {
        self.shaft.scale(units, factor);
        self.lower_corner_radius *= factor;
        self.upper_corner_radius *= factor;
    }
}

impl fmt::Display for SlotMill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, ToolType::SlotMill, &self.shaft)?;
        write!(f, "\n  corner radius type: {}", self.corner_radius_type)?;
        write!(f, "\n  lower corner radius: {}", self.lower_corner_radius)?;
        write!(f, "\n  upper corner radius: {}", self.upper_corner_radius)
    }
}

/// Taper, corner type and radius shared by face and chamfer mills
#[derive(Debug, Clone, Copy, PartialEq)]
struct ConeCutter {
    outside_diameter: f64,
    taper_angle: f64,
    corner_radius_type: CornerRadiusType,
    corner_radius: f64,
}

impl ConeCutter {
    fn validate(&self, shaft: &ShaftGeometry) -> Result<()> {
        validate::positive("outside_diameter", self.outside_diameter)?;
        validate::taper_angle(self.taper_angle)?;
        validate::at_most("diameter", shaft.diameter(), "outside_diameter", self.outside_diameter)?;
        let reach = taper_reach(shaft.diameter(), self.outside_diameter, self.taper_angle);
        if reach > shaft.shoulder_length() {
            return Err(ToolError::infeasible(
                "taper_angle, outside_diameter, shoulder_length",
                format!(
                    "taper needs {:.4} to reach the outside diameter but the shoulder length is {}",
                    reach,
                    shaft.shoulder_length()
                ),
            )
            .into());
        }
        Ok(())
    }

    fn scale(&mut self, factor: f64) {
        self.outside_diameter *= factor;
        self.corner_radius *= factor;
    }

    fn cutting_box(&self, shaft: &ShaftGeometry) -> BoundingBox3d {
        BoundingBox3d::revolved(
            shaft.diameter().max(self.outside_diameter) / 2.0,
            0.0,
            shaft.flute_length(),
        )
    }

    fn dump(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n  outside diameter: {}", self.outside_diameter)?;
        write!(f, "\n  taper angle: {}", self.taper_angle)?;
        write!(f, "\n  corner radius type: {}", self.corner_radius_type)?;
        write!(f, "\n  corner radius: {}", self.corner_radius)
    }
}

/// Face mill
///
/// Only `Corner` keeps a radius; `None` and `Full` resolve to 0.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceMill {
    shaft: ShaftGeometry,
    cone: ConeCutter,
}

impl FaceMill {
    /// Create a face mill
    pub fn new(
        shaft: ShaftGeometry,
        outside_diameter: f64,
        taper_angle: f64,
        corner_radius: f64,
        corner_radius_type: CornerRadiusType,
    ) -> Result<Self> {
        corner_radius_type.validate(corner_radius, true)?;
        let cone = ConeCutter {
            outside_diameter,
            taper_angle,
            corner_radius_type,
            corner_radius: corner_radius_type.resolve(corner_radius, 0.0),
        };
        cone.validate(&shaft)?;
        Ok(Self { shaft, cone })
    }

    /// Outside diameter
    pub fn outside_diameter(&self) -> f64 {
        self.cone.outside_diameter
    }

    /// Taper angle
    pub fn taper_angle(&self) -> f64 {
        self.cone.taper_angle
    }

    /// Corner radius type
    pub fn corner_radius_type(&self) -> CornerRadiusType {
        self.cone.corner_radius_type
    }

    /// Effective corner radius
    pub fn corner_radius(&self) -> f64 {
        self.cone.corner_radius
    }
}

impl TypedRevolved for FaceMill {
    fn tool_type(&self) -> ToolType {
        ToolType::FaceMill
    }

    fn shaft(&self) -> &ShaftGeometry {
        &self.shaft
    }

    fn cutting_bounding_box(&self) -> BoundingBox3d {
        self.cone.cutting_box(&self.shaft)
    }
}

impl Measurable for FaceMill {
    fn units(&self) -> Units {
        self.shaft.units()
    }

    fn scale(&mut self, units: Units, factor: f64) {
        self.shaft.scale(units, factor);
        self.cone.scale(factor);
    }
}

impl fmt::Display for FaceMill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, ToolType::FaceMill, &self.shaft)?;
        self.cone.dump(f)
    }
}

/// Chamfer mill
///
/// `Full` resolves to half the tool diameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ChamferMill {
    shaft: ShaftGeometry,
    cone: ConeCutter,
}

impl ChamferMill {
    /// Create a chamfer mill
    pub fn new(
        shaft: ShaftGeometry,
        outside_diameter: f64,
        taper_angle: f64,
        corner_radius: f64,
        corner_radius_type: CornerRadiusType,
    ) -> Result<Self> {
        corner_radius_type.validate(corner_radius, true)?;
        let resolved = corner_radius_type.resolve(corner_radius, shaft.diameter() / 2.0);
        validate::diameter_vs_corner_radius(shaft.diameter(), resolved)?;
        let cone = ConeCutter {
            outside_diameter,
            taper_angle,
            corner_radius_type,
            corner_radius: resolved,
        };
        cone.validate(&shaft)?;
        Ok(Self { shaft, cone })
    }

    /// Outside diameter
    pub fn outside_diameter(&self) -> f64 {
        self.cone.outside_diameter
    }

    /// Taper angle
    pub fn taper_angle(&self) -> f64 {
        self.cone.taper_angle
    }

    /// Corner radius type
    pub fn corner_radius_type(&self) -> CornerRadiusType {
        self.cone.corner_radius_type
    }

    /// Effective corner radius
    pub fn corner_radius(&self) -> f64 {
        self.cone.corner_radius
    }
}

impl TypedRevolved for ChamferMill {
    fn tool_type(&self) -> ToolType {
        ToolType::ChamferMill
    }

    fn shaft(&self) -> &ShaftGeometry {
        &self.shaft
    }

    fn cutting_bounding_box(&self) -> BoundingBox3d {
        self.cone.cutting_box(&self.shaft)
    }
}

impl Measurable for ChamferMill {
    fn units(&self) -> Units {
        self.shaft.units()
    }

    fn scale(&mut self, units: Units, factor: f64) {
        self.shaft.scale(units, factor);
        self.cone.scale(factor);
    }
}

impl fmt::Display for ChamferMill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, ToolType::ChamferMill, &self.shaft)?;
        self.cone.dump(f)
    }
}

/// Tapered mill widening towards the shank
///
/// `Full` resolves to half the tool diameter.
#[derive(Debug, Clone, PartialEq)]
pub struct TaperMill {
    shaft: ShaftGeometry,
    taper_angle: f64,
    corner_radius_type: CornerRadiusType,
    corner_radius: f64,
}

impl TaperMill {
    /// Create a tapered mill
    pub fn new(
        shaft: ShaftGeometry,
        taper_angle: f64,
        corner_radius: f64,
        corner_radius_type: CornerRadiusType,
    ) -> Result<Self> {
        validate::taper_angle(taper_angle)?;
        corner_radius_type.validate(corner_radius, true)?;
        let resolved = corner_radius_type.resolve(corner_radius, shaft.diameter() / 2.0);
        validate::diameter_vs_corner_radius(shaft.diameter(), resolved)?;
        let corner_height = resolved * (1.0 - taper_angle.to_radians().sin());
        if shaft.shoulder_length() <= corner_height {
            return Err(ToolError::infeasible(
                "shoulder_length, corner_radius, taper_angle",
                format!(
                    "shoulder length ({}) must exceed the corner height ({:.4})",
                    shaft.shoulder_length(),
                    corner_height
                ),
            )
            .into());
        }
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

    /// Diameter at the top of the flutes
    pub fn flute_upper_diameter(&self) -> f64 {
        self.shaft.diameter() + 2.0 * self.shaft.flute_length() * tan_deg(self.taper_angle)
    }

    /// Diameter at the top of the shoulder
    pub fn shoulder_upper_diameter(&self) -> f64 {
        self.shaft.diameter() + 2.0 * self.shaft.shoulder_length() * tan_deg(self.taper_angle)
    }
}

impl TypedRevolved for TaperMill {
    fn tool_type(&self) -> ToolType {
        ToolType::TaperMill
    }

    fn shaft(&self) -> &ShaftGeometry {
        &self.shaft
    }

    fn cutting_bounding_box(&self) -> BoundingBox3d {
        BoundingBox3d::revolved(self.flute_upper_diameter() / 2.0, 0.0, self.shaft.flute_length())
    }

    // the taper keeps widening up to the top of the shoulder
    fn non_cutting_bounding_box(&self) -> BoundingBox3d {
        let shaft_box = self.shaft.non_cutting_box();
        match (shaft_box.min(), shaft_box.max()) {
            (Some(min), Some(max)) => {
                let radius = (self.shoulder_upper_diameter() / 2.0).max(max.x);
                BoundingBox3d::revolved(radius, min.z, max.z)
            }
            _ => shaft_box,
        }
    }
}

impl Measurable for TaperMill {
    fn units(&self) -> Units {
        self.shaft.units()
    }

    fn scale(&mut self, units: Units, factor: f64) {
        self.shaft.scale(units, factor);
        self.corner_radius *= factor;
    }
}

impl fmt::Display for TaperMill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, ToolType::TaperMill, &self.shaft)?;
        write!(f, "\n  taper angle: {}", self.taper_angle)?;
        write!(f, "\n  corner radius type: {}", self.corner_radius_type)?;
        write!(f, "\n  corner radius: {}", self.corner_radius)
    }
}

/// Dovetail mill
///
/// Only `Corner` keeps a radius; `None` and `Full` resolve to 0.
#[derive(Debug, Clone, PartialEq)]
pub struct DoveMill {
    shaft: ShaftGeometry,
    taper_angle: f64,
    upper_diameter: f64,
    corner_radius_type: CornerRadiusType,
    corner_radius: f64,
}

impl DoveMill {
    /// Create a dovetail mill
    pub fn new(
        shaft: ShaftGeometry,
        taper_angle: f64,
        upper_diameter: f64,
        corner_radius: f64,
        corner_radius_type: CornerRadiusType,
    ) -> Result<Self> {
        validate::taper_angle(taper_angle)?;
        validate::positive("upper_diameter", upper_diameter)?;
        corner_radius_type.validate(corner_radius, false)?;
        Ok(Self {
            shaft,
            taper_angle,
            upper_diameter,
            corner_radius_type,
            corner_radius: corner_radius_type.resolve(corner_radius, 0.0),
        })
    }

    /// Taper angle
    pub fn taper_angle(&self) -> f64 {
        self.taper_angle
    }

    /// Diameter at the top of the flutes
    pub fn upper_diameter(&self) -> f64 {
        self.upper_diameter
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

impl TypedRevolved for DoveMill {
    fn tool_type(&self) -> ToolType {
        ToolType::DoveMill
    }

    fn shaft(&self) -> &ShaftGeometry {
        &self.shaft
    }

    fn cutting_bounding_box(&self) -> BoundingBox3d {
        BoundingBox3d::revolved(
            self.shaft.diameter().max(self.upper_diameter) / 2.0,
            0.0,
            self.shaft.flute_length(),
        )
    }
}

impl Measurable for DoveMill {
    fn units(&self) -> Units {
        self.shaft.units()
    }

    fn scale(&mut self, units: Units, factor: f64) {
        self.shaft.scale(units, factor);
        self.upper_diameter *= factor;
        self.corner_radius *= factor;
    }
}

impl fmt::Display for DoveMill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, ToolType::DoveMill, &self.shaft)?;
        write!(f, "\n  taper angle: {}", self.taper_angle)?;
        write!(f, "\n  upper diameter: {}", self.upper_diameter)?;
        write!(f, "\n  corner radius type: {}", self.corner_radius_type)?;
        write!(f, "\n  corner radius: {}", self.corner_radius)
    }
}

/// Lollipop mill: a ball of the tool diameter, cut off at the outside diameter
#[derive(Debug, Clone, PartialEq)]
pub struct LolMill {
    shaft: ShaftGeometry,
    outside_diameter: f64,
}

impl LolMill {
    /// Create a lollipop mill
    pub fn new(shaft: ShaftGeometry, outside_diameter: f64) -> Result<Self> {
        validate::positive("outside_diameter", outside_diameter)?;
        validate::at_most("outside_diameter", outside_diameter, "diameter", shaft.diameter())?;
        validate::at_most("flute_length", shaft.flute_length(), "diameter", shaft.diameter())?;
        Ok(Self {
            shaft,
            outside_diameter,
        })
    }

    /// Diameter where the ball is cut off
    pub fn outside_diameter(&self) -> f64 {
        self.outside_diameter
    }

    /// Ball radius
    pub fn corner_radius(&self) -> f64 {
        self.shaft.diameter() / 2.0
    }
}

impl TypedRevolved for LolMill {
    fn tool_type(&self) -> ToolType {
        ToolType::LolMill
    }

    fn shaft(&self) -> &ShaftGeometry {
        &self.shaft
    }
}

impl Measurable for LolMill {
    fn units(&self) -> Units {
        self.shaft.units()
    }

    fn scale(&mut self, units: Units, factor: f64) {
        self.shaft.scale(units, factor);
        self.outside_diameter *= factor;
    }
}

impl fmt::Display for LolMill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, ToolType::LolMill, &self.shaft)?;
        write!(f, "\n  outside diameter: {}", self.outside_diameter)
    }
}

/// Convex tip mill: flat centre, convex tip arc, corner radius at the rim
#[derive(Debug, Clone, PartialEq)]
pub struct ConvexTipMill {
    shaft: ShaftGeometry,
    corner_radius: f64,
    flatness_radius: f64,
    convex_tip_radius: f64,
}

impl ConvexTipMill {
    /// Create a convex tip mill
    pub fn new(
        shaft: ShaftGeometry,
        corner_radius: f64,
        flatness_radius: f64,
        convex_tip_radius: f64,
    ) -> Result<Self> {
        validate::non_negative("corner_radius", corner_radius)?;
        validate::non_negative("flatness_radius", flatness_radius)?;
        validate::finite("convex_tip_radius", convex_tip_radius)?;
        let tool_radius = shaft.diameter() / 2.0;
        validate::less_than(
            "flatness_radius",
            flatness_radius,
            "tool radius - corner_radius",
            tool_radius - corner_radius,
        )?;
        if convex_tip_radius < tool_radius - flatness_radius {
            return Err(ToolError::infeasible(
                "convex_tip_radius, flatness_radius",
                format!(
                    "convex tip radius ({}) must be at least the tool radius minus the flatness radius ({})",
                    convex_tip_radius,
                    tool_radius - flatness_radius
                ),
            )
            .into());
        }
        Ok(Self {
            shaft,
            corner_radius,
            flatness_radius,
            convex_tip_radius,
        })
    }

    /// Corner radius
    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }

    /// Radius of the flat centre
    pub fn flatness_radius(&self) -> f64 {
        self.flatness_radius
    }

    /// Radius of the convex tip arc
    pub fn convex_tip_radius(&self) -> f64 {
        self.convex_tip_radius
    }
}

impl TypedRevolved for ConvexTipMill {
    fn tool_type(&self) -> ToolType {
        ToolType::ConvexTipMill
    }

    fn shaft(&self) -> &ShaftGeometry {
        &self.shaft
    }
}

impl Measurable for ConvexTipMill {
    fn units(&self) -> Units {
        self.shaft.units()
    }

    fn scale(&mut self, units: Units, factor: f64) {
        self.shaft.scale(units, factor);
        self.corner_radius *= factor;
        self.flatness_radius *= factor;
        self.convex_tip_radius *= factor;
    }
}

impl fmt::Display for ConvexTipMill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, ToolType::ConvexTipMill, &self.shaft)?;
        write!(f, "\n  corner radius: {}", self.corner_radius)?;
        write!(f, "\n  flatness radius: {}", self.flatness_radius)?;
        write!(f, "\n  convex tip radius: {}", self.convex_tip_radius)
    }
}

shaft_access!(
    EndMill,
    BullMill,
    SphereMill,
    RadMill,
    SlotMill,
    FaceMill,
    ChamferMill,
    TaperMill,
    DoveMill,
    LolMill,
    ConvexTipMill,
);

#[cfg(test)]
mod tests {
    use super::*;
    use cutterkit_core::ToolPartFlags;

    fn shaft(diameter: f64, flute: f64, shoulder: f64) -> ShaftGeometry {
        ShaftGeometry::cylindrical(diameter, flute, shoulder, Units::Metric).unwrap()
    }

    #[test]
    fn test_bull_mill_corner_radius_bounds() {
        assert!(BullMill::new(shaft(10.0, 20.0, 40.0), 5.0).is_ok());
        let err = BullMill::new(shaft(10.0, 20.0, 40.0), 5.1).unwrap_err();
        assert!(err.is_invalid_parameter());
        assert!(BullMill::new(shaft(10.0, 20.0, 40.0), -0.1).is_err());
    }

    #[test]
    fn test_slot_mill_full_radius() {
        let mill = SlotMill::new(shaft(50.0, 20.0, 40.0), 3.0, CornerRadiusType::Full).unwrap();
        assert_eq!(mill.corner_radius(), 10.0);
        assert_eq!(mill.upper_corner_radius(), 10.0);
    }

    #[test]
    fn test_slot_mill_none_radius() {
        let mill = SlotMill::new(shaft(50.0, 20.0, 40.0), 3.0, CornerRadiusType::None).unwrap();
        assert_eq!(mill.corner_radius(), 0.0);
        assert_eq!(mill.corner_radius_type(), CornerRadiusType::None);
    }

    #[test]
    fn test_slot_mill_radii_must_fit_flutes() {
        assert!(SlotMill::with_corner_radii(shaft(50.0, 20.0, 40.0), 12.0, 9.0, CornerRadiusType::Corner).is_err());
        assert!(SlotMill::with_corner_radii(shaft(50.0, 20.0, 40.0), 11.0, 9.0, CornerRadiusType::Corner).is_ok());
    }

    #[test]
    fn test_face_mill_taper_must_reach_shoulder() {
        // 45 degrees: needs (60 - 20) / 2 = 20 of shoulder
        assert!(FaceMill::new(shaft(20.0, 10.0, 25.0), 60.0, 45.0, 1.0, CornerRadiusType::Corner).is_ok());
        let err = FaceMill::new(shaft(20.0, 10.0, 15.0), 60.0, 45.0, 1.0, CornerRadiusType::Corner).unwrap_err();
        assert!(err.is_geometric_infeasibility());
    }

    #[test]
    fn test_face_mill_corner_policy() {
        let mill = FaceMill::new(shaft(20.0, 10.0, 25.0), 60.0, 45.0, 2.0, CornerRadiusType::Full).unwrap();
        assert_eq!(mill.corner_radius(), 0.0);
        assert!(FaceMill::new(shaft(20.0, 10.0, 25.0), 60.0, 45.0, 0.0, CornerRadiusType::Corner).is_err());
        assert!(FaceMill::new(shaft(20.0, 10.0, 25.0), 60.0, 95.0, 1.0, CornerRadiusType::None).is_err());
    }

    #[test]
    fn test_face_mill_cutting_box_uses_outside_diameter() {
        let mill = FaceMill::new(shaft(20.0, 10.0, 25.0), 60.0, 45.0, 1.0, CornerRadiusType::Corner).unwrap();
        assert_eq!(mill.tool_part_bounding_box(ToolPartFlags::CUTTING).size_x(), 60.0);
    }

    #[test]
    fn test_chamfer_mill_full_radius_is_half_diameter() {
        let mill = ChamferMill::new(shaft(4.0, 10.0, 30.0), 20.0, 45.0, 0.5, CornerRadiusType::Full).unwrap();
        assert_eq!(mill.corner_radius(), 2.0);
        assert!(ChamferMill::new(shaft(4.0, 10.0, 30.0), 2.0, 45.0, 0.5, CornerRadiusType::Corner).is_err());
    }

    #[test]
    fn test_taper_mill() {
        let mill = TaperMill::new(shaft(10.0, 20.0, 40.0), 5.0, 1.0, CornerRadiusType::Corner).unwrap();
        let expected = 10.0 + 2.0 * 20.0 * 5.0_f64.to_radians().tan();
        assert!((mill.flute_upper_diameter() - expected).abs() < 1e-12);
        assert!(mill.shoulder_upper_diameter() > mill.flute_upper_diameter());
        let full = TaperMill::new(shaft(10.0, 20.0, 40.0), 5.0, 1.0, CornerRadiusType::Full).unwrap();
        assert_eq!(full.corner_radius(), 5.0);
        assert!(TaperMill::new(shaft(10.0, 20.0, 40.0), 0.0, 1.0, CornerRadiusType::Corner).is_err());
    }

    #[test]
    fn test_taper_mill_shoulder_box_follows_taper() {
        let mill = TaperMill::new(shaft(10.0, 20.0, 60.0), 10.0, 1.0, CornerRadiusType::Corner).unwrap();
        let upper = mill.shoulder_upper_diameter();
        assert!((upper - (10.0 + 120.0 * 10.0_f64.to_radians().tan())).abs() < 1e-9);

        let shank = mill.tool_part_bounding_box(ToolPartFlags::NON_CUTTING);
        assert!((shank.size_x() - upper).abs() < 1e-9);
        assert_eq!(shank.min().map(|p| p.z), Some(20.0));
        assert_eq!(shank.size_z(), 40.0);

        let cutting = mill.tool_part_bounding_box(ToolPartFlags::CUTTING);
        assert!((cutting.size_x() - mill.flute_upper_diameter()).abs() < 1e-9);
        assert!(shank.size_x() > cutting.size_x());
    }

    #[test]
    fn test_dove_mill() {
        let mill = DoveMill::new(shaft(20.0, 8.0, 30.0), 45.0, 12.0, 1.0, CornerRadiusType::Full).unwrap();
        assert_eq!(mill.corner_radius(), 0.0);
        assert!(DoveMill::new(shaft(20.0, 8.0, 30.0), 45.0, 0.0, 1.0, CornerRadiusType::Corner).is_err());
    }

    #[test]
    fn test_lol_mill() {
        assert!(LolMill::new(shaft(10.0, 8.0, 30.0), 9.0).is_ok());
        assert!(LolMill::new(shaft(10.0, 8.0, 30.0), 11.0).is_err());
        assert!(LolMill::new(shaft(10.0, 12.0, 30.0), 9.0).is_err());
    }

    #[test]
    fn test_convex_tip_mill() {
        assert!(ConvexTipMill::new(shaft(20.0, 10.0, 30.0), 2.0, 3.0, 50.0).is_ok());
        // flatness reaches into the corner
        assert!(ConvexTipMill::new(shaft(20.0, 10.0, 30.0), 2.0, 8.0, 50.0).is_err());
        // tip arc too small
        assert!(ConvexTipMill::new(shaft(20.0, 10.0, 30.0), 2.0, 3.0, 5.0).is_err());
    }

    #[test]
    fn test_scale_round_trip() {
        let original = BullMill::new(shaft(10.0, 20.0, 40.0), 2.0).unwrap();
        let mut mill = original.clone();
        mill.scale(Units::Imperial, 4.0);
        assert_eq!(mill.corner_radius(), 8.0);
        mill.scale(Units::Metric, 0.25);
        assert_eq!(mill, original);
    }

    #[test]
    fn test_dump_lists_parameters() {
        let mill = BullMill::new(shaft(10.0, 20.0, 40.0), 2.0).unwrap();
        let dump = mill.to_string();
        assert!(dump.starts_with("Bull Nose Mill"));
        assert!(dump.contains("corner radius: 2"));
        assert!(dump.contains("flute length: 20"));
    }
}

//! Barrel cutters
//!
//! Barrel tools cut with a large profile radius on the flank. Their
//! cutting box covers the wider of the tool diameter and the upper
//! diameter.

use super::{write_header, TypedRevolved};
use crate::shaft::ShaftGeometry;
use crate::types::ToolType;
use crate::validate;
use cutterkit_core::{BoundingBox3d, Measurable, Result, ToolError, Units};
use std::fmt;

fn barrel_box(shaft: &ShaftGeometry, widest: f64) -> BoundingBox3d {
    BoundingBox3d::revolved(
        shaft.diameter().max(widest) / 2.0,
        0.0,
        shaft.flute_length(),
    )
}

/// Barrel mill
#[derive(Debug, Clone, PartialEq)]
pub struct BarrelMill {
    shaft: ShaftGeometry,
    profile_radius: f64,
    upper_diameter: f64,
    corner_radius: f64,
}

impl BarrelMill {
    /// Create a barrel mill
    pub fn new(
        shaft: ShaftGeometry,
        profile_radius: f64,
        upper_diameter: f64,
        corner_radius: f64,
    ) -> Result<Self> {
        validate::non_negative("profile_radius", profile_radius)?;
        validate::non_negative("upper_diameter", upper_diameter)?;
        validate::non_negative("corner_radius", corner_radius)?;
        validate::diameter_vs_corner_radius(shaft.diameter(), corner_radius)?;
        Ok(Self {
            shaft,
            profile_radius,
            upper_diameter,
            corner_radius,
        })
    }

    /// Radius of the barrel flank
    pub fn profile_radius(&self) -> f64 {
        self.profile_radius
    }

    /// Diameter at the top of the flutes
    pub fn upper_diameter(&self) -> f64 {
        self.upper_diameter
    }

    /// Corner radius at the tip
    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }
}

impl TypedRevolved for BarrelMill {
    fn tool_type(&self) -> ToolType {
        ToolType::BarrelMill
    }

    fn shaft(&self) -> &ShaftGeometry {
        &self.shaft
    }

    fn cutting_bounding_box(&self) -> BoundingBox3d {
        barrel_box(&self.shaft, self.upper_diameter)
    }
}

impl Measurable for BarrelMill {
    fn units(&self) -> Units {
        self.shaft.units()
    }

    fn scale(&mut self, units: Units, factor: f64) {
        self.shaft.scale(units, factor);
        self.profile_radius *= factor;
        self.upper_diameter *= factor;
        self.corner_radius *= factor;
    }
}

impl fmt::Display for BarrelMill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, ToolType::BarrelMill, &self.shaft)?;
        write!(f, "\n  profile radius: {}", self.profile_radius)?;
        write!(f, "\n  upper diameter: {}", self.upper_diameter)?;
        write!(f, "\n  corner radius: {}", self.corner_radius)
    }
}

/// Lens shaped barrel mill
#[derive(Debug, Clone, PartialEq)]
pub struct BarrelLensMill {
    shaft: ShaftGeometry,
    corner_radius: f64,
    convex_tip_radius: f64,
}

impl BarrelLensMill {
    /// Create a lens barrel mill
    pub fn new(shaft: ShaftGeometry, corner_radius: f64, convex_tip_radius: f64) -> Result<Self> {
        validate::non_negative("corner_radius", corner_radius)?;
        validate::finite("convex_tip_radius", convex_tip_radius)?;
        let tool_radius = shaft.diameter() / 2.0;
        validate::less_than("corner_radius", corner_radius, "tool radius", tool_radius)?;
        if convex_tip_radius < tool_radius {
            return Err(ToolError::infeasible(
                "convex_tip_radius, diameter",
                format!(
                    "convex tip radius ({}) must be at least the tool radius ({})",
                    convex_tip_radius, tool_radius
                ),
            )
            .into());
        }
        Ok(Self {
            shaft,
            corner_radius,
            convex_tip_radius,
        })
    }

    /// Corner radius at the rim
    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }

    /// Radius of the lens arc
    pub fn convex_tip_radius(&self) -> f64 {
        self.convex_tip_radius
    }
}

impl TypedRevolved for BarrelLensMill {
    fn tool_type(&self) -> ToolType {
        ToolType::BarrelLensMill
    }

    fn shaft(&self) -> &ShaftGeometry {
        &self.shaft
    }
}

impl Measurable for BarrelLensMill {
    fn units(&self) -> Units {
        self.shaft.units()
    }

    fn scale(&mut self, units: Units, factor: f64) {
        self.shaft.scale(units, factor);
        self.corner_radius *= factor;
        self.convex_tip_radius *= factor;
    }
}

impl fmt::Display for BarrelLensMill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, ToolType::BarrelLensMill, &self.shaft)?;
        write!(f, "\n  corner radius: {}", self.corner_radius)?;
        write!(f, "\n  convex tip radius: {}", self.convex_tip_radius)
    }
}

/// Taper barrel mill: conical flank with a barrel section
#[derive(Debug, Clone, PartialEq)]
pub struct BarrelTaperMill {
    shaft: ShaftGeometry,
    profile_radius: f64,
    upper_diameter: f64,
    upper_radius: f64,
    lower_radius: f64,
    taper_angle: f64,
    flatness_diameter: f64,
}

impl BarrelTaperMill {
    /// Create a taper barrel mill
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        shaft: ShaftGeometry,
        profile_radius: f64,
        upper_diameter: f64,
        upper_radius: f64,
        lower_radius: f64,
        taper_angle: f64,
        flatness_diameter: f64,
    ) -> Result<Self> {
        validate::positive("profile_radius", profile_radius)?;
        validate::positive("upper_diameter", upper_diameter)?;
        validate::positive("upper_radius", upper_radius)?;
        validate::positive("lower_radius", lower_radius)?;
        validate::taper_angle(taper_angle)?;
        validate::non_negative("flatness_diameter", flatness_diameter)?;
        validate::at_most("flatness_diameter", flatness_diameter, "diameter", shaft.diameter())?;
        Ok(Self {
            shaft,
            profile_radius,
            upper_diameter,
            upper_radius,
            lower_radius,
            taper_angle,
            flatness_diameter,
        })
    }

    /// Radius of the barrel flank
    pub fn profile_radius(&self) -> f64 {
        self.profile_radius
    }

    /// Diameter at the top of the flutes
    pub fn upper_diameter(&self) -> f64 {
        self.upper_diameter
    }

    /// Radius blending the flank into the shaft
    pub fn upper_radius(&self) -> f64 {
        self.upper_radius
    }

    /// Radius blending the flank into the tip
    pub fn lower_radius(&self) -> f64 {
        self.lower_radius
    }

    /// Taper angle
    pub fn taper_angle(&self) -> f64 {
        self.taper_angle
    }

    /// Diameter of the flat tip
    pub fn flatness_diameter(&self) -> f64 {
        self.flatness_diameter
    }
}

impl TypedRevolved for BarrelTaperMill {
    fn tool_type(&self) -> ToolType {
        ToolType::BarrelTaperMill
    }

    fn shaft(&self) -> &ShaftGeometry {
        &self.shaft
    }

    fn cutting_bounding_box(&self) -> BoundingBox3d {
        barrel_box(&self.shaft, self.upper_diameter)
    }
}

impl Measurable for BarrelTaperMill {
    fn units(&self) -> Units {
        self.shaft.units()
    }

    fn scale(&mut self, units: Units, factor: f64) {
        self.shaft.scale(units, factor);
        self.profile_radius *= factor;
        self.upper_diameter *= factor;
        self.upper_radius *= factor;
        self.lower_radius *= factor;
        self.flatness_diameter *= factor;
    }
}

impl fmt::Display for BarrelTaperMill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, ToolType::BarrelTaperMill, &self.shaft)?;
        write!(f, "\n  profile radius: {}", self.profile_radius)?;
        write!(f, "\n  upper diameter: {}", self.upper_diameter)?;
        write!(f, "\n  upper radius: {}", self.upper_radius)?;
        write!(f, "\n  lower radius: {}", self.lower_radius)?;
        write!(f, "\n  taper angle: {}", self.taper_angle)?;
        write!(f, "\n  flatness diameter: {}", self.flatness_diameter)
    }
}

/// Barrel mill whose flank is tangent to the shaft
///
/// The flank arc centre sits `axial_distance` above the tip and
/// `radial_distance` off the axis.
#[derive(Debug, Clone, PartialEq)]
pub struct BarrelTangentMill {
    shaft: ShaftGeometry,
    profile_radius: f64,
    upper_diameter: f64,
    lower_radius: f64,
    axial_distance: f64,
    radial_distance: f64,
    reference_diameter: f64,
}

impl BarrelTangentMill {
    /// Create a tangent barrel mill
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        shaft: ShaftGeometry,
        profile_radius: f64,
        upper_diameter: f64,
        lower_radius: f64,
        axial_distance: f64,
        radial_distance: f64,
        reference_diameter: f64,
    ) -> Result<Self> {
        validate::positive("profile_radius", profile_radius)?;
        validate::positive("upper_diameter", upper_diameter)?;
        validate::positive("lower_radius", lower_radius)?;
        validate::non_negative("axial_distance", axial_distance)?;
        validate::non_negative("radial_distance", radial_distance)?;
        validate::non_negative("reference_diameter", reference_diameter)?;
        Ok(Self {
            shaft,
            profile_radius,
            upper_diameter,
            lower_radius,
            axial_distance,
            radial_distance,
            reference_diameter,
        })
    }

    /// Radius of the barrel flank
    pub fn profile_radius(&self) -> f64 {
        self.profile_radius
    }

    /// Diameter at the top of the flutes
    pub fn upper_diameter(&self) -> f64 {
        self.upper_diameter
    }

    /// Radius blending the flank into the tip
    pub fn lower_radius(&self) -> f64 {
        self.lower_radius
    }

    /// Axial distance of the flank arc centre
    pub fn axial_distance(&self) -> f64 {
        self.axial_distance
    }

    /// Radial distance of the flank arc centre
    pub fn radial_distance(&self) -> f64 {
        self.radial_distance
    }

    /// Diameter used as the reference for the flank
    pub fn reference_diameter(&self) -> f64 {
        self.reference_diameter
    }
}

impl TypedRevolved for BarrelTangentMill {
    fn tool_type(&self) -> ToolType {
        ToolType::BarrelTangentMill
    }

    fn shaft(&self) -> &ShaftGeometry {
        &self.shaft
    }

    fn cutting_bounding_box(&self) -> BoundingBox3d {
        barrel_box(&self.shaft, self.upper_diameter.max(self.reference_diameter))
    }
}

impl Measurable for BarrelTangentMill {
    fn units(&self) -> Units {
        self.shaft.units()
    }

    fn scale(&mut self, units: Units, factor: f64) {
        self.shaft.scale(units, factor);
        self.profile_radius *= factor;
        self.upper_diameter *= factor;
        self.lower_radius *= factor;
        self.axial_distance *= factor;
        self.radial_distance *= factor;
        self.reference_diameter *= factor;
    }
}

impl fmt::Display for BarrelTangentMill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, ToolType::BarrelTangentMill, &self.shaft)?;
        write!(f, "\n  profile radius: {}", self.profile_radius)?;
        write!(f, "\n  upper diameter: {}", self.upper_diameter)?;
        write!(f, "\n  lower radius: {}", self.lower_radius)?;
        write!(f, "\n  axial distance: {}", self.axial_distance)?;
        write!(f, "\n  radial distance: {}", self.radial_distance)?;
        write!(f, "\n  reference diameter: {}", self.reference_diameter)
    }
}

shaft_access!(
    BarrelMill,
    BarrelLensMill,
    BarrelTaperMill,
    BarrelTangentMill,
);

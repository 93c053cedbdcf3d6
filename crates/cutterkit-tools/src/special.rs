//! Non-rotating special tools and the fully generic tool

use crate::mount::Mount;
use crate::validate;
use cutterkit_core::{
    BoundingBox3d, Measurable, PartDefinition, PartRole, PartStack, Result, ToolError,
    ToolPartFlags, Units,
};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Box centred on the tool axis, standing on z = 0
fn plate_box(x_min: f64, x_max: f64, thickness: f64, length: f64) -> BoundingBox3d {
    BoundingBox3d::new(
        Point3::new(x_min, -thickness / 2.0, 0.0),
        Point3::new(x_max, thickness / 2.0, length),
    )
}

/// Chiseling tool
#[derive(Debug, Clone, PartialEq)]
pub struct ChiselingTool {
    length: f64,
    radius: f64,
    tip_angle: f64,
    tip_depth: f64,
    flank_angle: f64,
    cutting_width: f64,
    mount: Mount,
    units: Units,
}

impl ChiselingTool {
    /// Create a chiseling tool
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        mount: Mount,
        length: f64,
        radius: f64,
        tip_angle: f64,
        tip_depth: f64,
        flank_angle: f64,
        cutting_width: f64,
        units: Units,
    ) -> Result<Self> {
        validate::positive("length", length)?;
        validate::positive("radius", radius)?;
        validate::tip_angle("tip_angle", tip_angle)?;
        validate::non_negative("tip_depth", tip_depth)?;
        validate::at_most("tip_depth", tip_depth, "length", length)?;
        validate::tip_angle("flank_angle", flank_angle)?;
        validate::non_negative("cutting_width", cutting_width)?;
        validate::at_most("cutting_width", cutting_width, "2 * radius", 2.0 * radius)?;
        Ok(Self {
            length,
            radius,
            tip_angle,
            tip_depth,
            flank_angle,
            cutting_width,
            mount: mount.into_units(units),
            units,
        })
    }

    /// Total length
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Radius of the clearance geometry
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Opening angle of the tip
    pub fn tip_angle(&self) -> f64 {
        self.tip_angle
    }

    /// Height of the blunt tip part
    pub fn tip_depth(&self) -> f64 {
        self.tip_depth
    }

    /// Opening angle of the flank above the tip
    pub fn flank_angle(&self) -> f64 {
        self.flank_angle
    }

    /// Width of the tip part
    pub fn cutting_width(&self) -> f64 {
        self.cutting_width
    }

    /// Whether the tip is a flat edge
    pub fn is_tip_flat(&self) -> bool {
        self.tip_angle >= 180.0
    }

    /// Holder and arbor
    pub fn mount(&self) -> &Mount {
        &self.mount
    }

    /// Union of the selected part boxes
    pub fn tool_part_bounding_box(&self, selection: ToolPartFlags) -> BoundingBox3d {
        let cutting = BoundingBox3d::revolved(self.radius, 0.0, self.length);
        self.mount
            .bounding_box(selection, cutting, BoundingBox3d::empty())
    }
}

impl Measurable for ChiselingTool {
    fn units(&self) -> Units {
        self.units
    }

    fn scale(&mut self, units: Units, factor: f64) {
        self.length *= factor;
        self.radius *= factor;
        self.tip_depth *= factor;
        self.cutting_width *= factor;
        self.mount.scale(units, factor);
        self.units = units;
    }
}

impl fmt::Display for ChiselingTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Chiseling Tool")?;
        write!(f, "\n  units: {}", self.units)?;
        write!(f, "\n  length: {}", self.length)?;
        write!(f, "\n  radius: {}", self.radius)?;
        write!(f, "\n  tip angle: {}", self.tip_angle)?;
        write!(f, "\n  tip depth: {}", self.tip_depth)?;
        write!(f, "\n  flank angle: {}", self.flank_angle)?;
        write!(f, "\n  cutting width: {}", self.cutting_width)?;
        write!(f, "{}", self.mount)
    }
}

/// Clearance geometry of an optic diamond tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ClearanceType {
    /// Cone opening at twice the clearance angle
    #[default]
    Conical,
    /// Cylinder rotated by the clearance angle
    Cylindrical,
}

/// Which side of the cutting curve an optic diamond tool keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RadiusType {
    /// Both sides
    #[default]
    Full,
    /// Left side only
    Left,
    /// Right side only
    Right,
}

impl fmt::Display for ClearanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conical => write!(f, "conical"),
            Self::Cylindrical => write!(f, "cylindrical"),
        }
    }
}

impl fmt::Display for RadiusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => write!(f, "full"),
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// Shape parameters of an optic diamond tool
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpticDiamondShape {
    /// Radius of the clearance geometry
    pub radius: f64,
    /// Included angle at the cutting curve
    pub included_angle: f64,
    /// Clearance geometry
    pub clearance_type: ClearanceType,
    /// Clearance angle
    pub clearance_angle: f64,
    /// Rake angle
    pub rake_angle: f64,
    /// Kept side of the cutting curve
    pub radius_type: RadiusType,
    /// Total length
    pub length: f64,
    /// Width
    pub width: f64,
    /// Total thickness
    pub thickness: f64,
}

/// Non-rotating tool for machining optical surfaces
///
/// The cutting edge is the intersection of the clearance geometry with a
/// rake plane.
#[derive(Debug, Clone, PartialEq)]
pub struct OpticDiamondTool {
    shape: OpticDiamondShape,
    mount: Mount,
    units: Units,
}

impl OpticDiamondTool {
    /// Create an optic diamond tool
    pub fn new(shape: OpticDiamondShape, mount: Mount, units: Units) -> Result<Self> {
        validate::positive("radius", shape.radius)?;
        validate::in_range("included_angle", shape.included_angle, 0.0, 180.0)?;
        validate::in_range("clearance_angle", shape.clearance_angle, 0.0, 89.0)?;
        validate::in_range("rake_angle", shape.rake_angle, -89.0, 89.0)?;
        validate::positive("length", shape.length)?;
        validate::positive("width", shape.width)?;
        validate::positive("thickness", shape.thickness)?;
        validate::at_most("2 * radius", 2.0 * shape.radius, "width", shape.width)?;
        Ok(Self {
            shape,
            mount: mount.into_units(units),
            units,
        })
    }

    /// Shape parameters
    pub fn shape(&self) -> &OpticDiamondShape {
        &self.shape
    }

    /// Holder and arbor
    pub fn mount(&self) -> &Mount {
        &self.mount
    }

    /// Union of the selected part boxes
    pub fn tool_part_bounding_box(&self, selection: ToolPartFlags) -> BoundingBox3d {
        let half = self.shape.width / 2.0;
        let (x_min, x_max) = match self.shape.radius_type {
            RadiusType::Full => (-half, half),
            RadiusType::Left => (-half, 0.0),
            RadiusType::Right => (0.0, half),
        };
        let cutting = plate_box(x_min, x_max, self.shape.thickness, self.shape.length);
        self.mount
            .bounding_box(selection, cutting, BoundingBox3d::empty())
    }
}

impl Measurable for OpticDiamondTool {
    fn units(&self) -> Units {
        self.units
    }

    fn scale(&mut self, units: Units, factor: f64) {
        self.shape.radius *= factor;
        self.shape.length *= factor;
        self.shape.width *= factor;
        self.shape.thickness *= factor;
        self.mount.scale(units, factor);
        self.units = units;
    }
}

impl fmt::Display for OpticDiamondTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.shape;
        write!(f, "Optic Diamond Tool")?;
        write!(f, "\n  units: {}", self.units)?;
        write!(f, "\n  radius: {}", s.radius)?;
        write!(f, "\n  included angle: {}", s.included_angle)?;
        write!(f, "\n  clearance type: {}", s.clearance_type)?;
        write!(f, "\n  clearance angle: {}", s.clearance_angle)?;
        write!(f, "\n  rake angle: {}", s.rake_angle)?;
        write!(f, "\n  radius type: {}", s.radius_type)?;
        write!(f, "\n  length: {}", s.length)?;
        write!(f, "\n  width: {}", s.width)?;
        write!(f, "\n  thickness: {}", s.thickness)?;
        write!(f, "{}", self.mount)
    }
}

/// Shape parameters of a speed shape tool
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedShape {
    /// Width
    pub width: f64,
    /// Total length
    pub length: f64,
    /// Corner radius
    pub corner_radius: f64,
    /// Length of the conic section
    pub conic_length: f64,
    /// Angle of the conic section
    pub conic_angle: f64,
    /// Ramp angle
    pub ramp_angle: f64,
    /// Arc radius
    pub arc_radius: f64,
    /// Depth
    pub depth: f64,
}

impl SpeedShape {
    fn validate(&self) -> Result<()> {
        validate::positive("width", self.width)?;
        validate::positive("length", self.length)?;
        validate::positive("depth", self.depth)?;
        validate::non_negative("corner_radius", self.corner_radius)?;
        validate::diameter_vs_corner_radius(self.width, self.corner_radius)?;
        validate::non_negative("conic_length", self.conic_length)?;
        validate::at_most("conic_length", self.conic_length, "length", self.length)?;
        validate::in_range("conic_angle", self.conic_angle, 0.0, 89.0)?;
        validate::in_range("ramp_angle", self.ramp_angle, 0.0, 89.0)?;
        validate::non_negative("arc_radius", self.arc_radius)
    }
}

/// Speed shape insert
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedShapeTool {
    shape: SpeedShape,
    mount: Mount,
    units: Units,
}

impl SpeedShapeTool {
    /// Create a speed shape tool
    pub fn new(shape: SpeedShape, mount: Mount, units: Units) -> Result<Self> {
        shape.validate()?;
        Ok(Self {
            shape,
            mount: mount.into_units(units),
            units,
        })
    }

    /// Shape parameters
    pub fn shape(&self) -> &SpeedShape {
        &self.shape
    }

    /// Holder and arbor
    pub fn mount(&self) -> &Mount {
        &self.mount
    }

    /// Apply `change` to the shape, keeping the old shape when the result is invalid
    pub fn update(&mut self, change: impl FnOnce(&mut SpeedShape)) -> Result<()> {
        let mut shape = self.shape;
        change(&mut shape);
        shape.validate()?;
        self.shape = shape;
        Ok(())
    }

    /// Set the width
    pub fn set_width(&mut self, width: f64) -> Result<()> {
        self.update(|s| s.width = width)
    }

    /// Set the length
    pub fn set_length(&mut self, length: f64) -> Result<()> {
        self.update(|s| s.length = length)
    }

    /// Set the corner radius
    pub fn set_corner_radius(&mut self, corner_radius: f64) -> Result<()> {
        self.update(|s| s.corner_radius = corner_radius)
    }

    /// Set the depth
    pub fn set_depth(&mut self, depth: f64) -> Result<()> {
        self.update(|s| s.depth = depth)
    }

    /// Set the conic length
    pub fn set_conic_length(&mut self, conic_length: f64) -> Result<()> {
        self.update(|s| s.conic_length = conic_length)
    }

    /// Set the conic angle
    pub fn set_conic_angle(&mut self, conic_angle: f64) -> Result<()> {
        self.update(|s| s.conic_angle = conic_angle)
    }

    /// Set the ramp angle
    pub fn set_ramp_angle(&mut self, ramp_angle: f64) -> Result<()> {
        self.update(|s| s.ramp_angle = ramp_angle)
    }

    /// Set the arc radius
    pub fn set_arc_radius(&mut self, arc_radius: f64) -> Result<()> {
        self.update(|s| s.arc_radius = arc_radius)
    }

    /// Union of the selected part boxes
    pub fn tool_part_bounding_box(&self, selection: ToolPartFlags) -> BoundingBox3d {
        let half = self.shape.width / 2.0;
        let cutting = plate_box(-half, half, self.shape.depth, self.shape.length);
        self.mount
            .bounding_box(selection, cutting, BoundingBox3d::empty())
    }
}

impl Measurable for SpeedShapeTool {
    fn units(&self) -> Units {
        self.units
    }

    fn scale(&mut self, units: Units, factor: f64) {
        let s = &mut self.shape;
        s.width *= factor;
        s.length *= factor;
        s.corner_radius *= factor;
        s.conic_length *= factor;
        s.arc_radius *= factor;
        s.depth *= factor;
        self.mount.scale(units, factor);
        self.units = units;
    }
}

impl fmt::Display for SpeedShapeTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.shape;
        write!(f, "Speed Shape Tool")?;
        write!(f, "\n  units: {}", self.units)?;
        write!(f, "\n  width: {}", s.width)?;
        write!(f, "\n  length: {}", s.length)?;
        write!(f, "\n  corner radius: {}", s.corner_radius)?;
        write!(f, "\n  conic length: {}", s.conic_length)?;
        write!(f, "\n  conic angle: {}", s.conic_angle)?;
        write!(f, "\n  ramp angle: {}", s.ramp_angle)?;
        write!(f, "\n  arc radius: {}", s.arc_radius)?;
        write!(f, "\n  depth: {}", s.depth)?;
        write!(f, "{}", self.mount)
    }
}

/// Tool made of arbitrary parts of any solid kind
///
/// Parts of each role are stacked in list order: cutting, non-cutting,
/// arbor, holder.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericTool {
    cutting: Vec<PartDefinition>,
    non_cutting: Vec<PartDefinition>,
    arbor: Vec<PartDefinition>,
    holder: Vec<PartDefinition>,
    units: Units,
}

impl GenericTool {
    /// Create a generic tool; every list must only hold parts of its role
    pub fn new(
        cutting: Vec<PartDefinition>,
        non_cutting: Vec<PartDefinition>,
        arbor: Vec<PartDefinition>,
        holder: Vec<PartDefinition>,
        units: Units,
    ) -> Result<Self> {
        for (name, role, parts) in [
            ("cutting", PartRole::Cutting, &cutting),
            ("non_cutting", PartRole::NonCutting, &non_cutting),
            ("arbor", PartRole::Arbor, &arbor),
            ("holder", PartRole::Holder, &holder),
        ] {
            if let Some(part) = parts.iter().find(|p| p.role() != role) {
                return Err(ToolError::invalid(
                    name,
                    0.0,
                    format!("expected {} parts, found a {} part", role, part.role()),
                )
                .into());
            }
        }
        let convert = |parts: Vec<PartDefinition>| -> Vec<PartDefinition> {
            parts.into_iter().map(|p| p.into_units(units)).collect()
        };
        Ok(Self {
            cutting: convert(cutting),
            non_cutting: convert(non_cutting),
            arbor: convert(arbor),
            holder: convert(holder),
            units,
        })
    }

    /// Cutting parts
    pub fn cutting_parts(&self) -> &[PartDefinition] {
        &self.cutting
    }

    /// Non-cutting parts
    pub fn non_cutting_parts(&self) -> &[PartDefinition] {
        &self.non_cutting
    }

    /// Arbor parts
    pub fn arbor_parts(&self) -> &[PartDefinition] {
        &self.arbor
    }

    /// Holder parts
    pub fn holder_parts(&self) -> &[PartDefinition] {
        &self.holder
    }

    fn parts(&self) -> impl Iterator<Item = &PartDefinition> {
        self.cutting
            .iter()
            .chain(&self.non_cutting)
            .chain(&self.arbor)
            .chain(&self.holder)
    }

    /// Union of the selected part boxes
    pub fn tool_part_bounding_box(&self, selection: ToolPartFlags) -> BoundingBox3d {
        let mut stack = PartStack::new(selection);
        for part in self.parts() {
            stack.push(part.role(), &part.bounding_box());
        }
        stack.bounding_box()
    }

    /// Largest X extent of the cutting parts
    pub fn tool_diameter(&self) -> f64 {
        self.cutting
            .iter()
            .map(|p| p.bounding_box().size_x())
            .fold(0.0, f64::max)
    }
}

impl Measurable for GenericTool {
    fn units(&self) -> Units {
        self.units
    }

    fn scale(&mut self, units: Units, factor: f64) {
        for part in self
            .cutting
            .iter_mut()
            .chain(&mut self.non_cutting)
            .chain(&mut self.arbor)
            .chain(&mut self.holder)
        {
            part.scale(units, factor);
        }
        self.units = units;
    }
}

impl fmt::Display for GenericTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Generic Tool")?;
        write!(f, "\n  units: {}", self.units)?;
        for part in self.parts() {
            write!(f, "\n  {}", part)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cutterkit_core::SolidDefinition;

    fn holder_mount() -> Mount {
        Mount::new(
            PartDefinition::holder_as_cylinder(30.0, 50.0, Units::Metric).unwrap(),
            PartDefinition::empty(PartRole::Arbor, Units::Metric),
        )
        .unwrap()
    }

    fn speed_shape() -> SpeedShape {
        SpeedShape {
            width: 10.0,
            length: 20.0,
            corner_radius: 1.0,
            conic_length: 5.0,
            conic_angle: 30.0,
            ramp_angle: 10.0,
            arc_radius: 2.0,
            depth: 3.0,
        }
    }

    #[test]
    fn test_chiseling_tool() {
        let tool = ChiselingTool::new(holder_mount(), 40.0, 5.0, 90.0, 2.0, 60.0, 4.0, Units::Metric).unwrap();
        assert!(!tool.is_tip_flat());
        let holder = tool.tool_part_bounding_box(ToolPartFlags::HOLDER);
        assert_eq!(holder.min().map(|p| p.z), Some(40.0));
        assert!(ChiselingTool::new(holder_mount(), 40.0, 5.0, 90.0, 2.0, 60.0, 11.0, Units::Metric).is_err());
    }

    #[test]
    fn test_optic_diamond_radius_type_halves_box() {
        let shape = OpticDiamondShape {
            radius: 2.0,
            included_angle: 60.0,
            clearance_type: ClearanceType::Cylindrical,
            clearance_angle: 7.0,
            rake_angle: 0.0,
            radius_type: RadiusType::Left,
            length: 25.0,
            width: 6.0,
            thickness: 2.0,
        };
        let tool = OpticDiamondTool::new(shape, holder_mount(), Units::Metric).unwrap();
        let bb = tool.tool_part_bounding_box(ToolPartFlags::CUTTING);
        assert_eq!(bb.size_x(), 3.0);
        assert_eq!(bb.max().map(|p| p.x), Some(0.0));
    }

    #[test]
    fn test_speed_shape_setters_revalidate() {
        let mut tool = SpeedShapeTool::new(speed_shape(), Mount::none(Units::Metric), Units::Metric).unwrap();
        assert!(tool.set_corner_radius(6.0).is_err());
        assert_eq!(tool.shape().corner_radius, 1.0);
        assert!(tool.set_conic_length(25.0).is_err());
        tool.set_width(12.0).unwrap();
        assert_eq!(tool.shape().width, 12.0);
    }

    #[test]
    fn test_generic_tool_roles() {
        let cutting = PartDefinition::cutting(
            SolidDefinition::extruded_rectangle(8.0, 10.0, 1.0).unwrap(),
            Units::Metric,
        );
        let holder = PartDefinition::holder_as_cylinder(30.0, 50.0, Units::Metric).unwrap();
        let tool = GenericTool::new(vec![cutting.clone()], vec![], vec![], vec![holder.clone()], Units::Metric)
            .unwrap();
        assert_eq!(tool.tool_diameter(), 8.0);
        assert_eq!(tool.tool_part_bounding_box(ToolPartFlags::ALL).size_z(), 60.0);
        assert!(GenericTool::new(vec![holder], vec![], vec![], vec![], Units::Metric).is_err());
    }

    #[test]
    fn test_parts_and_mount_take_tool_units() {
        let inch_holder = PartDefinition::holder_as_cylinder(1.0, 2.0, Units::Imperial).unwrap();
        let tool = GenericTool::new(vec![], vec![], vec![], vec![inch_holder.clone()], Units::Metric).unwrap();
        assert_eq!(tool.holder_parts()[0].units(), Units::Metric);
        assert!((tool.tool_part_bounding_box(ToolPartFlags::HOLDER).size_z() - 50.8).abs() < 1e-9);

        let mount = Mount::new(inch_holder, PartDefinition::empty(PartRole::Arbor, Units::Imperial)).unwrap();
        let tool = ChiselingTool::new(mount, 40.0, 5.0, 90.0, 2.0, 60.0, 4.0, Units::Metric).unwrap();
        assert_eq!(tool.mount().holder().units(), Units::Metric);
        assert!((tool.mount().holder().length() - 50.8).abs() < 1e-9);
    }
}

//! Tool part definitions
//!
//! A part is a solid playing one of four roles along the tool axis:
//! cutting at the tip, non-cutting shaft above it, then arbor, then holder.

use crate::error::{Result, ToolError};
use crate::geometry::{BoundingBox3d, ProfilePoint};
use crate::solid::{SolidDefinition, SolidKind};
use crate::units::{Measurable, Units};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// Role of a part within a tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartRole {
    /// Cutting part at the tool tip
    Cutting,
    /// Non-cutting shaft part
    NonCutting,
    /// Arbor between shaft and holder
    Arbor,
    /// Holder
    Holder,
}

impl PartRole {
    /// All roles in bottom-up stacking order
    pub fn all() -> &'static [PartRole] {
        &[
            PartRole::Cutting,
            PartRole::NonCutting,
            PartRole::Arbor,
            PartRole::Holder,
        ]
    }

    /// The selection flag for this role
    pub fn flag(&self) -> ToolPartFlags {
        match self {
            PartRole::Cutting => ToolPartFlags::CUTTING,
            PartRole::NonCutting => ToolPartFlags::NON_CUTTING,
            PartRole::Arbor => ToolPartFlags::ARBOR,
            PartRole::Holder => ToolPartFlags::HOLDER,
        }
    }
}

impl fmt::Display for PartRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cutting => write!(f, "cutting"),
            Self::NonCutting => write!(f, "non-cutting"),
            Self::Arbor => write!(f, "arbor"),
            Self::Holder => write!(f, "holder"),
        }
    }
}

/// Selection of tool part roles
///
/// Combine with `|`, e.g. `ToolPartFlags::CUTTING | ToolPartFlags::NON_CUTTING`
/// selects the shaft of a mill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ToolPartFlags(u8);

impl ToolPartFlags {
    /// Nothing selected
    pub const NONE: ToolPartFlags = ToolPartFlags(0);
    /// Cutting parts
    pub const CUTTING: ToolPartFlags = ToolPartFlags(1);
    /// Non-cutting parts
    pub const NON_CUTTING: ToolPartFlags = ToolPartFlags(2);
    /// Arbor
    pub const ARBOR: ToolPartFlags = ToolPartFlags(4);
    /// Holder
    pub const HOLDER: ToolPartFlags = ToolPartFlags(8);
    /// Everything below the holder
    pub const ALL_EXCLUDING_HOLDER: ToolPartFlags = ToolPartFlags(7);
    /// Every part
    pub const ALL: ToolPartFlags = ToolPartFlags(15);

    /// Raw bits
    pub fn bits(&self) -> u8 {
        self.0
    }

    /// Flags from raw bits; unknown bits are dropped
    pub fn from_bits_truncate(bits: u8) -> Self {
        ToolPartFlags(bits & Self::ALL.0)
    }

    /// Whether every flag in `other` is selected
    pub fn contains(&self, other: ToolPartFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether any flag in `other` is selected
    pub fn intersects(&self, other: ToolPartFlags) -> bool {
        self.0 & other.0 != 0
    }

    /// Whether the role is selected
    pub fn selects(&self, role: PartRole) -> bool {
        self.intersects(role.flag())
    }

    /// Whether nothing is selected
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl BitOr for ToolPartFlags {
    type Output = ToolPartFlags;

    fn bitor(self, rhs: ToolPartFlags) -> ToolPartFlags {
        ToolPartFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for ToolPartFlags {
    fn bitor_assign(&mut self, rhs: ToolPartFlags) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for ToolPartFlags {
    type Output = ToolPartFlags;

    fn bitand(self, rhs: ToolPartFlags) -> ToolPartFlags {
        ToolPartFlags(self.0 & rhs.0)
    }
}

impl fmt::Display for ToolPartFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        let names: Vec<String> = PartRole::all()
            .iter()
            .filter(|role| self.selects(**role))
            .map(|role| role.to_string())
            .collect();
        write!(f, "{}", names.join(" | "))
    }
}

/// A solid with a role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartDefinition {
    role: PartRole,
    solid: SolidDefinition,
    units: Units,
}

impl PartDefinition {
    /// Create a part with the given role
    pub fn new(role: PartRole, solid: SolidDefinition, units: Units) -> Self {
        Self { role, solid, units }
    }

    /// Part with no geometry
    pub fn empty(role: PartRole, units: Units) -> Self {
        Self::new(role, SolidDefinition::empty_revolved(), units)
    }

    /// Holder part
    pub fn holder(solid: SolidDefinition, units: Units) -> Self {
        Self::new(PartRole::Holder, solid, units)
    }

    /// Arbor part
    pub fn arbor(solid: SolidDefinition, units: Units) -> Self {
        Self::new(PartRole::Arbor, solid, units)
    }

    /// Cutting part
    pub fn cutting(solid: SolidDefinition, units: Units) -> Self {
        Self::new(PartRole::Cutting, solid, units)
    }

    /// Non-cutting part
    pub fn non_cutting(solid: SolidDefinition, units: Units) -> Self {
        Self::new(PartRole::NonCutting, solid, units)
    }

    /// Holder shaped as a cylinder
    pub fn holder_as_cylinder(diameter: f64, length: f64, units: Units) -> Result<Self> {
        Ok(Self::holder(SolidDefinition::revolved_cylinder(diameter, length)?, units))
    }

    /// Arbor shaped as a cylinder
    pub fn arbor_as_cylinder(diameter: f64, length: f64, units: Units) -> Result<Self> {
        Ok(Self::arbor(SolidDefinition::revolved_cylinder(diameter, length)?, units))
    }

    /// Holder shaped as a truncated cone
    pub fn holder_as_truncated_cone(
        bottom_diameter: f64,
        top_diameter: f64,
        length: f64,
        units: Units,
    ) -> Result<Self> {
        Ok(Self::holder(
            SolidDefinition::revolved_truncated_cone(bottom_diameter, top_diameter, length)?,
            units,
        ))
    }

    /// Arbor shaped as a truncated cone
    pub fn arbor_as_truncated_cone(
        bottom_diameter: f64,
        top_diameter: f64,
        length: f64,
        units: Units,
    ) -> Result<Self> {
        Ok(Self::arbor(
            SolidDefinition::revolved_truncated_cone(bottom_diameter, top_diameter, length)?,
            units,
        ))
    }

    /// Holder revolved from profile points
    pub fn holder_from_points(points: Vec<ProfilePoint>, units: Units) -> Result<Self> {
        Ok(Self::holder(SolidDefinition::revolved_from_points(points)?, units))
    }

    /// Arbor revolved from profile points
    pub fn arbor_from_points(points: Vec<ProfilePoint>, units: Units) -> Result<Self> {
        Ok(Self::arbor(SolidDefinition::revolved_from_points(points)?, units))
    }

    /// Non-cutting shaft revolved from profile points
    pub fn shaft_from_points(points: Vec<ProfilePoint>, units: Units) -> Result<Self> {
        Ok(Self::non_cutting(SolidDefinition::revolved_from_points(points)?, units))
    }

    /// Role of the part
    pub fn role(&self) -> PartRole {
        self.role
    }

    /// Underlying solid
    pub fn solid(&self) -> &SolidDefinition {
        &self.solid
    }

    /// Bounding box in the part's own frame
    pub fn bounding_box(&self) -> BoundingBox3d {
        self.solid.bounding_box()
    }

    /// Length along the tool axis
    pub fn length(&self) -> f64 {
        self.bounding_box().size_z()
    }

    /// Whether the part has no geometry
    pub fn is_empty(&self) -> bool {
        self.solid.is_empty()
    }

    /// Fail unless the part has `role` and a solid of one of `kinds`
    ///
    /// Empty parts pass the kind check.
    pub fn ensure(&self, name: &str, role: PartRole, kinds: &[SolidKind]) -> Result<()> {
        if self.role != role {
            return Err(ToolError::invalid(
                name,
                0.0,
                format!("expected a {} part, found a {} part", role, self.role),
            )
            .into());
        }
        if !self.is_empty() && !kinds.contains(&self.solid.kind()) {
            return Err(ToolError::invalid(
                name,
                0.0,
                format!("{} solids are not supported here", self.solid.kind()),
            )
            .into());
        }
        Ok(())
    }

    /// The part expressed in `units`, converted when its own units differ
    pub fn into_units(mut self, units: Units) -> Self {
        if self.units != units {
            self.set_units(units);
        }
        self
    }
}

impl Measurable for PartDefinition {
    fn units(&self) -> Units {
        self.units
    }

    fn scale(&mut self, units: Units, factor: f64) {
        self.solid.scale(factor);
        self.units = units;
    }
}

impl fmt::Display for PartDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} part, bounding box {}",
            self.role,
            self.solid.kind(),
            self.bounding_box()
        )
    }
}

/// A part together with its axial offset from the tool tip
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedPart {
    /// The part
    pub part: PartDefinition,
    /// Distance from the tool tip to the base of the part
    pub offset: f64,
}

impl PositionedPart {
    /// Bounding box of the part placed at its offset
    pub fn bounding_box(&self) -> BoundingBox3d {
        let bb = self.part.bounding_box();
        match bb.min() {
            None => bb,
            Some(min) => bb.translated(nalgebra::Vector3::new(0.0, 0.0, self.offset - min.z)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_values() {
        assert_eq!(ToolPartFlags::CUTTING.bits(), 1);
        assert_eq!(ToolPartFlags::NON_CUTTING.bits(), 2);
        assert_eq!(ToolPartFlags::ARBOR.bits(), 4);
        assert_eq!(ToolPartFlags::HOLDER.bits(), 8);
        assert_eq!(
            ToolPartFlags::CUTTING | ToolPartFlags::NON_CUTTING | ToolPartFlags::ARBOR,
            ToolPartFlags::ALL_EXCLUDING_HOLDER
        );
        assert_eq!(
            ToolPartFlags::ALL_EXCLUDING_HOLDER | ToolPartFlags::HOLDER,
            ToolPartFlags::ALL
        );
    }

    #[test]
    fn test_flag_queries() {
        let shaft = ToolPartFlags::CUTTING | ToolPartFlags::NON_CUTTING;
        assert!(shaft.selects(PartRole::Cutting));
        assert!(!shaft.selects(PartRole::Holder));
        assert!(ToolPartFlags::ALL.contains(shaft));
        assert!(!shaft.contains(ToolPartFlags::ALL));
        assert!(ToolPartFlags::NONE.is_empty());
        assert_eq!(ToolPartFlags::from_bits_truncate(0xff), ToolPartFlags::ALL);
        assert_eq!(shaft.to_string(), "cutting | non-cutting");
    }

    #[test]
    fn test_ensure_role_and_kind() {
        let holder = PartDefinition::holder_as_cylinder(40.0, 60.0, Units::Metric).unwrap();
        assert!(holder.ensure("holder", PartRole::Holder, &[SolidKind::Revolved]).is_ok());
        assert!(holder.ensure("arbor", PartRole::Arbor, &[SolidKind::Revolved]).is_err());
        assert!(holder.ensure("holder", PartRole::Holder, &[SolidKind::Extruded]).is_err());
        let empty = PartDefinition::empty(PartRole::Holder, Units::Metric);
        assert!(empty.ensure("holder", PartRole::Holder, &[SolidKind::Extruded]).is_ok());
    }

    #[test]
    fn test_scale_part() {
        let mut arbor = PartDefinition::arbor_as_cylinder(25.4, 50.8, Units::Metric).unwrap();
        arbor.set_units(Units::Imperial);
        assert!((arbor.length() - 2.0).abs() < 1e-12);
        assert_eq!(arbor.units(), Units::Imperial);
    }

    #[test]
    fn test_into_units() {
        let holder = PartDefinition::holder_as_cylinder(2.0, 4.0, Units::Imperial).unwrap();
        let metric = holder.clone().into_units(Units::Metric);
        assert_eq!(metric.units(), Units::Metric);
        assert!((metric.length() - 101.6).abs() < 1e-9);
        assert_eq!(holder.clone().into_units(Units::Imperial), holder);
    }

    #[test]
    fn test_positioned_part_box() {
        let part = PartDefinition::arbor_as_cylinder(20.0, 10.0, Units::Metric).unwrap();
        let positioned = PositionedPart { part, offset: 50.0 };
        let bb = positioned.bounding_box();
        assert_eq!(bb.min().map(|p| p.z), Some(50.0));
        assert_eq!(bb.max().map(|p| p.z), Some(60.0));
    }
}

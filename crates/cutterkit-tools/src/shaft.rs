//! Shaft geometry shared by every typed revolved tool
//!
//! A typed revolved tool is described by its diameter, flute length and
//! shoulder length plus a shaft model:
//! - a plain cylinder of the tool diameter,
//! - a shoulder definition (cylinder of its own diameter, optionally reached
//!   through a truncated cone from the end of the flutes),
//! - an explicit non-cutting profile.
//!
//! Cutting part sits at the tip (z = 0), the non-cutting shaft above it,
//! then arbor and holder.

use crate::mount::MOUNT_KINDS;
use crate::validate;
use cutterkit_core::{
    BoundingBox3d, Measurable, PartDefinition, PartRole, PartStack, Result, SolidKind, ToolError,
    ToolPartFlags, Units,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

const SHAFT_KINDS: &[SolidKind] = &[SolidKind::Revolved];

/// Shoulder extension of a typed tool
///
/// `base_length` is measured from the tool tip to the top of the shoulder;
/// the upper `cylinder_base` of it is a cylinder of `diameter`. When
/// `cylinder_base == base_length` the whole shoulder is a cylinder, otherwise
/// it is reached through a truncated cone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoulderDefinition {
    diameter: f64,
    base_length: f64,
    cylinder_base: f64,
    units: Units,
}

impl ShoulderDefinition {
    /// Pure cylinder shoulder
    pub fn new(diameter: f64, base_length: f64, units: Units) -> Result<Self> {
        Self::with_cylinder_base(diameter, base_length, base_length, units)
    }

    /// Cylinder capped shoulder reached through a cone
    pub fn with_cylinder_base(
        diameter: f64,
        base_length: f64,
        cylinder_base: f64,
        units: Units,
    ) -> Result<Self> {
        validate::positive("shoulder_diameter", diameter)?;
        validate::non_negative("base_length", base_length)?;
        validate::non_negative("cylinder_base", cylinder_base)?;
        validate::at_most("cylinder_base", cylinder_base, "base_length", base_length)?;
        Ok(Self {
            diameter,
            base_length,
            cylinder_base,
            units,
        })
    }

    /// Shoulder diameter
    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    /// Length from the tip to the top of the shoulder
    pub fn base_length(&self) -> f64 {
        self.base_length
    }

    /// Height of the cylindrical section
    pub fn cylinder_base(&self) -> f64 {
        self.cylinder_base
    }

    /// Whether the shoulder has no cone section
    pub fn is_cylinder(&self) -> bool {
        self.cylinder_base == self.base_length
    }

    /// Set the shoulder diameter
    pub fn set_diameter(&mut self, diameter: f64) -> Result<()> {
        validate::positive("shoulder_diameter", diameter)?;
        self.diameter = diameter;
        Ok(())
    }

    /// Set the base length
    pub fn set_base_length(&mut self, base_length: f64) -> Result<()> {
        validate::non_negative("base_length", base_length)?;
        validate::at_most("cylinder_base", self.cylinder_base, "base_length", base_length)?;
        self.base_length = base_length;
        Ok(())
    }

    /// Set the cylinder base
    pub fn set_cylinder_base(&mut self, cylinder_base: f64) -> Result<()> {
        validate::non_negative("cylinder_base", cylinder_base)?;
        validate::at_most("cylinder_base", cylinder_base, "base_length", self.base_length)?;
        self.cylinder_base = cylinder_base;
        Ok(())
    }
}

impl Measurable for ShoulderDefinition {
    fn units(&self) -> Units {
        self.units
    }

    fn scale(&mut self, units: Units, factor: f64) {
        self.diameter *= factor;
        self.base_length *= factor;
        self.cylinder_base *= factor;
        self.units = units;
    }
}

/// Shaft model kind, for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShaftType {
    /// Cylinder of the tool diameter
    Cylindrical,
    /// Shoulder definition
    CylindricalCone,
    /// Explicit profile
    ShaftProfile,
}

impl fmt::Display for ShaftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cylindrical => write!(f, "cylindrical"),
            Self::CylindricalCone => write!(f, "cylindrical cone"),
            Self::ShaftProfile => write!(f, "shaft profile"),
        }
    }
}

/// Shaft model with its data
#[derive(Debug, Clone, PartialEq)]
pub enum Shaft {
    /// Cylinder of the tool diameter up to the shoulder length
    Cylindrical,
    /// Shoulder definition
    CylindricalCone(ShoulderDefinition),
    /// Explicit non-cutting profile stacked on the flutes
    Profile(PartDefinition),
}

impl Shaft {
    /// Kind of this shaft
    pub fn shaft_type(&self) -> ShaftType {
        match self {
            Shaft::Cylindrical => ShaftType::Cylindrical,
            Shaft::CylindricalCone(_) => ShaftType::CylindricalCone,
            Shaft::Profile(_) => ShaftType::ShaftProfile,
        }
    }
}

/// Parameters common to every typed revolved tool
#[derive(Debug, Clone, PartialEq)]
pub struct ShaftGeometry {
    diameter: f64,
    flute_length: f64,
    shoulder_length: f64,
    shaft: Shaft,
    arbor: PartDefinition,
    holder: PartDefinition,
    units: Units,
}

impl ShaftGeometry {
    /// Tool with a cylindrical shaft
    pub fn new(
        diameter: f64,
        holder: PartDefinition,
        flute_length: f64,
        arbor: PartDefinition,
        shoulder_length: f64,
        units: Units,
    ) -> Result<Self> {
        let geometry = Self {
            diameter,
            flute_length,
            shoulder_length,
            shaft: Shaft::Cylindrical,
            arbor: arbor.into_units(units),
            holder: holder.into_units(units),
            units,
        };
        geometry.validate()?;
        Ok(geometry)
    }

    /// Cylindrical shaft without holder or arbor
    pub fn cylindrical(
        diameter: f64,
        flute_length: f64,
        shoulder_length: f64,
        units: Units,
    ) -> Result<Self> {
        Self::new(
            diameter,
            PartDefinition::empty(PartRole::Holder, units),
            flute_length,
            PartDefinition::empty(PartRole::Arbor, units),
            shoulder_length,
            units,
        )
    }

    /// Tool with a shoulder definition
    #[allow(clippy::too_many_arguments)]
    pub fn with_shoulder_definition(
        diameter: f64,
        holder: PartDefinition,
        flute_length: f64,
        arbor: PartDefinition,
        shoulder_length: f64,
        shoulder: ShoulderDefinition,
        units: Units,
    ) -> Result<Self> {
        let geometry = Self {
            diameter,
            flute_length,
            shoulder_length,
            shaft: Shaft::CylindricalCone(shoulder),
            arbor: arbor.into_units(units),
            holder: holder.into_units(units),
            units,
        };
        geometry.validate()?;
        Ok(geometry)
    }

    /// Tool with an explicit shaft profile
    ///
    /// The shoulder length becomes the flute length plus the profile length.
    pub fn with_shaft_profile(
        diameter: f64,
        holder: PartDefinition,
        flute_length: f64,
        arbor: PartDefinition,
        profile: PartDefinition,
        units: Units,
    ) -> Result<Self> {
        let profile = profile.into_units(units);
        let shoulder_length = flute_length + profile.length();
        let geometry = Self {
            diameter,
            flute_length,
            shoulder_length,
            shaft: Shaft::Profile(profile),
            arbor: arbor.into_units(units),
            holder: holder.into_units(units),
            units,
        };
        geometry.validate()?;
        Ok(geometry)
    }

    fn validate(&self) -> Result<()> {
        validate::positive("diameter", self.diameter)?;
        validate::non_negative("flute_length", self.flute_length)?;
        validate::non_negative("shoulder_length", self.shoulder_length)?;
        self.holder.ensure("holder", PartRole::Holder, MOUNT_KINDS)?;
        self.arbor.ensure("arbor", PartRole::Arbor, MOUNT_KINDS)?;
        match &self.shaft {
            Shaft::Cylindrical => {}
            Shaft::CylindricalCone(shoulder) => {
                validate::at_most(
                    "flute_length",
                    self.flute_length,
                    "base_length",
                    shoulder.base_length(),
                )?;
            }
            Shaft::Profile(profile) => {
                profile.ensure("shaft_profile", PartRole::NonCutting, SHAFT_KINDS)?;
            }
        }
        Ok(())
    }

    /// Tool diameter
    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    /// Flute length
    pub fn flute_length(&self) -> f64 {
        self.flute_length
    }

    /// Shoulder length
    pub fn shoulder_length(&self) -> f64 {
        self.shoulder_length
    }

    /// Arbor part
    pub fn arbor(&self) -> &PartDefinition {
        &self.arbor
    }

    /// Holder part
    pub fn holder(&self) -> &PartDefinition {
        &self.holder
    }

    /// Shaft model
    pub fn shaft(&self) -> &Shaft {
        &self.shaft
    }

    /// Shaft model kind
    pub fn shaft_type(&self) -> ShaftType {
        self.shaft.shaft_type()
    }

    /// Shoulder definition, if the shaft has one
    pub fn shoulder_definition(&self) -> Option<&ShoulderDefinition> {
        match &self.shaft {
            Shaft::CylindricalCone(shoulder) => Some(shoulder),
            _ => None,
        }
    }

    /// Shaft profile, if the shaft has one
    pub fn shaft_profile(&self) -> Option<&PartDefinition> {
        match &self.shaft {
            Shaft::Profile(profile) => Some(profile),
            _ => None,
        }
    }

    /// Whether the shoulder is anything other than a plain cylinder
    pub fn has_advanced_shoulder_definition(&self) -> bool {
        !matches!(self.shaft, Shaft::Cylindrical)
    }

    /// Change the base length of the shoulder definition
    pub fn set_base_length(&mut self, base_length: f64) -> Result<()> {
        let flute_length = self.flute_length;
        match &mut self.shaft {
            Shaft::CylindricalCone(shoulder) => {
                validate::at_most("flute_length", flute_length, "base_length", base_length)?;
                shoulder.set_base_length(base_length)
            }
            _ => Err(ToolError::invalid(
                "base_length",
                base_length,
                "tool has no shoulder definition",
            )
            .into()),
        }
    }

    /// Cylinder of the tool diameter over the flute length
    pub fn cylinder_cutting_box(&self) -> BoundingBox3d {
        BoundingBox3d::revolved(self.diameter / 2.0, 0.0, self.flute_length)
    }

    /// Box of the non-cutting shaft in its own frame (base at z = 0)
    pub fn non_cutting_box(&self) -> BoundingBox3d {
        match &self.shaft {
            Shaft::Cylindrical => {
                let height = self.shoulder_length - self.flute_length;
                if height <= 0.0 {
                    return BoundingBox3d::empty();
                }
                BoundingBox3d::revolved(self.diameter / 2.0, 0.0, height)
            }
            Shaft::CylindricalCone(shoulder) => {
                let height = self.shoulder_length.max(shoulder.base_length()) - self.flute_length;
                if height <= 0.0 {
                    return BoundingBox3d::empty();
                }
                let radius = self.diameter.max(shoulder.diameter()) / 2.0;
                BoundingBox3d::revolved(radius, 0.0, height)
            }
            Shaft::Profile(profile) => profile.bounding_box(),
        }
    }

    /// Stack cutting, non-cutting, arbor and holder and return the selected box
    pub fn part_bounding_box(
        &self,
        selection: ToolPartFlags,
        cutting_box: BoundingBox3d,
        non_cutting_box: BoundingBox3d,
    ) -> BoundingBox3d {
        let mut stack = PartStack::new(selection);
        stack.push(PartRole::Cutting, &cutting_box);
        stack.push(PartRole::NonCutting, &non_cutting_box);
        stack.push(PartRole::Arbor, &self.arbor.bounding_box());
        stack.push(PartRole::Holder, &self.holder.bounding_box());
        debug!(
            selection = %selection,
            top = stack.top(),
            "stacked typed revolved tool parts"
        );
        stack.bounding_box()
    }
}

impl Measurable for ShaftGeometry {
    fn units(&self) -> Units {
        self.units
    }

    fn scale(&mut self, units: Units, factor: f64) {
        self.diameter *= factor;
        self.flute_length *= factor;
        self.shoulder_length *= factor;
        match &mut self.shaft {
            Shaft::Cylindrical => {}
            Shaft::CylindricalCone(shoulder) => shoulder.scale(units, factor),
            Shaft::Profile(profile) => profile.scale(units, factor),
        }
        self.arbor.scale(units, factor);
        self.holder.scale(units, factor);
        self.units = units;
    }
}

impl fmt::Display for ShaftGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  units: {}", self.units)?;
        writeln!(f, "  diameter: {}", self.diameter)?;
        writeln!(f, "  flute length: {}", self.flute_length)?;
        writeln!(f, "  shoulder length: {}", self.shoulder_length)?;
        writeln!(f, "  shaft type: {}", self.shaft_type())?;
        match &self.shaft {
            Shaft::Cylindrical => {}
            Shaft::CylindricalCone(shoulder) => {
                writeln!(f, "  shoulder diameter: {}", shoulder.diameter())?;
                writeln!(f, "  shoulder base length: {}", shoulder.base_length())?;
                writeln!(f, "  shoulder cylinder base: {}", shoulder.cylinder_base())?;
            }
            Shaft::Profile(profile) => writeln!(f, "  shaft profile: {}", profile)?,
        }
        writeln!(f, "  arbor: {}", self.arbor)?;
        write!(f, "  holder: {}", self.holder)
    }
}

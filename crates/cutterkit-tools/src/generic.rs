//! Tools described by an explicit list of parts
//!
//! A generic tool is a stack of shaft parts (cutting and non-cutting, from
//! the tip upwards) with at most one arbor and one holder on top. Each
//! family restricts which solid kinds its parts may use.

use crate::mount::MOUNT_KINDS;
use cutterkit_core::{
    BoundingBox3d, Measurable, PartDefinition, PartRole, PartStack, PositionedPart, Result,
    SolidKind, ToolError, ToolPartFlags, Units,
};
use std::fmt;
use tracing::debug;

/// Solid kinds accepted per role
#[derive(Debug, Clone, Copy)]
struct PartRules {
    cutting: &'static [SolidKind],
    non_cutting: &'static [SolidKind],
    mount: &'static [SolidKind],
}

impl PartRules {
    fn kinds(&self, role: PartRole) -> &'static [SolidKind] {
        match role {
            PartRole::Cutting => self.cutting,
            PartRole::NonCutting => self.non_cutting,
            PartRole::Arbor | PartRole::Holder => self.mount,
        }
    }

    fn check(&self, name: &str, part: &PartDefinition) -> Result<()> {
        part.ensure(name, part.role(), self.kinds(part.role()))
    }
}

const REVOLVED_RULES: PartRules = PartRules {
    cutting: &[SolidKind::Revolved],
    non_cutting: &[SolidKind::Revolved],
    mount: MOUNT_KINDS,
};

const EXTRUDED_RULES: PartRules = PartRules {
    cutting: &[SolidKind::Extruded],
    non_cutting: &[SolidKind::Revolved, SolidKind::Extruded],
    mount: MOUNT_KINDS,
};

/// Parts of a generic tool in stacking order
#[derive(Debug, Clone, PartialEq)]
pub struct PartComposition {
    holder: Option<PartDefinition>,
    arbor: Option<PartDefinition>,
    shaft: Vec<PartDefinition>,
    legacy: bool,
    tag: String,
    units: Units,
}

impl PartComposition {
    /// Composition with no parts
    pub fn new(units: Units) -> Self {
        Self {
            holder: None,
            arbor: None,
            shaft: Vec::new(),
            legacy: false,
            tag: String::new(),
            units,
        }
    }

    fn from_parts(parts: Vec<PartDefinition>, units: Units, rules: PartRules) -> Result<Self> {
        let mut composition = Self::new(units);
        for part in parts {
            rules.check("part", &part)?;
            let part = part.into_units(units);
            match part.role() {
                PartRole::Holder => {
                    if composition.holder.is_some() {
                        return Err(ToolError::invalid(
                            "holder",
                            2.0,
                            "a tool can have at most one holder",
                        )
                        .into());
                    }
                    composition.holder = Some(part);
                }
                PartRole::Arbor => {
                    if composition.arbor.is_some() {
                        return Err(ToolError::invalid(
                            "arbor",
                            2.0,
                            "a tool can have at most one arbor",
                        )
                        .into());
                    }
                    composition.arbor = Some(part);
                }
                PartRole::Cutting | PartRole::NonCutting => composition.shaft.push(part),
            }
        }
        Ok(composition)
    }

    fn from_shaft_parts(
        holder: PartDefinition,
        arbor: PartDefinition,
        shaft: Vec<PartDefinition>,
        units: Units,
        rules: PartRules,
    ) -> Result<Self> {
        holder.ensure("holder", PartRole::Holder, rules.mount)?;
        arbor.ensure("arbor", PartRole::Arbor, rules.mount)?;
        for part in &shaft {
            if !matches!(part.role(), PartRole::Cutting | PartRole::NonCutting) {
                return Err(ToolError::invalid(
                    "shaft_parts",
                    0.0,
                    format!("shaft parts must be cutting or non-cutting, found {}", part.role()),
                )
                .into());
            }
            rules.check("shaft_parts", part)?;
        }
        Ok(Self {
            holder: (!holder.is_empty()).then(|| holder.into_units(units)),
            arbor: (!arbor.is_empty()).then(|| arbor.into_units(units)),
            shaft: shaft.into_iter().map(|p| p.into_units(units)).collect(),
            legacy: false,
            tag: String::new(),
            units,
        })
    }

    fn from_legacy(
        holder: PartDefinition,
        arbor: PartDefinition,
        non_cutting: PartDefinition,
        cutting: PartDefinition,
        units: Units,
        rules: PartRules,
    ) -> Result<Self> {
        non_cutting.ensure("non_cutting", PartRole::NonCutting, rules.non_cutting)?;
        cutting.ensure("cutting", PartRole::Cutting, rules.cutting)?;
        let mut composition =
            Self::from_shaft_parts(holder, arbor, vec![cutting, non_cutting], units, rules)?;
        composition.legacy = true;
        Ok(composition)
    }

    /// Holder, if any
    pub fn holder(&self) -> Option<&PartDefinition> {
        self.holder.as_ref()
    }

    /// Arbor, if any
    pub fn arbor(&self) -> Option<&PartDefinition> {
        self.arbor.as_ref()
    }

    /// Cutting and non-cutting parts from the tip upwards
    pub fn shaft_parts(&self) -> &[PartDefinition] {
        &self.shaft
    }

    /// Every part from the tip upwards
    pub fn tool_parts(&self) -> Vec<&PartDefinition> {
        self.shaft
            .iter()
            .chain(self.arbor.iter())
            .chain(self.holder.iter())
            .collect()
    }

    /// Whether the tool was built from the fixed four-part layout
    pub fn is_legacy(&self) -> bool {
        self.legacy
    }

    /// Opaque user tag
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Set the opaque user tag
    pub fn set_tag(&mut self, tag: impl Into<String>) {
        self.tag = tag.into();
    }

    /// Every part placed at its offset from the tip
    pub fn positioned_parts(&self) -> Vec<PositionedPart> {
        let mut stack = PartStack::new(ToolPartFlags::ALL);
        self.tool_parts()
            .into_iter()
            .map(|part| {
                let offset = stack.push(part.role(), &part.bounding_box());
                PositionedPart {
                    part: part.clone(),
                    offset,
                }
            })
            .collect()
    }

    fn positioned_with(&self, selection: ToolPartFlags) -> Vec<PositionedPart> {
        self.positioned_parts()
            .into_iter()
            .filter(|p| selection.selects(p.part.role()))
            .collect()
    }

    /// Cutting parts at their offsets
    pub fn positioned_cutting_parts(&self) -> Vec<PositionedPart> {
        self.positioned_with(ToolPartFlags::CUTTING)
    }

    /// Non-cutting parts at their offsets
    pub fn positioned_non_cutting_parts(&self) -> Vec<PositionedPart> {
        self.positioned_with(ToolPartFlags::NON_CUTTING)
    }

    /// Shaft parts at their offsets
    pub fn positioned_shaft_parts(&self) -> Vec<PositionedPart> {
        self.positioned_with(ToolPartFlags::CUTTING | ToolPartFlags::NON_CUTTING)
    }

    /// Arbor at its offset
    pub fn positioned_arbor_parts(&self) -> Vec<PositionedPart> {
        self.positioned_with(ToolPartFlags::ARBOR)
    }

    /// Holder at its offset
    pub fn positioned_holder_parts(&self) -> Vec<PositionedPart> {
        self.positioned_with(ToolPartFlags::HOLDER)
    }

    /// Union of the selected part boxes, each placed on the parts below it
    pub fn tool_part_bounding_box(&self, selection: ToolPartFlags) -> BoundingBox3d {
        let mut stack = PartStack::new(selection);
        for part in self.tool_parts() {
            stack.push(part.role(), &part.bounding_box());
        }
        stack.bounding_box()
    }

    /// Largest X extent of the cutting parts
    pub fn tool_diameter(&self) -> f64 {
        self.shaft
            .iter()
            .filter(|p| p.role() == PartRole::Cutting)
            .map(|p| p.bounding_box().size_x())
            .fold(0.0, f64::max)
    }

    /// Axial extent of the shaft parts
    pub fn shaft_length(&self) -> f64 {
        self.tool_part_bounding_box(ToolPartFlags::CUTTING | ToolPartFlags::NON_CUTTING)
            .size_z()
    }
}

impl Measurable for PartComposition {
    fn units(&self) -> Units {
        self.units
    }

    fn scale(&mut self, units: Units, factor: f64) {
        for part in self
            .shaft
            .iter_mut()
            .chain(self.arbor.iter_mut())
            .chain(self.holder.iter_mut())
        {
            part.scale(units, factor);
        }
        self.units = units;
    }
}

impl fmt::Display for PartComposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  units: {}", self.units)?;
        write!(f, "\n  legacy: {}", self.legacy)?;
        if !self.tag.is_empty() {
            write!(f, "\n  tag: {}", self.tag)?;
        }
        for positioned in self.positioned_parts() {
            write!(f, "\n  at {}: {}", positioned.offset, positioned.part)?;
        }
        Ok(())
    }
}

macro_rules! generic_tool {
    ($(#[$meta:meta])* $name:ident, $tool_type:expr, $rules:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            parts: PartComposition,
        }

        impl $name {
            /// Tool with no parts
            pub fn new(units: Units) -> Self {
                Self {
                    parts: PartComposition::new(units),
                }
            }

            /// Tool from a flat part list
            ///
            /// Fails when the list holds more than one holder or arbor.
            pub fn from_parts(parts: Vec<PartDefinition>, units: Units) -> Result<Self> {
                let parts = PartComposition::from_parts(parts, units, $rules)?;
                debug!(tool_type = %$tool_type, parts = parts.tool_parts().len(), "created generic tool");
                Ok(Self { parts })
            }

            /// Tool from holder, arbor and shaft parts listed from the tip upwards
            ///
            /// Empty holder or arbor parts are dropped.
            pub fn from_shaft_parts(
                holder: PartDefinition,
                arbor: PartDefinition,
                shaft_parts: Vec<PartDefinition>,
                units: Units,
            ) -> Result<Self> {
                Ok(Self {
                    parts: PartComposition::from_shaft_parts(holder, arbor, shaft_parts, units, $rules)?,
                })
            }

            /// Tool from the fixed holder, arbor, non-cutting and cutting layout
            pub fn from_legacy(
                holder: PartDefinition,
                arbor: PartDefinition,
                non_cutting: PartDefinition,
                cutting: PartDefinition,
                units: Units,
            ) -> Result<Self> {
                Ok(Self {
                    parts: PartComposition::from_legacy(holder, arbor, non_cutting, cutting, units, $rules)?,
                })
            }

            /// Part composition
            pub fn parts(&self) -> &PartComposition {
                &self.parts
            }

            /// Mutable part composition
            pub fn parts_mut(&mut self) -> &mut PartComposition {
                &mut self.parts
            }

            /// Union of the selected part boxes
            pub fn tool_part_bounding_box(&self, selection: ToolPartFlags) -> BoundingBox3d {
                self.parts.tool_part_bounding_box(selection)
            }

            /// Largest X extent of the cutting parts
            pub fn tool_diameter(&self) -> f64 {
                self.parts.tool_diameter()
            }
        }

        impl Measurable for $name {
            fn units(&self) -> Units {
                self.parts.units()
            }

            fn scale(&mut self, units: Units, factor: f64) {
                self.parts.scale(units, factor);
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}\n{}", $tool_type, self.parts)
            }
        }
    };
}

generic_tool!(
    /// Revolved tool built from revolved parts
    GenericRevolvedTool,
    crate::types::ToolType::GenericRevolved,
    REVOLVED_RULES
);

generic_tool!(
    /// Extruded tool: extruded cutting parts on a revolved mount
    GenericExtrudedTool,
    crate::types::ToolType::GenericExtruded,
    EXTRUDED_RULES
);

generic_tool!(
    /// Saw built from an extruded blade on a revolved mount
    GenericSawingTool,
    crate::types::ToolType::GenericSawing,
    EXTRUDED_RULES
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mount::Mount;
    use cutterkit_core::SolidDefinition;

    fn cutting(diameter: f64, length: f64) -> PartDefinition {
        PartDefinition::cutting(
            SolidDefinition::revolved_cylinder(diameter, length).unwrap(),
            Units::Metric,
        )
    }

    fn non_cutting(diameter: f64, length: f64) -> PartDefinition {
        PartDefinition::non_cutting(
            SolidDefinition::revolved_cylinder(diameter, length).unwrap(),
            Units::Metric,
        )
    }

    fn holder() -> PartDefinition {
        PartDefinition::holder_as_cylinder(40.0, 60.0, Units::Metric).unwrap()
    }

    fn arbor() -> PartDefinition {
        PartDefinition::arbor_as_cylinder(16.0, 20.0, Units::Metric).unwrap()
    }

    #[test]
    fn test_positioned_parts_stack_from_the_tip() {
        let tool = GenericRevolvedTool::from_shaft_parts(
            holder(),
            arbor(),
            vec![cutting(10.0, 20.0), cutting(12.0, 5.0), non_cutting(10.0, 25.0)],
            Units::Metric,
        )
        .unwrap();
        let cutting: Vec<f64> = tool
            .parts()
            .positioned_cutting_parts()
            .iter()
            .map(|p| p.offset)
            .collect();
        assert_eq!(cutting, vec![0.0, 20.0]);
        assert_eq!(tool.parts().positioned_non_cutting_parts()[0].offset, 25.0);
        assert_eq!(tool.parts().positioned_arbor_parts()[0].offset, 50.0);
        assert_eq!(tool.parts().positioned_holder_parts()[0].offset, 70.0);
        assert_eq!(tool.tool_diameter(), 12.0);
        assert_eq!(tool.parts().shaft_length(), 50.0);
    }

    #[test]
    fn test_from_parts_rejects_second_holder() {
        let err = GenericRevolvedTool::from_parts(
            vec![cutting(10.0, 20.0), holder(), holder()],
            Units::Metric,
        )
        .unwrap_err();
        assert!(err.is_invalid_parameter());
        let err = GenericRevolvedTool::from_parts(vec![arbor(), arbor()], Units::Metric).unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn test_from_parts_sorts_roles() {
        let tool = GenericRevolvedTool::from_parts(
            vec![holder(), cutting(10.0, 20.0), arbor()],
            Units::Metric,
        )
        .unwrap();
        assert_eq!(tool.parts().shaft_parts().len(), 1);
        assert!(tool.parts().holder().is_some());
        assert!(tool.parts().arbor().is_some());
        assert_eq!(tool.parts().tool_parts().len(), 3);
        assert!(!tool.parts().is_legacy());
    }

    #[test]
    fn test_legacy_layout() {
        let tool = GenericRevolvedTool::from_legacy(
            holder(),
            PartDefinition::empty(PartRole::Arbor, Units::Metric),
            non_cutting(10.0, 30.0),
            cutting(10.0, 20.0),
            Units::Metric,
        )
        .unwrap();
        assert!(tool.parts().is_legacy());
        assert!(tool.parts().arbor().is_none());
        let bb = tool.tool_part_bounding_box(ToolPartFlags::HOLDER);
        assert_eq!(bb.min().map(|p| p.z), Some(50.0));
    }

    #[test]
    fn test_extruded_cutting_parts_required() {
        let blade = PartDefinition::cutting(
            SolidDefinition::extruded_rectangle(100.0, 10.0, 2.0).unwrap(),
            Units::Metric,
        );
        assert!(GenericSawingTool::from_parts(vec![blade.clone(), arbor()], Units::Metric).is_ok());
        assert!(GenericExtrudedTool::from_parts(vec![cutting(10.0, 20.0)], Units::Metric).is_err());
        assert!(GenericRevolvedTool::from_parts(vec![blade], Units::Metric).is_err());
    }

    #[test]
    fn test_mesh_mount_rejected() {
        let mesh = SolidDefinition::mesh_from_vertices(vec![
            nalgebra::Point3::new(-20.0, -20.0, 0.0),
            nalgebra::Point3::new(20.0, 20.0, 60.0),
        ])
        .unwrap();
        let holder = PartDefinition::holder(mesh, Units::Metric);
        let err = GenericRevolvedTool::from_parts(vec![cutting(10.0, 20.0), holder.clone()], Units::Metric)
            .unwrap_err();
        assert!(err.is_invalid_parameter());
        assert!(Mount::new(holder, PartDefinition::empty(PartRole::Arbor, Units::Metric)).is_err());
    }

    #[test]
    fn test_parts_take_tool_units() {
        let inch_cutter = PartDefinition::cutting(
            SolidDefinition::revolved_cylinder(0.5, 1.0).unwrap(),
            Units::Imperial,
        );
        let inch_holder = PartDefinition::holder_as_cylinder(1.0, 2.0, Units::Imperial).unwrap();
        let tool = GenericRevolvedTool::from_parts(vec![inch_cutter.clone(), inch_holder.clone()], Units::Metric)
            .unwrap();
        assert!(tool.parts().tool_parts().iter().all(|p| p.units() == Units::Metric));
        assert!((tool.tool_diameter() - 12.7).abs() < 1e-9);
        assert!((tool.tool_part_bounding_box(ToolPartFlags::ALL).size_z() - 76.2).abs() < 1e-9);

        let tool = GenericRevolvedTool::from_shaft_parts(
            inch_holder,
            PartDefinition::empty(PartRole::Arbor, Units::Imperial),
            vec![inch_cutter],
            Units::Metric,
        )
        .unwrap();
        assert_eq!(tool.parts().holder().map(|h| h.units()), Some(Units::Metric));
        assert!((tool.parts().shaft_length() - 25.4).abs() < 1e-9);
    }

    #[test]
    fn test_tag_and_scale() {
        let mut tool =
            GenericRevolvedTool::from_parts(vec![cutting(10.0, 20.0)], Units::Metric).unwrap();
        tool.parts_mut().set_tag("T12");
        assert_eq!(tool.parts().tag(), "T12");
        tool.scale(Units::Imperial, 0.5);
        assert_eq!(tool.units(), Units::Imperial);
        assert_eq!(tool.tool_diameter(), 5.0);
        assert!(tool.to_string().contains("tag: T12"));
    }
}

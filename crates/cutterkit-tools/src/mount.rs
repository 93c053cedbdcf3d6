//! Holder and arbor carried by non-revolved typed tools

use cutterkit_core::{
    BoundingBox3d, Measurable, PartDefinition, PartRole, PartStack, Result, SolidKind,
    ToolPartFlags, Units,
};
use std::fmt;

/// Solid kinds accepted for holders and arbors of every tool family
pub(crate) const MOUNT_KINDS: &[SolidKind] = &[SolidKind::Revolved];

/// Holder and arbor of a tool
#[derive(Debug, Clone, PartialEq)]
pub struct Mount {
    holder: PartDefinition,
    arbor: PartDefinition,
}

impl Mount {
    /// Mount from a holder and an arbor; either may be empty
    pub fn new(holder: PartDefinition, arbor: PartDefinition) -> Result<Self> {
        holder.ensure("holder", PartRole::Holder, MOUNT_KINDS)?;
        arbor.ensure("arbor", PartRole::Arbor, MOUNT_KINDS)?;
        Ok(Self { holder, arbor })
    }

    /// Mount without holder or arbor
    pub fn none(units: Units) -> Self {
        Self {
            holder: PartDefinition::empty(PartRole::Holder, units),
            arbor: PartDefinition::empty(PartRole::Arbor, units),
        }
    }

    /// Holder part
    pub fn holder(&self) -> &PartDefinition {
        &self.holder
    }

    /// Arbor part
    pub fn arbor(&self) -> &PartDefinition {
        &self.arbor
    }

    /// Stack cutting and non-cutting boxes under the arbor and holder
    pub fn bounding_box(
        &self,
        selection: ToolPartFlags,
        cutting: BoundingBox3d,
        non_cutting: BoundingBox3d,
    ) -> BoundingBox3d {
        let mut stack = PartStack::new(selection);
        stack.push(PartRole::Cutting, &cutting);
        stack.push(PartRole::NonCutting, &non_cutting);
        stack.push(PartRole::Arbor, &self.arbor.bounding_box());
        stack.push(PartRole::Holder, &self.holder.bounding_box());
        stack.bounding_box()
    }

    /// Mount expressed in the units of the tool carrying it
    pub(crate) fn into_units(self, units: Units) -> Self {
        Self {
            holder: self.holder.into_units(units),
            arbor: self.arbor.into_units(units),
        }
    }

    pub(crate) fn scale(&mut self, units: Units, factor: f64) {
        self.holder.scale(units, factor);
        self.arbor.scale(units, factor);
    }
}

impl fmt::Display for Mount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n  arbor: {}\n  holder: {}", self.arbor, self.holder)
    }
}

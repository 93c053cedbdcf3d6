//! Wire tool (wire EDM and laser cutting)

use crate::validate;
use cutterkit_core::{BoundingBox3d, Measurable, Result, ToolPartFlags, Units};
use std::fmt;

/// A wire of given diameter and length
///
/// A wire has no holder or arbor. `infinite_length` is set for wire EDM,
/// cleared for laser cutting where the length is meaningful.
#[derive(Debug, Clone, PartialEq)]
pub struct WireTool {
    wire_diameter: f64,
    wire_length: f64,
    infinite_length: bool,
    units: Units,
}

impl WireTool {
    /// Create a wire tool
    pub fn new(
        wire_diameter: f64,
        wire_length: f64,
        infinite_length: bool,
        units: Units,
    ) -> Result<Self> {
        validate::positive("wire_diameter", wire_diameter)?;
        validate::positive("wire_length", wire_length)?;
        Ok(Self {
            wire_diameter,
            wire_length,
            infinite_length,
            units,
        })
    }

    /// Wire diameter
    pub fn wire_diameter(&self) -> f64 {
        self.wire_diameter
    }

    /// Wire length
    pub fn wire_length(&self) -> f64 {
        self.wire_length
    }

    /// Whether the wire is treated as endless
    pub fn has_infinite_length(&self) -> bool {
        self.infinite_length
    }

    /// The wire is its only part and it cuts
    pub fn tool_part_bounding_box(&self, selection: ToolPartFlags) -> BoundingBox3d {
        if selection.contains(ToolPartFlags::CUTTING) {
            BoundingBox3d::revolved(self.wire_diameter / 2.0, 0.0, self.wire_length)
        } else {
            BoundingBox3d::empty()
        }
    }
}

impl Default for WireTool {
    fn default() -> Self {
        Self {
            wire_diameter: 0.05,
            wire_length: 100.0,
            infinite_length: true,
            units: Units::Metric,
        }
    }
}

impl Measurable for WireTool {
    fn units(&self) -> Units {
        self.units
    }

    fn scale(&mut self, units: Units, factor: f64) {
        self.wire_diameter *= factor;
        self.wire_length *= factor;
        self.units = units;
    }
}

impl fmt::Display for WireTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Wire Tool")?;
        write!(f, "\n  units: {}", self.units)?;
        write!(f, "\n  wire diameter: {}", self.wire_diameter)?;
        write!(f, "\n  wire length: {}", self.wire_length)?;
        write!(f, "\n  infinite length: {}", self.infinite_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let wire = WireTool::default();
        assert_eq!(wire.wire_diameter(), 0.05);
        assert_eq!(wire.wire_length(), 100.0);
        assert!(wire.has_infinite_length());
    }

    #[test]
    fn test_validation() {
        assert!(WireTool::new(0.0, 100.0, true, Units::Metric).is_err());
        assert!(WireTool::new(0.1, -1.0, false, Units::Metric).is_err());
    }

    #[test]
    fn test_only_cutting_part() {
        let wire = WireTool::new(0.2, 50.0, false, Units::Metric).unwrap();
        assert_eq!(wire.tool_part_bounding_box(ToolPartFlags::ALL).size_z(), 50.0);
        assert!(wire.tool_part_bounding_box(ToolPartFlags::HOLDER).is_empty());
    }
}

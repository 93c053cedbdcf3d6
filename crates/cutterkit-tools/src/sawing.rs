//! Chain saw

use crate::mount::Mount;
use crate::validate;
use cutterkit_core::{BoundingBox3d, Measurable, Result, ToolPartFlags, Units};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Blade outline of a chain saw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChainSawType {
    /// Straight blade
    #[default]
    Straight,
    /// Simple blade, widening towards the top
    Simple,
}

impl fmt::Display for ChainSawType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Straight => write!(f, "straight"),
            Self::Simple => write!(f, "simple"),
        }
    }
}

/// Blade dimensions of a chain saw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainSawBlade {
    /// Total blade length
    pub length: f64,
    /// Straight part of the blade length
    pub straight_length: f64,
    /// Width at the blade tip
    pub width: f64,
    /// Width at the top of the blade
    pub upper_width: f64,
    /// Blade thickness
    pub thickness: f64,
    /// Corner radius at the blade tip
    pub corner_radius: f64,
}

/// Chain saw
#[derive(Debug, Clone, PartialEq)]
pub struct ChainSawTool {
    blade: ChainSawBlade,
    chain_saw_type: ChainSawType,
    mount: Mount,
    units: Units,
}

impl ChainSawTool {
    /// Create a chain saw
    pub fn new(
        blade: ChainSawBlade,
        chain_saw_type: ChainSawType,
        mount: Mount,
        units: Units,
    ) -> Result<Self> {
        validate::positive("straight_blade_length", blade.straight_length)?;
        validate::positive("blade_length", blade.length)?;
        validate::at_most(
            "straight_blade_length",
            blade.straight_length,
            "blade_length",
            blade.length,
        )?;
        validate::positive("blade_width", blade.width)?;
        validate::positive("blade_upper_width", blade.upper_width)?;
        validate::positive("blade_thickness", blade.thickness)?;
        validate::positive("corner_radius", blade.corner_radius)?;
        validate::diameter_vs_corner_radius(blade.width, blade.corner_radius)?;
        Ok(Self {
            blade,
            chain_saw_type,
            mount: mount.into_units(units),
            units,
        })
    }

    /// Blade dimensions
    pub fn blade(&self) -> &ChainSawBlade {
        &self.blade
    }

    /// Blade outline
    pub fn chain_saw_type(&self) -> ChainSawType {
        self.chain_saw_type
    }

    /// Holder and arbor
    pub fn mount(&self) -> &Mount {
        &self.mount
    }

    /// Union of the selected part boxes
    pub fn tool_part_bounding_box(&self, selection: ToolPartFlags) -> BoundingBox3d {
        let half_width = self.blade.width.max(self.blade.upper_width) / 2.0;
        let half_thickness = self.blade.thickness / 2.0;
        let blade = BoundingBox3d::new(
            Point3::new(-half_width, -half_thickness, 0.0),
            Point3::new(half_width, half_thickness, self.blade.length),
        );
        self.mount
            .bounding_box(selection, blade, BoundingBox3d::empty())
    }
}

impl Measurable for ChainSawTool {
    fn units(&self) -> Units {
        self.units
    }

    fn scale(&mut self, units: Units, factor: f64) {
        self.blade.length *= factor;
        self.blade.straight_length *= factor;
        self.blade.width *= factor;
        self.blade.upper_width *= factor;
        self.blade.thickness *= factor;
        self.blade.corner_radius *= factor;
        self.mount.scale(units, factor);
        self.units = units;
    }
}

impl fmt::Display for ChainSawTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Chain Saw")?;
        write!(f, "\n  units: {}", self.units)?;
        write!(f, "\n  chain saw type: {}", self.chain_saw_type)?;
        write!(f, "\n  blade length: {}", self.blade.length)?;
        write!(f, "\n  straight blade length: {}", self.blade.straight_length)?;
        write!(f, "\n  blade width: {}", self.blade.width)?;
        write!(f, "\n  blade upper width: {}", self.blade.upper_width)?;
        write!(f, "\n  blade thickness: {}", self.blade.thickness)?;
        write!(f, "\n  corner radius: {}", self.blade.corner_radius)?;
        write!(f, "{}", self.mount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cutterkit_core::PartDefinition;

    fn blade() -> ChainSawBlade {
        ChainSawBlade {
            length: 300.0,
            straight_length: 250.0,
            width: 40.0,
            upper_width: 50.0,
            thickness: 8.0,
            corner_radius: 20.0,
        }
    }

    #[test]
    fn test_blade_validation() {
        let units = Units::Metric;
        assert!(ChainSawTool::new(blade(), ChainSawType::Simple, Mount::none(units), units).is_ok());
        let mut long_straight = blade();
        long_straight.straight_length = 310.0;
        let err = ChainSawTool::new(long_straight, ChainSawType::Straight, Mount::none(units), units)
            .unwrap_err();
        assert!(err.is_geometric_infeasibility());
        let mut no_radius = blade();
        no_radius.corner_radius = 0.0;
        assert!(ChainSawTool::new(no_radius, ChainSawType::Straight, Mount::none(units), units).is_err());
    }

    #[test]
    fn test_holder_sits_on_blade() {
        let units = Units::Metric;
        let mount = Mount::new(
            PartDefinition::holder_as_cylinder(80.0, 100.0, units).unwrap(),
            PartDefinition::empty(cutterkit_core::PartRole::Arbor, units),
        )
        .unwrap();
        let saw = ChainSawTool::new(blade(), ChainSawType::Straight, mount, units).unwrap();
        let holder = saw.tool_part_bounding_box(ToolPartFlags::HOLDER);
        assert_eq!(holder.min().map(|p| p.z), Some(300.0));
        let cutting = saw.tool_part_bounding_box(ToolPartFlags::CUTTING);
        assert_eq!(cutting.size_x(), 50.0);
        assert_eq!(cutting.size_y(), 8.0);
    }
}

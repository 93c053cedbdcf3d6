//! Grinding tools

use super::{write_header, TypedRevolved};
use crate::shaft::ShaftGeometry;
use crate::types::ToolType;
use crate::validate;
use cutterkit_core::{Measurable, Result, Units};
use std::fmt;

/// Pot (cup) grinder: a hollow cylinder cutting with its rim
#[derive(Debug, Clone, PartialEq)]
pub struct PotGrinder {
    shaft: ShaftGeometry,
    flatness_area: f64,
    inclination_height: f64,
    top_thickness: f64,
    wall_thickness: f64,
}

impl PotGrinder {
    /// Create a pot grinder
    pub fn new(
        shaft: ShaftGeometry,
        flatness_area: f64,
        inclination_height: f64,
        top_thickness: f64,
        wall_thickness: f64,
    ) -> Result<Self> {
        validate::non_negative("flatness_area", flatness_area)?;
        validate::non_negative("inclination_height", inclination_height)?;
        validate::non_negative("top_thickness", top_thickness)?;
        validate::non_negative("wall_thickness", wall_thickness)?;
        validate::less_than("2 * wall_thickness", 2.0 * wall_thickness, "diameter", shaft.diameter())?;
        validate::at_most("inclination_height", inclination_height, "flute_length", shaft.flute_length())?;
        Ok(Self {
            shaft,
            flatness_area,
            inclination_height,
            top_thickness,
            wall_thickness,
        })
    }

    /// Width of the flat rim
    pub fn flatness_area(&self) -> f64 {
        self.flatness_area
    }

    /// Height of the inclined rim section
    pub fn inclination_height(&self) -> f64 {
        self.inclination_height
    }

    /// Thickness of the pot bottom
    pub fn top_thickness(&self) -> f64 {
        self.top_thickness
    }

    /// Thickness of the pot wall
    pub fn wall_thickness(&self) -> f64 {
        self.wall_thickness
    }
}

impl TypedRevolved for PotGrinder {
    fn tool_type(&self) -> ToolType {
        ToolType::PotGrinder
    }

    fn shaft(&self) -> &ShaftGeometry {
        &self.shaft
    }
}

impl Measurable for PotGrinder {
    fn units(&self) -> Units {
        self.shaft.units()
    }

    fn scale(&mut self, units: Units, factor: f64) {
        self.shaft.scale(units, factor);
        self.flatness_area *= factor;
        self.inclination_height *= factor;
        self.top_thickness *= factor;
        self.wall_thickness *= factor;
    }
}

impl fmt::Display for PotGrinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, ToolType::PotGrinder, &self.shaft)?;
        write!(f, "\n  flatness area: {}", self.flatness_area)?;
        write!(f, "\n  inclination height: {}", self.inclination_height)?;
        write!(f, "\n  top thickness: {}", self.top_thickness)?;
        write!(f, "\n  wall thickness: {}", self.wall_thickness)
    }
}

shaft_access!(PotGrinder);

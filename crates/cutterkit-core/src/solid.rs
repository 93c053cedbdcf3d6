//! Solid definitions
//!
//! The tool model only consumes three things from a solid: its bounding box,
//! value equality and scaling. Solids are described by the profile or vertex
//! data a solid kernel would receive; nothing here tessellates or intersects.

use crate::error::{Result, ToolError};
use crate::geometry::{BoundingBox3d, ProfilePoint};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a solid definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolidKind {
    /// Profile revolved about the tool axis
    Revolved,
    /// Profile extruded across the tool axis
    Extruded,
    /// Triangle mesh
    Mesh,
}

impl fmt::Display for SolidKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Revolved => write!(f, "revolved"),
            Self::Extruded => write!(f, "extruded"),
            Self::Mesh => write!(f, "mesh"),
        }
    }
}

/// Shape of a tool part
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SolidDefinition {
    /// Profile in (radius, z) revolved about Z
    Revolved {
        /// Profile points
        profile: Vec<ProfilePoint>,
    },
    /// Profile in (x, z) extruded symmetrically along Y
    Extruded {
        /// Profile points
        profile: Vec<ProfilePoint>,
        /// Extrusion thickness
        thickness: f64,
    },
    /// Vertex cloud of a mesh
    Mesh {
        /// Mesh vertices
        vertices: Vec<Point3<f64>>,
    },
}

impl SolidDefinition {
    /// Revolved solid with no profile
    pub fn empty_revolved() -> Self {
        SolidDefinition::Revolved {
            profile: Vec::new(),
        }
    }

    /// Revolved solid from raw profile points
    pub fn revolved_from_points(profile: Vec<ProfilePoint>) -> Result<Self> {
        validate_points("profile", &profile)?;
        Ok(SolidDefinition::Revolved { profile })
    }

    /// Closed cylinder profile standing on z = 0
    pub fn revolved_cylinder(diameter: f64, length: f64) -> Result<Self> {
        Self::revolved_truncated_cone(diameter, diameter, length)
    }

    /// Closed truncated cone profile standing on z = 0
    pub fn revolved_truncated_cone(bottom_diameter: f64, top_diameter: f64, length: f64) -> Result<Self> {
        validate_length("bottom_diameter", bottom_diameter)?;
        validate_length("top_diameter", top_diameter)?;
        validate_length("length", length)?;
        Ok(SolidDefinition::Revolved {
            profile: vec![
                ProfilePoint::new(0.0, 0.0),
                ProfilePoint::new(bottom_diameter / 2.0, 0.0),
                ProfilePoint::new(top_diameter / 2.0, length),
                ProfilePoint::new(0.0, length),
            ],
        })
    }

    /// Extruded solid from raw profile points
    pub fn extruded_from_points(profile: Vec<ProfilePoint>, thickness: f64) -> Result<Self> {
        validate_points("profile", &profile)?;
        validate_length("thickness", thickness)?;
        Ok(SolidDefinition::Extruded { profile, thickness })
    }

    /// Rectangular plate centred on the axis, standing on z = 0
    pub fn extruded_rectangle(width: f64, height: f64, thickness: f64) -> Result<Self> {
        validate_length("width", width)?;
        validate_length("height", height)?;
        let half = width / 2.0;
        Self::extruded_from_points(
            vec![
                ProfilePoint::new(-half, 0.0),
                ProfilePoint::new(half, 0.0),
                ProfilePoint::new(half, height),
                ProfilePoint::new(-half, height),
            ],
            thickness,
        )
    }

    /// Mesh solid from its vertices
    pub fn mesh_from_vertices(vertices: Vec<Point3<f64>>) -> Result<Self> {
        if let Some(p) = vertices
            .iter()
            .find(|p| !(p.x.is_finite() && p.y.is_finite() && p.z.is_finite()))
        {
            return Err(ToolError::invalid("vertices", p.x + p.y + p.z, "vertex must be finite").into());
        }
        Ok(SolidDefinition::Mesh { vertices })
    }

    /// Kind of this solid
    pub fn kind(&self) -> SolidKind {
        match self {
            SolidDefinition::Revolved { .. } => SolidKind::Revolved,
            SolidDefinition::Extruded { .. } => SolidKind::Extruded,
            SolidDefinition::Mesh { .. } => SolidKind::Mesh,
        }
    }

    /// Whether the solid has no geometry
    pub fn is_empty(&self) -> bool {
        match self {
            SolidDefinition::Revolved { profile } | SolidDefinition::Extruded { profile, .. } => {
                profile.is_empty()
            }
            SolidDefinition::Mesh { vertices } => vertices.is_empty(),
        }
    }

    /// Bounding box in the solid's own frame
    pub fn bounding_box(&self) -> BoundingBox3d {
        match self {
            SolidDefinition::Revolved { profile } => {
                let Some((r, z_min, z_max)) = profile_extent(profile) else {
                    return BoundingBox3d::empty();
                };
                BoundingBox3d::revolved(r, z_min, z_max)
            }
            SolidDefinition::Extruded { profile, thickness } => {
                let half = thickness / 2.0;
                BoundingBox3d::from_points(profile.iter().flat_map(|p| {
                    [Point3::new(p.x, -half, p.y), Point3::new(p.x, half, p.y)]
                }))
            }
            SolidDefinition::Mesh { vertices } => BoundingBox3d::from_points(vertices.iter().copied()),
        }
    }

    /// Multiply every coordinate by `factor`
    pub fn scale(&mut self, factor: f64) {
        match self {
            SolidDefinition::Revolved { profile } => {
                profile.iter_mut().for_each(|p| p.coords *= factor);
            }
            SolidDefinition::Extruded { profile, thickness } => {
                profile.iter_mut().for_each(|p| p.coords *= factor);
                *thickness *= factor;
            }
            SolidDefinition::Mesh { vertices } => {
                vertices.iter_mut().for_each(|p| p.coords *= factor);
            }
        }
    }
}

/// (max |radius|, z min, z max) of a profile
fn profile_extent(profile: &[ProfilePoint]) -> Option<(f64, f64, f64)> {
    let first = profile.first()?;
    Some(profile.iter().fold(
        (first.x.abs(), first.y, first.y),
        |(r, lo, hi), p| (r.max(p.x.abs()), lo.min(p.y), hi.max(p.y)),
    ))
}

fn validate_length(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ToolError::invalid(name, value, "must be a finite value >= 0").into());
    }
    Ok(())
}

fn validate_points(name: &str, points: &[ProfilePoint]) -> Result<()> {
    if let Some(p) = points.iter().find(|p| !(p.x.is_finite() && p.y.is_finite())) {
        return Err(ToolError::invalid(name, p.x + p.y, "profile point must be finite").into());
    }
    Ok(())
}

//! Axis-aligned bounding boxes
//!
//! The tool axis is +Z with the tool tip at z = 0. A box may be empty, in
//! which case it absorbs nothing and contributes nothing to a union.

use nalgebra::{Point2, Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 2D profile point (x = radius or width, y = height along the tool axis)
pub type ProfilePoint = Point2<f64>;

/// Axis-aligned 3D bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox3d {
    corners: Option<(Point3<f64>, Point3<f64>)>,
}

impl BoundingBox3d {
    /// Create an empty box
    pub fn empty() -> Self {
        Self { corners: None }
    }

    /// Create a box from two opposite corners (in any order)
    pub fn new(a: Point3<f64>, b: Point3<f64>) -> Self {
        let min = Point3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z));
        let max = Point3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z));
        Self {
            corners: Some((min, max)),
        }
    }

    /// Box of a solid of revolution about Z with the given radius and z range
    pub fn revolved(radius: f64, z_min: f64, z_max: f64) -> Self {
        let r = radius.abs();
        Self::new(Point3::new(-r, -r, z_min), Point3::new(r, r, z_max))
    }

    /// Smallest box containing all points; empty for an empty iterator
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Point3<f64>>,
    {
        points.into_iter().fold(Self::empty(), |mut bb, p| {
            bb.enlarge_point(&p);
            bb
        })
    }

    /// Whether the box has never been initialised
    pub fn is_empty(&self) -> bool {
        self.corners.is_none()
    }

    /// Minimum corner
    pub fn min(&self) -> Option<Point3<f64>> {
        self.corners.map(|(min, _)| min)
    }

    /// Maximum corner
    pub fn max(&self) -> Option<Point3<f64>> {
        self.corners.map(|(_, max)| max)
    }

    /// Grow to contain `p`
    pub fn enlarge_point(&mut self, p: &Point3<f64>) {
        self.corners = Some(match self.corners {
            None => (*p, *p),
            Some((min, max)) => (
                Point3::new(min.x.min(p.x), min.y.min(p.y), min.z.min(p.z)),
                Point3::new(max.x.max(p.x), max.y.max(p.y), max.z.max(p.z)),
            ),
        });
    }

    /// Grow to contain `other`
    pub fn enlarge(&mut self, other: &BoundingBox3d) {
        if let Some((min, max)) = other.corners {
            self.enlarge_point(&min);
            self.enlarge_point(&max);
        }
    }

    /// Union of two boxes
    pub fn union(&self, other: &BoundingBox3d) -> BoundingBox3d {
        let mut out = *self;
        out.enlarge(other);
        out
    }

    /// Box moved by `v`
    pub fn translated(&self, v: Vector3<f64>) -> BoundingBox3d {
        Self {
            corners: self.corners.map(|(min, max)| (min + v, max + v)),
        }
    }

    /// Box with both corners multiplied by `factor` about the origin
    pub fn scaled(&self, factor: f64) -> BoundingBox3d {
        match self.corners {
            None => Self::empty(),
            Some((min, max)) => Self::new(
                Point3::from(min.coords * factor),
                Point3::from(max.coords * factor),
            ),
        }
    }

    /// Extent along X
    pub fn size_x(&self) -> f64 {
        self.corners.map_or(0.0, |(min, max)| max.x - min.x)
    }

    /// Extent along Y
    pub fn size_y(&self) -> f64 {
        self.corners.map_or(0.0, |(min, max)| max.y - min.y)
    }

    /// Extent along Z (tool axis)
    pub fn size_z(&self) -> f64 {
        self.corners.map_or(0.0, |(min, max)| max.z - min.z)
    }

    /// Compare corners within `tol`; two empty boxes are equal
    pub fn approx_eq(&self, other: &BoundingBox3d, tol: f64) -> bool {
        match (self.corners, other.corners) {
            (None, None) => true,
            (Some((a_min, a_max)), Some((b_min, b_max))) => {
                (a_min - b_min).amax() <= tol && (a_max - b_max).amax() <= tol
            }
            _ => false,
        }
    }
}

impl Default for BoundingBox3d {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for BoundingBox3d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.corners {
            None => write!(f, "[empty]"),
            Some((min, max)) => write!(
                f,
                "[({:.4}, {:.4}, {:.4}) - ({:.4}, {:.4}, {:.4})]",
                min.x, min.y, min.z, max.x, max.y, max.z
            ),
        }
    }
}

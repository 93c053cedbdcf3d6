//! # cutterkit Core
//!
//! Core types shared by the cutting-tool model: unit systems and scaling,
//! the error taxonomy, bounding boxes, solid and part definitions, and the
//! bottom-up part stacking used by every bounding-box query.

pub mod error;
pub mod geometry;
pub mod part;
pub mod solid;
pub mod stack;
pub mod units;

pub use error::{CastError, Error, Result, ToolError};
pub use geometry::{BoundingBox3d, ProfilePoint};
pub use part::{PartDefinition, PartRole, PositionedPart, ToolPartFlags};
pub use solid::{SolidDefinition, SolidKind};
pub use stack::{stack_bounding_box, PartStack};
pub use units::{Measurable, Units, INCH_TO_MM, MM_TO_INCH};

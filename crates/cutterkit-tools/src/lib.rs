//! # cutterkit Tools
//!
//! The cutting-tool catalogue built on `cutterkit-core`.
//! Provides typed revolved tools over a shared shaft geometry, tools
//! composed from generic parts, the wire, sawing and special branches, the
//! [`Tool`] sum type with branch dispatch, checked casts, structural
//! comparison and a keyed tool library.

pub mod caster;
pub mod comparator;
pub mod corner;
pub mod dispatch;
pub mod generic;
pub mod library;
pub mod mount;
pub mod questioner;
pub mod revolved;
pub mod sawing;
pub mod shaft;
pub mod special;
pub mod tool;
pub mod types;
pub(crate) mod validate;
pub mod wire;

pub use caster::{
    can_cast, can_cast_revolved, can_cast_sawing, can_cast_typed_revolved, safe_cast,
    safe_cast_mut, safe_cast_revolved, safe_cast_sawing, safe_cast_typed_revolved, ToolCast,
};
pub use comparator::{compare_tools, ToolComparator};
pub use corner::CornerRadiusType;
pub use dispatch::{BranchRef, RevolvedRef, SawingRef};
pub use generic::{GenericExtrudedTool, GenericRevolvedTool, GenericSawingTool, PartComposition};
pub use library::{ToolEntry, ToolId, ToolLibrary};
pub use mount::Mount;
pub use revolved::*;
pub use sawing::{ChainSawBlade, ChainSawTool, ChainSawType};
pub use shaft::{Shaft, ShaftGeometry, ShaftType, ShoulderDefinition};
pub use special::{
    ChiselingTool, ClearanceType, GenericTool, OpticDiamondShape, OpticDiamondTool, RadiusType,
    SpeedShape, SpeedShapeTool,
};
pub use tool::Tool;
pub use types::{ToolBranch, ToolRepresentation, ToolType};
pub use wire::WireTool;

// Re-export the core model for convenience
pub use cutterkit_core::{
    BoundingBox3d, CastError, Error, Measurable, PartDefinition, PartRole, Result, SolidDefinition,
    ToolError, ToolPartFlags, Units,
};

//! Branch dispatch
//!
//! [`Tool::as_branch`] sorts a tool into its structural family in one
//! `match`. Callers that only handle some families match on the returned
//! [`BranchRef`] and ignore the rest with `_`.

use crate::generic::{GenericExtrudedTool, GenericRevolvedTool, GenericSawingTool};
use crate::revolved::TypedRevolved;
use crate::sawing::ChainSawTool;
use crate::special::{ChiselingTool, GenericTool, OpticDiamondTool, SpeedShapeTool};
use crate::tool::{match_tool, Tool};
use crate::types::ToolBranch;
use crate::wire::WireTool;
use cutterkit_core::{BoundingBox3d, ToolPartFlags};

/// A revolved tool, typed or generic
#[derive(Debug, Clone, Copy)]
pub enum RevolvedRef<'a> {
    /// Typed revolved tool
    Typed(&'a dyn TypedRevolved),
    /// Generic revolved tool
    Generic(&'a GenericRevolvedTool),
}

impl RevolvedRef<'_> {
    /// Union of the selected part boxes
    pub fn tool_part_bounding_box(&self, selection: ToolPartFlags) -> BoundingBox3d {
        match self {
            RevolvedRef::Typed(t) => t.tool_part_bounding_box(selection),
            RevolvedRef::Generic(t) => t.tool_part_bounding_box(selection),
        }
    }

    /// Cutting diameter
    pub fn tool_diameter(&self) -> f64 {
        match self {
            RevolvedRef::Typed(t) => t.tool_diameter(),
            RevolvedRef::Generic(t) => t.tool_diameter(),
        }
    }
}

/// A sawing tool
#[derive(Debug, Clone, Copy)]
pub enum SawingRef<'a> {
    /// Saw built from parts
    Generic(&'a GenericSawingTool),
    /// Chain saw
    ChainSaw(&'a ChainSawTool),
}

/// A tool sorted into its structural family
#[derive(Debug, Clone, Copy)]
pub enum BranchRef<'a> {
    /// Revolved tools
    Revolved(RevolvedRef<'a>),
    /// Extruded tool
    Extruded(&'a GenericExtrudedTool),
    /// Wire
    Wire(&'a WireTool),
    /// Sawing tools
    Sawing(SawingRef<'a>),
    /// Tool from arbitrary parts
    Generic(&'a GenericTool),
    /// Optic diamond tool
    OpticDiamond(&'a OpticDiamondTool),
    /// Chiseling tool
    Chiseling(&'a ChiselingTool),
    /// Speed shape tool
    SpeedShape(&'a SpeedShapeTool),
}

impl BranchRef<'_> {
    /// Family of the referenced tool
    pub fn branch(&self) -> ToolBranch {
        match self {
            BranchRef::Revolved(_) => ToolBranch::Revolved,
            BranchRef::Extruded(_) => ToolBranch::Extruded,
            BranchRef::Wire(_) => ToolBranch::Wire,
            BranchRef::Sawing(_) => ToolBranch::Sawing,
            BranchRef::Generic(_) => ToolBranch::Generic,
            BranchRef::OpticDiamond(_) => ToolBranch::OpticDiamond,
            BranchRef::Chiseling(_) => ToolBranch::Chiseling,
            BranchRef::SpeedShape(_) => ToolBranch::SpeedShape,
        }
    }
}

impl Tool {
    /// Sort the tool into its structural family
    pub fn as_branch(&self) -> BranchRef<'_> {
        match_tool!(self, typed t => BranchRef::Revolved(RevolvedRef::Typed(t)),
            Tool::GenericRevolved(t) => BranchRef::Revolved(RevolvedRef::Generic(t)),
            Tool::GenericExtruded(t) => BranchRef::Extruded(t),
            Tool::GenericSawing(t) => BranchRef::Sawing(SawingRef::Generic(t)),
            Tool::ChainSaw(t) => BranchRef::Sawing(SawingRef::ChainSaw(t)),
            Tool::Wire(t) => BranchRef::Wire(t),
            Tool::GenericTool(t) => BranchRef::Generic(t),
            Tool::OpticDiamond(t) => BranchRef::OpticDiamond(t),
            Tool::Chiseling(t) => BranchRef::Chiseling(t),
            Tool::SpeedShape(t) => BranchRef::SpeedShape(t),
        )
    }

    /// The tool as a revolved tool, if it is one
    pub fn as_revolved(&self) -> Option<RevolvedRef<'_>> {
        match self.as_branch() {
            BranchRef::Revolved(r) => Some(r),
            _ => None,
        }
    }

    /// The tool as a sawing tool, if it is one
    pub fn as_sawing(&self) -> Option<SawingRef<'_>> {
        match self.as_branch() {
            BranchRef::Sawing(s) => Some(s),
            _ => None,
        }
    }
}

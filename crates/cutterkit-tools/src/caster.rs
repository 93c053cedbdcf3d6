//! Checked conversions between [`Tool`] and concrete tool types
//!
//! Strict casts return a [`CastError::CastFailure`] naming the expected and
//! actual types; lenient casts answer a plain `bool`. Both go through the
//! same `match` on the tool variant.

use crate::dispatch::{RevolvedRef, SawingRef};
use crate::generic::{GenericExtrudedTool, GenericRevolvedTool, GenericSawingTool};
use crate::revolved::{
    BarrelLensMill, BarrelMill, BarrelTangentMill, BarrelTaperMill, BoreBar, BullMill, CenterDrill,
    ChamferMill, ConvexTipMill, CounterBore, CounterSink, DoveMill, Drill, EndMill, FaceMill,
    LeftHandTap, LolMill, PotGrinder, RadMill, Reamer, RightHandTap, SlotMill, SphereMill,
    SpotDrill, TaperMill, ThreadMillSingleForm, ThreadTap, TypedRevolved,
};
use crate::sawing::ChainSawTool;
use crate::special::{ChiselingTool, GenericTool, OpticDiamondTool, SpeedShapeTool};
use crate::tool::Tool;
use crate::types::ToolType;
use crate::wire::WireTool;
use cutterkit_core::{CastError, Error, Result};
use tracing::debug;

/// A concrete tool type that [`Tool`] can hold
pub trait ToolCast: Sized {
    /// Type tag of the concrete type
    const TOOL_TYPE: ToolType;

    /// Borrow the concrete tool if `tool` holds one
    fn from_tool(tool: &Tool) -> Option<&Self>;

    /// Mutably borrow the concrete tool if `tool` holds one
    fn from_tool_mut(tool: &mut Tool) -> Option<&mut Self>;

    /// Wrap into a [`Tool`]
    fn into_tool(self) -> Tool;

    /// Unwrap from a [`Tool`], handing the tool back on mismatch
    fn try_from_tool(tool: Tool) -> std::result::Result<Self, Tool>;
}

fn cast_failure(expected: &dyn std::fmt::Display, actual: ToolType) -> Error {
    debug!(expected = %expected, actual = %actual, "tool cast failed");
    CastError::CastFailure {
        expected: expected.to_string(),
        actual: actual.to_string(),
    }
    .into()
}

macro_rules! tool_cast {
    ($($variant:ident => $ty:ty),+ $(,)?) => {
        $(
            impl ToolCast for $ty {
                const TOOL_TYPE: ToolType = ToolType::$variant;

                fn from_tool(tool: &Tool) -> Option<&Self> {
                    match tool {
                        Tool::$variant(t) => Some(t),
                        _ => None,
                    }
                }

                fn from_tool_mut(tool: &mut Tool) -> Option<&mut Self> {
                    match tool {
                        Tool::$variant(t) => Some(t),
                        _ => None,
                    }
                }

                fn into_tool(self) -> Tool {
                    Tool::$variant(self)
                }

                fn try_from_tool(tool: Tool) -> std::result::Result<Self, Tool> {
                    match tool {
                        Tool::$variant(t) => Ok(t),
                        other => Err(other),
                    }
                }
            }

            impl From<$ty> for Tool {
                fn from(tool: $ty) -> Self {
                    Tool::$variant(tool)
                }
            }

            impl TryFrom<Tool> for $ty {
                type Error = Error;

                fn try_from(tool: Tool) -> Result<Self> {
                    <$ty as ToolCast>::try_from_tool(tool)
                        .map_err(|other| cast_failure(&ToolType::$variant, other.tool_type()))
                }
            }
        )+
    };
}

tool_cast! {
    CenterDrill => CenterDrill,
    SpotDrill => SpotDrill,
    Drill => Drill,
    RightHandTap => RightHandTap,
    LeftHandTap => LeftHandTap,
    Reamer => Reamer,
    BoreBar => BoreBar,
    CounterBore => CounterBore,
    CounterSink => CounterSink,
    EndMill => EndMill,
    SphereMill => SphereMill,
    ChamferMill => ChamferMill,
    FaceMill => FaceMill,
    SlotMill => SlotMill,
    RadMill => RadMill,
    DoveMill => DoveMill,
    TaperMill => TaperMill,
    LolMill => LolMill,
    BullMill => BullMill,
    BarrelMill => BarrelMill,
    ConvexTipMill => ConvexTipMill,
    BarrelTangentMill => BarrelTangentMill,
    BarrelLensMill => BarrelLensMill,
    BarrelTaperMill => BarrelTaperMill,
    PotGrinder => PotGrinder,
    ThreadTap => ThreadTap,
    ThreadMillSingleForm => ThreadMillSingleForm,
    GenericRevolved => GenericRevolvedTool,
    GenericExtruded => GenericExtrudedTool,
    GenericSawing => GenericSawingTool,
    Wire => WireTool,
    ChainSaw => ChainSawTool,
    OpticDiamond => OpticDiamondTool,
    SpeedShape => SpeedShapeTool,
    Chiseling => ChiselingTool,
    GenericTool => GenericTool,
}

/// Borrow `tool` as `T`, failing with a cast error on any other type
pub fn safe_cast<T: ToolCast>(tool: &Tool) -> Result<&T> {
    T::from_tool(tool).ok_or_else(|| cast_failure(&T::TOOL_TYPE, tool.tool_type()))
}

/// Mutably borrow `tool` as `T`, failing with a cast error on any other type
pub fn safe_cast_mut<T: ToolCast>(tool: &mut Tool) -> Result<&mut T> {
    let actual = tool.tool_type();
    T::from_tool_mut(tool).ok_or_else(|| cast_failure(&T::TOOL_TYPE, actual))
}

/// Whether `tool` is a `T`
pub fn can_cast<T: ToolCast>(tool: &Tool) -> bool {
    T::from_tool(tool).is_some()
}

/// Borrow `tool` as a revolved tool, typed or generic
pub fn safe_cast_revolved(tool: &Tool) -> Result<RevolvedRef<'_>> {
    tool.as_revolved()
        .ok_or_else(|| cast_failure(&"revolved tool", tool.tool_type()))
}

/// Whether `tool` is a revolved tool
pub fn can_cast_revolved(tool: &Tool) -> bool {
    tool.as_revolved().is_some()
}

/// Borrow `tool` as a typed revolved tool
pub fn safe_cast_typed_revolved(tool: &Tool) -> Result<&dyn TypedRevolved> {
    tool.as_typed_revolved()
        .ok_or_else(|| cast_failure(&"typed revolved tool", tool.tool_type()))
}

/// Whether `tool` is a typed revolved tool
pub fn can_cast_typed_revolved(tool: &Tool) -> bool {
    tool.as_typed_revolved().is_some()
}

/// Borrow `tool` as a sawing tool
pub fn safe_cast_sawing(tool: &Tool) -> Result<SawingRef<'_>> {
    tool.as_sawing()
        .ok_or_else(|| cast_failure(&"sawing tool", tool.tool_type()))
}

/// Whether `tool` is a sawing tool
pub fn can_cast_sawing(tool: &Tool) -> bool {
    tool.as_sawing().is_some()
}

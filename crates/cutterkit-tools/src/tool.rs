//! The tool sum type
//!
//! Every concrete tool is one variant of [`Tool`]. Operations over all
//! tools are a single `match`; adding a variant makes every unhandled
//! match a compile error.

use crate::generic::{GenericExtrudedTool, GenericRevolvedTool, GenericSawingTool};
use crate::revolved::{
    BarrelLensMill, BarrelMill, BarrelTangentMill, BarrelTaperMill, BoreBar, BullMill, CenterDrill,
    ChamferMill, ConvexTipMill, CounterBore, CounterSink, DoveMill, Drill, EndMill, FaceMill,
    LeftHandTap, LolMill, PotGrinder, RadMill, Reamer, RightHandTap, SlotMill, SphereMill,
    SpotDrill, TaperMill, ThreadMillSingleForm, ThreadTap, TypedRevolved,
};
use crate::sawing::ChainSawTool;
use crate::special::{ChiselingTool, GenericTool, OpticDiamondTool, SpeedShapeTool};
use crate::types::{ToolBranch, ToolRepresentation, ToolType};
use crate::wire::WireTool;
use cutterkit_core::{BoundingBox3d, Measurable, PartDefinition, ToolPartFlags, Units};
use std::fmt;

/// Any cutting tool
#[derive(Debug, Clone, PartialEq)]
pub enum Tool {
    /// Center drill
    CenterDrill(CenterDrill),
    /// Spot drill
    SpotDrill(SpotDrill),
    /// Twist drill
    Drill(Drill),
    /// Right hand tap
    RightHandTap(RightHandTap),
    /// Left hand tap
    LeftHandTap(LeftHandTap),
    /// Reamer
    Reamer(Reamer),
    /// Boring bar
    BoreBar(BoreBar),
    /// Counter bore
    CounterBore(CounterBore),
    /// Counter sink
    CounterSink(CounterSink),
    /// Flat end mill
    EndMill(EndMill),
    /// Ball end mill
    SphereMill(SphereMill),
    /// Chamfer mill
    ChamferMill(ChamferMill),
    /// Face mill
    FaceMill(FaceMill),
    /// Slot mill
    SlotMill(SlotMill),
    /// Corner rounding mill
    RadMill(RadMill),
    /// Dovetail mill
    DoveMill(DoveMill),
    /// Tapered mill
    TaperMill(TaperMill),
    /// Lollipop mill
    LolMill(LolMill),
    /// Bull nose mill
    BullMill(BullMill),
    /// Barrel mill
    BarrelMill(BarrelMill),
    /// Convex tip mill
    ConvexTipMill(ConvexTipMill),
    /// Tangent barrel mill
    BarrelTangentMill(BarrelTangentMill),
    /// Lens barrel mill
    BarrelLensMill(BarrelLensMill),
    /// Taper barrel mill
    BarrelTaperMill(BarrelTaperMill),
    /// Pot grinder
    PotGrinder(PotGrinder),
    /// Thread tap
    ThreadTap(ThreadTap),
    /// Single form thread mill
    ThreadMillSingleForm(ThreadMillSingleForm),
    /// Revolved tool from parts
    GenericRevolved(GenericRevolvedTool),
    /// Extruded tool from parts
    GenericExtruded(GenericExtrudedTool),
    /// Sawing tool from parts
    GenericSawing(GenericSawingTool),
    /// Wire
    Wire(WireTool),
    /// Chain saw
    ChainSaw(ChainSawTool),
    /// Optic diamond tool
    OpticDiamond(OpticDiamondTool),
    /// Speed shape tool
    SpeedShape(SpeedShapeTool),
    /// Chiseling tool
    Chiseling(ChiselingTool),
    /// Tool from arbitrary parts
    GenericTool(GenericTool),
}

/// Match a tool, binding `$t` to any typed revolved tool, then the given arms
macro_rules! match_tool {
    ($tool:expr, typed $t:ident => $body:expr, $($pat:pat => $arm:expr),+ $(,)?) => {
        match $tool {
            Tool::CenterDrill($t) => $body,
            Tool::SpotDrill($t) => $body,
            Tool::Drill($t) => $body,
            Tool::RightHandTap($t) => $body,
            Tool::LeftHandTap($t) => $body,
            Tool::Reamer($t) => $body,
            Tool::BoreBar($t) => $body,
            Tool::CounterBore($t) => $body,
            Tool::CounterSink($t) => $body,
            Tool::EndMill($t) => $body,
            Tool::SphereMill($t) => $body,
            Tool::ChamferMill($t) => $body,
            Tool::FaceMill($t) => $body,
            Tool::SlotMill($t) => $body,
            Tool::RadMill($t) => $body,
            Tool::DoveMill($t) => $body,
            Tool::TaperMill($t) => $body,
            Tool::LolMill($t) => $body,
            Tool::BullMill($t) => $body,
            Tool::BarrelMill($t) => $body,
            Tool::ConvexTipMill($t) => $body,
            Tool::BarrelTangentMill($t) => $body,
            Tool::BarrelLensMill($t) => $body,
            Tool::BarrelTaperMill($t) => $body,
            Tool::PotGrinder($t) => $body,
            Tool::ThreadTap($t) => $body,
            Tool::ThreadMillSingleForm($t) => $body,
            $($pat => $arm),+
        }
    };
}

pub(crate) use match_tool;

/// Match a tool, binding `$t` to whatever tool the variant holds
macro_rules! with_any_tool {
    ($tool:expr, $t:ident => $body:expr) => {
        match_tool!($tool, typed $t => $body,
            Tool::GenericRevolved($t) => $body,
            Tool::GenericExtruded($t) => $body,
            Tool::GenericSawing($t) => $body,
            Tool::Wire($t) => $body,
            Tool::ChainSaw($t) => $body,
            Tool::OpticDiamond($t) => $body,
            Tool::SpeedShape($t) => $body,
            Tool::Chiseling($t) => $body,
            Tool::GenericTool($t) => $body,
        )
    };
}

impl Tool {
    /// Concrete tool type
    pub fn tool_type(&self) -> ToolType {
        match_tool!(self, typed t => t.tool_type(),
            Tool::GenericRevolved(_) => ToolType::GenericRevolved,
            Tool::GenericExtruded(_) => ToolType::GenericExtruded,
            Tool::GenericSawing(_) => ToolType::GenericSawing,
            Tool::Wire(_) => ToolType::Wire,
            Tool::ChainSaw(_) => ToolType::ChainSaw,
            Tool::OpticDiamond(_) => ToolType::OpticDiamond,
            Tool::SpeedShape(_) => ToolType::SpeedShape,
            Tool::Chiseling(_) => ToolType::Chiseling,
            Tool::GenericTool(_) => ToolType::GenericTool,
        )
    }

    /// Structural family
    pub fn branch(&self) -> ToolBranch {
        self.tool_type().branch()
    }

    /// Typed parameters or generic part list
    pub fn representation(&self) -> ToolRepresentation {
        self.tool_type().representation()
    }

    /// The tool as a typed revolved tool, if it is one
    pub fn as_typed_revolved(&self) -> Option<&dyn TypedRevolved> {
        match_tool!(self, typed t => Some(t as &dyn TypedRevolved), _ => None)
    }

    /// The tool as a mutable typed revolved tool, if it is one
    pub fn as_typed_revolved_mut(&mut self) -> Option<&mut dyn TypedRevolved> {
        match_tool!(self, typed t => Some(t as &mut dyn TypedRevolved), _ => None)
    }

    /// Union of the selected part boxes, each part placed on the parts below it
    pub fn tool_part_bounding_box(&self, selection: ToolPartFlags) -> BoundingBox3d {
        with_any_tool!(self, t => t.tool_part_bounding_box(selection))
    }

    /// Axial extent of the selected parts
    pub fn tool_part_length(&self, selection: ToolPartFlags) -> f64 {
        self.tool_part_bounding_box(selection).size_z()
    }

    /// Axial extent of the holder
    pub fn holder_length(&self) -> f64 {
        self.tool_part_length(ToolPartFlags::HOLDER)
    }

    /// Cutting diameter
    ///
    /// Typed revolved tools report their stored diameter; part based tools
    /// the widest cutting part; plate shaped tools their width.
    pub fn tool_diameter(&self) -> f64 {
        match_tool!(self, typed t => t.tool_diameter(),
            Tool::GenericRevolved(t) => t.tool_diameter(),
            Tool::GenericExtruded(t) => t.tool_diameter(),
            Tool::GenericSawing(t) => t.tool_diameter(),
            Tool::GenericTool(t) => t.tool_diameter(),
            Tool::Wire(t) => t.wire_diameter(),
            Tool::ChainSaw(t) => t.blade().width.max(t.blade().upper_width),
            Tool::OpticDiamond(t) => t.shape().width,
            Tool::SpeedShape(t) => t.shape().width,
            Tool::Chiseling(t) => 2.0 * t.radius(),
        )
    }

    /// Holder part, for tools with a single holder
    pub fn holder(&self) -> Option<&PartDefinition> {
        match_tool!(self, typed t => Some(t.holder()),
            Tool::GenericRevolved(t) => t.parts().holder(),
            Tool::GenericExtruded(t) => t.parts().holder(),
            Tool::GenericSawing(t) => t.parts().holder(),
            Tool::ChainSaw(t) => Some(t.mount().holder()),
            Tool::OpticDiamond(t) => Some(t.mount().holder()),
            Tool::SpeedShape(t) => Some(t.mount().holder()),
            Tool::Chiseling(t) => Some(t.mount().holder()),
            Tool::GenericTool(t) => t.holder_parts().first(),
            Tool::Wire(_) => None,
        )
    }

    /// Arbor part, for tools with a single arbor
    pub fn arbor(&self) -> Option<&PartDefinition> {
        match_tool!(self, typed t => Some(t.arbor()),
            Tool::GenericRevolved(t) => t.parts().arbor(),
            Tool::GenericExtruded(t) => t.parts().arbor(),
            Tool::GenericSawing(t) => t.parts().arbor(),
            Tool::ChainSaw(t) => Some(t.mount().arbor()),
            Tool::OpticDiamond(t) => Some(t.mount().arbor()),
            Tool::SpeedShape(t) => Some(t.mount().arbor()),
            Tool::Chiseling(t) => Some(t.mount().arbor()),
            Tool::GenericTool(t) => t.arbor_parts().first(),
            Tool::Wire(_) => None,
        )
    }

    /// Whether the tool has a holder with geometry
    pub fn has_holder(&self) -> bool {
        self.holder().is_some_and(|h| !h.is_empty())
    }

    /// Whether the tool has an arbor with geometry
    pub fn has_arbor(&self) -> bool {
        self.arbor().is_some_and(|a| !a.is_empty())
    }
}

impl Measurable for Tool {
    fn units(&self) -> Units {
        with_any_tool!(self, t => t.units())
    }

    fn scale(&mut self, units: Units, factor: f64) {
        with_any_tool!(self, t => t.scale(units, factor))
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        with_any_tool!(self, t => fmt::Display::fmt(t, f))
    }
}

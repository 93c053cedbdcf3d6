//! Tool classification
//!
//! Provides:
//! - Concrete tool types with their stable numeric codes
//! - Tool branches (structural families sharing a capability set)
//! - Tool representation (typed parameters or generic part list)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Concrete tool types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolType {
    /// Center drill
    CenterDrill,
    /// Spot drill
    SpotDrill,
    /// Twist drill
    Drill,
    /// Right hand tap
    RightHandTap,
    /// Left hand tap
    LeftHandTap,
    /// Reamer
    Reamer,
    /// Boring bar
    BoreBar,
    /// Counter bore
    CounterBore,
    /// Counter sink
    CounterSink,
    /// Flat end mill
    EndMill,
    /// Ball (spherical) end mill
    SphereMill,
    /// Chamfer mill
    ChamferMill,
    /// Face mill
    FaceMill,
    /// Slot mill
    SlotMill,
    /// Radius (corner rounding) mill
    RadMill,
    /// Dovetail mill
    DoveMill,
    /// Tapered mill
    TaperMill,
    /// Lollipop mill
    LolMill,
    /// Bull nose mill
    BullMill,
    /// Barrel mill
    BarrelMill,
    /// Convex tip mill
    ConvexTipMill,
    /// Generic revolved tool
    GenericRevolved,
    /// Generic extruded tool
    GenericExtruded,
    /// Wire tool
    Wire,
    /// Generic sawing tool
    GenericSawing,
    /// Chain saw
    ChainSaw,
    /// Generic tool
    GenericTool,
    /// Optic diamond tool
    OpticDiamond,
    /// Speed shape tool
    SpeedShape,
    /// Barrel mill tangent to the shaft
    BarrelTangentMill,
    /// Lens shaped barrel mill
    BarrelLensMill,
    /// Taper barrel mill
    BarrelTaperMill,
    /// Pot grinder
    PotGrinder,
    /// Thread tap
    ThreadTap,
    /// Chiseling tool
    Chiseling,
    /// Single form thread mill
    ThreadMillSingleForm,
}

impl ToolType {
    /// Get all tool types
    pub fn all() -> &'static [ToolType] {
        &[
            ToolType::CenterDrill,
            ToolType::SpotDrill,
            ToolType::Drill,
            ToolType::RightHandTap,
            ToolType::LeftHandTap,
            ToolType::Reamer,
            ToolType::BoreBar,
            ToolType::CounterBore,
            ToolType::CounterSink,
            ToolType::EndMill,
            ToolType::SphereMill,
            ToolType::ChamferMill,
            ToolType::FaceMill,
            ToolType::SlotMill,
            ToolType::RadMill,
            ToolType::DoveMill,
            ToolType::TaperMill,
            ToolType::LolMill,
            ToolType::BullMill,
            ToolType::BarrelMill,
            ToolType::ConvexTipMill,
            ToolType::GenericRevolved,
            ToolType::GenericExtruded,
            ToolType::Wire,
            ToolType::GenericSawing,
            ToolType::ChainSaw,
            ToolType::GenericTool,
            ToolType::OpticDiamond,
            ToolType::SpeedShape,
            ToolType::BarrelTangentMill,
            ToolType::BarrelLensMill,
            ToolType::BarrelTaperMill,
            ToolType::PotGrinder,
            ToolType::ThreadTap,
            ToolType::Chiseling,
            ToolType::ThreadMillSingleForm,
        ]
    }

    /// Stable numeric code of the type
    pub fn code(&self) -> u32 {
        match self {
            ToolType::CenterDrill => 1,
            ToolType::SpotDrill => 2,
            ToolType::Drill => 3,
            ToolType::RightHandTap => 4,
            ToolType::LeftHandTap => 5,
            ToolType::Reamer => 6,
            ToolType::BoreBar => 7,
            ToolType::CounterBore => 8,
            ToolType::CounterSink => 9,
            ToolType::EndMill => 10,
            ToolType::SphereMill => 11,
            ToolType::ChamferMill => 12,
            ToolType::FaceMill => 13,
            ToolType::SlotMill => 14,
            ToolType::RadMill => 15,
            ToolType::DoveMill => 16,
            ToolType::TaperMill => 17,
            ToolType::LolMill => 18,
            ToolType::BullMill => 19,
            ToolType::BarrelMill => 20,
            ToolType::ConvexTipMill => 21,
            ToolType::GenericRevolved => 30,
            ToolType::GenericExtruded => 40,
            ToolType::Wire => 41,
            ToolType::GenericSawing => 42,
            ToolType::ChainSaw => 43,
            ToolType::GenericTool => 45,
            ToolType::OpticDiamond => 47,
            ToolType::SpeedShape => 48,
            ToolType::BarrelTangentMill => 50,
            ToolType::BarrelLensMill => 51,
            ToolType::BarrelTaperMill => 52,
            ToolType::PotGrinder => 55,
            ToolType::ThreadTap => 56,
            ToolType::Chiseling => 58,
            ToolType::ThreadMillSingleForm => 61,
        }
    }

    /// Type for a numeric code
    pub fn from_code(code: u32) -> Option<ToolType> {
        Self::all().iter().copied().find(|t| t.code() == code)
    }

    /// Structural family of the type
    pub fn branch(&self) -> ToolBranch {
        match self {
            ToolType::GenericExtruded => ToolBranch::Extruded,
            ToolType::Wire => ToolBranch::Wire,
            ToolType::GenericSawing | ToolType::ChainSaw => ToolBranch::Sawing,
            ToolType::GenericTool => ToolBranch::Generic,
            ToolType::OpticDiamond => ToolBranch::OpticDiamond,
            ToolType::SpeedShape => ToolBranch::SpeedShape,
            ToolType::Chiseling => ToolBranch::Chiseling,
            _ => ToolBranch::Revolved,
        }
    }

    /// Whether the type is described by parameters or by a part list
    pub fn representation(&self) -> ToolRepresentation {
        match self {
            ToolType::GenericRevolved
            | ToolType::GenericExtruded
            | ToolType::GenericSawing
            | ToolType::GenericTool => ToolRepresentation::Generic,
            _ => ToolRepresentation::Typed,
        }
    }
}

impl fmt::Display for ToolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CenterDrill => "Center Drill",
            Self::SpotDrill => "Spot Drill",
            Self::Drill => "Drill",
            Self::RightHandTap => "Right Hand Tap",
            Self::LeftHandTap => "Left Hand Tap",
            Self::Reamer => "Reamer",
            Self::BoreBar => "Boring Bar",
            Self::CounterBore => "Counter Bore",
            Self::CounterSink => "Counter Sink",
            Self::EndMill => "End Mill",
            Self::SphereMill => "Sphere Mill",
            Self::ChamferMill => "Chamfer Mill",
            Self::FaceMill => "Face Mill",
            Self::SlotMill => "Slot Mill",
            Self::RadMill => "Radius Mill",
            Self::DoveMill => "Dovetail Mill",
            Self::TaperMill => "Taper Mill",
            Self::LolMill => "Lollipop Mill",
            Self::BullMill => "Bull Nose Mill",
            Self::BarrelMill => "Barrel Mill",
            Self::ConvexTipMill => "Convex Tip Mill",
            Self::GenericRevolved => "Generic Revolved Tool",
            Self::GenericExtruded => "Generic Extruded Tool",
            Self::Wire => "Wire Tool",
            Self::GenericSawing => "Generic Sawing Tool",
            Self::ChainSaw => "Chain Saw",
            Self::GenericTool => "Generic Tool",
            Self::OpticDiamond => "Optic Diamond Tool",
            Self::SpeedShape => "Speed Shape Tool",
            Self::BarrelTangentMill => "Barrel Tangent Mill",
            Self::BarrelLensMill => "Barrel Lens Mill",
            Self::BarrelTaperMill => "Barrel Taper Mill",
            Self::PotGrinder => "Pot Grinder",
            Self::ThreadTap => "Thread Tap",
            Self::Chiseling => "Chiseling Tool",
            Self::ThreadMillSingleForm => "Single Form Thread Mill",
        };
        write!(f, "{}", name)
    }
}

/// Structural tool family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolBranch {
    /// Revolved about the spindle axis
    Revolved,
    /// Extruded profile
    Extruded,
    /// Wire
    Wire,
    /// Saw blade
    Sawing,
    /// Optic diamond insert
    OpticDiamond,
    /// Speed shape insert
    SpeedShape,
    /// Chisel
    Chiseling,
    /// Arbitrary parts
    Generic,
}

impl ToolBranch {
    /// Get all branches
    pub fn all() -> &'static [ToolBranch] {
        &[
            ToolBranch::Revolved,
            ToolBranch::Extruded,
            ToolBranch::Wire,
            ToolBranch::Sawing,
            ToolBranch::OpticDiamond,
            ToolBranch::SpeedShape,
            ToolBranch::Chiseling,
            ToolBranch::Generic,
        ]
    }

    /// Stable numeric code of the branch
    pub fn code(&self) -> u32 {
        match self {
            ToolBranch::Revolved => 0,
            ToolBranch::Extruded => 1,
            ToolBranch::Wire => 2,
            ToolBranch::Sawing => 3,
            ToolBranch::OpticDiamond => 4,
            ToolBranch::SpeedShape => 5,
            ToolBranch::Chiseling => 6,
            ToolBranch::Generic => 20,
        }
    }

    /// Whether tools of this family carry a holder and an arbor
    pub fn supports_holder_and_arbor(&self) -> bool {
        !matches!(self, ToolBranch::Wire)
    }
}

impl fmt::Display for ToolBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Revolved => write!(f, "revolved"),
            Self::Extruded => write!(f, "extruded"),
            Self::Wire => write!(f, "wire"),
            Self::Sawing => write!(f, "sawing"),
            Self::OpticDiamond => write!(f, "optic diamond"),
            Self::SpeedShape => write!(f, "speed shape"),
            Self::Chiseling => write!(f, "chiseling"),
            Self::Generic => write!(f, "generic"),
        }
    }
}

/// How a tool is described
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolRepresentation {
    /// Arbitrary part list
    Generic,
    /// Named shape parameters
    Typed,
}

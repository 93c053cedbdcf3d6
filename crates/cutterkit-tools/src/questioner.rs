//! Tool type questions
//!
//! Shape predicates work on raw diameter/corner radius pairs so they can be
//! asked before a tool exists. Family predicates look only at the type tag.

use crate::tool::Tool;
use crate::types::{ToolBranch, ToolRepresentation, ToolType};

/// Tolerance for corner radius comparisons
pub const RADIUS_TOLERANCE: f64 = 1e-9;

/// Whether the corner radius makes a full ball nose
pub fn is_ball(tool_diameter: f64, corner_radius: f64) -> bool {
    (corner_radius - tool_diameter / 2.0).abs() <= RADIUS_TOLERANCE
}

/// Whether the corner is sharp
pub fn is_flat(corner_radius: f64) -> bool {
    corner_radius.abs() <= RADIUS_TOLERANCE
}

/// Whether the corner is rounded but does not reach the axis
pub fn is_bull_nose(tool_diameter: f64, corner_radius: f64) -> bool {
    !is_flat(corner_radius)
        && !is_ball(tool_diameter, corner_radius)
        && corner_radius < tool_diameter / 2.0
}

/// The concrete type of `tool`
pub fn find_tool_type(tool: &Tool) -> ToolType {
    tool.tool_type()
}

/// Whether both tools have the same concrete type
pub fn tools_have_same_type(a: &Tool, b: &Tool) -> bool {
    a.tool_type() == b.tool_type()
}

/// Drills and other hole making tools except taps
pub fn is_drill(tool: &Tool) -> bool {
    matches!(
        tool.tool_type(),
        ToolType::Drill
            | ToolType::SpotDrill
            | ToolType::CenterDrill
            | ToolType::Reamer
            | ToolType::BoreBar
            | ToolType::CounterBore
            | ToolType::CounterSink
    )
}

/// Taps of either hand and thread taps
pub fn is_tap(tool: &Tool) -> bool {
    matches!(
        tool.tool_type(),
        ToolType::LeftHandTap | ToolType::RightHandTap | ToolType::ThreadTap
    )
}

/// Milling cutters, barrels and thread mills included
pub fn is_mill(tool: &Tool) -> bool {
    matches!(
        tool.tool_type(),
        ToolType::EndMill
            | ToolType::SphereMill
            | ToolType::ChamferMill
            | ToolType::FaceMill
            | ToolType::SlotMill
            | ToolType::RadMill
            | ToolType::DoveMill
            | ToolType::TaperMill
            | ToolType::LolMill
            | ToolType::BullMill
            | ToolType::ConvexTipMill
            | ToolType::ThreadMillSingleForm
    ) || is_barrel(tool)
}

/// Barrel cutters
pub fn is_barrel(tool: &Tool) -> bool {
    matches!(
        tool.tool_type(),
        ToolType::BarrelMill
            | ToolType::BarrelLensMill
            | ToolType::BarrelTangentMill
            | ToolType::BarrelTaperMill
    )
}

/// Typed or generic revolved tools
pub fn is_revolved(tool: &Tool) -> bool {
    tool.branch() == ToolBranch::Revolved
}

/// Tools described by a part list instead of typed parameters
pub fn is_generic(tool: &Tool) -> bool {
    tool.representation() == ToolRepresentation::Generic
}

/// Wire tools
pub fn is_wire(tool: &Tool) -> bool {
    tool.branch() == ToolBranch::Wire
}

/// Sawing tools
pub fn is_sawing(tool: &Tool) -> bool {
    tool.branch() == ToolBranch::Sawing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corner::CornerRadiusType;
    use crate::generic::GenericRevolvedTool;
    use crate::revolved::{BarrelMill, Drill, EndMill, RightHandTap};
    use crate::shaft::ShaftGeometry;
    use cutterkit_core::Units;

    fn shaft() -> ShaftGeometry {
        ShaftGeometry::cylindrical(10.0, 20.0, 40.0, Units::Metric).unwrap()
    }

    #[test]
    fn test_corner_shapes() {
        assert!(is_ball(10.0, 5.0));
        assert!(!is_ball(10.0, 4.0));
        assert!(is_flat(0.0));
        assert!(!is_flat(0.5));
        assert!(is_bull_nose(10.0, 2.0));
        assert!(!is_bull_nose(10.0, 0.0));
        assert!(!is_bull_nose(10.0, 5.0));
    }

    #[test]
    fn test_families() {
        let mill = Tool::EndMill(EndMill::new(shaft()));
        let drill = Tool::Drill(Drill::new(shaft(), 118.0).unwrap());
        let tap = Tool::RightHandTap(
            RightHandTap::new(shaft(), 120.0, 0.0, CornerRadiusType::None, 1.0).unwrap(),
        );
        let barrel = Tool::BarrelMill(BarrelMill::new(shaft(), 50.0, 12.0, 1.0).unwrap());
        let generic = Tool::GenericRevolved(GenericRevolvedTool::new(Units::Metric));

        assert!(is_mill(&mill) && !is_drill(&mill) && !is_tap(&mill));
        assert!(is_drill(&drill) && !is_mill(&drill));
        assert!(is_tap(&tap) && !is_drill(&tap));
        assert!(is_barrel(&barrel) && is_mill(&barrel));
        assert!(is_generic(&generic) && is_revolved(&generic));
        assert!(!is_generic(&mill) && is_revolved(&mill));
        assert!(!is_wire(&mill) && !is_sawing(&mill));
    }

    #[test]
    fn test_same_type() {
        let a = Tool::EndMill(EndMill::new(shaft()));
        let b = Tool::EndMill(EndMill::new(
            ShaftGeometry::cylindrical(4.0, 10.0, 20.0, Units::Metric).unwrap(),
        ));
        let c = Tool::Drill(Drill::new(shaft(), 118.0).unwrap());
        assert!(tools_have_same_type(&a, &b));
        assert!(!tools_have_same_type(&a, &c));
        assert_eq!(find_tool_type(&c), ToolType::Drill);
    }
}

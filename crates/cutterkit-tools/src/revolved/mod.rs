//! Typed revolved tools
//!
//! Every tool here embeds a [`ShaftGeometry`] by value and adds its own
//! shape parameters. Shared behaviour (bounding boxes, diameter, shoulder
//! queries) comes from the [`TypedRevolved`] trait; a tool overrides only
//! its cutting or non-cutting part box and, occasionally, what counts as an
//! advanced shoulder.
//!
//! The shaft can only be changed from inside this crate, so that a tool's
//! own parameters are never left behind by a rescaled shaft.

mod sealed {
    use crate::shaft::ShaftGeometry;

    pub trait ShaftAccess {
        fn shaft_mut(&mut self) -> &mut ShaftGeometry;
    }
}

use sealed::ShaftAccess;

macro_rules! shaft_access {
    ($($name:ident),* $(,)?) => {
        $(
            impl $crate::revolved::ShaftAccess for $name {
                fn shaft_mut(&mut self) -> &mut $crate::shaft::ShaftGeometry {
                    &mut self.shaft
                }
            }
        )*
    };
}

pub mod barrels;
pub mod drills;
pub mod grinders;
pub mod mills;
pub mod threads;

pub use barrels::{BarrelLensMill, BarrelMill, BarrelTangentMill, BarrelTaperMill};
pub use drills::{
    BoreBar, CenterDrill, CounterBore, CounterSink, Drill, LeftHandTap, Reamer, RightHandTap,
    SpotDrill, TapParameters,
};
pub use grinders::PotGrinder;
pub use mills::{
    BullMill, ChamferMill, ConvexTipMill, DoveMill, EndMill, FaceMill, LolMill, RadMill, SlotMill,
    SphereMill, TaperMill,
};
pub use threads::{CoreDiameterType, ThreadDirection, ThreadMillSingleForm, ThreadTap, ThreadType};

use crate::shaft::{ShaftGeometry, ShaftType, ShoulderDefinition};
use crate::types::ToolType;
use cutterkit_core::{BoundingBox3d, Measurable, PartDefinition, Result, ToolPartFlags};
use std::fmt;

/// Behaviour shared by every typed revolved tool
pub trait TypedRevolved: ShaftAccess + Measurable + fmt::Display + fmt::Debug {
    /// Concrete tool type
    fn tool_type(&self) -> ToolType;

    /// Embedded shaft geometry
    fn shaft(&self) -> &ShaftGeometry;

    /// Box of the cutting part, tip at z = 0
    fn cutting_bounding_box(&self) -> BoundingBox3d {
        self.shaft().cylinder_cutting_box()
    }

    /// Box of the non-cutting shaft, base at z = 0
    fn non_cutting_bounding_box(&self) -> BoundingBox3d {
        self.shaft().non_cutting_box()
    }

    /// Whether the shoulder is modelled beyond a plain cylinder
    fn has_advanced_shoulder_definition(&self) -> bool {
        self.shaft().has_advanced_shoulder_definition()
    }

    /// Stored tool diameter
    fn tool_diameter(&self) -> f64 {
        self.shaft().diameter()
    }

    /// Flute length
    fn flute_length(&self) -> f64 {
        self.shaft().flute_length()
    }

    /// Shoulder length
    fn shoulder_length(&self) -> f64 {
        self.shaft().shoulder_length()
    }

    /// Holder part
    fn holder(&self) -> &PartDefinition {
        self.shaft().holder()
    }

    /// Arbor part
    fn arbor(&self) -> &PartDefinition {
        self.shaft().arbor()
    }

    /// Shaft model kind
    fn shaft_type(&self) -> ShaftType {
        self.shaft().shaft_type()
    }

    /// Shoulder definition when the shaft type is cylindrical cone
    fn shoulder_definition(&self) -> Option<&ShoulderDefinition> {
        self.shaft().shoulder_definition()
    }

    /// Shaft profile when the shaft type is a profile
    fn shaft_profile(&self) -> Option<&PartDefinition> {
        self.shaft().shaft_profile()
    }

    /// Union of the selected part boxes, each placed on the parts below it
    fn tool_part_bounding_box(&self, selection: ToolPartFlags) -> BoundingBox3d {
        self.shaft().part_bounding_box(
            selection,
            self.cutting_bounding_box(),
            self.non_cutting_bounding_box(),
        )
    }

    /// Axial extent of the selected parts
    fn tool_part_length(&self, selection: ToolPartFlags) -> f64 {
        self.tool_part_bounding_box(selection).size_z()
    }

    /// Axial extent of the holder
    fn holder_length(&self) -> f64 {
        self.holder().length()
    }

    /// Change the shoulder base length
    fn set_base_length(&mut self, base_length: f64) -> Result<()> {
        self.shaft_mut().set_base_length(base_length)
    }
}

/// Write the common header of a typed revolved tool dump
pub(crate) fn write_header(
    f: &mut fmt::Formatter<'_>,
    tool_type: ToolType,
    shaft: &ShaftGeometry,
) -> fmt::Result {
    write!(f, "{}\n{}", tool_type, shaft)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cutterkit_core::{PartRole, Units};

    #[test]
    fn test_base_length_changes_through_the_tool() {
        let shoulder = ShoulderDefinition::with_cylinder_base(8.0, 50.0, 20.0, Units::Metric).unwrap();
        let shaft = ShaftGeometry::with_shoulder_definition(
            10.0,
            PartDefinition::empty(PartRole::Holder, Units::Metric),
            30.0,
            PartDefinition::empty(PartRole::Arbor, Units::Metric),
            40.0,
            shoulder,
            Units::Metric,
        )
        .unwrap();
        let mut mill = EndMill::new(shaft);
        mill.set_base_length(60.0).unwrap();
        assert_eq!(mill.shoulder_definition().map(|s| s.base_length()), Some(60.0));
        // the flutes must stay inside the shoulder base
        assert!(mill.set_base_length(25.0).is_err());

        let mut plain = EndMill::new(ShaftGeometry::cylindrical(10.0, 30.0, 40.0, Units::Metric).unwrap());
        assert!(plain.set_base_length(60.0).is_err());
    }
}

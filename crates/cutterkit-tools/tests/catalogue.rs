//! Properties that hold for every tool in a representative catalogue

use cutterkit_tools::{
    BarrelMill, BoundingBox3d, BullMill, CenterDrill, ChainSawBlade, ChainSawTool, ChainSawType,
    ChamferMill, ChiselingTool, CoreDiameterType, CornerRadiusType, CounterBore, CounterSink,
    DoveMill, Drill, EndMill, FaceMill, GenericRevolvedTool, LolMill, Measurable, Mount,
    PartDefinition, RadMill, Reamer, RightHandTap, ShaftGeometry, SlotMill, SolidDefinition,
    SphereMill, SpotDrill, TaperMill, ThreadDirection, ThreadMillSingleForm,
    ThreadTap, Tool, ToolPartFlags, Units, WireTool,
};

const TOL: f64 = 1e-9;

fn holder() -> PartDefinition {
    PartDefinition::holder_as_cylinder(40.0, 60.0, Units::Metric).unwrap()
}

fn arbor() -> PartDefinition {
    PartDefinition::arbor_as_cylinder(16.0, 25.0, Units::Metric).unwrap()
}

fn shaft(diameter: f64, flute: f64, shoulder: f64) -> ShaftGeometry {
    ShaftGeometry::new(diameter, holder(), flute, arbor(), shoulder, Units::Metric).unwrap()
}

fn catalogue() -> Vec<Tool> {
    let units = Units::Metric;
    let mount = Mount::new(holder(), arbor()).unwrap();
    let blade = ChainSawBlade {
        length: 300.0,
        straight_length: 250.0,
        width: 40.0,
        upper_width: 50.0,
        thickness: 8.0,
        corner_radius: 20.0,
    };
    let generic = GenericRevolvedTool::from_legacy(
        holder(),
        arbor(),
        PartDefinition::non_cutting(SolidDefinition::revolved_cylinder(6.0, 30.0).unwrap(), units),
        PartDefinition::cutting(SolidDefinition::revolved_cylinder(6.0, 15.0).unwrap(), units),
        units,
    )
    .unwrap();

    vec![
        EndMill::new(shaft(10.0, 30.0, 50.0)).into(),
        SphereMill::new(shaft(10.0, 20.0, 40.0)).into(),
        BullMill::new(shaft(10.0, 20.0, 40.0), 2.0).unwrap().into(),
        RadMill::new(shaft(10.0, 20.0, 40.0), 2.0).unwrap().into(),
        SlotMill::new(shaft(50.0, 20.0, 40.0), 3.0, CornerRadiusType::Full).unwrap().into(),
        FaceMill::new(shaft(20.0, 10.0, 25.0), 60.0, 45.0, 1.0, CornerRadiusType::Corner)
            .unwrap()
            .into(),
        ChamferMill::new(shaft(4.0, 10.0, 30.0), 20.0, 45.0, 0.5, CornerRadiusType::Full)
            .unwrap()
            .into(),
        TaperMill::new(shaft(10.0, 20.0, 40.0), 5.0, 1.0, CornerRadiusType::Corner)
            .unwrap()
            .into(),
        DoveMill::new(shaft(20.0, 8.0, 30.0), 45.0, 12.0, 1.0, CornerRadiusType::Full)
            .unwrap()
            .into(),
        LolMill::new(shaft(10.0, 8.0, 30.0), 9.0).unwrap().into(),
        BarrelMill::new(shaft(10.0, 20.0, 40.0), 50.0, 12.0, 1.0).unwrap().into(),
        Drill::new(shaft(6.0, 30.0, 50.0), 118.0).unwrap().into(),
        SpotDrill::new(shaft(10.0, 5.0, 20.0), 90.0).unwrap().into(),
        CenterDrill::new(shaft(8.0, 10.0, 40.0), 118.0, 60.0, 3.0, 4.0).unwrap().into(),
        CounterSink::new(shaft(12.0, 6.0, 40.0), 90.0, 2.0, 0.0, CornerRadiusType::Full)
            .unwrap()
            .into(),
        CounterBore::new(shaft(12.0, 10.0, 40.0)).into(),
        Reamer::new(shaft(6.0, 20.0, 40.0), 1.0).unwrap().into(),
        RightHandTap::new(shaft(8.0, 20.0, 40.0), 120.0, 0.2, CornerRadiusType::Corner, 4.0)
            .unwrap()
            .into(),
        ThreadMillSingleForm::new(shaft(10.0, 20.0, 40.0), 7.0, 60.0, 1.5).unwrap().into(),
        ThreadTap::new(
            shaft(10.0, 20.0, 40.0),
            1.5,
            0.0,
            ThreadDirection::RightHanded,
            CoreDiameterType::Automatic,
        )
        .unwrap()
        .into(),
        generic.into(),
        WireTool::default().into(),
        ChainSawTool::new(blade, ChainSawType::Straight, mount.clone(), units)
            .unwrap()
            .into(),
        ChiselingTool::new(mount, 40.0, 5.0, 90.0, 2.0, 60.0, 4.0, units).unwrap().into(),
    ]
}

fn single_roles() -> [ToolPartFlags; 4] {
    [
        ToolPartFlags::CUTTING,
        ToolPartFlags::NON_CUTTING,
        ToolPartFlags::ARBOR,
        ToolPartFlags::HOLDER,
    ]
}

#[test]
fn test_union_of_single_roles_is_full_box() {
    for tool in catalogue() {
        let full = tool.tool_part_bounding_box(ToolPartFlags::ALL);
        let union = single_roles()
            .iter()
            .fold(BoundingBox3d::empty(), |acc, flags| {
                acc.union(&tool.tool_part_bounding_box(*flags))
            });
        assert!(full.approx_eq(&union, TOL), "{}: {} != {}", tool.tool_type(), full, union);
    }
}

#[test]
fn test_selection_union_is_decomposable() {
    for tool in catalogue() {
        let shank = tool.tool_part_bounding_box(ToolPartFlags::CUTTING | ToolPartFlags::NON_CUTTING);
        let split = tool
            .tool_part_bounding_box(ToolPartFlags::CUTTING)
            .union(&tool.tool_part_bounding_box(ToolPartFlags::NON_CUTTING));
        assert!(shank.approx_eq(&split, TOL), "{}", tool.tool_type());

        let mounted = tool.tool_part_bounding_box(ToolPartFlags::ALL_EXCLUDING_HOLDER);
        let split = shank.union(&tool.tool_part_bounding_box(ToolPartFlags::ARBOR));
        assert!(mounted.approx_eq(&split, TOL), "{}", tool.tool_type());
    }
}

#[test]
fn test_empty_selection_is_empty_box() {
    for tool in catalogue() {
        assert!(tool.tool_part_bounding_box(ToolPartFlags::NONE).is_empty());
    }
}

#[test]
fn test_tip_sits_at_origin() {
    for tool in catalogue() {
        let cutting = tool.tool_part_bounding_box(ToolPartFlags::CUTTING);
        let min = cutting.min().unwrap();
        assert!(min.z.abs() <= TOL, "{} tip at {}", tool.tool_type(), min.z);
    }
}

#[test]
fn test_scale_round_trip() {
    for tool in catalogue() {
        let mut scaled = tool.clone();
        scaled.set_units(Units::Imperial);
        assert_eq!(scaled.units(), Units::Imperial);
        scaled.set_units(Units::Metric);
        assert_eq!(scaled.units(), Units::Metric);

        let before = tool.tool_part_bounding_box(ToolPartFlags::ALL);
        let after = scaled.tool_part_bounding_box(ToolPartFlags::ALL);
        assert!(before.approx_eq(&after, 1e-6), "{}", tool.tool_type());
        assert!((tool.tool_diameter() - scaled.tool_diameter()).abs() <= 1e-9);
    }
}

#[test]
fn test_scale_multiplies_boxes() {
    for tool in catalogue() {
        let mut scaled = tool.clone();
        scaled.scale(Units::Metric, 2.0);
        let expected = tool.tool_part_bounding_box(ToolPartFlags::ALL).scaled(2.0);
        let actual = scaled.tool_part_bounding_box(ToolPartFlags::ALL);
        assert!(expected.approx_eq(&actual, 1e-6), "{}", tool.tool_type());
    }
}

#[test]
fn test_relabel_keeps_values() {
    let mut tool = catalogue().remove(0);
    let before = tool.tool_part_bounding_box(ToolPartFlags::ALL);
    tool.relabel_units(Units::Imperial);
    assert_eq!(tool.units(), Units::Imperial);
    assert_eq!(tool.tool_part_bounding_box(ToolPartFlags::ALL), before);
}

#[test]
fn test_every_tool_has_a_dump() {
    for tool in catalogue() {
        let dump = tool.to_string();
        assert!(dump.starts_with(&tool.tool_type().to_string()), "{}", dump);
    }
}

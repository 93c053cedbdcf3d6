use approx::assert_relative_eq;
use cutterkit_core::{
    stack_bounding_box, Measurable, PartDefinition, PartRole, SolidDefinition, ToolPartFlags,
    Units,
};

fn tool_parts() -> Vec<PartDefinition> {
    let units = Units::Metric;
    vec![
        PartDefinition::cutting(SolidDefinition::revolved_cylinder(10.0, 30.0).unwrap(), units),
        PartDefinition::non_cutting(
            SolidDefinition::revolved_truncated_cone(10.0, 12.0, 20.0).unwrap(),
            units,
        ),
        PartDefinition::arbor_as_cylinder(16.0, 25.0, units).unwrap(),
        PartDefinition::holder_as_cylinder(40.0, 60.0, units).unwrap(),
    ]
}

fn stacked(parts: &[PartDefinition], selection: ToolPartFlags) -> cutterkit_core::BoundingBox3d {
    stack_bounding_box(selection, parts.iter().map(|p| (p.role(), p.bounding_box())))
}

#[test]
fn test_stacked_heights() {
    let parts = tool_parts();
    assert_relative_eq!(stacked(&parts, ToolPartFlags::ALL).size_z(), 135.0);
    assert_relative_eq!(stacked(&parts, ToolPartFlags::ALL_EXCLUDING_HOLDER).size_z(), 75.0);

    let holder = stacked(&parts, ToolPartFlags::HOLDER);
    assert_relative_eq!(holder.min().unwrap().z, 75.0);
    assert_relative_eq!(holder.size_x(), 40.0);
}

#[test]
fn test_scale_round_trip() {
    let mut parts = tool_parts();
    let before = stacked(&parts, ToolPartFlags::ALL);
    for part in parts.iter_mut() {
        part.set_units(Units::Imperial);
        assert_eq!(part.units(), Units::Imperial);
    }
    assert_relative_eq!(stacked(&parts, ToolPartFlags::ALL).size_z(), 135.0 / 25.4, epsilon = 1e-9);
    for part in parts.iter_mut() {
        part.set_units(Units::Metric);
    }
    assert!(stacked(&parts, ToolPartFlags::ALL).approx_eq(&before, 1e-9));
}

#[test]
fn test_part_serde_round_trip() {
    let part = PartDefinition::holder_as_cylinder(40.0, 60.0, Units::Imperial).unwrap();
    let json = serde_json::to_string(&part).unwrap();
    let back: PartDefinition = serde_json::from_str(&json).unwrap();
    assert_eq!(back, part);
    assert_eq!(back.role(), PartRole::Holder);
}

#[test]
fn test_empty_parts_are_skipped() {
    let units = Units::Metric;
    let parts = vec![
        PartDefinition::cutting(SolidDefinition::revolved_cylinder(10.0, 30.0).unwrap(), units),
        PartDefinition::empty(PartRole::NonCutting, units),
        PartDefinition::empty(PartRole::Arbor, units),
        PartDefinition::holder_as_cylinder(40.0, 60.0, units).unwrap(),
    ];
    let holder = stacked(&parts, ToolPartFlags::HOLDER);
    assert_relative_eq!(holder.min().unwrap().z, 30.0);
    assert!(stacked(&parts, ToolPartFlags::NON_CUTTING).is_empty());
}

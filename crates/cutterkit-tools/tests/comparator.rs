use cutterkit_tools::{
    compare_tools, BullMill, CornerRadiusType, Drill, EndMill, PartDefinition, ShaftGeometry,
    SlotMill, Tool, ToolComparator, Units, WireTool,
};

fn shaft(diameter: f64) -> ShaftGeometry {
    ShaftGeometry::cylindrical(diameter, 20.0, 40.0, Units::Metric).unwrap()
}

fn tools() -> Vec<Tool> {
    vec![
        Tool::from(EndMill::new(shaft(10.0))),
        Tool::from(EndMill::new(shaft(12.0))),
        Tool::from(BullMill::new(shaft(10.0), 0.0).unwrap()),
        Tool::from(BullMill::new(shaft(10.0), 2.0).unwrap()),
        Tool::from(SlotMill::new(shaft(30.0), 2.0, CornerRadiusType::Corner).unwrap()),
        Tool::from(Drill::new(shaft(10.0), 118.0).unwrap()),
        Tool::from(WireTool::default()),
    ]
}

#[test]
fn test_reflexive() {
    for tool in tools() {
        assert!(compare_tools(&tool, &tool), "{}", tool.tool_type());
        assert!(compare_tools(&tool, &tool.clone()));
    }
}

#[test]
fn test_symmetric() {
    let tools = tools();
    for a in &tools {
        for b in &tools {
            assert_eq!(compare_tools(a, b), compare_tools(b, a));
        }
    }
}

#[test]
fn test_distinct_catalogue_entries_differ() {
    let tools = tools();
    for (i, a) in tools.iter().enumerate() {
        for (j, b) in tools.iter().enumerate() {
            assert_eq!(compare_tools(a, b), i == j, "{} vs {}", a.tool_type(), b.tool_type());
        }
    }
}

#[test]
fn test_type_exact() {
    // identical geometry, different types
    let end = Tool::from(EndMill::new(shaft(10.0)));
    let bull = Tool::from(BullMill::new(shaft(10.0), 0.0).unwrap());
    assert_eq!(
        end.tool_part_bounding_box(cutterkit_tools::ToolPartFlags::ALL),
        bull.tool_part_bounding_box(cutterkit_tools::ToolPartFlags::ALL)
    );
    assert!(!ToolComparator.equal(&end, &bull));
}

#[test]
fn test_parts_take_part_in_equality() {
    let with_holder = ShaftGeometry::new(
        10.0,
        PartDefinition::holder_as_cylinder(40.0, 60.0, Units::Metric).unwrap(),
        20.0,
        PartDefinition::empty(cutterkit_tools::PartRole::Arbor, Units::Metric),
        40.0,
        Units::Metric,
    )
    .unwrap();
    let a = Tool::from(EndMill::new(with_holder));
    let b = Tool::from(EndMill::new(shaft(10.0)));
    assert!(!compare_tools(&a, &b));
}

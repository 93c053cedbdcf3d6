use cutterkit_core::{ToolPartFlags, Units};
use cutterkit_settings::{Config, ConfigError, SettingsError, ToolKind};
use cutterkit_tools::{safe_cast, SlotMill, ToolId, ToolType};
use std::io::Write;
use tempfile::{Builder, TempDir};

#[test]
fn test_toml_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tools.toml");
    let config = Config::sample();
    config.save_to_file(&path).unwrap();
    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_json_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tools.json");
    let config = Config::sample();
    config.save_to_file(&path).unwrap();
    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tools.yaml");
    let err = Config::sample().save_to_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Config(ConfigError::UnsupportedFormat(_))));
    assert!(!path.exists());
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = Config::load_from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, SettingsError::Io(_)));
}

#[test]
fn test_hand_written_toml() {
    let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
    write!(
        file,
        r#"
[units]
system = "metric"

[defaults]
holder_diameter = 32.0
holder_length = 50.0
arbor_diameter = 12.0
arbor_length = 0.0

[[tools]]
id = "slot"
name = "Full radius slot mill"
number = 7
diameter = 40.0
flute_length = 20.0
shoulder_length = 35.0
type = "slot_mill"
corner_radius = 0.0
corner_radius_type = "full"

[[tools]]
id = "em"
name = "End mill with own holder"
diameter = 10.0
flute_length = 30.0
shoulder_length = 50.0
type = "end_mill"

[tools.holder]
diameter = 25.0
length = 40.0
"#
    )
    .unwrap();

    let config = Config::load_from_file(file.path()).unwrap();
    assert_eq!(config.units.system, Units::Metric);
    assert_eq!(config.tools.len(), 2);
    assert!(matches!(config.tools[1].kind, ToolKind::EndMill));

    let library = config.build_library().unwrap();
    let slot = library.get_tool(&ToolId::from("slot")).unwrap();
    assert_eq!(slot.number, 7);
    assert_eq!(safe_cast::<SlotMill>(&slot.tool).unwrap().corner_radius(), 10.0);
    // no arbor: the holder sits directly on the shoulder
    assert_eq!(slot.tool.tool_part_length(ToolPartFlags::ALL), 85.0);

    let end_mill = library.get_tool(&ToolId::from("em")).unwrap();
    assert_eq!(end_mill.number, 8);
    assert_eq!(end_mill.tool.tool_type(), ToolType::EndMill);
    assert_eq!(end_mill.tool.holder_length(), 40.0);
}

#[test]
fn test_invalid_tool_stops_library_build() {
    let mut file = Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"{{
  "tools": [
    {{ "id": "bad", "name": "Negative", "diameter": -1.0, "flute_length": 30.0,
       "shoulder_length": 50.0, "type": "end_mill" }}
  ]
}}"#
    )
    .unwrap();

    let config = Config::load_from_file(file.path()).unwrap();
    match config.build_library() {
        Err(SettingsError::InvalidTool { id, source }) => {
            assert_eq!(id, "bad");
            assert!(source.is_invalid_parameter());
        }
        other => panic!("unexpected result: {:?}", other.map(|l| l.len())),
    }
}

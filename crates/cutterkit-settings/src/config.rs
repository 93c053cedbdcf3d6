//! Configuration for cutterkit
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats.
//!
//! Configuration is organized into logical sections:
//! - Unit system used for every tool in the file
//! - Default holder and arbor for tools that do not name their own
//! - A declarative tool list, built into a [`ToolLibrary`]

use crate::error::{ConfigError, SettingsError, SettingsResult};
use cutterkit_core::{PartDefinition, PartRole, Units};
use cutterkit_tools::{
    BullMill, ChamferMill, CornerRadiusType, Drill, EndMill, FaceMill, LeftHandTap, Reamer,
    RightHandTap, ShaftGeometry, SlotMill, SphereMill, SpotDrill, TaperMill, Tool,
    ToolEntry, ToolLibrary, WireTool,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Unit settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct UnitsSettings {
    /// Unit system of every length in the file
    pub system: Units,
}

/// Holder and arbor used when a tool entry omits them
///
/// A length of 0 means the tool has no such part.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DefaultPartSettings {
    /// Holder diameter
    pub holder_diameter: f64,
    /// Holder length
    pub holder_length: f64,
    /// Arbor diameter
    pub arbor_diameter: f64,
    /// Arbor length
    pub arbor_length: f64,
}

impl Default for DefaultPartSettings {
    fn default() -> Self {
        Self {
            holder_diameter: 40.0,
            holder_length: 60.0,
            arbor_diameter: 16.0,
            arbor_length: 25.0,
        }
    }
}

impl DefaultPartSettings {
    /// Default holder in `units`
    pub fn holder(&self, units: Units) -> cutterkit_core::Result<PartDefinition> {
        CylinderSpec::new(self.holder_diameter, self.holder_length).part(PartRole::Holder, units)
    }

    /// Default arbor in `units`
    pub fn arbor(&self, units: Units) -> cutterkit_core::Result<PartDefinition> {
        CylinderSpec::new(self.arbor_diameter, self.arbor_length).part(PartRole::Arbor, units)
    }
}

/// Cylindrical holder or arbor override
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CylinderSpec {
    /// Cylinder diameter
    pub diameter: f64,
    /// Cylinder length, 0 for no part
    pub length: f64,
}

impl CylinderSpec {
    /// Cylinder of `diameter` over `length`
    pub fn new(diameter: f64, length: f64) -> Self {
        Self { diameter, length }
    }

    fn part(&self, role: PartRole, units: Units) -> cutterkit_core::Result<PartDefinition> {
        if self.length == 0.0 {
            return Ok(PartDefinition::empty(role, units));
        }
        match role {
            PartRole::Arbor => PartDefinition::arbor_as_cylinder(self.diameter, self.length, units),
            _ => PartDefinition::holder_as_cylinder(self.diameter, self.length, units),
        }
    }
}

/// Hand of a tap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TapHand {
    /// Left hand thread
    Left,
    /// Right hand thread
    #[default]
    Right,
}

fn default_tip_angle() -> f64 {
    118.0
}

fn default_reamer_factor() -> f64 {
    1.0
}

fn default_wire_length() -> f64 {
    100.0
}

/// Tool kind and its type specific parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToolKind {
    /// Flat end mill
    EndMill,
    /// Bull nose mill
    BullMill { corner_radius: f64 },
    /// Ball end mill
    SphereMill,
    /// Slot mill
    SlotMill {
        corner_radius: f64,
        #[serde(default)]
        corner_radius_type: CornerRadiusType,
    },
    /// Face mill
    FaceMill {
        outside_diameter: f64,
        taper_angle: f64,
        corner_radius: f64,
        #[serde(default)]
        corner_radius_type: CornerRadiusType,
    },
    /// Chamfer mill
    ChamferMill {
        outside_diameter: f64,
        taper_angle: f64,
        corner_radius: f64,
        #[serde(default)]
        corner_radius_type: CornerRadiusType,
    },
    /// Tapered mill
    TaperMill {
        taper_angle: f64,
        corner_radius: f64,
        #[serde(default)]
        corner_radius_type: CornerRadiusType,
    },
    /// Twist drill
    Drill {
        #[serde(default = "default_tip_angle")]
        tip_angle: f64,
    },
    /// Spot drill
    SpotDrill { tip_angle: f64 },
    /// Reamer
    Reamer {
        #[serde(default = "default_reamer_factor")]
        factor: f64,
    },
    /// Tap of either hand
    Tap {
        #[serde(default)]
        hand: TapHand,
        #[serde(default = "default_tip_angle")]
        tip_angle: f64,
        #[serde(default)]
        corner_radius: f64,
        #[serde(default)]
        corner_radius_type: CornerRadiusType,
        threads_number: f64,
    },
    /// Wire, `diameter` is the wire diameter
    Wire {
        #[serde(default = "default_wire_length")]
        wire_length: f64,
        #[serde(default)]
        infinite_length: bool,
    },
}

/// One tool entry of a configuration file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSpec {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Tool number, the next free number when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    /// Tool diameter
    pub diameter: f64,
    /// Flute length
    #[serde(default)]
    pub flute_length: f64,
    /// Shoulder length
    #[serde(default)]
    pub shoulder_length: f64,
    /// Holder override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holder: Option<CylinderSpec>,
    /// Arbor override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arbor: Option<CylinderSpec>,
    /// Kind and kind specific parameters
    #[serde(flatten)]
    pub kind: ToolKind,
}

impl ToolSpec {
    /// Build the tool through the validating constructors
    pub fn build(
        &self,
        defaults: &DefaultPartSettings,
        units: Units,
    ) -> cutterkit_core::Result<Tool> {
        let tool: Tool = match self.kind {
            ToolKind::EndMill => EndMill::new(self.shaft(defaults, units)?).into(),
            ToolKind::BullMill { corner_radius } => {
                BullMill::new(self.shaft(defaults, units)?, corner_radius)?.into()
            }
            ToolKind::SphereMill => SphereMill::new(self.shaft(defaults, units)?).into(),
            ToolKind::SlotMill {
                corner_radius,
                corner_radius_type,
            } => SlotMill::new(self.shaft(defaults, units)?, corner_radius, corner_radius_type)?
                .into(),
            ToolKind::FaceMill {
                outside_diameter,
                taper_angle,
                corner_radius,
                corner_radius_type,
            } => FaceMill::new(
                self.shaft(defaults, units)?,
                outside_diameter,
                taper_angle,
                corner_radius,
                corner_radius_type,
            )?
            .into(),
            ToolKind::ChamferMill {
                outside_diameter,
                taper_angle,
                corner_radius,
                corner_radius_type,
            } => ChamferMill::new(
                self.shaft(defaults, units)?,
                outside_diameter,
                taper_angle,
                corner_radius,
                corner_radius_type,
            )?
            .into(),
            ToolKind::TaperMill {
                taper_angle,
                corner_radius,
                corner_radius_type,
            } => TaperMill::new(
                self.shaft(defaults, units)?,
                taper_angle,
                corner_radius,
                corner_radius_type,
            )?
            .into(),
            ToolKind::Drill { tip_angle } => {
                Drill::new(self.shaft(defaults, units)?, tip_angle)?.into()
            }
            ToolKind::SpotDrill { tip_angle } => {
                SpotDrill::new(self.shaft(defaults, units)?, tip_angle)?.into()
            }
            ToolKind::Reamer { factor } => {
                Reamer::new(self.shaft(defaults, units)?, factor)?.into()
            }
            ToolKind::Tap {
                hand,
                tip_angle,
                corner_radius,
                corner_radius_type,
                threads_number,
            } => {
                let shaft = self.shaft(defaults, units)?;
                match hand {
                    TapHand::Left => LeftHandTap::new(
                        shaft,
                        tip_angle,
                        corner_radius,
                        corner_radius_type,
                        threads_number,
                    )?
                    .into(),
                    TapHand::Right => RightHandTap::new(
                        shaft,
                        tip_angle,
                        corner_radius,
                        corner_radius_type,
                        threads_number,
                    )?
                    .into(),
                }
            }
            ToolKind::Wire {
                wire_length,
                infinite_length,
            } => WireTool::new(self.diameter, wire_length, infinite_length, units)?.into(),
        };
        debug!(id = %self.id, tool_type = %tool.tool_type(), "built tool from config");
        Ok(tool)
    }

    fn shaft(
        &self,
        defaults: &DefaultPartSettings,
        units: Units,
    ) -> cutterkit_core::Result<ShaftGeometry> {
        let holder = match &self.holder {
            Some(spec) => spec.part(PartRole::Holder, units)?,
            None => defaults.holder(units)?,
        };
        let arbor = match &self.arbor {
            Some(spec) => spec.part(PartRole::Arbor, units)?,
            None => defaults.arbor(units)?,
        };
        ShaftGeometry::new(
            self.diameter,
            holder,
            self.flute_length,
            arbor,
            self.shoulder_length,
            units,
        )
    }
}

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => {
                Err(ConfigError::UnsupportedFormat(other.unwrap_or("none").to_string()).into())
            }
        }
    }
}

/// Complete cutterkit configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Unit settings
    #[serde(default)]
    pub units: UnitsSettings,
    /// Default holder and arbor
    #[serde(default)]
    pub defaults: DefaultPartSettings,
    /// Tool entries
    #[serde(default)]
    pub tools: Vec<ToolSpec>,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Small metric configuration with one tool of several kinds
    pub fn sample() -> Self {
        let spec = |id: &str, name: &str, diameter, flute_length, shoulder_length, kind| ToolSpec {
            id: id.to_string(),
            name: name.to_string(),
            number: None,
            diameter,
            flute_length,
            shoulder_length,
            holder: None,
            arbor: None,
            kind,
        };
        Self {
            tools: vec![
                spec("em10", "10mm Flat End Mill", 10.0, 30.0, 50.0, ToolKind::EndMill),
                spec(
                    "bull6",
                    "6mm Bull Nose Mill",
                    6.0,
                    18.0,
                    40.0,
                    ToolKind::BullMill { corner_radius: 1.0 },
                ),
                spec(
                    "slot50",
                    "50mm Slot Mill",
                    50.0,
                    20.0,
                    40.0,
                    ToolKind::SlotMill {
                        corner_radius: 0.0,
                        corner_radius_type: CornerRadiusType::Full,
                    },
                ),
                spec(
                    "drill6",
                    "6mm Drill",
                    6.0,
                    30.0,
                    50.0,
                    ToolKind::Drill { tip_angle: 118.0 },
                ),
                spec(
                    "wire",
                    "0.25mm Wire",
                    0.25,
                    0.0,
                    0.0,
                    ToolKind::Wire {
                        wire_length: 200.0,
                        infinite_length: true,
                    },
                ),
            ],
            ..Self::default()
        }
    }

    /// Default configuration file location
    pub fn default_config_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("cutterkit").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory(
                    "no configuration directory on this platform".to_string(),
                )
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = FileFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            FileFormat::Json => serde_json::from_str(&content)?,
            FileFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!(path = %path.display(), tools = config.tools.len(), "loaded config");
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match FileFormat::from_path(path)? {
            FileFormat::Json => serde_json::to_string_pretty(self)?,
            FileFormat::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let d = &self.defaults;
        for (key, diameter, length) in [
            ("defaults.holder", d.holder_diameter, d.holder_length),
            ("defaults.arbor", d.arbor_diameter, d.arbor_length),
        ] {
            if !length.is_finite() || length < 0.0 {
                return Err(out_of_range(format!("{}_length", key), length));
            }
            if length > 0.0 && (!diameter.is_finite() || diameter <= 0.0) {
                return Err(out_of_range(format!("{}_diameter", key), diameter));
            }
        }

        let mut ids = HashSet::new();
        for spec in &self.tools {
            if spec.id.trim().is_empty() {
                return Err(SettingsError::InvalidSetting {
                    key: "tools.id".to_string(),
                    reason: format!("tool '{}' has an empty id", spec.name),
                });
            }
            if !ids.insert(spec.id.as_str()) {
                return Err(ConfigError::DuplicateToolId(spec.id.clone()).into());
            }
            // u32::MAX has no successor to hand out as the next free number
            if let Some(number @ u32::MAX) = spec.number {
                return Err(out_of_range(format!("tools.{}.number", spec.id), f64::from(number)));
            }
        }

        Ok(())
    }

    /// Build every tool entry into a library
    ///
    /// Validates first, then stops at the first entry that fails to build.
    pub fn build_library(&self) -> SettingsResult<ToolLibrary> {
        self.validate()?;
        let units = self.units.system;
        let mut library = ToolLibrary::new();
        for spec in &self.tools {
            let tool = spec.build(&self.defaults, units).map_err(|source| {
                warn!(id = %spec.id, error = %source, "rejecting tool entry");
                SettingsError::InvalidTool {
                    id: spec.id.clone(),
                    source,
                }
            })?;
            let number = spec.number.unwrap_or_else(|| library.next_tool_number());
            library.add_tool(ToolEntry::new(spec.id.as_str(), number, spec.name.as_str(), tool));
        }
        Ok(library)
    }
}

fn out_of_range(key: String, value: f64) -> SettingsError {
    warn!(key = %key, value, "configuration value out of range");
    ConfigError::ValueOutOfRange {
        key,
        value: value.to_string(),
    }
    .into()
}

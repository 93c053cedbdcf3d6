//! cutterkit Settings Crate
//!
//! Handles configuration files: the unit system, the default holder and
//! arbor, and the declarative tool list that is built into a tool library.

pub mod config;
pub mod error;

pub use config::{
    Config, CylinderSpec, DefaultPartSettings, TapHand, ToolKind, ToolSpec, UnitsSettings,
};
pub use error::{ConfigError, SettingsError, SettingsResult};

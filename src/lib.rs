//! # cutterkit
//!
//! Geometric model of the cutting tools used by CNC machines:
//! - Typed revolved tools (mills, drills, taps, thread mills, grinders, barrel cutters)
//! - Part based tools (generic revolved, extruded, sawing and free form tools)
//! - Wire, chain saw, optic diamond, speed shape and chiseling tools
//!
//! ## Architecture
//!
//! cutterkit is organized as a workspace with multiple crates:
//!
//! 1. **cutterkit-core** (`model`) - Units, bounding boxes, solids, part definitions, errors
//! 2. **cutterkit-tools** - Tool catalogue, casting, comparison, queries, tool library
//! 3. **cutterkit-settings** - Configuration files describing a tool library
//! 4. **cutterkit** - Main binary that loads a configuration and reports its tools

pub use cutterkit_core as model;
pub use cutterkit_settings as settings;
pub use cutterkit_tools as tools;

pub use cutterkit_core::{
    BoundingBox3d, CastError, Error, Measurable, PartDefinition, PartRole, Result,
    SolidDefinition, ToolError, ToolPartFlags, Units,
};

pub use cutterkit_tools::{
    can_cast, compare_tools, safe_cast, safe_cast_mut, Tool, ToolBranch, ToolCast,
    ToolComparator, ToolEntry, ToolId, ToolLibrary, ToolRepresentation, ToolType,
};

pub use cutterkit_settings::{Config, SettingsError, SettingsResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human readable multi line output
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(anyhow::anyhow!("unknown log format: {}", other)),
        }
    }
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    init_logging_with(LogFormat::Pretty)
}

/// Initialize logging with the given output format
pub fn init_logging_with(format: LogFormat) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    match format {
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(true)
                .with_level(true)
                .with_thread_ids(true)
                .with_thread_names(true)
                .with_line_number(true)
                .pretty();

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(true)
                .with_level(true)
                .with_line_number(true)
                .json();

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
        assert!(!BUILD_DATE.is_empty());
    }
}

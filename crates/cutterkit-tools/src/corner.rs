//! Corner radius policy
//!
//! A user picks a corner radius *type* and a *value*. The effective radius is
//! 0 for [`CornerRadiusType::None`], a tool-specific maximum for
//! [`CornerRadiusType::Full`], and the value itself for
//! [`CornerRadiusType::Corner`].

use crate::validate;
use cutterkit_core::{Result, ToolError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Corner radius type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CornerRadiusType {
    /// Sharp corner, radius forced to 0
    None,
    /// Explicit corner radius
    #[default]
    Corner,
    /// Largest radius the tool shape allows
    Full,
}

impl CornerRadiusType {
    /// Effective radius for this type
    ///
    /// * `value` - user supplied radius, used only for `Corner`
    /// * `full_value` - tool-specific maximal radius, used only for `Full`
    pub fn resolve(&self, value: f64, full_value: f64) -> f64 {
        match self {
            CornerRadiusType::None => 0.0,
            CornerRadiusType::Corner => value,
            CornerRadiusType::Full => full_value,
        }
    }

    /// Type that actually describes `value`
    ///
    /// A `Corner` type with a zero radius is a sharp corner.
    pub fn compute(&self, value: f64) -> CornerRadiusType {
        match self {
            CornerRadiusType::Corner if value == 0.0 => CornerRadiusType::None,
            other => *other,
        }
    }

    /// Validate a user supplied radius for this type
    ///
    /// The value must be >= 0 and, for `Corner`, strictly positive when
    /// `strict_corner` is set.
    pub fn validate(&self, value: f64, strict_corner: bool) -> Result<()> {
        validate::non_negative("corner_radius", value)?;
        if strict_corner && *self == CornerRadiusType::Corner && value <= 0.0 {
            return Err(ToolError::invalid(
                "corner_radius",
                value,
                "must be greater than 0 for corner radius type 'corner'",
            )
            .into());
        }
        Ok(())
    }
}

impl fmt::Display for CornerRadiusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Corner => write!(f, "corner"),
            Self::Full => write!(f, "full"),
        }
    }
}

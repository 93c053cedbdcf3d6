//! Parameter validation shared by tool constructors and setters

use cutterkit_core::{Result, ToolError};

/// Fail unless `value` is finite
pub fn finite(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ToolError::invalid(name, value, "must be a finite number").into());
    }
    Ok(())
}

/// Fail unless `value` > 0
pub fn positive(name: &str, value: f64) -> Result<()> {
    finite(name, value)?;
    if value <= 0.0 {
        return Err(ToolError::invalid(name, value, "must be greater than 0").into());
    }
    Ok(())
}

/// Fail unless `value` >= 0
pub fn non_negative(name: &str, value: f64) -> Result<()> {
    finite(name, value)?;
    if value < 0.0 {
        return Err(ToolError::invalid(name, value, "must be greater than or equal to 0").into());
    }
    Ok(())
}

/// Fail unless `min <= value <= max`
pub fn in_range(name: &str, value: f64, min: f64, max: f64) -> Result<()> {
    finite(name, value)?;
    if value < min || value > max {
        return Err(ToolError::invalid(
            name,
            value,
            format!("must be between {} and {}", min, max),
        )
        .into());
    }
    Ok(())
}

/// Fail unless `value <= limit`, naming both parameters
pub fn at_most(name: &str, value: f64, limit_name: &str, limit: f64) -> Result<()> {
    if value > limit {
        return Err(ToolError::infeasible(
            format!("{}, {}", name, limit_name),
            format!("{} ({}) must not exceed {} ({})", name, value, limit_name, limit),
        )
        .into());
    }
    Ok(())
}

/// Fail unless `value < limit`, naming both parameters
pub fn less_than(name: &str, value: f64, limit_name: &str, limit: f64) -> Result<()> {
    if value >= limit {
        return Err(ToolError::infeasible(
            format!("{}, {}", name, limit_name),
            format!("{} ({}) must be less than {} ({})", name, value, limit_name, limit),
        )
        .into());
    }
    Ok(())
}

/// Taper angles are limited to [0.1, 89] degrees
pub fn taper_angle(value: f64) -> Result<()> {
    in_range("taper_angle", value, 0.1, 89.0)
}

/// Tip angles are limited to [1, 180] degrees
pub fn tip_angle(name: &str, value: f64) -> Result<()> {
    in_range(name, value, 1.0, 180.0)
}

/// A diameter must hold two corner radii
pub fn diameter_vs_corner_radius(diameter: f64, corner_radius: f64) -> Result<()> {
    if diameter < 2.0 * corner_radius {
        return Err(ToolError::infeasible(
            "diameter, corner_radius",
            format!(
                "diameter ({}) must be at least twice the corner radius ({})",
                diameter, corner_radius
            ),
        )
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive() {
        assert!(positive("diameter", 1.0).is_ok());
        assert!(positive("diameter", 0.0).is_err());
        assert!(positive("diameter", f64::INFINITY).is_err());
    }

    #[test]
    fn test_angle_ranges() {
        assert!(taper_angle(0.1).is_ok());
        assert!(taper_angle(89.0).is_ok());
        assert!(taper_angle(0.05).is_err());
        assert!(taper_angle(90.0).is_err());
        assert!(tip_angle("tip_angle", 180.0).is_ok());
        assert!(tip_angle("tip_angle", 0.5).is_err());
    }

    #[test]
    fn test_diameter_vs_corner_radius_is_infeasibility() {
        let err = diameter_vs_corner_radius(10.0, 5.5).unwrap_err();
        assert!(err.is_geometric_infeasibility());
        assert!(diameter_vs_corner_radius(10.0, 5.0).is_ok());
    }
}

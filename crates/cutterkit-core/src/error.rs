//! Error handling for cutterkit
//!
//! Provides the error taxonomy shared by every tool crate:
//! - Parameter errors (a numeric constraint violated at construction or in a setter)
//! - Geometric infeasibility (individually valid parameters that cannot coexist)
//! - Cast errors (a strict cast requested a type the tool is not)
//!
//! Dispatch over tools is an exhaustive `match`, so there is no error for an
//! unhandled tool kind.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Tool parameter error type
///
/// Raised synchronously by constructors and setters. Not recoverable locally;
/// the caller is expected to supply corrected input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ToolError {
    /// A single numeric constraint is violated
    #[error("Invalid parameter '{param}' = {value}: {reason}")]
    InvalidParameter {
        /// The parameter name.
        param: String,
        /// The rejected value.
        value: f64,
        /// Why the value was rejected.
        reason: String,
    },

    /// Two or more parameters are jointly infeasible
    #[error("Geometrically infeasible ({params}): {reason}")]
    GeometricInfeasibility {
        /// The parameters involved, comma separated.
        params: String,
        /// Why the combination cannot be built.
        reason: String,
    },
}

impl ToolError {
    /// Build an [`ToolError::InvalidParameter`]
    pub fn invalid(param: impl Into<String>, value: f64, reason: impl Into<String>) -> Self {
        ToolError::InvalidParameter {
            param: param.into(),
            value,
            reason: reason.into(),
        }
    }

    /// Build a [`ToolError::GeometricInfeasibility`]
    pub fn infeasible(params: impl Into<String>, reason: impl Into<String>) -> Self {
        ToolError::GeometricInfeasibility {
            params: params.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending parameter(s)
    pub fn param(&self) -> &str {
        match self {
            ToolError::InvalidParameter { param, .. } => param,
            ToolError::GeometricInfeasibility { params, .. } => params,
        }
    }
}

/// Cast error type
///
/// Raised by strict casts when the concrete tool type does not match.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CastError {
    /// The tool is not of the requested type
    #[error("Illegal casting: expected {expected}, found {actual}")]
    CastFailure {
        /// The requested type name.
        expected: String,
        /// The actual type name.
        actual: String,
    },
}

/// Main error type for cutterkit
///
/// A unified error type that can represent any error from the tool model.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Parameter or feasibility error
    #[error(transparent)]
    Tool(#[from] ToolError),

    /// Cast error
    #[error(transparent)]
    Cast(#[from] CastError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is an invalid-parameter error
    ///
    /// Geometric infeasibility is a stricter form of invalid parameter, so it
    /// also answers `true` here.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Error::Tool(_))
    }

    /// Check if this is a geometric infeasibility error
    pub fn is_geometric_infeasibility(&self) -> bool {
        matches!(
            self,
            Error::Tool(ToolError::GeometricInfeasibility { .. })
        )
    }

    /// Check if this is a cast failure
    pub fn is_cast_failure(&self) -> bool {
        matches!(self, Error::Cast(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = ToolError::invalid("diameter", -1.0, "must be greater than 0");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'diameter' = -1: must be greater than 0"
        );
        assert_eq!(err.param(), "diameter");
    }

    #[test]
    fn test_infeasibility_is_invalid_parameter() {
        let err: Error = ToolError::infeasible("taper_angle, shoulder_length", "cone misses shoulder").into();
        assert!(err.is_invalid_parameter());
        assert!(err.is_geometric_infeasibility());
        assert!(!err.is_cast_failure());
    }

    #[test]
    fn test_cast_failure_conversion() {
        let err: Error = CastError::CastFailure {
            expected: "End Mill".to_string(),
            actual: "Drill".to_string(),
        }
        .into();
        assert!(err.is_cast_failure());
        assert!(!err.is_invalid_parameter());
        assert_eq!(
            err.to_string(),
            "Illegal casting: expected End Mill, found Drill"
        );
    }
}

//! Validation errors raised while building or mutating a shape.

use miette::Diagnostic;
use thiserror::Error;

use crate::core::kind::ShapeKind;

/// Coarse classification of a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    InvalidName,
    InvalidDimension,
    UnknownDimension,
    DimensionCount,
}

/// A shape field was given a value it cannot hold.
///
/// Always fatal to the operation that raised it: no partially built shape is
/// ever returned alongside one of these.
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum ValidationError {
    #[error("shape name must be non-empty and non-blank (got {name:?})")]
    #[diagnostic(
        code(shape3d::validate::invalid_name),
        help("give the shape a name with at least one visible character")
    )]
    InvalidName { name: String },

    #[error("{field} must be finite and >= 0, got {value}")]
    #[diagnostic(
        code(shape3d::validate::invalid_dimension),
        help("dimensions are lengths; use 0 for a degenerate shape")
    )]
    InvalidDimension { field: &'static str, value: f64 },

    #[error("{kind} has no dimension named `{field}`")]
    #[diagnostic(code(shape3d::validate::unknown_dimension))]
    UnknownDimension { kind: ShapeKind, field: String },

    #[error("{kind} takes {expected} dimension(s), got {found}")]
    #[diagnostic(code(shape3d::validate::dimension_count))]
    DimensionCount {
        kind: ShapeKind,
        expected: usize,
        found: usize,
    },
}

impl ValidationError {
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            ValidationError::InvalidName { .. } => ValidationErrorKind::InvalidName,
            ValidationError::InvalidDimension { .. } => ValidationErrorKind::InvalidDimension,
            ValidationError::UnknownDimension { .. } => ValidationErrorKind::UnknownDimension,
            ValidationError::DimensionCount { .. } => ValidationErrorKind::DimensionCount,
        }
    }
}

/// Check a shape name, returning it unchanged when usable.
pub fn validate_name(name: &str) -> Result<&str, ValidationError> {
    if name.trim().is_empty() {
        tracing::error!("invalid shape name {:?}", name);
        return Err(ValidationError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(name)
}

/// Check a single dimension.
///
/// Negative and non-finite values are rejected. Zero is accepted and logged
/// as a degenerate boundary case.
pub fn validate_dimension(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() || value < 0.0 {
        tracing::error!("invalid {}: {}", field, value);
        return Err(ValidationError::InvalidDimension { field, value });
    }
    if value == 0.0 {
        tracing::warn!("{} is zero; shape is degenerate", field);
        return Ok(0.0);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_rejects_blank() {
        for name in ["", " ", "   ", "\t\n"] {
            let err = validate_name(name).unwrap_err();
            assert_eq!(err.kind(), ValidationErrorKind::InvalidName);
        }
        assert_eq!(validate_name("Ball").unwrap(), "Ball");
    }

    #[test]
    fn test_validate_dimension() {
        assert_eq!(validate_dimension("radius", 2.5).unwrap(), 2.5);
        assert_eq!(validate_dimension("radius", 0.0).unwrap(), 0.0);

        let err = validate_dimension("height", -1.0).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidDimension {
                field: "height",
                value: -1.0
            }
        );
        assert!(err.to_string().contains("height"));
        assert!(err.to_string().contains("-1"));
    }

    #[test]
    fn test_validate_dimension_rejects_nan() {
        let err = validate_dimension("side", f64::NAN).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::InvalidDimension);
    }

    #[test]
    fn test_validate_dimension_rejects_infinity() {
        for value in [f64::INFINITY, f64::NEG_INFINITY] {
            let err = validate_dimension("radius", value).unwrap_err();
            assert_eq!(
                err,
                ValidationError::InvalidDimension {
                    field: "radius",
                    value
                }
            );
        }
        assert!(validate_dimension("radius", f64::MAX).is_ok());
    }

    #[test]
    fn test_negative_zero_is_accepted() {
        // -0.0 compares equal to 0.0, so it is a degenerate length, not negative
        let side = validate_dimension("side", -0.0).unwrap();
        assert!(side.is_sign_positive());
    }
}

//! Right circular cone.
//!
//! Surface area is base plus lateral area, πr(r + l), with slant height
//! `l = hypot(r, h)`. `hypot` avoids squaring `r` and `h` separately, which
//! would overflow long before the result does.

use std::f64::consts::PI;

use crate::core::error::{validate_dimension, ValidationError};
use crate::core::kind::ShapeKind;
use crate::core::shape::{take_dimensions, Dimension, FromDimensions, Shape, Solid};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cone {
    radius: f64,
    height: f64,
}

impl Cone {
    pub fn new(name: &str, radius: f64, height: f64) -> Result<Shape<Cone>, ValidationError> {
        Shape::try_new(name, None, || Cone::from_dimensions(&[radius, height]))
    }

    pub fn with_color(
        name: &str,
        color: &str,
        radius: f64,
        height: f64,
    ) -> Result<Shape<Cone>, ValidationError> {
        Shape::try_new(name, Some(color), || Cone::from_dimensions(&[radius, height]))
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn slant_height(&self) -> f64 {
        self.radius.hypot(self.height)
    }

    pub fn set_radius(&mut self, radius: f64) -> Result<(), ValidationError> {
        self.radius = validate_dimension("radius", radius)?;
        Ok(())
    }

    pub fn set_height(&mut self, height: f64) -> Result<(), ValidationError> {
        self.height = validate_dimension("height", height)?;
        Ok(())
    }
}

impl FromDimensions for Cone {
    const KIND: ShapeKind = ShapeKind::Cone;
    const FIELDS: &'static [&'static str] = &["radius", "height"];

    fn from_dimensions(dims: &[f64]) -> Result<Self, ValidationError> {
        let [radius, height] = take_dimensions(Self::KIND, Self::FIELDS, dims)?;
        Ok(Cone { radius, height })
    }
}

impl Solid for Cone {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Cone
    }

    fn surface_area_formula(&self) -> f64 {
        PI * self.radius * (self.radius + self.slant_height())
    }

    fn volume_formula(&self) -> f64 {
        PI * self.radius * (self.radius * self.height) / 3.0
    }

    fn dimensions(&self) -> Vec<Dimension> {
        vec![
            Dimension::new("radius", self.radius),
            Dimension::new("height", self.height),
        ]
    }

    fn set_dimension(&mut self, field: &str, value: f64) -> Result<(), ValidationError> {
        match field {
            "radius" => self.set_radius(value),
            "height" => self.set_height(value),
            _ => Err(ValidationError::UnknownDimension {
                kind: ShapeKind::Cone,
                field: field.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::shape::Measure;

    const TOL: f64 = 1e-9;

    #[test]
    fn test_known_values_r3_h4() {
        // slant height is 5
        let c = Cone::with_color("Cone1", "Tan", 3.0, 4.0).unwrap();
        assert!((c.solid().slant_height() - 5.0).abs() < TOL);
        assert!((c.surface_area() - 24.0 * PI).abs() < TOL);
        assert!((c.volume() - 12.0 * PI).abs() < TOL);
    }

    #[test]
    fn test_zero_height_is_two_disks() {
        let c = Cone::new("Flat", 3.0, 0.0).unwrap();
        assert_eq!(c.volume(), 0.0);
        assert!((c.surface_area() - 18.0 * PI).abs() < TOL);
    }

    #[test]
    fn test_zero_radius() {
        let c = Cone::new("Needle", 0.0, 7.0).unwrap();
        assert_eq!(c.volume(), 0.0);
        assert_eq!(c.surface_area(), 0.0);
    }

    #[test]
    fn test_negative_radius_rejected() {
        let err = Cone::new("Bad", -3.0, 4.0).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidDimension {
                field: "radius",
                value: -3.0
            }
        );
    }

    #[test]
    fn test_very_large_values_are_finite() {
        let c = Cone::new("Huge", 1e100, 1e100).unwrap();
        assert!(c.volume().is_finite());
        assert!(c.surface_area().is_finite());
    }

    #[test]
    fn test_mixed_magnitudes_do_not_overflow() {
        let c = Cone::new("Plate", 1e200, 1e-200).unwrap();
        assert!(c.volume().is_finite());
        assert!((c.volume() / (PI * 1e200 / 3.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_slant_height_does_not_overflow() {
        // r² alone would overflow to infinity here
        let c = Cone::new("Wide", 1e200, 1.0).unwrap();
        assert!(c.solid().slant_height().is_finite());
    }
}

//! Sphere: surface area 4πr², volume (4/3)πr³.

use std::f64::consts::PI;

use crate::core::error::{validate_dimension, ValidationError};
use crate::core::kind::ShapeKind;
use crate::core::shape::{take_dimensions, Dimension, FromDimensions, Shape, Solid};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    radius: f64,
}

impl Sphere {
    pub fn new(name: &str, radius: f64) -> Result<Shape<Sphere>, ValidationError> {
        Shape::try_new(name, None, || Sphere::from_dimensions(&[radius]))
    }

    pub fn with_color(
        name: &str,
        color: &str,
        radius: f64,
    ) -> Result<Shape<Sphere>, ValidationError> {
        Shape::try_new(name, Some(color), || Sphere::from_dimensions(&[radius]))
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f64) -> Result<(), ValidationError> {
        self.radius = validate_dimension("radius", radius)?;
        Ok(())
    }
}

impl FromDimensions for Sphere {
    const KIND: ShapeKind = ShapeKind::Sphere;
    const FIELDS: &'static [&'static str] = &["radius"];

    fn from_dimensions(dims: &[f64]) -> Result<Self, ValidationError> {
        let [radius] = take_dimensions(Self::KIND, Self::FIELDS, dims)?;
        Ok(Sphere { radius })
    }
}

impl Solid for Sphere {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Sphere
    }

    fn surface_area_formula(&self) -> f64 {
        4.0 * PI * self.radius * self.radius
    }

    fn volume_formula(&self) -> f64 {
        (4.0 / 3.0) * PI * self.radius * self.radius * self.radius
    }

    fn dimensions(&self) -> Vec<Dimension> {
        vec![Dimension::new("radius", self.radius)]
    }

    fn set_dimension(&mut self, field: &str, value: f64) -> Result<(), ValidationError> {
        match field {
            "radius" => self.set_radius(value),
            _ => Err(ValidationError::UnknownDimension {
                kind: ShapeKind::Sphere,
                field: field.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::shape::Measure;
    use crate::core::ValidationErrorKind;

    const TOL: f64 = 1e-9;

    #[test]
    fn test_unit_sphere_values() {
        let s = Sphere::new("Unit", 5.0).unwrap();
        assert!((s.volume() - 523.598_775_598_298_8).abs() < TOL);
        assert!((s.surface_area() - 314.159_265_358_979_3).abs() < TOL);
        assert_eq!(s.color(), "Unspecified");
    }

    #[test]
    fn test_zero_radius_is_degenerate() {
        let s = Sphere::new("Point", 0.0).unwrap();
        assert_eq!(s.volume(), 0.0);
        assert_eq!(s.surface_area(), 0.0);
        assert!(s.is_degenerate());
    }

    #[test]
    fn test_negative_radius_rejected() {
        let err = Sphere::with_color("Bad", "Red", -0.5).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidDimension {
                field: "radius",
                value: -0.5
            }
        );
    }

    #[test]
    fn test_set_radius() {
        let mut s = Sphere::new("Ball", 1.0).unwrap();
        s.solid_mut().set_radius(2.0).unwrap();
        assert_eq!(s.solid().radius(), 2.0);
        assert!((s.volume() - (32.0 / 3.0) * PI).abs() < TOL);

        let err = s.solid_mut().set_radius(-2.0).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::InvalidDimension);
        assert_eq!(s.solid().radius(), 2.0);

        let err = s.solid_mut().set_radius(f64::INFINITY).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::InvalidDimension);
        assert_eq!(s.solid().radius(), 2.0);
        assert!(s.volume().is_finite());
    }

    #[test]
    fn test_very_large_radius_is_finite() {
        let s = Sphere::new("Huge", 1e100).unwrap();
        assert!(s.volume().is_finite());
        assert!(s.surface_area().is_finite());
    }

    #[test]
    fn test_repeated_computation_is_bit_identical() {
        let s = Sphere::new("Ball", 1.234_567).unwrap();
        assert_eq!(s.volume().to_bits(), s.volume().to_bits());
        assert_eq!(s.surface_area().to_bits(), s.surface_area().to_bits());
    }
}

//! Rectangular prism (cuboid) with independent length, width and height.

use crate::core::error::{validate_dimension, ValidationError};
use crate::core::kind::ShapeKind;
use crate::core::shape::{take_dimensions, Dimension, FromDimensions, Shape, Solid};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangularPrism {
    length: f64,
    width: f64,
    height: f64,
}

impl RectangularPrism {
    pub fn new(
        name: &str,
        length: f64,
        width: f64,
        height: f64,
    ) -> Result<Shape<RectangularPrism>, ValidationError> {
        Shape::try_new(name, None, || {
            RectangularPrism::from_dimensions(&[length, width, height])
        })
    }

    pub fn with_color(
        name: &str,
        color: &str,
        length: f64,
        width: f64,
        height: f64,
    ) -> Result<Shape<RectangularPrism>, ValidationError> {
        Shape::try_new(name, Some(color), || {
            RectangularPrism::from_dimensions(&[length, width, height])
        })
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn set_length(&mut self, length: f64) -> Result<(), ValidationError> {
        self.length = validate_dimension("length", length)?;
        Ok(())
    }

    pub fn set_width(&mut self, width: f64) -> Result<(), ValidationError> {
        self.width = validate_dimension("width", width)?;
        Ok(())
    }

    pub fn set_height(&mut self, height: f64) -> Result<(), ValidationError> {
        self.height = validate_dimension("height", height)?;
        Ok(())
    }
}

impl FromDimensions for RectangularPrism {
    const KIND: ShapeKind = ShapeKind::RectangularPrism;
    const FIELDS: &'static [&'static str] = &["length", "width", "height"];

    fn from_dimensions(dims: &[f64]) -> Result<Self, ValidationError> {
        let [length, width, height] = take_dimensions(Self::KIND, Self::FIELDS, dims)?;
        Ok(RectangularPrism {
            length,
            width,
            height,
        })
    }
}

impl Solid for RectangularPrism {
    fn kind(&self) -> ShapeKind {
        ShapeKind::RectangularPrism
    }

    fn surface_area_formula(&self) -> f64 {
        let (l, w, h) = (self.length, self.width, self.height);
        2.0 * (l * w + l * h + w * h)
    }

    fn volume_formula(&self) -> f64 {
        let mut f = [self.length, self.width, self.height];
        f.sort_by(f64::total_cmp);
        // smallest times largest first keeps the partial product in range
        f[0] * f[2] * f[1]
    }

    fn dimensions(&self) -> Vec<Dimension> {
        vec![
            Dimension::new("length", self.length),
            Dimension::new("width", self.width),
            Dimension::new("height", self.height),
        ]
    }

    fn set_dimension(&mut self, field: &str, value: f64) -> Result<(), ValidationError> {
        match field {
            "length" => self.set_length(value),
            "width" => self.set_width(value),
            "height" => self.set_height(value),
            _ => Err(ValidationError::UnknownDimension {
                kind: ShapeKind::RectangularPrism,
                field: field.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::shape::Measure;

    #[test]
    fn test_known_values() {
        let p = RectangularPrism::with_color("Brown Package", "Brown", 6.0, 4.0, 3.0).unwrap();
        assert_eq!(p.volume(), 72.0);
        assert_eq!(p.surface_area(), 108.0);
    }

    #[test]
    fn test_one_zero_dimension_is_a_rectangle() {
        let p = RectangularPrism::new("Sheet", 0.0, 4.0, 3.0).unwrap();
        assert_eq!(p.volume(), 0.0);
        assert_eq!(p.surface_area(), 24.0);
        assert_eq!(p.degenerate_fields(), vec!["length"]);
    }

    #[test]
    fn test_negative_width_rejected() {
        let err = RectangularPrism::new("Bad", 1.0, -1.0, 1.0).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidDimension {
                field: "width",
                value: -1.0
            }
        );
    }

    #[test]
    fn test_setters() {
        let mut p = RectangularPrism::new("Box", 1.0, 1.0, 1.0).unwrap();
        p.solid_mut().set_length(2.0).unwrap();
        p.solid_mut().set_width(3.0).unwrap();
        p.solid_mut().set_height(4.0).unwrap();
        assert_eq!(p.volume(), 24.0);
        assert_eq!(
            (p.solid().length(), p.solid().width(), p.solid().height()),
            (2.0, 3.0, 4.0)
        );
    }

    #[test]
    fn test_mixed_magnitudes_do_not_overflow() {
        let p = RectangularPrism::new("Sheet", 1e200, 1e200, 1e-200).unwrap();
        assert!((p.volume() / 1e200 - 1.0).abs() < 1e-12);

        // and no underflow to zero in the other direction
        let p = RectangularPrism::new("Rod", 1e-200, 1e-200, 1e300).unwrap();
        assert!((p.volume() / 1e-100 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_volume_ignores_field_order() {
        let a = RectangularPrism::new("A", 6.0, 4.0, 3.0).unwrap();
        let b = RectangularPrism::new("B", 3.0, 6.0, 4.0).unwrap();
        assert_eq!(a.volume(), 72.0);
        assert_eq!(a.volume().to_bits(), b.volume().to_bits());
    }

    #[test]
    fn test_very_large_values_are_finite() {
        let p = RectangularPrism::new("Huge", 1e100, 1e100, 1e100).unwrap();
        assert!(p.volume().is_finite());
        assert!(p.surface_area().is_finite());
    }
}

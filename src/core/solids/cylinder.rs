//! Right circular cylinder.
//!
//! - Surface area: 2πr(r + h), both caps plus the lateral band
//! - Volume: πr²h

use std::f64::consts::PI;

use crate::core::error::{validate_dimension, ValidationError};
use crate::core::kind::ShapeKind;
use crate::core::shape::{take_dimensions, Dimension, FromDimensions, Shape, Solid};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    radius: f64,
    height: f64,
}

impl Cylinder {
    pub fn new(name: &str, radius: f64, height: f64) -> Result<Shape<Cylinder>, ValidationError> {
        Shape::try_new(name, None, || Cylinder::from_dimensions(&[radius, height]))
    }

    pub fn with_color(
        name: &str,
        color: &str,
        radius: f64,
        height: f64,
    ) -> Result<Shape<Cylinder>, ValidationError> {
        Shape::try_new(name, Some(color), || {
            Cylinder::from_dimensions(&[radius, height])
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn height(&self) -> f64 {
        self.height
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

impl FromDimensions for Cylinder {
    const KIND: ShapeKind = ShapeKind::Cylinder;
    const FIELDS: &'static [&'static str] = &["radius", "height"];

    fn from_dimensions(dims: &[f64]) -> Result<Self, ValidationError> {
        let [radius, height] = take_dimensions(Self::KIND, Self::FIELDS, dims)?;
        Ok(Cylinder { radius, height })
    }
}

impl Solid for Cylinder {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Cylinder
    }

    fn surface_area_formula(&self) -> f64 {
        2.0 * PI * self.radius * (self.radius + self.height)
    }

    fn volume_formula(&self) -> f64 {
        // r * h first: r² can overflow while πr²h still fits
        PI * self.radius * (self.radius * self.height)
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
                kind: ShapeKind::Cylinder,
                field: field.to_string(),
            }),
        }
    }
}

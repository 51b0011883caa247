use crate::core::error::{validate_dimension, ValidationError};
use crate::core::kind::ShapeKind;
use crate::core::shape::{take_dimensions, Dimension, FromDimensions, Shape, Solid};

/// Cube with edge length `side_length`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cube {
    side_length: f64,
}

impl Cube {
    pub fn new(name: &str, side_length: f64) -> Result<Shape<Cube>, ValidationError> {
        Shape::try_new(name, None, || Cube::from_dimensions(&[side_length]))
    }

    pub fn with_color(
        name: &str,
        color: &str,
        side_length: f64,
    ) -> Result<Shape<Cube>, ValidationError> {
        Shape::try_new(name, Some(color), || Cube::from_dimensions(&[side_length]))
    }

    pub fn side_length(&self) -> f64 {
        self.side_length
    }

    pub fn set_side_length(&mut self, side_length: f64) -> Result<(), ValidationError> {
        self.side_length = validate_dimension("side_length", side_length)?;
        Ok(())
    }
}

impl FromDimensions for Cube {
    const KIND: ShapeKind = ShapeKind::Cube;
    const FIELDS: &'static [&'static str] = &["side_length"];

    fn from_dimensions(dims: &[f64]) -> Result<Self, ValidationError> {
        let [side_length] = take_dimensions(Self::KIND, Self::FIELDS, dims)?;
        Ok(Cube { side_length })
    }
}

impl Solid for Cube {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Cube
    }

    fn surface_area_formula(&self) -> f64 {
        6.0 * self.side_length * self.side_length
    }

    fn volume_formula(&self) -> f64 {
        self.side_length * self.side_length * self.side_length
    }

    fn dimensions(&self) -> Vec<Dimension> {
        vec![Dimension::new("side_length", self.side_length)]
    }

    fn set_dimension(&mut self, field: &str, value: f64) -> Result<(), ValidationError> {
        match field {
            "side_length" => self.set_side_length(value),
            _ => Err(ValidationError::UnknownDimension {
                kind: ShapeKind::Cube,
                field: field.to_string(),
            }),
        }
    }
}

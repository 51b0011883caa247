//! The shape computation contract and the shared shape base.
//!
//! Every shape is a [`Shape<S>`]: a validated name and color wrapped around a
//! [`Solid`] that owns the dimensions and knows the two formulas. The public
//! accessors ([`Measure::surface_area`], [`Measure::volume`]) are implemented
//! once, here, for every `Shape<S>`. A solid can only supply formulas; it never
//! gets to replace the accessor callers see.
//!
//! [`AnyShape`] is the type-erased form produced by the resolver.

use std::fmt;

use serde::Serialize;

use crate::core::error::{validate_dimension, validate_name, ValidationError};
use crate::core::kind::ShapeKind;

/// Color assigned when none (or a blank one) is given.
pub const UNSPECIFIED_COLOR: &str = "Unspecified";

/// Capabilities every shape exposes.
pub trait Measure {
    /// Total surface area, in square units.
    fn surface_area(&self) -> f64;

    /// Enclosed volume, in cubic units.
    fn volume(&self) -> f64;
}

/// A named dimension value, reported in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dimension {
    pub field: &'static str,
    pub value: f64,
}

impl Dimension {
    pub fn new(field: &'static str, value: f64) -> Self {
        Dimension { field, value }
    }
}

/// Variant-specific geometry: dimensions plus the two formulas.
///
/// Formulas must be pure functions of the current dimensions.
pub trait Solid: fmt::Debug + Send + Sync {
    fn kind(&self) -> ShapeKind;

    fn surface_area_formula(&self) -> f64;

    fn volume_formula(&self) -> f64;

    /// Current dimensions, in the order the constructor takes them.
    fn dimensions(&self) -> Vec<Dimension>;

    /// Set a dimension by field name with the usual validation.
    fn set_dimension(&mut self, field: &str, value: f64) -> Result<(), ValidationError>;
}

impl Solid for Box<dyn Solid> {
    fn kind(&self) -> ShapeKind {
        (**self).kind()
    }

    fn surface_area_formula(&self) -> f64 {
        (**self).surface_area_formula()
    }

    fn volume_formula(&self) -> f64 {
        (**self).volume_formula()
    }

    fn dimensions(&self) -> Vec<Dimension> {
        (**self).dimensions()
    }

    fn set_dimension(&mut self, field: &str, value: f64) -> Result<(), ValidationError> {
        (**self).set_dimension(field, value)
    }
}

/// A solid that can be built from an ordered dimension slice.
///
/// This is what the resolver's built-in construction paths call into.
pub trait FromDimensions: Solid + Sized + 'static {
    const KIND: ShapeKind;

    /// Field names, in constructor order. The length is the variant's arity.
    const FIELDS: &'static [&'static str];

    fn from_dimensions(dims: &[f64]) -> Result<Self, ValidationError>;
}

/// Split a dimension slice into exactly `N` validated values.
pub(crate) fn take_dimensions<const N: usize>(
    kind: ShapeKind,
    fields: &'static [&'static str],
    dims: &[f64],
) -> Result<[f64; N], ValidationError> {
    let mut values = <[f64; N]>::try_from(dims).map_err(|_| ValidationError::DimensionCount {
        kind,
        expected: N,
        found: dims.len(),
    })?;
    for (value, field) in values.iter_mut().zip(fields) {
        *value = validate_dimension(field, *value)?;
    }
    Ok(values)
}

/// A shape with a validated name and color.
#[derive(Debug, Clone)]
pub struct Shape<S = Box<dyn Solid>> {
    name: String,
    color: String,
    solid: S,
}

/// A shape whose variant is only known at runtime.
pub type AnyShape = Shape<Box<dyn Solid>>;

impl<S: Solid> Shape<S> {
    /// Validate `name`, normalize `color`, then build the solid.
    ///
    /// The name is checked before any dimension so a blank name always
    /// reports as [`ValidationError::InvalidName`].
    pub fn try_new(
        name: &str,
        color: Option<&str>,
        build: impl FnOnce() -> Result<S, ValidationError>,
    ) -> Result<Self, ValidationError> {
        let name = validate_name(name)?.to_string();
        let color = normalize_color(color);
        let solid = build()?;
        tracing::debug!("created {} name={} color={}", solid.kind(), name, color);
        Ok(Shape { name, color, solid })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn kind(&self) -> ShapeKind {
        self.solid.kind()
    }

    /// Rename the shape. A blank name is rejected and the old name kept.
    pub fn set_name(&mut self, name: &str) -> Result<(), ValidationError> {
        self.name = validate_name(name)?.to_string();
        tracing::debug!("set name to {}", self.name);
        Ok(())
    }

    /// Recolor the shape. Blank colors become [`UNSPECIFIED_COLOR`].
    pub fn set_color(&mut self, color: &str) {
        self.color = normalize_color(Some(color));
        tracing::debug!("set color to {}", self.color);
    }

    pub fn solid(&self) -> &S {
        &self.solid
    }

    /// Mutable access to the variant, for its typed validated setters.
    pub fn solid_mut(&mut self) -> &mut S {
        &mut self.solid
    }

    pub fn dimensions(&self) -> Vec<Dimension> {
        self.solid.dimensions()
    }

    pub fn set_dimension(&mut self, field: &str, value: f64) -> Result<(), ValidationError> {
        self.solid.set_dimension(field, value)
    }

    /// Fields currently equal to zero.
    pub fn degenerate_fields(&self) -> Vec<&'static str> {
        self.dimensions()
            .into_iter()
            .filter(|d| d.value == 0.0)
            .map(|d| d.field)
            .collect()
    }

    pub fn is_degenerate(&self) -> bool {
        self.dimensions().iter().any(|d| d.value == 0.0)
    }

    /// Volume to surface area ratio, or 0 when the surface area is 0.
    pub fn efficiency(&self) -> f64 {
        let area = self.surface_area();
        if area > 0.0 {
            self.volume() / area
        } else {
            0.0
        }
    }

    /// Serializable snapshot of the shape and its computed quantities.
    pub fn summary(&self) -> ShapeSummary {
        ShapeSummary {
            kind: self.kind(),
            name: self.name.clone(),
            color: self.color.clone(),
            dimensions: self.dimensions(),
            surface_area: self.surface_area(),
            volume: self.volume(),
        }
    }
}

impl<S: Solid + 'static> Shape<S> {
    /// Erase the variant type.
    pub fn into_any(self) -> AnyShape {
        Shape {
            name: self.name,
            color: self.color,
            solid: Box::new(self.solid),
        }
    }
}

impl<S: Solid> Measure for Shape<S> {
    fn surface_area(&self) -> f64 {
        let area = self.solid.surface_area_formula();
        tracing::trace!("surface area of {}: {}", self.name, area);
        area
    }

    fn volume(&self) -> f64 {
        let volume = self.solid.volume_formula();
        tracing::trace!("volume of {}: {}", self.name, volume);
        volume
    }
}

impl<S: Solid> fmt::Display for Shape<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {{name='{}', color='{}'}}",
            self.kind().type_name(),
            self.name,
            self.color
        )?;
        for (i, dim) in self.dimensions().iter().enumerate() {
            let sep = if i == 0 { "; " } else { ", " };
            write!(f, "{}{}={}", sep, dim.field, dim.value)?;
        }
        Ok(())
    }
}

/// Shape data with surface area and volume computed at snapshot time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeSummary {
    pub kind: ShapeKind,
    pub name: String,
    pub color: String,
    pub dimensions: Vec<Dimension>,
    pub surface_area: f64,
    pub volume: f64,
}

fn normalize_color(color: Option<&str>) -> String {
    match color {
        Some(c) if !c.trim().is_empty() => c.to_string(),
        _ => {
            tracing::debug!("no color given, using '{}'", UNSPECIFIED_COLOR);
            UNSPECIFIED_COLOR.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::solids::{Cube, Cylinder, Sphere};
    use crate::core::ValidationErrorKind;

    #[test]
    fn test_color_defaults_to_unspecified() {
        let plain = Cube::new("Plain", 1.0).unwrap();
        assert_eq!(plain.color(), UNSPECIFIED_COLOR);

        let blank = Cube::with_color("Blank", "   ", 1.0).unwrap();
        assert_eq!(blank.color(), UNSPECIFIED_COLOR);

        let empty = Cube::with_color("Empty", "", 1.0).unwrap();
        assert_eq!(empty.color(), UNSPECIFIED_COLOR);
    }

    #[test]
    fn test_set_name_validates_and_keeps_old_value() {
        let mut shape = Sphere::new("Ball", 1.0).unwrap();
        let err = shape.set_name("  ").unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::InvalidName);
        assert_eq!(shape.name(), "Ball");

        shape.set_name("Globe").unwrap();
        assert_eq!(shape.name(), "Globe");
    }

    #[test]
    fn test_set_color_normalizes() {
        let mut shape = Sphere::with_color("Ball", "Red", 1.0).unwrap();
        shape.set_color("Green");
        assert_eq!(shape.color(), "Green");
        shape.set_color(" ");
        assert_eq!(shape.color(), UNSPECIFIED_COLOR);
    }

    #[test]
    fn test_blank_name_wins_over_bad_dimension() {
        let err = Sphere::new(" ", -1.0).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::InvalidName);
    }

    #[test]
    fn test_generic_dimension_setter() {
        let mut shape = Cylinder::new("Can", 2.0, 5.0).unwrap().into_any();
        shape.set_dimension("height", 7.0).unwrap();
        assert_eq!(
            shape.dimensions(),
            vec![Dimension::new("radius", 2.0), Dimension::new("height", 7.0)]
        );

        let err = shape.set_dimension("width", 1.0).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::UnknownDimension);

        let err = shape.set_dimension("radius", -3.0).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::InvalidDimension);
        assert_eq!(shape.dimensions()[0].value, 2.0);
    }

    #[test]
    fn test_degenerate_fields() {
        let shape = Cylinder::new("Disk", 3.0, 0.0).unwrap();
        assert!(shape.is_degenerate());
        assert_eq!(shape.degenerate_fields(), vec!["height"]);

        let shape = Cylinder::new("Can", 3.0, 1.0).unwrap();
        assert!(!shape.is_degenerate());
    }

    #[test]
    fn test_display_format() {
        let shape = Cylinder::with_color("Silver Can", "Silver", 2.0, 5.0).unwrap();
        assert_eq!(
            shape.to_string(),
            "Cylinder {name='Silver Can', color='Silver'}; radius=2, height=5"
        );
    }

    #[test]
    fn test_into_any_keeps_fields() {
        let typed = Sphere::with_color("Unit", "Blue", 5.0).unwrap();
        let area = typed.surface_area();
        let any = typed.into_any();
        assert_eq!(any.kind(), ShapeKind::Sphere);
        assert_eq!(any.name(), "Unit");
        assert_eq!(any.color(), "Blue");
        assert_eq!(any.surface_area().to_bits(), area.to_bits());
    }

    #[test]
    fn test_efficiency_of_flat_shape_is_zero() {
        let flat = Sphere::new("Point", 0.0).unwrap();
        assert_eq!(flat.efficiency(), 0.0);

        let cube = Cube::new("Box", 6.0).unwrap();
        assert!((cube.efficiency() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_summary_serializes() {
        let shape = Cube::with_color("Blue Box", "Blue", 4.0).unwrap();
        let json = serde_json::to_value(shape.summary()).unwrap();
        assert_eq!(json["kind"], "cube");
        assert_eq!(json["name"], "Blue Box");
        assert_eq!(json["volume"], 64.0);
        assert_eq!(json["dimensions"][0]["field"], "side_length");
    }
}

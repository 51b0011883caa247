//! Construction paths: the calling conventions a variant declares.
//!
//! A path is a plain function value plus the facts the resolver ranks on:
//! whether it takes a color and how many dimensions it accepts. Paths are
//! immutable once declared.

use std::fmt;

use serde::Serialize;

use crate::core::{AnyShape, FromDimensions, Shape, ShapeKind, ValidationError};

/// Whether a path accepts a color argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PathStyle {
    /// `(name, color, dims)`
    ColorAware,
    /// `(name, dims)`
    Colorless,
}

/// How many dimensions a path accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Arity {
    /// Exactly this many dimensions, one per declared field.
    Exact(usize),
    /// Any count in `min..=max`, taken as a list.
    Variadic { min: usize, max: usize },
}

impl Arity {
    pub fn accepts(&self, count: usize) -> bool {
        match *self {
            Arity::Exact(n) => count == n,
            Arity::Variadic { min, max } => (min..=max).contains(&count),
        }
    }

    pub fn is_variadic(&self) -> bool {
        matches!(self, Arity::Variadic { .. })
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exact(n) => write!(f, "{}", n),
            Arity::Variadic { min, max } if min == max => write!(f, "{}", min),
            Arity::Variadic { min, max } => write!(f, "{}..={}", min, max),
        }
    }
}

/// Builds a shape from `(name, color, dims)`.
///
/// Colorless paths are invoked with `color = None`.
pub type BuildFn = fn(&str, Option<&str>, &[f64]) -> Result<AnyShape, ValidationError>;

/// One supported calling convention for a variant.
#[derive(Clone, Copy)]
pub struct ConstructionPath {
    pub kind: ShapeKind,
    pub style: PathStyle,
    pub arity: Arity,
    /// Field names shown in the signature of explicit-arity paths
    pub fields: &'static [&'static str],
    build: BuildFn,
}

impl ConstructionPath {
    pub fn new(
        kind: ShapeKind,
        style: PathStyle,
        arity: Arity,
        fields: &'static [&'static str],
        build: BuildFn,
    ) -> Self {
        ConstructionPath {
            kind,
            style,
            arity,
            fields,
            build,
        }
    }

    /// `(name, color, field...)` for a solid with a fixed field list.
    pub fn color_aware<S: FromDimensions>() -> Self {
        ConstructionPath::new(
            S::KIND,
            PathStyle::ColorAware,
            Arity::Exact(S::FIELDS.len()),
            S::FIELDS,
            build_solid::<S>,
        )
    }

    /// `(name, field...)` for a solid with a fixed field list.
    pub fn colorless<S: FromDimensions>() -> Self {
        ConstructionPath::new(
            S::KIND,
            PathStyle::Colorless,
            Arity::Exact(S::FIELDS.len()),
            S::FIELDS,
            build_solid::<S>,
        )
    }

    /// Ranking key; lower is better.
    ///
    /// The style term dominates: a path whose style matches the call shape
    /// always beats one that does not. Within a style, a variadic path beats
    /// an explicit-arity one.
    ///
    /// Rank 0 is reserved for a style-matching variadic path, so a
    /// style-matching explicit path (every built-in one) ranks 1.
    pub fn rank(&self, color_requested: bool) -> u32 {
        let style_penalty = match (self.style, color_requested) {
            (PathStyle::ColorAware, true) | (PathStyle::Colorless, false) => 0,
            _ => 1,
        };
        let arity_penalty = if self.arity.is_variadic() { 0 } else { 1 };
        style_penalty * 2 + arity_penalty
    }

    pub fn accepts(&self, count: usize) -> bool {
        self.arity.accepts(count)
    }

    /// Whether this path may take a request with or without a color.
    ///
    /// Colorless paths serve both, dropping any color. Color-aware paths
    /// only serve colored requests.
    pub fn serves(&self, color_requested: bool) -> bool {
        match self.style {
            PathStyle::Colorless => true,
            PathStyle::ColorAware => color_requested,
        }
    }

    /// Call the path. The color is dropped for colorless paths.
    pub fn invoke(
        &self,
        name: &str,
        color: Option<&str>,
        dims: &[f64],
    ) -> Result<AnyShape, ValidationError> {
        let color = match self.style {
            PathStyle::ColorAware => color,
            PathStyle::Colorless => None,
        };
        (self.build)(name, color, dims)
    }

    /// Human-readable signature, e.g. `cone(name, color, radius, height)`.
    pub fn signature(&self) -> String {
        let mut params = vec!["name"];
        if self.style == PathStyle::ColorAware {
            params.push("color");
        }
        let dims = if self.arity.is_variadic() || self.fields.is_empty() {
            format!("dims[{}]", self.arity)
        } else {
            self.fields.join(", ")
        };
        format!("{}({}, {})", self.kind, params.join(", "), dims)
    }
}

impl fmt::Debug for ConstructionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstructionPath")
            .field("kind", &self.kind)
            .field("style", &self.style)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

fn build_solid<S: FromDimensions>(
    name: &str,
    color: Option<&str>,
    dims: &[f64],
) -> Result<AnyShape, ValidationError> {
    Ok(Shape::try_new(name, color, || S::from_dimensions(dims))?.into_any())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cone, Cube, Measure};

    #[test]
    fn test_arity_accepts() {
        assert!(Arity::Exact(2).accepts(2));
        assert!(!Arity::Exact(2).accepts(3));

        let variadic = Arity::Variadic { min: 1, max: 3 };
        assert!(variadic.accepts(1));
        assert!(variadic.accepts(3));
        assert!(!variadic.accepts(0));
        assert!(!variadic.accepts(4));
    }

    #[test]
    fn test_arity_display() {
        assert_eq!(Arity::Exact(3).to_string(), "3");
        assert_eq!(Arity::Variadic { min: 2, max: 2 }.to_string(), "2");
        assert_eq!(Arity::Variadic { min: 1, max: 3 }.to_string(), "1..=3");
    }

    #[test]
    fn test_rank_ordering() {
        let colored_exact = ConstructionPath::color_aware::<Cube>();
        let plain_exact = ConstructionPath::colorless::<Cube>();
        let colored_variadic = ConstructionPath::new(
            ShapeKind::Cube,
            PathStyle::ColorAware,
            Arity::Variadic { min: 1, max: 1 },
            &[],
            build_solid::<Cube>,
        );

        // colored request
        assert_eq!(colored_variadic.rank(true), 0);
        assert_eq!(colored_exact.rank(true), 1);
        assert_eq!(plain_exact.rank(true), 3);

        // uncolored request
        assert_eq!(plain_exact.rank(false), 1);
    }

    #[test]
    fn test_serves() {
        let colored = ConstructionPath::color_aware::<Cube>();
        let plain = ConstructionPath::colorless::<Cube>();

        assert!(colored.serves(true));
        assert!(!colored.serves(false));
        assert!(plain.serves(true));
        assert!(plain.serves(false));
    }

    #[test]
    fn test_signature() {
        assert_eq!(
            ConstructionPath::color_aware::<Cone>().signature(),
            "cone(name, color, radius, height)"
        );
        assert_eq!(
            ConstructionPath::colorless::<Cube>().signature(),
            "cube(name, side_length)"
        );
    }

    #[test]
    fn test_colorless_invoke_drops_color() {
        let path = ConstructionPath::colorless::<Cube>();
        let shape = path.invoke("Box", Some("Red"), &[2.0]).unwrap();
        assert_eq!(shape.color(), "Unspecified");
        assert_eq!(shape.volume(), 8.0);
    }
}

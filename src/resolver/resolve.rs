//! Ranked construction-path search.
//!
//! Given a variant, a name, an optional color and a dimension list, pick the
//! best declared path and invoke it:
//!
//! 1. The variant must be registered and the name non-blank.
//! 2. Paths whose arity rejects the dimension count are excluded, as are
//!    color-aware paths when no color was given.
//! 3. The rest are ranked ([`ConstructionPath::rank`]); ties keep
//!    declaration order.
//! 4. A colored request served by a colorless path drops the color and says
//!    so through the event sink.
//! 5. A validation failure from the chosen path is returned as is.

use std::sync::Arc;

use crate::core::error::validate_name;
use crate::core::{AnyShape, EventSink, ShapeEvent, ShapeKind, TracingSink};
use crate::resolver::errors::ConstructionError;
use crate::resolver::path::{Arity, ConstructionPath, PathStyle};
use crate::resolver::registry::ShapeRegistry;

/// A transient construction descriptor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeRequest<'a> {
    pub kind: ShapeKind,
    pub name: &'a str,
    pub color: Option<&'a str>,
    pub dimensions: &'a [f64],
}

impl<'a> ShapeRequest<'a> {
    pub fn new(kind: ShapeKind, name: &'a str, dimensions: &'a [f64]) -> Self {
        ShapeRequest {
            kind,
            name,
            color: None,
            dimensions,
        }
    }

    pub fn with_color(mut self, color: &'a str) -> Self {
        self.color = Some(color);
        self
    }
}

/// A compatible path together with its rank for one request.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'r> {
    pub path: &'r ConstructionPath,
    pub rank: u32,
    /// Position in the variant's declaration list
    pub index: usize,
}

/// Stateless shape factory over a [`ShapeRegistry`].
#[derive(Clone)]
pub struct ShapeResolver {
    registry: ShapeRegistry,
    sink: Arc<dyn EventSink>,
}

impl ShapeResolver {
    /// Resolver over the built-in variants, logging through `tracing`.
    pub fn new() -> Self {
        ShapeResolver::with_registry(ShapeRegistry::new())
    }

    pub fn with_registry(registry: ShapeRegistry) -> Self {
        ShapeResolver {
            registry,
            sink: Arc::new(TracingSink),
        }
    }

    /// Replace the event sink.
    pub fn with_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn registry(&self) -> &ShapeRegistry {
        &self.registry
    }

    /// Construct with `(name, dims)`; the color ends up `"Unspecified"`.
    pub fn construct(
        &self,
        kind: ShapeKind,
        name: &str,
        dimensions: &[f64],
    ) -> Result<AnyShape, ConstructionError> {
        self.construct_request(&ShapeRequest::new(kind, name, dimensions))
    }

    /// Construct with `(name, color, dims)`.
    pub fn construct_with_color(
        &self,
        kind: ShapeKind,
        name: &str,
        color: &str,
        dimensions: &[f64],
    ) -> Result<AnyShape, ConstructionError> {
        self.construct_request(&ShapeRequest::new(kind, name, dimensions).with_color(color))
    }

    /// Construct from a variant name such as `"cone"` or `"rectangular-prism"`.
    pub fn construct_named(
        &self,
        kind: &str,
        name: &str,
        color: Option<&str>,
        dimensions: &[f64],
    ) -> Result<AnyShape, ConstructionError> {
        let kind: ShapeKind = kind.parse().map_err(|_| {
            tracing::error!("unknown shape variant `{}`", kind);
            ConstructionError::UnknownVariant {
                name: kind.to_string(),
            }
        })?;
        let request = ShapeRequest {
            kind,
            name,
            color,
            dimensions,
        };
        self.construct_request(&request)
    }

    pub fn construct_request(
        &self,
        request: &ShapeRequest<'_>,
    ) -> Result<AnyShape, ConstructionError> {
        let kind = request.kind;
        self.sink.emit(ShapeEvent::Attempt {
            kind,
            name: request.name.to_string(),
            color: request.color.map(str::to_string),
            dimensions: request.dimensions.to_vec(),
        });

        let result = self.resolve_and_invoke(request);
        match &result {
            Ok(shape) => {
                let fields = shape.degenerate_fields();
                if !fields.is_empty() {
                    self.sink.emit(ShapeEvent::Degenerate {
                        kind,
                        name: shape.name().to_string(),
                        fields,
                    });
                }
            }
            Err(e) => self.sink.emit(ShapeEvent::Failed {
                kind,
                message: e.to_string(),
            }),
        }
        result
    }

    /// Compatible paths for a request, best first.
    pub fn candidates(
        &self,
        kind: ShapeKind,
        color_requested: bool,
        dimension_count: usize,
    ) -> Result<Vec<Candidate<'_>>, ConstructionError> {
        let paths = self
            .registry
            .paths(kind)
            .ok_or_else(|| ConstructionError::UnknownVariant {
                name: kind.to_string(),
            })?;

        let mut candidates: Vec<Candidate<'_>> = paths
            .iter()
            .enumerate()
            .filter(|(_, path)| path.serves(color_requested) && path.accepts(dimension_count))
            .map(|(index, path)| Candidate {
                path,
                rank: path.rank(color_requested),
                index,
            })
            .collect();

        // stable: equal ranks stay in declaration order
        candidates.sort_by_key(|c| c.rank);
        Ok(candidates)
    }

    fn served_arities(&self, kind: ShapeKind, color_requested: bool) -> Vec<Arity> {
        let mut arities = Vec::new();
        for path in self.registry.paths(kind).unwrap_or_default() {
            if path.serves(color_requested) && !arities.contains(&path.arity) {
                arities.push(path.arity);
            }
        }
        arities
    }

    fn resolve_and_invoke(&self, request: &ShapeRequest<'_>) -> Result<AnyShape, ConstructionError> {
        let kind = request.kind;
        let count = request.dimensions.len();
        let color_requested = request.color.is_some();

        if !self.registry.contains(kind) {
            return Err(ConstructionError::UnknownVariant {
                name: kind.to_string(),
            });
        }
        validate_name(request.name)?;

        let candidates = self.candidates(kind, color_requested, count)?;
        let Some(best) = candidates.first() else {
            return Err(ConstructionError::NoCompatibleConstructor {
                kind,
                requested: count,
                available: self.served_arities(kind, color_requested),
            });
        };

        if let (Some(color), PathStyle::Colorless) = (request.color, best.path.style) {
            self.sink.emit(ShapeEvent::ColorDiscarded {
                kind,
                color: color.to_string(),
            });
        }

        self.sink.emit(ShapeEvent::PathSelected {
            kind,
            signature: best.path.signature(),
            rank: best.rank,
        });

        Ok(best
            .path
            .invoke(request.name, request.color, request.dimensions)?)
    }
}

impl Default for ShapeResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ShapeResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapeResolver")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

//! Shape registry - the static table of construction paths per variant.
//!
//! Key principle: the resolver never special-cases a variant. Everything it
//! knows about a variant comes from the paths registered here.

use std::collections::BTreeMap;

use crate::core::{Cone, Cube, Cylinder, FromDimensions, RectangularPrism, ShapeKind, Sphere};
use crate::resolver::path::{Arity, ConstructionPath};

/// Registry of construction paths, keyed by variant.
///
/// Paths for one variant are kept in declaration order, which is the
/// tie-breaker when two paths rank the same.
#[derive(Debug, Clone)]
pub struct ShapeRegistry {
    paths: BTreeMap<ShapeKind, Vec<ConstructionPath>>,
}

impl ShapeRegistry {
    /// Create a registry with all built-in variants.
    pub fn new() -> Self {
        let mut registry = ShapeRegistry::empty();

        registry.register_variant::<Sphere>();
        registry.register_variant::<Cube>();
        registry.register_variant::<Cylinder>();
        registry.register_variant::<RectangularPrism>();
        registry.register_variant::<Cone>();

        registry
    }

    /// Create a registry with no variants at all.
    pub fn empty() -> Self {
        ShapeRegistry {
            paths: BTreeMap::new(),
        }
    }

    /// Register a solid's color-aware and colorless paths, replacing any
    /// paths previously registered for its kind.
    pub fn register_variant<S: FromDimensions>(&mut self) {
        self.paths.insert(
            S::KIND,
            vec![
                ConstructionPath::color_aware::<S>(),
                ConstructionPath::colorless::<S>(),
            ],
        );
    }

    /// Append one path to its variant's list.
    pub fn register(&mut self, path: ConstructionPath) {
        self.paths.entry(path.kind).or_default().push(path);
    }

    /// Remove a variant and all its paths.
    pub fn unregister(&mut self, kind: ShapeKind) -> Option<Vec<ConstructionPath>> {
        self.paths.remove(&kind)
    }

    /// Paths declared for a variant, in declaration order.
    pub fn paths(&self, kind: ShapeKind) -> Option<&[ConstructionPath]> {
        self.paths.get(&kind).map(|p| p.as_slice())
    }

    /// Distinct arities a variant accepts, in declaration order.
    pub fn arities(&self, kind: ShapeKind) -> Vec<Arity> {
        let mut arities = Vec::new();
        for path in self.paths(kind).unwrap_or_default() {
            if !arities.contains(&path.arity) {
                arities.push(path.arity);
            }
        }
        arities
    }

    /// All registered variants.
    pub fn kinds(&self) -> impl Iterator<Item = ShapeKind> + '_ {
        self.paths.keys().copied()
    }

    pub fn contains(&self, kind: ShapeKind) -> bool {
        self.paths.contains_key(&kind)
    }

    /// Number of registered variants.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl Default for ShapeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::path::PathStyle;

    #[test]
    fn test_registry_creation() {
        let registry = ShapeRegistry::new();
        assert_eq!(registry.len(), 5);
        for kind in ShapeKind::ALL {
            assert!(registry.contains(kind));
        }
    }

    #[test]
    fn test_builtin_paths() {
        let registry = ShapeRegistry::new();
        let paths = registry.paths(ShapeKind::RectangularPrism).unwrap();
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].style, PathStyle::ColorAware);
        assert_eq!(paths[1].style, PathStyle::Colorless);
        assert!(paths.iter().all(|p| p.arity == Arity::Exact(3)));
    }

    #[test]
    fn test_arities_are_distinct() {
        let registry = ShapeRegistry::new();
        assert_eq!(registry.arities(ShapeKind::Cone), vec![Arity::Exact(2)]);
        assert_eq!(registry.arities(ShapeKind::Sphere), vec![Arity::Exact(1)]);
    }

    #[test]
    fn test_reregistering_replaces() {
        let mut registry = ShapeRegistry::new();
        registry.register_variant::<Cube>();
        assert_eq!(registry.paths(ShapeKind::Cube).unwrap().len(), 2);
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn test_register_appends() {
        let mut registry = ShapeRegistry::empty();
        assert!(registry.is_empty());

        registry.register(ConstructionPath::colorless::<Sphere>());
        registry.register(ConstructionPath::color_aware::<Sphere>());

        let paths = registry.paths(ShapeKind::Sphere).unwrap();
        assert_eq!(paths[0].style, PathStyle::Colorless);
        assert_eq!(paths[1].style, PathStyle::ColorAware);
        assert!(!registry.contains(ShapeKind::Cube));
    }

    #[test]
    fn test_unregister() {
        let mut registry = ShapeRegistry::new();
        assert!(registry.unregister(ShapeKind::Cone).is_some());
        assert!(!registry.contains(ShapeKind::Cone));
        assert!(registry.arities(ShapeKind::Cone).is_empty());
    }

    #[test]
    fn test_kinds_are_ordered() {
        let registry = ShapeRegistry::new();
        let kinds: Vec<_> = registry.kinds().collect();
        assert_eq!(kinds, ShapeKind::ALL.to_vec());
    }
}

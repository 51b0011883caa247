//! shape3d - surface area and volume of simple 3D solids
//!
//! This crate provides the shape model (spheres, cubes, cylinders,
//! rectangular prisms and cones behind one measuring contract), the
//! construction resolver that picks a calling convention for a request, and
//! the bulk measurement operations used by the `shape3d` CLI.

pub mod core;
pub mod ops;
pub mod resolver;
pub mod util;

pub use core::{
    AnyShape, Cone, Cube, Cylinder, Measure, RectangularPrism, Shape, ShapeKind, Solid, Sphere,
    ValidationError,
};

pub use resolver::{ConstructionError, ShapeRequest, ShapeResolver};

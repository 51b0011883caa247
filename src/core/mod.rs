//! Core shape types.
//!
//! This module contains the foundational types used throughout shape3d:
//! - Variant identity (`ShapeKind`)
//! - The computation contract (`Measure`) and the shape base (`Shape`)
//! - Concrete solids (`Sphere`, `Cube`, `Cylinder`, `RectangularPrism`, `Cone`)
//! - Validation errors and construction events

pub mod error;
pub mod events;
pub mod kind;
pub mod shape;
pub mod solids;

pub use error::{ValidationError, ValidationErrorKind};
pub use events::{EventSink, NullSink, RecordingSink, ShapeEvent, TracingSink};
pub use kind::ShapeKind;
pub use shape::{
    AnyShape, Dimension, FromDimensions, Measure, Shape, ShapeSummary, Solid, UNSPECIFIED_COLOR,
};
pub use solids::{Cone, Cube, Cylinder, RectangularPrism, Sphere};

//! Dynamic shape construction.
//!
//! Each variant declares its construction paths in a [`ShapeRegistry`]. The
//! [`ShapeResolver`] ranks the declared paths against a request and invokes
//! the best one. The search is pure and deterministic; the only side channel
//! is the event sink.

pub mod errors;
pub mod path;
pub mod registry;
pub mod resolve;

pub use errors::{ConstructionError, ConstructionErrorKind};
pub use path::{Arity, BuildFn, ConstructionPath, PathStyle};
pub use registry::ShapeRegistry;
pub use resolve::{Candidate, ShapeRequest, ShapeResolver};

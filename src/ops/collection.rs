//! The working set of shapes a driver operates on.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::core::AnyShape;
use crate::resolver::{ConstructionError, ShapeRequest, ShapeResolver};
use crate::util::config::Shape3dConfig;

/// Immutable view of a collection at one point in time.
pub type Snapshot = Arc<[Arc<AnyShape>]>;

/// A lock-guarded list of shapes.
///
/// Readers take a [`Snapshot`] and iterate it without holding the lock, so
/// `clear` or `push` on another thread never disturbs a running measurement.
#[derive(Debug, Default)]
pub struct ShapeCollection {
    shapes: Mutex<Vec<Arc<AnyShape>>>,
}

impl ShapeCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the configured shape set through the resolver.
    ///
    /// Entries without a color fall back to `[defaults] color`. The first
    /// entry that fails to construct aborts the load.
    pub fn from_config(
        config: &Shape3dConfig,
        resolver: &ShapeResolver,
    ) -> Result<Self, ConstructionError> {
        let collection = ShapeCollection::new();

        for entry in config.shape_entries() {
            let mut request = ShapeRequest::new(entry.kind, &entry.name, &entry.dimensions);
            if let Some(color) = config.color_for(&entry) {
                request = request.with_color(color);
            }
            collection.push(resolver.construct_request(&request)?);
        }

        tracing::debug!("loaded {} shape(s)", collection.len());
        Ok(collection)
    }

    pub fn push(&self, shape: AnyShape) {
        self.lock().push(Arc::new(shape));
    }

    pub fn extend(&self, shapes: impl IntoIterator<Item = AnyShape>) {
        let mut guard = self.lock();
        guard.extend(shapes.into_iter().map(Arc::new));
    }

    /// Remove every shape, returning how many were removed.
    pub fn clear(&self) -> usize {
        let mut guard = self.lock();
        let count = guard.len();
        guard.clear();
        count
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Copy the current list out from under the lock.
    pub fn snapshot(&self) -> Snapshot {
        self.lock().iter().cloned().collect()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Arc<AnyShape>>> {
        // a panic mid-push leaves the Vec itself intact
        self.shapes.lock().unwrap_or_else(|e| e.into_inner())
    }
}

//! Construction events and the sinks that receive them.
//!
//! The resolver reports what it tried, what it picked and what it dropped
//! through an [`EventSink`]. The default sink forwards to `tracing`; callers
//! that want silence use [`NullSink`], tests use [`RecordingSink`].
//!
//! Events serialize as one JSON object each, tagged by `event`.

use std::sync::Mutex;

use serde::Serialize;

use crate::core::kind::ShapeKind;

/// Something observable happened while constructing a shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum ShapeEvent {
    /// A construction request was received.
    Attempt {
        kind: ShapeKind,
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        color: Option<String>,
        dimensions: Vec<f64>,
    },

    /// A construction path was chosen.
    PathSelected {
        kind: ShapeKind,
        /// Human-readable path signature, e.g. `cone(name, color, r, h)`
        signature: String,
        /// Lower is better. 0 is only reachable by a variadic path, so the
        /// best built-in path reports 1.
        rank: u32,
    },

    /// A color was requested but only a colorless path could serve it.
    ColorDiscarded { kind: ShapeKind, color: String },

    /// The constructed shape has at least one zero dimension.
    Degenerate {
        kind: ShapeKind,
        name: String,
        fields: Vec<&'static str>,
    },

    /// Construction failed; the error is returned to the caller.
    Failed { kind: ShapeKind, message: String },
}

/// Receiver for [`ShapeEvent`]s.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: ShapeEvent);
}

/// Forwards events to `tracing` at a level matching their severity.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: ShapeEvent) {
        match &event {
            ShapeEvent::Attempt {
                kind,
                name,
                color,
                dimensions,
            } => tracing::debug!(
                "constructing {} name={} color={:?} dims={:?}",
                kind,
                name,
                color,
                dimensions
            ),
            ShapeEvent::PathSelected {
                signature, rank, ..
            } => tracing::debug!("selected {} (rank {})", signature, rank),
            ShapeEvent::ColorDiscarded { kind, color } => tracing::warn!(
                "{} has no color-aware constructor; discarding color {:?}",
                kind,
                color
            ),
            ShapeEvent::Degenerate { kind, name, fields } => tracing::warn!(
                "{} `{}` is degenerate: {} = 0",
                kind,
                name,
                fields.join(", ")
            ),
            ShapeEvent::Failed { kind, message } => {
                tracing::error!("failed to construct {}: {}", kind, message)
            }
        }
    }
}

/// Drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, _event: ShapeEvent) {}
}

/// Keeps every event in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<ShapeEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    pub fn events(&self) -> Vec<ShapeEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Whether any recorded event satisfies `predicate`.
    pub fn any(&self, predicate: impl Fn(&ShapeEvent) -> bool) -> bool {
        self.events().iter().any(predicate)
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: ShapeEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_keeps_order() {
        let sink = RecordingSink::new();
        sink.emit(ShapeEvent::ColorDiscarded {
            kind: ShapeKind::Cube,
            color: "Red".into(),
        });
        sink.emit(ShapeEvent::Failed {
            kind: ShapeKind::Cube,
            message: "boom".into(),
        });

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], ShapeEvent::ColorDiscarded { .. }));
        assert!(matches!(events[1], ShapeEvent::Failed { .. }));
    }

    #[test]
    fn test_event_json_shape() {
        let event = ShapeEvent::PathSelected {
            kind: ShapeKind::Cone,
            signature: "cone(name, color, radius, height)".into(),
            rank: 1,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "path-selected");
        assert_eq!(json["kind"], "cone");
        assert_eq!(json["rank"], 1);
    }

    #[test]
    fn test_attempt_skips_missing_color() {
        let event = ShapeEvent::Attempt {
            kind: ShapeKind::Sphere,
            name: "Ball".into(),
            color: None,
            dimensions: vec![1.0],
        };
        let json = serde_json::to_value(&event).unwrap();
        assert!(json.get("color").is_none());
    }
}

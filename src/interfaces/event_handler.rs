// ============================================================================
// Event Handler Interface
// Defines the contract for observing field formatting events
// ============================================================================

use super::currency_field::CaretError;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the currency input binding
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FormatEvent {
    /// Server-rendered value formatted when the field was registered
    FieldInitialized {
        field_id: String,
        value: String,
        timestamp: DateTime<Utc>,
    },

    /// Value rewritten while typing or on blur
    FieldReformatted {
        field_id: String,
        before: String,
        after: String,
        cursor: Option<usize>,
        timestamp: DateTime<Utc>,
    },

    /// Value was not a number and the field was emptied
    FieldCleared {
        field_id: String,
        timestamp: DateTime<Utc>,
    },

    /// Field refused the caret move; the value was still written
    CaretRejected {
        field_id: String,
        reason: CaretError,
        timestamp: DateTime<Utc>,
    },

    /// Value converted to plain form before submission
    FieldNormalized {
        field_id: String,
        plain: String,
        timestamp: DateTime<Utc>,
    },
}

impl FormatEvent {
    /// Id of the field the event refers to
    pub fn field_id(&self) -> &str {
        match self {
            FormatEvent::FieldInitialized { field_id, .. }
            | FormatEvent::FieldReformatted { field_id, .. }
            | FormatEvent::FieldCleared { field_id, .. }
            | FormatEvent::CaretRejected { field_id, .. }
            | FormatEvent::FieldNormalized { field_id, .. } => field_id,
        }
    }
}

/// Event handler trait for processing binding events
/// Implementations can handle logging, metrics, UI tracing, etc.
pub trait FormatEventHandler: Send + Sync {
    /// Handle a formatting event
    fn on_event(&self, event: FormatEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<FormatEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler
pub struct NoOpEventHandler;

impl FormatEventHandler for NoOpEventHandler {
    fn on_event(&self, _event: FormatEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl FormatEventHandler for LoggingEventHandler {
    fn on_event(&self, event: FormatEvent) {
        tracing::debug!(field = event.field_id(), "Currency input event: {:?}", event);
    }
}

/// Keeps every event in memory, in arrival order
#[derive(Default)]
pub struct RecordingEventHandler {
    events: Mutex<Vec<FormatEvent>>,
}

impl RecordingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events received so far
    pub fn events(&self) -> Vec<FormatEvent> {
        self.events.lock().clone()
    }

    /// Remove and return the events received so far
    pub fn drain(&self) -> Vec<FormatEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl FormatEventHandler for RecordingEventHandler {
    fn on_event(&self, event: FormatEvent) {
        self.events.lock().push(event);
    }

    fn on_events(&self, events: Vec<FormatEvent>) {
        self.events.lock().extend(events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cleared(id: &str) -> FormatEvent {
        FormatEvent::FieldCleared {
            field_id: id.to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_noop_handler() {
        let handler = NoOpEventHandler;
        handler.on_event(cleared("monto"));
        // Should not panic
    }

    #[test]
    fn test_logging_handler() {
        LoggingEventHandler.on_events(vec![cleared("monto"), cleared("total")]);
    }

    #[test]
    fn test_recording_handler() {
        let handler = RecordingEventHandler::new();
        assert!(handler.is_empty());

        handler.on_event(cleared("a"));
        handler.on_events(vec![cleared("b"), cleared("c")]);
        assert_eq!(handler.len(), 3);

        let ids: Vec<String> = handler
            .events()
            .iter()
            .map(|e| e.field_id().to_string())
            .collect();
        assert_eq!(ids, ["a", "b", "c"]);

        assert_eq!(handler.drain().len(), 3);
        assert!(handler.is_empty());
    }
}

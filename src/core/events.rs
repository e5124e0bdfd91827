//! List and mutation notifications for the presentation layer
//!
//! The list controller publishes an event after every reload and every
//! create/update/delete attempt. A presentation layer subscribes to show
//! confirmations and error messages without polling controller state.
//!
//! ```text
//! ListController ──▶ EventBus::publish() ──▶ broadcast channel ──▶ toast / banner / log
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut rx = controller.subscribe();
//! controller.delete("p-1").await?;
//!
//! if let Ok(envelope) = rx.recv().await {
//!     println!("{}: {:?}", envelope.timestamp, envelope.event);
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

/// Which mutation an event refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationKind {
    Create,
    Update,
    Delete,
}

impl MutationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MutationKind::Create => "create",
            MutationKind::Update => "update",
            MutationKind::Delete => "delete",
        }
    }
}

/// Events published by a list controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ListEvent {
    /// A reload replaced the working collection
    Loaded { entity_type: String, count: usize },

    /// A reload failed; the previous collection is still shown
    LoadFailed { entity_type: String, message: String },

    /// A mutation succeeded
    Saved {
        entity_type: String,
        entity_id: String,
        kind: MutationKind,
    },

    /// A mutation failed
    SaveFailed {
        entity_type: String,
        entity_id: String,
        kind: MutationKind,
        message: String,
    },
}

impl ListEvent {
    /// Get the entity type this event relates to
    pub fn entity_type(&self) -> &str {
        match self {
            ListEvent::Loaded { entity_type, .. }
            | ListEvent::LoadFailed { entity_type, .. }
            | ListEvent::Saved { entity_type, .. }
            | ListEvent::SaveFailed { entity_type, .. } => entity_type,
        }
    }

    /// Error text carried by failure events
    pub fn error_message(&self) -> Option<&str> {
        match self {
            ListEvent::LoadFailed { message, .. } | ListEvent::SaveFailed { message, .. } => {
                Some(message)
            }
            _ => None,
        }
    }

    /// Whether the event reports a failure
    pub fn is_failure(&self) -> bool {
        self.error_message().is_some()
    }
}

/// Envelope wrapping an event with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Unique event ID
    pub id: Uuid,
    /// When the event occurred
    pub timestamp: DateTime<Utc>,
    /// The actual event
    pub event: ListEvent,
}

impl EventEnvelope {
    pub fn new(event: ListEvent) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            event,
        }
    }
}

/// Broadcast-based event bus
///
/// Cheap to clone; all clones feed the same channel.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<EventEnvelope>,
}

impl EventBus {
    /// Create a new EventBus with the given channel capacity
    ///
    /// The capacity determines how many events can be buffered before
    /// slow receivers start losing events (lagged).
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Publish an event to all subscribers
    ///
    /// Returns the number of receivers that will receive the event. With no
    /// subscribers the event is dropped.
    pub fn publish(&self, event: ListEvent) -> usize {
        let envelope = EventEnvelope::new(event);
        self.sender.send(envelope).unwrap_or(0)
    }

    /// Subscribe to events published after this call
    pub fn subscribe(&self) -> broadcast::Receiver<EventEnvelope> {
        self.sender.subscribe()
    }

    /// Get the current number of active subscribers
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(256)
    }
}

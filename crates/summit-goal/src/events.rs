// events.rs — Event model and notification dispatch.
//
// The store reports two kinds of signal:
//
// - A CompletionEvent returned by value from `toggle` when a goal flips
//   incomplete → complete. The caller consumes it immediately (the TUI turns
//   it into a celebration overlay). There is no resettable flag to go stale.
// - GoalEvent records fanned out to NotificationSinks for observability.
//   Sinks observe, they cannot block: a failing sink is logged and skipped.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::GoalError;
use crate::goal::{FilterMode, Goal, GoalId};

/// One-shot signal that a goal just transitioned incomplete → complete.
///
/// Emitted at most once per qualifying toggle; re-completing a goal after
/// reopening it emits a fresh event. Completing → reopening emits nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionEvent {
    pub goal_id: GoalId,
    pub title: String,
    pub timestamp: DateTime<Utc>,
}

/// Events emitted by the store at state-change points.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum GoalEvent {
    /// A new goal entered the collection.
    GoalAdded {
        goal_id: GoalId,
        title: String,
        timestamp: DateTime<Utc>,
    },

    /// A goal was marked complete.
    GoalCompleted {
        goal_id: GoalId,
        title: String,
        timestamp: DateTime<Utc>,
    },

    /// A completed goal was reopened.
    GoalReopened {
        goal_id: GoalId,
        title: String,
        timestamp: DateTime<Utc>,
    },

    /// The view filter changed.
    FilterChanged {
        from: FilterMode,
        to: FilterMode,
        timestamp: DateTime<Utc>,
    },
}

impl GoalEvent {
    /// Get the event type name as a string.
    pub fn event_type(&self) -> &str {
        match self {
            GoalEvent::GoalAdded { .. } => "goal_added",
            GoalEvent::GoalCompleted { .. } => "goal_completed",
            GoalEvent::GoalReopened { .. } => "goal_reopened",
            GoalEvent::FilterChanged { .. } => "filter_changed",
        }
    }

    /// Helper to create a GoalAdded event.
    pub fn goal_added(goal: &Goal) -> Self {
        GoalEvent::GoalAdded {
            goal_id: goal.id.clone(),
            title: goal.title.clone(),
            timestamp: Utc::now(),
        }
    }

    /// Helper to create a GoalCompleted event.
    pub fn goal_completed(goal: &Goal) -> Self {
        GoalEvent::GoalCompleted {
            goal_id: goal.id.clone(),
            title: goal.title.clone(),
            timestamp: Utc::now(),
        }
    }

    /// Helper to create a GoalReopened event.
    pub fn goal_reopened(goal: &Goal) -> Self {
        GoalEvent::GoalReopened {
            goal_id: goal.id.clone(),
            title: goal.title.clone(),
            timestamp: Utc::now(),
        }
    }

    /// Helper to create a FilterChanged event.
    pub fn filter_changed(from: FilterMode, to: FilterMode) -> Self {
        GoalEvent::FilterChanged {
            from,
            to,
            timestamp: Utc::now(),
        }
    }
}

/// Trait for receiving store events.
///
/// Implementations decide what to do with each event: log it, update a
/// widget, forward it somewhere. Sinks must not assume delivery order
/// beyond "same order the store applied the intents".
pub trait NotificationSink: Send {
    /// Handle an event. Errors are logged but don't stop the store.
    fn send(&self, event: &GoalEvent) -> Result<(), GoalError>;
}

/// Logs each event as a JSON line through `tracing` (always-on sink).
///
/// Nothing in this system persists, so the event trail goes to the tracing
/// subscriber rather than a file.
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn send(&self, event: &GoalEvent) -> Result<(), GoalError> {
        let json =
            serde_json::to_string(event).map_err(|e| GoalError::Notification(e.to_string()))?;
        tracing::info!(event_type = event.event_type(), payload = %json, "goal event");
        Ok(())
    }
}

/// Dispatches events to multiple sinks.
///
/// Errors from individual sinks are logged (via tracing) but don't
/// prevent other sinks from receiving the event.
pub struct EventDispatcher {
    sinks: Vec<Box<dyn NotificationSink>>,
}

impl EventDispatcher {
    /// Create a new dispatcher with no sinks.
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    /// Add a notification sink.
    pub fn add_sink(&mut self, sink: Box<dyn NotificationSink>) {
        self.sinks.push(sink);
    }

    /// Dispatch an event to all sinks.
    pub fn dispatch(&self, event: &GoalEvent) {
        for sink in &self.sinks {
            if let Err(e) = sink.send(event) {
                tracing::warn!("notification sink error: {}", e);
            }
        }
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::goal::{Category, ColorTag};

    fn sample_goal() -> Goal {
        Goal {
            id: GoalId::from("1"),
            title: "Run a Marathon".to_string(),
            description: String::new(),
            category: Category::HealthFitness,
            color: ColorTag::Sunset,
            completed: false,
            created_at: Utc::now(),
        }
    }

    /// Records every event it receives; optionally fails on demand.
    struct RecordingSink {
        seen: Arc<Mutex<Vec<String>>>,
        fail: bool,
    }

    impl NotificationSink for RecordingSink {
        fn send(&self, event: &GoalEvent) -> Result<(), GoalError> {
            if self.fail {
                return Err(GoalError::Notification("sink down".to_string()));
            }
            self.seen.lock().unwrap().push(event.event_type().to_string());
            Ok(())
        }
    }

    #[test]
    fn event_serialization_round_trip() {
        let event = GoalEvent::goal_completed(&sample_goal());
        let json = serde_json::to_string(&event).unwrap();
        let restored: GoalEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(event.event_type(), restored.event_type());
        assert!(json.contains("\"goal_completed\""));
    }

    #[test]
    fn dispatcher_sends_to_all_sinks() {
        let seen1 = Arc::new(Mutex::new(Vec::new()));
        let seen2 = Arc::new(Mutex::new(Vec::new()));

        let mut dispatcher = EventDispatcher::new();
        dispatcher.add_sink(Box::new(RecordingSink {
            seen: seen1.clone(),
            fail: false,
        }));
        dispatcher.add_sink(Box::new(RecordingSink {
            seen: seen2.clone(),
            fail: false,
        }));

        dispatcher.dispatch(&GoalEvent::goal_added(&sample_goal()));

        assert_eq!(seen1.lock().unwrap().as_slice(), ["goal_added"]);
        assert_eq!(seen2.lock().unwrap().as_slice(), ["goal_added"]);
    }

    #[test]
    fn failing_sink_does_not_block_others() {
        let seen = Arc::new(Mutex::new(Vec::new()));

        let mut dispatcher = EventDispatcher::new();
        dispatcher.add_sink(Box::new(RecordingSink {
            seen: Arc::new(Mutex::new(Vec::new())),
            fail: true,
        }));
        dispatcher.add_sink(Box::new(RecordingSink {
            seen: seen.clone(),
            fail: false,
        }));

        dispatcher.dispatch(&GoalEvent::goal_added(&sample_goal()));

        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn event_type_names() {
        let goal = sample_goal();
        assert_eq!(GoalEvent::goal_added(&goal).event_type(), "goal_added");
        assert_eq!(
            GoalEvent::goal_completed(&goal).event_type(),
            "goal_completed"
        );
        assert_eq!(GoalEvent::goal_reopened(&goal).event_type(), "goal_reopened");
        assert_eq!(
            GoalEvent::filter_changed(FilterMode::All, FilterMode::Active).event_type(),
            "filter_changed"
        );
    }
}

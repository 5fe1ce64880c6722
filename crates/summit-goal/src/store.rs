// store.rs — GoalStore: the sole owner and mutator of the goal collection.
//
// All state is in memory for the lifetime of the session. Intents are
// applied synchronously in call order; no operation blocks. The collection
// only grows (there is no delete), new goals are prepended (most recent
// first), and `completed` is the only field mutated after creation.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::GoalError;
use crate::events::{CompletionEvent, EventDispatcher, GoalEvent, NotificationSink};
use crate::goal::{Category, ColorTag, FilterMode, Goal, GoalDraft, GoalId};
use crate::ids::IdSource;

/// Snapshot of overall completion progress.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    /// `completed / total * 100`, or 0.0 for an empty collection.
    /// Rounding is a presentation concern.
    pub percent: f64,
}

/// Owns the goal collection and the active filter, applies intents, and
/// computes derived views.
///
/// Construct one per session and hand it to the presentation layer; there
/// is no ambient or static instance.
pub struct GoalStore {
    goals: Vec<Goal>,
    filter: FilterMode,
    ids: Box<dyn IdSource>,
    dispatcher: EventDispatcher,
}

impl GoalStore {
    /// Create an empty store drawing ids from `ids`.
    pub fn new(ids: Box<dyn IdSource>) -> Self {
        Self {
            goals: Vec::new(),
            filter: FilterMode::default(),
            ids,
            dispatcher: EventDispatcher::new(),
        }
    }

    /// Create a store pre-populated with the three example goals every
    /// session starts from, all incomplete, in fixed order.
    pub fn seeded(ids: Box<dyn IdSource>) -> Self {
        let mut store = Self::new(ids);
        let seeds = [
            (
                "Run a Marathon",
                "Complete a full 42km marathon by the end of the year",
                Category::HealthFitness,
                ColorTag::Sunset,
            ),
            (
                "Learn a New Language",
                "Achieve conversational fluency in Spanish",
                Category::Learning,
                ColorTag::Ocean,
            ),
            (
                "Start a Side Business",
                "Launch an online store and generate first revenue",
                Category::Career,
                ColorTag::Ember,
            ),
        ];
        for (title, description, category, color) in seeds {
            // Seeds keep presentation order, so push rather than prepend.
            let goal = Goal {
                id: store.ids.next_id(),
                title: title.to_string(),
                description: description.to_string(),
                category,
                color,
                completed: false,
                created_at: Utc::now(),
            };
            store.goals.push(goal);
        }
        store
    }

    /// Register a notification sink for store events.
    pub fn add_sink(&mut self, sink: Box<dyn NotificationSink>) {
        self.dispatcher.add_sink(sink);
    }

    /// Flip the completion state of the goal with `id`.
    ///
    /// Returns a [`CompletionEvent`] only for the incomplete → complete
    /// transition; reopening emits nothing. An unknown id is a silent
    /// no-op — the UI can only hand back ids it got from us, so this is
    /// not worth surfacing as an error.
    pub fn toggle(&mut self, id: &GoalId) -> Option<CompletionEvent> {
        let Some(idx) = self.goals.iter().position(|g| &g.id == id) else {
            tracing::debug!(goal_id = %id, "toggle on unknown goal id ignored");
            return None;
        };

        self.goals[idx].completed = !self.goals[idx].completed;
        let goal = &self.goals[idx];
        if goal.completed {
            self.dispatcher.dispatch(&GoalEvent::goal_completed(goal));
            Some(CompletionEvent {
                goal_id: goal.id.clone(),
                title: goal.title.clone(),
                timestamp: Utc::now(),
            })
        } else {
            self.dispatcher.dispatch(&GoalEvent::goal_reopened(goal));
            None
        }
    }

    /// Add a new goal from `draft`, prepending it to the collection.
    ///
    /// Rejects an empty or whitespace-only title before any mutation; the
    /// store is unchanged on rejection so the caller can keep its form
    /// open with the input intact.
    pub fn add(&mut self, draft: GoalDraft) -> Result<&Goal, GoalError> {
        if draft.title.trim().is_empty() {
            return Err(GoalError::EmptyTitle);
        }

        let goal = Goal {
            id: self.ids.next_id(),
            title: draft.title,
            description: draft.description,
            category: draft.category,
            color: draft.color,
            completed: false,
            created_at: Utc::now(),
        };
        self.goals.insert(0, goal);

        let goal = &self.goals[0];
        self.dispatcher.dispatch(&GoalEvent::goal_added(goal));
        Ok(goal)
    }

    /// Replace the view filter. Never touches the collection.
    pub fn set_filter(&mut self, mode: FilterMode) {
        if mode == self.filter {
            return;
        }
        let from = self.filter;
        self.filter = mode;
        self.dispatcher
            .dispatch(&GoalEvent::filter_changed(from, mode));
    }

    /// The active view filter.
    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    /// The whole collection, in collection order (most recent first after
    /// the seeds).
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// The subsequence of the collection visible under the active filter,
    /// in collection order.
    pub fn visible_goals(&self) -> Vec<&Goal> {
        self.goals
            .iter()
            .filter(|g| self.filter.matches(g))
            .collect()
    }

    /// Look up a goal by id.
    pub fn get(&self, id: &GoalId) -> Option<&Goal> {
        self.goals.iter().find(|g| &g.id == id)
    }

    /// Completion progress over the whole collection (filter-independent).
    pub fn progress(&self) -> Progress {
        let total = self.goals.len();
        let completed = self.goals.iter().filter(|g| g.completed).count();
        let percent = if total > 0 {
            completed as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        Progress {
            completed,
            total,
            percent,
        }
    }
}

//! # summit-goal
//!
//! Goal collection state management and event dispatch for Summit.
//!
//! A [`GoalStore`] owns the in-memory collection of goals and the active
//! view filter, applies user intents (toggle, add, set filter), and computes
//! derived views. State lives for the lifetime of the session only — there
//! is no persistence surface.
//!
//! ## Key components
//!
//! - [`Goal`] — one user-tracked objective (title, category, color,
//!   completion state)
//! - [`GoalStore`] — sole owner and mutator of the goal collection
//! - [`CompletionEvent`] — one-shot signal for incomplete → complete toggles
//! - [`GoalEvent`] / [`EventDispatcher`] / [`NotificationSink`] — store event
//!   fan-out for observers
//! - [`IdSource`] — injectable id generation (counter or UUID)

pub mod error;
pub mod events;
pub mod goal;
pub mod ids;
pub mod store;

pub use error::GoalError;
pub use events::{CompletionEvent, EventDispatcher, GoalEvent, NotificationSink, TracingSink};
pub use goal::{Category, ColorTag, FilterMode, Goal, GoalDraft, GoalId};
pub use ids::{IdSource, SequentialIds, UuidIds};
pub use store::{GoalStore, Progress};

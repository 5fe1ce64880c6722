// error.rs — Error types for the goal store.

use thiserror::Error;

/// Errors that can occur during goal store operations.
///
/// Note what is *not* here: toggling an unknown id is a deliberate silent
/// no-op, not an error, because the presentation layer can only produce ids
/// it was handed by the store.
#[derive(Debug, Error)]
pub enum GoalError {
    /// `add` was called with an empty or whitespace-only title.
    #[error("goal title must not be empty")]
    EmptyTitle,

    /// A category name did not match the fixed category set.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// A color name did not match the fixed palette.
    #[error("unknown color: {0}")]
    UnknownColor(String),

    /// A notification sink failed (non-fatal, swallowed by the dispatcher).
    #[error("notification error: {0}")]
    Notification(String),
}

// ids.rs — Injectable goal id sources.
//
// Id uniqueness is structural, never timing-based: the counter source can
// only move forward, and UUID v4 collisions are not a practical concern
// within a session. The trait seam exists so tests and the app can use the
// deterministic source while anything that wants opaque ids can use UUIDs.

use uuid::Uuid;

use crate::goal::GoalId;

/// Issues goal ids. Every id returned must be unique among all ids this
/// source has ever issued.
pub trait IdSource {
    fn next_id(&mut self) -> GoalId;
}

/// Monotonic counter ids: "1", "2", "3", ...
///
/// Deterministic, so the seed goals always get ids "1"–"3" and the first
/// user-added goal gets "4". The default source for the app and for tests.
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self { next: 0 }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> GoalId {
        self.next += 1;
        GoalId::new(self.next.to_string())
    }
}

/// Random UUID v4 ids.
#[derive(Debug, Default)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&mut self) -> GoalId {
        GoalId::new(Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn sequential_ids_count_up_from_one() {
        let mut ids = SequentialIds::new();
        assert_eq!(ids.next_id().as_str(), "1");
        assert_eq!(ids.next_id().as_str(), "2");
        assert_eq!(ids.next_id().as_str(), "3");
    }

    #[test]
    fn sequential_ids_never_repeat() {
        let mut ids = SequentialIds::new();
        let issued: HashSet<GoalId> = (0..1000).map(|_| ids.next_id()).collect();
        assert_eq!(issued.len(), 1000);
    }

    #[test]
    fn uuid_ids_never_repeat() {
        let mut ids = UuidIds;
        let issued: HashSet<GoalId> = (0..1000).map(|_| ids.next_id()).collect();
        assert_eq!(issued.len(), 1000);
    }
}

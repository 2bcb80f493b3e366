//! The shared registry that pairs up trips found by the two directional
//! searchers. Check-and-insert happens under a single lock acquisition, so
//! the race of testing for a cross-match and recording a trip separately
//! cannot be written against this interface.

use crate::knight::board::Assignment;
use crate::knight::trip::Trip;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Mutex;

/// The answer: one value assignment and the two directional tours that both
/// reach the target score on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrossMatch {
    /// The value assignment both trips score the target on.
    pub assignment: Assignment,
    /// The tour starting at `a1` and finishing at `f6`.
    pub a1_to_f6: Trip,
    /// The tour starting at `a6` and finishing at `f1`.
    pub a6_to_f1: Trip,
}

impl fmt::Display for CrossMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.assignment, self.a1_to_f6, self.a6_to_f1)
    }
}

/// Map from candidate-board key to the first trip that satisfied it.
///
/// Each searcher records at most one trip per key; a second offer for the
/// same key can only come from the other direction and is the cross-match.
#[derive(Debug, Default)]
pub struct TripRegistry {
    completed: Mutex<FxHashMap<Assignment, Trip>>,
}

impl TripRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomic get-or-insert. Returns the trip already recorded for `key` if
    /// one exists, leaving it in place; otherwise records a copy of `trip`
    /// and returns `None`.
    pub fn get_or_insert(&self, key: Assignment, trip: &Trip) -> Option<Trip> {
        let mut completed = self.completed.lock().expect("registry lock poisoned");
        match completed.get(&key) {
            Some(existing) => Some(existing.clone()),
            None => {
                completed.insert(key, trip.clone());
                None
            }
        }
    }

    /// Number of keys with a recorded trip.
    #[must_use]
    pub fn len(&self) -> usize {
        self.completed.lock().expect("registry lock poisoned").len()
    }

    /// Whether no trip has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

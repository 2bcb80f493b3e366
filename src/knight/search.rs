//! The depth-first tour searchers and their coordinator.
//!
//! Two searchers run on their own worker threads, one per board diagonal.
//! Each owns its visitation mask, its trip stack, and a private pool of
//! still-unsolved candidate boards, so the only shared state is the trip
//! registry and a cancellation flag.
//!
//! A searcher performs iterative deepening over the trip length. For each
//! length it exhausts every knight-move sequence from its start square,
//! and each sequence that ends on the finish square with the exact move
//! budget is scored against the remaining candidates. A candidate that
//! scores the target is removed from the pool and offered to the registry;
//! if the registry already holds a trip for the same assignment, the other
//! direction found it first and the pair is the answer. The finding thread
//! records the result and raises the cancellation flag, which both
//! searchers poll at every recursion entry, so the whole search unwinds
//! cooperatively instead of aborting the process.
//!
//! Trip lengths run from 8, the fewest moves that can reach the target
//! score, to one move per remaining cell of the board. Start and finish
//! share a cell colour, so only even lengths can ever complete; odd lengths
//! fail the finish check and fall through quickly.

use crate::knight::board::{Assignment, BOARD_SIZE, CandidateBoard, candidate_boards};
use crate::knight::registry::{CrossMatch, TripRegistry};
use crate::knight::trip::{Square, Trip};
use bit_vec::BitVec;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

/// Fewest knight moves that can reach the target score.
pub const TRIP_LENGTH_MIN: usize = 8;

/// Most knight moves a trip can contain: one per cell beyond the start.
pub const TRIP_LENGTH_MAX: usize = BOARD_SIZE * BOARD_SIZE - 1;

/// Start and finish of the tour crossing the board from `a1` to `f6`.
pub const TRIP_A1_TO_F6: (Square, Square) = (Square::new(5, 0), Square::new(0, 5));

/// Start and finish of the opposite tour from `a6` to `f1`.
pub const TRIP_A6_TO_F1: (Square, Square) = (Square::new(0, 0), Square::new(5, 5));

/// State shared by the two searchers: the registry, the cancellation flag,
/// and the slot the finding thread stores the answer in.
#[derive(Default)]
struct SharedSearch {
    registry: TripRegistry,
    cancelled: AtomicBool,
    result: Mutex<Option<CrossMatch>>,
}

impl SharedSearch {
    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Stores the answer (first writer wins) and tells both searchers to
    /// unwind.
    fn complete(&self, cross_match: CrossMatch) {
        let mut result = self.result.lock().expect("result lock poisoned");
        result.get_or_insert(cross_match);
        self.cancelled.store(true, Ordering::Relaxed);
    }

    fn into_result(self) -> Option<CrossMatch> {
        self.result.into_inner().expect("result lock poisoned")
    }
}

/// One directional searcher. Everything here is thread-private except the
/// `shared` reference.
struct TripSearcher<'shared> {
    start: Square,
    finish: Square,
    visited: BitVec,
    trip: Trip,
    pool: Vec<CandidateBoard>,
    shared: &'shared SharedSearch,
    debug: bool,
}

impl<'shared> TripSearcher<'shared> {
    fn new(
        route: (Square, Square),
        pool: Vec<CandidateBoard>,
        shared: &'shared SharedSearch,
        debug: bool,
    ) -> Self {
        Self {
            start: route.0,
            finish: route.1,
            visited: BitVec::from_elem(BOARD_SIZE * BOARD_SIZE, false),
            trip: Trip::new(),
            pool,
            shared,
            debug,
        }
    }

    fn run(&mut self) {
        for length in TRIP_LENGTH_MIN..=TRIP_LENGTH_MAX {
            if self.shared.is_cancelled() || self.pool.is_empty() {
                return;
            }
            if self.debug {
                println!(
                    "search {}->{}: trip length {length}, {} unsolved candidates",
                    self.start,
                    self.finish,
                    self.pool.len()
                );
            }
            self.visited.clear();
            self.trip.clear();
            self.visit(self.start);
            self.descend(self.start, length);
        }
    }

    fn descend(&mut self, from: Square, moves_left: usize) {
        if self.shared.is_cancelled() {
            return;
        }
        if moves_left == 0 {
            if from == self.finish {
                self.try_candidates();
            }
            return;
        }
        for next in from.knight_moves() {
            if self.is_visited(next) {
                continue;
            }
            self.visit(next);
            self.descend(next, moves_left - 1);
            self.unvisit(next);
        }
    }

    /// Scores the completed trip against every candidate still in the pool.
    /// A satisfied candidate leaves the pool for good; if the registry
    /// already holds the other direction's trip for it, the search is over.
    fn try_candidates(&mut self) {
        let mut index = 0;
        while index < self.pool.len() {
            if self.pool[index].satisfies(&self.trip) {
                let board = self.pool.swap_remove(index);
                if let Some(other) = self
                    .shared
                    .registry
                    .get_or_insert(board.assignment(), &self.trip)
                {
                    self.shared
                        .complete(self.pair_up(board.assignment(), other));
                    return;
                }
            } else {
                index += 1;
            }
        }
    }

    /// Orders the two trips for reporting: the `a1` tour comes first.
    fn pair_up(&self, assignment: Assignment, other: Trip) -> CrossMatch {
        let mine = self.trip.clone();
        if self.start == TRIP_A1_TO_F6.0 {
            CrossMatch {
                assignment,
                a1_to_f6: mine,
                a6_to_f1: other,
            }
        } else {
            CrossMatch {
                assignment,
                a1_to_f6: other,
                a6_to_f1: mine,
            }
        }
    }

    fn visit(&mut self, square: Square) {
        self.visited.set(square.index(), true);
        self.trip.push(square);
    }

    fn unvisit(&mut self, square: Square) {
        self.visited.set(square.index(), false);
        self.trip.pop();
    }

    fn is_visited(&self, square: Square) -> bool {
        self.visited.get(square.index()).unwrap_or(false)
    }
}

/// Runs both directional searchers to completion on their own threads and
/// returns the first cross-match found, if any.
#[must_use]
pub fn find_cross_match(debug: bool) -> Option<CrossMatch> {
    let boards = candidate_boards();
    let shared = SharedSearch::default();
    thread::scope(|scope| {
        for route in [TRIP_A1_TO_F6, TRIP_A6_TO_F1] {
            let pool = boards.clone();
            let shared = &shared;
            scope.spawn(move || TripSearcher::new(route, pool, shared, debug).run());
        }
    });
    shared.into_result()
}

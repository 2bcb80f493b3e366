#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Dual knight's-tour search.
//!
//! A 6×6 board is partitioned into three regions, each holding one value of
//! a fixed target set. Two tours are searched concurrently, one per board
//! diagonal, and the answer is the first value assignment for which both
//! directions produce a tour scoring exactly the target.

/// Board layout, candidate value assignments, and trip scoring.
pub mod board;

/// Shared registry pairing up trips found by the two searchers.
pub mod registry;

/// The depth-first tour searchers and their coordinator.
pub mod search;

/// Squares, knight-move geometry, and coordinate labels.
pub mod trip;

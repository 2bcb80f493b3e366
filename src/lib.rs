#![deny(missing_docs)]
//! This crate provides exhaustive-search solvers for two self-contained puzzles: a dual
//! knight's-tour score hunt and a shared-divisor sudoku.

/// The `knight` module searches a region-coloured 6×6 board for two disjoint knight's
/// tours whose cell-value accumulation reaches a fixed target on the same value assignment.
pub mod knight;

/// The `sudoku` module solves a partially-specified 9×9 grid whose rows, read as numbers,
/// must share a common divisor.
pub mod sudoku;

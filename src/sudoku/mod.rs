#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! This module provides functionality for solving the shared-divisor sudoku.

/// The `solver` module contains the core logic for solving the shared-divisor sudoku.
pub mod solver;

//! Squares, knight-move geometry, and the coordinate labels used when
//! printing an answer.

use crate::knight::board::BOARD_SIZE;
use itertools::Itertools;
use smallvec::SmallVec;
use std::fmt;

/// The 8 canonical knight-move offsets, as (row, column) deltas.
pub const KNIGHT_MOVES: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// One board cell, addressed by array row and column.
///
/// Row 0 is the top array row, which carries the highest printed rank: the
/// cell at array position (5, 0) is labelled `a1` and (0, 5) is `f6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    /// Array row, 0 at the top of the board.
    pub row: u8,
    /// Array column, 0 at the `a` file.
    pub col: u8,
}

impl Square {
    /// Creates a square from array coordinates.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Flat cell index for visitation masks.
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.row) * BOARD_SIZE + usize::from(self.col)
    }

    /// Yields every on-board square a knight can reach from here.
    pub fn knight_moves(self) -> impl Iterator<Item = Self> {
        KNIGHT_MOVES.into_iter().filter_map(move |(dr, dc)| {
            let row = self.row.checked_add_signed(dr)?;
            let col = self.col.checked_add_signed(dc)?;
            (usize::from(row) < BOARD_SIZE && usize::from(col) < BOARD_SIZE)
                .then_some(Self { row, col })
        })
    }

    /// Whether `other` is one knight move away from this square.
    #[must_use]
    pub fn is_knight_move_to(self, other: Self) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        (dr, dc) == (1, 2) || (dr, dc) == (2, 1)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            char::from(b'a' + self.col),
            BOARD_SIZE - usize::from(self.row)
        )
    }
}

/// An ordered sequence of visited squares.
///
/// During search this is the backtracking stack; a completed trip is what
/// gets scored and, on success, recorded in the registry. Capacity covers
/// the whole board so pushes never spill to the heap.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Trip(SmallVec<[Square; BOARD_SIZE * BOARD_SIZE]>);

impl Trip {
    /// Creates an empty trip.
    #[must_use]
    pub const fn new() -> Self {
        Self(SmallVec::new_const())
    }

    /// Appends a square.
    pub fn push(&mut self, square: Square) {
        self.0.push(square);
    }

    /// Removes and returns the most recently visited square.
    pub fn pop(&mut self) -> Option<Square> {
        self.0.pop()
    }

    /// Empties the trip.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Number of visited squares (one more than the number of moves).
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no square has been visited yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The square the trip starts on.
    #[must_use]
    pub fn start(&self) -> Option<Square> {
        self.0.first().copied()
    }

    /// The visited squares in order.
    #[must_use]
    pub fn squares(&self) -> &[Square] {
        &self.0
    }
}

impl FromIterator<Square> for Trip {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_labels() {
        assert_eq!(Square::new(5, 0).to_string(), "a1");
        assert_eq!(Square::new(0, 5).to_string(), "f6");
        assert_eq!(Square::new(0, 0).to_string(), "a6");
        assert_eq!(Square::new(5, 5).to_string(), "f1");
        assert_eq!(Square::new(3, 2).to_string(), "c3");
    }

    #[test]
    fn test_corner_has_two_knight_moves() {
        let moves: Vec<_> = Square::new(0, 0).knight_moves().collect();
        assert_eq!(moves, vec![Square::new(2, 1), Square::new(1, 2)]);
    }

    #[test]
    fn test_knight_moves_stay_on_board_and_are_legal() {
        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                let from = Square::new(row, col);
                for to in from.knight_moves() {
                    assert!(usize::from(to.row) < BOARD_SIZE);
                    assert!(usize::from(to.col) < BOARD_SIZE);
                    assert!(from.is_knight_move_to(to));
                }
            }
        }
    }

    #[test]
    fn test_knight_moves_flip_colour_parity() {
        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                let from = Square::new(row, col);
                for to in from.knight_moves() {
                    assert_ne!((from.row + from.col) % 2, (to.row + to.col) % 2);
                }
            }
        }
    }

    #[test]
    fn test_non_knight_move_rejected() {
        assert!(!Square::new(0, 0).is_knight_move_to(Square::new(1, 1)));
        assert!(!Square::new(0, 0).is_knight_move_to(Square::new(0, 0)));
        assert!(!Square::new(2, 2).is_knight_move_to(Square::new(4, 4)));
    }

    #[test]
    fn test_trip_display_joins_labels() {
        let trip: Trip = [Square::new(5, 0), Square::new(3, 1), Square::new(1, 0)]
            .into_iter()
            .collect();
        assert_eq!(trip.to_string(), "a1,b3,a5");
    }

    #[test]
    fn test_trip_push_pop() {
        let mut trip = Trip::new();
        assert!(trip.is_empty());
        trip.push(Square::new(5, 0));
        trip.push(Square::new(3, 1));
        assert_eq!(trip.len(), 2);
        assert_eq!(trip.pop(), Some(Square::new(3, 1)));
        assert_eq!(trip.start(), Some(Square::new(5, 0)));
    }
}

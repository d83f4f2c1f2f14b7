//! Seat coordinates and seat state.

/// A single seat position in the auditorium.
///
/// `row` 0 is the front row (nearest the screen), `col` 0 is the
/// leftmost seat of a row. Both are zero-based; human-facing labels
/// (`A03`) live in the protocol crate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Seat {
    pub row: usize,
    pub col: usize,
}

impl Seat {
    pub fn new(row: usize, col: usize) -> Self {
        Seat { row, col }
    }
}

/// Occupancy of one seat in the grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SeatState {
    #[default]
    Free,
    Occupied,
}

impl SeatState {
    pub fn is_free(self) -> bool {
        matches!(self, SeatState::Free)
    }
}

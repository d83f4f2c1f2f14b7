//! Seating grid for a single auditorium.
//!
//! - Row-major storage of seat states, row 0 at the front.
//! - Free-seat count maintained incrementally so availability is O(1).
//! - The two placement policies are expressed as scan orders: plain
//!   iterators over `Seat`, independent of occupancy. Claiming walks a
//!   scan order and takes the first free seats it meets.

use crate::seat::{Seat, SeatState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatingGrid {
    rows: usize,
    seats_per_row: usize,

    /// `rows * seats_per_row` states; seat `(r, c)` lives at `r * seats_per_row + c`.
    cells: Vec<SeatState>,

    /// Number of `Free` entries in `cells`.
    free: usize,
}

impl SeatingGrid {
    /// Create an all-free grid. Dimensions are validated by the engine.
    pub fn new(rows: usize, seats_per_row: usize) -> Self {
        let capacity = rows * seats_per_row;
        SeatingGrid {
            rows,
            seats_per_row,
            cells: vec![SeatState::Free; capacity],
            free: capacity,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn seats_per_row(&self) -> usize {
        self.seats_per_row
    }

    /// Total number of seats, free or not.
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Number of free seats.
    pub fn available(&self) -> usize {
        self.free
    }

    /// Returns `true` if `seat` lies inside the grid.
    pub fn contains(&self, seat: Seat) -> bool {
        seat.row < self.rows && seat.col < self.seats_per_row
    }

    /// State of one seat, or `None` if it is outside the grid.
    pub fn state(&self, seat: Seat) -> Option<SeatState> {
        if self.contains(seat) {
            Some(self.cells[self.index(seat)])
        } else {
            None
        }
    }

    pub fn is_free(&self, seat: Seat) -> bool {
        self.state(seat).is_some_and(SeatState::is_free)
    }

    /// Seat states of one row, left to right. Empty for rows outside the grid.
    pub fn row_states(&self, row: usize) -> &[SeatState] {
        if row >= self.rows {
            return &[];
        }
        let start = row * self.seats_per_row;
        &self.cells[start..start + self.seats_per_row]
    }

    /// Column where the default policy starts each row.
    pub fn middle_column(&self) -> usize {
        self.seats_per_row / 2
    }

    /// Default placement order: front row to back row; within a row,
    /// from the middle column rightwards, then from just left of the
    /// middle back to column 0.
    pub fn default_order(&self) -> impl Iterator<Item = Seat> {
        let seats_per_row = self.seats_per_row;
        let middle = self.middle_column();

        (0..self.rows).flat_map(move |row| {
            (middle..seats_per_row)
                .chain((0..middle).rev())
                .map(move |col| Seat::new(row, col))
        })
    }

    /// Custom placement order from `start`: the rest of the start row,
    /// every following row, then wrap to row 0 up to the start row.
    ///
    /// The columns of the start row left of `start` come last, so the
    /// order still covers every seat of the grid exactly once.
    pub fn custom_order(&self, start: Seat) -> impl Iterator<Item = Seat> {
        let rows = self.rows;
        let seats_per_row = self.seats_per_row;
        let full_row = move |row: usize| (0..seats_per_row).map(move |col| Seat::new(row, col));

        let start_row_tail = (start.col..seats_per_row).map(move |col| Seat::new(start.row, col));
        let following_rows = (start.row + 1..rows).flat_map(full_row);
        let wrapped_rows = (0..start.row.min(rows)).flat_map(full_row);
        let start_row_head = (0..start.col.min(seats_per_row)).map(move |col| Seat::new(start.row, col));

        start_row_tail
            .chain(following_rows)
            .chain(wrapped_rows)
            .chain(start_row_head)
    }

    /// Claim the first `count` free seats met along `order`.
    ///
    /// Returns the claimed seats in claim order. If the order runs out
    /// before `count` free seats are found nothing is claimed and
    /// `None` is returned.
    pub(crate) fn claim<I>(&mut self, order: I, count: usize) -> Option<Vec<Seat>>
    where
        I: IntoIterator<Item = Seat>,
    {
        let picked: Vec<Seat> = order
            .into_iter()
            .filter(|seat| self.is_free(*seat))
            .take(count)
            .collect();

        if picked.len() < count {
            return None;
        }

        for seat in &picked {
            let idx = self.index(*seat);
            self.cells[idx] = SeatState::Occupied;
        }
        self.free -= picked.len();

        Some(picked)
    }

    /// Mark the given seats free again. Seats outside the grid or
    /// already free are ignored.
    pub(crate) fn release(&mut self, seats: &[Seat]) {
        for seat in seats {
            if !self.contains(*seat) {
                continue;
            }
            let idx = self.index(*seat);
            if self.cells[idx] == SeatState::Occupied {
                self.cells[idx] = SeatState::Free;
                self.free += 1;
            }
        }
    }

    fn index(&self, seat: Seat) -> usize {
        seat.row * self.seats_per_row + seat.col
    }
}

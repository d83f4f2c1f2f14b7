//! Error types for the booking engine.
//!
//! Every fallible engine operation checks all of its preconditions
//! before touching the grid or the ledger, so an `Err` always means
//! "nothing changed".

use thiserror::Error;

use crate::seat::Seat;

/// Largest supported number of rows (one per letter `A`..=`Z`).
pub const MAX_ROWS: usize = 26;

/// Largest supported number of seats in a single row.
pub const MAX_SEATS_PER_ROW: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Rejected auditorium dimensions at initialization.
    #[error(
        "Rows must be between 1 and 26 and seats per row must be between 1 and 50 (got {rows} x {seats_per_row})."
    )]
    Configuration { rows: usize, seats_per_row: usize },

    /// Not enough free seats to satisfy the whole request.
    #[error("Sorry, there are only {available} seats available.")]
    Capacity { requested: usize, available: usize },

    /// A booking request for zero tickets.
    #[error("Number of tickets must be at least 1.")]
    InvalidTicketCount,

    /// A custom start seat that lies outside the grid.
    #[error("Seat (row {}, column {}) is outside the seating map.", .0.row, .0.col)]
    SeatOutOfRange(Seat),

    /// Unknown booking id.
    #[error("Booking ID {0} not found.")]
    NotFound(String),

    /// Any operation other than initialize before the auditorium exists.
    #[error("Cinema has not been initialized.")]
    NotInitialized,
}

impl EngineError {
    /// Short stable name for the error kind, used by the line codec.
    pub fn kind(&self) -> &'static str {
        match self {
            EngineError::Configuration { .. } => "configuration",
            EngineError::Capacity { .. } => "capacity",
            EngineError::InvalidTicketCount => "invalid_ticket_count",
            EngineError::SeatOutOfRange(_) => "seat_out_of_range",
            EngineError::NotFound(_) => "not_found",
            EngineError::NotInitialized => "not_initialized",
        }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;

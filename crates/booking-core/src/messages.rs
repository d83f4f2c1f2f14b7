//! Message types used by the booking engine.
//!
//! These are **transport-agnostic** logical messages:
//! - [`InputMessage`]: what the engine consumes.
//! - [`OutputMessage`]: what the engine produces.
//!
//! The console driver talks to the engine task with these, and the
//! line codec in `booking-protocol` turns them into text for replay.

use crate::booking::Booking;
use crate::error::EngineError;
use crate::seat::Seat;
use crate::seating_grid::SeatingGrid;

/// A request into the booking engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMessage {
    /// Create (or fully reset) the auditorium.
    Initialize(Initialize),

    /// Book tickets, optionally from a custom start seat.
    Book(BookRequest),

    /// Move an existing booking to a new start seat in one step.
    Reseat(Reseat),

    /// Release all seats of a booking and forget it.
    Revert(BookingQuery),

    /// Look up the seats of a booking.
    QueryBooking(BookingQuery),

    /// Number of free seats.
    QueryAvailability,

    /// Snapshot of the seating grid for rendering.
    QuerySeatingMap,
}

impl InputMessage {
    pub fn initialize(title: impl Into<String>, rows: usize, seats_per_row: usize) -> Self {
        InputMessage::Initialize(Initialize {
            title: title.into(),
            rows,
            seats_per_row,
        })
    }

    /// Default placement request.
    pub fn book(tickets: usize) -> Self {
        InputMessage::Book(BookRequest { tickets, start: None })
    }

    /// Custom placement request starting at `start`.
    pub fn book_from(tickets: usize, start: Seat) -> Self {
        InputMessage::Book(BookRequest {
            tickets,
            start: Some(start),
        })
    }

    pub fn reseat(booking_id: impl Into<String>, start: Seat) -> Self {
        InputMessage::Reseat(Reseat {
            booking_id: booking_id.into(),
            start,
        })
    }

    pub fn revert(booking_id: impl Into<String>) -> Self {
        InputMessage::Revert(BookingQuery {
            booking_id: booking_id.into(),
        })
    }

    pub fn query_booking(booking_id: impl Into<String>) -> Self {
        InputMessage::QueryBooking(BookingQuery {
            booking_id: booking_id.into(),
        })
    }
}

/// An event emitted by the booking engine in reply to one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMessage {
    /// The auditorium is ready.
    Initialized(AuditoriumInfo),

    /// A new booking was created (by `Book` or `Reseat`).
    Booked(Booking),

    /// A booking was reverted; carries the seats that were freed.
    Reverted(Booking),

    /// Result of a booking lookup.
    BookingDetails(Booking),

    /// Current free-seat count.
    Availability { available: usize },

    /// Current seating grid.
    SeatingMap(SeatingSnapshot),

    /// The request failed; engine state is unchanged.
    Rejected(EngineError),
}

/// Initialize request (input).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Initialize {
    pub title: String,
    pub rows: usize,
    pub seats_per_row: usize,
}

/// Booking request (input).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRequest {
    pub tickets: usize,

    /// `None` => default placement policy.
    pub start: Option<Seat>,
}

/// Reseat request (input).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reseat {
    pub booking_id: String,
    pub start: Seat,
}

/// Any request addressing a single booking by id (input).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingQuery {
    pub booking_id: String,
}

/// Title and dimensions of the initialized auditorium (output).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditoriumInfo {
    pub title: String,
    pub rows: usize,
    pub seats_per_row: usize,
}

/// Read-only copy of the seating grid (output).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatingSnapshot {
    pub title: String,
    pub grid: SeatingGrid,
}

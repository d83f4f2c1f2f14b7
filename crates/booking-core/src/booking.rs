//! Bookings and booking identifiers.

use std::borrow::Borrow;
use std::fmt;

use crate::seat::Seat;

/// Width of the zero-padded numeric suffix of a booking id.
pub const BOOKING_ID_WIDTH: usize = 4;

/// Prefix used when the engine is built with [`BookingEngine::new`](crate::BookingEngine::new).
pub const DEFAULT_BOOKING_PREFIX: &str = "GIC";

/// Booking identifier: fixed prefix plus zero-padded counter, e.g. `GIC0001`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BookingId(String);

impl BookingId {
    /// Render the id for the `sequence`-th booking of a session.
    pub fn from_sequence(prefix: &str, sequence: usize) -> Self {
        BookingId(format!("{prefix}{sequence:0width$}", width = BOOKING_ID_WIDTH))
    }

    /// Wrap an id string that is already known to be in the ledger.
    pub(crate) fn from_raw(id: String) -> Self {
        BookingId(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Lets the ledger be queried with plain `&str` ids.
impl Borrow<str> for BookingId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A confirmed booking: its id and the seats it holds, in claim order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: BookingId,
    pub seats: Vec<Seat>,
}

impl Booking {
    pub fn new(id: BookingId, seats: Vec<Seat>) -> Self {
        Booking { id, seats }
    }

    /// Number of tickets in this booking.
    pub fn tickets(&self) -> usize {
        self.seats.len()
    }
}

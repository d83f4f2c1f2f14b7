//! Single-auditorium booking engine.
//!
//! - Owns the seating grid and the booking ledger.
//! - Two states: uninitialized (no auditorium) and ready.
//! - Every operation validates all of its inputs before it mutates the
//!   grid or the ledger, so a rejected request leaves no trace.

use std::collections::HashMap;

use crate::booking::{Booking, BookingId, DEFAULT_BOOKING_PREFIX};
use crate::error::{EngineError, EngineResult, MAX_ROWS, MAX_SEATS_PER_ROW};
use crate::messages::{AuditoriumInfo, InputMessage, OutputMessage, SeatingSnapshot};
use crate::seat::Seat;
use crate::seating_grid::SeatingGrid;

/// Booking engine for one auditorium and one show.
#[derive(Debug)]
pub struct BookingEngine {
    /// Textual prefix of every booking id.
    booking_prefix: String,

    /// `None` until the first successful `initialize`.
    auditorium: Option<Auditorium>,
}

/// State that only exists once the engine is initialized.
#[derive(Debug)]
struct Auditorium {
    title: String,
    grid: SeatingGrid,

    /// Booking id -> seats in claim order.
    ledger: HashMap<BookingId, Vec<Seat>>,

    /// Sequence number of the last booking created since initialize.
    booking_counter: usize,
}

impl Default for BookingEngine {
    fn default() -> Self {
        BookingEngine::new()
    }
}

impl BookingEngine {
    /// Create an uninitialized engine using the default id prefix.
    pub fn new() -> Self {
        BookingEngine::with_prefix(DEFAULT_BOOKING_PREFIX)
    }

    /// Create an uninitialized engine whose booking ids start with `prefix`.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        BookingEngine {
            booking_prefix: prefix.into(),
            auditorium: None,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.auditorium.is_some()
    }

    /// Set up (or fully reset) the auditorium.
    ///
    /// On error the previous state, initialized or not, is kept.
    pub fn initialize(
        &mut self,
        title: impl Into<String>,
        rows: usize,
        seats_per_row: usize,
    ) -> EngineResult<()> {
        if !(1..=MAX_ROWS).contains(&rows) || !(1..=MAX_SEATS_PER_ROW).contains(&seats_per_row) {
            return Err(EngineError::Configuration {
                rows,
                seats_per_row,
            });
        }

        self.auditorium = Some(Auditorium {
            title: title.into(),
            grid: SeatingGrid::new(rows, seats_per_row),
            ledger: HashMap::new(),
            booking_counter: 0,
        });
        Ok(())
    }

    pub fn title(&self) -> EngineResult<&str> {
        Ok(&self.ready()?.title)
    }

    pub fn grid(&self) -> EngineResult<&SeatingGrid> {
        Ok(&self.ready()?.grid)
    }

    pub fn available_seat_count(&self) -> EngineResult<usize> {
        Ok(self.ready()?.grid.available())
    }

    /// Number of bookings currently in the ledger.
    pub fn booking_count(&self) -> EngineResult<usize> {
        Ok(self.ready()?.ledger.len())
    }

    /// Book `tickets` seats.
    ///
    /// With `start == None` the default (center-outward, front-to-back)
    /// policy applies; otherwise seats are taken in row-major order
    /// from `start`, wrapping to the front of the grid.
    pub fn book(&mut self, tickets: usize, start: Option<Seat>) -> EngineResult<Booking> {
        let auditorium = self.auditorium.as_mut().ok_or(EngineError::NotInitialized)?;
        auditorium.book(&self.booking_prefix, tickets, start)
    }

    /// Free every seat of a booking and drop it from the ledger.
    ///
    /// Returns the reverted booking.
    pub fn revert_booking(&mut self, booking_id: &str) -> EngineResult<Booking> {
        self.ready_mut()?.revert(booking_id)
    }

    /// Replace a booking with a new one of the same size, placed from
    /// `start` with the custom policy.
    ///
    /// The old seats are released before the new ones are claimed, so
    /// the new booking may reuse them. The returned booking carries a
    /// fresh id.
    pub fn reseat(&mut self, booking_id: &str, start: Seat) -> EngineResult<Booking> {
        let auditorium = self.auditorium.as_mut().ok_or(EngineError::NotInitialized)?;

        let tickets = auditorium
            .ledger
            .get(booking_id)
            .map(Vec::len)
            .ok_or_else(|| EngineError::NotFound(booking_id.to_string()))?;
        if !auditorium.grid.contains(start) {
            return Err(EngineError::SeatOutOfRange(start));
        }

        // Releasing `tickets` seats guarantees the rebook has capacity.
        auditorium.revert(booking_id)?;
        auditorium.book(&self.booking_prefix, tickets, Some(start))
    }

    /// Seats of a booking, in the order they were claimed.
    pub fn get_booking(&self, booking_id: &str) -> EngineResult<&[Seat]> {
        self.ready()?
            .ledger
            .get(booking_id)
            .map(Vec::as_slice)
            .ok_or_else(|| EngineError::NotFound(booking_id.to_string()))
    }

    pub fn snapshot(&self) -> EngineResult<SeatingSnapshot> {
        let auditorium = self.ready()?;
        Ok(SeatingSnapshot {
            title: auditorium.title.clone(),
            grid: auditorium.grid.clone(),
        })
    }

    /// Process a single input message and return the resulting event.
    ///
    /// Failures are reported as [`OutputMessage::Rejected`].
    pub fn process_message(&mut self, msg: InputMessage) -> OutputMessage {
        let result = match msg {
            InputMessage::Initialize(init) => self
                .initialize(init.title.clone(), init.rows, init.seats_per_row)
                .map(|()| {
                    OutputMessage::Initialized(AuditoriumInfo {
                        title: init.title,
                        rows: init.rows,
                        seats_per_row: init.seats_per_row,
                    })
                }),
            InputMessage::Book(req) => self.book(req.tickets, req.start).map(OutputMessage::Booked),
            InputMessage::Reseat(req) => self
                .reseat(&req.booking_id, req.start)
                .map(OutputMessage::Booked),
            InputMessage::Revert(query) => self
                .revert_booking(&query.booking_id)
                .map(OutputMessage::Reverted),
            InputMessage::QueryBooking(query) => self
                .get_booking(&query.booking_id)
                .map(|seats| {
                    OutputMessage::BookingDetails(Booking::new(
                        BookingId::from_raw(query.booking_id),
                        seats.to_vec(),
                    ))
                }),
            InputMessage::QueryAvailability => self
                .available_seat_count()
                .map(|available| OutputMessage::Availability { available }),
            InputMessage::QuerySeatingMap => self.snapshot().map(OutputMessage::SeatingMap),
        };

        result.unwrap_or_else(OutputMessage::Rejected)
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    fn ready(&self) -> EngineResult<&Auditorium> {
        self.auditorium.as_ref().ok_or(EngineError::NotInitialized)
    }

    fn ready_mut(&mut self) -> EngineResult<&mut Auditorium> {
        self.auditorium.as_mut().ok_or(EngineError::NotInitialized)
    }
}

impl Auditorium {
    fn book(&mut self, prefix: &str, tickets: usize, start: Option<Seat>) -> EngineResult<Booking> {
        if tickets == 0 {
            return Err(EngineError::InvalidTicketCount);
        }
        if let Some(seat) = start {
            if !self.grid.contains(seat) {
                return Err(EngineError::SeatOutOfRange(seat));
            }
        }

        let available = self.grid.available();
        if tickets > available {
            return Err(EngineError::Capacity {
                requested: tickets,
                available,
            });
        }

        let claimed = match start {
            Some(seat) => {
                let order = self.grid.custom_order(seat);
                self.grid.claim(order, tickets)
            }
            None => {
                let order = self.grid.default_order();
                self.grid.claim(order, tickets)
            }
        };
        // Both scan orders cover the whole grid, so this only fires if
        // the free count and the grid disagree.
        let seats = claimed.ok_or(EngineError::Capacity {
            requested: tickets,
            available,
        })?;

        self.booking_counter += 1;
        let id = BookingId::from_sequence(prefix, self.booking_counter);
        self.ledger.insert(id.clone(), seats.clone());

        Ok(Booking::new(id, seats))
    }

    fn revert(&mut self, booking_id: &str) -> EngineResult<Booking> {
        let (id, seats) = self
            .ledger
            .remove_entry(booking_id)
            .ok_or_else(|| EngineError::NotFound(booking_id.to_string()))?;
        self.grid.release(&seats);

        Ok(Booking::new(id, seats))
    }
}

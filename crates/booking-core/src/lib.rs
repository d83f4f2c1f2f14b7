//! booking-core
//!
//! Pure booking engine logic:
//! - seats and seat state
//! - seating grid with the default and custom placement orders
//! - bookings and booking ids
//! - the single-auditorium booking engine
//! - messages (input/output types)

pub mod seat;
pub mod seating_grid;
pub mod booking;
pub mod messages;
pub mod booking_engine;
pub mod error;

pub use seat::{Seat, SeatState};
pub use seating_grid::SeatingGrid;
pub use booking::{Booking, BookingId, BOOKING_ID_WIDTH, DEFAULT_BOOKING_PREFIX};

pub use messages::{
    AuditoriumInfo,
    BookRequest,
    BookingQuery,
    Initialize,
    InputMessage,
    OutputMessage,
    Reseat,
    SeatingSnapshot,
};

pub use booking_engine::BookingEngine;
pub use error::{EngineError, EngineResult, MAX_ROWS, MAX_SEATS_PER_ROW};

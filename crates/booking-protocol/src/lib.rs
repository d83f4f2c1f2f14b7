//! booking-protocol
//!
//! Text-level encodings around the booking engine.
//!
//! - [`seat_label`]  : `A03`-style seat labels
//! - [`line_codec`]  : line-per-command format for scripted replay
//! - [`seating_map`] : seating map rendering for the console

pub mod seat_label;
pub mod line_codec;
pub mod seating_map;

pub use seat_label::{format_seat_label, format_seat_list, parse_seat_label, row_letter, LabelError};
pub use line_codec::{format_output_line, parse_input_line};
pub use seating_map::{render_seating_map, MapGlyphs};

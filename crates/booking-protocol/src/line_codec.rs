//! Line codec for scripted sessions.
//!
//! One command per line, fields separated by commas, whitespace around
//! fields ignored. Blank lines and `#` comments are skipped.
//!
//! Input format (line → `InputMessage`):
//!
//! - Initialize: `I, title, rows, seatsPerRow`
//! - Book:       `B, tickets` or `B, tickets, startSeat`
//! - Reseat:     `M, bookingId, startSeat`
//! - Revert:     `X, bookingId`
//! - Lookup:     `G, bookingId`
//! - Free seats: `A`
//! - Map:        `S`
//!
//! Output format (`OutputMessage` → line):
//!
//! - Initialized:    `I, title, rows, seatsPerRow`
//! - Booked:         `B, bookingId, seats`
//! - Reverted:       `X, bookingId, seats`
//! - BookingDetails: `G, bookingId, seats`
//! - Availability:   `A, available`
//! - SeatingMap:     `S, rows, seatsPerRow, available`
//! - Rejected:       `E, kind, message`
//!
//! `seats` is a space-separated list of seat labels (`A06 A07`).

use booking_core::{InputMessage, OutputMessage};

use crate::seat_label::{format_seat_list, parse_seat_label};

/// Parse a single line into an `InputMessage`.
///
/// Returns `None` for blank lines, comments and anything malformed.
pub fn parse_input_line(line: &str) -> Option<InputMessage> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let tokens = split_and_trim(trimmed, ',');
    match tokens.first()?.as_str() {
        "I" => parse_initialize(&tokens),
        "B" => parse_book(&tokens),
        "M" => parse_reseat(&tokens),
        "X" if tokens.len() == 2 => Some(InputMessage::revert(tokens[1].clone())),
        "G" if tokens.len() == 2 => Some(InputMessage::query_booking(tokens[1].clone())),
        "A" if tokens.len() == 1 => Some(InputMessage::QueryAvailability),
        "S" if tokens.len() == 1 => Some(InputMessage::QuerySeatingMap),
        _ => None,
    }
}

fn parse_initialize(tokens: &[String]) -> Option<InputMessage> {
    // I, title, rows, seatsPerRow
    if tokens.len() != 4 || tokens[1].is_empty() {
        return None;
    }

    let rows = parse_usize(&tokens[2])?;
    let seats_per_row = parse_usize(&tokens[3])?;

    Some(InputMessage::initialize(tokens[1].clone(), rows, seats_per_row))
}

fn parse_book(tokens: &[String]) -> Option<InputMessage> {
    // B, tickets[, startSeat]
    match tokens.len() {
        2 => Some(InputMessage::book(parse_usize(&tokens[1])?)),
        3 => {
            let tickets = parse_usize(&tokens[1])?;
            let start = parse_seat_label(&tokens[2]).ok()?;
            Some(InputMessage::book_from(tickets, start))
        }
        _ => None,
    }
}

fn parse_reseat(tokens: &[String]) -> Option<InputMessage> {
    // M, bookingId, startSeat
    if tokens.len() != 3 {
        return None;
    }

    let start = parse_seat_label(&tokens[2]).ok()?;
    Some(InputMessage::reseat(tokens[1].clone(), start))
}

/// Format an `OutputMessage` as a single line.
pub fn format_output_line(msg: &OutputMessage) -> String {
    match msg {
        OutputMessage::Initialized(info) => {
            format!("I, {}, {}, {}", info.title, info.rows, info.seats_per_row)
        }
        OutputMessage::Booked(b) => format!("B, {}, {}", b.id, format_seat_list(&b.seats)),
        OutputMessage::Reverted(b) => format!("X, {}, {}", b.id, format_seat_list(&b.seats)),
        OutputMessage::BookingDetails(b) => {
            format!("G, {}, {}", b.id, format_seat_list(&b.seats))
        }
        OutputMessage::Availability { available } => format!("A, {}", available),
        OutputMessage::SeatingMap(snapshot) => format!(
            "S, {}, {}, {}",
            snapshot.grid.rows(),
            snapshot.grid.seats_per_row(),
            snapshot.grid.available()
        ),
        OutputMessage::Rejected(err) => format!("E, {}, {}", err.kind(), err),
    }
}

// -----------------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------------

fn split_and_trim(s: &str, delimiter: char) -> Vec<String> {
    s.split(delimiter)
        .map(|tok| tok.trim().to_string())
        .collect()
}

fn parse_usize(s: &str) -> Option<usize> {
    s.parse::<usize>().ok()
}

#[cfg(test)]
mod tests {
    use booking_core::{Booking, BookingEngine, EngineError, Seat};

    use super::*;

    #[test]
    fn parses_every_command() {
        assert_eq!(
            parse_input_line("I, Inception, 8, 10"),
            Some(InputMessage::initialize("Inception", 8, 10))
        );
        assert_eq!(parse_input_line("B,4"), Some(InputMessage::book(4)));
        assert_eq!(
            parse_input_line("B, 3, B03"),
            Some(InputMessage::book_from(3, Seat::new(1, 2)))
        );
        assert_eq!(
            parse_input_line("M, GIC0001, C01"),
            Some(InputMessage::reseat("GIC0001", Seat::new(2, 0)))
        );
        assert_eq!(parse_input_line("X, GIC0002"), Some(InputMessage::revert("GIC0002")));
        assert_eq!(
            parse_input_line("G, GIC0003"),
            Some(InputMessage::query_booking("GIC0003"))
        );
        assert_eq!(parse_input_line("A"), Some(InputMessage::QueryAvailability));
        assert_eq!(parse_input_line(" S "), Some(InputMessage::QuerySeatingMap));
    }

    #[test]
    fn skips_comments_blank_and_malformed_lines() {
        assert_eq!(parse_input_line(""), None);
        assert_eq!(parse_input_line("# setup"), None);
        assert_eq!(parse_input_line("I, Inception, eight, 10"), None);
        assert_eq!(parse_input_line("B"), None);
        assert_eq!(parse_input_line("B, 2, 9Z"), None);
        assert_eq!(parse_input_line("A, 1"), None);
        assert_eq!(parse_input_line("Z, 1"), None);
    }

    #[test]
    fn formats_outputs() {
        let booked = OutputMessage::Booked(Booking::new(
            booking_core::BookingId::from_sequence("GIC", 1),
            vec![Seat::new(0, 5), Seat::new(0, 6)],
        ));
        assert_eq!(format_output_line(&booked), "B, GIC0001, A06 A07");

        assert_eq!(
            format_output_line(&OutputMessage::Availability { available: 78 }),
            "A, 78"
        );

        let rejected = OutputMessage::Rejected(EngineError::NotFound("GIC0009".into()));
        assert_eq!(
            format_output_line(&rejected),
            "E, not_found, Booking ID GIC0009 not found."
        );
    }

    #[test]
    fn seating_map_line_reports_dimensions_and_free_seats() {
        let mut engine = BookingEngine::new();
        engine.initialize("Inception", 3, 4).unwrap();
        engine.book(5, None).unwrap();

        let out = engine.process_message(InputMessage::QuerySeatingMap);
        assert_eq!(format_output_line(&out), "S, 3, 4, 7");
    }
}

//! Human-facing seat labels.
//!
//! A label is the row letter (`A` = front row) followed by the 1-based
//! seat number, zero-padded to two digits on output: row 0, column 2
//! is `A03`. Parsing accepts lower case and unpadded numbers (`b3`).
//!
//! Only the shape of a label is checked here; whether the seat exists
//! in the current auditorium is the engine's call.

use booking_core::{Seat, MAX_ROWS};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    #[error("seat label is empty")]
    Empty,

    #[error("invalid row letter {0:?} in seat label")]
    InvalidRow(char),

    #[error("invalid seat number {0:?} in seat label")]
    InvalidNumber(String),
}

/// Row letter for a zero-based row index (`0` -> `'A'`).
///
/// Rows beyond `Z` never exist in a valid auditorium; they render as `'?'`.
pub fn row_letter(row: usize) -> char {
    if row < MAX_ROWS {
        (b'A' + row as u8) as char
    } else {
        '?'
    }
}

/// Format a seat as `<RowLetter><2-digit seat number>`, e.g. `A03`.
pub fn format_seat_label(seat: Seat) -> String {
    format!("{}{:02}", row_letter(seat.row), seat.col + 1)
}

/// Format seats as a space-separated list of labels.
pub fn format_seat_list(seats: &[Seat]) -> String {
    seats
        .iter()
        .map(|seat| format_seat_label(*seat))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a label such as `B03` into `Seat { row: 1, col: 2 }`.
pub fn parse_seat_label(label: &str) -> Result<Seat, LabelError> {
    let label = label.trim();
    let mut chars = label.chars();

    let letter = chars.next().ok_or(LabelError::Empty)?;
    let upper = letter.to_ascii_uppercase();
    if !upper.is_ascii_uppercase() {
        return Err(LabelError::InvalidRow(letter));
    }
    let row = (upper as u8 - b'A') as usize;

    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LabelError::InvalidNumber(digits.to_string()));
    }
    let number: usize = digits
        .parse()
        .map_err(|_| LabelError::InvalidNumber(digits.to_string()))?;
    if number == 0 {
        return Err(LabelError::InvalidNumber(digits.to_string()));
    }

    Ok(Seat::new(row, number - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_two_digit_seat_number() {
        assert_eq!(format_seat_label(Seat::new(0, 2)), "A03");
        assert_eq!(format_seat_label(Seat::new(7, 9)), "H10");
        assert_eq!(format_seat_label(Seat::new(25, 49)), "Z50");
    }

    #[test]
    fn parses_padded_unpadded_and_lower_case() {
        assert_eq!(parse_seat_label("B03"), Ok(Seat::new(1, 2)));
        assert_eq!(parse_seat_label("B3"), Ok(Seat::new(1, 2)));
        assert_eq!(parse_seat_label(" c10 "), Ok(Seat::new(2, 9)));
    }

    #[test]
    fn rejects_malformed_labels() {
        assert_eq!(parse_seat_label(""), Err(LabelError::Empty));
        assert_eq!(parse_seat_label("3B"), Err(LabelError::InvalidRow('3')));
        assert_eq!(parse_seat_label("B"), Err(LabelError::InvalidNumber(String::new())));
        assert_eq!(parse_seat_label("B0"), Err(LabelError::InvalidNumber("0".into())));
        assert_eq!(parse_seat_label("B-1"), Err(LabelError::InvalidNumber("-1".into())));
    }
}

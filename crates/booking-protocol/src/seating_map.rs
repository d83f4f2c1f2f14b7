//! Text rendering of the seating grid.
//!
//! The screen is drawn on top and the rows below it back to front, so
//! the front row (`A`) ends up at the bottom, right above the seat
//! numbers. Every seat takes a three-character column.

use booking_core::{Seat, SeatingGrid};
use serde::Deserialize;

use crate::seat_label::row_letter;

const SCREEN_BANNER: &str = "S C R E E N";
const CELL_WIDTH: usize = 3;

/// Characters used for each kind of seat on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MapGlyphs {
    /// Seat nobody holds.
    pub free: char,
    /// Seat held by some other booking.
    pub taken: char,
    /// Seat held by the booking being displayed.
    pub selected: char,
}

impl Default for MapGlyphs {
    fn default() -> Self {
        MapGlyphs {
            free: '.',
            taken: '#',
            selected: 'O',
        }
    }
}

/// Render the grid, marking `highlight` (the displayed booking's seats)
/// with `glyphs.selected`.
pub fn render_seating_map(grid: &SeatingGrid, highlight: &[Seat], glyphs: &MapGlyphs) -> String {
    let width = 1 + CELL_WIDTH * grid.seats_per_row();
    let banner_pad = width.saturating_sub(SCREEN_BANNER.len()) / 2;

    let mut out = String::new();
    out.push_str(&" ".repeat(banner_pad));
    out.push_str(SCREEN_BANNER);
    out.push('\n');
    out.push_str(&"-".repeat(width));
    out.push('\n');

    for row in (0..grid.rows()).rev() {
        out.push(row_letter(row));
        for (col, state) in grid.row_states(row).iter().enumerate() {
            let glyph = if highlight.contains(&Seat::new(row, col)) {
                glyphs.selected
            } else if state.is_free() {
                glyphs.free
            } else {
                glyphs.taken
            };
            out.push_str(&format!("{:>w$}", glyph, w = CELL_WIDTH));
        }
        out.push('\n');
    }

    out.push(' ');
    for col in 0..grid.seats_per_row() {
        out.push_str(&format!("{:>w$}", col + 1, w = CELL_WIDTH));
    }
    out.push('\n');

    out
}

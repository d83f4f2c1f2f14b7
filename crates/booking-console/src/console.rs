//! Interactive menu driver.
//!
//! Reads one answer per line from any async buffered reader and writes
//! prompts and results to any async writer, so the same code drives a
//! terminal session and the in-memory sessions used in tests.
//!
//! The console holds no booking state of its own: everything it shows
//! comes back from the engine task through `EngineHandle`.

use anyhow::{bail, Result};
use booking_core::{Booking, InputMessage, OutputMessage, Seat};
use booking_protocol::{format_seat_list, parse_seat_label, render_seating_map};
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::config::ConsoleConfig;
use crate::types::EngineHandle;

/// What the menu loop should do after a sub-flow returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Menu,
    Exit,
}

pub struct Console<R, W> {
    input: R,
    output: W,
    engine: EngineHandle,
    config: ConsoleConfig,

    /// Movie title, known once the auditorium is initialized.
    title: String,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, output: W, engine: EngineHandle, config: ConsoleConfig) -> Self {
        Console {
            input,
            output,
            engine,
            config,
            title: String::new(),
        }
    }

    /// Give back the writer, e.g. to inspect a captured session.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the whole session: setup, then the main menu until the user
    /// exits or input ends.
    pub async fn run(&mut self) -> Result<()> {
        if self.setup().await? {
            while self.main_menu().await? == Flow::Menu {}
        }

        let farewell = format!("\nThank you for using {} system. Bye!\n", self.config.brand);
        self.write(&farewell).await
    }

    // -------------------------------------------------------------------------
    // Flows
    // -------------------------------------------------------------------------

    /// Ask for `[Title] [Row] [SeatsPerRow]` until the engine accepts it.
    ///
    /// Returns `false` if input ended first.
    async fn setup(&mut self) -> Result<bool> {
        loop {
            self.write(
                "Please define movie title and seating map in [Title] [Row] [SeatsPerRow] format:\n",
            )
            .await?;
            let Some(line) = self.read_line().await? else {
                return Ok(false);
            };

            let Some((title, rows, seats_per_row)) = parse_setup_line(&line) else {
                self.write("Invalid input. Expected e.g. Inception 8 10\n").await?;
                continue;
            };

            match self
                .engine
                .request(InputMessage::initialize(title, rows, seats_per_row))
                .await?
            {
                OutputMessage::Initialized(info) => {
                    self.title = info.title;
                    return Ok(true);
                }
                OutputMessage::Rejected(err) => self.write(&format!("{err}\n")).await?,
                other => bail!("unexpected engine response to initialize: {other:?}"),
            }
        }
    }

    async fn main_menu(&mut self) -> Result<Flow> {
        let available = self.available_seats().await?;
        let menu = format!(
            "\nWelcome to {}\n[1] Book tickets for {} ({} seats available)\n[2] Check bookings\n[3] Exit\nPlease enter your selection:\n",
            self.config.brand, self.title, available
        );
        self.write(&menu).await?;

        let Some(line) = self.read_line().await? else {
            return Ok(Flow::Exit);
        };
        match line.trim() {
            "1" => self.book_tickets().await,
            "2" => self.check_bookings().await,
            "3" => Ok(Flow::Exit),
            _ => {
                self.write("Invalid option. Please select 1, 2, or 3.\n").await?;
                Ok(Flow::Menu)
            }
        }
    }

    async fn book_tickets(&mut self) -> Result<Flow> {
        loop {
            self.write("\nEnter number of tickets to book, or enter blank to go back to main menu:\n")
                .await?;
            let Some(line) = self.read_line().await? else {
                return Ok(Flow::Exit);
            };
            let line = line.trim();
            if line.is_empty() {
                return Ok(Flow::Menu);
            }

            let Ok(tickets) = line.parse::<usize>() else {
                self.write("Invalid number. Try again.\n").await?;
                continue;
            };

            match self.engine.request(InputMessage::book(tickets)).await? {
                OutputMessage::Booked(booking) => {
                    let msg = format!(
                        "\nSuccessfully reserved {} {} tickets.\n",
                        booking.tickets(),
                        self.title
                    );
                    self.write(&msg).await?;
                    self.show_booking(&booking).await?;
                    return self.offer_reseat(booking).await;
                }
                OutputMessage::Rejected(err) => self.write(&format!("{err}\n")).await?,
                other => bail!("unexpected engine response to book: {other:?}"),
            }
        }
    }

    /// Let the user move a fresh booking to a seat of their choice until
    /// they accept it with a blank line.
    async fn offer_reseat(&mut self, mut booking: Booking) -> Result<Flow> {
        loop {
            self.write("\nEnter blank to accept seat selection, or enter new seating position (e.g. B03):\n")
                .await?;
            let Some(line) = self.read_line().await? else {
                return Ok(Flow::Exit);
            };
            let line = line.trim();
            if line.is_empty() {
                self.write(&format!("\nBooking id: {} confirmed.\n", booking.id))
                    .await?;
                return Ok(Flow::Menu);
            }

            let start: Seat = match parse_seat_label(line) {
                Ok(seat) => seat,
                Err(err) => {
                    self.write(&format!("Invalid seating position {line:?}: {err}.\n"))
                        .await?;
                    continue;
                }
            };

            let request = InputMessage::reseat(booking.id.as_str(), start);
            match self.engine.request(request).await? {
                OutputMessage::Booked(moved) => {
                    debug!(from = %booking.id, to = %moved.id, "booking reseated");
                    booking = moved;
                    self.show_booking(&booking).await?;
                }
                OutputMessage::Rejected(err) => self.write(&format!("{err}\n")).await?,
                other => bail!("unexpected engine response to reseat: {other:?}"),
            }
        }
    }

    async fn check_bookings(&mut self) -> Result<Flow> {
        loop {
            self.write("\nEnter booking id, or enter blank to go back to main menu:\n")
                .await?;
            let Some(line) = self.read_line().await? else {
                return Ok(Flow::Exit);
            };
            let booking_id = line.trim();
            if booking_id.is_empty() {
                return Ok(Flow::Menu);
            }

            match self
                .engine
                .request(InputMessage::query_booking(booking_id))
                .await?
            {
                OutputMessage::BookingDetails(booking) => self.show_booking(&booking).await?,
                OutputMessage::Rejected(err) => self.write(&format!("{err}\n")).await?,
                other => bail!("unexpected engine response to booking lookup: {other:?}"),
            }
        }
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    /// Print the booking id, its seat labels and the seating map with
    /// the booking's seats highlighted.
    async fn show_booking(&mut self, booking: &Booking) -> Result<()> {
        let grid = match self.engine.request(InputMessage::QuerySeatingMap).await? {
            OutputMessage::SeatingMap(snapshot) => snapshot.grid,
            other => bail!("unexpected engine response to seating map query: {other:?}"),
        };

        let text = format!(
            "\nBooking id: {}\nSelected seats: {}\n\n{}",
            booking.id,
            format_seat_list(&booking.seats),
            render_seating_map(&grid, &booking.seats, &self.config.glyphs)
        );
        self.write(&text).await
    }

    async fn available_seats(&mut self) -> Result<usize> {
        match self.engine.request(InputMessage::QueryAvailability).await? {
            OutputMessage::Availability { available } => Ok(available),
            other => bail!("unexpected engine response to availability query: {other:?}"),
        }
    }

    /// Next answer, or `None` at end of input. Bytes that are not UTF-8
    /// are replaced, so they land in the invalid-input branches.
    async fn read_line(&mut self) -> Result<Option<String>> {
        let line = read_raw_line(&mut self.input)
            .await?
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned());
        debug!(?line, "console input");
        Ok(line)
    }

    async fn write(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }
}

/// Read one line as raw bytes, without the trailing `\n` or `\r\n`.
///
/// Returns `None` at end of input.
pub(crate) async fn read_raw_line<R>(input: &mut R) -> io::Result<Option<Vec<u8>>>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf).await? == 0 {
        return Ok(None);
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(Some(buf))
}

/// Split `Title With Spaces 8 10` into title, rows and seats per row.
///
/// The last two whitespace-separated fields are the dimensions; all
/// fields before them form the title.
pub fn parse_setup_line(line: &str) -> Option<(String, usize, usize)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 3 {
        return None;
    }

    let (title, dims) = fields.split_at(fields.len() - 2);
    let rows = dims[0].parse().ok()?;
    let seats_per_row = dims[1].parse().ok()?;

    Some((title.join(" "), rows, seats_per_row))
}

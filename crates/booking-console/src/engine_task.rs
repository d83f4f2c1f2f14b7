//! Central engine loop.
//!
//! This task owns the `BookingEngine` instance and processes all
//! `EngineRequest`s in arrival order. Nothing else holds the engine,
//! so a reseat (revert + rebook) can never interleave with another
//! request.

use booking_core::{BookingEngine, OutputMessage};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::types::{EngineHandle, EngineRequest, EngineRx};

/// Spawn the engine task and return a handle to it.
///
/// The task ends once every `EngineHandle` clone has been dropped.
pub fn spawn_engine(engine: BookingEngine) -> (EngineHandle, JoinHandle<()>) {
    let (engine_tx, engine_rx) = mpsc::unbounded_channel();
    let task = tokio::spawn(run_engine_loop(engine, engine_rx));
    (EngineHandle::new(engine_tx), task)
}

/// Run the central engine processing loop.
pub async fn run_engine_loop(mut engine: BookingEngine, mut engine_rx: EngineRx) {
    while let Some(req) = engine_rx.recv().await {
        let EngineRequest { msg, reply } = req;
        debug!(?msg, "engine request");

        let output = engine.process_message(msg);
        log_outcome(&output);

        if reply.send(output).is_err() {
            debug!("requester went away before the reply was sent");
        }
    }

    info!("Engine loop shutting down (engine_rx closed)");
}

fn log_outcome(output: &OutputMessage) {
    match output {
        OutputMessage::Initialized(info) => info!(
            title = %info.title,
            rows = info.rows,
            seats_per_row = info.seats_per_row,
            "auditorium initialized"
        ),
        OutputMessage::Booked(booking) => info!(
            booking_id = %booking.id,
            tickets = booking.tickets(),
            "booking confirmed"
        ),
        OutputMessage::Reverted(booking) => info!(booking_id = %booking.id, "booking reverted"),
        OutputMessage::Rejected(err) => warn!(kind = err.kind(), %err, "request rejected"),
        OutputMessage::BookingDetails(_)
        | OutputMessage::Availability { .. }
        | OutputMessage::SeatingMap(_) => {}
    }
}

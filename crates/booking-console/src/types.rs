//! Shared types for the console and the engine task.
//!
//! This module defines:
//! - `EngineRequest`: one input message plus the channel for its reply
//! - channel aliases between the console and the engine loop
//! - `EngineHandle`: the cloneable front door to the engine task

use anyhow::{anyhow, Context, Result};
use booking_core::{InputMessage, OutputMessage};
use tokio::sync::{mpsc, oneshot};

/// Message flowing from the console into the engine task.
#[derive(Debug)]
pub struct EngineRequest {
    pub msg: InputMessage,
    pub reply: oneshot::Sender<OutputMessage>,
}

/// Channel from console → engine task.
pub type EngineTx = mpsc::UnboundedSender<EngineRequest>;
pub type EngineRx = mpsc::UnboundedReceiver<EngineRequest>;

/// Handle used to talk to a running engine task.
///
/// Requests are processed one at a time in arrival order, so each
/// call observes the engine exactly as the previous call left it.
#[derive(Debug, Clone)]
pub struct EngineHandle {
    tx: EngineTx,
}

impl EngineHandle {
    pub fn new(tx: EngineTx) -> Self {
        EngineHandle { tx }
    }

    /// Send one request and wait for the engine's answer.
    pub async fn request(&self, msg: InputMessage) -> Result<OutputMessage> {
        let (reply, reply_rx) = oneshot::channel();
        self.tx
            .send(EngineRequest { msg, reply })
            .map_err(|_| anyhow!("engine task has shut down"))?;

        reply_rx.await.context("engine task dropped the request")
    }
}

//! Scripted sessions in the line codec format.
//!
//! Every parsable line is sent to the engine task and the reply is
//! written back as one output line. Lines that do not parse, or are
//! not UTF-8, are logged and skipped.

use anyhow::Result;
use booking_protocol::{format_output_line, parse_input_line};
use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt};
use tracing::warn;

use crate::console::read_raw_line;
use crate::types::EngineHandle;

/// Replay `input` against the engine, writing replies to `output`.
///
/// Returns the number of commands processed.
pub async fn replay<R, W>(mut input: R, output: &mut W, engine: EngineHandle) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut processed = 0;
    let mut line_no = 0;

    while let Some(bytes) = read_raw_line(&mut input).await? {
        line_no += 1;
        let Ok(line) = String::from_utf8(bytes) else {
            warn!(line_no, "skipping line that is not valid UTF-8");
            continue;
        };
        let Some(msg) = parse_input_line(&line) else {
            let trimmed = line.trim();
            if !trimmed.is_empty() && !trimmed.starts_with('#') {
                warn!(line_no, line = %trimmed, "skipping unparseable line");
            }
            continue;
        };

        let reply = engine.request(msg).await?;
        let mut text = format_output_line(&reply);
        text.push('\n');
        output.write_all(text.as_bytes()).await?;
        processed += 1;
    }

    output.flush().await?;
    Ok(processed)
}

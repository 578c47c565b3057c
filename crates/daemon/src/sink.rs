// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The concrete [`ClientSink`] that streams a job's output frames back
//! over a client's TCP connection.
//!
//! `ClientSink::send_frame` is a synchronous call made from the
//! scheduler; the actual socket write is async. A dedicated writer task
//! per connection drains an unbounded channel and performs the framed
//! writes, mirroring the capture-sink/drain-task split used by the
//! pipeline executor (`jss_shell::exec::capture`).

use jss_core::ClientSink;
use tokio::io::AsyncWrite;
use tokio::sync::mpsc;

use crate::protocol;

/// Sends frames by queueing them for a writer task; never blocks the
/// scheduler on a slow or dead peer (§5 "Cancellation and timeouts").
#[derive(Debug)]
pub struct TcpSink {
    tx: mpsc::UnboundedSender<Vec<u8>>,
}

impl TcpSink {
    /// Spawns the writer task and returns the paired sink. The writer
    /// exits once every clone of the returned sink has been dropped, or
    /// on the first write error (a broken pipe is suppressed, not
    /// propagated — §5).
    pub fn spawn<W>(mut writer: W) -> Self
    where
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<Vec<u8>>();
        tokio::spawn(async move {
            while let Some(payload) = rx.recv().await {
                if protocol::write_frame(&mut writer, &payload).await.is_err() {
                    break;
                }
            }
        });
        Self { tx }
    }
}

impl ClientSink for TcpSink {
    fn send_frame(&self, payload: Vec<u8>) {
        let _ = self.tx.send(payload);
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;

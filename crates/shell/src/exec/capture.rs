// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Combined output capture (§4.5, §4.6).
//!
//! The original design fans every producing fd (the final stage's stdout,
//! every stage's stderr, synthesized error text) into one OS pipe that the
//! parent reads to EOF. We reproduce the same "many writers, one ordered
//! stream" shape with an unbounded channel of byte chunks instead: each
//! fd gets its own draining task, and the collector reads until every
//! sender side — including the one the caller holds — has dropped.

use tokio::io::AsyncReadExt;
use tokio::sync::mpsc;

use crate::limits::INITIAL_CAPTURE_CAPACITY;

/// The write side: spawn drains against child fds, or push a synthesized
/// message (e.g. `Command not found: foo`) directly.
pub struct CaptureSink {
    tx: mpsc::UnboundedSender<Vec<u8>>,
}

/// The read side: collects every chunk until all senders are gone.
pub struct CaptureCollector {
    rx: mpsc::UnboundedReceiver<Vec<u8>>,
}

impl CaptureSink {
    pub fn new() -> (CaptureSink, CaptureCollector) {
        let (tx, rx) = mpsc::unbounded_channel();
        (CaptureSink { tx }, CaptureCollector { rx })
    }

    /// Write a synthesized message (exec failure, file-not-found) as if it
    /// had been written by the child to the shared capture stream.
    pub fn push_message(&self, bytes: Vec<u8>) {
        let _ = self.tx.send(bytes);
    }

    /// Spawn a task that reads `reader` to EOF, forwarding chunks as they
    /// arrive. Read errors end the drain silently, matching a pipe whose
    /// writer vanished.
    pub fn spawn_drain<R>(&self, mut reader: R)
    where
        R: tokio::io::AsyncRead + Unpin + Send + 'static,
    {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let mut buf = vec![0u8; INITIAL_CAPTURE_CAPACITY];
            loop {
                match reader.read(&mut buf).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => {
                        if tx.send(buf[..n].to_vec()).is_err() {
                            break;
                        }
                    }
                }
            }
        });
    }
}

impl CaptureCollector {
    pub async fn collect(mut self) -> Vec<u8> {
        let mut out = Vec::with_capacity(INITIAL_CAPTURE_CAPACITY);
        while let Some(chunk) = self.rx.recv().await {
            out.extend_from_slice(&chunk);
        }
        out
    }
}

#[cfg(test)]
#[path = "capture_tests.rs"]
mod tests;

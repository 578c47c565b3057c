// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-client intake (§4.8): one task per connection, reading framed
//! command lines and turning them into enqueued [`Job`]s.

use std::sync::Arc;

use jss_core::{ClientId, Job, JobIdGen};
use jss_engine::{SharedState, ServerLog};
use jss_shell::MAX_COMMAND_LINE;
use tokio::io::{AsyncRead, AsyncWrite};

use crate::protocol::{self, ProtocolError};
use crate::sink::TcpSink;

/// Default `initial_burst` when a demo command omits its argument or
/// gives one that does not parse (§4.8).
const DEFAULT_DEMO_BURST: i64 = 5;

/// Classification of one submitted command line.
enum Classified {
    Exit,
    Empty,
    Demo(i64),
    ShellCmd,
}

/// Classify a command line per §4.8: strip a single leading `./` or
/// `/`, then match `demo` as a prefix (adopted prefix-matching per
/// SPEC_FULL.md's resolution of the open question — `demo_other` is
/// deliberately misclassified as a Demo job).
fn classify(line: &str) -> Classified {
    if line == "exit" {
        return Classified::Exit;
    }
    if line.is_empty() {
        return Classified::Empty;
    }

    let stripped = line.strip_prefix("./").or_else(|| line.strip_prefix('/')).unwrap_or(line);
    if let Some(rest) = stripped.strip_prefix("demo") {
        let burst = rest
            .split_whitespace()
            .next()
            .and_then(|tok| tok.parse::<i64>().ok())
            .unwrap_or(DEFAULT_DEMO_BURST);
        return Classified::Demo(burst);
    }
    Classified::ShellCmd
}

/// Run one client connection to completion: handshake logging, the
/// read/classify/enqueue loop, and disconnect logging. Never returns an
/// error to the caller — all failure modes end the connection cleanly
/// (§7 "Transport errors ... intake thread terminates its client
/// cleanly; no other effect").
pub async fn handle_connection<S>(
    stream: S,
    client_id: ClientId,
    jobs: Arc<JobIdGen>,
    state: SharedState,
    log: Arc<ServerLog>,
) where
    S: AsyncRead + AsyncWrite + Unpin + Send + 'static,
{
    let (mut reader, writer) = tokio::io::split(stream);
    let sink: Arc<dyn jss_core::ClientSink> = Arc::new(TcpSink::spawn(writer));

    log.client_connected(client_id);

    loop {
        let frame = match protocol::read_frame(&mut reader).await {
            Ok(frame) => frame,
            Err(ProtocolError::ConnectionClosed) => break,
            Err(ProtocolError::FrameTooLarge(_)) => break,
            Err(ProtocolError::Io(_)) => break,
        };

        if frame.len() > MAX_COMMAND_LINE {
            break;
        }

        let line = match std::str::from_utf8(&frame) {
            Ok(s) => s.trim_end_matches(['\n', '\r']),
            Err(_) => break,
        };

        log.client_submits(client_id, line);

        match classify(line) {
            Classified::Exit => break,
            Classified::Empty => continue,
            Classified::Demo(burst) => {
                let job = Job::new_demo(
                    jobs.next_id(),
                    client_id,
                    line.to_string(),
                    burst,
                    sink.clone(),
                );
                log.job_created(client_id, job.logged_burst());
                state.enqueue(job);
            }
            Classified::ShellCmd => {
                let job = Job::new_shell(jobs.next_id(), client_id, line.to_string(), sink.clone());
                log.job_created(client_id, job.logged_burst());
                state.enqueue(job);
            }
        }
    }

    log.client_disconnected(client_id);
}

#[cfg(test)]
#[path = "intake_tests.rs"]
mod tests;

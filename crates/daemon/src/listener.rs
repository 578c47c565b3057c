// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The acceptor (§5 "one acceptor thread"): binds the listen socket and
//! spawns one intake task per accepted connection.

use std::sync::Arc;

use jss_core::{ClientIdGen, JobIdGen};
use jss_engine::{ServerLog, SharedState};
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tracing::{error, info};

use crate::intake;

/// Runs the accept loop until `stop` is notified. Does not return an
/// error: bind failures are the caller's concern, accept failures are
/// logged and retried.
pub async fn run(listener: TcpListener, state: SharedState, log: Arc<ServerLog>, stop: Arc<Notify>) {
    let clients = Arc::new(ClientIdGen::new());
    let jobs = Arc::new(JobIdGen::new());

    loop {
        tokio::select! {
            _ = stop.notified() => {
                info!("acceptor stopping");
                return;
            }
            accepted = listener.accept() => {
                match accepted {
                    Ok((stream, addr)) => {
                        let client_id = clients.next_id();
                        info!(%client_id, %addr, "accepted connection");
                        let state = state.clone();
                        let log = Arc::clone(&log);
                        let jobs = Arc::clone(&jobs);
                        tokio::spawn(async move {
                            intake::handle_connection(stream, client_id, jobs, state, log).await;
                        });
                    }
                    Err(e) => {
                        error!(error = %e, "accept error");
                    }
                }
            }
        }
    }
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `jssd` — the command-execution service daemon.
//!
//! Architecture (§5): one acceptor task, one intake task per connected
//! client, one scheduler task. Child processes spawned by the pipeline
//! executor run in parallel with all of the above.

mod intake;
mod listener;
mod protocol;
mod sink;

use std::sync::Arc;

use jss_core::DEFAULT_PORT;
use jss_engine::{ServerLog, Scheduler, SharedState};
use tokio::net::TcpListener;
use tokio::signal::unix::{signal, SignalKind};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logging();

    if let Some(arg) = std::env::args().nth(1) {
        match arg.as_str() {
            "--version" | "-V" => {
                println!("jssd {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            "--help" | "-h" => {
                println!("jssd {}", env!("CARGO_PKG_VERSION"));
                println!("Command-execution service daemon. Listens for shell and demo");
                println!("jobs over a length-prefixed TCP protocol (see README).");
                println!();
                println!("OPTIONS:");
                println!("    -h, --help       Print help information");
                println!("    -V, --version    Print version information");
                return Ok(());
            }
            _ => {
                eprintln!("error: unexpected argument '{arg}'");
                std::process::exit(1);
            }
        }
    }

    let port = port_from_env();
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    info!(port, "jssd listening");

    let state = SharedState::new();
    let log = Arc::new(ServerLog::new());
    let cwd = std::env::current_dir()?;
    let scheduler = Scheduler::new(state.clone(), Arc::clone(&log), cwd);
    let scheduler_stop = scheduler.stop_handle();

    let acceptor_stop = Arc::new(tokio::sync::Notify::new());
    let acceptor = tokio::spawn(listener::run(
        listener,
        state,
        Arc::clone(&log),
        Arc::clone(&acceptor_stop),
    ));
    let scheduler_task = tokio::spawn(async move { scheduler.run().await });

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    tokio::select! {
        _ = sigterm.recv() => info!("received SIGTERM, shutting down"),
        _ = sigint.recv() => info!("received SIGINT, shutting down"),
    }

    acceptor_stop.notify_one();
    scheduler_stop.notify_one();
    let _ = acceptor.await;
    let _ = scheduler_task.await;

    info!("jssd stopped");
    Ok(())
}

/// Listen port, overridable via `JSSD_PORT` (§6 fixes 8080 as the
/// default; the override exists purely for local testing).
fn port_from_env() -> u16 {
    std::env::var("JSSD_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The server's activity log (§6 "Server log schema"): exact,
//! schema-literal lines written to stdout, serialized by one mutex
//! (§5 "a separate mutex serializes lines written to the server's log").
//!
//! This is distinct from [`tracing`] diagnostics, which cover startup,
//! shutdown, and internal errors — this logger's output format is a
//! contract with anything scraping the server's stdout and must never
//! gain timestamps, color, or any other tracing-style decoration.

use std::io::{self, Stdout, Write};

use jss_core::ClientId;
use parking_lot::Mutex;

pub struct ServerLog {
    out: Mutex<Stdout>,
}

impl ServerLog {
    pub fn new() -> Self {
        Self {
            out: Mutex::new(io::stdout()),
        }
    }

    fn line(&self, text: &str) {
        let mut out = self.out.lock();
        if let Err(e) = writeln!(out, "{text}") {
            tracing::warn!(error = %e, "failed to write server log line");
        }
    }

    pub fn client_connected(&self, cid: ClientId) {
        self.line(&format!("[{cid}] <<< client connected"));
    }

    pub fn client_submits(&self, cid: ClientId, command_text: &str) {
        self.line(&format!("[{cid}] >>> {command_text}"));
    }

    pub fn client_disconnected(&self, cid: ClientId) {
        self.line(&format!("[{cid}] <<< client disconnected"));
    }

    pub fn job_created(&self, cid: ClientId, burst: i64) {
        self.line(&format!("({cid}) created ({burst})"));
    }

    pub fn demo_started(&self, cid: ClientId, remaining: i64) {
        self.line(&format!("({cid}) started ({remaining})"));
    }

    pub fn demo_running(&self, cid: ClientId, remaining: i64) {
        self.line(&format!("({cid}) running ({remaining})"));
    }

    pub fn demo_preempted(&self, cid: ClientId, remaining: i64) {
        self.line(&format!("({cid}) preempted ({remaining})"));
    }

    pub fn demo_waiting(&self, cid: ClientId, remaining: i64) {
        self.line(&format!("({cid}) waiting ({remaining})"));
    }

    pub fn byte_summary(&self, cid: ClientId, bytes: u64) {
        self.line(&format!("[{cid}]<<< {bytes} bytes sent"));
    }

    pub fn job_ended_demo(&self, cid: ClientId) {
        self.line(&format!("({cid}) ended (0)"));
    }

    pub fn job_ended_shell(&self, cid: ClientId) {
        self.line(&format!("({cid}) ended (-1)"));
    }

    /// Queue-drain timeline: a blank line, then the rendered timeline.
    pub fn timeline(&self, rendered: &str) {
        self.line("");
        self.line(rendered);
    }
}

impl Default for ServerLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;

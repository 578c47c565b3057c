// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The `Job` data model (§3).

use std::sync::Arc;

use crate::id::{ClientId, JobId};
use crate::sink::ClientSink;

/// Sentinel `initial_burst` recorded for shell jobs, matching the log
/// schema's `(id) ended (-1)` line for shell completions.
pub const SHELL_BURST_SENTINEL: i64 = -1;

/// What kind of work a job performs.
///
/// A `ShellCmd` runs once via the pipeline executor and produces a single
/// batch of output; a `Demo` is simulated long-running work measured in
/// integer seconds and re-queued between quanta until it completes.
#[derive(Debug, Clone)]
pub enum JobKind {
    /// A single command or pipeline, non-preemptible by other shell
    /// commands (it always runs to completion once selected).
    ShellCmd,
    /// A simulated long-running job.
    Demo(DemoState),
}

/// Demo-job-specific scheduling state (§3 invariants).
#[derive(Debug, Clone)]
pub struct DemoState {
    /// `N`, the burst the job was created with. Never changes.
    pub initial_burst: i64,
    /// Monotonically non-increasing remaining simulated seconds.
    pub remaining_time: i64,
    /// Number of quanta entered (completed or interrupted). Starts at 0.
    pub rounds_run: u32,
}

impl DemoState {
    pub fn new(initial_burst: i64) -> Self {
        Self {
            initial_burst,
            remaining_time: initial_burst.max(0),
            rounds_run: 0,
        }
    }

    /// True once there is no more simulated work left.
    pub fn is_complete(&self) -> bool {
        self.remaining_time <= 0
    }
}

/// A scheduler-managed unit of work for one client command (§3).
#[derive(Debug, Clone)]
pub struct Job {
    pub id: JobId,
    pub client_id: ClientId,
    /// The raw command line as submitted by the client.
    pub command_text: String,
    pub kind: JobKind,
    /// Cumulative bytes streamed back to the client for this job.
    pub bytes_sent: u64,
    /// The client connection this job streams output back to.
    pub sink: Arc<dyn ClientSink>,
}

impl Job {
    pub fn new_shell(
        id: JobId,
        client_id: ClientId,
        command_text: String,
        sink: Arc<dyn ClientSink>,
    ) -> Self {
        Self {
            id,
            client_id,
            command_text,
            kind: JobKind::ShellCmd,
            bytes_sent: 0,
            sink,
        }
    }

    pub fn new_demo(
        id: JobId,
        client_id: ClientId,
        command_text: String,
        initial_burst: i64,
        sink: Arc<dyn ClientSink>,
    ) -> Self {
        Self {
            id,
            client_id,
            command_text,
            kind: JobKind::Demo(DemoState::new(initial_burst)),
            bytes_sent: 0,
            sink,
        }
    }

    /// `initial_burst` as recorded in the log schema: `-1` for shell jobs,
    /// the demo's burst otherwise.
    pub fn logged_burst(&self) -> i64 {
        match &self.kind {
            JobKind::ShellCmd => SHELL_BURST_SENTINEL,
            JobKind::Demo(d) => d.initial_burst,
        }
    }

    pub fn as_demo(&self) -> Option<&DemoState> {
        match &self.kind {
            JobKind::Demo(d) => Some(d),
            JobKind::ShellCmd => None,
        }
    }

    pub fn as_demo_mut(&mut self) -> Option<&mut DemoState> {
        match &mut self.kind {
            JobKind::Demo(d) => Some(d),
            JobKind::ShellCmd => None,
        }
    }

    pub fn is_shell(&self) -> bool {
        matches!(self.kind, JobKind::ShellCmd)
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;

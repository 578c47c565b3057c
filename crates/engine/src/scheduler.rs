// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The scheduler thread's main loop: select, run, re-queue (§4.7, §5).

use std::path::PathBuf;
use std::sync::Arc;

use jss_core::{render_timeline, Job};

use crate::log::ServerLog;
use crate::run_demo::{run_demo_quantum, QuantumOutcome};
use crate::run_shell::run_shell_job;
use crate::select::select;
use crate::state::SharedState;

/// Owns the scheduler's run loop. One instance runs on the scheduler
/// thread/task; there is exactly one per server (§5 "single-threaded
/// from the scheduler's point of view").
pub struct Scheduler {
    state: SharedState,
    log: Arc<ServerLog>,
    cwd: PathBuf,
    stop: Arc<tokio::sync::Notify>,
}

impl Scheduler {
    pub fn new(state: SharedState, log: Arc<ServerLog>, cwd: PathBuf) -> Self {
        Self {
            state,
            log,
            cwd,
            stop: Arc::new(tokio::sync::Notify::new()),
        }
    }

    pub fn handle(&self) -> SharedState {
        self.state.clone()
    }

    /// A handle callers can use to wake and stop the loop (§5
    /// "Cancellation and timeouts" — a server-level stop flag).
    pub fn stop_handle(&self) -> Arc<tokio::sync::Notify> {
        self.stop.clone()
    }

    /// Run until stopped. Selects a job, runs one slice of work on it,
    /// then either drops it (completed) or re-queues it at the front
    /// (demo work interrupted or exhausted with time remaining).
    pub async fn run(&self) {
        loop {
            tokio::select! {
                _ = self.stop.notified() => return,
                _ = self.state.wait_for_work() => {}
            }

            let Some(mut job) = self.take_next() else {
                continue;
            };

            if job.is_shell() {
                run_shell_job(&mut job, &self.cwd, &self.log).await;
                self.finish_running(job.id);
                self.drain_timeline_if_empty();
                continue;
            }

            let outcome = run_demo_quantum(&mut job, &self.log, &self.state).await;
            match outcome {
                QuantumOutcome::Completed => {
                    self.log.byte_summary(job.client_id, job.bytes_sent);
                    job.sink.send_frame(jss_core::EOF_SENTINEL.to_vec());
                    self.log.job_ended_demo(job.client_id);
                    self.finish_running(job.id);
                }
                QuantumOutcome::Preempted | QuantumOutcome::Exhausted => {
                    let id = job.id;
                    self.state.requeue_front(job);
                    self.finish_running(id);
                }
            }
            self.drain_timeline_if_empty();
        }
    }

    /// Select and remove the winning job, recording it as the one
    /// currently running (§3 "never both" — held by the scheduler or
    /// resident in the queue, never both at once).
    fn take_next(&self) -> Option<Job> {
        let mut core = self.state.lock();
        let idx = select(&core.ready, None, core.last_job_id)?;
        let job = core.ready.remove(idx)?;
        core.running = Some(job.id);
        if job.as_demo().is_some() {
            core.last_job_id = Some(job.id);
        }
        Some(job)
    }

    fn finish_running(&self, job_id: jss_core::JobId) {
        let mut core = self.state.lock();
        if core.running == Some(job_id) {
            core.running = None;
        }
    }

    /// Queue-drain → timeline (§4.7 "Queue drain → timeline"): whenever
    /// the ready queue is observed empty, flush any accumulated timeline
    /// entries.
    fn drain_timeline_if_empty(&self) {
        let mut core = self.state.lock();
        if core.ready.is_empty() && !core.timeline.is_empty() {
            let rendered = render_timeline(&core.timeline);
            core.timeline.clear();
            drop(core);
            self.log.timeline(&rendered);
        }
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;

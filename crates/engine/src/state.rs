// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared scheduler state (§5 "Mutual exclusion").
//!
//! A single mutex protects the ready queue, the currently-running job's
//! ID, `last_job_id`, and `global_time` together, matching the original
//! design's single-mutex invariant rather than splitting into several
//! finer-grained locks.

use std::collections::VecDeque;
use std::sync::Arc;

use jss_core::{Job, JobId, TimelineEntry};
use parking_lot::Mutex;
use tokio::sync::Notify;

/// Everything the scheduler's single mutex protects (§3 invariants).
#[derive(Default)]
pub struct SchedulerCore {
    pub ready: VecDeque<Job>,
    pub running: Option<JobId>,
    pub last_job_id: Option<JobId>,
    pub global_time: u64,
    pub timeline: Vec<TimelineEntry>,
}

/// Shared handle to the scheduler's state plus its empty-queue condition
/// variable (§5 "Suspension points").
#[derive(Clone)]
pub struct SharedState {
    core: Arc<Mutex<SchedulerCore>>,
    notify: Arc<Notify>,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            core: Arc::new(Mutex::new(SchedulerCore::default())),
            notify: Arc::new(Notify::new()),
        }
    }

    /// Enqueue a job and wake the scheduler if it is waiting on an empty
    /// queue.
    pub fn enqueue(&self, job: Job) {
        self.core.lock().ready.push_back(job);
        self.notify.notify_one();
    }

    /// Push a job at the head of the ready queue (a partially run demo
    /// being re-queued — §5 "a demo job that is re-queued after a partial
    /// quantum is pushed at the head").
    pub fn requeue_front(&self, job: Job) {
        self.core.lock().ready.push_front(job);
        self.notify.notify_one();
    }

    pub fn lock(&self) -> parking_lot::MutexGuard<'_, SchedulerCore> {
        self.core.lock()
    }

    /// Wait until the ready queue is non-empty.
    ///
    /// Registers interest in the notification *before* checking the
    /// queue, so an enqueue that races with this call is never missed.
    pub async fn wait_for_work(&self) {
        loop {
            let notified = self.notify.notified();
            if !self.core.lock().ready.is_empty() {
                return;
            }
            notified.await;
        }
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;

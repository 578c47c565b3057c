// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SRJF job selection (§4.7 "Selection").
//!
//! Deterministic tie-break cascade: any `ShellCmd` beats any `Demo`
//! (FIFO among ShellCmds); among Demos the smallest `remaining_time`
//! wins, subject to an anti-starvation override and an optional
//! exclusion used by the mid-quantum preemption probe.

use std::collections::VecDeque;

use jss_core::{Job, JobId, JobKind};

/// Find the index of the winning job in `queue`, without removing it.
///
/// `exclude` is the job the caller is already running (used by the
/// preemption probe so a running demo can never preempt itself).
/// `last_job_id` is the ID of the most recently *selected* demo, consulted
/// for anti-starvation.
pub fn select(
    queue: &VecDeque<Job>,
    exclude: Option<JobId>,
    last_job_id: Option<JobId>,
) -> Option<usize> {
    let candidates: Vec<usize> = (0..queue.len())
        .filter(|&i| Some(queue[i].id) != exclude)
        .collect();

    if candidates.is_empty() {
        return None;
    }

    // Rule 1: any ShellCmd outranks any Demo; earliest-enqueued ShellCmd wins.
    if let Some(&i) = candidates
        .iter()
        .find(|&&i| matches!(queue[i].kind, JobKind::ShellCmd))
    {
        return Some(i);
    }

    // All remaining candidates are Demos. Rule 2: smallest remaining_time.
    let min_remaining = candidates
        .iter()
        .map(|&i| remaining_time(&queue[i]))
        .min()
        .expect("candidates is non-empty");

    let tied: Vec<usize> = candidates
        .into_iter()
        .filter(|&i| remaining_time(&queue[i]) == min_remaining)
        .collect();

    // Rule 3: anti-starvation. If the FIFO-first tied candidate repeats
    // last_job_id and a different tied candidate exists, prefer that one.
    if let (Some(&first), Some(last)) = (tied.first(), last_job_id) {
        if queue[first].id == last {
            if let Some(&other) = tied.iter().find(|&&i| queue[i].id != last) {
                return Some(other);
            }
        }
    }

    // Rule 5 (rule 4, exclusion, already applied via `candidates`): FIFO
    // among remaining ties — `tied` is already in queue order.
    tied.first().copied()
}

fn remaining_time(job: &Job) -> i64 {
    job.as_demo().map(|d| d.remaining_time).unwrap_or(i64::MAX)
}

#[cfg(test)]
#[path = "select_tests.rs"]
mod tests;

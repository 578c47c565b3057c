// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Running one Demo quantum (§4.7 "Running a Demo quantum").

use jss_core::{Job, JobId};

use crate::log::ServerLog;
use crate::quantum::quantum_for;
use crate::select::select;
use crate::state::SharedState;

/// Outcome of one quantum: whether the job is done, and if interrupted,
/// whether it was by a shell preemption.
pub enum QuantumOutcome {
    /// `remaining_time` reached zero during this quantum.
    Completed,
    /// A ShellCmd arrival preempted this demo mid-quantum.
    Preempted,
    /// The quantum's full length elapsed with work still remaining.
    Exhausted,
}

/// Run up to one quantum of a Demo job. Streams `Demo i/N` frames as the
/// quantum progresses and polls for preemption once per simulated second.
pub async fn run_demo_quantum(job: &mut Job, log: &ServerLog, state: &SharedState) -> QuantumOutcome {
    let cid = job.client_id;
    let job_id = job.id;

    let demo = job.as_demo().expect("run_demo_quantum called on a non-Demo job");
    let rounds_run = demo.rounds_run;
    let initial_burst = demo.initial_burst;
    let remaining_at_entry = demo.remaining_time;

    if rounds_run == 0 {
        log.demo_started(cid, remaining_at_entry);
    } else {
        log.demo_running(cid, remaining_at_entry);
    }

    let quantum = quantum_for(rounds_run);
    let mut elapsed_this_quantum = 0u32;
    let mut outcome = QuantumOutcome::Exhausted;

    while elapsed_this_quantum < quantum {
        let remaining_before = job
            .as_demo()
            .expect("stays a Demo for its whole lifetime")
            .remaining_time;
        if remaining_before <= 0 {
            outcome = QuantumOutcome::Completed;
            break;
        }

        tokio::time::sleep(std::time::Duration::from_secs(1)).await;

        let progress = initial_burst - remaining_before + 1;
        let frame = format!("Demo {progress}/{initial_burst}");
        job.sink.send_frame(frame.clone().into_bytes());
        job.bytes_sent += frame.len() as u64;

        let demo = job.as_demo_mut().expect("stays a Demo for its whole lifetime");
        demo.remaining_time -= 1;
        elapsed_this_quantum += 1;

        if preempted_by_shell(job_id, state) {
            outcome = QuantumOutcome::Preempted;
            break;
        }

        if job
            .as_demo()
            .expect("stays a Demo for its whole lifetime")
            .remaining_time
            <= 0
        {
            outcome = QuantumOutcome::Completed;
            break;
        }
    }

    {
        let demo = job.as_demo_mut().expect("stays a Demo for its whole lifetime");
        demo.rounds_run += 1;
    }

    {
        let mut core = state.lock();
        core.global_time += elapsed_this_quantum as u64;
        core.timeline.push(jss_core::TimelineEntry {
            client_id: cid,
            global_time: core.global_time,
        });
    }

    let remaining_now = job
        .as_demo()
        .expect("stays a Demo for its whole lifetime")
        .remaining_time;

    // The "ended" log and EOF frame for a completed demo are emitted by
    // the scheduler loop, after the byte-summary line (§4.7 step 3).
    match outcome {
        QuantumOutcome::Completed => {}
        QuantumOutcome::Preempted => log.demo_preempted(cid, remaining_now),
        QuantumOutcome::Exhausted => log.demo_waiting(cid, remaining_now),
    }

    outcome
}

/// Mid-quantum preemption probe (§4.7 step 2d): under the queue mutex,
/// check whether a ShellCmd has arrived that should run next. Demos never
/// preempt another demo mid-quantum, so only a ShellCmd winner counts.
fn preempted_by_shell(self_id: JobId, state: &SharedState) -> bool {
    let core = state.lock();
    match select(&core.ready, Some(self_id), core.last_job_id) {
        Some(i) => core.ready[i].is_shell(),
        None => false,
    }
}

#[cfg(test)]
#[path = "run_demo_tests.rs"]
mod tests;

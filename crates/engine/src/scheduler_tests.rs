// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use jss_core::ClientId;
use std::sync::{Arc, Mutex as StdMutex};

#[derive(Debug, Default)]
struct CollectingSink {
    frames: StdMutex<Vec<Vec<u8>>>,
}

impl jss_core::ClientSink for CollectingSink {
    fn send_frame(&self, payload: Vec<u8>) {
        self.frames.lock().unwrap().push(payload);
    }
}

#[tokio::test(start_paused = true)]
async fn shell_job_runs_to_completion_and_stops_on_request() {
    let log = Arc::new(ServerLog::new());
    let scheduler = Scheduler::new(SharedState::new(), log, std::env::temp_dir());
    let state = scheduler.handle();
    let stop = scheduler.stop_handle();

    let sink = Arc::new(CollectingSink::default());
    state.enqueue(Job::new_shell(
        jss_core::JobId::new(1),
        ClientId::new(1),
        "echo hi".into(),
        sink.clone(),
    ));

    let run = tokio::spawn(async move { scheduler.run().await });
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    stop.notify_one();
    tokio::time::timeout(std::time::Duration::from_secs(1), run)
        .await
        .expect("scheduler should stop promptly")
        .unwrap();

    let frames = sink.frames.lock().unwrap();
    assert_eq!(frames[0], b"hi\n".to_vec());
}

#[tokio::test(start_paused = true)]
async fn srjf_alternation_preemption_and_resumption_across_quanta() {
    let log = Arc::new(ServerLog::new());
    let scheduler = Scheduler::new(SharedState::new(), log, std::env::temp_dir());
    let state = scheduler.handle();
    let stop = scheduler.stop_handle();

    // Shortest job first: a 2-second demo is selected ahead of a 6-second
    // one under SRJF.
    let short_sink = Arc::new(CollectingSink::default());
    state.enqueue(Job::new_demo(
        jss_core::JobId::new(1),
        ClientId::new(1),
        "demo".into(),
        2,
        short_sink.clone(),
    ));

    let long_sink = Arc::new(CollectingSink::default());
    state.enqueue(Job::new_demo(
        jss_core::JobId::new(2),
        ClientId::new(2),
        "demo".into(),
        6,
        long_sink.clone(),
    ));

    let shell_sink = Arc::new(CollectingSink::default());
    let shell_state = state.clone();
    let shell_enqueue = tokio::spawn(async move {
        // Fires partway into the long demo's first quantum (strictly
        // between its per-second ticks, so the exact interleaving is
        // deterministic), so the scheduler must preempt the long demo
        // mid-quantum and come back to it later rather than abandoning it.
        tokio::time::sleep(std::time::Duration::from_millis(3_500)).await;
        shell_state.enqueue(Job::new_shell(
            jss_core::JobId::new(3),
            ClientId::new(3),
            "echo hi".into(),
            shell_sink.clone(),
        ));
    });

    let run = tokio::spawn(async move { scheduler.run().await });

    shell_enqueue.await.unwrap();
    tokio::time::sleep(std::time::Duration::from_secs(20)).await;
    stop.notify_one();
    tokio::time::timeout(std::time::Duration::from_secs(5), run)
        .await
        .expect("scheduler should stop promptly")
        .unwrap();

    let short_frames = short_sink.frames.lock().unwrap();
    assert_eq!(short_frames.len(), 2, "short demo runs to completion first");
    assert_eq!(short_frames[0], b"Demo 1/2".to_vec());
    assert_eq!(short_frames[1], b"Demo 2/2".to_vec());

    // The long demo was preempted at least once but still accumulates all
    // 6 progress frames across its resumed quanta — preemption never
    // drops it from the queue.
    let long_frames = long_sink.frames.lock().unwrap();
    assert_eq!(long_frames.len(), 6, "preempted demo still completes in full");
    assert_eq!(long_frames.last().unwrap(), &b"Demo 6/6".to_vec());

    let shell_frames = shell_sink.frames.lock().unwrap();
    assert_eq!(shell_frames[0], b"hi\n".to_vec());
}

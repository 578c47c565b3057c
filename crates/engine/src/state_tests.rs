// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use jss_core::ClientId;
use std::sync::Arc;

#[derive(Debug)]
struct NullSink;
impl jss_core::ClientSink for NullSink {
    fn send_frame(&self, _payload: Vec<u8>) {}
}

fn job(id: u64) -> Job {
    Job::new_shell(JobId::new(id), ClientId::new(id), "echo hi".into(), Arc::new(NullSink))
}

#[tokio::test]
async fn enqueue_wakes_a_waiter() {
    let state = SharedState::new();
    let waiter = state.clone();
    let handle = tokio::spawn(async move {
        waiter.wait_for_work().await;
    });
    tokio::task::yield_now().await;
    state.enqueue(job(1));
    tokio::time::timeout(std::time::Duration::from_secs(1), handle)
        .await
        .expect("wait_for_work should return once a job is enqueued")
        .unwrap();
}

#[test]
fn requeue_front_puts_job_at_head() {
    let state = SharedState::new();
    state.enqueue(job(1));
    state.requeue_front(job(2));
    assert_eq!(state.lock().ready[0].id, JobId::new(2));
}

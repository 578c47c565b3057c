// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use jss_core::ClientId;

#[test]
fn every_schema_line_can_be_emitted_without_panicking() {
    let log = ServerLog::new();
    let cid = ClientId::new(1);
    log.client_connected(cid);
    log.client_submits(cid, "echo hi");
    log.job_created(cid, -1);
    log.demo_started(cid, 5);
    log.demo_running(cid, 4);
    log.demo_preempted(cid, 3);
    log.demo_waiting(cid, 2);
    log.byte_summary(cid, 42);
    log.job_ended_demo(cid);
    log.job_ended_shell(cid);
    log.timeline("P1-(3)-P2-(6)");
    log.client_disconnected(cid);
}

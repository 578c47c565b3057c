// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Timeline entries recorded once per completed or preempted demo quantum
//! (§3, §4.7).

use crate::id::ClientId;
use std::fmt;

/// One `(client_id, global_time_at_quantum_end)` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry {
    pub client_id: ClientId,
    pub global_time: u64,
}

impl fmt::Display for TimelineEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}-({})", self.client_id, self.global_time)
    }
}

/// Render a full timeline as `P<c1>-(<t1>)-P<c2>-(<t2>)-…`, per §4.7/§6.
pub fn render_timeline(entries: &[TimelineEntry]) -> String {
    entries
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
#[path = "timeline_tests.rs"]
mod tests;

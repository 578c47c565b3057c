// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::id::ClientId;

#[test]
fn renders_single_entry() {
    let entries = vec![TimelineEntry {
        client_id: ClientId::new(1),
        global_time: 3,
    }];
    assert_eq!(render_timeline(&entries), "P1-(3)");
}

#[test]
fn renders_multiple_entries_joined_by_dash() {
    let entries = vec![
        TimelineEntry { client_id: ClientId::new(1), global_time: 3 },
        TimelineEntry { client_id: ClientId::new(2), global_time: 5 },
        TimelineEntry { client_id: ClientId::new(1), global_time: 6 },
    ];
    assert_eq!(render_timeline(&entries), "P1-(3)-P2-(5)-P1-(6)");
}

#[test]
fn empty_timeline_renders_empty_string() {
    assert_eq!(render_timeline(&[]), "");
}

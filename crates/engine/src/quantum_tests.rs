// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn first_quantum_is_three_seconds() {
    assert_eq!(quantum_for(0), 3);
}

#[test]
fn subsequent_quanta_are_seven_seconds() {
    assert_eq!(quantum_for(1), 7);
    assert_eq!(quantum_for(8), 7);
}

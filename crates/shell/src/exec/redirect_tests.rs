// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::io::{Read, Write};

#[test]
fn open_input_reads_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("in.txt");
    std::fs::write(&path, b"hello").unwrap();
    let mut f = open_input(&path).unwrap();
    let mut buf = String::new();
    f.read_to_string(&mut buf).unwrap();
    assert_eq!(buf, "hello");
}

#[test]
fn open_input_missing_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    assert!(open_input(&dir.path().join("missing.txt")).is_err());
}

#[test]
fn open_output_truncates_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    std::fs::write(&path, b"old contents").unwrap();
    let mut f = open_output(&path, false).unwrap();
    f.write_all(b"new").unwrap();
    drop(f);
    assert_eq!(std::fs::read(&path).unwrap(), b"new");
}

#[test]
fn open_output_appends_when_requested() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    std::fs::write(&path, b"old-").unwrap();
    let mut f = open_output(&path, true).unwrap();
    f.write_all(b"new").unwrap();
    drop(f);
    assert_eq!(std::fs::read(&path).unwrap(), b"old-new");
}

#[test]
fn open_error_creates_file_when_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("err.txt");
    open_error(&path).unwrap();
    assert!(path.exists());
}

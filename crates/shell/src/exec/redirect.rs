// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Opening file-redirection targets (§4.3, §4.6).
//!
//! Mirrors `setup_redirection` from the original design: input is opened
//! read-only, output/error are opened write-only with `O_CREAT` and either
//! truncate or append.

use std::fs::{File, OpenOptions};
use std::path::Path;

pub fn open_input(path: &Path) -> std::io::Result<File> {
    File::open(path)
}

pub fn open_output(path: &Path, append: bool) -> std::io::Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .append(append)
        .truncate(!append)
        .open(path)
}

pub fn open_error(path: &Path) -> std::io::Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}

#[cfg(test)]
#[path = "redirect_tests.rs"]
mod tests;

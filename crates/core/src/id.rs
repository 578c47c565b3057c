// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Numeric identifier types for clients and jobs.
//!
//! Both ids are server-assigned monotonically increasing counters rather
//! than UUIDs: the log schema (§6) prints them bare (`(3) created (-1)`,
//! `[3] <<< client connected`), so they need to read as small integers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Define a newtype identifier backed by `u64`, with `Display`, `Ord`, and
/// a paired monotonic generator.
///
/// ```ignore
/// define_counter_id! {
///     pub struct ClientId, ClientIdGen;
/// }
/// ```
macro_rules! define_counter_id {
    ($(#[$meta:meta])* pub struct $id:ident, $gen:ident;) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
        pub struct $id(pub u64);

        impl $id {
            pub fn new(n: u64) -> Self {
                Self(n)
            }

            pub fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $id {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        /// Monotonically increasing generator for [`$id`].
        ///
        /// Starts at 1 so that id 0 can be used as a sentinel ("no id yet")
        /// where needed.
        #[derive(Debug, Default)]
        pub struct $gen {
            next: AtomicU64,
        }

        impl $gen {
            pub fn new() -> Self {
                Self {
                    next: AtomicU64::new(1),
                }
            }

            pub fn next_id(&self) -> $id {
                $id(self.next.fetch_add(1, Ordering::Relaxed))
            }
        }
    };
}

define_counter_id! {
    /// Identifies a connected client (one per TCP connection).
    pub struct ClientId, ClientIdGen;
}

define_counter_id! {
    /// Identifies a single submitted job (shell command or demo run).
    pub struct JobId, JobIdGen;
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;

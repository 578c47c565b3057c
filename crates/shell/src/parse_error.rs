// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User-visible parse and pipeline-shape errors (§7).
//!
//! `Display` on [`ParseError`] produces exactly the text returned to the
//! client in place of command output (§7 "Propagation policy": parse and
//! validation errors never reach exec; they short-circuit into a
//! human-readable single string).

use thiserror::Error;

use crate::lexer::LexError;

/// Errors produced by tokenizing, validating, or parsing a command line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unclosed quotes.\n")]
    UnclosedQuotes,

    #[error("Input file not specified.\n")]
    NoInputFile,

    #[error("Output file not specified.\n")]
    NoOutputFile,

    /// Same underlying cause as [`ParseError::NoOutputFile`], re-tagged
    /// when the missing redirection occurs inside a pipeline stage so the
    /// message wording can differ (§4.3 step 1).
    #[error("Output file not specified after redirection.\n")]
    NoOutputFileAfterRedirection,

    #[error("Error output file not specified.\n")]
    NoErrorFile,

    #[error("Empty command after redirection.\n")]
    EmptyCommandAfterRedirection,

    #[error("Too many arguments.\n")]
    TooManyArgs,

    /// A pipeline begins with `|` (§4.2 `StartsPipe`).
    #[error("Missing command before pipe.\n")]
    MissingCommandBeforePipe,

    /// A pipeline ends with `|` (§4.2 `EndsPipe`).
    #[error("Missing command after pipe.\n")]
    MissingCommandAfterPipe,

    /// An empty stage between two `|` (§4.2 `EmptyStage`).
    #[error("Empty command between pipes.\n")]
    EmptyStageBetweenPipes,

    /// More than [`crate::limits::MAX_PIPELINE_STAGES`] stages (Open
    /// Question resolution: reject rather than silently truncate).
    #[error("Too many pipeline stages.\n")]
    TooManyStages,
}

impl From<LexError> for ParseError {
    fn from(e: LexError) -> Self {
        match e {
            LexError::UnclosedQuotes => ParseError::UnclosedQuotes,
        }
    }
}

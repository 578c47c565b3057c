// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline shape validation (§4.2).
//!
//! Operates on the token sequence rather than the raw line — equivalent
//! per §4.2, but token-level keeps the state machine a plain two-state
//! walk without re-deriving quoting.

use crate::parse_error::ParseError;
use crate::token::{Token, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ExpectingWord,
    SeenWord,
}

/// Validate pipeline shape: no leading `|`, no trailing `|`, no empty
/// stage between two `|`.
pub fn validate_pipeline_shape(tokens: &[Token]) -> Result<(), ParseError> {
    let mut state = State::ExpectingWord;
    let mut seen_any_pipe = false;

    for (i, token) in tokens.iter().enumerate() {
        match (&token.kind, state) {
            (TokenKind::Pipe, State::ExpectingWord) => {
                if i == 0 {
                    return Err(ParseError::MissingCommandBeforePipe);
                }
                return Err(ParseError::EmptyStageBetweenPipes);
            }
            (TokenKind::Pipe, State::SeenWord) => {
                seen_any_pipe = true;
                state = State::ExpectingWord;
            }
            (_, _) => {
                state = State::SeenWord;
            }
        }
    }

    if seen_any_pipe && state == State::ExpectingWord {
        return Err(ParseError::MissingCommandAfterPipe);
    }

    Ok(())
}

/// Split a validated token sequence on unquoted `|` into per-stage token
/// slices.
pub fn split_stages(tokens: Vec<Token>) -> Vec<Vec<Token>> {
    let mut stages = Vec::new();
    let mut current = Vec::new();
    for token in tokens {
        if token.kind == TokenKind::Pipe {
            stages.push(std::mem::take(&mut current));
        } else {
            current.push(token);
        }
    }
    stages.push(current);
    stages
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;

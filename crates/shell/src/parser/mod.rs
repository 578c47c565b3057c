// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-stage parsing and the top-level pipeline parser (§4.3).

mod words;

use std::path::{Path, PathBuf};

pub use words::expand_word;

use crate::lexer::Lexer;
use crate::limits::{MAX_ARGS, MAX_PIPELINE_STAGES};
use crate::parse_error::ParseError;
use crate::stage::{ParsedPipeline, Stage};
use crate::token::{Token, TokenKind};
use crate::validator::{split_stages, validate_pipeline_shape};

/// Parses whole command lines into [`ParsedPipeline`]s.
pub struct Parser;

impl Parser {
    /// Tokenize, validate pipeline shape, split into stages, then parse each
    /// stage independently (§4.3 is applied per stage).
    pub fn parse_pipeline(line: &str, cwd: &Path) -> Result<ParsedPipeline, ParseError> {
        let tokens = Lexer::tokenize(line)?;
        validate_pipeline_shape(&tokens)?;

        let stage_tokens = split_stages(tokens);
        if stage_tokens.len() > MAX_PIPELINE_STAGES {
            return Err(ParseError::TooManyStages);
        }

        let is_pipeline = stage_tokens.len() > 1;
        let stages = stage_tokens
            .into_iter()
            .map(|toks| parse_stage(toks, is_pipeline, cwd))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ParsedPipeline { stages })
    }
}

/// Parse one pipeline stage's tokens into a [`Stage`] (§4.3).
///
/// Redirection operands are resolved and stripped out in the same pass;
/// what remains becomes the stage's argument vector after globbing.
fn parse_stage(tokens: Vec<Token>, is_pipeline: bool, cwd: &Path) -> Result<Stage, ParseError> {
    for (i, token) in tokens.iter().enumerate() {
        if !is_redirection(&token.kind) {
            continue;
        }
        let operand = tokens.get(i + 1).and_then(|t| t.kind.as_word());
        let missing = !matches!(operand, Some(w) if !w.is_empty());
        if missing {
            return Err(match token.kind {
                TokenKind::Lt => ParseError::NoInputFile,
                TokenKind::Gt | TokenKind::Append if is_pipeline => {
                    ParseError::NoOutputFileAfterRedirection
                }
                TokenKind::Gt | TokenKind::Append => ParseError::NoOutputFile,
                TokenKind::ErrGt => ParseError::NoErrorFile,
                _ => unreachable!("is_redirection guards this match"),
            });
        }
    }

    let mut args = Vec::new();
    let mut input = None;
    let mut output = None;
    let mut error = None;

    let mut idx = 0;
    while idx < tokens.len() {
        match &tokens[idx].kind {
            TokenKind::Lt => {
                input = Some(PathBuf::from(operand_of(&tokens, idx)));
                idx += 2;
            }
            TokenKind::Gt => {
                output = Some((PathBuf::from(operand_of(&tokens, idx)), false));
                idx += 2;
            }
            TokenKind::Append => {
                output = Some((PathBuf::from(operand_of(&tokens, idx)), true));
                idx += 2;
            }
            TokenKind::ErrGt => {
                error = Some(PathBuf::from(operand_of(&tokens, idx)));
                idx += 2;
            }
            TokenKind::Pipe => {
                unreachable!("pipes are split out before per-stage parsing")
            }
            TokenKind::Word(word) => {
                args.extend(expand_word(word, tokens[idx].was_quoted, cwd));
                idx += 1;
            }
        }
    }

    if args.is_empty() {
        return Err(ParseError::EmptyCommandAfterRedirection);
    }
    if args.len() > MAX_ARGS {
        return Err(ParseError::TooManyArgs);
    }

    Ok(Stage {
        args,
        input,
        output,
        error,
    })
}

fn is_redirection(kind: &TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Lt | TokenKind::Gt | TokenKind::Append | TokenKind::ErrGt
    )
}

fn operand_of(tokens: &[Token], op_idx: usize) -> &str {
    tokens[op_idx + 1]
        .kind
        .as_word()
        .expect("validated present and non-empty above")
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

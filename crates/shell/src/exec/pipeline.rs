// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline execution (§4.6): spawn every stage, wire inter-stage pipes and
//! per-stage file redirections, and capture the final stage's stdout plus
//! every stage's stderr into one buffer.
//!
//! Execution-time failures (a stage's command not found, an input file
//! that disappeared) are never returned as a [`ParseError`] — they are
//! synthesized straight into the capture stream, exactly as the original
//! design's failing child would have written to its own inherited stderr
//! before exiting 127. A spawn failure partway through a pipeline does not
//! abort the remaining stages; the next stage simply sees no input.

use std::process::Stdio;

use tokio::process::{Child, ChildStdout, Command};

use crate::exec::capture::CaptureSink;
use crate::exec::redirect;
use crate::stage::{ParsedPipeline, Stage};

/// Run a fully parsed pipeline (one or more stages) and return the
/// captured bytes. Never fails: anything that would be a failure becomes
/// part of the returned buffer.
pub async fn run_pipeline(pipeline: &ParsedPipeline) -> Vec<u8> {
    let stages = &pipeline.stages;
    let n = stages.len();
    let is_pipe_sequence = n > 1;

    let (sink, collector) = CaptureSink::new();
    let mut children: Vec<Child> = Vec::with_capacity(n);
    let mut prev_stdout: Option<ChildStdout> = None;

    for (i, stage) in stages.iter().enumerate() {
        let is_last = i == n - 1;

        // A missing input file does not stop this stage's command from
        // running (it just sees no input), matching the original design's
        // one-child-per-stage model: the stage is never silently dropped
        // from the pipeline.
        let stdin_cfg = match (&stage.input, prev_stdout.take()) {
            (Some(path), _) => match redirect::open_input(path) {
                Ok(file) => Stdio::from(file),
                Err(_) => {
                    sink.push_message(b"File not found.\n".to_vec());
                    Stdio::null()
                }
            },
            (None, Some(piped)) => match piped.try_into() {
                Ok(stdio) => stdio,
                Err(_) => Stdio::null(),
            },
            (None, None) => Stdio::null(),
        };

        // An output/error target that fails to open is different: the
        // original design's child exits before ever exec'ing the real
        // command, so we skip spawning this stage rather than running it
        // with its output silently discarded.
        let mut stdout_cfg = Stdio::piped();
        let mut redirection_failed = false;
        if let Some((path, append)) = &stage.output {
            match redirect::open_output(path, *append) {
                Ok(file) => stdout_cfg = Stdio::from(file),
                Err(_) => {
                    sink.push_message(b"File not found.\n".to_vec());
                    redirection_failed = true;
                }
            }
        }

        let mut stderr_cfg = Stdio::piped();
        if !redirection_failed {
            if let Some(path) = &stage.error {
                match redirect::open_error(path) {
                    Ok(file) => stderr_cfg = Stdio::from(file),
                    Err(_) => {
                        sink.push_message(b"File not found.\n".to_vec());
                        redirection_failed = true;
                    }
                }
            }
        }

        if redirection_failed {
            continue;
        }

        let mut cmd = Command::new(stage.command_name());
        cmd.args(&stage.args[1..]);
        cmd.stdin(stdin_cfg).stdout(stdout_cfg).stderr(stderr_cfg);
        cmd.kill_on_drop(true);

        match cmd.spawn() {
            Ok(mut child) => {
                if let Some(stdout) = child.stdout.take() {
                    if is_last {
                        sink.spawn_drain(stdout);
                    } else {
                        prev_stdout = Some(stdout);
                    }
                }
                if let Some(stderr) = child.stderr.take() {
                    sink.spawn_drain(stderr);
                }
                children.push(child);
            }
            Err(_) => {
                let msg = not_found_message(stage, is_pipe_sequence);
                sink.push_message(msg.into_bytes());
            }
        }
    }

    drop(sink);
    for child in &mut children {
        let _ = child.wait().await;
    }
    collector.collect().await
}

fn not_found_message(stage: &Stage, is_pipe_sequence: bool) -> String {
    if is_pipe_sequence {
        format!("Command not found in pipe sequence: {}\n", stage.command_name())
    } else {
        format!("Command not found: {}\n", stage.command_name())
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Running a ShellCmd job (§4.7 "Running a ShellCmd").

use jss_core::{Job, EOF_SENTINEL};
use jss_shell::exec::run_pipeline;
use jss_shell::{ParseError, Parser};

use crate::log::ServerLog;

/// Parse and execute a ShellCmd's command text, stream the result plus
/// the EOF sentinel, and log the byte summary and ended line.
pub async fn run_shell_job(job: &mut Job, cwd: &std::path::Path, log: &ServerLog) {
    let cid = job.client_id;

    let output = match Parser::parse_pipeline(&job.command_text, cwd) {
        Ok(pipeline) => run_pipeline(&pipeline).await,
        Err(err) => render_parse_error(&err),
    };

    job.sink.send_frame(output.clone());
    job.bytes_sent += output.len() as u64;
    job.sink.send_frame(EOF_SENTINEL.to_vec());

    log.byte_summary(cid, job.bytes_sent);
    log.job_ended_shell(cid);
}

fn render_parse_error(err: &ParseError) -> Vec<u8> {
    err.to_string().into_bytes()
}

#[cfg(test)]
#[path = "run_shell_tests.rs"]
mod tests;

//! §8 end-to-end scenario 2: a two-stage pipeline.

use crate::prelude::Server;

#[test]
fn pipeline_output_is_piped_between_stages() {
    let server = Server::spawn();
    let mut client = server.connect();

    client.send("printf 'ab\\ncd\\n' | wc -l");
    let output = client.recv_until_eof();

    assert_eq!(String::from_utf8(output).unwrap().trim(), "2");
}

#[test]
fn unknown_command_in_a_pipeline_reports_pipe_sequence_wording() {
    let server = Server::spawn();
    let mut client = server.connect();

    client.send("echo hi | definitely_not_a_real_command_xyz");
    let output = client.recv_until_eof();

    assert_eq!(
        String::from_utf8(output).unwrap(),
        "Command not found in pipe sequence: definitely_not_a_real_command_xyz\n"
    );
}

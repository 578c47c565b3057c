//! §8 end-to-end scenario 3: a parse error is streamed as output, not a
//! transport-level failure.

use crate::prelude::Server;

#[test]
fn missing_input_filename_streams_the_error_text() {
    let server = Server::spawn();
    let mut client = server.connect();

    client.send("cat < ");
    let output = client.recv_until_eof();

    assert_eq!(output, b"Input file not specified.\n".to_vec());
}

#[test]
fn empty_line_produces_no_response_frame() {
    let server = Server::spawn();
    let mut client = server.connect();

    client.send("");
    // Nothing is owed for an empty line; a subsequent real command still
    // gets its normal response, proving the connection wasn't disturbed.
    client.send("echo still-alive");
    let output = client.recv_until_eof();

    assert_eq!(output, b"still-alive\n".to_vec());
}

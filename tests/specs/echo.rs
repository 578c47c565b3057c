//! §8 end-to-end scenario 1: single-command echo.

use crate::prelude::Server;

#[test]
fn echo_streams_one_frame_then_eof() {
    let server = Server::spawn();
    let mut client = server.connect();

    client.send("echo hello");
    let output = client.recv_until_eof();

    assert_eq!(output, b"hello\n".to_vec());
}

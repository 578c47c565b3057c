//! Test helpers for the black-box `jssd` specs.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::net::TcpStream;
use std::path::{Path, PathBuf};
use std::process::{Child, Command};
use std::sync::atomic::{AtomicU16, Ordering};
use std::time::{Duration, Instant};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const CONNECT_POLL: Duration = Duration::from_millis(10);

/// Each test picks a distinct port off this counter so parallel test
/// binaries never collide on `bind()`.
static NEXT_PORT: AtomicU16 = AtomicU16::new(20_451);

fn next_port() -> u16 {
    NEXT_PORT.fetch_add(1, Ordering::Relaxed)
}

/// Resolve the built `jssd` binary the same way `cargo test` lays out
/// the target directory for a workspace's other members.
fn jssd_binary() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let standard = manifest_dir.join("target/debug/jssd");
    if standard.exists() {
        return standard;
    }
    if let Ok(exe) = std::env::current_exe() {
        if let Some(debug_dir) = exe.parent().and_then(|d| d.parent()) {
            let fallback = debug_dir.join("jssd");
            if fallback.exists() {
                return fallback;
            }
        }
    }
    standard
}

/// A running `jssd` instance on its own port, killed on drop.
pub struct Server {
    child: Child,
    pub port: u16,
}

impl Server {
    pub fn spawn() -> Self {
        let port = next_port();
        let child = Command::new(jssd_binary())
            .env("JSSD_PORT", port.to_string())
            .spawn()
            .expect("failed to spawn jssd");

        let deadline = Instant::now() + CONNECT_TIMEOUT;
        loop {
            if TcpStream::connect(("127.0.0.1", port)).is_ok() {
                break;
            }
            if Instant::now() > deadline {
                panic!("jssd did not start listening on port {port} in time");
            }
            std::thread::sleep(CONNECT_POLL);
        }

        Self { child, port }
    }

    pub fn connect(&self) -> Client {
        Client::connect(self.port)
    }
}

impl Drop for Server {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// A length-prefixed protocol client over one TCP connection (§6).
pub struct Client {
    stream: TcpStream,
}

pub const EOF_SENTINEL: &[u8] = b"<<EOF>>";

impl Client {
    pub fn connect(port: u16) -> Self {
        let deadline = Instant::now() + CONNECT_TIMEOUT;
        loop {
            match TcpStream::connect(("127.0.0.1", port)) {
                Ok(stream) => return Self { stream },
                Err(_) if Instant::now() < deadline => std::thread::sleep(CONNECT_POLL),
                Err(e) => panic!("could not connect to jssd on port {port}: {e}"),
            }
        }
    }

    pub fn send(&mut self, line: &str) {
        use std::io::Write;
        let payload = line.as_bytes();
        self.stream
            .write_all(&(payload.len() as u32).to_be_bytes())
            .unwrap();
        self.stream.write_all(payload).unwrap();
        self.stream.flush().unwrap();
    }

    pub fn recv_frame(&mut self) -> Vec<u8> {
        use std::io::Read;
        let mut len_buf = [0u8; 4];
        self.stream.read_exact(&mut len_buf).unwrap();
        let len = u32::from_be_bytes(len_buf) as usize;
        let mut buf = vec![0u8; len];
        self.stream.read_exact(&mut buf).unwrap();
        buf
    }

    /// Read frames until (and including) the `<<EOF>>` sentinel, returning
    /// every preceding frame concatenated.
    pub fn recv_until_eof(&mut self) -> Vec<u8> {
        let mut out = Vec::new();
        loop {
            let frame = self.recv_frame();
            if frame == EOF_SENTINEL {
                return out;
            }
            out.extend(frame);
        }
    }
}

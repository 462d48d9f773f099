use std::net::{TcpListener, TcpStream};
use std::process::{Command, Stdio};
use std::thread;

use rilctl_wire::{io::send_all, Header, Message};

const CMD_ECHO: u32 = 0;
const CMD_GET_RADIO_STATE: u32 = 1;

fn reply(stream: &mut TcpStream, command: u32, token: u64, status: u32, payload: &[u8]) {
    let header = Header {
        command,
        token,
        status,
        payload_len: payload.len() as u32,
    };
    header.write_to(stream).expect("reply header should send");
    if !payload.is_empty() {
        send_all(stream, payload).expect("reply payload should send");
    }
}

/// Serve one connection with loop-back semantics, then exit.
fn spawn_echo_server() -> (u16, thread::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("listener should bind");
    let port = listener.local_addr().expect("addr should resolve").port();
    let join = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("client should connect");
        let req = Message::recv(&mut stream).expect("request should decode");
        reply(&mut stream, req.command, req.token, 0, &req.payload);
    });
    (port, join)
}

fn rilctl() -> Command {
    Command::new(env!("CARGO_BIN_EXE_rilctl"))
}

#[test]
fn echo_against_loopback_server_succeeds() {
    let (port, server) = spawn_echo_server();

    let output = rilctl()
        .args(["echo", "--port", &port.to_string(), "--state", "1"])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("rilctl should run");
    server.join().expect("server thread should finish");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn state_get_prints_reported_state() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("listener should bind");
    let port = listener.local_addr().expect("addr should resolve").port();
    let server = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("client should connect");
        let req = Message::recv(&mut stream).expect("request should decode");
        assert_eq!(req.command, CMD_GET_RADIO_STATE);
        assert!(req.payload.is_empty());
        reply(&mut stream, req.command, req.token, 0, b"{\"state\":4}");
    });

    let output = rilctl()
        .args(["state", "--port", &port.to_string(), "get", "--token", "4"])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("rilctl should run");
    server.join().expect("server thread should finish");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("GET_RADIO_STATE"), "stdout: {stdout}");
}

#[test]
fn send_prints_response_json() {
    let (port, server) = spawn_echo_server();

    let output = rilctl()
        .args([
            "send",
            "--port",
            &port.to_string(),
            "--command",
            &CMD_ECHO.to_string(),
            "--token",
            "99",
            "--data",
            "opaque",
            "--format",
            "json",
        ])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("rilctl should run");
    server.join().expect("server thread should finish");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"token\":99"), "stdout: {stdout}");
    assert!(stdout.contains("opaque"), "stdout: {stdout}");
}

#[test]
fn echo_reports_failure_on_token_mismatch() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("listener should bind");
    let port = listener.local_addr().expect("addr should resolve").port();
    let server = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("client should connect");
        let req = Message::recv(&mut stream).expect("request should decode");
        reply(&mut stream, req.command, req.token.wrapping_add(1), 0, &req.payload);
    });

    let output = rilctl()
        .args(["echo", "--port", &port.to_string()])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("rilctl should run");
    server.join().expect("server thread should finish");

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn truncated_reply_exits_nonzero() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("listener should bind");
    let port = listener.local_addr().expect("addr should resolve").port();
    let server = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("client should connect");
        let _ = Message::recv(&mut stream).expect("request should decode");
        // Length prefix only, then hang up mid-frame.
        send_all(&mut stream, &20i32.to_le_bytes()).expect("prefix should send");
    });

    let output = rilctl()
        .args(["echo", "--port", &port.to_string()])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("rilctl should run");
    server.join().expect("server thread should finish");

    assert!(!output.status.success());
}

#[test]
fn version_prints_package_version() {
    let output = rilctl()
        .arg("version")
        .stdout(Stdio::piped())
        .output()
        .expect("rilctl should run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")), "stdout: {stdout}");
}

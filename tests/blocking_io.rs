#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Blocking surface over real `std::io` streams.

use std::io::{Cursor, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;

use mcproto_wire::{IoTransport, ProtoRead, ProtoWrite};

#[test]
fn test_tcp_request_response() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let server = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut conn = IoTransport::new(stream);
        let name = conn.read_utf8_string().unwrap();
        let count = conn.read_varint32().unwrap();
        conn.write_utf8_string(&format!("hello {name}")).unwrap();
        conn.write_varlong(i64::from(count) * 1_000_000_000).unwrap();
    });

    let mut conn = IoTransport::new(TcpStream::connect(addr).unwrap());
    conn.write_utf8_string("steve").unwrap();
    conn.write_varint32(42).unwrap();
    assert_eq!(conn.read_utf8_string().unwrap(), "hello steve");
    assert_eq!(conn.read_varlong().unwrap(), 42_000_000_000);

    server.join().unwrap();
}

#[test]
fn test_closed_stream_reports_short_read() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let server = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut conn = IoTransport::new(stream);
        // Promise 10 bytes, deliver 2, hang up
        conn.write_varint32(10).unwrap();
        conn.get_mut().write_all(&[1, 2]).unwrap();
    });

    let mut conn = IoTransport::new(TcpStream::connect(addr).unwrap());
    server.join().unwrap();
    let err = conn.read_byte_array().unwrap_err();
    assert!(err.is_short_read());
}

#[test]
fn test_cursor_roundtrip() {
    let mut out = IoTransport::new(Vec::new());
    out.write_ascii_string("level-name").unwrap();
    out.write_optional(Some(-7i8), |w, v| w.write_byte(v)).unwrap();

    let mut input = IoTransport::new(Cursor::new(out.into_inner()));
    assert_eq!(input.read_ascii_string().unwrap(), "level-name");
    assert_eq!(input.read_optional(|r| r.read_byte()).unwrap(), Some(-7));
}

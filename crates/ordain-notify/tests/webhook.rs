//! Webhook sink against a local fake endpoint.

#![allow(clippy::unwrap_used, missing_docs)]

use assert_matches::assert_matches;
use ordain_notify::{Color, NotificationSink, NotifyError, WebhookSink};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

fn header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(end) = header_end(&buf) {
            let headers = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let body_len = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + body_len {
                break;
            }
        }
    }
    String::from_utf8(buf).unwrap()
}

/// Accept one request, answer with `status_line`, hand back the raw request.
async fn fake_webhook(status_line: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        let response =
            format!("{status_line}\r\ncontent-length: 2\r\nconnection: close\r\n\r\nok");
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
        request
    });
    (format!("http://{addr}/hook"), handle)
}

#[tokio::test]
async fn posts_json_text_body() {
    let (url, server) = fake_webhook("HTTP/1.1 200 OK").await;
    let sink = WebhookSink::new(url, Duration::from_secs(5)).unwrap();

    sink.notify("alice has had order abc fulfilled.", Color::Purple)
        .await
        .unwrap();

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /hook HTTP/1.1"));
    assert!(request
        .to_lowercase()
        .contains("content-type: application/json"));
    assert!(request.ends_with(r#"{"text":"alice has had order abc fulfilled."}"#));
    assert!(!request.contains("purple"));
}

#[tokio::test]
async fn error_status_is_a_transport_error() {
    let (url, server) = fake_webhook("HTTP/1.1 500 Internal Server Error").await;
    let sink = WebhookSink::new(url, Duration::from_secs(5)).unwrap();

    let result = sink.notify("hello", Color::Red).await;
    assert_matches!(result, Err(NotifyError::Transport(msg)) if msg.contains("500"));
    server.await.unwrap();
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let sink = WebhookSink::new(format!("http://{addr}/hook"), Duration::from_secs(5)).unwrap();
    let result = sink.notify("hello", Color::Red).await;
    assert_matches!(result, Err(NotifyError::Transport(_)));
}

// tests/provider_test.rs — Integration test: real Gemini client against failing endpoints

use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use folio::chat::SessionManager;
use folio::infra::config::{Config, DEFAULT_FALLBACK};
use folio::infra::errors::FolioError;
use folio::profile::Profile;
use folio::provider::google::GoogleProvider;
use folio::provider::{ChatRequest, Message, ModelProvider};

fn provider_at(base_url: &str) -> GoogleProvider {
    GoogleProvider::with_timeout("test-key".into(), Duration::from_secs(5))
        .unwrap()
        .with_base_url(base_url)
}

fn unreachable_provider() -> GoogleProvider {
    provider_at("http://127.0.0.1:9")
}

fn request() -> ChatRequest {
    ChatRequest {
        model: "gemini-2.5-flash".into(),
        messages: vec![Message::user("hi")],
        ..Default::default()
    }
}

fn manager(provider: GoogleProvider) -> SessionManager {
    SessionManager::from_config(Arc::new(provider), &Profile::default(), &Config::default())
        .unwrap()
}

/// Read one HTTP/1.1 request (headers plus `content-length` bytes of body).
async fn read_request(stream: &mut TcpStream) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            return;
        }
        buf.extend_from_slice(&chunk[..n]);

        let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
            continue;
        };
        let head = String::from_utf8_lossy(&buf[..end]).to_ascii_lowercase();
        let body_len = head
            .lines()
            .find_map(|l| l.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(0);
        if buf.len() >= end + 4 + body_len {
            return;
        }
    }
}

/// Serve the same canned response to every connection; returns the base URL.
async fn serve(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                return;
            };
            tokio::spawn(async move {
                read_request(&mut stream).await;
                let response = format!(
                    "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            });
        }
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn test_connection_failure_is_provider_error() {
    let err = unreachable_provider().chat(request()).await.unwrap_err();
    assert!(matches!(err, FolioError::Provider { .. }));
}

#[tokio::test]
async fn test_connection_failure_becomes_fallback() {
    let manager = manager(unreachable_provider());

    assert_eq!(manager.send_message("What are your skills?").await, DEFAULT_FALLBACK);
    assert!(manager.is_started());
}

#[tokio::test]
async fn test_quota_exceeded_is_rate_limited() {
    let base = serve("429 Too Many Requests", r#"{"error":{"code":429}}"#).await;

    let err = provider_at(&base).chat(request()).await.unwrap_err();
    assert!(matches!(err, FolioError::RateLimited { ref provider } if provider == "google"));

    let manager = manager(provider_at(&base));
    assert_eq!(manager.send_message("hi").await, DEFAULT_FALLBACK);
    assert_eq!(manager.session().unwrap().history_len().await, 0);
}

#[tokio::test]
async fn test_server_error_carries_status_and_body() {
    let base = serve("500 Internal Server Error", r#"{"error":"backend down"}"#).await;

    match provider_at(&base).chat(request()).await.unwrap_err() {
        FolioError::Provider { message, .. } => {
            assert!(message.contains("500"), "{message}");
            assert!(message.contains("backend down"), "{message}");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    assert_eq!(manager(provider_at(&base)).send_message("hi").await, DEFAULT_FALLBACK);
}

#[tokio::test]
async fn test_malformed_body_is_provider_error() {
    let base = serve("200 OK", "not json").await;

    match provider_at(&base).chat(request()).await.unwrap_err() {
        FolioError::Provider { message, .. } => {
            assert!(message.starts_with("Failed to parse response"), "{message}");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    assert_eq!(manager(provider_at(&base)).send_message("hi").await, DEFAULT_FALLBACK);
}

#[tokio::test]
async fn test_successful_reply_reaches_the_caller() {
    let base = serve(
        "200 OK",
        r#"{"candidates":[{"content":{"parts":[{"text":"I build Flutter apps."}]},"finishReason":"STOP"}]}"#,
    )
    .await;

    let manager = manager(provider_at(&base));
    assert_eq!(manager.send_message("What do you do?").await, "I build Flutter apps.");
    assert_eq!(manager.session().unwrap().history_len().await, 2);
}

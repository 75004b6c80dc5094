// SPDX-License-Identifier: MPL-2.0
//! HTTP tests for the accounts data source against a local canned server.

use ledger_lens::data_source::{self, AccountDataSource};
use ledger_lens::domain::network::{ApiBaseUrl, RequestTimeout};
use ledger_lens::error::FetchError;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Accepts one connection, records the request head, and answers with
/// `status_line` and `body`.
async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let request = read_head(&mut socket).await;

        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.expect("write");
        let _ = socket.shutdown().await;
        request
    });

    (format!("http://{addr}"), handle)
}

async fn read_head(socket: &mut tokio::net::TcpStream) -> String {
    let mut request = Vec::new();
    let mut buf = [0_u8; 1024];
    loop {
        let n = socket.read(&mut buf).await.expect("read");
        if n == 0 {
            break;
        }
        request.extend_from_slice(&buf[..n]);
        if request.windows(4).any(|window| window == b"\r\n\r\n") {
            break;
        }
    }
    String::from_utf8_lossy(&request).into_owned()
}

fn source(base: &str, timeout_secs: u32) -> AccountDataSource {
    let base = ApiBaseUrl::parse(base).expect("valid base url");
    AccountDataSource::new(&base, RequestTimeout::new(timeout_secs)).expect("client builds")
}

#[tokio::test]
async fn success_returns_records_in_order() {
    let (base, server) = serve_once(
        "200 OK",
        r#"[{"id":"2","name":"B","account_type":"asset","balance":"1","currency":"USD"},
            {"id":"1","name":"A","account_type":"asset","balance":"-1","currency":"USD"}]"#,
    )
    .await;

    let accounts = source(&base, 5)
        .fetch_accounts(data_source::new_cancellation_token())
        .await
        .expect("fetch succeeds");

    let ids: Vec<&str> = accounts.iter().map(|account| account.id.as_str()).collect();
    assert_eq!(ids, ["2", "1"]);

    let request = server.await.expect("server task");
    assert!(request.starts_with("GET /accounts HTTP/1.1"), "{request}");
    assert!(request.to_ascii_lowercase().contains("accept: application/json"));
}

#[tokio::test]
async fn empty_array_is_a_valid_result() {
    let (base, _server) = serve_once("200 OK", "[]").await;
    let accounts = source(&base, 5)
        .fetch_accounts(data_source::new_cancellation_token())
        .await
        .expect("fetch succeeds");
    assert!(accounts.is_empty());
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let (base, _server) = serve_once("500 Internal Server Error", "{}").await;
    let error = source(&base, 5)
        .fetch_accounts(data_source::new_cancellation_token())
        .await
        .expect_err("fetch fails");

    assert_eq!(
        error,
        FetchError::Status {
            code: 500,
            reason: Some("Internal Server Error".to_string()),
        }
    );
    assert_eq!(error.to_string(), "HTTP status: 500 Internal Server Error");
}

#[tokio::test]
async fn malformed_body_is_a_deserialization_error() {
    let (base, _server) = serve_once("200 OK", r#"{"accounts": "nope"}"#).await;
    let error = source(&base, 5)
        .fetch_accounts(data_source::new_cancellation_token())
        .await
        .expect_err("fetch fails");
    assert!(matches!(error, FetchError::Deserialization(_)), "{error:?}");
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let error = source(&format!("http://{addr}"), 5)
        .fetch_accounts(data_source::new_cancellation_token())
        .await
        .expect_err("fetch fails");
    assert!(matches!(error, FetchError::Transport(_)), "{error:?}");
}

#[tokio::test]
async fn slow_server_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let _server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let _ = read_head(&mut socket).await;
        tokio::time::sleep(Duration::from_secs(10)).await;
    });

    let error = source(&format!("http://{addr}"), 1)
        .fetch_accounts(data_source::new_cancellation_token())
        .await
        .expect_err("fetch fails");
    assert_eq!(error, FetchError::Timeout);
}

#[tokio::test]
async fn cancelled_token_short_circuits() {
    let token = data_source::new_cancellation_token();
    data_source::cancel(&token);

    let error = source("http://127.0.0.1:9", 5)
        .fetch_accounts(token)
        .await
        .expect_err("fetch is cancelled");
    assert_eq!(error, FetchError::Cancelled);
}

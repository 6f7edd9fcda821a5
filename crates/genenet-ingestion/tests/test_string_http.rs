//! StringDbClient against a one-shot local HTTP server.

use genenet_config::StringDbConfig;
use genenet_ingestion::sources::{InteractionSource, StringDbClient};
use genenet_ingestion::{Edge, FetchError};
use genenet_test_utils::{genes, FSHR_LHCGR_RESPONSE};
use pretty_assertions::assert_eq;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Accepts one connection, answers with `status` and `body`, and yields the
/// request line it received.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);
            if request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();

        String::from_utf8_lossy(&request).lines().next().unwrap_or_default().to_string()
    });

    (format!("http://{}", addr), handle)
}

fn client(base_url: String) -> StringDbClient {
    let config = StringDbConfig { base_url, ..StringDbConfig::default() };
    StringDbClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_request_carries_newline_joined_identifiers_and_species() {
    let (base_url, server) = serve_once("200 OK", FSHR_LHCGR_RESPONSE).await;

    let edges = client(base_url).network(&genes(&["FSHR", "LHCGR"])).await.unwrap();
    let request_line = server.await.unwrap();

    assert_eq!(
        request_line,
        "GET /api/json/network?identifiers=FSHR%0ALHCGR&species=9606 HTTP/1.1"
    );
    assert_eq!(edges, vec![Edge::new("FSHR", "LHCGR", 0.9)]);
}

#[tokio::test]
async fn test_non_success_status_is_network_error() {
    let (base_url, server) = serve_once("503 Service Unavailable", "").await;

    let result = client(base_url).network(&genes(&["FSHR"])).await;
    server.await.unwrap();

    match result {
        Err(FetchError::Network(message)) => assert!(message.contains("503"), "{message}"),
        other => panic!("expected a network error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_error_object_body_is_parse_error() {
    let (base_url, server) =
        serve_once("200 OK", r#"{"Error":"not found","ErrorMessage":"no identifiers"}"#).await;

    let result = client(base_url).network(&genes(&["NOTAGENE"])).await;
    server.await.unwrap();

    assert!(matches!(result, Err(FetchError::Parse(m)) if m == "no identifiers"));
}

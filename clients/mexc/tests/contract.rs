use std::sync::Arc;
use std::time::Duration;

use clients_mexc::{ClientError, MexcContractClient, MexcContractClientConfig};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serves one canned HTTP response and hands back the raw request it received.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut raw = Vec::new();
        let mut buf = [0u8; 1024];
        while !raw.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&buf[..n]);
        }
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        String::from_utf8_lossy(&raw).to_string()
    });
    (base_url, handle)
}

fn client_for(base_url: String) -> MexcContractClient {
    let mut config = MexcContractClientConfig::new("test-access".to_string(), "test-secret".to_string());
    config.base_url = base_url;
    config.request_timeout = Duration::from_secs(5);
    MexcContractClient::new(Arc::new(reqwest::Client::new()), config)
}

fn header<'a>(request: &'a str, name: &str) -> Option<&'a str> {
    request.lines().find_map(|line| {
        let (k, v) = line.split_once(':')?;
        k.trim().eq_ignore_ascii_case(name).then(|| v.trim())
    })
}

#[tokio::test]
async fn open_positions_sends_signed_headers() {
    let (base_url, server) = serve_once(
        "200 OK",
        r#"{"success":true,"code":0,"data":[{"symbol":"BTC_USDT","holdAvgPrice":100.0}]}"#,
    )
    .await;
    let client = client_for(base_url);

    let positions = client.open_positions().await.unwrap();
    assert_eq!(positions.len(), 1);
    assert_eq!(positions[0].symbol, "BTC_USDT");
    assert_eq!(positions[0].hold_avg_price, 100.0);

    let request = server.await.unwrap();
    assert!(request.starts_with("GET /api/v1/private/position/open_positions HTTP/1.1"));
    assert_eq!(header(&request, "ApiKey"), Some("test-access"));
    assert_eq!(header(&request, "Content-Type"), Some("application/json"));

    let request_time = header(&request, "Request-Time").unwrap();
    assert!(request_time.chars().all(|c| c.is_ascii_digit()));
    let expected = clients_mexc::sign("test-access", "test-secret", request_time, "");
    assert_eq!(header(&request, "Signature"), Some(expected.as_str()));
}

#[tokio::test]
async fn fair_price_uses_symbol_path() {
    let (base_url, server) = serve_once(
        "200 OK",
        r#"{"success":true,"code":0,"data":{"symbol":"ETH_USDT","fairPrice":3050.25}}"#,
    )
    .await;
    let client = client_for(base_url);

    let price = client.fair_price("ETH_USDT").await.unwrap();
    assert_eq!(price, 3050.25);

    let request = server.await.unwrap();
    assert!(request.starts_with("GET /api/v1/contract/fair_price/ETH_USDT HTTP/1.1"));
}

#[tokio::test]
async fn fair_price_escapes_symbol_as_one_segment() {
    let (base_url, server) = serve_once(
        "200 OK",
        r#"{"success":true,"code":0,"data":{"fairPrice":1.0}}"#,
    )
    .await;
    let client = client_for(base_url);

    client.fair_price("A/B?c#d").await.unwrap();

    let request = server.await.unwrap();
    assert!(request.starts_with("GET /api/v1/contract/fair_price/A%2FB%3Fc%23d HTTP/1.1"));
    let request_time = header(&request, "Request-Time").unwrap();
    let expected = clients_mexc::sign("test-access", "test-secret", request_time, "");
    assert_eq!(header(&request, "Signature"), Some(expected.as_str()));
}

#[tokio::test]
async fn signed_get_puts_canonical_query_in_url() {
    let (base_url, server) = serve_once("200 OK", r#"{"success":true,"code":0,"data":[]}"#).await;
    let client = client_for(base_url);

    let params = [("symbol", "BTC_USDT".to_string()), ("note", "a b".to_string())];
    let data: Vec<serde_json::Value> = client
        .signed_get("/api/v1/private/position/list/history_positions", &params)
        .await
        .unwrap();
    assert!(data.is_empty());

    let request = server.await.unwrap();
    assert!(request.starts_with(
        "GET /api/v1/private/position/list/history_positions?note=a%20b&symbol=BTC_USDT HTTP/1.1"
    ));
    let request_time = header(&request, "Request-Time").unwrap();
    let expected = clients_mexc::sign(
        "test-access",
        "test-secret",
        request_time,
        "note=a%20b&symbol=BTC_USDT",
    );
    assert_eq!(header(&request, "Signature"), Some(expected.as_str()));
}

#[tokio::test]
async fn api_error_envelope() {
    let (base_url, _server) = serve_once(
        "200 OK",
        r#"{"success":false,"code":602,"message":"Signature verification failed!"}"#,
    )
    .await;
    let client = client_for(base_url);

    let err = client.open_positions().await.unwrap_err();
    assert!(matches!(err, ClientError::Api { code: 602, .. }));
}

#[tokio::test]
async fn invalid_json_is_decode_error() {
    let (base_url, _server) = serve_once("200 OK", "<html>oops</html>").await;
    let client = client_for(base_url);

    let err = client.open_positions().await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn non_success_status() {
    let (base_url, _server) = serve_once("503 Service Unavailable", "busy").await;
    let client = client_for(base_url);

    let err = client.fair_price("BTC_USDT").await.unwrap_err();
    match err {
        ClientError::Status { status, body } => {
            assert_eq!(status.as_u16(), 503);
            assert_eq!(body, "busy");
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn connection_refused_is_transport_error() {
    // bind then drop to get a port nobody listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    let client = client_for(base_url);

    let err = client.open_positions().await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
}

#[tokio::test]
async fn malformed_base_url_is_url_error() {
    let client = client_for("not a url".to_string());

    let err = client.open_positions().await.unwrap_err();
    assert!(matches!(err, ClientError::Url(_)));
}

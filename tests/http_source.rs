//! HttpBacktestSource against a throwaway local server with canned replies.

use backtest_dashboard::engine::BacktestError;
use backtest_dashboard::{BacktestParams, BacktestSource, HttpBacktestSource};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

const MSFT_BODY: &str = r#"{"dates":["2023-06-01","2023-06-02"],"close":[10,11],"sma_short":[10,10.5],"sma_long":[9,9.5],"buy_dates":["2023-06-01"],"buy_prices":[10],"sell_dates":[],"sell_prices":[],"eq_dates":["2023-06-01","2023-06-02"],"equity":[1000,1010],"summary":{"return_pct":1.0}}"#;

/// Serve exactly one response, hand back the request line that was received.
async fn serve_once(status: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }
        let head = String::from_utf8_lossy(&head).to_string();
        let request_line = head.lines().next().unwrap_or_default().to_string();

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        let _ = tx.send(request_line);
    });

    (base_url, rx)
}

fn msft() -> BacktestParams {
    BacktestParams::new("MSFT", "2023-06-01", "2023-12-31")
}

#[tokio::test]
async fn success_parses_body_and_sends_query() {
    let (base_url, request_line) = serve_once("200 OK", MSFT_BODY).await;
    let source = HttpBacktestSource::new(&base_url).unwrap();

    let result = source.fetch(&msft()).await.unwrap();
    assert_eq!(result.dates, vec!["2023-06-01", "2023-06-02"]);
    assert_eq!(result.equity, vec![1000.0, 1010.0]);
    assert_eq!(result.summary["return_pct"], 1.0);

    let line = request_line.await.unwrap();
    assert_eq!(
        line,
        "GET /backtest?ticker=MSFT&start=2023-06-01&end=2023-12-31 HTTP/1.1"
    );
}

#[tokio::test]
async fn server_error_is_generic_backend_error() {
    let (base_url, _rx) = serve_once("500 INTERNAL SERVER ERROR", r#"{"error":"No data"}"#).await;
    let source = HttpBacktestSource::new(&base_url).unwrap();

    let err = source.fetch(&msft()).await.unwrap_err();
    assert_eq!(err, BacktestError::Status(500));
    assert_eq!(err.to_string(), "Backend error");
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let (base_url, _rx) = serve_once("200 OK", r#"{"dates": ["2023-06-01"], "close": "#).await;
    let source = HttpBacktestSource::new(&base_url).unwrap();

    let err = source.fetch(&msft()).await.unwrap_err();
    assert!(matches!(err, BacktestError::Parse(_)), "got {:?}", err);
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
async fn wrong_shape_is_a_parse_error() {
    let (base_url, _rx) = serve_once("200 OK", r#"{"error": "not a result"}"#).await;
    let source = HttpBacktestSource::new(&base_url).unwrap();

    let err = source.fetch(&msft()).await.unwrap_err();
    assert!(matches!(err, BacktestError::Parse(_)));
    assert!(err.to_string().contains("missing field"));
}

#[tokio::test]
async fn refused_connection_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let source = HttpBacktestSource::new(&base_url).unwrap();
    let err = source.fetch(&msft()).await.unwrap_err();
    assert!(matches!(err, BacktestError::Transport(_)), "got {:?}", err);
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
async fn empty_ticker_is_still_sent() {
    let (base_url, request_line) = serve_once("500 INTERNAL SERVER ERROR", "{}").await;
    let source = HttpBacktestSource::new(&base_url).unwrap();

    let params = BacktestParams::new("", "2023-01-01", "2024-12-31");
    let err = source.fetch(&params).await.unwrap_err();
    assert_eq!(err.to_string(), "Backend error");

    let line = request_line.await.unwrap();
    assert!(line.starts_with("GET /backtest?ticker=&start=2023-01-01&end=2024-12-31 "));
}

#[tokio::test]
async fn query_values_are_url_encoded() {
    let (base_url, request_line) = serve_once("200 OK", MSFT_BODY).await;
    let source = HttpBacktestSource::new(&format!("{}/", base_url)).unwrap();

    let params = BacktestParams::new("BRK B&x", "2023-06-01", "2023-12-31");
    source.fetch(&params).await.unwrap();

    let line = request_line.await.unwrap();
    assert!(line.contains("ticker=BRK+B%26x&"), "got {}", line);
}

//! End-to-end tests of `RequestExecutor` + `UreqTransport` against the live
//! mock server.
//!
//! # Design
//! Starts the mock server on a random port in a background thread with its
//! own runtime, then drives real HTTP exchanges through the executor. ureq
//! blocks the calling task, so the server must not share the test's runtime.

use std::time::Duration;

use mock_server::{pattern_byte, Echo};
use network_core::{
    HttpMethod, HttpRequest, RequestError, RequestExecutor, Transport, TransportError,
    UreqTransport,
};

fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

fn request(method: HttpMethod, url: &str) -> HttpRequest {
    HttpRequest::from_str_url(method, url).unwrap()
}

#[tokio::test]
async fn success_statuses_return_body_unchanged() {
    let base = start_server();
    let executor = RequestExecutor::new(UreqTransport::new());

    let data = executor
        .perform(&request(HttpMethod::Get, &format!("{base}/status/200?body=some%20data")))
        .await
        .unwrap();
    assert_eq!(data, b"some data");

    let data = executor
        .perform(&request(HttpMethod::Get, &format!("{base}/status/299?body=edge")))
        .await
        .unwrap();
    assert_eq!(data, b"edge");

    let data = executor
        .perform(&request(HttpMethod::Delete, &format!("{base}/status/204")))
        .await
        .unwrap();
    assert!(data.is_empty());
}

#[tokio::test]
async fn error_statuses_are_invalid_response() {
    let base = start_server();
    let executor = RequestExecutor::new(UreqTransport::new());

    for code in [400, 404, 500, 503] {
        let err = executor
            .perform(&request(HttpMethod::Get, &format!("{base}/status/{code}?body=nope")))
            .await
            .unwrap_err();
        assert_eq!(err, RequestError::InvalidResponse, "status {code}");
    }
}

#[tokio::test]
async fn body_over_ten_megabytes_is_returned_whole() {
    let base = start_server();
    let executor = RequestExecutor::new(UreqTransport::new());
    let len = 11 * 1024 * 1024;

    let data = executor
        .perform(&request(HttpMethod::Get, &format!("{base}/bytes/{len}")))
        .await
        .unwrap();

    assert_eq!(data.len(), len);
    assert!(data.iter().enumerate().all(|(i, b)| *b == pattern_byte(i)));
}

#[tokio::test]
async fn transport_reports_non_2xx_as_response() {
    let base = start_server();
    let transport = UreqTransport::new();

    let response = transport
        .fetch(&request(HttpMethod::Get, &format!("{base}/status/503?body=busy")))
        .await
        .unwrap();
    assert_eq!(response.status, 503);
    assert_eq!(response.body, b"busy");
}

#[tokio::test]
async fn request_is_forwarded_verbatim() {
    let base = start_server();
    let executor = RequestExecutor::new(UreqTransport::new());

    let req = request(HttpMethod::Post, &format!("{base}/echo"))
        .with_header("content-type", "application/json")
        .with_header("x-trace", "abc")
        .with_body(r#"{"title":"Buy milk"}"#);
    let data = executor.perform(&req).await.unwrap();

    let echo: Echo = serde_json::from_slice(&data).unwrap();
    assert_eq!(echo.method, "POST");
    assert_eq!(echo.headers["content-type"], "application/json");
    assert_eq!(echo.headers["x-trace"], "abc");
    assert_eq!(echo.body, r#"{"title":"Buy milk"}"#);
}

#[tokio::test]
async fn timeout_is_connectivity() {
    let base = start_server();
    let transport = UreqTransport::with_timeout(Duration::from_millis(100));

    let err = transport
        .fetch(&request(HttpMethod::Get, &format!("{base}/delay/2000")))
        .await
        .unwrap_err();
    assert_eq!(err, TransportError::Timeout);

    let executor = RequestExecutor::new(transport);
    let err = executor
        .perform(&request(HttpMethod::Get, &format!("{base}/delay/2000")))
        .await
        .unwrap_err();
    assert_eq!(err, RequestError::Connectivity);
}

#[tokio::test]
async fn refused_connection_is_connectivity() {
    // Bind then drop to get a port nothing listens on.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let executor = RequestExecutor::new(UreqTransport::with_timeout(Duration::from_secs(5)));

    let err = executor
        .perform(&request(HttpMethod::Get, &format!("http://{addr}/status/200")))
        .await
        .unwrap_err();
    assert_eq!(err, RequestError::Connectivity);
}

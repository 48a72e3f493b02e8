//! Exercises the Frankfurter provider against a throw-away local HTTP server.

use api::conversion::ConversionRequest;
use api::conversion::MissingRatePolicy;
use api::currency::Currency;
use api::rate_providers::frankfurter::Frankfurter;
use api::rate_providers::RateProvider;
use pretty_assertions::assert_eq;
use tokio::io::AsyncReadExt;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Answers exactly one request with `status` and `body`.
///
/// Returns the base URL to point the provider at, plus a handle that resolves
/// to the request head the server received.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
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

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();

        String::from_utf8_lossy(&head).into_owned()
    });

    (base_url, handle)
}

fn eur_to_usd(amount: f64) -> ConversionRequest {
    ConversionRequest::new(amount, Currency::EUR, Currency::USD)
}

#[tokio::test]
async fn converts_through_latest_endpoint() {
    let (base_url, server) = serve_once(
        "200 OK",
        r#"{"amount":10.0,"base":"EUR","date":"2024-05-17","rates":{"USD":10.85}}"#,
    )
    .await;

    let resp = Frankfurter::new(base_url)
        .convert(&eur_to_usd(10.0))
        .await
        .unwrap();

    assert_eq!(resp.rates.get(Currency::USD), Some(10.85));
    assert_eq!(resp.base.as_deref(), Some("EUR"));

    let head = server.await.unwrap();
    let request_line = head.lines().next().unwrap_or_default();
    assert_eq!(request_line, "GET /latest?amount=10&from=EUR&to=USD HTTP/1.1");
}

#[tokio::test]
async fn fractional_amount_is_sent_verbatim() {
    let (base_url, server) = serve_once("200 OK", r#"{"rates":{"BRL":14.2}}"#).await;

    let request = ConversionRequest::new(2.5, Currency::USD, Currency::BRL);
    Frankfurter::new(base_url).convert(&request).await.unwrap();

    let head = server.await.unwrap();
    assert!(head.starts_with("GET /latest?amount=2.5&from=USD&to=BRL "));
}

#[tokio::test]
async fn empty_rates_decode_and_fall_back_to_zero() {
    let (base_url, _server) = serve_once("200 OK", r#"{"amount":5.0,"rates":{}}"#).await;

    let resp = Frankfurter::new(base_url)
        .convert(&eur_to_usd(5.0))
        .await
        .unwrap();

    assert_eq!(
        resp.converted_amount(Currency::USD, MissingRatePolicy::Zero),
        Ok(0.0)
    );
}

#[tokio::test]
async fn error_status_is_a_failure() {
    let (base_url, _server) =
        serve_once("422 Unprocessable Entity", r#"{"message":"invalid amount"}"#).await;

    let result = Frankfurter::new(base_url).convert(&eur_to_usd(1.0)).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn non_json_body_is_a_failure() {
    let (base_url, _server) = serve_once("200 OK", "<html>maintenance</html>").await;

    let result = Frankfurter::new(base_url).convert(&eur_to_usd(1.0)).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn unreachable_host_is_a_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let result = Frankfurter::new(base_url).convert(&eur_to_usd(1.0)).await;

    assert!(result.is_err());
}

//! Tests for `ReqwestClient`.
//!
//! These cover construction and error classification; requests against a
//! live Slack endpoint are out of scope for unit tests.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use super::*;
use crate::delivery::{DeliveryError, WebhookClient, WebhookSender};
use crate::message::{Attachment, Block, Message};

/// Serves one connection: reads the request, then answers with `status`
/// and a `Content-Length` larger than the body before closing.
fn serve_truncated(status: &'static str) -> url::Url {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        read_request(&mut stream);
        let response = format!("HTTP/1.1 {status}\r\nContent-Length: 100\r\n\r\nok");
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
    });

    url::Url::parse(&format!("http://{addr}/services/T000/B000/XXXX")).unwrap()
}

/// Reads headers and a `Content-Length` body from `stream`.
fn read_request(stream: &mut std::net::TcpStream) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = stream.read(&mut chunk).unwrap();
        if n == 0 {
            return;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf);
        if let Some(end) = text.find("\r\n\r\n") {
            let length = text[..end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= end + 4 + length {
                return;
            }
        }
    }
}

fn message() -> Message {
    Message::single(Attachment::new(vec![Block::divider()]))
}

mod reqwest_client {
    use super::*;

    #[test]
    fn default_and_new_are_usable() {
        let client1 = ReqwestClient::new();
        let client2 = ReqwestClient::default();

        assert!(format!("{client1:?}").contains("ReqwestClient"));
        assert!(format!("{client2:?}").contains("ReqwestClient"));
    }

    #[test]
    fn from_client_accepts_custom_client() {
        let custom = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap();
        let client = ReqwestClient::from_client(custom);

        let _ = format!("{client:?}");
    }

    #[test]
    fn client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReqwestClient>();
    }

    #[tokio::test]
    async fn request_to_invalid_host_returns_error_or_proxy_response() {
        let client = ReqwestClient::new();
        let url = url::Url::parse("http://invalid.invalid.invalid/").unwrap();

        let result = client.request(HttpRequest::post(url)).await;

        // Behind a proxy the DNS failure may surface as an HTTP error status instead.
        match result {
            Err(HttpError::Connection(_)) => {}
            Ok(resp) if !resp.is_success() => {}
            other => panic!("Expected connection error or proxy error response, got {other:?}"),
        }
    }
}

mod truncated_body {
    use super::*;

    #[tokio::test]
    async fn success_status_survives_truncated_body() {
        let url = serve_truncated("200 OK");

        let response = ReqwestClient::new()
            .request(HttpRequest::post_json(url, b"{}".to_vec()))
            .await
            .unwrap();

        assert_eq!(response.status, ::http::StatusCode::OK);
    }

    #[tokio::test]
    async fn accepted_message_is_delivered_despite_truncated_body() {
        let url = serve_truncated("200 OK");

        let result = WebhookClient::new().deliver(url.as_str(), &message()).await;

        assert!(result.is_ok(), "{result:?}");
    }

    #[tokio::test]
    async fn rejected_message_is_could_not_send_despite_truncated_body() {
        let url = serve_truncated("500 Internal Server Error");

        let error = WebhookClient::new()
            .deliver(url.as_str(), &message())
            .await
            .unwrap_err();

        assert!(
            matches!(
                error,
                DeliveryError::CouldNotSendMessage {
                    status: ::http::StatusCode::INTERNAL_SERVER_ERROR,
                    ..
                }
            ),
            "{error:?}"
        );
    }
}

mod connection_error {
    use super::*;

    #[tokio::test]
    async fn refused_connection_does_not_expose_webhook_path() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let url = url::Url::parse(&format!("http://{addr}/services/T000/B000/SECRET")).unwrap();

        let error = ReqwestClient::new()
            .request(HttpRequest::post_json(url, b"{}".to_vec()))
            .await
            .unwrap_err();

        assert!(matches!(error, HttpError::Connection(_)), "{error:?}");
        assert!(!format!("{error} {error:?}").contains("SECRET"));
    }
}

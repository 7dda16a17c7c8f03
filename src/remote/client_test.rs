use serde_json::json;

use super::*;
use crate::operations::HttpMethod;
use crate::test_support::{MockRemote, closed_port_url};

fn request(method: HttpMethod, segments: &[&str]) -> RemoteRequest {
    RemoteRequest {
        method,
        segments: segments.iter().map(|s| s.to_string()).collect(),
        query: Vec::new(),
        body: None,
    }
}

#[test]
fn test_url_for_appends_segments() {
    let client = ReviewWebClient::new("https://reviewweb.site/api/v1");

    let url = client
        .url_for(&["review".to_string(), "abc".to_string()])
        .unwrap();

    assert_eq!(url.as_str(), "https://reviewweb.site/api/v1/review/abc");
}

#[test]
fn test_url_for_tolerates_trailing_slash() {
    let client = ReviewWebClient::new("https://reviewweb.site/api/v1/");

    let url = client.url_for(&["ai".to_string(), "models".to_string()]).unwrap();

    assert_eq!(url.as_str(), "https://reviewweb.site/api/v1/ai/models");
}

#[test]
fn test_url_for_encodes_identifiers() {
    let client = ReviewWebClient::new("https://reviewweb.site/api/v1");

    let url = client
        .url_for(&["review".to_string(), "a/b c".to_string()])
        .unwrap();

    assert_eq!(url.as_str(), "https://reviewweb.site/api/v1/review/a%2Fb%20c");
}

#[test]
fn test_url_for_rejects_invalid_base() {
    let client = ReviewWebClient::new("not a url");

    let err = client.url_for(&[]).unwrap_err();

    assert!(matches!(err, ClientError::InvalidBaseUrl { .. }));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_send_sets_headers_query_and_body() {
    let remote = MockRemote::start(200, json!({ "ok": true })).await;
    let client = ReviewWebClient::new(remote.base_url());
    let mut req = request(HttpMethod::Post, &["scrape", "links-map"]);
    req.query = vec![("url", "https://example.com/?a=1&b=2".to_string())];
    req.body = Some(json!({ "options": { "maxLinks": 5 } }));

    let value = client.send(&req, Some("secret-key")).await.unwrap();

    assert_eq!(value, json!({ "ok": true }));
    let seen = remote.single_request();
    assert_eq!(seen.method, "POST");
    assert_eq!(seen.path, "/api/v1/scrape/links-map");
    assert_eq!(seen.query_param("url"), Some("https://example.com/?a=1&b=2"));
    assert_eq!(seen.header("x-api-key"), Some("secret-key"));
    assert_eq!(seen.header("content-type"), Some("application/json"));
    assert_eq!(seen.body, Some(json!({ "options": { "maxLinks": 5 } })));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_send_without_key_omits_header() {
    let remote = MockRemote::start(200, json!([])).await;
    let client = ReviewWebClient::new(remote.base_url());

    client
        .send(&request(HttpMethod::Get, &["ai", "models"]), None)
        .await
        .unwrap();

    let seen = remote.single_request();
    assert_eq!(seen.method, "GET");
    assert_eq!(seen.header("x-api-key"), None);
    assert_eq!(seen.header("content-type"), Some("application/json"));
    assert_eq!(seen.body, None);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_send_encodes_path_identifier() {
    let remote = MockRemote::start(200, json!({})).await;
    let client = ReviewWebClient::new(remote.base_url());

    client
        .send(&request(HttpMethod::Delete, &["review", "a/b c"]), None)
        .await
        .unwrap();

    assert_eq!(remote.single_request().path, "/api/v1/review/a%2Fb%20c");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_upstream_error_uses_remote_message_and_code() {
    let remote = MockRemote::start(
        404,
        json!({ "message": "not found", "error": "not_found" }),
    )
    .await;
    let client = ReviewWebClient::new(remote.base_url());

    let err = client
        .send(&request(HttpMethod::Get, &["review", "missing"]), None)
        .await
        .unwrap_err();

    match err {
        ClientError::Upstream {
            status,
            code,
            message,
        } => {
            assert_eq!(status, 404);
            assert_eq!(code.as_deref(), Some("not_found"));
            assert_eq!(message, "not found");
        }
        other => panic!("expected upstream error, got {:?}", other),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_upstream_error_without_json_body() {
    let remote = MockRemote::start_raw(503, "<html>Service Unavailable</html>").await;
    let client = ReviewWebClient::new(remote.base_url());

    let err = client
        .send(&request(HttpMethod::Get, &["ai", "models"]), None)
        .await
        .unwrap_err();

    match err {
        ClientError::Upstream {
            status,
            code,
            message,
        } => {
            assert_eq!(status, 503);
            assert_eq!(code, None);
            assert_eq!(message, "Unknown upstream error");
        }
        other => panic!("expected upstream error, got {:?}", other),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_empty_success_body_is_null() {
    let remote = MockRemote::start_empty(200).await;
    let client = ReviewWebClient::new(remote.base_url());

    let value = client
        .send(&request(HttpMethod::Delete, &["review", "abc"]), None)
        .await
        .unwrap();

    assert_eq!(value, serde_json::Value::Null);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_non_json_success_body_is_invalid_response() {
    let remote = MockRemote::start_raw(200, "definitely not json").await;
    let client = ReviewWebClient::new(remote.base_url());

    let err = client
        .send(&request(HttpMethod::Get, &["ai", "models"]), None)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::InvalidResponse { .. }));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_connection_refused_is_connection_failure() {
    let client = ReviewWebClient::new(closed_port_url());

    let err = client
        .send(&request(HttpMethod::Get, &["ai", "models"]), None)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::ConnectionFailed { .. }));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unsendable_key_fails_before_request() {
    let remote = MockRemote::start(200, json!({})).await;
    let client = ReviewWebClient::new(remote.base_url());

    let err = client
        .send(&request(HttpMethod::Get, &["ai", "models"]), Some("bad\nkey"))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::InvalidApiKey));
    assert_eq!(remote.hits(), 0);
}

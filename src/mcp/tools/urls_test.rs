use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use super::*;
use crate::mcp::tools::ToolArgs;
use crate::test_support::{MockRemote, object, orchestrator_for};

#[tokio::test(flavor = "multi_thread")]
async fn test_is_url_alive_defaults_timeout() {
    let remote = MockRemote::start(200, json!({ "alive": true })).await;
    let server = ReviewWebServer::new(orchestrator_for(remote.base_url(), Some("key")));

    let result = server
        .is_url_alive(Parameters(ToolArgs::new(object(json!({
            "url": "https://example.com",
            "proxyUrl": "http://proxy.local:8080",
        })))))
        .await
        .unwrap();

    assert_ne!(result.is_error, Some(true));
    let seen = remote.single_request();
    assert_eq!(seen.path, "/api/v1/url/is-alive");
    assert_eq!(seen.query_param("timeout"), Some("10000"));
    assert_eq!(seen.query_param("proxyUrl"), Some("http://proxy.local:8080"));
    assert_eq!(seen.body, None);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_url_after_redirects_uses_call_key() {
    let remote = MockRemote::start(200, json!({ "url": "https://final.example.com" })).await;
    let server = ReviewWebServer::new(orchestrator_for(remote.base_url(), Some("configured")));

    server
        .get_url_after_redirects(Parameters(ToolArgs::new(object(json!({
            "url": "https://short.link/x",
            "api_key": "per-call",
        })))))
        .await
        .unwrap();

    let seen = remote.single_request();
    assert_eq!(seen.header("x-api-key"), Some("per-call"));
    assert_eq!(seen.query_param("api_key"), None);
    assert_eq!(seen.query, vec![("url".to_string(), "https://short.link/x".to_string())]);
}

//! End-to-end tests: a mock REST backend, the real HTTP transport, and
//! reqwest as the MCP client.

#![cfg(feature = "http")]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use axum::{
    Json, Router,
    http::{HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use dchub_mcp_server::core::transport::HttpConfig;
use dchub_mcp_server::core::transport::http::HttpTransport;
use dchub_mcp_server::core::{Config, McpServer, RequestContext};

/// Echoes the path, query and forwarded API key back as JSON.
///
/// Paths ending in `/boom` answer 500; paths ending in `/slow` stall past
/// the gateway's timeout.
async fn echo(uri: Uri, headers: HeaderMap) -> Response {
    let path = uri.path().to_string();
    if path.ends_with("/boom") {
        return (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response();
    }
    if path.ends_with("/slow") {
        tokio::time::sleep(Duration::from_secs(5)).await;
    }
    // Keep requests in flight long enough to overlap.
    tokio::time::sleep(Duration::from_millis(20)).await;

    let query: HashMap<String, String> = uri
        .query()
        .and_then(|q| serde_urlencoded::from_str(q).ok())
        .unwrap_or_default();
    let api_key = headers
        .get("x-api-key")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    Json(json!({ "path": path, "query": query, "api_key": api_key })).into_response()
}

async fn start_backend() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().fallback(echo);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

struct Gateway {
    addr: SocketAddr,
    http: reqwest::Client,
}

impl Gateway {
    async fn start(backend: SocketAddr, audit_db: Option<PathBuf>) -> Self {
        let mut config = Config::default();
        config.backend.base_url = format!("http://{}", backend);
        config.backend.timeout_secs = 1;
        match audit_db {
            Some(path) => config.audit.db_path = path,
            None => config.audit.enabled = false,
        }

        let server = McpServer::new(config).unwrap();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let transport = HttpTransport::new(HttpConfig {
            port: addr.port(),
            host: "127.0.0.1".to_string(),
            ..Default::default()
        });
        tokio::spawn(transport.serve(listener, server));

        Self {
            addr,
            http: reqwest::Client::new(),
        }
    }

    /// Send a raw `tools/call` and return the whole JSON-RPC response.
    async fn call_raw(&self, tool: &str, arguments: Value) -> Value {
        self.http
            .post(format!("http://{}/mcp", self.addr))
            .json(&json!({
                "jsonrpc": "2.0",
                "id": 7,
                "method": "tools/call",
                "params": { "name": tool, "arguments": arguments }
            }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap()
    }

    /// Call a tool and return the parsed JSON inside its text content.
    async fn call(&self, tool: &str, arguments: Value, key: Key<'_>) -> Value {
        let mut url = format!("http://{}/mcp", self.addr);
        let mut request = self.http.post(&url);
        match key {
            Key::None => {}
            Key::Header(k) => request = request.header("X-API-Key", k),
            Key::Query(k) => {
                url.push_str("?api_key=");
                url.push_str(&urlencoding::encode(k));
                request = self.http.post(&url);
            }
            Key::Both { header, query } => {
                url.push_str("?api_key=");
                url.push_str(query);
                request = self.http.post(&url).header("X-API-Key", header);
            }
        }

        let body: Value = request
            .json(&json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "tools/call",
                "params": { "name": tool, "arguments": arguments }
            }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(body["result"]["isError"], false, "unexpected body: {}", body);
        let text = body["result"]["content"][0]["text"].as_str().unwrap();
        serde_json::from_str(text).unwrap()
    }
}

#[derive(Clone, Copy)]
enum Key<'a> {
    None,
    Header(&'a str),
    Query(&'a str),
    Both { header: &'a str, query: &'a str },
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn header_credential_is_forwarded() {
    let gateway = Gateway::start(start_backend().await, None).await;
    let echoed = gateway
        .call("get_facility", json!({ "facility_id": "equinix-da1" }), Key::Header("abc123"))
        .await;
    assert_eq!(echoed["path"], "/api/v1/facilities/equinix-da1");
    assert_eq!(echoed["api_key"], "abc123");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn query_credential_is_forwarded_and_header_wins() {
    let gateway = Gateway::start(start_backend().await, None).await;

    let echoed = gateway
        .call("get_news", json!({}), Key::Query("q/key=="))
        .await;
    assert_eq!(echoed["api_key"], "q/key==");

    let echoed = gateway
        .call(
            "get_news",
            json!({}),
            Key::Both {
                header: "from-header",
                query: "from-query",
            },
        )
        .await;
    assert_eq!(echoed["api_key"], "from-header");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn anonymous_request_carries_no_credential() {
    let gateway = Gateway::start(start_backend().await, None).await;
    let echoed = gateway.call("get_news", json!({}), Key::None).await;
    assert!(echoed["api_key"].is_null());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn credential_does_not_leak_into_next_request() {
    let gateway = Gateway::start(start_backend().await, None).await;
    assert!(RequestContext::current_credential().is_none());

    // Same client, so the second call reuses the first call's connection.
    let first = gateway.call("get_news", json!({}), Key::Header("k1")).await;
    let second = gateway.call("get_news", json!({}), Key::None).await;

    assert_eq!(first["api_key"], "k1");
    assert!(second["api_key"].is_null());
    assert!(RequestContext::current_credential().is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_requests_see_only_their_own_credential() {
    let gateway = std::sync::Arc::new(Gateway::start(start_backend().await, None).await);

    let mut tasks = Vec::new();
    for i in 0..24 {
        let gateway = gateway.clone();
        tasks.push(tokio::spawn(async move {
            let key = format!("key-{}", i);
            let echoed = if i % 3 == 0 {
                gateway.call("get_news", json!({}), Key::None).await
            } else {
                gateway
                    .call("get_news", json!({}), Key::Header(&key))
                    .await
            };
            (i, key, echoed)
        }));
    }

    for task in tasks {
        let (i, key, echoed) = task.await.unwrap();
        if i % 3 == 0 {
            assert!(echoed["api_key"].is_null(), "request {} leaked a key", i);
        } else {
            assert_eq!(echoed["api_key"], key.as_str());
        }
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn keyed_and_anonymous_requests_in_parallel() {
    let gateway = Gateway::start(start_backend().await, None).await;
    let (keyed, anonymous) = tokio::join!(
        gateway.call("get_market_intel", json!({ "market": "Dallas" }), Key::Header("abc123")),
        gateway.call("get_market_intel", json!({ "market": "Dallas" }), Key::None),
    );
    assert_eq!(keyed["api_key"], "abc123");
    assert_eq!(keyed["path"], "/api/v1/markets/Dallas");
    assert!(anonymous["api_key"].is_null());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn search_limit_is_clamped() {
    let gateway = Gateway::start(start_backend().await, None).await;
    let echoed = gateway
        .call(
            "search_facilities",
            json!({ "query": "Equinix", "state": "", "limit": 150 }),
            Key::None,
        )
        .await;

    assert_eq!(echoed["path"], "/api/v1/facilities");
    assert_eq!(echoed["query"]["limit"], "100");
    assert_eq!(echoed["query"]["query"], "Equinix");
    assert!(echoed["query"].get("state").is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn site_radius_is_sent_in_meters() {
    let gateway = Gateway::start(start_backend().await, None).await;
    let echoed = gateway
        .call(
            "analyze_site",
            json!({ "latitude": 39.5, "longitude": -119.8, "radius_miles": 10 }),
            Key::None,
        )
        .await;

    assert_eq!(echoed["path"], "/api/v1/energy/site-analysis");
    assert_eq!(echoed["query"]["radius"], "16090");
    assert_eq!(echoed["query"]["lat"], "39.5");
    assert!(echoed["query"].get("address").is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn backend_error_status_becomes_error_payload() {
    let gateway = Gateway::start(start_backend().await, None).await;
    let payload = gateway
        .call("get_facility", json!({ "facility_id": "boom" }), Key::None)
        .await;

    let obj = payload.as_object().unwrap();
    assert_eq!(obj.len(), 1);
    let message = obj["error"].as_str().unwrap();
    assert!(message.starts_with("Backend request failed: "));
    assert!(message.contains("500"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn backend_timeout_becomes_error_payload() {
    let gateway = Gateway::start(start_backend().await, None).await;
    let payload = gateway
        .call("get_facility", json!({ "facility_id": "slow" }), Key::None)
        .await;
    assert!(
        payload["error"]
            .as_str()
            .unwrap()
            .starts_with("Backend request failed: ")
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn unreachable_backend_becomes_error_payload() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let dead = listener.local_addr().unwrap();
    drop(listener);

    let gateway = Gateway::start(dead, None).await;
    let payload = gateway.call("get_news", json!({}), Key::None).await;
    assert!(
        payload["error"]
            .as_str()
            .unwrap()
            .starts_with("Backend request failed: ")
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn audit_outage_does_not_change_the_result() {
    let backend = start_backend().await;
    let dir = tempfile::tempdir().unwrap();

    let healthy = Gateway::start(backend, Some(dir.path().join("audit.db"))).await;
    let broken = Gateway::start(
        backend,
        Some(dir.path().join("no-such-dir").join("audit.db")),
    )
    .await;

    let args = json!({ "topic": "AI", "limit": 5 });
    let expected = healthy.call("get_news", args.clone(), Key::Header("k")).await;
    let actual = broken.call("get_news", args, Key::Header("k")).await;
    assert_eq!(expected, actual);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn invocations_are_audited() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("audit.db");
    let gateway = Gateway::start(start_backend().await, Some(db.clone())).await;

    gateway
        .call("get_market_intel", json!({ "market": "Dallas" }), Key::None)
        .await;

    // The write is detached; give it a moment to land.
    let mut rows: Vec<(String, String, String)> = Vec::new();
    for _ in 0..50 {
        if db.exists() {
            let conn = rusqlite::Connection::open(&db).unwrap();
            // The table may not exist yet if the writer is mid-flight.
            if let Ok(mut stmt) = conn.prepare("SELECT tool, params, source FROM mcp_requests") {
                rows = stmt
                    .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))
                    .unwrap()
                    .collect::<Result<_, _>>()
                    .unwrap();
            }
            if !rows.is_empty() {
                break;
            }
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].0, "get_market_intel");
    assert_eq!(rows[0].1, r#"{"market":"Dallas","metric":"overview"}"#);
    assert_eq!(rows[0].2, "mcp");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn dot_segment_ids_never_reach_another_endpoint() {
    let gateway = Gateway::start(start_backend().await, None).await;

    for (tool, arguments) in [
        ("get_market_intel", json!({ "market": ".." })),
        ("get_market_intel", json!({ "market": "." })),
        ("get_facility", json!({ "facility_id": ".." })),
    ] {
        let body = gateway.call_raw(tool, arguments.clone()).await;
        assert_eq!(body["error"]["code"], -32602, "{} {} -> {}", tool, arguments, body);
        assert!(body.get("result").is_none());
    }

    let echoed = gateway
        .call("get_facility", json!({ "facility_id": "a..b" }), Key::None)
        .await;
    assert_eq!(echoed["path"], "/api/v1/facilities/a..b");
}

//! Shared helpers for `geekbot-infra` integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use geekbot_infra::{ClientConfig, GeekbotClient, RetrySettings};
use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wiremock::MockServer;

pub const TEST_KEY: &str = "api_test_key";

/// Millisecond backoff so retry tests stay fast.
pub fn fast_retry() -> RetrySettings {
    RetrySettings { max_attempts: 3, initial_backoff_ms: 1, max_backoff_ms: 10 }
}

pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::new(TEST_KEY).with_base_url(server.uri()).with_retry(fast_retry())
}

pub fn client_for(server: &MockServer) -> GeekbotClient {
    GeekbotClient::from_config(config_for(server)).expect("client should build")
}

/// Bare TCP server that answers every connection with `reply` and hangs up.
///
/// An empty `reply` drops the connection without reading the request.
/// Returns the base URL and a counter of accepted connections.
pub async fn spawn_raw_server(reply: &'static [u8]) -> (String, Arc<AtomicU32>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind raw server");
    let addr = listener.local_addr().expect("raw server address");
    let accepted = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&accepted);

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            counter.fetch_add(1, Ordering::SeqCst);
            if reply.is_empty() {
                drop(socket);
                continue;
            }
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let _ = socket.write_all(reply).await;
            let _ = socket.shutdown().await;
        }
    });

    (format!("http://{addr}"), accepted)
}

pub fn raw_client(base_url: &str) -> GeekbotClient {
    let config = ClientConfig::new(TEST_KEY).with_base_url(base_url).with_retry(fast_retry());
    GeekbotClient::from_config(config).expect("client should build")
}

pub fn user_json(id: &str, email: &str) -> Value {
    json!({
        "id": id,
        "username": id.to_lowercase(),
        "realname": format!("User {id}"),
        "profile_img": "https://example.com/avatar.png",
        "role": "member",
        "email": email,
        "deleted": false
    })
}

pub fn standup_json(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "channel": "#standup",
        "time": "10:00:00",
        "timezone": "Europe/Athens",
        "days": ["Mon", "Tue", "Wed", "Thu", "Fri"],
        "questions": [{
            "id": 11,
            "color": "EEEEEE",
            "text": "What did you do yesterday?",
            "schedule": null,
            "answer_type": "text",
            "answer_choices": [],
            "hasAnswers": true,
            "is_random": false,
            "random_texts": [],
            "prefilled_by": null,
            "text_id": 5,
            "preconditions": [],
            "label": "yesterday"
        }],
        "users": [user_json("U100", "alice@example.com")],
        "wait_time": 30,
        "personalised": false,
        "sync_channel_members": true
    })
}

pub fn report_json(id: u64, standup_id: u64, timestamp: i64) -> Value {
    json!({
        "id": id,
        "slack_ts": "1704067200.000100",
        "standup_id": standup_id,
        "timestamp": timestamp,
        "channel": "#standup",
        "member": {
            "id": "U100",
            "role": "member",
            "username": "alice",
            "realname": "Alice",
            "profile_img": "https://example.com/avatar.png"
        },
        "questions": [{
            "id": 900 + id,
            "question": "What did you do yesterday?",
            "question_id": 11,
            "color": "EEEEEE",
            "answer": "Reviewed PRs",
            "images": [],
            "html_formatted": false
        }]
    })
}

pub fn team_json() -> Value {
    json!({
        "id": 1,
        "name": "Acme",
        "users": [
            user_json("U100", "alice@example.com"),
            user_json("U200", "bob@example.com")
        ]
    })
}

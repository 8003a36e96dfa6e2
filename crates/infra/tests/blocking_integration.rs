//! The blocking facade drives the async client on its own runtime.

mod support;

use std::time::{Duration, Instant};

use geekbot_infra::BlockingGeekbotClient;
use serde_json::json;
use support::{config_for, standup_json, team_json};
use tokio::runtime::Runtime;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mock server living on a runtime separate from the facade's.
fn start_server(runtime: &Runtime) -> MockServer {
    runtime.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/standups"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([standup_json(1, "Daily"), standup_json(2, "Retro")])),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/teams"))
            .respond_with(ResponseTemplate::new(200).set_body_json(team_json()))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/standups/1/start"))
            .respond_with(ResponseTemplate::new(200).set_body_string("\"ok\""))
            .mount(&server)
            .await;
        server
    })
}

#[test]
fn endpoint_and_helper_calls_complete_synchronously() {
    let runtime = Runtime::new().expect("server runtime");
    let server = start_server(&runtime);

    let client = BlockingGeekbotClient::from_config(config_for(&server)).expect("client");

    let standups = client.list_standups().expect("list standups");
    assert_eq!(standups.len(), 2);

    let retro = client.find_standup_by_name("retro").expect("lookup");
    assert_eq!(retro.map(|s| s.id), Some(2));

    let alice = client.find_user_by_email("ALICE@example.com").expect("lookup");
    assert!(alice.is_some());

    let mine = client.get_user_standups("U100").expect("user standups");
    assert_eq!(mine.len(), 2);

    let reply = client.start_standup(1, &Default::default()).expect("start");
    assert_eq!(reply, "ok");

    client.close();
}

#[test]
fn close_after_calls_shuts_the_runtime_down() {
    let runtime = Runtime::new().expect("server runtime");
    let server = start_server(&runtime);

    let client = BlockingGeekbotClient::from_config(config_for(&server)).expect("client");
    client.get_team().expect("team");

    let started = Instant::now();
    client.close();
    assert!(started.elapsed() < Duration::from_secs(2));

    // A fresh facade gets its own runtime and still reaches the server.
    let again = BlockingGeekbotClient::from_config(config_for(&server)).expect("client");
    assert_eq!(again.list_standups().expect("list standups").len(), 2);
    again.close();
}

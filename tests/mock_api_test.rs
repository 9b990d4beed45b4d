//! Mock API tests for the TgService client.
//!
//! These tests use wiremock to simulate gateway responses and assert the
//! request/response/error-translation contract of the dispatcher: URL and
//! query construction, JSON bodies, authentication headers, the no-content
//! marker, and failure records.

use reqwest::Method;
use serde_json::json;
use tgservice::prelude::*;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// `login:secret` in Basic form.
const BASIC_AUTH: &str = "Basic bG9naW46c2VjcmV0";

fn client_for(server: &MockServer) -> TgServiceClient {
    TgServiceClient::builder()
        .login("login")
        .password("secret")
        .base_url(server.uri())
        .build()
        .unwrap()
}

#[tokio::test]
async fn get_bots_returns_payload_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bots"))
        .and(header("authorization", BASIC_AUTH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1, "name": "x"})))
        .mount(&server)
        .await;

    let payload = client_for(&server).get_bots(None).await.unwrap();
    assert_eq!(payload, Some(json!({"id": 1, "name": "x"})));
}

#[tokio::test]
async fn get_by_id_hits_the_item_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/templates/7"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": 7, "name": "welcome"})),
        )
        .mount(&server)
        .await;

    let payload = client_for(&server).get_templates(Some(7)).await.unwrap();
    assert_eq!(payload, Some(json!({"id": 7, "name": "welcome"})));
}

#[tokio::test]
async fn get_sends_json_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/channels"))
        .and(header("accept", "application/json"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let payload = client_for(&server).get_channels(None).await.unwrap();
    assert_eq!(payload, Some(json!([])));
}

#[tokio::test]
async fn get_params_become_an_encoded_query_string() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/templates"))
        .and(query_param("page", "2"))
        .and(query_param("name", "hello world"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let mut params = Params::new();
    params.insert("page".to_string(), json!(2));
    params.insert("name".to_string(), json!("hello world"));
    let payload = client_for(&server).get("templates", &params).await.unwrap();
    assert_eq!(payload, Some(json!([])));
}

#[tokio::test]
async fn create_bot_posts_exact_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bots"))
        .and(header("authorization", BASIC_AUTH))
        .and(body_json(json!({"name": "alice", "token": "t0k"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 5, "name": "alice"})))
        .mount(&server)
        .await;

    let payload = client_for(&server).create_bot("alice", "t0k").await.unwrap();
    assert_eq!(payload, Some(json!({"id": 5, "name": "alice"})));
}

#[tokio::test]
async fn create_hook_uses_the_id_bot_wire_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/hooks"))
        .and(body_json(json!({
            "name": "deploys",
            "url": "https://example.test/hook",
            "id_bot": 3
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 11})))
        .mount(&server)
        .await;

    let payload = client_for(&server)
        .create_hook("deploys", "https://example.test/hook", 3)
        .await
        .unwrap();
    assert_eq!(payload, Some(json!({"id": 11})));
}

#[tokio::test]
async fn edit_uses_patch_with_exact_body() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/channels/3"))
        .and(body_json(json!({"name": "renamed"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 3, "name": "renamed"})))
        .mount(&server)
        .await;

    let mut fields = Params::new();
    fields.insert("name".to_string(), json!("renamed"));
    let payload = client_for(&server).edit_channels(3, fields).await.unwrap();
    assert_eq!(payload, Some(json!({"id": 3, "name": "renamed"})));
}

#[tokio::test]
async fn delete_uses_its_own_verb() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/hooks/9"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let payload = client_for(&server)
        .delete("hooks/9", &Params::new())
        .await
        .unwrap();
    assert_eq!(payload, None);
}

#[tokio::test]
async fn empty_success_body_is_the_no_content_marker() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bots"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let payload = client_for(&server).get_bots(None).await.unwrap();
    assert_eq!(payload, None);
}

#[tokio::test]
async fn non_json_success_body_is_the_no_content_marker() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bots"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .mount(&server)
        .await;

    let payload = client_for(&server).get_bots(None).await.unwrap();
    assert_eq!(payload, None);
}

#[tokio::test]
async fn status_404_raises_a_populated_failure_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bots/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "not found"})))
        .mount(&server)
        .await;

    let err = client_for(&server).get_bots(Some(99)).await.unwrap_err();
    assert_eq!(err.status_code(), Some(404));
    assert!(err.is_client_error());
    match err {
        ApiError::Api(failure) => {
            assert_eq!(failure.status, Some(404));
            assert_eq!(failure.method, Method::GET);
            assert!(failure.url.ends_with("/bots/99"));
            assert_eq!(failure.body, Some(json!({"error": "not found"})));
            assert!(failure.transport.is_none());
            assert!(!failure.headers.is_empty());
        }
        other => panic!("unexpected error variant: {other:?}"),
    }
}

#[tokio::test]
async fn server_errors_are_raised_not_swallowed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/send/message"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .send_message(SendMessage::new().bot_id(5).text("hi"))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(502));
    assert!(err.is_server_error());
}

#[tokio::test]
async fn send_message_body_carries_nulls_for_unset_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/send/message"))
        .and(body_json(json!({
            "bot_id": 5,
            "channel_id": null,
            "template_id": null,
            "text": "hi",
            "tags": null
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .mount(&server)
        .await;

    let payload = client_for(&server)
        .send_message(SendMessage::new().bot_id(5).text("hi"))
        .await
        .unwrap();
    assert_eq!(payload, Some(json!({"status": "ok"})));
}

#[tokio::test]
async fn failure_url_includes_the_query_string() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/hooks"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let mut params = Params::new();
    params.insert("page".to_string(), json!(3));
    let err = client_for(&server).get("hooks", &params).await.unwrap_err();
    match err {
        ApiError::Api(failure) => assert!(failure.url.contains("page=3")),
        other => panic!("unexpected error variant: {other:?}"),
    }
}

#[tokio::test]
async fn connection_failure_surfaces_as_transport_error() {
    // Nothing listens on this port; the connect fails before any HTTP status
    // exists.
    let client = TgServiceClient::builder()
        .login("login")
        .password("secret")
        .base_url("http://127.0.0.1:9")
        .connect_timeout(std::time::Duration::from_millis(500))
        .timeout(std::time::Duration::from_secs(2))
        .build()
        .unwrap();

    let err = client.get_bots(None).await.unwrap_err();
    assert!(err.is_transport_error());
    assert_eq!(err.status_code(), None);
    match err {
        ApiError::Api(failure) => {
            assert!(failure.transport.is_some());
            assert!(failure.url.ends_with("/bots"));
        }
        other => panic!("unexpected error variant: {other:?}"),
    }
}

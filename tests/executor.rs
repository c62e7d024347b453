use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::Client;
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use courier::http::executor::execute;
use courier::http::timing::TimingInterceptor;
use courier::state::request_state::{HttpMethod, RequestDescriptor};
use courier::state::response_state::Outcome;

fn descriptor(url: String, method: HttpMethod) -> RequestDescriptor {
    RequestDescriptor {
        url,
        method,
        params: BTreeMap::new(),
        headers: BTreeMap::new(),
        body: None,
    }
}

#[tokio::test]
async fn get_with_params_decodes_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "hits": [1, 2] })))
        .expect(1)
        .mount(&server)
        .await;

    let mut desc = descriptor(format!("{}/search", server.uri()), HttpMethod::Get);
    desc.params.insert("q".into(), "abc".into());

    let result = execute(&Client::new(), &TimingInterceptor, Uuid::new_v4(), &desc).await;

    assert_eq!(result.status, Some(200));
    assert_eq!(result.status_text, "OK");
    assert_eq!(result.outcome, Outcome::Success);
    assert_eq!(result.data, Some(json!({ "hits": [1, 2] })));
    assert!(result.elapsed_ms.is_some());
    assert!(
        result
            .headers
            .iter()
            .any(|(k, v)| k == "content-type" && v == "application/json")
    );

    let received = server.received_requests().await.unwrap();
    assert!(received[0].body.is_empty());
}

#[tokio::test]
async fn post_sends_headers_and_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/items"))
        .and(header("accept", "application/json"))
        .and(body_json(json!({ "name": "widget" })))
        .respond_with(ResponseTemplate::new(201).set_body_string("created"))
        .expect(1)
        .mount(&server)
        .await;

    let mut desc = descriptor(format!("{}/items", server.uri()), HttpMethod::Post);
    desc.headers.insert("Accept".into(), "application/json".into());
    desc.body = Some(json!({ "name": "widget" }));

    let result = execute(&Client::new(), &TimingInterceptor, Uuid::new_v4(), &desc).await;

    assert_eq!(result.status, Some(201));
    assert_eq!(result.data, Some(json!("created")));
}

#[tokio::test]
async fn non_2xx_is_a_renderable_result() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "error": "missing" })))
        .mount(&server)
        .await;

    let desc = descriptor(format!("{}/gone", server.uri()), HttpMethod::Delete);
    let result = execute(&Client::new(), &TimingInterceptor, Uuid::new_v4(), &desc).await;

    assert_eq!(result.status, Some(404));
    assert_eq!(result.outcome, Outcome::HttpError);
    assert_eq!(result.data, Some(json!({ "error": "missing" })));
}

#[tokio::test]
async fn connection_failure_has_no_response_fields() {
    // Nothing listens on port 1.
    let desc = descriptor("http://127.0.0.1:1/".into(), HttpMethod::Get);
    let result = execute(&Client::new(), &TimingInterceptor, Uuid::new_v4(), &desc).await;

    assert_eq!(result.status, None);
    assert!(result.headers.is_empty());
    assert_eq!(result.data, None);
    assert!(result.elapsed_ms.is_some());
    assert!(matches!(result.outcome, Outcome::TransportError(_)));
}

#[tokio::test]
async fn empty_url_is_left_to_the_transport() {
    let desc = descriptor(String::new(), HttpMethod::Get);
    let result = execute(&Client::new(), &TimingInterceptor, Uuid::new_v4(), &desc).await;
    assert!(matches!(result.outcome, Outcome::TransportError(_)));
}

#[tokio::test]
async fn timeout_is_a_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&server)
        .await;

    let client = Client::builder()
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();
    let desc = descriptor(server.uri(), HttpMethod::Get);
    let result = execute(&client, &TimingInterceptor, Uuid::new_v4(), &desc).await;

    assert_eq!(result.outcome, Outcome::TransportError("Request timed out".into()));
}

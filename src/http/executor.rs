use std::sync::Arc;

use chrono::Utc;
use reqwest::{Client, Response};
use tokio::sync::mpsc::UnboundedSender;

use crate::event::{Event, RequestId};
use crate::state::request_state::RequestDescriptor;
use crate::state::response_state::{Outcome, ResponseResult};
use super::builder::build_request;
use super::timing::Interceptor;

/// Run `desc` on the tokio runtime and report back through `tx`.
pub fn spawn(
    client: Client,
    interceptor: Arc<dyn Interceptor>,
    id: RequestId,
    desc: RequestDescriptor,
    tx: UnboundedSender<Event>,
) {
    tokio::spawn(async move {
        let result = execute(&client, interceptor.as_ref(), id, &desc).await;
        let _ = tx.send(Event::Response { id, result });
    });
}

/// Send one request. Never fails: transport errors and non-2xx statuses are
/// folded into the returned [`ResponseResult`].
pub async fn execute(
    client: &Client,
    interceptor: &dyn Interceptor,
    id: RequestId,
    desc: &RequestDescriptor,
) -> ResponseResult {
    log::info!("request {} {} {}", id, desc.method.as_str(), desc.url);

    let timing = interceptor.on_request(id);
    let sent = match build_request(client, desc).build() {
        Ok(request) => client.execute(request).await,
        Err(e) => Err(e),
    };

    let response = match sent {
        Ok(response) => response,
        Err(e) => {
            let elapsed = interceptor.on_complete(timing);
            let message = describe_error(&e);
            log::warn!("request {} failed after {}ms: {}", id, elapsed, message);
            return ResponseResult::transport_error(message, elapsed);
        }
    };

    let mut result = read_response(response).await;
    let elapsed = interceptor.on_complete(timing);
    result.elapsed_ms = Some(elapsed);
    log::info!(
        "request {} completed: {} in {}ms",
        id,
        result.status.map(|s| s.to_string()).unwrap_or_default(),
        elapsed
    );
    result
}

async fn read_response(response: Response) -> ResponseResult {
    let status = response.status();
    let headers: Vec<(String, String)> = response
        .headers()
        .iter()
        .map(|(k, v)| (k.to_string(), String::from_utf8_lossy(v.as_bytes()).into_owned()))
        .collect();

    let mut result = ResponseResult {
        status: Some(status.as_u16()),
        status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
        headers,
        outcome: if status.is_success() { Outcome::Success } else { Outcome::HttpError },
        received_at: Utc::now(),
        ..Default::default()
    };

    match response.bytes().await {
        Ok(bytes) => result.data = decode_data(&bytes),
        Err(e) => result.outcome = Outcome::TransportError(describe_error(&e)),
    }
    result
}

/// JSON when the payload parses as JSON, otherwise the raw text as a JSON
/// string. An empty payload is the empty string.
pub fn decode_data(bytes: &[u8]) -> Option<serde_json::Value> {
    if bytes.is_empty() {
        return Some(serde_json::Value::String(String::new()));
    }
    match serde_json::from_slice::<serde_json::Value>(bytes) {
        Ok(json) => Some(json),
        Err(_) => Some(serde_json::Value::String(
            String::from_utf8_lossy(bytes).into_owned(),
        )),
    }
}

fn describe_error(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        return "Request timed out".to_string();
    }
    if err.is_connect() {
        if let Some(host) = err.url().and_then(|u| u.host_str()) {
            return format!("Connection failed: {}", host);
        }
        return "Connection failed".to_string();
    }
    if err.is_builder() {
        return format!("Invalid request: {}", err);
    }
    if err.is_redirect() {
        return "Too many redirects".to_string();
    }
    if err.is_decode() || err.is_body() {
        return "Failed to read response body".to_string();
    }
    format!("Request failed: {}", err)
}

use chrono::Local;
use humansize::{DECIMAL, format_size};
use serde_json::{Map, Value};

use crate::state::response_state::{Outcome, ResponseResult};

pub const PLACEHOLDER: &str = "—";

/// Display-ready text for the response panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseView {
    /// Numeric code as text, or the placeholder.
    pub status: String,
    pub status_code: Option<u16>,
    /// Reason phrase, empty when unknown.
    pub reason: String,
    pub elapsed: String,
    pub size: String,
    pub size_bytes: usize,
    pub headers: Vec<(String, String)>,
    pub body: String,
    pub error: Option<String>,
    /// Local wall-clock time the result was produced, `HH:MM:SS`.
    pub received: String,
}

impl ResponseView {
    pub fn render(result: &ResponseResult) -> Self {
        let status = result
            .status
            .map(|code| code.to_string())
            .unwrap_or_else(|| PLACEHOLDER.to_string());
        let elapsed = result
            .elapsed_ms
            .map(|ms| format!("{} ms", ms))
            .unwrap_or_else(|| PLACEHOLDER.to_string());
        let size_bytes = estimate_size(result);
        let error = match &result.outcome {
            Outcome::TransportError(msg) => Some(msg.clone()),
            Outcome::Success | Outcome::HttpError => None,
        };

        Self {
            status,
            status_code: result.status,
            reason: result.status_text.clone(),
            elapsed,
            size: format_size(size_bytes as u64, DECIMAL),
            size_bytes,
            headers: result.headers.clone(),
            body: body_text(result.data.as_ref()),
            error,
            received: result
                .received_at
                .with_timezone(&Local)
                .format("%H:%M:%S")
                .to_string(),
        }
    }
}

/// Serialized length of the body plus serialized length of the headers
/// object. Missing data counts as zero, and so do the headers when no
/// response came back. An empty header set on a real response is `{}`.
pub fn estimate_size(result: &ResponseResult) -> usize {
    let data_len = result
        .data
        .as_ref()
        .and_then(|d| serde_json::to_string(d).ok())
        .map(|s| s.len())
        .unwrap_or(0);
    let headers_len = if result.status.is_none() {
        0
    } else {
        serde_json::to_string(&headers_object(&result.headers))
            .map(|s| s.len())
            .unwrap_or(0)
    };
    data_len + headers_len
}

/// Headers as a JSON object. Repeated names are joined with `", "`.
pub fn headers_object(headers: &[(String, String)]) -> Map<String, Value> {
    let mut map = Map::new();
    for (key, value) in headers {
        match map.get_mut(key) {
            Some(Value::String(existing)) => {
                existing.push_str(", ");
                existing.push_str(value);
            }
            _ => {
                map.insert(key.clone(), Value::String(value.clone()));
            }
        }
    }
    map
}

fn body_text(data: Option<&Value>) -> String {
    match data {
        None => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => serde_json::to_string_pretty(other).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use super::*;

    fn header(k: &str, v: &str) -> (String, String) {
        (k.to_string(), v.to_string())
    }

    #[test]
    fn test_size_is_headers_plus_body() {
        // {"content-type":"application/json","x-ab":"bcdef"}
        let headers = vec![header("content-type", "application/json"), header("x-ab", "bcdef")];
        assert_eq!(serde_json::to_string(&headers_object(&headers)).unwrap().len(), 50);

        // {"k":"aaa..."}
        let data = json!({ "k": "a".repeat(142) });
        assert_eq!(serde_json::to_string(&data).unwrap().len(), 150);

        let result = ResponseResult {
            status: Some(200),
            status_text: "OK".into(),
            elapsed_ms: Some(12),
            headers,
            data: Some(data),
            ..Default::default()
        };
        let view = ResponseView::render(&result);
        assert_eq!(view.size_bytes, 200);
        assert_eq!(view.size, "200 B");
        assert_eq!(view.status, "200");
        assert_eq!(view.reason, "OK");
        assert_eq!(view.elapsed, "12 ms");
    }

    #[test]
    fn test_render_is_idempotent() {
        let result = ResponseResult {
            status: Some(404),
            status_text: "Not Found".into(),
            elapsed_ms: Some(3),
            headers: vec![header("server", "x")],
            data: Some(json!({ "error": "missing" })),
            outcome: Outcome::HttpError,
            ..Default::default()
        };
        assert_eq!(ResponseView::render(&result), ResponseView::render(&result));
    }

    #[test]
    fn test_transport_failure_renders_placeholders() {
        let result = ResponseResult::transport_error("Connection failed", 5);
        let view = ResponseView::render(&result);
        assert_eq!(view.status, PLACEHOLDER);
        assert_eq!(view.elapsed, "5 ms");
        assert_eq!(view.size, "0 B");
        assert!(view.headers.is_empty());
        assert!(view.body.is_empty());
        assert_eq!(view.error.as_deref(), Some("Connection failed"));
    }

    #[test]
    fn test_nothing_at_all() {
        let view = ResponseView::render(&ResponseResult::default());
        assert_eq!(view.status, PLACEHOLDER);
        assert_eq!(view.elapsed, PLACEHOLDER);
        assert_eq!(view.size_bytes, 0);
    }

    #[test]
    fn test_headers_keep_transport_order() {
        let headers = vec![header("z", "1"), header("a", "2"), header("z", "3")];
        let result = ResponseResult { headers: headers.clone(), ..Default::default() };
        assert_eq!(ResponseView::render(&result).headers, headers);
        assert_eq!(headers_object(&headers)["z"], json!("1, 3"));
    }

    #[test]
    fn test_kilobyte_formatting() {
        let result = ResponseResult {
            data: Some(json!("x".repeat(1198))),
            ..Default::default()
        };
        // 1198 chars + 2 quotes
        assert_eq!(ResponseView::render(&result).size, "1.20 kB");
    }

    #[test]
    fn test_empty_body_and_headers_still_count() {
        // "" plus {}
        let result = ResponseResult {
            status: Some(204),
            status_text: "No Content".into(),
            elapsed_ms: Some(1),
            data: Some(json!("")),
            ..Default::default()
        };
        let view = ResponseView::render(&result);
        assert_eq!(view.size_bytes, 4);
        assert_eq!(view.size, "4 B");
        assert!(view.body.is_empty());
    }

    #[test]
    fn test_status_code_and_reason_are_separate() {
        let result = ResponseResult {
            status: Some(404),
            status_text: "Not Found".into(),
            ..Default::default()
        };
        let view = ResponseView::render(&result);
        assert_eq!(view.status, "404");
        assert_eq!(view.reason, "Not Found");
    }

    #[test]
    fn test_received_time_is_local_clock() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        let result = ResponseResult { received_at: at, ..Default::default() };
        let expected = at.with_timezone(&Local).format("%H:%M:%S").to_string();
        assert_eq!(ResponseView::render(&result).received, expected);
        assert_eq!(expected.len(), 8);
    }

    #[test]
    fn test_body_text_pretty_prints_json() {
        let result = ResponseResult { data: Some(json!({ "a": 1 })), ..Default::default() };
        assert_eq!(ResponseView::render(&result).body, "{\n  \"a\": 1\n}");
    }
}

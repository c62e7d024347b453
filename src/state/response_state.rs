use chrono::{DateTime, Utc};

/// How the exchange ended. Every variant is rendered the same way.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Success,
    /// The server answered with a non-2xx status.
    HttpError,
    /// No response at all: connect failure, timeout, bad URL.
    TransportError(String),
}

/// Normalized result of one request. Transport failures fill in whatever
/// they have and leave the rest empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseResult {
    pub status: Option<u16>,
    pub status_text: String,
    pub elapsed_ms: Option<u64>,
    /// In the order the transport handed them over.
    pub headers: Vec<(String, String)>,
    pub data: Option<serde_json::Value>,
    pub outcome: Outcome,
    pub received_at: DateTime<Utc>,
}

impl Default for ResponseResult {
    fn default() -> Self {
        Self {
            status: None,
            status_text: String::new(),
            elapsed_ms: None,
            headers: Vec::new(),
            data: None,
            outcome: Outcome::Success,
            received_at: Utc::now(),
        }
    }
}

impl ResponseResult {
    pub fn transport_error(message: impl Into<String>, elapsed_ms: u64) -> Self {
        Self {
            elapsed_ms: Some(elapsed_ms),
            outcome: Outcome::TransportError(message.into()),
            ..Default::default()
        }
    }
}

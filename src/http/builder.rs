use reqwest::{Client, Method, RequestBuilder};

use crate::state::request_state::{HttpMethod, RequestDescriptor};

/// Normalize a bare URL into a fully-qualified one.
/// - `:3000/path` → `http://localhost:3000/path`
/// - `localhost/...` → `http://localhost/...`
/// - anything else without a scheme → `https://...`
///
/// Empty input stays empty and is left for the transport to reject.
pub fn normalize_url(url: &str) -> String {
    let url = url.trim();
    if url.is_empty() {
        return url.to_string();
    }
    if url.starts_with(':') {
        return format!("http://localhost{}", url);
    }
    if url.starts_with("http://") || url.starts_with("https://") {
        return url.to_string();
    }
    if url.starts_with("localhost") || url.starts_with("127.0.0.1") {
        return format!("http://{}", url);
    }
    format!("https://{}", url)
}

pub fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
        HttpMethod::Head => Method::HEAD,
        HttpMethod::Options => Method::OPTIONS,
    }
}

/// Errors (bad URL, bad header name) surface when the builder is built.
pub fn build_request(client: &Client, desc: &RequestDescriptor) -> RequestBuilder {
    let url = normalize_url(&desc.url);
    let mut builder = client.request(to_reqwest_method(desc.method), &url);

    if !desc.params.is_empty() {
        builder = builder.query(&desc.params);
    }

    for (key, value) in &desc.headers {
        builder = builder.header(key, value);
    }

    if let Some(body) = &desc.body {
        builder = builder.json(body);
    }

    builder
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn descriptor(url: &str) -> RequestDescriptor {
        RequestDescriptor {
            url: url.to_string(),
            method: HttpMethod::Get,
            params: BTreeMap::new(),
            headers: BTreeMap::new(),
            body: None,
        }
    }

    #[test]
    fn test_normalize_url() {
        assert_eq!(normalize_url(":3000/x"), "http://localhost:3000/x");
        assert_eq!(normalize_url("localhost:8080"), "http://localhost:8080");
        assert_eq!(normalize_url("127.0.0.1/a"), "http://127.0.0.1/a");
        assert_eq!(normalize_url("example.com"), "https://example.com");
        assert_eq!(normalize_url(" http://a.b "), "http://a.b");
        assert_eq!(normalize_url(""), "");
    }

    #[test]
    fn test_params_headers_and_body_are_applied() {
        let client = Client::new();
        let mut desc = descriptor("https://api.example.com/search");
        desc.method = HttpMethod::Post;
        desc.params.insert("q".into(), "abc def".into());
        desc.headers.insert("Accept".into(), "application/json".into());
        desc.body = Some(serde_json::json!({ "a": 1 }));

        let request = build_request(&client, &desc).build().unwrap();
        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.url().query(), Some("q=abc+def"));
        assert_eq!(request.headers()["accept"], "application/json");
        assert_eq!(request.headers()["content-type"], "application/json");
        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(body, br#"{"a":1}"#);
    }

    #[test]
    fn test_no_body_sends_nothing() {
        let client = Client::new();
        let request = build_request(&client, &descriptor("https://example.com"))
            .build()
            .unwrap();
        assert!(request.body().is_none());
        assert!(request.url().query().is_none());
    }

    #[test]
    fn test_empty_url_fails_at_build_time() {
        let client = Client::new();
        assert!(build_request(&client, &descriptor("")).build().is_err());
    }
}

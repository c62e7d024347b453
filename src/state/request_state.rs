use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::AppError;
use super::kv_list::KeyValueList;
use super::text_buffer::TextBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        }
    }

    pub fn next(&self) -> HttpMethod {
        match self {
            HttpMethod::Get => HttpMethod::Post,
            HttpMethod::Post => HttpMethod::Put,
            HttpMethod::Put => HttpMethod::Patch,
            HttpMethod::Patch => HttpMethod::Delete,
            HttpMethod::Delete => HttpMethod::Head,
            HttpMethod::Head => HttpMethod::Options,
            HttpMethod::Options => HttpMethod::Get,
        }
    }

    pub fn prev(&self) -> HttpMethod {
        match self {
            HttpMethod::Get => HttpMethod::Options,
            HttpMethod::Post => HttpMethod::Get,
            HttpMethod::Put => HttpMethod::Post,
            HttpMethod::Patch => HttpMethod::Put,
            HttpMethod::Delete => HttpMethod::Patch,
            HttpMethod::Head => HttpMethod::Delete,
            HttpMethod::Options => HttpMethod::Head,
        }
    }
}

impl FromStr for HttpMethod {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "PATCH" => Ok(HttpMethod::Patch),
            "DELETE" => Ok(HttpMethod::Delete),
            "HEAD" => Ok(HttpMethod::Head),
            "OPTIONS" => Ok(HttpMethod::Options),
            _ => Err(AppError::InvalidMethod(s.to_string())),
        }
    }
}

/// Everything the user is editing in the request form.
#[derive(Debug, Clone, Default)]
pub struct RequestForm {
    pub method: HttpMethod,
    pub url: String,
    pub url_cursor: usize,
    pub params: KeyValueList,
    pub headers: KeyValueList,
    pub body: TextBuffer,
}

impl RequestForm {
    /// Snapshot the form into a dispatchable request. Fails only when the
    /// body text is not valid JSON.
    pub fn to_descriptor(&self) -> Result<RequestDescriptor, AppError> {
        Ok(RequestDescriptor {
            url: self.url.clone(),
            method: self.method,
            params: self.params.serialize(),
            headers: self.headers.serialize(),
            body: parse_body(self.body.text())?,
        })
    }
}

/// A request built fresh on every submit.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub url: String,
    pub method: HttpMethod,
    pub params: BTreeMap<String, String>,
    pub headers: BTreeMap<String, String>,
    pub body: Option<serde_json::Value>,
}

/// Blank text and a literal `null` mean "no body"; anything else must be JSON.
pub fn parse_body(text: &str) -> Result<Option<serde_json::Value>, AppError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    let value: serde_json::Value = serde_json::from_str(text).map_err(AppError::MalformedBody)?;
    Ok((!value.is_null()).then_some(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parse_is_case_insensitive() {
        assert_eq!("get".parse::<HttpMethod>().unwrap(), HttpMethod::Get);
        assert_eq!("Patch".parse::<HttpMethod>().unwrap(), HttpMethod::Patch);
        assert!(matches!(
            "TRACE".parse::<HttpMethod>(),
            Err(AppError::InvalidMethod(_))
        ));
    }

    #[test]
    fn test_method_cycle_round_trips() {
        let mut m = HttpMethod::Get;
        for _ in 0..7 {
            m = m.next();
        }
        assert_eq!(m, HttpMethod::Get);
        assert_eq!(HttpMethod::Get.prev(), HttpMethod::Options);
    }

    #[test]
    fn test_parse_body_empty_is_none() {
        assert_eq!(parse_body("").unwrap(), None);
        assert_eq!(parse_body("  \n").unwrap(), None);
    }

    #[test]
    fn test_parse_body_malformed() {
        assert!(matches!(parse_body("{invalid"), Err(AppError::MalformedBody(_))));
    }

    #[test]
    fn test_parse_body_null_literal() {
        assert_eq!(parse_body("null").unwrap(), None);
        assert_eq!(parse_body("[1]").unwrap(), Some(serde_json::json!([1])));
    }

    #[test]
    fn test_descriptor_from_form() {
        let mut form = RequestForm {
            url: "https://api.example.com/search".into(),
            ..Default::default()
        };
        let id = form.params.rows()[0].id;
        let row = form.params.row_mut(id).unwrap();
        row.key = "q".into();
        row.value = "abc".into();

        let desc = form.to_descriptor().unwrap();
        assert_eq!(desc.method, HttpMethod::Get);
        assert_eq!(desc.params.get("q").map(String::as_str), Some("abc"));
        assert!(desc.headers.is_empty());
        assert_eq!(desc.body, None);
    }
}

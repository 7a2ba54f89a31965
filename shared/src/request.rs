use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::ApiConfig;
use crate::constants::{CONTENT_TYPE_HEADER, JSON_CONTENT_TYPE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
        }
    }
}

impl TryFrom<String> for Method {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        [
            Method::Get,
            Method::Post,
            Method::Put,
            Method::Patch,
            Method::Delete,
            Method::Head,
            Method::Options,
        ]
        .into_iter()
        .find(|method| method.as_str().eq_ignore_ascii_case(&value))
        .ok_or_else(|| format!("unsupported HTTP method `{value}`"))
    }
}

impl From<Method> for String {
    fn from(method: Method) -> Self {
        method.as_str().to_string()
    }
}

/// Caller overrides for a single request. Mirrors the subset of `fetch`
/// init options the gateway understands.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<String>,
    pub headers: BTreeMap<String, String>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post_json<T: Serialize>(payload: &T) -> Result<Self, serde_json::Error> {
        Ok(Self::default()
            .with_method(Method::Post)
            .with_body(serde_json::to_string(payload)?))
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Fully resolved request, ready for a transport.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn build(config: &ApiConfig, path: &str, options: RequestOptions) -> Self {
        let mut headers = vec![(CONTENT_TYPE_HEADER.to_string(), JSON_CONTENT_TYPE.to_string())];
        for (name, value) in options.headers {
            match headers
                .iter_mut()
                .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
            {
                Some(slot) => *slot = (name, value),
                None => headers.push((name, value)),
            }
        }

        Self {
            method: options.method,
            url: config.url_for(path),
            headers,
            body: options.body,
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ApiConfig {
        ApiConfig::new("http://localhost:8000")
    }

    #[test]
    fn test_default_content_type_is_applied() {
        let request = ApiRequest::build(&config(), "/trainings", RequestOptions::get());
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.url, "http://localhost:8000/trainings");
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(request.body, None);
    }

    #[test]
    fn test_caller_header_overrides_content_type() {
        let options = RequestOptions::get()
            .with_header("content-type", "text/plain")
            .with_header("Authorization", "Bearer abc");
        let request = ApiRequest::build(&config(), "/chat", options);
        assert_eq!(request.headers.len(), 2);
        assert_eq!(request.header("Content-Type"), Some("text/plain"));
        assert_eq!(request.header("authorization"), Some("Bearer abc"));
    }

    #[test]
    fn test_post_json_serializes_body() {
        let options = RequestOptions::post_json(&serde_json::json!({"message": "hi"})).unwrap();
        let request = ApiRequest::build(&config(), "/chat", options);
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.body.as_deref(), Some(r#"{"message":"hi"}"#));
    }

    #[test]
    fn test_options_deserialize_from_fetch_style_object() {
        let options: RequestOptions = serde_json::from_str(
            r#"{"method": "post", "body": "{}", "headers": {"X-Session": "42"}}"#,
        )
        .unwrap();
        assert_eq!(options.method, Method::Post);
        assert_eq!(options.body.as_deref(), Some("{}"));
        assert_eq!(options.headers.get("X-Session").map(String::as_str), Some("42"));

        assert!(serde_json::from_str::<RequestOptions>(r#"{"method": "BREW"}"#).is_err());
    }

    #[test]
    fn test_success_range() {
        let response = |status| RawResponse { status, status_text: String::new(), body: String::new() };
        assert!(response(200).is_success());
        assert!(response(204).is_success());
        assert!(!response(304).is_success());
        assert!(!response(500).is_success());
    }
}

use log::error;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::{ApiError, TransportError};
use crate::request::{ApiRequest, RawResponse, RequestOptions};

/// The network primitive the gateway rides on.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError>;
}

/// Issues one JSON request per call against the configured origin.
/// Failures are logged once and handed back; nothing is retried.
#[derive(Debug, Clone)]
pub struct Gateway<T> {
    config: ApiConfig,
    transport: T,
}

impl<T: Transport> Gateway<T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub async fn call(&self, path: &str, options: Option<RequestOptions>) -> Result<Value, ApiError> {
        self.call_as(path, options).await
    }

    pub async fn call_as<R: DeserializeOwned>(
        &self,
        path: &str,
        options: Option<RequestOptions>,
    ) -> Result<R, ApiError> {
        let request = ApiRequest::build(&self.config, path, options.unwrap_or_default());
        let result = self.dispatch(request).await;
        if let Err(err) = &result {
            error!("API call failed: {err}");
        }
        result
    }

    async fn dispatch<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(ApiError::Request {
                status: response.status,
                status_text: response.status_text,
            });
        }
        Ok(serde_json::from_str(&response.body)?)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;
    use serde::Deserialize;
    use serde_json::json;

    use super::*;
    use crate::request::Method;
    use crate::test_support::{capture_logs, logged_errors};

    struct MockTransport {
        reply: RefCell<Option<Result<RawResponse, TransportError>>>,
        sent: RefCell<Vec<ApiRequest>>,
    }

    impl MockTransport {
        fn replying(status: u16, status_text: &str, body: &str) -> Self {
            Self::with(Ok(RawResponse {
                status,
                status_text: status_text.to_string(),
                body: body.to_string(),
            }))
        }

        fn with(reply: Result<RawResponse, TransportError>) -> Self {
            Self {
                reply: RefCell::new(Some(reply)),
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for MockTransport {
        async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
            self.sent.borrow_mut().push(request);
            self.reply
                .borrow_mut()
                .take()
                .unwrap_or_else(|| Err(TransportError::Send("no reply queued".to_string())))
        }
    }

    fn gateway(transport: MockTransport) -> Gateway<MockTransport> {
        Gateway::new(ApiConfig::new("http://localhost:8000"), transport)
    }

    #[test]
    fn test_success_returns_json() {
        capture_logs();
        let gateway = gateway(MockTransport::replying(200, "OK", r#"{"a":1}"#));

        let value = block_on(gateway.call("/x", None)).unwrap();

        assert_eq!(value, json!({"a": 1}));
        assert!(logged_errors().is_empty());
        let sent = gateway.transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].url, "http://localhost:8000/x");
        assert_eq!(sent[0].method, Method::Get);
        assert_eq!(sent[0].header("Content-Type"), Some("application/json"));
    }

    #[test]
    fn test_error_status_is_request_error_logged_once() {
        capture_logs();
        let gateway = gateway(MockTransport::replying(500, "Internal Server Error", "oops"));

        let err = block_on(gateway.call("/x", None)).unwrap_err();

        assert!(matches!(err, ApiError::Request { status: 500, .. }));
        assert_eq!(err.to_string(), "API Error: Internal Server Error");
        assert_eq!(err.status(), Some(500));
        assert_eq!(
            logged_errors(),
            vec!["API call failed: API Error: Internal Server Error".to_string()]
        );
        assert_eq!(gateway.transport.sent.borrow().len(), 1);
    }

    #[test]
    fn test_transport_failure_is_surfaced() {
        capture_logs();
        let gateway = gateway(MockTransport::with(Err(TransportError::Send(
            "connection refused".to_string(),
        ))));

        let err = block_on(gateway.call("/x", None)).unwrap_err();

        assert!(matches!(err, ApiError::Transport(_)));
        assert_eq!(logged_errors().len(), 1);
    }

    #[test]
    fn test_invalid_json_is_decode_error() {
        capture_logs();
        let gateway = gateway(MockTransport::replying(200, "OK", "<html>"));

        let err = block_on(gateway.call("/x", None)).unwrap_err();

        assert!(matches!(err, ApiError::Decode(_)));
        assert_eq!(logged_errors().len(), 1);
    }

    #[test]
    fn test_options_reach_transport() {
        capture_logs();
        let gateway = gateway(MockTransport::replying(201, "Created", r#"{"session_id":"s1"}"#));
        let options = RequestOptions::post_json(&json!({"message": "hello"}))
            .unwrap()
            .with_header("X-Trace", "1");

        block_on(gateway.call("//chat", Some(options))).unwrap();

        let sent = gateway.transport.sent.borrow();
        assert_eq!(sent[0].url, "http://localhost:8000//chat");
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].body.as_deref(), Some(r#"{"message":"hello"}"#));
        assert_eq!(sent[0].header("x-trace"), Some("1"));
    }

    #[test]
    fn test_call_as_decodes_typed_body() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct RootMessage {
            message: String,
        }

        capture_logs();
        let gateway = gateway(MockTransport::replying(200, "OK", r#"{"message":"up"}"#));

        let body: RootMessage = block_on(gateway.call_as("/", None)).unwrap();

        assert_eq!(body, RootMessage { message: "up".to_string() });
    }
}

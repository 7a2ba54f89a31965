use gloo_net::http::{Method as HttpMethod, RequestBuilder};
use shared::{ApiRequest, Gateway, Method, RawResponse, Transport, TransportError};

pub type ApiGateway = Gateway<FetchTransport>;

/// `fetch` through gloo-net. No timeout beyond whatever the browser applies.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FetchTransport;

fn http_method(method: Method) -> HttpMethod {
    match method {
        Method::Get => HttpMethod::GET,
        Method::Post => HttpMethod::POST,
        Method::Put => HttpMethod::PUT,
        Method::Patch => HttpMethod::PATCH,
        Method::Delete => HttpMethod::DELETE,
        Method::Head => HttpMethod::HEAD,
        Method::Options => HttpMethod::OPTIONS,
    }
}

impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        let mut builder = RequestBuilder::new(&request.url).method(http_method(request.method));
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let prepared = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| TransportError::Send(e.to_string()))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| TransportError::Send(e.to_string()))?;

        let status = response.status();
        let status_text = response.status_text();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        Ok(RawResponse { status, status_text, body })
    }
}

pub fn gateway(config: shared::ApiConfig) -> ApiGateway {
    Gateway::new(config, FetchTransport)
}

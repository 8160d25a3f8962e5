//! Blocking HTTP implementation of the invoker

use reqwest::blocking::Client;
use tracing::debug;

use crate::request::{HttpMethod, OutboundRequest};
use crate::{ActionInvoker, InvokerResult, INVOKE_ERROR_PREFIX};

/// Invoker backed by a blocking HTTP client
///
/// The client carries no timeout of its own: the call blocks until the
/// transport resolves, and bounding a stalled call is the host's concern.
pub struct HttpInvoker {
    client: Client,
}

impl HttpInvoker {
    /// Create a new HTTP invoker
    pub fn new() -> InvokerResult<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }
}

impl ActionInvoker for HttpInvoker {
    fn invoke(&self, request: &OutboundRequest) -> String {
        debug!(method = %request.method, url = %request.url, "outbound call");
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if !request.body.is_empty() {
            builder = builder.body(request.body.clone());
        }

        // Any HTTP status is a valid outcome; only the transport failing
        // produces the marker text.
        match builder.send() {
            Ok(response) => match response.text() {
                Ok(text) => text,
                Err(err) => format!("{INVOKE_ERROR_PREFIX}{err}"),
            },
            Err(err) => format!("{INVOKE_ERROR_PREFIX}{err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_failure_returns_marker_text() {
        let invoker = HttpInvoker::new().unwrap();
        // Unroutable scheme-level failure; no server involved.
        let response = invoker.invoke(&OutboundRequest::get("http://127.0.0.1:1/nothing"));
        assert!(response.starts_with(INVOKE_ERROR_PREFIX));
    }
}

//! In-memory invoker for development and tests

use std::sync::Mutex;

use crate::request::OutboundRequest;
use crate::ActionInvoker;

/// Invoker that records every request and serves a canned response
///
/// In-memory stand-in for the HTTP invoker, in the same spirit as the
/// in-memory state stores elsewhere in the workspace.
pub struct RecordingInvoker {
    response: String,
    requests: Mutex<Vec<OutboundRequest>>,
}

impl RecordingInvoker {
    /// Create a recorder answering every call with `"OK"`
    pub fn new() -> Self {
        Self::with_response("OK")
    }

    /// Create a recorder answering every call with the given text
    pub fn with_response(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of the recorded requests, in invocation order
    pub fn requests(&self) -> Vec<OutboundRequest> {
        self.requests.lock().expect("recorder poisoned").clone()
    }

    /// Number of calls made so far
    pub fn request_count(&self) -> usize {
        self.requests.lock().expect("recorder poisoned").len()
    }
}

impl Default for RecordingInvoker {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionInvoker for RecordingInvoker {
    fn invoke(&self, request: &OutboundRequest) -> String {
        self.requests
            .lock()
            .expect("recorder poisoned")
            .push(request.clone());
        self.response.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_requests_in_order() {
        let invoker = RecordingInvoker::with_response("202");
        let first = OutboundRequest::post("https://example.org/a");
        let second = OutboundRequest::post("https://example.org/b");
        assert_eq!(invoker.invoke(&first), "202");
        assert_eq!(invoker.invoke(&second), "202");
        let seen = invoker.requests();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].url, "https://example.org/a");
        assert_eq!(seen[1].url, "https://example.org/b");
    }
}

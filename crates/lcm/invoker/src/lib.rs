//! Outbound call invoker: one blocking attempt, opaque result.
//!
//! The invoker performs exactly one request and hands every outcome back as
//! text — success body, error body, or a transport failure marker. No retry,
//! no timeout policy, no status-code interpretation: retry intent is
//! declared inside generated manifests and enforced by the infrastructure
//! controller that consumes them, never by this layer.

mod http;
mod recording;
mod request;

pub use http::HttpInvoker;
pub use recording::RecordingInvoker;
pub use request::{HttpMethod, OutboundRequest};

use thiserror::Error;

/// Prefix of the marker text returned when the transport itself fails
pub const INVOKE_ERROR_PREFIX: &str = "invoke-error: ";

/// Invoker construction errors
#[derive(Debug, Error)]
pub enum InvokerError {
    #[error("HTTP client construction failed: {0}")]
    ClientBuild(#[from] reqwest::Error),
}

/// Result type for invoker construction
pub type InvokerResult<T> = std::result::Result<T, InvokerError>;

/// Synchronous call-and-capture of one outbound request
///
/// Implementations must not loop: callers store the returned text verbatim
/// as an audit characteristic and treat "a response was received" as
/// sufficient to proceed.
pub trait ActionInvoker: Send + Sync {
    /// Perform one blocking attempt and render the outcome as text
    fn invoke(&self, request: &OutboundRequest) -> String;
}

//! Trait abstraction for the relay client to enable mocking in tests

use super::{ContactMessage, RelayResponse};
use anyhow::Result;
use async_trait::async_trait;

/// The remote send operation behind the contact form.
///
/// The contract is "eventually settles": implementations must resolve to
/// the relay's verdict or an error, never hang (the HTTP implementation
/// enforces this with a request timeout).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RelayClient: Send + Sync {
    /// Deliver one contact message and return the relay's verdict
    async fn send(&self, message: ContactMessage) -> Result<RelayResponse>;
}

//! Mail relay client: wire types, trait seam, and the HTTP implementation

mod client;
mod traits;

pub use client::{HttpRelayClient, DEFAULT_RELAY_URL, SEND_TIMEOUT};
pub use traits::RelayClient;

#[cfg(test)]
pub use traits::MockRelayClient;

use crate::state::forms::ContactForm;
use serde::{Deserialize, Serialize};

/// One serialized contact form, the body of the relay POST
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    #[serde(rename = "inquiry-type")]
    pub inquiry_type: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
}

impl ContactMessage {
    /// Snapshot the form's current values for sending
    pub fn from_form(form: &ContactForm) -> Self {
        let subject = form.subject.as_text().trim();
        Self {
            inquiry_type: form.inquiry.as_text().to_string(),
            name: form.name.as_text().trim().to_string(),
            email: form.email.as_text().trim().to_string(),
            subject: (!subject.is_empty()).then(|| subject.to_string()),
            message: form.message.as_text().trim().to_string(),
        }
    }
}

/// The relay's JSON verdict
#[derive(Debug, Clone, Deserialize)]
pub struct RelayResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

//! Caller-side interpretation helpers.
//!
//! The resolver never classifies a document: a body carrying
//! `"Response": "Error"` still resolves successfully. `ServiceStatus` is the
//! convenience callers reach for when they want that classification.

use serde::Deserialize;
use serde_json::Value;

/// The service-level outcome envelope some operations embed in the body.
///
/// Operations that return bare data objects (e.g. `price`) carry no envelope
/// at all; for those, [`ServiceStatus::is_error`] is `false`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceStatus {
    #[serde(rename = "Response")]
    response: Option<String>,
    #[serde(rename = "Message")]
    message: Option<String>,
}

impl ServiceStatus {
    /// Reads the envelope out of a resolved document. Missing or non-object
    /// documents yield an empty status.
    #[must_use]
    pub fn from_document(doc: &Value) -> Self {
        serde_json::from_value(doc.clone()).unwrap_or_default()
    }

    /// `true` when the service itself reported the operation as failed.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.response.as_deref() == Some("Error")
    }

    /// The service's human-readable message, when present.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

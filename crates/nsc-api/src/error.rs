//! Error types for NSC API response handling

use nsc_core::RequestError;
use thiserror::Error;

/// Errors that can occur while reading an API response
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Malformed response document: {0}")]
    MalformedResponse(String),

    #[error("Missing attribute '{attribute}' on <{element}>")]
    MissingAttribute { element: String, attribute: String },

    #[error("Invalid value for attribute '{attribute}': '{value}' is not a valid {expected}")]
    InvalidAttribute {
        attribute: String,
        value: String,
        expected: &'static str,
    },

    #[error("XPath '{expression}' failed: {source}")]
    Xpath {
        expression: String,
        #[source]
        source: sxd_xpath::Error,
    },

    #[error("Non-numeric result for '{expression}': '{value}'")]
    NonNumericResult { expression: String, value: String },

    #[error("Failed to serialize response document: {0}")]
    Serialize(#[from] std::io::Error),

    #[error("Unknown {kind} status: '{value}'")]
    UnknownStatus { kind: &'static str, value: String },

    #[error("Invalid timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },

    #[error("Request error: {0}")]
    Request(#[from] RequestError),
}

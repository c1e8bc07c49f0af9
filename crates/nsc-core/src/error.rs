//! Error types for NSC Core

use crate::version::{ProtocolVersion, VersionError};
use thiserror::Error;

/// Errors raised while preparing a request for submission
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("Version error: {0}")]
    Version(#[from] VersionError),

    #[error(
        "Protocol version {requested} is outside the supported range [{min}, {max}] for {request}"
    )]
    VersionUnsupported {
        request: &'static str,
        requested: ProtocolVersion,
        min: ProtocolVersion,
        max: ProtocolVersion,
    },
}

//! The session collaborator seam

use crate::error::ApiError;
use crate::response::ApiResponse;
use nsc_core::{ProtocolVersion, RequestSpec};

/// The transport-side collaborator this layer prepares documents for.
///
/// Implementations own connection handling, TLS, credentials and the
/// login exchange that yields the session token and negotiated
/// protocol version; none of that lives in this layer. A conforming
/// implementation calls [`RequestSpec::ensure_supported`] with its
/// negotiated version before rendering and submitting, so a request
/// whose declared range excludes the session's version is refused
/// without touching the wire.
///
/// # Example
///
/// ```ignore
/// let spec = nsc_core::requests::scan_status(session.session_id(), None, 71);
/// let response = session.submit(&spec)?;
/// let scans = nsc_api::ScanSummary::collect(&response)?;
/// ```
pub trait Session {
    /// Protocol version negotiated at login
    fn negotiated_version(&self) -> ProtocolVersion;

    /// Server-issued session token
    fn session_id(&self) -> &str;

    /// Render, submit, and parse one request
    fn submit(&mut self, request: &RequestSpec) -> Result<ApiResponse, ApiError>;

    /// End the session on the server
    fn logout(&mut self) -> Result<(), ApiError>;
}

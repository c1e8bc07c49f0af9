//! NSC protocol version handling
//!
//! The console negotiates one protocol version per session at login.
//! Individual request kinds declare the inclusive version range they are
//! valid for; the session refuses to submit a request outside its
//! negotiated version (see `nsc-api`).

use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing a version token
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("Empty version string")]
    Empty,

    #[error("Unknown protocol version: '{0}'. Known versions are 1.0, 1.1 and 1.2")]
    Unknown(String),
}

/// A protocol version token.
///
/// Versions are totally ordered: `V1_0 < V1_1 < V1_2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ProtocolVersion {
    #[serde(rename = "1.0")]
    V1_0,
    #[serde(rename = "1.1")]
    V1_1,
    #[serde(rename = "1.2")]
    V1_2,
}

impl ProtocolVersion {
    /// The newest version this library speaks
    pub const LATEST: ProtocolVersion = ProtocolVersion::V1_2;

    /// All known versions, oldest first
    pub const ALL: [ProtocolVersion; 3] = [
        ProtocolVersion::V1_0,
        ProtocolVersion::V1_1,
        ProtocolVersion::V1_2,
    ];

    /// The wire form of the token
    ///
    /// # Examples
    ///
    /// ```
    /// use nsc_core::ProtocolVersion;
    ///
    /// assert_eq!(ProtocolVersion::V1_1.as_str(), "1.1");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            ProtocolVersion::V1_0 => "1.0",
            ProtocolVersion::V1_1 => "1.1",
            ProtocolVersion::V1_2 => "1.2",
        }
    }

    /// Parse a wire-format version token
    pub fn parse(s: &str) -> Result<Self, VersionError> {
        if s.is_empty() {
            return Err(VersionError::Empty);
        }
        match s {
            "1.0" => Ok(ProtocolVersion::V1_0),
            "1.1" => Ok(ProtocolVersion::V1_1),
            "1.2" => Ok(ProtocolVersion::V1_2),
            other => Err(VersionError::Unknown(other.to_string())),
        }
    }
}

impl Display for ProtocolVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProtocolVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

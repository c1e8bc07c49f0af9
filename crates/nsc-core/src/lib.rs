//! # NSC Core
//!
//! Versioned request construction for the NSC vulnerability management
//! XML API.
//!
//! This crate provides:
//! - Protocol version tokens and compatibility checking
//! - The parameter mapping request templates are rendered against
//! - Content generators for structured XML sub-sections
//! - Free constructors for each request kind, returning a [`RequestSpec`]
//!
//! ## Example
//!
//! ```rust
//! use nsc_core::{requests, ProtocolVersion};
//!
//! let spec = requests::scan_status("0F1E2D3C", None, 71);
//! assert!(spec.supports(ProtocolVersion::V1_1));
//!
//! let xml = spec.build_xml(ProtocolVersion::V1_1);
//! assert!(xml.contains("scan-id=\"71\""));
//! ```

pub mod error;
pub mod generators;
pub mod params;
pub mod request;
pub mod version;

pub use error::*;
pub use generators::*;
pub use params::*;
pub use request::*;
pub use version::*;

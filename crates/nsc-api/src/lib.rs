//! # NSC API
//!
//! Typed response access for the NSC vulnerability management XML API.
//!
//! This crate provides:
//! - [`ApiResponse`]: an XPath-backed accessor over one parsed response
//! - [`AttributeExtractor`]: typed reads of a single element's attributes
//! - Domain records ([`EngineSummary`], [`ScanSummary`], ...) built
//!   atomically from response elements
//! - The narrow [`Session`] trait the transport layer implements
//!
//! ## Example
//!
//! ```rust
//! use nsc_api::{ApiResponse, EngineSummary};
//!
//! let xml = r#"<EngineListingResponse success="1">
//!     <EngineSummary id="2" name="Local" address="127.0.0.1" port="40814" status="active"/>
//! </EngineListingResponse>"#;
//!
//! let response = ApiResponse::parse(xml, "<EngineListingRequest/>").unwrap();
//! let engines = EngineSummary::collect(&response).unwrap();
//! assert_eq!(engines[0].name, "Local");
//! ```

pub mod attributes;
pub mod error;
pub mod records;
pub mod response;
pub mod session;

pub use attributes::*;
pub use error::*;
pub use records::*;
pub use response::*;
pub use session::*;

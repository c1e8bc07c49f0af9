//! # NSC XML
//!
//! Text-layer building blocks for the NSC API wire format.
//!
//! This crate provides:
//! - XML escaping for untrusted strings embedded in request documents
//! - `${name}` template expansion used by the request builders
//!
//! ## Escaping Rules
//!
//! 1. The five reserved characters become entity references
//! 2. Non-printable and non-ASCII characters become numeric references
//! 3. Codepoints the XML character production forbids outright are
//!    dropped - they are invalid even as numeric references
//!
//! ## Example
//!
//! ```rust
//! use nsc_xml::{escape, expand};
//! use std::collections::HashMap;
//!
//! assert_eq!(escape("a < b"), "a &lt; b");
//!
//! let mut vars = HashMap::new();
//! vars.insert("name".to_string(), "default".to_string());
//! assert_eq!(expand("<Site name=\"${name}\"/>", &vars), "<Site name=\"default\"/>");
//! ```

mod escape;
mod template;

pub use escape::*;
pub use template::*;

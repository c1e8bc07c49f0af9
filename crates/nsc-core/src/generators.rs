//! Content generators for structured request sub-sections
//!
//! Some request parameters are not scalars but whole repeated XML
//! sub-sections (target host lists, report filters). A generator owns
//! its own parameters and renders the sub-section independently of the
//! outer template; its output is already escaped and is spliced into
//! the template verbatim.

use nsc_xml::escape_into;

/// Capability for rendering a pre-escaped XML sub-section.
pub trait ContentGenerator {
    /// Render the sub-section. The returned string is safe to splice
    /// into a request document without further escaping.
    fn generate(&self) -> String;
}

#[derive(Debug, Clone)]
enum HostEntry {
    Single(String),
    Range { from: String, to: String },
}

/// Generates the `<host>`/`<range>` elements of a site's target list.
///
/// # Example
///
/// ```rust
/// use nsc_core::{ContentGenerator, HostRangeGenerator};
///
/// let hosts = HostRangeGenerator::new()
///     .host("mail.example.com")
///     .range("10.0.0.1", "10.0.0.254");
/// assert_eq!(
///     hosts.generate(),
///     "<host>mail.example.com</host><range from=\"10.0.0.1\" to=\"10.0.0.254\"/>"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct HostRangeGenerator {
    entries: Vec<HostEntry>,
}

impl HostRangeGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single host name or address
    pub fn host(mut self, name: impl Into<String>) -> Self {
        self.entries.push(HostEntry::Single(name.into()));
        self
    }

    /// Add an inclusive from/to address range
    pub fn range(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.entries.push(HostEntry::Range {
            from: from.into(),
            to: to.into(),
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ContentGenerator for HostRangeGenerator {
    fn generate(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            match entry {
                HostEntry::Single(name) => {
                    out.push_str("<host>");
                    escape_into(&mut out, name);
                    out.push_str("</host>");
                }
                HostEntry::Range { from, to } => {
                    out.push_str("<range from=\"");
                    escape_into(&mut out, from);
                    out.push_str("\" to=\"");
                    escape_into(&mut out, to);
                    out.push_str("\"/>");
                }
            }
        }
        out
    }
}

/// Generates the `<filter>` elements of a report configuration.
///
/// Filters restrict a generated report to the named sites, devices or
/// scans; each filter is a `(type, id)` pair.
#[derive(Debug, Clone, Default)]
pub struct ReportFilterGenerator {
    filters: Vec<(String, String)>,
}

impl ReportFilterGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filter of the given type (`site`, `device`, `scan`, ...)
    pub fn filter(mut self, filter_type: impl Into<String>, id: impl Into<String>) -> Self {
        self.filters.push((filter_type.into(), id.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl ContentGenerator for ReportFilterGenerator {
    fn generate(&self) -> String {
        let mut out = String::new();
        for (filter_type, id) in &self.filters {
            out.push_str("<filter type=\"");
            escape_into(&mut out, filter_type);
            out.push_str("\" id=\"");
            escape_into(&mut out, id);
            out.push_str("\"/>");
        }
        out
    }
}

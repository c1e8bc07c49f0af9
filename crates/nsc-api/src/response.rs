//! XPath-backed access to one parsed API response

use crate::error::ApiError;
use sxd_document::dom::{ChildOfRoot, Document, Element};
use sxd_document::{parser, writer, Package};
use sxd_xpath::nodeset::Node;
use sxd_xpath::{Context, Factory, Value};
use tracing::debug;

/// One parsed API response plus the request text that produced it.
///
/// Accessors compile their XPath expression on every call; responses
/// are read interactively a handful of times and then discarded, so no
/// compiled-expression cache is kept between calls.
#[derive(Debug)]
pub struct ApiResponse {
    package: Package,
    request_xml: String,
}

impl ApiResponse {
    /// Parse a response document.
    ///
    /// `request_xml` is the document that was submitted; it is kept
    /// verbatim for diagnostics only.
    pub fn parse(response_xml: &str, request_xml: impl Into<String>) -> Result<Self, ApiError> {
        let package = parser::parse(response_xml)
            .map_err(|e| ApiError::MalformedResponse(format!("{e:?}")))?;
        debug!(bytes = response_xml.len(), "parsed API response");
        Ok(Self {
            package,
            request_xml: request_xml.into(),
        })
    }

    /// The request document that produced this response
    pub fn request_xml(&self) -> &str {
        &self.request_xml
    }

    fn document(&self) -> Document<'_> {
        self.package.as_document()
    }

    /// The document's root element
    pub fn root_element(&self) -> Result<Element<'_>, ApiError> {
        self.document()
            .root()
            .children()
            .into_iter()
            .find_map(|child| match child {
                ChildOfRoot::Element(element) => Some(element),
                _ => None,
            })
            .ok_or_else(|| {
                ApiError::MalformedResponse("document has no root element".to_string())
            })
    }

    fn evaluate(&self, expression: &str) -> Result<Value<'_>, ApiError> {
        let xpath_error = |source: sxd_xpath::Error| ApiError::Xpath {
            expression: expression.to_string(),
            source,
        };

        let factory = Factory::new();
        let xpath = factory
            .build(expression)
            .map_err(|e| xpath_error(e.into()))?
            .ok_or_else(|| xpath_error(sxd_xpath::Error::NoXPath))?;

        let context = Context::new();
        xpath
            .evaluate(&context, self.document().root())
            .map_err(|e| xpath_error(e.into()))
    }

    /// Evaluate an expression to its string value.
    ///
    /// An expression matching nothing yields the empty string; only a
    /// malformed expression is an error.
    pub fn grab(&self, expression: &str) -> Result<String, ApiError> {
        Ok(self.evaluate(expression)?.string())
    }

    pub fn grab_int(&self, expression: &str) -> Result<i32, ApiError> {
        let raw = self.grab(expression)?;
        raw.trim()
            .parse()
            .map_err(|_| ApiError::NonNumericResult {
                expression: expression.to_string(),
                value: raw,
            })
    }

    pub fn grab_long(&self, expression: &str) -> Result<i64, ApiError> {
        let raw = self.grab(expression)?;
        raw.trim()
            .parse()
            .map_err(|_| ApiError::NonNumericResult {
                expression: expression.to_string(),
                value: raw,
            })
    }

    /// Evaluate an expression under XPath boolean coercion
    pub fn grab_bool(&self, expression: &str) -> Result<bool, ApiError> {
        Ok(self.evaluate(expression)?.boolean())
    }

    /// The first matching node in document order, if any
    pub fn grab_node(&self, expression: &str) -> Result<Option<Node<'_>>, ApiError> {
        match self.evaluate(expression)? {
            Value::Nodeset(nodes) => Ok(nodes.document_order_first()),
            _ => Ok(None),
        }
    }

    /// All matching nodes in document order
    pub fn grab_nodes(&self, expression: &str) -> Result<Vec<Node<'_>>, ApiError> {
        match self.evaluate(expression)? {
            Value::Nodeset(nodes) => Ok(nodes.document_order()),
            _ => Ok(Vec::new()),
        }
    }

    /// All matching element nodes in document order; non-element
    /// matches are skipped
    pub fn grab_elements(&self, expression: &str) -> Result<Vec<Element<'_>>, ApiError> {
        Ok(self
            .grab_nodes(expression)?
            .into_iter()
            .filter_map(|node| match node {
                Node::Element(element) => Some(element),
                _ => None,
            })
            .collect())
    }

    /// Serialize the document back to text
    pub fn serialize(&self) -> Result<String, ApiError> {
        let mut out = Vec::new();
        writer::format_document(&self.document(), &mut out)?;
        Ok(String::from_utf8(out).expect("serialized XML is always valid UTF-8"))
    }
}

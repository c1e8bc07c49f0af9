//! Typed attribute extraction from a bound element

use crate::error::ApiError;
use sxd_document::dom::Element;

/// Typed reads of a single element's attributes.
///
/// Binds one element of a parsed document; every getter fails fast with
/// a diagnostic naming the attribute (and, for parse failures, the raw
/// offending value). Record constructors rebind an extractor to each
/// child element they walk.
pub struct AttributeExtractor<'d> {
    element: Element<'d>,
}

impl<'d> AttributeExtractor<'d> {
    pub fn bind(element: Element<'d>) -> Self {
        Self { element }
    }

    /// The bound element
    pub fn element(&self) -> Element<'d> {
        self.element
    }

    fn raw(&self, name: &str) -> Result<&'d str, ApiError> {
        self.element
            .attribute_value(name)
            .ok_or_else(|| ApiError::MissingAttribute {
                element: self.element.name().local_part().to_string(),
                attribute: name.to_string(),
            })
    }

    fn invalid(name: &str, raw: &str, expected: &'static str) -> ApiError {
        ApiError::InvalidAttribute {
            attribute: name.to_string(),
            value: raw.to_string(),
            expected,
        }
    }

    /// The raw attribute text
    pub fn get_str(&self, name: &str) -> Result<&'d str, ApiError> {
        self.raw(name)
    }

    /// The raw attribute text, or `None` if the attribute is absent
    pub fn get_opt_str(&self, name: &str) -> Option<&'d str> {
        self.element.attribute_value(name)
    }

    pub fn get_int(&self, name: &str) -> Result<i32, ApiError> {
        let raw = self.raw(name)?;
        raw.parse()
            .map_err(|_| Self::invalid(name, raw, "integer"))
    }

    /// Like [`get_int`](Self::get_int) for attributes that may be absent
    pub fn get_opt_int(&self, name: &str) -> Result<Option<i32>, ApiError> {
        match self.get_opt_str(name) {
            None => Ok(None),
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|_| Self::invalid(name, raw, "integer")),
        }
    }

    pub fn get_long(&self, name: &str) -> Result<i64, ApiError> {
        let raw = self.raw(name)?;
        raw.parse()
            .map_err(|_| Self::invalid(name, raw, "long integer"))
    }

    pub fn get_float(&self, name: &str) -> Result<f64, ApiError> {
        let raw = self.raw(name)?;
        raw.parse()
            .map_err(|_| Self::invalid(name, raw, "number"))
    }

    /// Decode a boolean attribute.
    ///
    /// The console encodes booleans as `"0"`/`"1"`; only `"1"` decodes
    /// to `true`. The textual forms `"true"`/`"false"` are tolerated on
    /// input but both decode to `false` - consoles never emit them, and
    /// callers that depend on flag attributes must not start reading
    /// them differently. Anything else is an error.
    pub fn get_bool(&self, name: &str) -> Result<bool, ApiError> {
        let raw = self.raw(name)?;
        match raw {
            "1" => Ok(true),
            "0" => Ok(false),
            _ if raw.eq_ignore_ascii_case("true") || raw.eq_ignore_ascii_case("false") => {
                Ok(false)
            }
            _ => Err(Self::invalid(name, raw, "boolean")),
        }
    }
}

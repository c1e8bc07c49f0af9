//! Request parameter mapping

use crate::generators::ContentGenerator;
use nsc_xml::escape;
use std::collections::HashMap;
use std::fmt;

/// A single value in the parameter mapping.
///
/// Scalars are spliced into the template as-is; untrusted scalars must
/// be escaped when they are inserted (see [`ParameterMap::set_escaped`]).
/// Generators are invoked at render time and produce pre-escaped XML.
pub enum ParamValue {
    Scalar(String),
    Generator(Box<dyn ContentGenerator>),
}

impl fmt::Debug for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Scalar(s) => f.debug_tuple("Scalar").field(s).finish(),
            ParamValue::Generator(_) => f.write_str("Generator(..)"),
        }
    }
}

/// Insertion-ordered mapping from placeholder name to [`ParamValue`].
///
/// Populated once by a request constructor and read-only afterwards.
/// Setting a name twice replaces the value in place, keeping the
/// original position.
#[derive(Debug, Default)]
pub struct ParameterMap {
    entries: Vec<(String, ParamValue)>,
}

impl ParameterMap {
    pub fn new() -> Self {
        Self::default()
    }

    fn set(&mut self, name: String, value: ParamValue) {
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Set a trusted scalar (numeric ids, server-issued tokens)
    pub fn set_scalar(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.set(name.into(), ParamValue::Scalar(value.into()));
    }

    /// Set an untrusted scalar, escaping it for the wire
    pub fn set_escaped(&mut self, name: impl Into<String>, value: &str) {
        self.set(name.into(), ParamValue::Scalar(escape(value)));
    }

    /// Set a content generator reference
    pub fn set_generator(&mut self, name: impl Into<String>, generator: Box<dyn ContentGenerator>) {
        self.set(name.into(), ParamValue::Generator(generator));
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Materialize every value, invoking generators, for template
    /// expansion.
    pub fn resolve(&self) -> HashMap<String, String> {
        self.entries
            .iter()
            .map(|(name, value)| {
                let rendered = match value {
                    ParamValue::Scalar(s) => s.clone(),
                    ParamValue::Generator(g) => g.generate(),
                };
                (name.clone(), rendered)
            })
            .collect()
    }
}

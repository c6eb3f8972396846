//! Field values (`/V` and `/DV`).

use crate::document::Document;
use crate::error::Result;
use crate::object::Object;
use crate::text::{decode_text_string, encode_text_string};

/// Decoded value of a choice field.
///
/// The shape mirrors what is stored: a text string is `Scalar`, an array of
/// text strings is `Multiple`, a missing entry is `Absent`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldValue {
    /// No value
    #[default]
    Absent,
    /// Single text value
    Scalar(String),
    /// Ordered sequence of text values
    Multiple(Vec<String>),
}

impl FieldValue {
    /// Decode a stored value. Array elements are resolved individually.
    pub fn from_object(document: &Document, object: Option<&Object>) -> Result<Self> {
        let object = match object {
            Some(object) => document.resolve(object)?,
            None => return Ok(FieldValue::Absent),
        };
        match object {
            Object::String(bytes) => Ok(FieldValue::Scalar(decode_text_string(bytes)?)),
            Object::Name(name) => Ok(FieldValue::Scalar(name.clone())),
            Object::Array(items) => {
                let mut values = Vec::with_capacity(items.len());
                for item in items {
                    match document.resolve(item)? {
                        Object::String(bytes) => values.push(decode_text_string(bytes)?),
                        Object::Name(name) => values.push(name.clone()),
                        other => log::warn!("Ignoring {} in field value array", other.type_name()),
                    }
                }
                Ok(FieldValue::Multiple(values))
            },
            Object::Null => Ok(FieldValue::Absent),
            other => {
                log::warn!("Ignoring field value of type {}", other.type_name());
                Ok(FieldValue::Absent)
            },
        }
    }

    /// Encoded form to store, or `None` if the entry should be removed.
    ///
    /// A sequence keeps its shape, even with one element. An empty sequence
    /// removes the entry.
    pub fn to_object(&self) -> Option<Object> {
        match self {
            FieldValue::Absent => None,
            FieldValue::Scalar(text) => Some(Object::String(encode_text_string(text))),
            FieldValue::Multiple(values) if values.is_empty() => None,
            FieldValue::Multiple(values) => Some(Object::Array(
                values
                    .iter()
                    .map(|text| Object::String(encode_text_string(text)))
                    .collect(),
            )),
        }
    }

    /// All values, in order.
    pub fn values(&self) -> Vec<&str> {
        match self {
            FieldValue::Absent => Vec::new(),
            FieldValue::Scalar(text) => vec![text.as_str()],
            FieldValue::Multiple(values) => values.iter().map(String::as_str).collect(),
        }
    }

    /// The single value, if this is a scalar.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            FieldValue::Scalar(text) => Some(text),
            _ => None,
        }
    }

    /// Whether no value is set.
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }

    /// Whether this is a sequence.
    pub fn is_multiple(&self) -> bool {
        matches!(self, FieldValue::Multiple(_))
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Scalar(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Scalar(text)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(values: Vec<String>) -> Self {
        FieldValue::Multiple(values)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(values: Vec<&str>) -> Self {
        FieldValue::Multiple(values.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for FieldValue {
    fn from(values: &[&str]) -> Self {
        FieldValue::Multiple(values.iter().map(|v| v.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for FieldValue {
    fn from(values: [&str; N]) -> Self {
        FieldValue::Multiple(values.iter().map(|v| v.to_string()).collect())
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Absent)
    }
}

//! Choice field option items (`/Opt`).
//!
//! Per ISO 32000-1:2008 Table 231 each element of `/Opt` is either a text
//! string, serving as export and display value at once, or a two-element
//! array `[export display]`.

use crate::document::Document;
use crate::error::Result;
use crate::object::Object;
use crate::text::{decode_text_string, TextString};

/// One decoded option of a choice field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionItem {
    /// Value stored in `/V` when this option is selected
    pub export_value: String,
    /// Text shown to the user
    pub display_value: String,
}

impl OptionItem {
    /// Option whose export and display value are the same.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            export_value: value.clone(),
            display_value: value,
        }
    }

    /// Option with distinct export and display values.
    pub fn with_export(export_value: impl Into<String>, display_value: impl Into<String>) -> Self {
        Self {
            export_value: export_value.into(),
            display_value: display_value.into(),
        }
    }
}

/// An option as supplied for storage.
///
/// Values given as Unicode text are encoded on store; pre-encoded bytes are
/// stored as they are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionEntry {
    /// Export and display value are the same string
    Single(TextString),
    /// Distinct export and display values
    Pair {
        /// Export value
        export: TextString,
        /// Display value
        display: TextString,
    },
}

impl OptionEntry {
    /// Stored representation of this entry.
    pub fn into_object(self) -> Object {
        match self {
            OptionEntry::Single(value) => Object::String(value.into_bytes()),
            OptionEntry::Pair { export, display } => Object::Array(vec![
                Object::String(export.into_bytes()),
                Object::String(display.into_bytes()),
            ]),
        }
    }
}

impl From<&str> for OptionEntry {
    fn from(value: &str) -> Self {
        OptionEntry::Single(value.into())
    }
}

impl From<String> for OptionEntry {
    fn from(value: String) -> Self {
        OptionEntry::Single(value.into())
    }
}

impl From<Vec<u8>> for OptionEntry {
    fn from(value: Vec<u8>) -> Self {
        OptionEntry::Single(value.into())
    }
}

impl From<&[u8]> for OptionEntry {
    fn from(value: &[u8]) -> Self {
        OptionEntry::Single(value.into())
    }
}

impl From<TextString> for OptionEntry {
    fn from(value: TextString) -> Self {
        OptionEntry::Single(value)
    }
}

impl From<OptionItem> for OptionEntry {
    fn from(item: OptionItem) -> Self {
        if item.export_value == item.display_value {
            OptionEntry::Single(item.export_value.into())
        } else {
            OptionEntry::Pair {
                export: item.export_value.into(),
                display: item.display_value.into(),
            }
        }
    }
}

impl<E: Into<TextString>, D: Into<TextString>> From<(E, D)> for OptionEntry {
    fn from((export, display): (E, D)) -> Self {
        OptionEntry::Pair {
            export: export.into(),
            display: display.into(),
        }
    }
}

/// Decode an `/Opt` array.
///
/// Malformed elements are skipped with a warning; undecodable text is an
/// error.
pub(crate) fn decode_option_items(document: &Document, opt: &Object) -> Result<Vec<OptionItem>> {
    let items = match document.resolve(opt)? {
        Object::Array(items) => items,
        Object::Null => return Ok(Vec::new()),
        other => {
            log::warn!("Ignoring /Opt of type {}", other.type_name());
            return Ok(Vec::new());
        },
    };

    let mut options = Vec::with_capacity(items.len());
    for item in items {
        match document.resolve(item)? {
            Object::String(bytes) => options.push(OptionItem::new(decode_text_string(bytes)?)),
            Object::Array(pair) if pair.len() == 2 => {
                let export = document.resolve(&pair[0])?.as_string();
                let display = document.resolve(&pair[1])?.as_string();
                match (export, display) {
                    (Some(export), Some(display)) => options.push(OptionItem::with_export(
                        decode_text_string(export)?,
                        decode_text_string(display)?,
                    )),
                    _ => log::warn!("Ignoring option pair without two strings"),
                }
            },
            other => log::warn!("Ignoring option item of type {}", other.type_name()),
        }
    }
    Ok(options)
}

/// Build an `/Opt` array from entries, in the given order.
pub(crate) fn encode_option_items<I>(entries: I) -> Object
where
    I: IntoIterator,
    I::Item: Into<OptionEntry>,
{
    Object::Array(
        entries
            .into_iter()
            .map(|entry| Into::<OptionEntry>::into(entry).into_object())
            .collect(),
    )
}

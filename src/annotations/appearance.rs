//! Appearance dictionary resolution.
//!
//! PDF Spec: ISO 32000-1:2008, Section 12.5.5 (Appearance Streams)
//!
//! The `/AP` dictionary can contain:
//! - /N - Normal appearance (required for most annotations)
//! - /R - Rollover appearance (optional, for interactive elements)
//! - /D - Down appearance (optional, for clicked state)
//!
//! Each entry is either a Form XObject stream or a dictionary mapping
//! appearance state names (`/On`, `/Off`, ...) to streams.

use crate::document::Document;
use crate::object::{Dictionary, Object};

/// One entry of an appearance dictionary.
#[derive(Debug, Clone, Copy)]
pub enum AppearanceEntry<'a> {
    /// A single appearance stream
    Direct(&'a Object),
    /// Appearance streams keyed by appearance state
    Stateful(AppearanceStates<'a>),
}

impl<'a> AppearanceEntry<'a> {
    fn from_object(document: &'a Document, object: &'a Object) -> Option<Self> {
        let resolved = document.resolve(object).ok()?;
        match resolved {
            Object::Stream { .. } => Some(AppearanceEntry::Direct(resolved)),
            Object::Dictionary(states) => Some(AppearanceEntry::Stateful(AppearanceStates {
                states,
                document,
            })),
            _ => None,
        }
    }

    /// The stream drawn for `state`.
    ///
    /// A direct entry is used regardless of state.
    pub fn stream_for_state(&self, state: Option<&str>) -> Option<&'a Object> {
        match self {
            AppearanceEntry::Direct(stream) => Some(*stream),
            AppearanceEntry::Stateful(states) => states.get(state?),
        }
    }
}

/// State-keyed appearance streams.
#[derive(Debug, Clone, Copy)]
pub struct AppearanceStates<'a> {
    states: &'a Dictionary,
    document: &'a Document,
}

impl<'a> AppearanceStates<'a> {
    /// Stream for `state`, if it exists and really is a stream.
    pub fn get(&self, state: &str) -> Option<&'a Object> {
        let value = self.document.resolve(self.states.get(state)?).ok()?;
        value.is_stream().then_some(value)
    }

    /// State names in dictionary order.
    pub fn names(&self) -> Vec<&'a str> {
        self.states.keys().map(String::as_str).collect()
    }

    /// Number of states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether there are no states.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Whether every state maps to a stream.
    pub fn all_streams(&self) -> bool {
        self.states.keys().all(|state| self.get(state).is_some())
    }
}

/// Read view of an annotation's `/AP` dictionary.
#[derive(Debug, Clone, Copy)]
pub struct AppearanceDictionary<'a> {
    dict: &'a Dictionary,
    document: &'a Document,
}

impl<'a> AppearanceDictionary<'a> {
    pub(crate) fn new(dict: &'a Dictionary, document: &'a Document) -> Self {
        Self { dict, document }
    }

    fn entry(&self, key: &str) -> Option<AppearanceEntry<'a>> {
        AppearanceEntry::from_object(self.document, self.dict.get(key)?)
    }

    fn is_present(&self, key: &str) -> bool {
        self.dict
            .get(key)
            .and_then(|value| self.document.resolve(value).ok())
            .is_some_and(|value| !value.is_null())
    }

    /// Normal appearance (`/N`).
    pub fn normal(&self) -> Option<AppearanceEntry<'a>> {
        self.entry("N")
    }

    /// Rollover appearance (`/R`), falling back to the normal appearance
    /// when `/R` is absent.
    pub fn rollover(&self) -> Option<AppearanceEntry<'a>> {
        if self.is_present("R") {
            self.entry("R")
        } else {
            self.normal()
        }
    }

    /// Down appearance (`/D`), falling back to the normal appearance when
    /// `/D` is absent.
    pub fn down(&self) -> Option<AppearanceEntry<'a>> {
        if self.is_present("D") {
            self.entry("D")
        } else {
            self.normal()
        }
    }
}

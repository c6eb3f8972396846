//! Annotation handles.

use super::appearance::{AppearanceDictionary, AppearanceEntry};
use crate::annotation_types::{AnnotationFlags, AnnotationSubtype};
use crate::document::{DictionaryObject, Document};
use crate::error::{Error, Result};
use crate::flags::FlagBitset;
use crate::geometry::Rect;
use crate::object::{Dictionary, Object, ObjectRef};
use crate::text::{decode_text_string, encode_text_string};

/// Behaviour common to every annotation kind, widgets included.
pub trait AnnotationObject: DictionaryObject {
    /// Annotation subtype (`/Subtype`).
    fn subtype(&self) -> AnnotationSubtype {
        self.get("Subtype")
            .and_then(Object::as_name)
            .map(AnnotationSubtype::from_pdf_name)
            .unwrap_or(AnnotationSubtype::Unknown)
    }

    /// Annotation rectangle (`/Rect`).
    fn rect(&self) -> Option<Rect> {
        self.get("Rect").and_then(Rect::from_pdf_array)
    }

    /// Text contents (`/Contents`).
    fn contents(&self) -> Result<Option<String>> {
        self.get("Contents")
            .and_then(Object::as_string)
            .map(decode_text_string)
            .transpose()
    }

    /// Set the text contents (`/Contents`).
    fn set_contents(&mut self, text: &str) -> Result<()> {
        self.set("Contents", Object::String(encode_text_string(text)))
    }

    /// The `/AP` entry, resolved but otherwise verbatim.
    fn appearance(&self) -> Option<&Object> {
        self.get("AP")
    }

    /// Resolver view of the `/AP` dictionary.
    fn appearance_dict(&self) -> Option<AppearanceDictionary<'_>> {
        let ap = self.appearance()?.as_dict()?;
        Some(AppearanceDictionary::new(ap, self.document()))
    }

    /// Normal appearance (`/AP /N`).
    fn normal_appearance(&self) -> Option<AppearanceEntry<'_>> {
        self.appearance_dict()?.normal()
    }

    /// Rollover appearance, or the normal one when `/R` is absent.
    fn rollover_appearance(&self) -> Option<AppearanceEntry<'_>> {
        self.appearance_dict()?.rollover()
    }

    /// Down appearance, or the normal one when `/D` is absent.
    fn down_appearance(&self) -> Option<AppearanceEntry<'_>> {
        self.appearance_dict()?.down()
    }

    /// Current appearance state (`/AS`).
    fn appearance_state(&self) -> Option<&str> {
        self.get("AS").and_then(Object::as_name)
    }

    /// Set the current appearance state (`/AS`).
    fn set_appearance_state(&mut self, state: &str) -> Result<()> {
        self.set("AS", Object::name(state))
    }

    /// Whether the normal appearance can actually be drawn.
    ///
    /// A direct stream is always drawable. A state-keyed entry needs a stream
    /// for the current `/AS`; without `/AS` every state must be a stream and
    /// there must be at least one.
    fn has_renderable_appearance(&self) -> bool {
        match self.normal_appearance() {
            None => false,
            Some(AppearanceEntry::Direct(_)) => true,
            Some(AppearanceEntry::Stateful(states)) => match self.appearance_state() {
                Some(state) => states.get(state).is_some(),
                None => !states.is_empty() && states.all_streams(),
            },
        }
    }

    /// Replace the normal appearance, keeping `/R` and `/D`.
    fn set_normal_appearance(&mut self, stream: ObjectRef) -> Result<()> {
        let indirect_ap = self
            .dict()
            .get("AP")
            .and_then(Object::as_reference)
            .filter(|ap_ref| self.document().dictionary(*ap_ref).is_ok());

        let ap = match indirect_ap {
            Some(ap_ref) => self.document_mut().dictionary_mut(ap_ref)?,
            None => {
                let dict = self.dict_mut()?;
                if !matches!(dict.get("AP"), Some(Object::Dictionary(_))) {
                    dict.insert("AP".to_string(), Object::Dictionary(Dictionary::new()));
                }
                dict.get_mut("AP")
                    .and_then(Object::as_dict_mut)
                    .ok_or_else(|| Error::InvalidPdf("appearance dictionary unavailable".to_string()))?
            },
        };
        ap.insert("N".to_string(), Object::Reference(stream));
        Ok(())
    }
}

/// Handle onto an annotation dictionary.
pub struct Annotation<'a> {
    doc: &'a mut Document,
    obj_ref: ObjectRef,
}

impl<'a> Annotation<'a> {
    pub(crate) fn new(doc: &'a mut Document, obj_ref: ObjectRef) -> Self {
        Self { doc, obj_ref }
    }
}

impl DictionaryObject for Annotation<'_> {
    const MUST_BE_INDIRECT: bool = true;

    fn document(&self) -> &Document {
        &*self.doc
    }

    fn document_mut(&mut self) -> &mut Document {
        &mut *self.doc
    }

    fn object_ref(&self) -> ObjectRef {
        self.obj_ref
    }
}

impl FlagBitset for Annotation<'_> {
    type Flags = AnnotationFlags;
    const FLAGS_KEY: &'static str = "F";
}

impl AnnotationObject for Annotation<'_> {}

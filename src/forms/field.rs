//! Form field hierarchy (ISO 32000-1:2008, Section 12.7.3.1).
//!
//! Fields form a tree through `/Parent` and `/Kids`. Inheritable entries
//! (`FT`, `Ff`, `V`, `DV`, `DA`, ...) are looked up on the field first and
//! then on its ancestors; `DA` finally falls back to the interactive form
//! dictionary.

use super::default_appearance::DefaultAppearance;
use crate::annotation_types::AnnotationFlags;
use crate::annotations::WIDGET_KEYS;
use crate::document::{DictionaryObject, Document};
use crate::error::Result;
use crate::geometry::Rect;
use crate::object::{Dictionary, Object, ObjectRef};
use crate::text::decode_text_string;

/// Behaviour shared by all form fields.
pub trait FormField: DictionaryObject {
    /// Value of an inheritable entry, searching up the `/Parent` chain.
    fn inherited(&self, key: &str) -> Option<&Object> {
        let doc = self.document();
        let mut dict = self.dict();
        for _ in 0..=doc.config().max_resolve_depth {
            if let Some(value) = dict.get(key) {
                match doc.resolve(value) {
                    Ok(Object::Null) => {},
                    Ok(resolved) => return Some(resolved),
                    Err(_) => return None,
                }
            }
            let parent = dict.get("Parent")?.as_reference()?;
            dict = doc.dictionary(parent).ok()?;
        }
        log::warn!("Parent chain of field {} is too deep", self.object_ref());
        None
    }

    /// Field type name (`/FT`), possibly inherited.
    fn field_type(&self) -> Option<&str> {
        self.inherited("FT").and_then(Object::as_name)
    }

    /// Partial field name (`/T`).
    fn partial_name(&self) -> Result<Option<String>> {
        self.get("T")
            .and_then(Object::as_string)
            .map(decode_text_string)
            .transpose()
    }

    /// Fully qualified field name: partial names from the root down,
    /// separated by periods.
    fn full_name(&self) -> Result<Option<String>> {
        let doc = self.document();
        let mut names = Vec::new();
        let mut dict = self.dict();
        for _ in 0..=doc.config().max_resolve_depth {
            if let Some(name) = dict.get("T").and_then(|t| doc.resolve(t).ok()).and_then(Object::as_string) {
                names.push(decode_text_string(name)?);
            }
            match dict.get("Parent").and_then(Object::as_reference) {
                Some(parent) => dict = doc.dictionary(parent)?,
                None => break,
            }
        }
        if names.is_empty() {
            return Ok(None);
        }
        names.reverse();
        Ok(Some(names.join(".")))
    }

    /// Kid references (`/Kids`).
    fn kids(&self) -> Vec<ObjectRef> {
        self.get("Kids")
            .and_then(Object::as_array)
            .map(|kids| kids.iter().filter_map(Object::as_reference).collect())
            .unwrap_or_default()
    }

    /// Whether this field has no child fields, only widgets (or nothing).
    fn is_terminal(&self) -> bool {
        let doc = self.document();
        self.kids().into_iter().all(|kid| {
            doc.dictionary(kid)
                .map(|kid| !kid.contains_key("T"))
                .unwrap_or(true)
        })
    }

    /// Whether this dictionary is also the field's only widget.
    fn is_merged_with_widget(&self) -> bool {
        self.dict().get("Subtype").and_then(Object::as_name) == Some("Widget")
    }

    /// Widget annotations of this field.
    fn widgets(&self) -> Vec<ObjectRef> {
        if self.is_merged_with_widget() {
            return vec![self.object_ref()];
        }
        let doc = self.document();
        self.kids()
            .into_iter()
            .filter(|kid| {
                doc.dictionary(*kid)
                    .map(|kid| kid.get("Subtype").and_then(Object::as_name) == Some("Widget"))
                    .unwrap_or(false)
            })
            .collect()
    }

    /// Create a widget for this field on `page`.
    ///
    /// The first widget is merged into the field dictionary. Adding a second
    /// widget moves the merged widget entries into a separate kid first.
    fn create_widget(&mut self, page: ObjectRef, rect: Rect) -> Result<ObjectRef> {
        self.document().dictionary(page)?;
        let field_ref = self.object_ref();

        if !self.has_key("Kids") && !self.is_merged_with_widget() {
            let dict = self.dict_mut()?;
            for (key, value) in widget_dictionary(page, rect) {
                dict.insert(key, value);
            }
            self.document_mut().link_annotation(page, field_ref)?;
            log::debug!("Merged widget into field {}", field_ref);
            return Ok(field_ref);
        }

        if self.is_merged_with_widget() {
            split_merged_widget(self.document_mut(), field_ref)?;
        }

        let mut widget = widget_dictionary(page, rect);
        widget.insert("Parent".to_string(), Object::Reference(field_ref));
        let doc = self.document_mut();
        let widget_ref = doc.add(Object::Dictionary(widget));
        let field = doc.dictionary_mut(field_ref)?;
        match field.get_mut("Kids") {
            Some(Object::Array(kids)) => kids.push(Object::Reference(widget_ref)),
            _ => {
                field.insert("Kids".to_string(), Object::Array(vec![Object::Reference(widget_ref)]));
            },
        }
        doc.link_annotation(page, widget_ref)?;

        log::debug!("Added widget {} to field {}", widget_ref, field_ref);
        Ok(widget_ref)
    }

    /// Default appearance string: the inherited `/DA`, or the form's.
    fn default_appearance_string(&self) -> Option<String> {
        let da = match self.inherited("DA") {
            Some(da) => da,
            None => {
                let doc = self.document();
                doc.resolve(doc.acro_form()?.get("DA")?).ok()?
            },
        };
        da.as_string()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// Parsed default appearance, if one is configured.
    fn default_appearance(&self) -> Result<Option<DefaultAppearance>> {
        self.default_appearance_string()
            .map(|da| DefaultAppearance::parse(&da))
            .transpose()
    }

    /// Write a `/DA` for `font` at `size`, registering the font in the form's
    /// default resources.
    ///
    /// A font already registered with the same base font is reused;
    /// otherwise a standard Type1 font is added under the first free name
    /// `F1`, `F2`, ...
    fn set_default_appearance(&mut self, font: &str, size: f32) -> Result<()> {
        let resource = self.document_mut().register_form_font(font)?;
        let da = DefaultAppearance::new(resource, size).to_da_string();
        self.set("DA", Object::String(da.into_bytes()))
    }

    /// [`FormField::set_default_appearance`] with the configured default
    /// font and size.
    fn set_default_appearance_from_config(&mut self) -> Result<()> {
        let config = self.document().config();
        let (font, size) = (config.default_font.clone(), config.default_font_size);
        self.set_default_appearance(&font, size)
    }
}

fn widget_dictionary(page: ObjectRef, rect: Rect) -> Dictionary {
    let mut widget = Dictionary::new();
    widget.insert("Type".to_string(), Object::name("Annot"));
    widget.insert("Subtype".to_string(), Object::name("Widget"));
    widget.insert("Rect".to_string(), rect.to_pdf_array());
    widget.insert("P".to_string(), Object::Reference(page));
    widget.insert("F".to_string(), Object::Integer(AnnotationFlags::PRINT.bits() as i64));
    widget
}

/// Move the widget entries of a merged field/widget into a new kid.
fn split_merged_widget(doc: &mut Document, field_ref: ObjectRef) -> Result<ObjectRef> {
    let field = doc.dictionary_mut(field_ref)?;
    let mut widget = Dictionary::new();
    for key in WIDGET_KEYS {
        if let Some(value) = field.shift_remove(*key) {
            widget.insert(key.to_string(), value);
        }
    }
    widget.insert("Parent".to_string(), Object::Reference(field_ref));
    let page = widget.get("P").and_then(Object::as_reference);

    let widget_ref = doc.add(Object::Dictionary(widget));
    doc.dictionary_mut(field_ref)?
        .insert("Kids".to_string(), Object::Array(vec![Object::Reference(widget_ref)]));
    if let Some(page) = page {
        doc.replace_annotation(page, field_ref, widget_ref)?;
    }

    log::debug!("Split merged widget of field {} into {}", field_ref, widget_ref);
    Ok(widget_ref)
}

//! Widget annotations (ISO 32000-1:2008, Section 12.5.6.19).
//!
//! A widget is the on-page representation of a form field. When a field has
//! exactly one widget the two dictionaries are usually merged into one
//! object; otherwise widgets are `/Kids` of the field with a `/Parent` entry.

use super::annotation::AnnotationObject;
use crate::annotation_types::AnnotationFlags;
use crate::document::{DictionaryObject, Document};
use crate::flags::FlagBitset;
use crate::object::{Object, ObjectRef};

/// Keys that belong to the widget half of a merged field/widget dictionary.
pub(crate) const WIDGET_KEYS: &[&str] = &[
    "Type", "Subtype", "Rect", "Contents", "P", "NM", "M", "F", "AP", "AS", "Border", "C",
    "StructParent", "OC", "H", "MK", "A", "AA", "BS",
];

/// Handle onto a widget annotation.
pub struct Widget<'a> {
    doc: &'a mut Document,
    obj_ref: ObjectRef,
}

impl<'a> Widget<'a> {
    pub(crate) fn new(doc: &'a mut Document, obj_ref: ObjectRef) -> Self {
        Self { doc, obj_ref }
    }

    /// The field this widget belongs to: its `/Parent`, or the widget
    /// itself when field and widget share one dictionary.
    pub fn field_ref(&self) -> ObjectRef {
        let dict = self.dict();
        if dict.contains_key("FT") || dict.contains_key("T") {
            return self.obj_ref;
        }
        dict.get("Parent")
            .and_then(Object::as_reference)
            .unwrap_or(self.obj_ref)
    }

    /// Whether field and widget share this dictionary.
    pub fn is_merged_with_field(&self) -> bool {
        self.field_ref() == self.obj_ref
    }

    /// Page the widget is placed on (`/P`).
    pub fn page_ref(&self) -> Option<ObjectRef> {
        self.dict().get("P").and_then(Object::as_reference)
    }
}

impl DictionaryObject for Widget<'_> {
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

impl FlagBitset for Widget<'_> {
    type Flags = AnnotationFlags;
    const FLAGS_KEY: &'static str = "F";
}

impl AnnotationObject for Widget<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation_types::AnnotationSubtype;
    use crate::forms::FormField;
    use crate::geometry::Rect;
    use crate::object::Dictionary;

    #[test]
    fn test_standalone_widget_reports_parent() {
        let mut doc = Document::new();
        let field = doc.add_choice_field("choice").unwrap();

        let mut widget = Dictionary::new();
        widget.insert("Type".to_string(), Object::name("Annot"));
        widget.insert("Subtype".to_string(), Object::name("Widget"));
        widget.insert("Parent".to_string(), Object::Reference(field));
        let widget_ref = doc.add(Object::Dictionary(widget));

        let mut widget = doc.widget(widget_ref).unwrap();
        assert_eq!(widget.subtype(), AnnotationSubtype::Widget);
        assert_eq!(widget.field_ref(), field);
        assert!(!widget.is_merged_with_field());
        assert!(widget.must_be_indirect());

        assert_eq!(widget.appearance_state(), None);
        widget.set_appearance_state("Off").unwrap();
        assert_eq!(widget.appearance_state(), Some("Off"));
    }

    #[test]
    fn test_merged_widget_is_its_own_field() {
        let mut doc = Document::new();
        let page = doc.add_page(Rect::new(0.0, 0.0, 612.0, 792.0)).unwrap();
        let field = doc.add_choice_field("choice").unwrap();
        let widget_ref = doc
            .choice_field(field)
            .unwrap()
            .create_widget(page, Rect::new(10.0, 10.0, 100.0, 20.0))
            .unwrap();
        assert_eq!(widget_ref, field);

        let widget = doc.widget(widget_ref).unwrap();
        assert!(widget.is_merged_with_field());
        assert_eq!(widget.page_ref(), Some(page));
        assert_eq!(widget.rect(), Some(Rect::new(10.0, 10.0, 100.0, 20.0)));
    }
}

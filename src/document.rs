//! In-memory document model.
//!
//! [`Document`] owns every indirect object of one document and hands out
//! typed handles ([`ChoiceField`], [`Annotation`], [`Widget`]) that borrow it
//! mutably. All handles implement [`DictionaryObject`], the shared accessor
//! layer over a dictionary-valued indirect object.

use crate::annotations::{Annotation, Widget};
use crate::config::FormConfig;
use crate::error::{Error, Result};
use crate::forms::ChoiceField;
use crate::geometry::Rect;
use crate::object::{Dictionary, Object, ObjectRef};
use crate::text::{encode_text_string, pdfdoc_differences};
use lazy_static::lazy_static;
use std::collections::HashMap;

/// Target of dangling references.
static NULL: Object = Object::Null;

lazy_static! {
    static ref EMPTY_DICTIONARY: Dictionary = Dictionary::new();
}

/// In-memory PDF document.
///
/// Holds the catalog, the page tree and all other indirect objects. No file
/// I/O happens here; the document is built up programmatically.
///
/// # Example
///
/// ```
/// use acroform_oxide::document::Document;
/// use acroform_oxide::geometry::Rect;
///
/// let mut doc = Document::new();
/// let page = doc.add_page(Rect::new(0.0, 0.0, 612.0, 792.0))?;
/// let field = doc.add_choice_field("country")?;
/// assert_eq!(doc.page_count(), 1);
/// assert!(doc.fields().contains(&field));
/// # let _ = page;
/// # Ok::<(), acroform_oxide::error::Error>(())
/// ```
pub struct Document {
    /// Indirect objects by reference
    objects: HashMap<ObjectRef, Object>,
    /// Next free object number
    next_object_id: u32,
    /// Document catalog
    catalog: ObjectRef,
    /// Root of the page tree
    pages: ObjectRef,
    config: FormConfig,
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("objects", &self.objects.len())
            .field("catalog", &self.catalog)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document with default configuration.
    pub fn new() -> Self {
        Self::with_config(FormConfig::default())
    }

    /// Create an empty document with the given configuration.
    pub fn with_config(config: FormConfig) -> Self {
        let mut doc = Self {
            objects: HashMap::new(),
            next_object_id: 1,
            catalog: ObjectRef::new(0, 0),
            pages: ObjectRef::new(0, 0),
            config,
        };

        let mut pages = Dictionary::new();
        pages.insert("Type".to_string(), Object::name("Pages"));
        pages.insert("Kids".to_string(), Object::Array(Vec::new()));
        pages.insert("Count".to_string(), Object::Integer(0));
        doc.pages = doc.add(Object::Dictionary(pages));

        let mut catalog = Dictionary::new();
        catalog.insert("Type".to_string(), Object::name("Catalog"));
        catalog.insert("Pages".to_string(), Object::Reference(doc.pages));
        doc.catalog = doc.add(Object::Dictionary(catalog));

        doc
    }

    /// Processing configuration.
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Reference to the document catalog.
    pub fn catalog_ref(&self) -> ObjectRef {
        self.catalog
    }

    /// Number of indirect objects.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    fn allocate_object_id(&mut self) -> u32 {
        let id = self.next_object_id;
        self.next_object_id += 1;
        id
    }

    /// Store an object as a new indirect object.
    pub fn add(&mut self, object: Object) -> ObjectRef {
        let obj_ref = ObjectRef::new(self.allocate_object_id(), 0);
        self.objects.insert(obj_ref, object);
        obj_ref
    }

    /// Store a new stream object. `/Length` is set from the data.
    pub fn add_stream(&mut self, mut dict: Dictionary, data: impl Into<bytes::Bytes>) -> ObjectRef {
        let data = data.into();
        dict.insert("Length".to_string(), Object::Integer(data.len() as i64));
        self.add(Object::Stream { dict, data })
    }

    /// Look up an indirect object.
    pub fn get(&self, obj_ref: ObjectRef) -> Option<&Object> {
        self.objects.get(&obj_ref)
    }

    /// Look up an indirect object for modification.
    pub fn get_mut(&mut self, obj_ref: ObjectRef) -> Option<&mut Object> {
        self.objects.get_mut(&obj_ref)
    }

    /// Follow references until a direct object is reached.
    ///
    /// A reference to a missing object resolves to `Null`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RecursionLimitExceeded`] if more than
    /// `max_resolve_depth` references are chained (reference cycles end here).
    pub fn resolve<'a>(&'a self, object: &'a Object) -> Result<&'a Object> {
        let mut current = object;
        let mut depth = 0;
        while let Object::Reference(obj_ref) = current {
            if depth >= self.config.max_resolve_depth {
                log::warn!("Reference chain starting at {:?} is too deep", object);
                return Err(Error::RecursionLimitExceeded(self.config.max_resolve_depth));
            }
            depth += 1;
            current = match self.objects.get(obj_ref) {
                Some(target) => target,
                None => {
                    log::debug!("Dangling reference {} resolved to null", obj_ref);
                    return Ok(&NULL);
                },
            };
        }
        Ok(current)
    }

    /// Dictionary of an indirect object (stream dictionaries included).
    pub fn dictionary(&self, obj_ref: ObjectRef) -> Result<&Dictionary> {
        let object = self
            .objects
            .get(&obj_ref)
            .ok_or(Error::ObjectNotFound(obj_ref.id, obj_ref.gen))?;
        let object = self.resolve(object)?;
        object.as_dict().ok_or_else(|| Error::InvalidObjectType {
            expected: "Dictionary".to_string(),
            found: object.type_name().to_string(),
        })
    }

    /// Mutable dictionary of an indirect object.
    pub fn dictionary_mut(&mut self, obj_ref: ObjectRef) -> Result<&mut Dictionary> {
        let object = self
            .objects
            .get_mut(&obj_ref)
            .ok_or(Error::ObjectNotFound(obj_ref.id, obj_ref.gen))?;
        let found = object.type_name();
        object.as_dict_mut().ok_or_else(|| Error::InvalidObjectType {
            expected: "Dictionary".to_string(),
            found: found.to_string(),
        })
    }

    /// Page references in document order.
    pub fn pages(&self) -> Vec<ObjectRef> {
        self.dictionary(self.pages)
            .ok()
            .and_then(|pages| pages.get("Kids"))
            .and_then(Object::as_array)
            .map(|kids| kids.iter().filter_map(Object::as_reference).collect())
            .unwrap_or_default()
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages().len()
    }

    /// Append an empty page with the given media box.
    pub fn add_page(&mut self, media_box: Rect) -> Result<ObjectRef> {
        let mut page = Dictionary::new();
        page.insert("Type".to_string(), Object::name("Page"));
        page.insert("Parent".to_string(), Object::Reference(self.pages));
        page.insert("MediaBox".to_string(), media_box.to_pdf_array());
        page.insert("Annots".to_string(), Object::Array(Vec::new()));
        let page_ref = self.add(Object::Dictionary(page));

        let pages_ref = self.pages;
        let pages = self.dictionary_mut(pages_ref)?;
        let count = match pages.get_mut("Kids") {
            Some(Object::Array(kids)) => {
                kids.push(Object::Reference(page_ref));
                kids.len()
            },
            _ => {
                pages.insert("Kids".to_string(), Object::Array(vec![Object::Reference(page_ref)]));
                1
            },
        };
        pages.insert("Count".to_string(), Object::Integer(count as i64));

        log::debug!("Added page {}", page_ref);
        Ok(page_ref)
    }

    /// Annotation references listed in a page's `/Annots` array.
    pub fn page_annotations(&self, page: ObjectRef) -> Result<Vec<ObjectRef>> {
        let page_dict = self.dictionary(page)?;
        let annots = match page_dict.get("Annots") {
            Some(annots) => self.resolve(annots)?,
            None => return Ok(Vec::new()),
        };
        Ok(annots
            .as_array()
            .map(|arr| arr.iter().filter_map(Object::as_reference).collect())
            .unwrap_or_default())
    }

    /// Append an annotation reference to a page's `/Annots` array.
    pub(crate) fn link_annotation(&mut self, page: ObjectRef, annot: ObjectRef) -> Result<()> {
        let page_dict = self.dictionary_mut(page)?;
        match page_dict.get_mut("Annots") {
            Some(Object::Array(annots)) => {
                if !annots.contains(&Object::Reference(annot)) {
                    annots.push(Object::Reference(annot));
                }
            },
            _ => {
                page_dict.insert("Annots".to_string(), Object::Array(vec![Object::Reference(annot)]));
            },
        }
        Ok(())
    }

    /// Swap `old` for `new` in a page's `/Annots` array, appending `new` if
    /// `old` is not listed.
    pub(crate) fn replace_annotation(&mut self, page: ObjectRef, old: ObjectRef, new: ObjectRef) -> Result<()> {
        let mut replaced = false;
        if let Some(Object::Array(annots)) = self.dictionary_mut(page)?.get_mut("Annots") {
            for entry in annots.iter_mut() {
                if *entry == Object::Reference(old) {
                    *entry = Object::Reference(new);
                    replaced = true;
                }
            }
        }
        if !replaced {
            self.link_annotation(page, new)?;
        }
        Ok(())
    }

    /// Create an annotation of the given subtype on a page.
    ///
    /// The annotation gets the print flag set, like annotations created by
    /// interactive viewers.
    pub fn add_annotation(&mut self, page: ObjectRef, subtype: &str, rect: Rect) -> Result<ObjectRef> {
        self.dictionary(page)?;

        let mut annot = Dictionary::new();
        annot.insert("Type".to_string(), Object::name("Annot"));
        annot.insert("Subtype".to_string(), Object::name(subtype));
        annot.insert("Rect".to_string(), rect.to_pdf_array());
        annot.insert("P".to_string(), Object::Reference(page));
        annot.insert(
            "F".to_string(),
            Object::Integer(crate::annotation_types::AnnotationFlags::PRINT.bits() as i64),
        );
        let annot_ref = self.add(Object::Dictionary(annot));
        self.link_annotation(page, annot_ref)?;

        log::debug!("Added {} annotation {} on page {}", subtype, annot_ref, page);
        Ok(annot_ref)
    }

    /// Reference to the interactive form dictionary, if the catalog has one.
    pub fn acro_form_ref(&self) -> Option<ObjectRef> {
        self.dictionary(self.catalog)
            .ok()?
            .get("AcroForm")?
            .as_reference()
            .filter(|obj_ref| self.objects.contains_key(obj_ref))
    }

    /// Interactive form dictionary, if present.
    pub fn acro_form(&self) -> Option<&Dictionary> {
        let entry = self.dictionary(self.catalog).ok()?.get("AcroForm")?;
        self.resolve(entry).ok()?.as_dict()
    }

    /// Interactive form dictionary, created with an empty `/Fields` array if
    /// missing. A direct dictionary in the catalog is moved to an indirect
    /// object first.
    pub fn acro_form_mut(&mut self) -> Result<&mut Dictionary> {
        let form_ref = self.ensure_indirect_dictionary(self.catalog, "AcroForm")?;
        let form = self.dictionary_mut(form_ref)?;
        if !form.contains_key("Fields") {
            form.insert("Fields".to_string(), Object::Array(Vec::new()));
        }
        Ok(form)
    }

    /// Make `owner[key]` a reference to an indirect dictionary and return it.
    ///
    /// A direct dictionary is moved out into a new object; a missing or
    /// malformed entry is replaced by a new empty dictionary.
    pub(crate) fn ensure_indirect_dictionary(&mut self, owner: ObjectRef, key: &str) -> Result<ObjectRef> {
        let entry = self.dictionary(owner)?.get(key).cloned();
        let dict = match entry {
            Some(Object::Reference(obj_ref)) if self.dictionary(obj_ref).is_ok() => return Ok(obj_ref),
            Some(Object::Dictionary(dict)) => dict,
            _ => Dictionary::new(),
        };
        let obj_ref = self.add(Object::Dictionary(dict));
        self.dictionary_mut(owner)?
            .insert(key.to_string(), Object::Reference(obj_ref));
        log::debug!("Stored /{} of {} as {}", key, owner, obj_ref);
        Ok(obj_ref)
    }

    /// Resource name of `base_font` in the form's `/DR /Font` dictionary,
    /// registering a standard Type1 font if none matches.
    ///
    /// New fonts get an encoding whose codes agree with PDFDocEncoding, so
    /// single-byte text strings can be shown without re-encoding.
    pub(crate) fn register_form_font(&mut self, base_font: &str) -> Result<String> {
        self.acro_form_mut()?;
        let form_ref = self
            .acro_form_ref()
            .ok_or_else(|| Error::InvalidPdf("interactive form dictionary missing".to_string()))?;
        let resources = self.ensure_indirect_dictionary(form_ref, "DR")?;
        let fonts_ref = self.ensure_indirect_dictionary(resources, "Font")?;

        let fonts = self.dictionary(fonts_ref)?;
        let existing = fonts.iter().find_map(|(name, font)| {
            let base = self
                .resolve(font)
                .ok()
                .and_then(Object::as_dict)
                .and_then(|font| font.get("BaseFont"))
                .and_then(Object::as_name);
            (base == Some(base_font)).then(|| name.clone())
        });
        if let Some(name) = existing {
            return Ok(name);
        }
        let name = (1..)
            .map(|n| format!("F{}", n))
            .find(|candidate| !fonts.contains_key(candidate))
            .unwrap_or_else(|| "F0".to_string());

        let mut encoding = Dictionary::new();
        encoding.insert("Type".to_string(), Object::name("Encoding"));
        encoding.insert("BaseEncoding".to_string(), Object::name("WinAnsiEncoding"));
        encoding.insert("Differences".to_string(), Object::Array(pdfdoc_differences()));

        let mut font = Dictionary::new();
        font.insert("Type".to_string(), Object::name("Font"));
        font.insert("Subtype".to_string(), Object::name("Type1"));
        font.insert("BaseFont".to_string(), Object::name(base_font));
        font.insert("Encoding".to_string(), Object::Dictionary(encoding));
        let font_ref = self.add(Object::Dictionary(font));

        self.dictionary_mut(fonts_ref)?
            .insert(name.clone(), Object::Reference(font_ref));
        log::debug!("Registered font {} as /{}", base_font, name);
        Ok(name)
    }

    /// Font registered as `resource` in `/DR /Font`, ready to be placed in
    /// another resource dictionary.
    ///
    /// An indirect font is returned as its reference, a direct font
    /// dictionary as a copy.
    pub(crate) fn form_font(&self, resource: &str) -> Option<Object> {
        let resources = self.resolve(self.acro_form()?.get("DR")?).ok()?.as_dict()?;
        let fonts = self.resolve(resources.get("Font")?).ok()?.as_dict()?;
        match fonts.get(resource)? {
            Object::Reference(obj_ref) => {
                self.dictionary(*obj_ref).ok()?;
                Some(Object::Reference(*obj_ref))
            },
            Object::Dictionary(font) => Some(Object::Dictionary(font.clone())),
            other => {
                log::warn!("Ignoring {} registered as font /{}", other.type_name(), resource);
                None
            },
        }
    }

    /// Root field references listed in the interactive form.
    pub fn fields(&self) -> Vec<ObjectRef> {
        self.acro_form()
            .and_then(|form| form.get("Fields"))
            .and_then(|fields| self.resolve(fields).ok())
            .and_then(Object::as_array)
            .map(|arr| arr.iter().filter_map(Object::as_reference).collect())
            .unwrap_or_default()
    }

    /// Create a root choice field named `name` and register it in the form.
    ///
    /// The new field has no flags set, which makes it a single-select list
    /// box.
    pub fn add_choice_field(&mut self, name: &str) -> Result<ObjectRef> {
        let mut field = Dictionary::new();
        field.insert("FT".to_string(), Object::name("Ch"));
        field.insert("T".to_string(), Object::String(encode_text_string(name)));
        let field_ref = self.add(Object::Dictionary(field));

        let form = self.acro_form_mut()?;
        match form.get_mut("Fields") {
            Some(Object::Array(fields)) => fields.push(Object::Reference(field_ref)),
            _ => {
                form.insert("Fields".to_string(), Object::Array(vec![Object::Reference(field_ref)]));
            },
        }

        log::debug!("Added choice field '{}' as {}", name, field_ref);
        Ok(field_ref)
    }

    /// Choice field handle for an existing field dictionary.
    pub fn choice_field(&mut self, obj_ref: ObjectRef) -> Result<ChoiceField<'_>> {
        self.dictionary(obj_ref)?;
        Ok(ChoiceField::new(self, obj_ref))
    }

    /// Annotation handle for an existing annotation dictionary.
    pub fn annotation(&mut self, obj_ref: ObjectRef) -> Result<Annotation<'_>> {
        self.dictionary(obj_ref)?;
        Ok(Annotation::new(self, obj_ref))
    }

    /// Widget handle for an existing widget annotation dictionary.
    pub fn widget(&mut self, obj_ref: ObjectRef) -> Result<Widget<'_>> {
        self.dictionary(obj_ref)?;
        Ok(Widget::new(self, obj_ref))
    }
}

/// Accessors shared by every handle onto a dictionary-valued indirect object.
pub trait DictionaryObject {
    /// Whether objects of this kind may only be written as indirect objects.
    const MUST_BE_INDIRECT: bool = false;

    /// Owning document.
    fn document(&self) -> &Document;

    /// Owning document, mutably.
    fn document_mut(&mut self) -> &mut Document;

    /// Reference of the underlying indirect object.
    fn object_ref(&self) -> ObjectRef;

    /// Whether this object must be written as an indirect object.
    ///
    /// Fixed per kind.
    fn must_be_indirect(&self) -> bool {
        Self::MUST_BE_INDIRECT
    }

    /// The underlying dictionary. Empty if the object has gone missing.
    fn dict(&self) -> &Dictionary {
        self.document()
            .dictionary(self.object_ref())
            .unwrap_or(&EMPTY_DICTIONARY)
    }

    /// The underlying dictionary, mutably.
    fn dict_mut(&mut self) -> Result<&mut Dictionary> {
        let obj_ref = self.object_ref();
        self.document_mut().dictionary_mut(obj_ref)
    }

    /// Resolved value for `key`. Null values count as absent.
    fn get(&self, key: &str) -> Option<&Object> {
        let value = self.dict().get(key)?;
        match self.document().resolve(value) {
            Ok(Object::Null) => None,
            Ok(resolved) => Some(resolved),
            Err(e) => {
                log::warn!("Cannot resolve /{} of {}: {}", key, self.object_ref(), e);
                None
            },
        }
    }

    /// Set `key` to `value`.
    fn set(&mut self, key: &str, value: Object) -> Result<()> {
        self.dict_mut()?.insert(key.to_string(), value);
        Ok(())
    }

    /// Remove `key`, returning the previous value.
    fn delete(&mut self, key: &str) -> Result<Option<Object>> {
        Ok(self.dict_mut()?.shift_remove(key))
    }

    /// Whether `key` is present (unresolved).
    fn has_key(&self, key: &str) -> bool {
        self.dict().contains_key(key)
    }
}

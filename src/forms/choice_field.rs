//! Choice fields (ISO 32000-1:2008, Section 12.7.4.4).
//!
//! A choice field is a list box or a combo box, decided by the `COMBO`
//! flag. Values are checked against the option list before anything is
//! written, so a rejected assignment leaves the field untouched.

use super::field::FormField;
use super::field_flags::{ChoiceFieldFlags, ChoiceKind, ConcreteFieldType};
use super::field_value::FieldValue;
use super::option_items::{decode_option_items, encode_option_items, OptionEntry, OptionItem};
use crate::document::{DictionaryObject, Document};
use crate::error::{Error, Result};
use crate::flags::{flag_bits, FlagBitset};
use crate::object::{Object, ObjectRef};

/// Which value entry an assignment targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueSlot {
    /// `/V`
    Current,
    /// `/DV`
    Default,
}

impl ValueSlot {
    fn key(self) -> &'static str {
        match self {
            ValueSlot::Current => "V",
            ValueSlot::Default => "DV",
        }
    }
}

/// Handle onto a choice field dictionary.
///
/// # Example
///
/// ```
/// use acroform_oxide::document::Document;
/// use acroform_oxide::forms::{ConcreteFieldType, FieldValue};
///
/// let mut doc = Document::new();
/// let field_ref = doc.add_choice_field("color")?;
/// let mut field = doc.choice_field(field_ref)?;
/// field.set_option_items(["red", "green"])?;
/// field.initialize_as_combo_box()?;
/// field.set_field_value("green")?;
///
/// assert_eq!(field.concrete_field_type(), ConcreteFieldType::ComboBox);
/// assert_eq!(field.field_value()?, FieldValue::Scalar("green".to_string()));
/// assert!(field.set_field_value("blue").is_err());
/// # Ok::<(), acroform_oxide::error::Error>(())
/// ```
pub struct ChoiceField<'a> {
    doc: &'a mut Document,
    obj_ref: ObjectRef,
}

impl<'a> ChoiceField<'a> {
    pub(crate) fn new(doc: &'a mut Document, obj_ref: ObjectRef) -> Self {
        Self { doc, obj_ref }
    }

    /// Concrete kind derived from the field flags.
    pub fn kind(&self) -> ChoiceKind {
        ChoiceKind::from_flags(self.flag_set())
    }

    /// List box or combo box.
    pub fn concrete_field_type(&self) -> ConcreteFieldType {
        self.kind().concrete_field_type()
    }

    /// Whether this is a combo box.
    pub fn is_combo_box(&self) -> bool {
        matches!(self.kind(), ChoiceKind::ComboBox { .. })
    }

    /// Whether this is a list box.
    pub fn is_list_box(&self) -> bool {
        matches!(self.kind(), ChoiceKind::ListBox { .. })
    }

    /// Whether this is a combo box accepting arbitrary text.
    pub fn is_editable(&self) -> bool {
        matches!(self.kind(), ChoiceKind::ComboBox { editable: true })
    }

    /// Whether this is a list box allowing several selected options.
    pub fn is_multi_select(&self) -> bool {
        matches!(self.kind(), ChoiceKind::ListBox { multi_select: true })
    }

    /// Turn the field into a list box and clear its value.
    ///
    /// Other flags are left alone.
    pub fn initialize_as_list_box(&mut self) -> Result<()> {
        self.clear_value()?;
        self.remove_flags(ChoiceFieldFlags::COMBO)?;
        log::debug!("Initialized field {} as list box", self.obj_ref);
        Ok(())
    }

    /// Turn the field into a combo box and clear its value.
    ///
    /// Other flags are left alone.
    pub fn initialize_as_combo_box(&mut self) -> Result<()> {
        self.clear_value()?;
        self.insert_flags(ChoiceFieldFlags::COMBO, false)?;
        log::debug!("Initialized field {} as combo box", self.obj_ref);
        Ok(())
    }

    fn clear_value(&mut self) -> Result<()> {
        self.delete("V")?;
        self.delete("I")?;
        Ok(())
    }

    /// Current value (`/V`), possibly inherited.
    pub fn field_value(&self) -> Result<FieldValue> {
        FieldValue::from_object(self.document(), self.inherited("V"))
    }

    /// Set the current value.
    ///
    /// # Errors
    ///
    /// - [`Error::MultiplicityViolation`] for a sequence on a combo box or on
    ///   a list box without multi-select
    /// - [`Error::ValueNotAllowed`] for a value that is not an export value,
    ///   unless the field is an editable combo box
    pub fn set_field_value(&mut self, value: impl Into<FieldValue>) -> Result<()> {
        let value = value.into();
        self.check_value(&value, ValueSlot::Current)?;

        let selected = match self.kind() {
            ChoiceKind::ListBox { .. } => self.selected_indices_for(&value)?,
            ChoiceKind::ComboBox { .. } => Vec::new(),
        };
        self.store_value(&value, ValueSlot::Current)?;
        if selected.is_empty() {
            self.delete("I")?;
        } else {
            let indices = selected.into_iter().map(|i| Object::Integer(i as i64)).collect();
            self.set("I", Object::Array(indices))?;
        }
        Ok(())
    }

    /// Default value (`/DV`), possibly inherited.
    pub fn default_field_value(&self) -> Result<FieldValue> {
        FieldValue::from_object(self.document(), self.inherited("DV"))
    }

    /// Set the default value.
    ///
    /// Same rules as [`ChoiceField::set_field_value`]; an editable combo box
    /// accepts any default value just as it accepts any current value.
    pub fn set_default_field_value(&mut self, value: impl Into<FieldValue>) -> Result<()> {
        let value = value.into();
        self.check_value(&value, ValueSlot::Default)?;
        self.store_value(&value, ValueSlot::Default)
    }

    fn check_value(&self, value: &FieldValue, slot: ValueSlot) -> Result<()> {
        let kind = self.kind();
        if value.is_multiple() && !kind.allows_multiple_values() {
            return Err(Error::MultiplicityViolation(format!(
                "/{} of {:?} cannot hold several values",
                slot.key(),
                kind
            )));
        }
        if kind.requires_listed_value() {
            let export_values = self.export_values()?;
            if let Some(unlisted) = value
                .values()
                .into_iter()
                .find(|v| !export_values.iter().any(|export| export == v))
            {
                return Err(Error::ValueNotAllowed {
                    value: unlisted.to_string(),
                });
            }
        }
        Ok(())
    }

    fn store_value(&mut self, value: &FieldValue, slot: ValueSlot) -> Result<()> {
        match value.to_object() {
            Some(object) => self.set(slot.key(), object)?,
            None => {
                self.delete(slot.key())?;
            },
        }
        log::debug!("Set /{} of field {} to {:?}", slot.key(), self.obj_ref, value);
        Ok(())
    }

    fn selected_indices_for(&self, value: &FieldValue) -> Result<Vec<usize>> {
        let export_values = self.export_values()?;
        let values = value.values();
        Ok(export_values
            .iter()
            .enumerate()
            .filter(|(_, export)| values.contains(&export.as_str()))
            .map(|(index, _)| index)
            .collect())
    }

    /// Indices of the selected options (`/I`), ascending.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.get("I")
            .and_then(Object::as_array)
            .map(|indices| {
                indices
                    .iter()
                    .filter_map(Object::as_integer)
                    .filter_map(|i| usize::try_from(i).ok())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Option items in stored order.
    pub fn option_items(&self) -> Result<Vec<OptionItem>> {
        match self.dict().get("Opt") {
            Some(opt) => decode_option_items(self.document(), opt),
            None => Ok(Vec::new()),
        }
    }

    /// Replace the option list.
    ///
    /// Unicode strings are encoded, pre-encoded bytes are stored verbatim,
    /// and `(export, display)` tuples become two-element arrays. The previous
    /// list is discarded entirely.
    pub fn set_option_items<I>(&mut self, items: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<OptionEntry>,
    {
        let opt = encode_option_items(items);
        self.set("Opt", opt)
    }

    /// Export values in option order.
    pub fn export_values(&self) -> Result<Vec<String>> {
        Ok(self
            .option_items()?
            .into_iter()
            .map(|item| item.export_value)
            .collect())
    }

    /// First visible option of a list box (`/TI`, default 0).
    pub fn list_box_top_index(&self) -> Result<usize> {
        if self.is_combo_box() {
            return Err(Error::Unsupported("top index is only defined for list boxes".to_string()));
        }
        Ok(self
            .get("TI")
            .and_then(Object::as_integer)
            .and_then(|ti| usize::try_from(ti).ok())
            .unwrap_or(0))
    }

    /// Set the first visible option of a list box.
    pub fn set_list_box_top_index(&mut self, index: usize) -> Result<()> {
        if self.is_combo_box() {
            return Err(Error::Unsupported("top index is only defined for list boxes".to_string()));
        }
        let count = self.option_items()?.len();
        if index >= count {
            return Err(Error::ValueNotAllowed {
                value: format!("top index {} (field has {} options)", index, count),
            });
        }
        self.set("TI", Object::Integer(index as i64))
    }
}

impl DictionaryObject for ChoiceField<'_> {
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

impl FlagBitset for ChoiceField<'_> {
    type Flags = ChoiceFieldFlags;
    const FLAGS_KEY: &'static str = "Ff";

    fn raw_flags(&self) -> u32 {
        self.inherited(Self::FLAGS_KEY)
            .and_then(Object::as_integer)
            .map(|value| flag_bits(Self::FLAGS_KEY, value))
            .unwrap_or(0)
    }
}

impl FormField for ChoiceField<'_> {}

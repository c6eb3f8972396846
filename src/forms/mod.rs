//! Interactive form choice fields.
//!
//! Choice fields (`/FT /Ch`) come in two concrete shapes selected by the
//! Combo flag: scrollable list boxes and drop-down combo boxes, the latter
//! optionally editable. This module reads and writes their values, option
//! lists and defaults through [`ChoiceField`] handles obtained from a
//! [`Document`](crate::document::Document).
//!
//! # Example
//!
//! ```
//! use acroform_oxide::document::Document;
//! use acroform_oxide::forms::FieldValue;
//!
//! # fn main() -> acroform_oxide::Result<()> {
//! let mut doc = Document::new();
//! let field_ref = doc.add_choice_field("color")?;
//! let mut field = doc.choice_field(field_ref)?;
//! field.initialize_as_combo_box()?;
//! field.set_option_items(["red", "green", "blue"])?;
//! field.set_field_value("green")?;
//! assert_eq!(field.field_value()?, FieldValue::Scalar("green".to_string()));
//! # Ok(())
//! # }
//! ```

mod appearance;
mod choice_field;
mod default_appearance;
mod field;
mod field_flags;
mod field_value;
mod option_items;
mod validation;

pub use choice_field::ChoiceField;
pub use default_appearance::DefaultAppearance;
pub use field::FormField;
pub use field_flags::{ChoiceFieldFlags, ChoiceKind, ConcreteFieldType, TextAlignment};
pub use field_value::FieldValue;
pub use option_items::{OptionEntry, OptionItem};
pub use validation::ValidationIssue;

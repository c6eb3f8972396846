// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::enum_variant_names)]
#![allow(clippy::wrong_self_convention)]
#![allow(clippy::doc_overindented_list_items)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::match_like_matches_macro)]
// Allow unused for tests
#![cfg_attr(test, allow(dead_code))]
#![cfg_attr(test, allow(unused_variables))]

//! # AcroForm Oxide
//!
//! Interactive form choice fields and the annotation layer beneath them,
//! operating on an in-memory PDF object graph.
//!
//! ## Core Features
//!
//! - **Text strings**: byte-exact PDFDocEncoding / UTF-16BE codec (ISO 32000-1:2008 §7.9.2.2)
//! - **Annotations**: flags, appearance dictionaries and appearance states (§12.5)
//! - **Widgets**: merged and split field/widget dictionaries (§12.5.6.19)
//! - **Choice fields**: list boxes and combo boxes with checked values,
//!   option lists and defaults (§12.7.4.4)
//! - **Appearances**: generated normal appearance streams for combo boxes
//! - **Validation**: consistency checks with optional all-or-nothing repair
//!
//! ## Quick Start
//!
//! ```
//! use acroform_oxide::forms::{FieldValue, FormField};
//! use acroform_oxide::geometry::Rect;
//! use acroform_oxide::Document;
//!
//! # fn main() -> acroform_oxide::Result<()> {
//! let mut doc = Document::new();
//! let page = doc.add_page(Rect::new(0.0, 0.0, 612.0, 792.0))?;
//! let field_ref = doc.add_choice_field("size")?;
//!
//! let mut field = doc.choice_field(field_ref)?;
//! field.initialize_as_combo_box()?;
//! field.set_option_items([("s", "Small"), ("l", "Large")])?;
//! field.set_field_value("l")?;
//! field.create_widget(page, Rect::new(72.0, 700.0, 150.0, 20.0))?;
//! field.set_default_appearance("Helvetica", 10.0)?;
//! field.create_appearances()?;
//!
//! assert_eq!(field.field_value()?, FieldValue::Scalar("l".to_string()));
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Error handling
pub mod error;

// Object model
pub mod document;
pub mod flags;
pub mod object;

// Geometry
pub mod geometry;

// Text strings
pub mod text;

// Annotations
/// Core annotation types and enums per PDF spec
pub mod annotation_types;
pub mod annotations;

// Interactive forms
pub mod forms;

// Configuration
pub mod config;

// Re-exports
pub use annotation_types::{AnnotationFlags, AnnotationSubtype};
pub use annotations::{Annotation, AnnotationObject, Widget};
pub use config::FormConfig;
pub use document::{DictionaryObject, Document};
pub use error::{Error, Result};
pub use flags::FlagBitset;
pub use forms::{ChoiceField, FieldValue, FormField};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

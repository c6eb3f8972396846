//! PDF annotations support.
//!
//! Handles onto annotation dictionaries per ISO 32000-1:2008, Section 12.5:
//! appearance dictionary resolution, annotation flags and widget specifics.
//! Every annotation is an indirect object.

mod annotation;
mod appearance;
mod widget;

pub use annotation::{Annotation, AnnotationObject};
pub use appearance::{AppearanceDictionary, AppearanceEntry, AppearanceStates};
pub use widget::Widget;
pub(crate) use widget::WIDGET_KEYS;

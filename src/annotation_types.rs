//! Core annotation types per PDF spec ISO 32000-1:2008, Section 12.5.

/// Annotation subtype per PDF spec Table 169.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnnotationSubtype {
    /// Text annotation (sticky note) - Section 12.5.6.4
    Text,
    /// Link annotation - Section 12.5.6.5
    Link,
    /// Free text annotation - Section 12.5.6.6
    FreeText,
    /// Square annotation - Section 12.5.6.8
    Square,
    /// Circle annotation - Section 12.5.6.8
    Circle,
    /// Highlight annotation - Section 12.5.6.10
    Highlight,
    /// Rubber stamp annotation - Section 12.5.6.12
    Stamp,
    /// Ink annotation - Section 12.5.6.13
    Ink,
    /// Popup annotation - Section 12.5.6.14
    Popup,
    /// Widget annotation (form field) - Section 12.5.6.19
    Widget,
    /// Any other subtype
    Unknown,
}

impl AnnotationSubtype {
    /// Get the PDF name for this annotation subtype.
    pub fn pdf_name(&self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Link => "Link",
            Self::FreeText => "FreeText",
            Self::Square => "Square",
            Self::Circle => "Circle",
            Self::Highlight => "Highlight",
            Self::Stamp => "Stamp",
            Self::Ink => "Ink",
            Self::Popup => "Popup",
            Self::Widget => "Widget",
            Self::Unknown => "Unknown",
        }
    }

    /// Parse from PDF name.
    pub fn from_pdf_name(name: &str) -> Self {
        match name {
            "Text" => Self::Text,
            "Link" => Self::Link,
            "FreeText" => Self::FreeText,
            "Square" => Self::Square,
            "Circle" => Self::Circle,
            "Highlight" => Self::Highlight,
            "Stamp" => Self::Stamp,
            "Ink" => Self::Ink,
            "Popup" => Self::Popup,
            "Widget" => Self::Widget,
            _ => Self::Unknown,
        }
    }
}

bitflags::bitflags! {
    /// Annotation flags per PDF spec Table 165 (`/F` entry).
    ///
    /// Bit positions are 1-based in the PDF spec; `INVISIBLE` is bit 1.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct AnnotationFlags: u32 {
        /// Do not display if there is no handler for the subtype
        const INVISIBLE = 1 << 0;
        /// Do not display or print
        const HIDDEN = 1 << 1;
        /// Print when the page is printed
        const PRINT = 1 << 2;
        /// Do not scale with page magnification
        const NO_ZOOM = 1 << 3;
        /// Do not rotate with the page
        const NO_ROTATE = 1 << 4;
        /// Do not display on screen
        const NO_VIEW = 1 << 5;
        /// Do not allow interaction
        const READ_ONLY = 1 << 6;
        /// Do not allow deletion or property changes
        const LOCKED = 1 << 7;
        /// Invert `NO_VIEW` for certain events
        const TOGGLE_NO_VIEW = 1 << 8;
        /// Do not allow contents to be modified
        const LOCKED_CONTENTS = 1 << 9;
    }
}

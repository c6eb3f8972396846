//! Appearance streams for combo box widgets.
//!
//! The generated Form XObject shows the field's current value as a single
//! line of text, clipped to the widget rectangle and wrapped in the `/Tx`
//! marked-content sequence that viewers replace when the field is edited.

use super::choice_field::ChoiceField;
use super::default_appearance::DefaultAppearance;
use super::field::FormField;
use super::field_flags::{ChoiceKind, TextAlignment};
use super::field_value::FieldValue;
use crate::annotations::AnnotationObject;
use crate::document::DictionaryObject;
use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::object::{Dictionary, Object};
use crate::text::encode_pdfdoc_lossy;

/// Font size used when auto sizing yields nothing usable.
const FALLBACK_FONT_SIZE: f32 = 12.0;

/// Average glyph width as a fraction of the font size, used to place
/// centred and right-aligned text without font metrics.
const APPROX_CHAR_WIDTH: f32 = 0.6;

impl ChoiceField<'_> {
    /// Create the normal appearance of every widget of a combo box.
    ///
    /// The stream draws the display text of the current value with the
    /// field's default appearance. Existing `/N` entries are replaced;
    /// rollover and down appearances are kept.
    ///
    /// # Errors
    ///
    /// - [`Error::Unsupported`] for list boxes
    /// - [`Error::InvalidPdf`] if no default appearance is configured or its
    ///   font is not in the form's default resources
    pub fn create_appearances(&mut self) -> Result<()> {
        if let ChoiceKind::ListBox { .. } = self.kind() {
            return Err(Error::Unsupported(
                "appearance generation for list boxes".to_string(),
            ));
        }

        let da = self
            .default_appearance()?
            .ok_or_else(|| Error::InvalidPdf("choice field has no default appearance string".to_string()))?;
        let font = self.document().form_font(&da.font_resource).ok_or_else(|| {
            Error::InvalidPdf(format!(
                "font /{} is not in the form's default resources",
                da.font_resource
            ))
        })?;

        let text = self.display_text()?;
        let alignment = self
            .inherited("Q")
            .or_else(|| self.document().acro_form()?.get("Q"))
            .and_then(Object::as_integer)
            .map(TextAlignment::from_q_value)
            .unwrap_or_default();
        let padding = self.document().config().text_padding;

        for widget_ref in self.widgets() {
            let rect = self
                .document_mut()
                .widget(widget_ref)?
                .rect()
                .unwrap_or_default();
            let content = combo_box_content(&text, &da, rect, padding, alignment);

            let mut fonts = Dictionary::new();
            fonts.insert(da.font_resource.clone(), font.clone());
            let mut resources = Dictionary::new();
            resources.insert("Font".to_string(), Object::Dictionary(fonts));

            let mut form = Dictionary::new();
            form.insert("Type".to_string(), Object::name("XObject"));
            form.insert("Subtype".to_string(), Object::name("Form"));
            form.insert(
                "BBox".to_string(),
                Rect::new(0.0, 0.0, rect.width, rect.height).to_pdf_array(),
            );
            form.insert("Resources".to_string(), Object::Dictionary(resources));

            let doc = self.document_mut();
            let stream_ref = doc.add_stream(form, content);
            doc.widget(widget_ref)?.set_normal_appearance(stream_ref)?;
            log::debug!("Installed appearance {} on widget {}", stream_ref, widget_ref);
        }
        Ok(())
    }

    /// Text shown for the current value: the display value of the matching
    /// option, or the value itself.
    fn display_text(&self) -> Result<String> {
        let value = match self.field_value()? {
            FieldValue::Absent => return Ok(String::new()),
            FieldValue::Scalar(value) => value,
            FieldValue::Multiple(values) => values.into_iter().next().unwrap_or_default(),
        };
        Ok(self
            .option_items()?
            .into_iter()
            .find(|item| item.export_value == value)
            .map(|item| item.display_value)
            .unwrap_or(value))
    }
}

/// Content stream for a single line of text inside `rect`.
fn combo_box_content(
    text: &str,
    da: &DefaultAppearance,
    rect: Rect,
    padding: f32,
    alignment: TextAlignment,
) -> Vec<u8> {
    let width = rect.width;
    let height = rect.height;

    let font_size = if da.font_size > 0.0 {
        da.font_size
    } else {
        let auto = (height - 2.0 * padding) * 0.8;
        if auto > 0.0 {
            auto
        } else {
            FALLBACK_FONT_SIZE
        }
    };

    let (encoded, replaced) = encode_pdfdoc_lossy(text);
    if replaced > 0 {
        log::warn!(
            "{} character(s) of '{}' cannot be shown with a single-byte font and were replaced",
            replaced,
            text
        );
    }

    let text_width = encoded.len() as f32 * font_size * APPROX_CHAR_WIDTH;
    let x_pos = match alignment {
        TextAlignment::Left => padding,
        TextAlignment::Center => ((width - text_width) / 2.0).max(padding),
        TextAlignment::Right => (width - padding - text_width).max(padding),
    };
    // Center vertically
    let y_pos = (height - font_size) / 2.0 + font_size * 0.2;

    let mut stream = Vec::new();
    stream.extend_from_slice(b"/Tx BMC\nq\n");
    stream.extend_from_slice(
        format!(
            "{} {} {} {} re W n\n",
            padding,
            padding,
            (width - 2.0 * padding).max(0.0),
            (height - 2.0 * padding).max(0.0)
        )
        .as_bytes(),
    );
    if !encoded.is_empty() {
        stream.extend_from_slice(b"BT\n");
        stream.extend_from_slice(format!("/{} {} Tf\n", da.font_resource, font_size).as_bytes());
        if !da.color_ops.is_empty() {
            stream.extend_from_slice(format!("{}\n", da.color_ops).as_bytes());
        }
        stream.extend_from_slice(format!("{} {} Td\n", x_pos, y_pos).as_bytes());
        stream.push(b'(');
        stream.extend_from_slice(&escape_pdf_string(&encoded));
        stream.extend_from_slice(b") Tj\nET\n");
    }
    stream.extend_from_slice(b"Q\nEMC\n");
    stream
}

/// Escape special characters in PDF literal strings.
fn escape_pdf_string(bytes: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(bytes.len());
    for &b in bytes {
        match b {
            b'\\' => result.extend_from_slice(b"\\\\"),
            b'(' => result.extend_from_slice(b"\\("),
            b')' => result.extend_from_slice(b"\\)"),
            b'\r' => result.extend_from_slice(b"\\r"),
            b'\n' => result.extend_from_slice(b"\\n"),
            _ => result.push(b),
        }
    }
    result
}

//! Configuration for form processing.

/// Form processing configuration.
#[derive(Debug, Clone)]
pub struct FormConfig {
    /// Base font used for default appearance strings.
    pub default_font: String,

    /// Font size for default appearance strings (0 means auto size).
    pub default_font_size: f32,

    /// Inset between the widget border and synthesized text.
    pub text_padding: f32,

    /// Maximum number of links followed when resolving references or parents.
    pub max_resolve_depth: u32,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl FormConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            default_font: "Helvetica".to_string(),
            default_font_size: 0.0,
            text_padding: 2.0,
            max_resolve_depth: 32,
        }
    }

    /// Set the base font for default appearance strings.
    pub fn with_default_font(mut self, font: impl Into<String>) -> Self {
        self.default_font = font.into();
        self
    }

    /// Set the font size for default appearance strings.
    pub fn with_default_font_size(mut self, size: f32) -> Self {
        self.default_font_size = size;
        self
    }

    /// Set the text inset used by appearance synthesis.
    pub fn with_text_padding(mut self, padding: f32) -> Self {
        self.text_padding = padding;
        self
    }

    /// Set the maximum reference/parent chain depth.
    pub fn with_max_resolve_depth(mut self, depth: u32) -> Self {
        self.max_resolve_depth = depth;
        self
    }
}

//! Default appearance strings (`/DA`).
//!
//! A DA string is a content stream fragment such as `/Helv 0 Tf 0 g`: one
//! `Tf` operator naming a font resource and size, plus an optional colour
//! operator. A size of 0 means the size is derived from the widget.
//!
//! PDF Spec: ISO 32000-1:2008, Section 12.7.3.3 (Variable Text)

use crate::error::{Error, Result};

/// Parsed default appearance string.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultAppearance {
    /// Font resource name in `/DR /Font`, without the leading slash
    pub font_resource: String,
    /// Font size in points (0 = auto)
    pub font_size: f32,
    /// Colour operator with its operands, e.g. `0 g` or `1 0 0 rg`
    pub color_ops: String,
}

impl DefaultAppearance {
    /// Black text in the given font.
    pub fn new(font_resource: impl Into<String>, font_size: f32) -> Self {
        Self {
            font_resource: font_resource.into(),
            font_size,
            color_ops: "0 g".to_string(),
        }
    }

    /// Set an RGB text colour.
    pub fn with_rgb(mut self, r: f32, g: f32, b: f32) -> Self {
        self.color_ops = format!("{} {} {} rg", r, g, b);
        self
    }

    /// Parse a DA string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPdf`] if the string has no well-formed `Tf`
    /// operator.
    ///
    /// # Examples
    ///
    /// ```
    /// use acroform_oxide::forms::DefaultAppearance;
    ///
    /// let da = DefaultAppearance::parse("/Helv 12 Tf 1 0 0 rg")?;
    /// assert_eq!(da.font_resource, "Helv");
    /// assert_eq!(da.font_size, 12.0);
    /// assert_eq!(da.color_ops, "1 0 0 rg");
    /// # Ok::<(), acroform_oxide::error::Error>(())
    /// ```
    pub fn parse(da: &str) -> Result<Self> {
        let mut operands: Vec<&str> = Vec::new();
        let mut font: Option<(String, f32)> = None;
        let mut color_ops = String::new();

        for token in da.split_ascii_whitespace() {
            match token {
                "Tf" => {
                    font = match operands.as_slice() {
                        [.., name, size] => {
                            let name = name.strip_prefix('/').ok_or_else(|| {
                                Error::InvalidPdf(format!("DA font operand is not a name: {}", name))
                            })?;
                            let size = size.parse::<f32>().map_err(|_| {
                                Error::InvalidPdf(format!("DA font size is not a number: {}", size))
                            })?;
                            Some((name.to_string(), size))
                        },
                        _ => return Err(Error::InvalidPdf(format!("DA Tf without operands: {}", da))),
                    };
                    operands.clear();
                },
                "g" | "rg" | "k" => {
                    operands.push(token);
                    color_ops = operands.join(" ");
                    operands.clear();
                },
                _ if token.starts_with('/') || token.parse::<f32>().is_ok() => operands.push(token),
                _ => operands.clear(),
            }
        }

        let (font_resource, font_size) =
            font.ok_or_else(|| Error::InvalidPdf(format!("DA string has no Tf operator: {}", da)))?;
        Ok(Self {
            font_resource,
            font_size,
            color_ops,
        })
    }

    /// Render back to a DA string.
    pub fn to_da_string(&self) -> String {
        if self.color_ops.is_empty() {
            format!("/{} {} Tf", self.font_resource, self.font_size)
        } else {
            format!("/{} {} Tf {}", self.font_resource, self.font_size, self.color_ops)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_gray() {
        let da = DefaultAppearance::parse("/Helv 0 Tf 0 g").unwrap();
        assert_eq!(da, DefaultAppearance::new("Helv", 0.0));
    }

    #[test]
    fn test_parse_color_before_font() {
        let da = DefaultAppearance::parse("0 0 1 rg /F1 9.5 Tf").unwrap();
        assert_eq!(da.font_resource, "F1");
        assert_eq!(da.font_size, 9.5);
        assert_eq!(da.color_ops, "0 0 1 rg");
    }

    #[test]
    fn test_parse_without_color() {
        let da = DefaultAppearance::parse("/Cour 10 Tf").unwrap();
        assert_eq!(da.color_ops, "");
        assert_eq!(da.to_da_string(), "/Cour 10 Tf");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(DefaultAppearance::parse("0 g"), Err(Error::InvalidPdf(_))));
        assert!(matches!(DefaultAppearance::parse("Tf"), Err(Error::InvalidPdf(_))));
        assert!(matches!(DefaultAppearance::parse("Helv 12 Tf"), Err(Error::InvalidPdf(_))));
    }

    #[test]
    fn test_to_da_string() {
        assert_eq!(DefaultAppearance::new("F1", 0.0).to_da_string(), "/F1 0 Tf 0 g");
        assert_eq!(
            DefaultAppearance::new("F2", 12.0).with_rgb(1.0, 0.0, 0.5).to_da_string(),
            "/F2 12 Tf 1 0 0.5 rg"
        );
    }
}

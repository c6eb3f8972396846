//! Geometric primitives for widget placement.

use crate::object::Object;

/// A rectangle in PDF user space.
///
/// Stored as lower-left corner plus size; PDF files store rectangles as
/// `[llx lly urx ury]`, see [`Rect::to_pdf_array`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X coordinate of lower-left corner
    pub x: f32,
    /// Y coordinate of lower-left corner
    pub y: f32,
    /// Width of rectangle
    pub width: f32,
    /// Height of rectangle
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle from position and dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use acroform_oxide::geometry::Rect;
    ///
    /// let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
    /// assert_eq!(rect.width, 100.0);
    /// assert_eq!(rect.height, 50.0);
    /// ```
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from two corner points.
    ///
    /// Corners may be given in any order; the result is normalized.
    ///
    /// # Examples
    ///
    /// ```
    /// use acroform_oxide::geometry::Rect;
    ///
    /// let rect = Rect::from_points(110.0, 70.0, 10.0, 20.0);
    /// assert_eq!(rect.x, 10.0);
    /// assert_eq!(rect.y, 20.0);
    /// assert_eq!(rect.width, 100.0);
    /// assert_eq!(rect.height, 50.0);
    /// ```
    pub fn from_points(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            x: x0.min(x1),
            y: y0.min(y1),
            width: (x1 - x0).abs(),
            height: (y1 - y0).abs(),
        }
    }

    /// Parse a PDF rectangle array (`[llx lly urx ury]`).
    ///
    /// Returns `None` unless the object is an array of four numbers.
    pub fn from_pdf_array(obj: &Object) -> Option<Self> {
        let arr = obj.as_array()?;
        if arr.len() != 4 {
            return None;
        }
        let mut coords = [0.0f32; 4];
        for (slot, value) in coords.iter_mut().zip(arr) {
            *slot = value.as_real()? as f32;
        }
        Some(Self::from_points(coords[0], coords[1], coords[2], coords[3]))
    }

    /// Convert to a PDF rectangle array (`[llx lly urx ury]`).
    pub fn to_pdf_array(&self) -> Object {
        Object::Array(vec![
            Object::Real(self.x as f64),
            Object::Real(self.y as f64),
            Object::Real((self.x + self.width) as f64),
            Object::Real((self.y + self.height) as f64),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_array_round_trip() {
        let rect = Rect::new(72.0, 700.0, 150.0, 20.0);
        let parsed = Rect::from_pdf_array(&rect.to_pdf_array()).unwrap();
        assert_eq!(parsed, rect);
    }

    #[test]
    fn test_from_pdf_array_accepts_integers() {
        let arr = Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(100),
            Object::Integer(20),
        ]);
        assert_eq!(Rect::from_pdf_array(&arr), Some(Rect::new(0.0, 0.0, 100.0, 20.0)));
    }

    #[test]
    fn test_from_pdf_array_rejects_malformed() {
        assert!(Rect::from_pdf_array(&Object::Array(vec![Object::Integer(1)])).is_none());
        assert!(Rect::from_pdf_array(&Object::Null).is_none());
        let with_name = Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::name("Oops"),
            Object::Integer(1),
        ]);
        assert!(Rect::from_pdf_array(&with_name).is_none());
    }
}

#![forbid(unsafe_code)]

//! Geometric primitives.

use serde::{Deserialize, Serialize};

/// A pixel rectangle snapshot of an element at a point in time.
///
/// Uses page coordinates (origin at top-left). Values are not validated:
/// negative widths produced by inverted edges are carried through as-is.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeographyRect {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
    /// Top edge.
    pub top: f64,
    /// Left edge.
    pub left: f64,
}

/// Geometry of the host's scrollable viewport.
pub type PlanetRect = GeographyRect;

impl GeographyRect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(width: f64, height: f64, top: f64, left: f64) -> Self {
        Self {
            width,
            height,
            top,
            left,
        }
    }

    /// Create a rectangle spanning `[left, left + width)` horizontally with
    /// no vertical extent.
    #[inline]
    pub const fn horizontal(left: f64, width: f64) -> Self {
        Self::new(width, 0.0, 0.0, left)
    }

    /// Right edge (exclusive).
    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Keep the horizontal extent, replace the vertical one.
    #[inline]
    #[must_use]
    pub const fn with_vertical(self, top: f64, height: f64) -> Self {
        Self {
            top,
            height,
            ..self
        }
    }

    /// Absolute horizontal distance between the left edges of two rects.
    #[inline]
    pub fn left_drift(&self, other: &GeographyRect) -> f64 {
        (self.left - other.left).abs()
    }

    /// Check if the rectangle has no visible area.
    ///
    /// Negative extents count as empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::GeographyRect;

    #[test]
    fn edges_follow_extent() {
        let rect = GeographyRect::new(40.0, 100.0, 10.0, 60.0);
        assert_eq!(rect.right(), 100.0);
        assert_eq!(rect.bottom(), 110.0);
    }

    #[test]
    fn with_vertical_keeps_horizontal_extent() {
        let sky = GeographyRect::new(300.0, 5.0, 2.0, 25.0);
        let forced = sky.with_vertical(10.0, 100.0);
        assert_eq!(forced, GeographyRect::new(300.0, 100.0, 10.0, 25.0));
    }

    #[test]
    fn horizontal_has_no_height() {
        let band = GeographyRect::horizontal(50.0, 25.0);
        assert_eq!(band.left, 50.0);
        assert_eq!(band.width, 25.0);
        assert!(band.is_empty());
    }

    #[test]
    fn left_drift_is_symmetric() {
        let a = GeographyRect::new(10.0, 10.0, 0.0, 100.0);
        let b = GeographyRect::new(10.0, 10.0, 0.0, 140.0);
        assert_eq!(a.left_drift(&b), 40.0);
        assert_eq!(b.left_drift(&a), 40.0);
    }

    #[test]
    fn negative_width_is_empty_but_preserved() {
        let rect = GeographyRect::new(-20.0, 10.0, 0.0, 5.0);
        assert!(rect.is_empty());
        assert_eq!(rect.width, -20.0);
        assert_eq!(rect.right(), -15.0);
    }

    #[test]
    fn serde_uses_field_names() {
        let rect = GeographyRect::new(1.0, 2.0, 3.0, 4.0);
        let json = serde_json::to_string(&rect).expect("serialize");
        assert_eq!(json, r#"{"width":1.0,"height":2.0,"top":3.0,"left":4.0}"#);
    }
}

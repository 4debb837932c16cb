//! Geometry primitives: rectangles and edge insets.
//!
//! All coordinates are in the skin's logical units (the canvas is
//! `base_width` wide regardless of device pixels).

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

/// Edge insets for all four sides.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl Insets {
    /// Zero insets on all sides.
    pub const ZERO: Self = Self {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    /// Compute the inner rectangle after applying insets.
    ///
    /// Spans are clamped at zero so oversized insets can never invert
    /// geometry.
    pub fn inner(&self, rect: Rect) -> Rect {
        Rect {
            x: rect.x + self.left,
            y: rect.y + self.top,
            w: (rect.w - self.left - self.right).max(0.0),
            h: (rect.h - self.top - self.bottom).max(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inner_rect_applies_all_sides() {
        let insets = Insets {
            top: 5.0,
            left: 5.0,
            bottom: 5.0,
            right: 5.0,
        };
        let inner = insets.inner(Rect::new(0.0, 0.0, 300.0, 240.0));
        assert_eq!(inner, Rect::new(5.0, 5.0, 290.0, 230.0));
    }

    #[test]
    fn oversized_insets_clamp_to_zero() {
        let insets = Insets {
            left: 1000.0,
            ..Insets::ZERO
        };
        let inner = insets.inner(Rect::new(0.0, 0.0, 300.0, 50.0));
        assert_eq!(inner.w, 0.0);
        assert!(inner.h > 0.0);
    }

    #[test]
    fn zero_insets_are_identity() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(Insets::ZERO.inner(rect), rect);
    }
}

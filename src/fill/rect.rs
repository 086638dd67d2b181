//! Bounding rectangles of filled areas.
//!
//! [`Rect`] is the canonical form used everywhere inside the crate: inclusive
//! minimum, exclusive maximum. [`FillBox`] is the inclusive-min + extent form
//! reported by the single-seed engine and accepted by the painter.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle `[xmin, xmax) x [ymin, ymax)`.
///
/// A rect with no area is empty and acts as the identity of [`Rect::union`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub xmin: usize,
    pub ymin: usize,
    pub xmax: usize,
    pub ymax: usize,
}

/// Rectangle as `{x, y, width, height}` with an inclusive origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FillBox {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    pub const fn new(xmin: usize, ymin: usize, xmax: usize, ymax: usize) -> Self {
        Self { xmin, ymin, xmax, ymax }
    }

    /// Rect covering the single cell `(x, y)`.
    pub const fn cell(x: usize, y: usize) -> Self {
        Self::new(x, y, x + 1, y + 1)
    }

    /// Rect covering the inclusive run `[left, right]` on row `y`.
    pub const fn run(y: usize, left: usize, right: usize) -> Self {
        Self::new(left, y, right + 1, y + 1)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xmin >= self.xmax || self.ymin >= self.ymax
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.xmax.saturating_sub(self.xmin)
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.ymax.saturating_sub(self.ymin)
    }

    pub fn area(&self) -> usize {
        self.width() * self.height()
    }

    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.xmin && x < self.xmax && y >= self.ymin && y < self.ymax
    }

    /// Smallest rect containing both. Empty operands are ignored.
    pub fn union(&self, other: &Rect) -> Rect {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        Rect {
            xmin: self.xmin.min(other.xmin),
            ymin: self.ymin.min(other.ymin),
            xmax: self.xmax.max(other.xmax),
            ymax: self.ymax.max(other.ymax),
        }
    }

    /// Grow to include the inclusive run `[left, right]` on row `y`.
    #[inline]
    pub fn include_run(&mut self, y: usize, left: usize, right: usize) {
        *self = self.union(&Rect::run(y, left, right));
    }

    pub fn to_fill_box(&self) -> FillBox {
        FillBox {
            x: self.xmin,
            y: self.ymin,
            width: self.width(),
            height: self.height(),
        }
    }

    /// `(xmin, ymin, xmax, ymax)` with both maxima inclusive, or `None` when empty.
    pub fn inclusive_corners(&self) -> Option<(usize, usize, usize, usize)> {
        if self.is_empty() {
            None
        } else {
            Some((self.xmin, self.ymin, self.xmax - 1, self.ymax - 1))
        }
    }
}

impl FillBox {
    /// Exclusive-max form, or `None` if a far edge does not fit in `usize`.
    pub fn to_rect(&self) -> Option<Rect> {
        Some(Rect::new(
            self.x,
            self.y,
            self.x.checked_add(self.width)?,
            self.y.checked_add(self.height)?,
        ))
    }
}

impl From<Rect> for FillBox {
    fn from(r: Rect) -> Self {
        r.to_fill_box()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_of_disjoint_boxes() {
        let a = FillBox { x: 0, y: 0, width: 2, height: 2 }.to_rect().unwrap();
        let b = FillBox { x: 5, y: 5, width: 3, height: 3 }.to_rect().unwrap();

        assert_eq!(a.union(&b), Rect::new(0, 0, 8, 8));
    }

    #[test]
    fn test_empty_is_union_identity() {
        let r = Rect::new(3, 4, 6, 9);
        assert_eq!(Rect::default().union(&r), r);
        assert_eq!(r.union(&Rect::default()), r);
        assert!(Rect::default().union(&Rect::default()).is_empty());
    }

    #[test]
    fn test_fill_box_conversion() {
        let r = Rect::new(2, 3, 7, 4);
        let b = r.to_fill_box();
        assert_eq!(b, FillBox { x: 2, y: 3, width: 5, height: 1 });
        assert_eq!(b.to_rect(), Some(r));
    }

    #[test]
    fn test_fill_box_past_usize_has_no_rect() {
        let b = FillBox { x: usize::MAX, y: 0, width: 2, height: 1 };
        assert_eq!(b.to_rect(), None);
        let b = FillBox { x: 0, y: usize::MAX - 1, width: 1, height: 2 };
        assert_eq!(b.to_rect(), None);
    }

    #[test]
    fn test_include_run_grows() {
        let mut r = Rect::cell(4, 4);
        r.include_run(6, 1, 9);
        assert_eq!(r, Rect::new(1, 4, 10, 7));
        assert!(r.contains(9, 6));
        assert!(!r.contains(10, 6));
        assert_eq!(r.inclusive_corners(), Some((1, 4, 9, 6)));
    }
}

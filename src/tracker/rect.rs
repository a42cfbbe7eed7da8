/// Axis-aligned bounding box in LTRB form.
///
/// Coordinates follow image conventions: `top` is the smaller y value.
/// Nothing stops `right < left` or `bottom < top`; such a box is
/// *inverted* and is treated as empty geometry (see [`Rect::is_inverted`]).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    /// Create a Rect from its edges (left, top, right, bottom).
    #[inline]
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a Rect from TLWH format (top-left x, top-left y, width, height).
    #[inline]
    pub fn from_tlwh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    /// Convert to TLWH format: (x, y, width, height).
    #[inline]
    pub fn to_tlwh(&self) -> [f32; 4] {
        [self.left, self.top, self.width(), self.height()]
    }

    /// Convert to LTRB format: (left, top, right, bottom).
    #[inline]
    pub fn to_ltrb(&self) -> [f32; 4] {
        [self.left, self.top, self.right, self.bottom]
    }

    /// Horizontal extent. Negative for inverted boxes.
    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Vertical extent. Negative for inverted boxes.
    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Get the center point of the bounding box.
    #[inline]
    pub fn center(&self) -> (f32, f32) {
        (
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Get the area of the bounding box. Inverted boxes have zero area.
    #[inline]
    pub fn area(&self) -> f32 {
        if self.is_inverted() {
            0.0
        } else {
            self.width() * self.height()
        }
    }

    /// True when an edge is non-finite or the box extends backwards on either axis.
    pub fn is_inverted(&self) -> bool {
        let finite = self.left.is_finite()
            && self.top.is_finite()
            && self.right.is_finite()
            && self.bottom.is_finite();
        !finite || self.right < self.left || self.bottom < self.top
    }

    /// Overlap test with a proportional slack.
    ///
    /// Each axis is shrunk by `ratio` times the smaller of the two extents
    /// before checking for separation, so `ratio = 0` is a plain closed
    /// interval test (touching edges overlap). Inverted boxes never overlap
    /// anything, themselves included.
    pub fn overlaps(&self, other: &Rect, ratio: f32) -> bool {
        if self.is_inverted() || other.is_inverted() {
            return false;
        }

        let x_slack = ratio * self.width().min(other.width());
        let y_slack = ratio * self.height().min(other.height());

        let x_separated = self.right.min(other.right) - x_slack < self.left.max(other.left);
        let y_separated = self.bottom.min(other.bottom) - y_slack < self.top.max(other.top);

        !(x_separated || y_separated)
    }
}

use ndarray::Array2;

/// Pairwise overlap matrix for a set of boxes.
///
/// Returns a symmetric matrix of shape (N, N); entry `[i, j]` is
/// `boxes[i].overlaps(&boxes[j], ratio)`.
pub fn overlap_matrix(boxes: &[Rect], ratio: f32) -> Array2<bool> {
    let n = boxes.len();
    let mut overlaps = Array2::from_elem((n, n), false);
    for i in 0..n {
        for j in i..n {
            let hit = boxes[i].overlaps(&boxes[j], ratio);
            overlaps[[i, j]] = hit;
            overlaps[[j, i]] = hit;
        }
    }
    overlaps
}

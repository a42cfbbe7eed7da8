//! Affine mapping from frame space to canvas space.
//!
//! Transforms are 3x3 homogeneous matrices composed in application order:
//! each step is pre-multiplied onto the matrix built so far.

use nalgebra::{Matrix3, Point2, Vector2};

use crate::error::TrackerError;
use crate::tracker::frame_config::{FrameConfig, Orientation};
use crate::tracker::rect::Rect;

/// Where the scaled frame sits inside a larger canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CanvasAnchor {
    /// Top-left corner of the canvas; spare room ends up right or below.
    #[default]
    Origin,
    /// Centered on both axes.
    Center,
}

/// 2D affine transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTransform {
    matrix: Matrix3<f32>,
}

impl Default for FrameTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl FrameTransform {
    pub fn identity() -> Self {
        Self {
            matrix: Matrix3::identity(),
        }
    }

    pub fn from_matrix(matrix: Matrix3<f32>) -> Self {
        Self { matrix }
    }

    pub fn matrix(&self) -> &Matrix3<f32> {
        &self.matrix
    }

    /// Apply a translation after this transform.
    pub fn then_translate(self, dx: f32, dy: f32) -> Self {
        Self {
            matrix: Matrix3::new_translation(&Vector2::new(dx, dy)) * self.matrix,
        }
    }

    /// Apply a per-axis scale about the origin after this transform.
    pub fn then_scale(self, sx: f32, sy: f32) -> Self {
        Self {
            matrix: Matrix3::new_nonuniform_scaling(&Vector2::new(sx, sy)) * self.matrix,
        }
    }

    /// Apply a clockwise (in y-down image space) quarter-turn rotation about
    /// the origin after this transform.
    pub fn then_rotate(self, orientation: Orientation) -> Self {
        let (c, s) = orientation.cos_sin();
        #[rustfmt::skip]
        let rotation = Matrix3::new(
            c,   -s,  0.0,
            s,   c,   0.0,
            0.0, 0.0, 1.0,
        );
        Self {
            matrix: rotation * self.matrix,
        }
    }

    /// Transform mapping a `src` sized image, rotated by `orientation`, onto a
    /// `dst` sized image.
    ///
    /// With a rotation the source center is moved to the origin, rotated, and
    /// moved to the destination center. Each axis is scaled to fill `dst`;
    /// with `maintain_aspect` both axes use the larger of the two factors.
    pub fn between(
        src: (f32, f32),
        dst: (f32, f32),
        orientation: Orientation,
        maintain_aspect: bool,
    ) -> Self {
        let (src_w, src_h) = src;
        let (dst_w, dst_h) = dst;
        let rotated = orientation != Orientation::Deg0;

        let mut transform = Self::identity();
        if rotated {
            transform = transform
                .then_translate(-src_w / 2.0, -src_h / 2.0)
                .then_rotate(orientation);
        }

        let (in_w, in_h) = if orientation.is_transposed() {
            (src_h, src_w)
        } else {
            (src_w, src_h)
        };
        if in_w != dst_w || in_h != dst_h {
            let sx = dst_w / in_w;
            let sy = dst_h / in_h;
            transform = if maintain_aspect {
                let s = sx.max(sy);
                transform.then_scale(s, s)
            } else {
                transform.then_scale(sx, sy)
            };
        }

        if rotated {
            transform = transform.then_translate(dst_w / 2.0, dst_h / 2.0);
        }
        transform
    }

    /// Uniform scale that fits the rotated frame inside the canvas.
    pub fn fit_multiplier(frame: &FrameConfig, canvas_width: u32, canvas_height: u32) -> f32 {
        let (eff_w, eff_h) = frame.effective_size();
        (canvas_height as f32 / eff_h as f32).min(canvas_width as f32 / eff_w as f32)
    }

    /// Frame-to-canvas projection: rotate by the sensor orientation, scale by
    /// [`fit_multiplier`](Self::fit_multiplier), place according to `anchor`.
    pub fn frame_to_canvas(
        frame: &FrameConfig,
        canvas_width: u32,
        canvas_height: u32,
        anchor: CanvasAnchor,
    ) -> Self {
        let multiplier = Self::fit_multiplier(frame, canvas_width, canvas_height);
        let (eff_w, eff_h) = frame.effective_size();
        let dst_w = multiplier * eff_w as f32;
        let dst_h = multiplier * eff_h as f32;

        let transform = Self::between(
            (frame.width as f32, frame.height as f32),
            (dst_w, dst_h),
            frame.orientation,
            false,
        );
        match anchor {
            CanvasAnchor::Origin => transform,
            CanvasAnchor::Center => transform.then_translate(
                (canvas_width as f32 - dst_w) / 2.0,
                (canvas_height as f32 - dst_h) / 2.0,
            ),
        }
    }

    pub fn inverse(&self) -> Result<Self, TrackerError> {
        self.matrix
            .try_inverse()
            .map(Self::from_matrix)
            .ok_or(TrackerError::SingularTransform)
    }

    pub fn map_point(&self, x: f32, y: f32) -> (f32, f32) {
        let p = self.matrix.transform_point(&Point2::new(x, y));
        (p.x, p.y)
    }

    /// Map the four corners and return their bounding box.
    pub fn map_rect(&self, rect: &Rect) -> Rect {
        let corners = [
            self.map_point(rect.left, rect.top),
            self.map_point(rect.right, rect.top),
            self.map_point(rect.left, rect.bottom),
            self.map_point(rect.right, rect.bottom),
        ];
        let mut mapped = Rect::new(f32::INFINITY, f32::INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY);
        for (x, y) in corners {
            mapped.left = mapped.left.min(x);
            mapped.top = mapped.top.min(y);
            mapped.right = mapped.right.max(x);
            mapped.bottom = mapped.bottom.max(y);
        }
        mapped
    }
}

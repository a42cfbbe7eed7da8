//! Builder for creating Detection objects from various box formats.

use crate::tracker::{Detection, Rect};

/// Builder for creating `Detection` objects from various input formats.
#[derive(Debug, Clone, Default)]
pub struct DetectionBuilder {
    label: String,
    left: f32,
    top: f32,
    right: f32,
    bottom: f32,
    confidence: f32,
}

impl DetectionBuilder {
    /// Create a new detection builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the category label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set bounding box by its edges (left, top, right, bottom).
    pub fn ltrb(mut self, left: f32, top: f32, right: f32, bottom: f32) -> Self {
        self.left = left;
        self.top = top;
        self.right = right;
        self.bottom = bottom;
        self
    }

    /// Set bounding box in XYWH format (center_x, center_y, width, height).
    pub fn xywh(mut self, cx: f32, cy: f32, w: f32, h: f32) -> Self {
        self.left = cx - w / 2.0;
        self.top = cy - h / 2.0;
        self.right = cx + w / 2.0;
        self.bottom = cy + h / 2.0;
        self
    }

    /// Set bounding box in TLWH format (left, top, width, height).
    pub fn tlwh(mut self, l: f32, t: f32, w: f32, h: f32) -> Self {
        self.left = l;
        self.top = t;
        self.right = l + w;
        self.bottom = t + h;
        self
    }

    /// Set bounding box from normalized `[ymin, xmin, ymax, xmax]` coordinates,
    /// as emitted by TFLite SSD models, scaled to an `input_size` square.
    pub fn normalized_yxyx(self, bbox: [f32; 4], input_size: f32) -> Self {
        let [ymin, xmin, ymax, xmax] = bbox;
        self.ltrb(
            xmin * input_size,
            ymin * input_size,
            xmax * input_size,
            ymax * input_size,
        )
    }

    /// Set the confidence score.
    pub fn confidence(mut self, confidence: f32) -> Self {
        self.confidence = confidence;
        self
    }

    /// Build the final `Detection`.
    pub fn build(self) -> Detection {
        Detection::new(
            self.label,
            self.confidence,
            Rect::new(self.left, self.top, self.right, self.bottom),
        )
    }
}

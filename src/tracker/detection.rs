//! Detection input for the tracker.

use crate::tracker::rect::Rect;

/// One model output for a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    /// Category name as produced by the model's label map
    pub label: String,
    /// Detection confidence score in [0, 1]
    pub confidence: f32,
    /// Bounding box in frame pixel coordinates
    pub rect: Rect,
}

impl Detection {
    pub fn new(label: impl Into<String>, confidence: f32, rect: Rect) -> Self {
        Self {
            label: label.into(),
            confidence,
            rect,
        }
    }

    /// True when both detections carry the same label and their boxes overlap.
    pub fn duplicates(&self, other: &Detection, ratio: f32) -> bool {
        self.label == other.label && self.rect.overlaps(&other.rect, ratio)
    }
}

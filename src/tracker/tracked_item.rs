//! Per-frame tracked item.

use crate::tracker::detection::Detection;
use crate::tracker::rect::Rect;

/// A detection that survived filtering, tagged with its palette slot.
///
/// Items are rebuilt on every update; nothing links an item to the one at
/// the same position in the previous frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedItem {
    pub label: String,
    pub confidence: f32,
    /// Frame-space box, an owned copy of the detection's rect
    pub rect: Rect,
    /// Position of this item in the frame's surviving sequence
    pub color_index: usize,
}

impl TrackedItem {
    pub fn from_detection(detection: &Detection, color_index: usize) -> Self {
        Self {
            label: detection.label.clone(),
            confidence: detection.confidence,
            rect: detection.rect,
            color_index,
        }
    }
}

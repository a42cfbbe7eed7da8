//! Per-frame filter pipeline: duplicate suppression, size filter, capacity cap.
//!
//! Everything here is pure. [`filter_detections`] chains the steps and tags
//! survivors with their palette slot.

use tracing::{debug, trace};

use crate::tracker::detection::Detection;
use crate::tracker::rect::overlap_matrix;
use crate::tracker::tracked_item::TrackedItem;

/// Minimum width and height, in frame pixels, for a box to be tracked.
pub const MIN_SIZE: f32 = 16.0;

/// Which member of an overlapping same-label pair is dropped.
///
/// Survival depends only on input order. Confidence and area are never
/// consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SuppressionPolicy {
    /// Drop a detection if any earlier same-label detection overlaps it.
    #[default]
    KeepFirst,
    /// Drop a detection if any later same-label detection overlaps it.
    KeepLast,
}

/// Configuration for the filter pipeline.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterConfig {
    pub min_size: f32,
    pub overlap_ratio: f32,
    pub policy: SuppressionPolicy,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_size: MIN_SIZE,
            overlap_ratio: 0.0,
            policy: SuppressionPolicy::KeepFirst,
        }
    }
}

/// Remove same-label overlapping duplicates, preserving input order.
///
/// The comparison runs against every other detection in the batch, dropped
/// or not, so a chain `a ~ b ~ c` under `KeepFirst` keeps only `a` even when
/// `a` and `c` do not touch.
pub fn suppress_duplicates<'a>(
    detections: &'a [Detection],
    ratio: f32,
    policy: SuppressionPolicy,
) -> Vec<&'a Detection> {
    let rects: Vec<_> = detections.iter().map(|d| d.rect).collect();
    let overlaps = overlap_matrix(&rects, ratio);
    let n = detections.len();

    detections
        .iter()
        .enumerate()
        .filter(|&(i, det)| {
            let mut rivals = match policy {
                SuppressionPolicy::KeepFirst => 0..i,
                SuppressionPolicy::KeepLast => i + 1..n,
            };
            let duplicate = rivals.any(|j| overlaps[[i, j]] && detections[j].label == det.label);
            if duplicate {
                trace!(index = i, label = %det.label, "dropping overlapping duplicate");
            }
            !duplicate
        })
        .map(|(_, det)| det)
        .collect()
}

/// True when both sides of the box reach `min_size`. NaN and inverted boxes fail.
pub fn meets_min_size(detection: &Detection, min_size: f32) -> bool {
    let rect = &detection.rect;
    rect.width() >= min_size && rect.height() >= min_size
}

/// Run suppression, the size filter and the capacity cap, then assign
/// palette slots by position.
pub fn filter_detections(
    detections: &[Detection],
    config: &FilterConfig,
    capacity: usize,
) -> Vec<TrackedItem> {
    let unique = suppress_duplicates(detections, config.overlap_ratio, config.policy);
    let suppressed = detections.len() - unique.len();

    let sized: Vec<&Detection> = unique
        .into_iter()
        .filter(|det| {
            let keep = meets_min_size(det, config.min_size);
            if !keep {
                trace!(label = %det.label, rect = ?det.rect, "dropping undersized detection");
            }
            keep
        })
        .collect();
    let undersized = detections.len() - suppressed - sized.len();

    let tracked: Vec<TrackedItem> = sized
        .into_iter()
        .take(capacity)
        .enumerate()
        .map(|(index, det)| TrackedItem::from_detection(det, index))
        .collect();

    debug!(
        input = detections.len(),
        suppressed,
        undersized,
        tracked = tracked.len(),
        "filtered detection batch"
    );
    tracked
}

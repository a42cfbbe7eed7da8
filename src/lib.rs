//! Detection post-processing for live camera overlays.
//!
//! A [`MultiBoxTracker`] takes the raw detections of one frame, drops
//! same-label duplicates and boxes that are too small, assigns each survivor
//! a palette slot, and projects the survivors onto a differently sized and
//! rotated canvas when asked to render.
//!
//! ```
//! use multibox_rs::{CategoryVisibility, Detection, MultiBoxTracker, Rect, TrackerConfig};
//!
//! let tracker = MultiBoxTracker::new(TrackerConfig::default());
//! tracker.configure(640, 480, 0).unwrap();
//! tracker
//!     .update(&[Detection::new("car", 0.9, Rect::new(0.0, 0.0, 100.0, 100.0))])
//!     .unwrap();
//!
//! let visibility = CategoryVisibility::from_iter([("car", true)]);
//! let commands = tracker.render(640, 480, &visibility).unwrap();
//! assert_eq!(commands.len(), 1);
//! ```

pub mod error;
pub mod integration;
pub mod tracker;

pub use error::TrackerError;
pub use integration::{
    DetectionBuilder, DetectionSource, IntoDetections, PipelineConfig, PipelineError,
    TrackerPipeline,
};
pub use tracker::{
    CanvasAnchor, CategoryStyle, CategoryTable, CategoryVisibility, Color, Detection, DrawCommand,
    FilterConfig, FrameConfig, FrameTransform, MultiBoxTracker, Orientation, Palette, Rect,
    SuppressionPolicy, TrackState, TrackedItem, TrackerConfig,
};

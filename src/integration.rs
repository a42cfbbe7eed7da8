//! Integration module for connecting object detection backends with the tracker.
//!
//! The tracker itself never runs a model. This module defines the boundary a
//! backend implements and a small pipeline that gates, maps and forwards its
//! output.

mod builder;
mod detector;
mod pipeline;

pub use builder::DetectionBuilder;
pub use detector::{DetectionSource, IntoDetections};
pub use pipeline::{DEFAULT_MIN_CONFIDENCE, PipelineConfig, PipelineError, TrackerPipeline};

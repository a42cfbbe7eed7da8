//! TrackerPipeline for feeding detector output into a shared tracker.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::error::TrackerError;
use crate::tracker::{Detection, FrameTransform, MultiBoxTracker};

use super::DetectionSource;

/// Minimum confidence a detection needs before it reaches the tracker.
pub const DEFAULT_MIN_CONFIDENCE: f32 = 0.5;

/// Configuration for the TrackerPipeline.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub min_confidence: f32,
    /// Maps model-input coordinates back into frame coordinates
    pub crop_to_frame: Option<FrameTransform>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            crop_to_frame: None,
        }
    }
}

/// Error returned by [`TrackerPipeline::process_frame`].
#[derive(Debug, Error)]
pub enum PipelineError<E> {
    #[error("detection failed: {0}")]
    Detection(E),
    #[error(transparent)]
    Tracker(#[from] TrackerError),
}

/// Runs a `DetectionSource` on each frame and hands the confident results,
/// mapped into frame space, to a tracker shared with the renderer.
pub struct TrackerPipeline<D: DetectionSource> {
    detector: D,
    tracker: Arc<MultiBoxTracker>,
    config: PipelineConfig,
}

impl<D: DetectionSource> TrackerPipeline<D> {
    /// Create a new pipeline with the given detector and shared tracker.
    pub fn new(detector: D, tracker: Arc<MultiBoxTracker>) -> Self {
        Self::with_config(detector, tracker, PipelineConfig::default())
    }

    pub fn with_config(detector: D, tracker: Arc<MultiBoxTracker>, config: PipelineConfig) -> Self {
        Self {
            detector,
            tracker,
            config,
        }
    }

    /// Set the confidence gate.
    pub fn with_min_confidence(mut self, min_confidence: f32) -> Self {
        self.config.min_confidence = min_confidence;
        self
    }

    /// Use the inverse of the frame-to-model-input transform to map
    /// detections back into frame space.
    pub fn with_frame_to_crop(mut self, frame_to_crop: FrameTransform) -> Result<Self, TrackerError> {
        self.config.crop_to_frame = Some(frame_to_crop.inverse()?);
        Ok(self)
    }

    /// Process a single frame and return the number of tracked items.
    ///
    /// # Arguments
    /// * `input` - Raw image bytes
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    pub fn process_frame(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<usize, PipelineError<D::Error>> {
        let raw = self
            .detector
            .detect(input, width, height)
            .map_err(PipelineError::Detection)?;
        let total = raw.len();

        let detections: Vec<Detection> = raw
            .into_iter()
            .filter(|d| d.confidence >= self.config.min_confidence)
            .map(|mut d| {
                if let Some(transform) = &self.config.crop_to_frame {
                    d.rect = transform.map_rect(&d.rect);
                }
                d
            })
            .collect();
        debug!(
            total,
            confident = detections.len(),
            min_confidence = self.config.min_confidence,
            "gated detections"
        );

        Ok(self.tracker.update(&detections)?)
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Get a reference to the underlying detector.
    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Get a mutable reference to the underlying detector.
    pub fn detector_mut(&mut self) -> &mut D {
        &mut self.detector
    }

    /// Get the shared tracker.
    pub fn tracker(&self) -> &Arc<MultiBoxTracker> {
        &self.tracker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::{Orientation, Rect};

    struct MockDetector {
        detections: Vec<Detection>,
    }

    impl DetectionSource for MockDetector {
        type Error = std::convert::Infallible;

        fn detect(
            &mut self,
            _input: &[u8],
            _width: u32,
            _height: u32,
        ) -> Result<Vec<Detection>, Self::Error> {
            Ok(self.detections.clone())
        }
    }

    struct FailingDetector;

    impl DetectionSource for FailingDetector {
        type Error = std::io::Error;

        fn detect(&mut self, _: &[u8], _: u32, _: u32) -> Result<Vec<Detection>, Self::Error> {
            Err(std::io::Error::other("model not loaded"))
        }
    }

    #[test]
    fn test_confidence_gate() {
        let detector = MockDetector {
            detections: vec![
                Detection::new("car", 0.9, Rect::new(0.0, 0.0, 100.0, 100.0)),
                Detection::new("bus", 0.3, Rect::new(200.0, 0.0, 300.0, 100.0)),
                Detection::new("person", 0.5, Rect::new(400.0, 0.0, 500.0, 100.0)),
            ],
        };
        let tracker = Arc::new(MultiBoxTracker::default());
        tracker.configure(640, 480, 0).unwrap();

        let mut pipeline = TrackerPipeline::new(detector, tracker.clone());
        assert_eq!(pipeline.process_frame(&[], 640, 480).unwrap(), 2);

        let labels: Vec<_> = tracker.tracked_items().into_iter().map(|i| i.label).collect();
        assert_eq!(labels, ["car", "person"]);
    }

    #[test]
    fn test_crop_to_frame_mapping() {
        let detector = MockDetector {
            detections: vec![Detection::new("car", 0.9, Rect::new(0.0, 0.0, 150.0, 150.0))],
        };
        let tracker = Arc::new(MultiBoxTracker::default());
        tracker.configure(640, 480, 0).unwrap();

        let frame_to_crop =
            FrameTransform::between((640.0, 480.0), (300.0, 300.0), Orientation::Deg0, false);
        let mut pipeline = TrackerPipeline::new(detector, tracker.clone())
            .with_frame_to_crop(frame_to_crop)
            .unwrap();
        pipeline.process_frame(&[], 300, 300).unwrap();

        let rect = tracker.tracked_items()[0].rect;
        assert!((rect.right - 320.0).abs() < 1e-3);
        assert!((rect.bottom - 240.0).abs() < 1e-3);
    }

    #[test]
    fn test_errors_are_surfaced() {
        let tracker = Arc::new(MultiBoxTracker::default());
        let mut pipeline = TrackerPipeline::new(FailingDetector, tracker.clone());
        assert!(matches!(
            pipeline.process_frame(&[], 1, 1),
            Err(PipelineError::Detection(_))
        ));

        let mut pipeline = TrackerPipeline::new(MockDetector { detections: vec![] }, tracker);
        assert!(matches!(
            pipeline.process_frame(&[], 1, 1),
            Err(PipelineError::Tracker(TrackerError::Unconfigured))
        ));
    }
}

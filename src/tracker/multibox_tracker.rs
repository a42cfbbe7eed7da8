//! Tracker state shared between the detection worker and the renderer.

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::error::TrackerError;
use crate::tracker::category::{CategoryTable, CategoryVisibility};
use crate::tracker::detection::Detection;
use crate::tracker::filter::{FilterConfig, filter_detections};
use crate::tracker::frame_config::FrameConfig;
use crate::tracker::palette::{Color, Palette};
use crate::tracker::rect::Rect;
use crate::tracker::track_state::TrackState;
use crate::tracker::tracked_item::TrackedItem;
use crate::tracker::transform::{CanvasAnchor, FrameTransform};

/// Configuration for the MultiBoxTracker.
#[derive(Debug, Clone, Default)]
pub struct TrackerConfig {
    pub filter: FilterConfig,
    /// Palette slots; its length caps the number of tracked items
    pub palette: Palette,
    pub categories: CategoryTable,
    pub anchor: CanvasAnchor,
}

/// One box to paint, already in canvas coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub rect: Rect,
    /// Category color of the label
    pub color: Color,
    /// Palette slot of the underlying tracked item
    pub color_index: usize,
    pub label: String,
    pub confidence: f32,
}

impl DrawCommand {
    /// Text drawn at the box's top-left corner, e.g. `car 90.00%`.
    pub fn caption(&self) -> String {
        let percent = 100.0 * self.confidence;
        if self.label.is_empty() {
            format!("{percent:.2}%")
        } else {
            format!("{} {percent:.2}%", self.label)
        }
    }
}

#[derive(Debug, Default)]
struct Inner {
    state: TrackState,
    items: Vec<TrackedItem>,
}

/// Holds the filtered detections of the latest frame and projects them onto
/// a canvas on demand.
///
/// `update` and `render` may be called from different threads. Both take the
/// same lock, so a render sees either the previous batch or the new one in
/// full.
pub struct MultiBoxTracker {
    config: TrackerConfig,
    inner: Mutex<Inner>,
}

impl MultiBoxTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            config,
            inner: Mutex::new(Inner::default()),
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Store new capture geometry. Invalid input is rejected and the previous
    /// geometry stays in effect. Tracked items are left as they are.
    pub fn configure(
        &self,
        frame_width: i64,
        frame_height: i64,
        sensor_orientation: i32,
    ) -> Result<(), TrackerError> {
        let frame = FrameConfig::new(frame_width, frame_height, sensor_orientation)
            .inspect_err(|err| warn!(%err, "rejected frame configuration"))?;

        debug!(
            width = frame.width,
            height = frame.height,
            orientation = frame.orientation.degrees(),
            "frame configured"
        );
        self.inner.lock().state = TrackState::Configured(frame);
        Ok(())
    }

    /// Replace the tracked set with the filtered form of `detections`.
    ///
    /// Returns the number of items now tracked.
    pub fn update(&self, detections: &[Detection]) -> Result<usize, TrackerError> {
        let items = filter_detections(detections, &self.config.filter, self.config.palette.len());

        let mut inner = self.inner.lock();
        if inner.state == TrackState::Unconfigured {
            debug!("update before configure, batch ignored");
            return Err(TrackerError::Unconfigured);
        }
        inner.items = items;
        Ok(inner.items.len())
    }

    /// Draw commands for a `canvas_width` x `canvas_height` surface.
    ///
    /// Items whose label is not in the category table, or is switched off in
    /// `visibility`, are skipped. Nothing stored is changed.
    pub fn render(
        &self,
        canvas_width: u32,
        canvas_height: u32,
        visibility: &CategoryVisibility,
    ) -> Result<Vec<DrawCommand>, TrackerError> {
        let inner = self.inner.lock();
        let frame = match inner.state {
            TrackState::Unconfigured => {
                debug!("render before configure");
                return Err(TrackerError::Unconfigured);
            }
            TrackState::Configured(frame) => frame,
        };

        if canvas_width == 0 || canvas_height == 0 {
            return Ok(Vec::new());
        }

        let transform =
            FrameTransform::frame_to_canvas(&frame, canvas_width, canvas_height, self.config.anchor);

        let commands = inner
            .items
            .iter()
            .filter(|item| visibility.is_visible(&item.label))
            .filter_map(|item| {
                let color = self.config.categories.color_of(&item.label)?;
                Some(DrawCommand {
                    rect: transform.map_rect(&item.rect),
                    color,
                    color_index: item.color_index,
                    label: item.label.clone(),
                    confidence: item.confidence,
                })
            })
            .collect();
        Ok(commands)
    }

    /// Copy of the currently tracked items, in frame space.
    pub fn tracked_items(&self) -> Vec<TrackedItem> {
        self.inner.lock().items.clone()
    }

    pub fn frame_config(&self) -> Option<FrameConfig> {
        self.inner.lock().state.frame_config()
    }

    /// Palette color of a tracked item's slot.
    pub fn palette_color(&self, item: &TrackedItem) -> Option<Color> {
        self.config.palette.get(item.color_index)
    }
}

impl Default for MultiBoxTracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}

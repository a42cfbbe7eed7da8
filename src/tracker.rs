mod category;
mod detection;
mod filter;
mod frame_config;
mod multibox_tracker;
mod palette;
mod rect;
mod track_state;
mod tracked_item;
mod transform;

pub use category::{CategoryStyle, CategoryTable, CategoryVisibility};
pub use detection::Detection;
pub use filter::{
    FilterConfig, MIN_SIZE, SuppressionPolicy, filter_detections, meets_min_size,
    suppress_duplicates,
};
pub use frame_config::{FrameConfig, Orientation};
pub use multibox_tracker::{DrawCommand, MultiBoxTracker, TrackerConfig};
pub use palette::{Color, DEFAULT_COLORS, Palette};
pub use rect::{Rect, overlap_matrix};
pub use track_state::TrackState;
pub use tracked_item::TrackedItem;
pub use transform::{CanvasAnchor, FrameTransform};

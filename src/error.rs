//! Error type shared by the tracker and its configuration types.

use thiserror::Error;

/// Errors reported by [`MultiBoxTracker`](crate::MultiBoxTracker) and the
/// value types it is configured with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    /// `update` or `render` was called before the first successful `configure`.
    #[error("tracker has not been configured with a frame size yet")]
    Unconfigured,

    /// A frame dimension was zero or negative.
    #[error("invalid frame size {width}x{height}: both dimensions must be positive")]
    InvalidConfig { width: i64, height: i64 },

    /// Sensor orientation was not a multiple of 90 degrees.
    #[error("invalid sensor orientation {0}: expected a multiple of 90 degrees")]
    InvalidOrientation(i32),

    /// A color string could not be parsed.
    #[error("invalid color '{0}': expected #RRGGBB or #AARRGGBB")]
    InvalidColor(String),

    /// A palette was built without any colors.
    #[error("palette must contain at least one color")]
    EmptyPalette,

    /// A transform has no inverse.
    #[error("transform is singular and cannot be inverted")]
    SingularTransform,
}

//! Capture geometry: frame size and sensor orientation.

use crate::error::TrackerError;

/// Sensor rotation relative to the display, in quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Orientation {
    /// Normalize any multiple of 90 degrees (negative included) into a quarter turn.
    pub fn from_degrees(degrees: i32) -> Result<Self, TrackerError> {
        if degrees % 90 != 0 {
            return Err(TrackerError::InvalidOrientation(degrees));
        }
        Ok(match degrees.rem_euclid(360) {
            0 => Self::Deg0,
            90 => Self::Deg90,
            180 => Self::Deg180,
            _ => Self::Deg270,
        })
    }

    pub fn degrees(self) -> i32 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    /// True when the rotation swaps width and height.
    pub fn is_transposed(self) -> bool {
        matches!(self, Self::Deg90 | Self::Deg270)
    }

    /// Exact (cos, sin) of the rotation angle.
    pub fn cos_sin(self) -> (f32, f32) {
        match self {
            Self::Deg0 => (1.0, 0.0),
            Self::Deg90 => (0.0, 1.0),
            Self::Deg180 => (-1.0, 0.0),
            Self::Deg270 => (0.0, -1.0),
        }
    }
}

impl TryFrom<i32> for Orientation {
    type Error = TrackerError;

    fn try_from(degrees: i32) -> Result<Self, Self::Error> {
        Self::from_degrees(degrees)
    }
}

/// Frame dimensions and sensor orientation of the capture stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameConfig {
    pub width: u32,
    pub height: u32,
    pub orientation: Orientation,
}

impl FrameConfig {
    /// Validate raw capture geometry.
    pub fn new(width: i64, height: i64, sensor_orientation: i32) -> Result<Self, TrackerError> {
        let invalid = TrackerError::InvalidConfig { width, height };
        let w = u32::try_from(width).map_err(|_| invalid.clone())?;
        let h = u32::try_from(height).map_err(|_| invalid.clone())?;
        if w == 0 || h == 0 {
            return Err(invalid);
        }
        Ok(Self {
            width: w,
            height: h,
            orientation: Orientation::from_degrees(sensor_orientation)?,
        })
    }

    /// Frame size as seen after rotation, (width, height).
    pub fn effective_size(&self) -> (u32, u32) {
        if self.orientation.is_transposed() {
            (self.height, self.width)
        } else {
            (self.width, self.height)
        }
    }
}

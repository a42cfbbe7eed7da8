use crate::tracker::frame_config::FrameConfig;

/// Tracker lifecycle. There is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackState {
    /// No frame geometry known yet; update and render are refused
    #[default]
    Unconfigured,
    /// Frame geometry set by the most recent successful configure
    Configured(FrameConfig),
}

impl TrackState {
    pub fn frame_config(&self) -> Option<FrameConfig> {
        match self {
            Self::Unconfigured => None,
            Self::Configured(config) => Some(*config),
        }
    }
}

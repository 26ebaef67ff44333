use crate::core::zoom::settings::ZoomSettings;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::In => Self::Out,
            Self::Out => Self::In,
        }
    }

    /// Per-tick factor multiplier for this direction.
    #[must_use]
    pub fn step_for(self, settings: &ZoomSettings) -> f64 {
        match self {
            Self::In => settings.zoom_in_step,
            Self::Out => settings.zoom_out_step,
        }
    }
}

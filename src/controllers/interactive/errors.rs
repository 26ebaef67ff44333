use crate::controllers::interactive::config::ConfigError;
use crate::controllers::interactive::frame_store::FrameStoreError;
use std::error::Error;
use std::fmt;
use std::io;

/// Failures that stop the viewer from starting.
#[derive(Debug)]
pub enum ViewerError {
    Config(ConfigError),
    FrameStore(FrameStoreError),
    WorkerSpawn(io::Error),
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid configuration: {}", err),
            Self::FrameStore(err) => write!(f, "could not set up frame buffers: {}", err),
            Self::WorkerSpawn(err) => write!(f, "could not start render worker: {}", err),
        }
    }
}

impl Error for ViewerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::FrameStore(err) => Some(err),
            Self::WorkerSpawn(err) => Some(err),
        }
    }
}

impl From<ConfigError> for ViewerError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<FrameStoreError> for ViewerError {
    fn from(err: FrameStoreError) -> Self {
        Self::FrameStore(err)
    }
}

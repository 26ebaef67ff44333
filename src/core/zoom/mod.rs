pub mod direction;
pub mod preview;
pub mod settings;
pub mod state;

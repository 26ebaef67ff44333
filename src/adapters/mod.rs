pub mod pixel_format;
pub mod thread_timer;

pub mod complex;
pub mod pixel_buffer;
pub mod plane_region;
pub mod point;
pub mod view_rect;
pub mod viewport;

pub mod render_region;

pub mod presenter;
pub mod proxy_sink;

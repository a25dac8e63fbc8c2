pub mod clone;
pub mod config;
pub mod permalink;
pub mod resolve;

// Library exports for testing and external use
pub mod api;
pub mod config;
pub mod core;
pub mod models;

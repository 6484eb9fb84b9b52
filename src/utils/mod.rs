/// Environment variable helpers
pub mod config;
/// Lenient formatting of response bodies for logs
pub mod display;
/// Module containing logging utilities
pub mod logger;

pub use display::*;
pub use logger::*;

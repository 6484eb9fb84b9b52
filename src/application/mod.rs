/// HTTP implementation of the trading service
pub mod client;
/// Application configuration module
pub mod config;
/// Service traits
pub mod interfaces;
/// Scripted scenario driver
pub mod scenario;

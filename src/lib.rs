/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # order-scenario
//!
//! A small harness that drives a trading-order HTTP API through a fixed
//! sequence of calls and checks that every order is accepted or rejected as
//! expected.
//!
//! The target server exposes four endpoints:
//!
//! | Method   | Path       | Purpose                               |
//! |----------|------------|---------------------------------------|
//! | `GET`    | `/`        | results / state snapshot              |
//! | `POST`   | `/account` | initialise an account wallet          |
//! | `DELETE` | `/account` | delete the account                    |
//! | `POST`   | `/order`   | place an order, answers `{success}`   |
//!
//! ## Usage
//!
//! ```ignore
//! use order_scenario::prelude::*;
//!
//! setup_logger();
//! let config = Config::default();
//! let client = Client::new(&config)?;
//! let scenario = Scenario::margin_check(&config.scenario);
//! let report = ScenarioRunner::new(scenario).run(&client).await?;
//! info!("{}", report);
//! ```

/// Application layer: service trait, HTTP client and scenario driver
pub mod application;
/// Global constants
pub mod constants;
/// Error type shared by the whole crate
pub mod error;
/// Request/response models and HTTP plumbing
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Presentation enums used in requests
pub mod presentation;
/// Logging, environment and formatting helpers
pub mod utils;

/// Configuration re-exported at the crate root
pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

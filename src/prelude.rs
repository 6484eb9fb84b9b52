/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Prelude
//!
//! Commonly used types and traits in one import.
//!
//! ```rust
//! use order_scenario::prelude::*;
//!
//! let config = Config::with_base_url("http://localhost:8080/");
//! let scenario = Scenario::margin_check(&config.scenario);
//! assert_eq!(scenario.order_count(), 4);
//! ```

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Configuration types
pub use crate::config::{Config, RestApiConfig, ScenarioConfig};

/// Library version information
pub use crate::VERSION;

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// SERVICES
// ============================================================================

/// Trading service trait
pub use crate::application::interfaces::trading::TradingService;

/// HTTP implementation of the trading service
pub use crate::application::client::Client;

/// HTTP session
pub use crate::model::http::HttpClient;

// ============================================================================
// SCENARIOS
// ============================================================================

/// Scenario building and execution
pub use crate::application::scenario::{
    Expectation, Scenario, ScenarioReport, ScenarioRunner, Step,
};

// ============================================================================
// MODELS
// ============================================================================

/// Request and response payloads
pub use crate::model::requests::{AccountInitRequest, OrderRequest, WalletEntry};
pub use crate::model::responses::OrderResponse;

/// Order enums
pub use crate::presentation::order::{Direction, Side};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Response formatting helpers
pub use crate::utils::display::{body_to_value, pretty_json, try_pretty};

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use tokio;
pub use tracing::{debug, error, info, warn};

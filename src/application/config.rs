use crate::constants::{DEFAULT_BASE_URL, DEFAULT_CURRENCY, DEFAULT_INITIAL_BALANCE};
use crate::utils::config::env_or;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the scenario runner
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Parameters of the built-in scenario
    pub scenario: ScenarioConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the trading server
    pub base_url: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Parameters of the built-in margin scenario
pub struct ScenarioConfig {
    /// Balance the account is initialised with
    pub initial_balance: f64,
    /// Wallet currency
    pub currency: String,
}

impl Default for Config {
    /// The fixed local scenario: `http://localhost:8080/`, 100 USDT
    fn default() -> Self {
        Config {
            rest_api: RestApiConfig::default(),
            scenario: ScenarioConfig::default(),
        }
    }
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            initial_balance: DEFAULT_INITIAL_BALANCE,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl Config {
    /// Creates a configuration from a `.env` file and the environment
    ///
    /// Only the live-server tests use this to point at another server; the
    /// binary always runs with [`Config::default`]. Missing or unparseable
    /// variables keep their default.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `SCENARIO_BASE_URL` | `http://localhost:8080/` |
    /// | `SCENARIO_INITIAL_BALANCE` | `100` |
    /// | `SCENARIO_CURRENCY` | `USDT` |
    pub fn from_env() -> Self {
        match dotenv() {
            Ok(path) => debug!("Loaded {}", path.display()),
            Err(e) => debug!("No .env file loaded: {e}"),
        }

        let defaults = Config::default();
        Config {
            rest_api: RestApiConfig {
                base_url: env_or("SCENARIO_BASE_URL", defaults.rest_api.base_url),
            },
            scenario: ScenarioConfig {
                initial_balance: env_or(
                    "SCENARIO_INITIAL_BALANCE",
                    defaults.scenario.initial_balance,
                ),
                currency: env_or("SCENARIO_CURRENCY", defaults.scenario.currency),
            },
        }
    }

    /// Configuration pointing at `base_url` with default scenario parameters,
    /// without reading the environment
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Config {
            rest_api: RestApiConfig {
                base_url: base_url.into(),
            },
            scenario: ScenarioConfig::default(),
        }
    }
}

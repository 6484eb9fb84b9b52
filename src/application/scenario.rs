/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Scripted scenarios over a [`TradingService`]
//!
//! A [`Scenario`] is an ordered list of [`Step`]s. The [`ScenarioRunner`]
//! executes them one at a time and stops at the first failure, whether that
//! is a transport/HTTP error or an order verdict that does not match its
//! [`Expectation`].
//!
//! An order's verdict is checked once the results snapshot that follows it
//! has been fetched, so the server state is always logged before a failing
//! run stops.

use crate::application::config::ScenarioConfig;
use crate::application::interfaces::trading::TradingService;
use crate::error::AppError;
use crate::model::requests::OrderRequest;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// Outcome an order is expected to have
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Expectation {
    /// The server must answer `success: true`
    Accepted,
    /// The server must answer `success: false`
    Rejected,
}

impl Expectation {
    /// Whether `success` satisfies this expectation
    #[must_use]
    pub fn is_met_by(self, success: bool) -> bool {
        match self {
            Expectation::Accepted => success,
            Expectation::Rejected => !success,
        }
    }

    /// Message reported when the expectation does not hold
    #[must_use]
    pub fn failure_message(self) -> &'static str {
        match self {
            Expectation::Accepted => "Order should be placed",
            Expectation::Rejected => "Order should not be placed",
        }
    }
}

/// One action of a scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    /// `GET /`
    Results,
    /// `POST /account`
    InitAccount {
        /// Wallet balance
        balance: f64,
    },
    /// `POST /order`, followed by a check of the verdict
    PlaceOrder {
        /// Order to place
        order: OrderRequest,
        /// Expected verdict
        expect: Expectation,
    },
    /// `DELETE /account`
    DeleteAccount,
}

/// Named, ordered list of steps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Name used in logs
    pub name: String,
    /// Steps in execution order
    pub steps: Vec<Step>,
}

impl Scenario {
    /// Creates an empty scenario
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            steps: Vec::new(),
        }
    }

    /// Appends a step
    #[must_use]
    pub fn step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Appends a results query
    #[must_use]
    pub fn results(self) -> Self {
        self.step(Step::Results)
    }

    /// Appends an account initialisation
    #[must_use]
    pub fn init_account(self, balance: f64) -> Self {
        self.step(Step::InitAccount { balance })
    }

    /// Appends an order with its expected verdict
    #[must_use]
    pub fn place_order(self, order: OrderRequest, expect: Expectation) -> Self {
        self.step(Step::PlaceOrder { order, expect })
    }

    /// Appends an account deletion
    #[must_use]
    pub fn delete_account(self) -> Self {
        self.step(Step::DeleteAccount)
    }

    /// Margin check against a freshly initialised account
    ///
    /// With the default balance of 100:
    /// 1. buy 0.09 BTC @ 10000 reserves 90 and is accepted
    /// 2. selling it back releases the 90 and is accepted
    /// 3. buy 0.1 ETH @ 2000 reserves 20 and is accepted
    /// 4. buying 0.09 BTC again needs 90 with only 80 free and is rejected
    ///
    /// A results snapshot is taken before the account is created and after
    /// every mutating step.
    pub fn margin_check(config: &ScenarioConfig) -> Self {
        let btc = OrderRequest::buy("BTC", 10000.0, 0.09);
        let eth = OrderRequest::buy("ETH", 2000.0, 0.1);

        Scenario::new("margin_check")
            .results()
            .init_account(config.initial_balance)
            .results()
            .place_order(btc.clone(), Expectation::Accepted)
            .results()
            .place_order(btc.offsetting(), Expectation::Accepted)
            .results()
            .place_order(eth, Expectation::Accepted)
            .results()
            .place_order(btc, Expectation::Rejected)
            .results()
    }

    /// Number of order steps
    #[must_use]
    pub fn order_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s, Step::PlaceOrder { .. }))
            .count()
    }
}

/// Summary of a completed run
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ScenarioReport {
    /// Scenario name
    pub name: String,
    /// Steps executed
    pub steps_executed: usize,
    /// Orders sent to the server
    pub orders_placed: usize,
    /// Orders answered with `success: true`
    pub orders_accepted: usize,
    /// Orders answered with `success: false`
    pub orders_rejected: usize,
}

struct PendingVerdict {
    index: usize,
    summary: String,
    expect: Expectation,
    success: bool,
}

impl PendingVerdict {
    fn check(self) -> Result<(), AppError> {
        if self.expect.is_met_by(self.success) {
            return Ok(());
        }
        let message = format!(
            "step {}: {} ({}, success={})",
            self.index,
            self.expect.failure_message(),
            self.summary,
            self.success
        );
        error!("{}", message);
        Err(AppError::ExpectationFailed(message))
    }
}

/// Executes a [`Scenario`] step by step
pub struct ScenarioRunner {
    scenario: Scenario,
}

impl ScenarioRunner {
    /// Creates a runner for `scenario`
    pub fn new(scenario: Scenario) -> Self {
        Self { scenario }
    }

    /// Runs every step in order against `service`
    ///
    /// # Returns
    /// * `Ok(ScenarioReport)` - Every step succeeded and every verdict matched
    /// * `Err(AppError::ExpectationFailed)` - An order verdict did not match
    /// * `Err(_)` - The first error returned by `service`
    pub async fn run<S>(&self, service: &S) -> Result<ScenarioReport, AppError>
    where
        S: TradingService + ?Sized,
    {
        info!(
            "Running scenario {} ({} steps)",
            self.scenario.name,
            self.scenario.steps.len()
        );

        let mut report = ScenarioReport {
            name: self.scenario.name.clone(),
            ..Default::default()
        };
        let mut pending: Option<PendingVerdict> = None;

        for (index, step) in self.scenario.steps.iter().enumerate() {
            if !matches!(step, Step::Results) {
                if let Some(verdict) = pending.take() {
                    verdict.check()?;
                }
            }

            match step {
                Step::Results => {
                    service.get_results().await?;
                }
                Step::InitAccount { balance } => {
                    service.init_account(*balance).await?;
                }
                Step::PlaceOrder { order, expect } => {
                    let response = service.place_order(order).await?;
                    report.orders_placed += 1;
                    if response.success {
                        report.orders_accepted += 1;
                    } else {
                        report.orders_rejected += 1;
                    }
                    pending = Some(PendingVerdict {
                        index,
                        summary: order.summary(),
                        expect: *expect,
                        success: response.success,
                    });
                }
                Step::DeleteAccount => {
                    service.delete_account().await?;
                }
            }
            report.steps_executed += 1;

            if matches!(step, Step::Results) {
                if let Some(verdict) = pending.take() {
                    verdict.check()?;
                }
            }
        }

        if let Some(verdict) = pending.take() {
            verdict.check()?;
        }

        info!(
            "Scenario {} passed: {} orders, {} accepted, {} rejected",
            report.name, report.orders_placed, report.orders_accepted, report.orders_rejected
        );
        Ok(report)
    }
}

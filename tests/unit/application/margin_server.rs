// In-process stand-in for the trading server used by the scenario tests

use order_scenario::prelude::*;
use reqwest::StatusCode;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Mutex;

/// Leverage applied when computing the margin of an order
pub const LEVERAGE: f64 = 10.0;

/// Margin an order reserves
pub fn margin_of(order: &OrderRequest) -> f64 {
    order.notional() / LEVERAGE
}

#[derive(Default)]
struct State {
    balance: Option<f64>,
    // symbol -> (side, quantity, margin)
    positions: HashMap<String, (Side, f64, f64)>,
    calls: Vec<String>,
}

/// Margin account simulator
///
/// Opening a position reserves `price * quantity / LEVERAGE`; an order on the
/// opposite side of an open position with the same quantity closes it and
/// releases the margin.
#[derive(Default)]
pub struct MarginServer {
    state: Mutex<State>,
    fail_on_call: Option<usize>,
}

impl MarginServer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers 500 on the `n`-th call (zero based)
    pub fn failing_on_call(n: usize) -> Self {
        Self {
            fail_on_call: Some(n),
            ..Self::default()
        }
    }

    /// Names of the operations received, in order
    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn available(&self) -> Option<f64> {
        let state = self.state.lock().unwrap();
        let reserved: f64 = state.positions.values().map(|(_, _, m)| m).sum();
        state.balance.map(|b| b - reserved)
    }

    fn record(&self, call: String) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        let index = state.calls.len();
        state.calls.push(call);
        if self.fail_on_call == Some(index) {
            return Err(AppError::Unexpected(StatusCode::INTERNAL_SERVER_ERROR));
        }
        Ok(())
    }
}

#[async_trait]
impl TradingService for MarginServer {
    async fn get_results(&self) -> Result<Value, AppError> {
        self.record("results".to_string())?;
        let state = self.state.lock().unwrap();
        Ok(json!({
            "balance": state.balance,
            "positions": state.positions.len(),
        }))
    }

    async fn init_account(&self, balance: f64) -> Result<(), AppError> {
        self.record(format!("init_account {balance}"))?;
        let mut state = self.state.lock().unwrap();
        state.balance = Some(balance);
        state.positions.clear();
        Ok(())
    }

    async fn place_order(&self, order: &OrderRequest) -> Result<OrderResponse, AppError> {
        self.record(format!("place_order {}", order.summary()))?;
        let mut state = self.state.lock().unwrap();

        let Some(balance) = state.balance else {
            return Ok(OrderResponse::default());
        };

        if let Some((side, quantity, margin)) = state.positions.get(&order.symbol).copied() {
            if side == order.side.opposite() && (quantity - order.quantity).abs() < 1e-12 {
                state.positions.remove(&order.symbol);
                let mut response = OrderResponse {
                    success: true,
                    ..Default::default()
                };
                response.details.insert("released".to_string(), json!(margin));
                return Ok(response);
            }
        }

        let reserved: f64 = state.positions.values().map(|(_, _, m)| m).sum();
        let margin = margin_of(order);
        if margin > balance - reserved + 1e-9 {
            return Ok(OrderResponse::default());
        }

        let entry = state
            .positions
            .entry(order.symbol.clone())
            .or_insert((order.side, 0.0, 0.0));
        entry.1 += order.quantity;
        entry.2 += margin;

        let mut response = OrderResponse {
            success: true,
            ..Default::default()
        };
        response.details.insert("reserved".to_string(), json!(margin));
        Ok(response)
    }

    async fn delete_account(&self) -> Result<(), AppError> {
        self.record("delete_account".to_string())?;
        let mut state = self.state.lock().unwrap();
        state.balance = None;
        state.positions.clear();
        Ok(())
    }
}

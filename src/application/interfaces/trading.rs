use crate::error::AppError;
use crate::model::requests::OrderRequest;
use crate::model::responses::OrderResponse;

use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
/// Operations offered by the trading server
///
/// The scenario driver only talks to this trait, so it can run against the
/// real HTTP client or an in-process stand-in.
pub trait TradingService: Send + Sync {
    /// Fetches the current results / state snapshot
    ///
    /// Non-JSON bodies are returned as a JSON string.
    async fn get_results(&self) -> Result<Value, AppError>;

    /// Initialises the account with a single-currency wallet
    async fn init_account(&self, balance: f64) -> Result<(), AppError>;

    /// Places an order and returns the server verdict
    async fn place_order(&self, order: &OrderRequest) -> Result<OrderResponse, AppError>;

    /// Deletes the account
    async fn delete_account(&self) -> Result<(), AppError>;
}

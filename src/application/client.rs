/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::application::interfaces::trading::TradingService;
use crate::constants::{ACCOUNT_PATH, ORDER_PATH, RESULTS_PATH};
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::{AccountInitRequest, OrderRequest};
use crate::model::responses::OrderResponse;
use crate::utils::display::{body_to_value, pretty_json, try_pretty};
use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

/// HTTP client for the trading server
///
/// Wraps one [`HttpClient`] session for the whole run.
pub struct Client {
    http_client: HttpClient,
    currency: String,
}

impl Client {
    /// Creates a client for the configured server
    ///
    /// No request is sent until the first operation is called.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        Ok(Self {
            http_client: HttpClient::new(&config.rest_api)?,
            currency: config.scenario.currency.clone(),
        })
    }
}

#[async_trait]
impl TradingService for Client {
    async fn get_results(&self) -> Result<Value, AppError> {
        let body = self.http_client.get(RESULTS_PATH).await?;
        info!("results {}", try_pretty(&body));
        Ok(body_to_value(&body))
    }

    async fn init_account(&self, balance: f64) -> Result<(), AppError> {
        let request = AccountInitRequest::single(self.currency.as_str(), balance);
        let body = self.http_client.post(ACCOUNT_PATH, &request).await?;
        info!("init account {}", body);
        Ok(())
    }

    async fn place_order(&self, order: &OrderRequest) -> Result<OrderResponse, AppError> {
        info!("placing order {}", pretty_json(order));
        let body = self.http_client.post(ORDER_PATH, order).await?;
        info!("placed order {}", try_pretty(&body));
        let response: OrderResponse = serde_json::from_str(&body)?;
        Ok(response)
    }

    async fn delete_account(&self) -> Result<(), AppError> {
        let body = self.http_client.delete(ACCOUNT_PATH).await?;
        info!("delete account {}", body);
        Ok(())
    }
}

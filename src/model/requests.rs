/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::presentation::order::{Direction, Side};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Body of `POST /order`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderRequest {
    /// Instrument symbol, e.g. `BTC`
    pub symbol: String,
    /// Buy or sell
    pub side: Side,
    /// Long or short
    pub direction: Direction,
    /// Limit price
    pub price: f64,
    /// Quantity in instrument units
    pub quantity: f64,
}

impl OrderRequest {
    /// Creates a new order request
    pub fn new(
        symbol: impl Into<String>,
        side: Side,
        direction: Direction,
        price: f64,
        quantity: f64,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            direction,
            price,
            quantity,
        }
    }

    /// Long buy order
    pub fn buy(symbol: impl Into<String>, price: f64, quantity: f64) -> Self {
        Self::new(symbol, Side::Buy, Direction::Long, price, quantity)
    }

    /// Long sell order
    pub fn sell(symbol: impl Into<String>, price: f64, quantity: f64) -> Self {
        Self::new(symbol, Side::Sell, Direction::Long, price, quantity)
    }

    /// Order that offsets this one: same instrument, direction, price and
    /// quantity on the opposite side
    #[must_use]
    pub fn offsetting(&self) -> Self {
        Self {
            side: self.side.opposite(),
            ..self.clone()
        }
    }

    /// Notional value of the order (`price * quantity`)
    #[must_use]
    pub fn notional(&self) -> f64 {
        self.price * self.quantity
    }

    /// One-line description used in log and error messages
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} {} {} {}@{}",
            self.side.as_str(),
            self.direction.as_str(),
            self.symbol,
            self.quantity,
            self.price
        )
    }
}

/// One currency balance inside an account wallet
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct WalletEntry {
    /// Currency code, e.g. `USDT`
    pub currency: String,
    /// Balance held in that currency
    pub balance: f64,
}

/// Body of `POST /account`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountInitRequest {
    /// Wallet entries, one per currency
    pub wallet: Vec<WalletEntry>,
}

impl AccountInitRequest {
    /// Wallet holding a single currency
    pub fn single(currency: impl Into<String>, balance: f64) -> Self {
        Self {
            wallet: vec![WalletEntry {
                currency: currency.into(),
                balance,
            }],
        }
    }

    /// Total balance across all wallet entries
    #[must_use]
    pub fn total_balance(&self) -> f64 {
        self.wallet.iter().map(|w| w.balance).sum()
    }
}

/// Base URL of the trading server when `SCENARIO_BASE_URL` is not set
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/";
/// User agent string sent with every request
pub const USER_AGENT: &str = "order-scenario/0.1.0";
/// Wallet currency used when initialising the account
pub const DEFAULT_CURRENCY: &str = "USDT";
/// Balance the account is initialised with
pub const DEFAULT_INITIAL_BALANCE: f64 = 100.0;
/// Path of the results endpoint, relative to the base URL
pub const RESULTS_PATH: &str = "";
/// Path of the account endpoint, relative to the base URL
pub const ACCOUNT_PATH: &str = "account";
/// Path of the order endpoint, relative to the base URL
pub const ORDER_PATH: &str = "order";

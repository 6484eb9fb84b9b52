// Common utilities for integration tests

use order_scenario::prelude::*;

/// Creates a client for the configured server
pub fn create_test_client() -> Client {
    setup_logger();
    let config = Config::from_env();
    Client::new(&config).expect("Failed to create client")
}

/// Deletes any existing account and creates a fresh one
pub async fn fresh_account(client: &Client, balance: f64) {
    if let Err(e) = client.delete_account().await {
        info!("No account to delete: {}", e);
    }
    client
        .init_account(balance)
        .await
        .expect("Failed to init account");
}

use order_scenario::utils::logger::setup_logger;
use tracing::info;

#[test]
fn test_setup_logger_is_idempotent() {
    setup_logger();
    setup_logger();
    info!("logger installed");
}

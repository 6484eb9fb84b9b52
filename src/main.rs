use order_scenario::prelude::*;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    setup_logger();

    let config = Config::default();
    info!(
        "order-scenario {} against {}",
        VERSION, config.rest_api.base_url
    );

    match run(&config).await {
        Ok(report) => {
            info!("Scenario report: {}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Scenario failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &Config) -> Result<ScenarioReport, AppError> {
    let client = Client::new(config)?;
    let scenario = Scenario::margin_check(&config.scenario);
    ScenarioRunner::new(scenario).run(&client).await
}

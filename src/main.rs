use fulfillment_webhook::bootstrap::{self, BootstrapError};
use fulfillment_webhook::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), BootstrapError> {
    let config = AppConfig::load()?;
    bootstrap::init_logging(&config.server);
    config.validate()?;

    bootstrap::run(config).await
}

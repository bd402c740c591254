use std::sync::Arc;

use keeper_core::config::Config;

#[tokio::main]
async fn main() -> Result<(), keeper_core::Error> {
    keeper_core::logging::init("keeper")?;

    let cfg = Arc::new(Config::load()?);

    keeper_telegram::router::run_polling(cfg)
        .await
        .map_err(|e| keeper_core::Error::Transport(format!("telegram bot failed: {e}")))?;

    tracing::info!("keeper stopped");
    Ok(())
}

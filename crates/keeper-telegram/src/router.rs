use std::sync::Arc;

use teloxide::{dispatching::Dispatcher, dptree, prelude::*};

use keeper_core::{config::Config, relay::Relay};

use crate::handlers;
use crate::TelegramTransport;

#[derive(Clone)]
pub struct AppState {
    pub transport: Arc<TelegramTransport>,
    pub relay: Arc<Relay>,
}

impl AppState {
    pub fn new(cfg: &Config, bot: Bot) -> Self {
        let transport = Arc::new(TelegramTransport::new(bot));
        let relay = Arc::new(Relay::new(transport.clone(), cfg.staging_dir.clone()));
        Self { transport, relay }
    }
}

pub async fn run_polling(cfg: Arc<Config>) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.telegram_bot_token.clone());

    // Basic startup info; a bad token surfaces here rather than inside the dispatcher.
    let me = bot.get_me().await?;
    tracing::info!(
        username = %me.username(),
        staging_dir = %cfg.staging_dir.display(),
        "keeper started"
    );

    let state = Arc::new(AppState::new(&cfg, bot.clone()));

    let handler =
        dptree::entry().branch(Update::filter_message().endpoint(handlers::handle_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .default_handler(|upd| async move {
            tracing::debug!(update_id = upd.id, "ignoring unhandled update");
        })
        .build()
        .dispatch()
        .await;

    Ok(())
}

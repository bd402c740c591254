//! Telegram update handlers.
//!
//! `/start` (and `/help`) get the usage text; everything else that carries
//! text, a caption, a photo, or a document is relayed back as files.

use std::sync::Arc;

use teloxide::{prelude::*, types::Message};

use crate::router::AppState;
mod commands;
mod save;

pub async fn handle_message(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    if let Some(command) = msg.text().and_then(commands::Command::parse) {
        return commands::handle_command(msg, state, command).await;
    }

    save::handle_save(msg, state).await
}

use std::sync::Arc;

use teloxide::prelude::*;

use crate::{convert, router::AppState};

pub async fn handle_save(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    if !convert::is_relayable(&msg) {
        return Ok(());
    }
    let Some(incoming) = convert::incoming_message(&msg) else {
        tracing::debug!(chat_id = msg.chat.id.0, "skipping message without sender");
        return Ok(());
    };

    if let Err(e) = state.relay.handle(&incoming).await {
        tracing::warn!(
            chat_id = incoming.chat_id.0,
            "failed to send save result reply: {e}"
        );
    }
    Ok(())
}

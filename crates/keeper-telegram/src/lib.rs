//! Telegram adapter (teloxide).
//!
//! This crate implements the `keeper-core` RelayTransport over Telegram Bot API.

use std::path::Path;

use async_trait::async_trait;

use teloxide::{
    net::Download,
    prelude::*,
    types::{InputFile, ParseMode},
};

use tokio::io::AsyncWriteExt;

pub mod convert;
pub mod handlers;
pub mod router;

use keeper_core::{
    domain::ChatId,
    errors::Error,
    messaging::{port::RelayTransport, types::TextFormat},
    Result,
};

#[derive(Clone)]
pub struct TelegramTransport {
    bot: Bot,
}

impl TelegramTransport {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    fn tg_chat(chat_id: ChatId) -> teloxide::types::ChatId {
        teloxide::types::ChatId(chat_id.0)
    }

    fn map_err(e: teloxide::RequestError) -> Error {
        Error::Transport(format!("telegram error: {e}"))
    }
}

#[async_trait]
impl RelayTransport for TelegramTransport {
    async fn download(&self, file_id: &str, dest: &Path) -> Result<()> {
        let file = self
            .bot
            .get_file(file_id.to_string())
            .await
            .map_err(Self::map_err)?;

        let mut dst = tokio::fs::File::create(dest).await?;
        self.bot
            .download_file(&file.path, &mut dst)
            .await
            .map_err(|e| Error::Transport(format!("telegram download failed: {e}")))?;
        dst.flush().await?;
        Ok(())
    }

    async fn send_document(
        &self,
        chat_id: ChatId,
        path: &Path,
        caption: Option<&str>,
    ) -> Result<()> {
        let mut req = self
            .bot
            .send_document(Self::tg_chat(chat_id), InputFile::file(path));
        if let Some(c) = caption {
            req = req.caption(c.to_string());
        }
        req.await.map_err(Self::map_err)?;
        Ok(())
    }

    async fn send_text(&self, chat_id: ChatId, text: &str, format: TextFormat) -> Result<()> {
        let mut req = self
            .bot
            .send_message(Self::tg_chat(chat_id), text.to_string());
        if format == TextFormat::Html {
            req = req.parse_mode(ParseMode::Html);
        }
        req.await.map_err(Self::map_err)?;
        Ok(())
    }
}

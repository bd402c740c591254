use std::path::Path;

use async_trait::async_trait;

use crate::{domain::ChatId, messaging::types::TextFormat, Result};

/// Transport operations the relay consumes.
///
/// Telegram is the only implementation; tests use an in-memory recorder.
#[async_trait]
pub trait RelayTransport: Send + Sync {
    /// Download the remote file `file_id` into `dest` (created or truncated).
    async fn download(&self, file_id: &str, dest: &Path) -> Result<()>;

    /// Upload a local file to `chat_id` as a document.
    async fn send_document(&self, chat_id: ChatId, path: &Path, caption: Option<&str>)
        -> Result<()>;

    async fn send_text(&self, chat_id: ChatId, text: &str, format: TextFormat) -> Result<()>;
}

//! The save workflow: stage each attachment (or a synthesized text file),
//! re-upload it to the sender as a document, then acknowledge.

use std::{path::PathBuf, sync::Arc};

use crate::{
    domain::ChatId,
    messaging::{
        port::RelayTransport,
        types::{IncomingMessage, TextFormat},
    },
    provenance::{
        attachment_caption, document_file_name, metadata_lines, photo_file_name,
        text_file_body, text_file_name,
    },
    staging::StagedFile,
    Result,
};

pub const SAVED_REPLY: &str = "✅ Saved successfully!";
pub const FAILED_REPLY: &str = "❌ Failed to save content";
pub const TEXT_ATTACHMENT_CAPTION: &str = "Text content";

/// One document sent back to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Upload {
    pub file_name: String,
    pub caption: Option<String>,
}

/// What a successful relay produced, in send order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RelayReport {
    pub uploads: Vec<Upload>,
}

impl RelayReport {
    pub fn file_names(&self) -> Vec<&str> {
        self.uploads.iter().map(|u| u.file_name.as_str()).collect()
    }
}

pub struct Relay {
    transport: Arc<dyn RelayTransport>,
    staging_dir: PathBuf,
}

impl Relay {
    pub fn new(transport: Arc<dyn RelayTransport>, staging_dir: PathBuf) -> Self {
        Self {
            transport,
            staging_dir,
        }
    }

    /// Process one message and reply with the outcome.
    ///
    /// Only the final reply can fail here; processing errors are logged and
    /// turned into the failure notice.
    pub async fn handle(&self, msg: &IncomingMessage) -> Result<()> {
        let reply = match self.process(msg).await {
            Ok(report) => {
                tracing::info!(
                    user_id = msg.sender.0,
                    files = ?report.file_names(),
                    "saved message"
                );
                SAVED_REPLY
            }
            Err(e) => {
                tracing::error!(
                    user_id = msg.sender.0,
                    chat_id = msg.chat_id.0,
                    error = ?e,
                    "failed to save message: {e}"
                );
                FAILED_REPLY
            }
        };

        self.transport
            .send_text(msg.chat_id, reply, TextFormat::Plain)
            .await
    }

    /// Stage and upload everything the message carries.
    ///
    /// Stops at the first error. Uploads made before it are not undone, but
    /// every staged file is removed.
    pub async fn process(&self, msg: &IncomingMessage) -> Result<RelayReport> {
        let to = ChatId::from(msg.sender);
        let ts = msg.effective_date();
        let text = msg.text_content();
        let metadata = metadata_lines(msg);
        let caption = attachment_caption(text, &metadata);

        let mut report = RelayReport::default();

        if let Some(photo) = msg.best_photo() {
            let staged = StagedFile::reserve(&self.staging_dir, &photo_file_name(ts));
            self.transport
                .download(&photo.file_id, staged.path())
                .await?;
            self.upload(to, &staged, Some(caption.as_str()), &mut report)
                .await?;
        }

        if let Some(doc) = &msg.document {
            let name = document_file_name(ts, doc.file_name.as_deref());
            let staged = StagedFile::reserve(&self.staging_dir, &name);
            self.transport.download(&doc.file_id, staged.path()).await?;
            self.upload(to, &staged, Some(caption.as_str()), &mut report)
                .await?;
        }

        let has_attachment = msg.has_photo() || msg.has_document();
        if !text.is_empty() || !has_attachment {
            let staged = StagedFile::write(
                &self.staging_dir,
                &text_file_name(ts),
                &text_file_body(text, &metadata),
            )
            .await?;
            let text_caption = has_attachment.then_some(TEXT_ATTACHMENT_CAPTION);
            self.upload(to, &staged, text_caption, &mut report).await?;
        }

        Ok(report)
    }

    async fn upload(
        &self,
        to: ChatId,
        staged: &StagedFile,
        caption: Option<&str>,
        report: &mut RelayReport,
    ) -> Result<()> {
        self.transport
            .send_document(to, staged.path(), caption)
            .await?;
        report.uploads.push(Upload {
            file_name: staged.file_name(),
            caption: caption.map(str::to_string),
        });
        Ok(())
    }
}

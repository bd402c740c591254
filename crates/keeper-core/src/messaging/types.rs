use chrono::{DateTime, Utc};

use crate::domain::{ChatId, UserId};

/// An inbound message as the relay sees it.
///
/// Transport-specific fields stay in the adapter; everything optional on the
/// wire is an `Option` (or an empty `Vec`) here.
#[derive(Clone, Debug)]
pub struct IncomingMessage {
    pub chat_id: ChatId,
    pub sender: UserId,
    pub date: DateTime<Utc>,
    pub text: Option<String>,
    pub caption: Option<String>,
    pub photo: Vec<PhotoVariant>,
    pub document: Option<DocumentAttachment>,
    pub forward_origin: Option<ForwardOrigin>,
}

impl IncomingMessage {
    /// Message text, falling back to the media caption, else empty.
    pub fn text_content(&self) -> &str {
        self.text
            .as_deref()
            .or(self.caption.as_deref())
            .unwrap_or("")
    }

    pub fn has_photo(&self) -> bool {
        !self.photo.is_empty()
    }

    pub fn has_document(&self) -> bool {
        self.document.is_some()
    }

    /// The largest photo variant; the last one wins on equal area.
    pub fn best_photo(&self) -> Option<&PhotoVariant> {
        self.photo
            .iter()
            .enumerate()
            .max_by_key(|(idx, p)| (u64::from(p.width) * u64::from(p.height), *idx))
            .map(|(_, p)| p)
    }

    /// Timestamp used to name staged files: the original post time for
    /// forwards, the message time otherwise.
    pub fn effective_date(&self) -> DateTime<Utc> {
        self.forward_origin
            .as_ref()
            .map(|o| o.date)
            .unwrap_or(self.date)
    }
}

/// One resolution of a photo attachment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhotoVariant {
    pub file_id: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentAttachment {
    pub file_id: String,
    pub file_name: Option<String>,
}

/// Where a forwarded message originally came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForwardOrigin {
    pub source: OriginSource,
    pub date: DateTime<Utc>,
}

/// Display identity of the forward source (channel, group, or user).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OriginSource {
    pub title: String,
    pub handle: Option<String>,
}

/// Formatting mode for plain replies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextFormat {
    Plain,
    Html,
}

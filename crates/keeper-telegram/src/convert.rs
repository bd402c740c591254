//! teloxide `Message` → `keeper-core` message model.

use teloxide::types::{Forward, ForwardedFrom, Message};

use keeper_core::{
    domain::{ChatId, UserId},
    messaging::types::{
        DocumentAttachment, ForwardOrigin, IncomingMessage, OriginSource, PhotoVariant,
    },
};

/// Title used when a forwarding chat exposes none.
const UNKNOWN_CHANNEL: &str = "Unknown Channel";

/// Messages worth saving: text, a caption, a photo, or any document.
pub fn is_relayable(msg: &Message) -> bool {
    msg.text().is_some()
        || msg.caption().is_some()
        || msg.photo().is_some()
        || msg.document().is_some()
}

/// Convert a Telegram message. `None` when there is no sender to deliver to
/// (anonymous channel posts).
pub fn incoming_message(msg: &Message) -> Option<IncomingMessage> {
    let user = msg.from()?;

    let photo = msg
        .photo()
        .map(|sizes| {
            sizes
                .iter()
                .map(|p| PhotoVariant {
                    file_id: p.file.id.clone(),
                    width: p.width,
                    height: p.height,
                })
                .collect()
        })
        .unwrap_or_default();

    let document = msg.document().map(|d| DocumentAttachment {
        file_id: d.file.id.clone(),
        file_name: d.file_name.clone(),
    });

    Some(IncomingMessage {
        chat_id: ChatId(msg.chat.id.0),
        sender: UserId(user.id.0 as i64),
        date: msg.date,
        text: msg.text().map(str::to_string),
        caption: msg.caption().map(str::to_string),
        photo,
        document,
        forward_origin: msg.forward().map(forward_origin),
    })
}

fn forward_origin(fwd: &Forward) -> ForwardOrigin {
    let source = match &fwd.from {
        ForwardedFrom::Chat(chat) => OriginSource {
            title: chat.title().unwrap_or(UNKNOWN_CHANNEL).to_string(),
            handle: chat.username().map(str::to_string),
        },
        ForwardedFrom::User(user) => OriginSource {
            title: user.full_name(),
            handle: user.username.clone(),
        },
        // Users who hide their account in forwards.
        ForwardedFrom::SenderName(name) => OriginSource {
            title: name.clone(),
            handle: None,
        },
    };

    ForwardOrigin {
        source,
        date: fwd.date,
    }
}

use std::sync::Arc;

use teloxide::prelude::*;

use keeper_core::{
    domain::ChatId,
    messaging::{port::RelayTransport, types::TextFormat},
};

use crate::router::AppState;

pub const START_TEXT: &str = "📌 Forward messages to save with source info!\n\
Media files will be saved in original format.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
}

impl Command {
    /// Recognize a bot command. Unknown commands return `None` and are saved
    /// like any other text.
    pub fn parse(text: &str) -> Option<Self> {
        if !text.trim_start().starts_with('/') {
            return None;
        }
        match command_name(text).as_str() {
            "start" | "help" => Some(Self::Start),
            _ => None,
        }
    }
}

fn command_name(text: &str) -> String {
    // Telegram may send `/cmd@botname arg1 ...`
    let first = text.split_whitespace().next().unwrap_or("");

    first
        .trim_start_matches('/')
        .split('@')
        .next()
        .unwrap_or("")
        .to_lowercase()
}

pub async fn handle_command(
    msg: Message,
    state: Arc<AppState>,
    command: Command,
) -> ResponseResult<()> {
    let chat_id = ChatId(msg.chat.id.0);
    match command {
        Command::Start => {
            if let Err(e) = state
                .transport
                .send_text(chat_id, START_TEXT, TextFormat::Html)
                .await
            {
                tracing::warn!(chat_id = chat_id.0, "failed to send start text: {e}");
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_name_drops_botname_and_args() {
        assert_eq!(command_name("/Start@keeper_bot  hello there"), "start");
        assert_eq!(command_name("  /help"), "help");
    }

    #[test]
    fn start_and_help_are_recognized() {
        assert_eq!(Command::parse("/start"), Some(Command::Start));
        assert_eq!(Command::parse("/help@keeper_bot"), Some(Command::Start));
        assert_eq!(Command::parse("  /START"), Some(Command::Start));
    }

    #[test]
    fn other_text_is_not_a_command() {
        assert_eq!(Command::parse("start"), None);
        assert_eq!(Command::parse("/unknown"), None);
        assert_eq!(Command::parse("hello /start"), None);
    }
}

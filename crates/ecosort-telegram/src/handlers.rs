//! Telegram handlers: translate teloxide updates into stage-machine events.

use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::InputFile;
use teloxide::utils::command::BotCommands;
use tracing::{debug, warn};

use crate::event::{InboundEvent, Reply};
use crate::state::BotState;

/// Bot commands that can be invoked with /.
#[derive(BotCommands, Clone, Debug)]
#[command(rename_rule = "lowercase", description = "Доступные команды:")]
pub enum Command {
    #[command(description = "начать работу с ботом")]
    Start,

    #[command(description = "показать справку")]
    Help,
}

/// Handle the /start command.
///
/// "/start" goes through the stage machine like any other message: for a new
/// user it begins registration, for a registered one it re-renders the menu.
pub async fn handle_start(bot: Bot, msg: Message, state: Arc<BotState>) -> ResponseResult<()> {
    let event = inbound_event(&msg, "/start");
    let replies = state.process_event(event).await;
    send_replies(&bot, msg.chat.id, replies).await
}

/// Handle the /help command.
pub async fn handle_help(bot: Bot, msg: Message) -> ResponseResult<()> {
    bot.send_message(msg.chat.id, Command::descriptions().to_string())
        .await?;
    Ok(())
}

/// Handle regular text messages.
pub async fn handle_message(bot: Bot, msg: Message, state: Arc<BotState>) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    // The free-text path may wait on the completion service.
    bot.send_chat_action(msg.chat.id, teloxide::types::ChatAction::Typing)
        .await?;

    let event = inbound_event(&msg, text);
    debug!(user_id = %event.user_id, "Processing message");

    let replies = state.process_event(event).await;
    send_replies(&bot, msg.chat.id, replies).await
}

/// Dispatch commands to appropriate handlers.
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    state: Arc<BotState>,
) -> ResponseResult<()> {
    match cmd {
        Command::Start => handle_start(bot, msg, state).await,
        Command::Help => handle_help(bot, msg).await,
    }
}

/// Build a stage-machine event from a teloxide message.
fn inbound_event(msg: &Message, text: &str) -> InboundEvent {
    let username = msg
        .from
        .as_ref()
        .and_then(|user| user.username.clone());

    InboundEvent {
        user_id: msg.chat.id.0,
        username,
        text: text.to_string(),
        timestamp: msg.date,
    }
}

/// Deliver replies, degrading photo replies to text when the file is absent.
async fn send_replies(bot: &Bot, chat_id: ChatId, replies: Vec<Reply>) -> ResponseResult<()> {
    for reply in replies {
        match reply {
            Reply::Text(text) => {
                bot.send_message(chat_id, text).await?;
            }
            Reply::Photo { path, caption } => {
                if path.exists() {
                    bot.send_photo(chat_id, InputFile::file(path))
                        .caption(caption)
                        .await?;
                } else {
                    warn!(path = %path.display(), "Rules image missing, sending caption only");
                    bot.send_message(chat_id, caption).await?;
                }
            }
        }
    }
    Ok(())
}

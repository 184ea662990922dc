//! Polling bot wrapper: dispatcher wiring and startup.

use std::sync::Arc;

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use tracing::{info, warn};

use ecosort_core::config::BOT_TOKEN_ENV;

use crate::error::{BotError, Result};
use crate::handlers::{handle_command, handle_message, Command};
use crate::state::BotState;

/// The Ecosort Telegram bot: a teloxide `Bot` plus the shared [`BotState`].
pub struct EcosortBot {
    bot: Bot,
    state: Arc<BotState>,
}

impl EcosortBot {
    /// Create the bot over pre-built state.
    ///
    /// Reads the token from `BOT_TOKEN`.
    pub fn new(state: Arc<BotState>) -> Result<Self> {
        let token = std::env::var(BOT_TOKEN_ENV).map_err(|_| BotError::NoToken)?;
        Ok(Self {
            bot: Bot::new(token),
            state,
        })
    }

    /// Fetch the bot's own username, verifying the token in the process.
    pub async fn get_me(&self) -> Result<String> {
        let me = self
            .bot
            .get_me()
            .await
            .map_err(|e| BotError::BotStartFailed(e.to_string()))?;
        Ok(me.username().to_string())
    }

    /// Run the polling dispatcher until Ctrl+C.
    ///
    /// Slash commands are matched before the plain-text branch; everything
    /// else lands in the default handler and is only logged.
    pub async fn start_polling(&self) -> Result<()> {
        info!("Starting Ecosort bot in polling mode");

        Dispatcher::builder(self.bot.clone(), dispatch_tree(Arc::clone(&self.state)))
            .default_handler(|update| async move {
                warn!("Unhandled update: {:?}", update);
            })
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;

        Ok(())
    }
}

fn dispatch_tree(state: Arc<BotState>) -> UpdateHandler<teloxide::RequestError> {
    let command_state = Arc::clone(&state);

    dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(move |bot: Bot, msg: Message, cmd: Command| {
                    let state = Arc::clone(&command_state);
                    async move { handle_command(bot, msg, cmd, state).await }
                }),
        )
        .branch(
            Update::filter_message()
                .filter(|msg: Message| msg.text().is_some())
                .endpoint(move |bot: Bot, msg: Message| {
                    let state = Arc::clone(&state);
                    async move { handle_message(bot, msg, state).await }
                }),
        )
}

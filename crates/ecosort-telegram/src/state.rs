//! Shared bot state and the Conversation Stage Machine.
//!
//! [`BotState`] owns the session store, the completion gateway, the material
//! classifier and the flat-file collaborators, and turns one inbound event
//! into the replies the transport should deliver. All stage transitions live
//! in one exhaustive `match` here, so the full transition table is
//! enumerable and testable without a running bot.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, warn};

use ecosort_agent::{
    ChatClient, CompletionGateway, CompletionService, KeywordClassifier, MaterialClassifier,
    ModelClassifier,
};
use ecosort_core::materials::display_name;
use ecosort_core::timefmt::parse_reminder_time;
use ecosort_core::{config, texts};
use ecosort_persistence::{FeedbackLog, MessageLog, UserRegistry};
use ecosort_session::{ReminderTime, Session, SessionStore, Stage};

use crate::error::Result;
use crate::event::{InboundEvent, Reply};

/// File names of the two static rules images under the rules directory.
const RULES_IMAGES: [&str; 2] = ["rules_containers.jpg", "rules_paper_batteries.jpg"];

/// Menu commands recognized in the free-chat stage.
///
/// Matched by exact, case-normalized equality against the fixed labels,
/// before any free-text handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuCommand {
    Statistics,
    Reminder,
    Feedback,
    Rules,
}

fn menu_command(text: &str) -> Option<MenuCommand> {
    let normalized = text.trim().to_lowercase();
    if normalized == texts::MENU_STATISTICS.to_lowercase() {
        Some(MenuCommand::Statistics)
    } else if normalized == texts::MENU_REMINDER.to_lowercase() {
        Some(MenuCommand::Reminder)
    } else if normalized == texts::MENU_FEEDBACK.to_lowercase() {
        Some(MenuCommand::Feedback)
    } else if normalized == texts::MENU_RULES.to_lowercase() {
        Some(MenuCommand::Rules)
    } else {
        None
    }
}

/// Shared state for the bot, accessible across all handlers.
pub struct BotState {
    /// Per-user sessions with per-key mutation serialization.
    store: SessionStore,
    /// Gateway to the external completion service.
    gateway: CompletionGateway,
    /// Material classifier strategy.
    classifier: Arc<dyn MaterialClassifier>,
    /// Persistent user registry (users.csv).
    registry: UserRegistry,
    /// Feedback sink (feedback.csv).
    feedback: FeedbackLog,
    /// Inbound message log (logs.csv).
    message_log: MessageLog,
    /// Directory holding the static rules images.
    rules_dir: PathBuf,
}

impl BotState {
    /// Create the state over an explicit service and classifier.
    ///
    /// The flat files are created under `data_dir` if missing.
    pub fn new(
        service: Arc<dyn CompletionService>,
        classifier: Arc<dyn MaterialClassifier>,
        data_dir: &Path,
    ) -> Result<Self> {
        Ok(Self {
            store: SessionStore::new(),
            gateway: CompletionGateway::new(service),
            classifier,
            registry: UserRegistry::open(data_dir.join("users.csv"))?,
            feedback: FeedbackLog::open(data_dir.join("feedback.csv"))?,
            message_log: MessageLog::open(data_dir.join("logs.csv"))?,
            rules_dir: data_dir.join("rules"),
        })
    }

    /// Create the state from environment variables.
    ///
    /// Builds the real [`ChatClient`] and picks the classifier strategy from
    /// `ECOSORT_CLASSIFIER` ("keyword", the default, or "model").
    pub fn from_env() -> Result<Self> {
        let client = Arc::new(ChatClient::from_env()?);
        let service: Arc<dyn CompletionService> = client;

        let strategy = std::env::var(config::CLASSIFIER_ENV).unwrap_or_default();
        let classifier: Arc<dyn MaterialClassifier> = if strategy.eq_ignore_ascii_case("model") {
            info!("Using model-strategy material classifier");
            Arc::new(ModelClassifier::new(Arc::clone(&service)))
        } else {
            Arc::new(KeywordClassifier)
        };

        config::ensure_state_dir()?;
        Self::new(service, classifier, &config::state_dir())
    }

    /// Access the session store (read paths for handlers and tests).
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Process one inbound event through the stage machine.
    ///
    /// Infallible by design: validation failures re-prompt, service failures
    /// become the fixed apology, persistence failures are logged. The user's
    /// session lock is held for the whole event, including the suspension on
    /// the completion call, so events for one user are handled strictly in
    /// order while other users proceed concurrently.
    pub async fn process_event(&self, event: InboundEvent) -> Vec<Reply> {
        if let Err(e) = self.message_log.append(
            event.timestamp,
            event.user_id,
            event.username_or_anonymous(),
            &event.text,
        ) {
            warn!(error = %e, "Failed to log inbound message");
        }

        let handle = self.store.get_or_create(event.user_id).await;
        let mut session = handle.lock().await;

        match session.stage {
            Stage::Unregistered => self.on_unregistered(&mut session, &event),
            Stage::AwaitingName => self.on_awaiting_name(&mut session, &event),
            Stage::AwaitingTime => self.on_awaiting_time(&mut session, &event.text),
            Stage::AwaitingFeedback => self.on_awaiting_feedback(&mut session, &event),
            Stage::FreeChat => self.on_free_chat(&mut session, &event).await,
        }
    }

    /// Unregistered: any message starts registration, unless the registry
    /// already knows this user; registration is idempotent per user id.
    fn on_unregistered(&self, session: &mut Session, event: &InboundEvent) -> Vec<Reply> {
        if self.registry.contains(event.user_id) {
            debug!(user_id = %event.user_id, "Returning user, skipping registration");
            // The display name is not persisted; leave it unset rather than
            // fill it with the transport username.
            session.activate();
            return vec![Reply::text(texts::WELCOME_BACK)];
        }

        session.stage = Stage::AwaitingName;
        vec![Reply::text(texts::GREETING), Reply::text(texts::NAME_PROMPT)]
    }

    /// AwaitingName: any text becomes the display name.
    fn on_awaiting_name(&self, session: &mut Session, event: &InboundEvent) -> Vec<Reply> {
        let name = event.text.trim();
        session.register(name);

        if let Err(e) = self
            .registry
            .register(event.user_id, event.username_or_anonymous())
        {
            warn!(error = %e, user_id = %event.user_id, "Failed to persist registration");
        }

        info!(user_id = %event.user_id, name = %name, "User registered");
        vec![Reply::text(texts::main_menu(Some(name)))]
    }

    /// AwaitingTime: a valid `HH:MM` sets the reminder, anything else
    /// re-prompts without a transition.
    fn on_awaiting_time(&self, session: &mut Session, text: &str) -> Vec<Reply> {
        match parse_reminder_time(text) {
            Some((hour, minute)) => {
                session.reminder_time = ReminderTime { hour, minute };
                session.stage = Stage::FreeChat;
                vec![Reply::text(texts::reminder_confirmed(hour, minute))]
            }
            None => vec![Reply::text(texts::TIME_FORMAT_ERROR)],
        }
    }

    /// AwaitingFeedback: any text is persisted and acknowledged.
    fn on_awaiting_feedback(&self, session: &mut Session, event: &InboundEvent) -> Vec<Reply> {
        if let Err(e) = self
            .feedback
            .append(event.timestamp, event.user_id, event.text.trim())
        {
            warn!(error = %e, user_id = %event.user_id, "Failed to persist feedback");
        }

        session.stage = Stage::FreeChat;
        vec![Reply::text(texts::FEEDBACK_THANKS)]
    }

    /// FreeChat: menu commands first, then the free-text reply path.
    async fn on_free_chat(&self, session: &mut Session, event: &InboundEvent) -> Vec<Reply> {
        let text = event.text.trim();

        if text == "/start" {
            return vec![Reply::text(texts::main_menu(session.display_name.as_deref()))];
        }

        match menu_command(text) {
            Some(MenuCommand::Statistics) => vec![Reply::text(render_statistics(session))],
            Some(MenuCommand::Reminder) => {
                session.stage = Stage::AwaitingTime;
                vec![Reply::text(texts::TIME_PROMPT)]
            }
            Some(MenuCommand::Feedback) => {
                session.stage = Stage::AwaitingFeedback;
                vec![Reply::text(texts::FEEDBACK_PROMPT)]
            }
            Some(MenuCommand::Rules) => self.rules_replies(),
            None => self.free_text_reply(session, text).await,
        }
    }

    /// The free-text path: classify for statistics, then ask the service.
    async fn free_text_reply(&self, session: &mut Session, text: &str) -> Vec<Reply> {
        if let Some(label) = self.classifier.classify(text).await {
            session.increment_statistic(&label);
            debug!(
                user_id = %session.user_id,
                material = %label,
                count = session.statistics[&label],
                "Material recorded"
            );
        }

        match self.gateway.complete(&mut session.history, text).await {
            Ok(reply) => vec![Reply::text(reply)],
            Err(e) => {
                warn!(user_id = %session.user_id, error = %e, "Completion failed");
                vec![Reply::text(texts::APOLOGY)]
            }
        }
    }

    /// Static educational content: two images with captions.
    fn rules_replies(&self) -> Vec<Reply> {
        RULES_IMAGES
            .iter()
            .zip(texts::RULES_CAPTIONS)
            .map(|(file, caption)| Reply::photo(self.rules_dir.join(file), caption))
            .collect()
    }
}

/// Render the statistics tally, sorted by label for stable output.
fn render_statistics(session: &Session) -> String {
    let mut labels: Vec<&String> = session.statistics.keys().collect();
    labels.sort();

    let mut text = String::from("Ваша статистика переработки:\n");
    for label in labels {
        text.push_str(&format!(
            "• {}: {}\n",
            display_name(label),
            session.statistics[label]
        ));
    }
    text.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_command_is_case_normalized() {
        assert_eq!(
            menu_command("посмотреть статистику"),
            Some(MenuCommand::Statistics)
        );
        assert_eq!(
            menu_command("  УСТАНОВИТЬ НАПОМИНАНИЕ  "),
            Some(MenuCommand::Reminder)
        );
        assert_eq!(menu_command("Обратная связь"), Some(MenuCommand::Feedback));
        assert_eq!(menu_command("Правила сортировки"), Some(MenuCommand::Rules));
    }

    #[test]
    fn test_non_menu_text_falls_through() {
        assert_eq!(menu_command("куда деть пластик?"), None);
        // Prefix match is not enough; equality only.
        assert_eq!(menu_command("посмотреть статистику за год"), None);
    }

    #[test]
    fn test_render_statistics_is_sorted_and_localized() {
        let mut session = Session::new(1);
        session.register("Алиса");
        session.increment_statistic("plastic");
        session.increment_statistic("plastic");

        let rendered = render_statistics(&session);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Ваша статистика переработки:");
        assert_eq!(lines[1], "• стекло: 0");
        assert_eq!(lines[2], "• металл: 0");
        assert_eq!(lines[3], "• пластик: 2");
    }

}

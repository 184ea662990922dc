//! User-facing bot texts and menu labels.
//!
//! The bot speaks Russian. Menu commands are matched against the labels
//! below by exact, case-normalized equality before any free-text handling.

/// Greeting for a brand-new user.
pub const GREETING: &str =
    "Привет! Я бот, который поможет вам разобраться в сортировке мусора.";

/// Registration prompt sent right after the greeting.
pub const NAME_PROMPT: &str = "Как вас зовут?";

/// Reply for a returning user who is already registered.
pub const WELCOME_BACK: &str =
    "С возвращением! Задайте свой вопрос о сортировке мусора.";

/// Prompt for the reminder time format.
pub const TIME_PROMPT: &str =
    "Во сколько напоминать о сортировке? Отправьте время в формате ЧЧ:ММ, например 09:00.";

/// Reply for a malformed or out-of-range time.
pub const TIME_FORMAT_ERROR: &str =
    "Не понимаю такое время. Отправьте его в формате ЧЧ:ММ, например 08:30.";

/// Prompt for the feedback flow.
pub const FEEDBACK_PROMPT: &str =
    "Напишите, что вы думаете о боте, одним сообщением.";

/// Acknowledgement after feedback is stored.
pub const FEEDBACK_THANKS: &str = "Спасибо за обратную связь!";

/// Fixed apology for any completion-service failure.
pub const APOLOGY: &str =
    "Произошла ошибка при обработке вашего запроса. Попробуйте позже.";

/// Leading system instruction for every conversation.
pub const SYSTEM_PROMPT: &str =
    "Ты эксперт по сортировке мусора. Помогай людям правильно сортировать отходы, \
     отвечай по-русски, кратко и по делу.";

// Menu labels, matched case-insensitively.
pub const MENU_STATISTICS: &str = "Посмотреть статистику";
pub const MENU_REMINDER: &str = "Установить напоминание";
pub const MENU_FEEDBACK: &str = "Обратная связь";
pub const MENU_RULES: &str = "Правила сортировки";

/// Captions for the two static rules images.
pub const RULES_CAPTIONS: [&str; 2] = [
    "Основные правила: пластик, стекло и металл сдаются чистыми и сухими.",
    "Бумага и картон — отдельно; батарейки только в специальные пункты приёма.",
];

/// Main menu text shown after registration.
///
/// Returning users may not have introduced themselves this process lifetime;
/// they get a name-free header.
pub fn main_menu(display_name: Option<&str>) -> String {
    let header = match display_name {
        Some(name) => format!("Приятно познакомиться, {name}!"),
        None => String::from("Рад снова вас видеть!"),
    };
    format!(
        "{header}\n\n\
         Задайте вопрос о сортировке мусора или выберите действие:\n\
         • {MENU_STATISTICS}\n\
         • {MENU_REMINDER}\n\
         • {MENU_FEEDBACK}\n\
         • {MENU_RULES}"
    )
}

/// Confirmation after a reminder time is accepted.
pub fn reminder_confirmed(hour: u8, minute: u8) -> String {
    format!("Хорошо, буду напоминать в {hour:02}:{minute:02}.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_menu_lists_all_actions() {
        let menu = main_menu(Some("Алиса"));
        assert!(menu.contains("Алиса"));
        for label in [MENU_STATISTICS, MENU_REMINDER, MENU_FEEDBACK, MENU_RULES] {
            assert!(menu.contains(label));
        }
    }

    #[test]
    fn test_main_menu_without_name_has_no_placeholder() {
        let menu = main_menu(None);
        assert!(!menu.contains("познакомиться"));
        assert!(menu.contains(MENU_STATISTICS));
    }

    #[test]
    fn test_reminder_confirmed_zero_pads() {
        assert!(reminder_confirmed(8, 5).contains("08:05"));
    }
}

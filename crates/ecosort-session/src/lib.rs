//! Per-user conversation state for Ecosort.
//!
//! A [`Session`] holds everything the bot knows about one user: registration
//! status, the current [`Stage`] of the conversation machine, the material
//! statistics tally, the reminder time and the bounded chat history submitted
//! to the completion service. Sessions are owned by a [`SessionStore`], which
//! serializes mutations per user.

pub mod history;
pub mod message;
pub mod session;
pub mod store;

pub use history::{BoundedHistory, DEFAULT_MAX_HISTORY};
pub use message::{Role, Turn};
pub use session::{ReminderTime, Session, Stage};
pub use store::{SessionHandle, SessionStore};

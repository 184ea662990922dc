//! Flat-file persistence collaborators for Ecosort.
//!
//! Three append-only CSV files back the bot's external record-keeping:
//!
//! - [`UserRegistry`]: `users.csv`, one `(user_id, username)` row per user,
//!   read to check membership.
//! - [`MessageLog`]: `logs.csv`, one row per inbound event.
//! - [`FeedbackLog`]: `feedback.csv`, one row per submitted feedback text.
//!
//! None of these are on the reply path's critical invariants: callers log
//! write failures and keep handling the message.

mod csvfile;
pub mod error;
pub mod feedback;
pub mod message_log;
pub mod registry;

pub use error::{PersistenceError, Result};
pub use feedback::FeedbackLog;
pub use message_log::MessageLog;
pub use registry::UserRegistry;

//! Shared configuration, user-facing texts and domain vocabulary for Ecosort.
//!
//! This crate holds the pieces every other Ecosort crate needs but that own
//! no behavior of their own: the state-directory layout, environment variable
//! names, the Russian bot texts, the recyclable-material keyword table and
//! the `HH:MM` reminder-time validator.

pub mod config;
pub mod materials;
pub mod texts;
pub mod timefmt;

pub use materials::{match_material, seed_materials, MATERIAL_VOCABULARY};
pub use timefmt::parse_reminder_time;

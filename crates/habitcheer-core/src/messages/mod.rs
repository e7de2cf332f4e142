//! Motivational message selection.
//!
//! The free functions here use the local system date and the default seed
//! format. Use [`MessageSelector`] to inject a clock or a different format.

pub mod catalog;
pub mod progress;
pub mod selector;
pub mod streak;

pub use catalog::{MessageCategory, CELEBRATION_MESSAGES, ONBOARDING_MESSAGE};
pub use progress::{classify, completion_percentage, date_seed, DEFAULT_DATE_FORMAT};
pub use selector::{celebration_message_with, MessageSelector, ProgressReport};
pub use streak::{streak_message, StreakTier};

/// Progress message for today, stable for the rest of the day.
pub fn progress_message(completed: u32, total: u32) -> &'static str {
    MessageSelector::new().progress_message(completed, total)
}

/// Random celebration message.
pub fn celebration_message() -> &'static str {
    celebration_message_with(&mut rand::thread_rng())
}

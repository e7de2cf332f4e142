//! Fixed message catalog.
//!
//! Every list here is non-empty; selection indexes with `% len`.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Shown when the user has no habits yet.
pub const ONBOARDING_MESSAGE: &str = "Create your first habit to get started.";

/// Progress-based message category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageCategory {
    /// Nothing completed yet
    Zero,
    /// Under half done
    Partial,
    /// At least half done, not finished
    AlmostDone,
    /// Everything done (or more)
    Complete,
}

impl MessageCategory {
    pub const ALL: [MessageCategory; 4] = [
        MessageCategory::Zero,
        MessageCategory::Partial,
        MessageCategory::AlmostDone,
        MessageCategory::Complete,
    ];

    /// Catalog name, as used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageCategory::Zero => "zero",
            MessageCategory::Partial => "partial",
            MessageCategory::AlmostDone => "almostDone",
            MessageCategory::Complete => "complete",
        }
    }

    /// Ordered messages for this category.
    pub fn messages(&self) -> &'static [&'static str] {
        match self {
            MessageCategory::Zero => ZERO_MESSAGES,
            MessageCategory::Partial => PARTIAL_MESSAGES,
            MessageCategory::AlmostDone => ALMOST_DONE_MESSAGES,
            MessageCategory::Complete => COMPLETE_MESSAGES,
        }
    }
}

impl std::fmt::Display for MessageCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const ZERO_MESSAGES: &[&str] = &[
    "Every journey starts with a single step. Let's go!",
    "A fresh day, a fresh start. Pick one habit and begin.",
    "Nothing checked off yet, and that's fine. Start small.",
    "Today is yours. Make the first move.",
];

const PARTIAL_MESSAGES: &[&str] = &[
    "Good start! Keep the momentum going.",
    "You're on your way. One habit at a time.",
    "Progress is progress. Keep building.",
    "Nice work so far. Don't stop now.",
];

const ALMOST_DONE_MESSAGES: &[&str] = &[
    "More than halfway there! Finish strong.",
    "So close. Just a little more!",
    "Great work so far. The finish line is in sight.",
    "You're in the home stretch. Keep pushing!",
];

const COMPLETE_MESSAGES: &[&str] = &[
    "All habits done! You crushed it today.",
    "Perfect day! Every habit completed.",
    "100% complete. Be proud of yourself!",
    "Everything checked off. Enjoy the rest of your day!",
];

/// Celebration messages. Order carries no meaning.
pub const CELEBRATION_MESSAGES: &[&str] = &[
    "Amazing work!",
    "You did it!",
    "Habit complete!",
    "Keep it up!",
    "Another one done!",
    "You're on fire!",
    "Nailed it!",
];

/// Check that no category is empty.
pub fn validate() -> Result<(), ValidationError> {
    for category in MessageCategory::ALL {
        if category.messages().is_empty() {
            return Err(ValidationError::EmptyCategory(category.as_str().to_string()));
        }
    }
    if CELEBRATION_MESSAGES.is_empty() {
        return Err(ValidationError::EmptyCategory("celebration".to_string()));
    }
    Ok(())
}

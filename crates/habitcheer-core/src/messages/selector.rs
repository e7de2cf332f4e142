//! Message selection.
//!
//! [`MessageSelector`] picks progress messages with a per-day seed and
//! celebration messages from an injected random source. Streak messages need
//! neither and are forwarded to [`super::streak`].

use std::borrow::Cow;

use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::catalog::{MessageCategory, CELEBRATION_MESSAGES, ONBOARDING_MESSAGE};
use super::progress::{classify, completion_percentage, date_seed, render_date, DEFAULT_DATE_FORMAT};
use super::streak::streak_message;
use crate::clock::{Clock, SystemClock};
use crate::error::ValidationError;

/// Selection result with the intermediate values, for display and JSON output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressReport {
    pub completed: u32,
    pub total: u32,
    /// `None` when `total == 0`
    pub percentage: Option<f64>,
    /// `None` when the onboarding message was returned
    pub category: Option<MessageCategory>,
    pub date: NaiveDate,
    pub message: String,
}

/// Picks messages from the fixed catalog.
#[derive(Debug, Clone)]
pub struct MessageSelector<C = SystemClock> {
    clock: C,
    date_format: String,
}

impl MessageSelector<SystemClock> {
    /// Selector using the local system date and the default date format.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for MessageSelector<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> MessageSelector<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }

    /// Use a different strftime pattern for the day seed.
    ///
    /// # Errors
    ///
    /// Returns an error if chrono cannot render dates with `format`.
    pub fn with_date_format(mut self, format: impl Into<String>) -> Result<Self, ValidationError> {
        let format = format.into();
        render_date(self.clock.today(), &format)?;
        self.date_format = format;
        Ok(self)
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Message for `completed` out of `total` habits done today.
    ///
    /// Repeated calls on the same calendar day within the same bucket return
    /// the same string.
    pub fn progress_message(&self, completed: u32, total: u32) -> &'static str {
        self.progress_message_on(self.clock.today(), completed, total)
    }

    fn progress_message_on(&self, date: NaiveDate, completed: u32, total: u32) -> &'static str {
        let Some(category) = classify(completed, total) else {
            tracing::debug!(completed, "no habits configured, returning onboarding message");
            return ONBOARDING_MESSAGE;
        };

        let messages = category.messages();
        // date_format only holds patterns accepted by with_date_format
        let seed = date_seed(date, &self.date_format).unwrap_or_default();
        let index = seed as usize % messages.len();
        tracing::debug!(%date, %category, seed, index, "selected progress message");
        messages[index]
    }

    /// Same as [`Self::progress_message`] with the intermediate values attached.
    pub fn describe_progress(&self, completed: u32, total: u32) -> ProgressReport {
        let date = self.clock.today();
        ProgressReport {
            completed,
            total,
            percentage: completion_percentage(completed, total),
            category: classify(completed, total),
            date,
            message: self.progress_message_on(date, completed, total).to_string(),
        }
    }

    /// Random celebration message from the thread-local generator.
    pub fn celebration_message(&self) -> &'static str {
        self.celebration_message_with(&mut rand::thread_rng())
    }

    /// Celebration message drawn from `rng`.
    pub fn celebration_message_with<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        celebration_message_with(rng)
    }

    pub fn streak_message(&self, streak: u32) -> Cow<'static, str> {
        streak_message(streak)
    }
}

/// Uniform pick from the celebration set using `rng`.
pub fn celebration_message_with<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    CELEBRATION_MESSAGES
        .choose(rng)
        .copied()
        .unwrap_or(CELEBRATION_MESSAGES[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    fn selector_on(y: i32, m: u32, d: u32) -> MessageSelector<FixedClock> {
        MessageSelector::with_clock(FixedClock::new(NaiveDate::from_ymd_opt(y, m, d).unwrap()))
    }

    #[test]
    fn test_zero_total_returns_onboarding() {
        let selector = selector_on(2026, 10, 19);
        assert_eq!(selector.progress_message(0, 0), ONBOARDING_MESSAGE);
        assert_eq!(selector.progress_message(7, 0), ONBOARDING_MESSAGE);
    }

    #[test]
    fn test_message_comes_from_bucket() {
        let selector = selector_on(2026, 10, 19);
        let cases = [
            (0, 10, MessageCategory::Zero),
            (4, 10, MessageCategory::Partial),
            (5, 10, MessageCategory::AlmostDone),
            (10, 10, MessageCategory::Complete),
            (15, 10, MessageCategory::Complete),
        ];
        for (completed, total, category) in cases {
            let message = selector.progress_message(completed, total);
            assert!(
                category.messages().contains(&message),
                "{completed}/{total} gave '{message}', expected a {category} message"
            );
        }
    }

    #[test]
    fn test_same_day_is_stable() {
        let selector = selector_on(2026, 3, 7);
        let first = selector.progress_message(2, 8);
        for _ in 0..20 {
            assert_eq!(selector.progress_message(2, 8), first);
        }
        // same bucket, different ratio
        assert_eq!(selector.progress_message(1, 8), first);
    }

    #[test]
    fn test_index_is_seed_mod_len() {
        let selector = selector_on(2026, 10, 19);
        let seed = date_seed(selector.today(), DEFAULT_DATE_FORMAT).unwrap() as usize;
        for category in MessageCategory::ALL {
            let messages = category.messages();
            let (completed, total) = match category {
                MessageCategory::Zero => (0, 4),
                MessageCategory::Partial => (1, 4),
                MessageCategory::AlmostDone => (3, 4),
                MessageCategory::Complete => (4, 4),
            };
            assert_eq!(
                selector.progress_message(completed, total),
                messages[seed % messages.len()]
            );
        }
    }

    #[test]
    fn test_message_changes_across_days() {
        let messages: std::collections::HashSet<_> = (1..=28)
            .map(|day| selector_on(2026, 2, day).progress_message(1, 3))
            .collect();
        assert!(messages.len() > 1);
    }

    #[test]
    fn test_custom_date_format() {
        let selector = selector_on(2026, 10, 19).with_date_format("%Y-%m-%d").unwrap();
        assert_eq!(selector.date_format(), "%Y-%m-%d");
        let seed = date_seed(selector.today(), "%Y-%m-%d").unwrap() as usize;
        let messages = MessageCategory::Partial.messages();
        assert_eq!(selector.progress_message(1, 3), messages[seed % messages.len()]);
    }

    #[test]
    fn test_invalid_date_format_rejected() {
        assert!(selector_on(2026, 1, 1).with_date_format("%Q").is_err());
        assert!(selector_on(2026, 1, 1).with_date_format("").is_err());
    }

    #[test]
    fn test_describe_progress() {
        let selector = selector_on(2026, 10, 19);
        let report = selector.describe_progress(3, 4);
        assert_eq!(report.percentage, Some(75.0));
        assert_eq!(report.category, Some(MessageCategory::AlmostDone));
        assert_eq!(report.message, selector.progress_message(3, 4));

        let empty = selector.describe_progress(0, 0);
        assert_eq!(empty.percentage, None);
        assert_eq!(empty.category, None);
        assert_eq!(empty.message, ONBOARDING_MESSAGE);
    }

    #[test]
    fn test_celebration_stays_in_set() {
        let selector = MessageSelector::new();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            let message = selector.celebration_message();
            assert!(CELEBRATION_MESSAGES.contains(&message));
            seen.insert(message);
        }
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_seeded_celebration_is_reproducible() {
        let mut a = Pcg64::seed_from_u64(42);
        let mut b = Pcg64::seed_from_u64(42);
        for _ in 0..50 {
            assert_eq!(celebration_message_with(&mut a), celebration_message_with(&mut b));
        }
    }

    #[test]
    fn test_selector_celebration_uses_given_rng() {
        let selector = selector_on(2026, 10, 19);
        let mut a = Pcg64::seed_from_u64(7);
        let mut b = Pcg64::seed_from_u64(7);
        for _ in 0..50 {
            let message = selector.celebration_message_with(&mut a);
            assert!(CELEBRATION_MESSAGES.contains(&message));
            assert_eq!(message, celebration_message_with(&mut b));
        }
    }

    #[test]
    fn test_streak_forwarding() {
        let selector = selector_on(2026, 10, 19);
        assert_eq!(selector.streak_message(0), "Start your streak today.");
    }
}

//! Streak tiers. Pure function of the streak count.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Streak length tier, in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakTier {
    /// 0 days
    None,
    /// Exactly 1 day
    First,
    /// 2-6 days
    Building,
    /// 7-29 days
    Strong,
    /// 30-99 days
    Unstoppable,
    /// 100+ days
    Legendary,
}

impl StreakTier {
    pub fn for_streak(streak: u32) -> Self {
        match streak {
            0 => StreakTier::None,
            1 => StreakTier::First,
            2..=6 => StreakTier::Building,
            7..=29 => StreakTier::Strong,
            30..=99 => StreakTier::Unstoppable,
            _ => StreakTier::Legendary,
        }
    }

    /// Message for this tier. Middle tiers embed the streak count.
    pub fn message(&self, streak: u32) -> Cow<'static, str> {
        match self {
            StreakTier::None => Cow::Borrowed("Start your streak today."),
            StreakTier::First => Cow::Borrowed("Day 1. The beginning of something great."),
            StreakTier::Building => Cow::Owned(format!("{streak} days in a row. Keep it going!")),
            StreakTier::Strong => {
                Cow::Owned(format!("{streak} days strong. This is becoming a habit."))
            }
            StreakTier::Unstoppable => Cow::Owned(format!("{streak} days. You're unstoppable!")),
            StreakTier::Legendary => {
                Cow::Borrowed("Legendary streak! This habit is part of who you are now.")
            }
        }
    }
}

/// Message for a streak of `streak` consecutive days.
pub fn streak_message(streak: u32) -> Cow<'static, str> {
    StreakTier::for_streak(streak).message(streak)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_tiers() {
        assert_eq!(streak_message(0), "Start your streak today.");
        assert_eq!(streak_message(1), "Day 1. The beginning of something great.");
        assert_eq!(
            streak_message(150),
            "Legendary streak! This habit is part of who you are now."
        );
        assert_eq!(streak_message(100), streak_message(u32::MAX));
    }

    #[test]
    fn test_templated_tiers_embed_count() {
        assert!(streak_message(5).contains("5 days"));
        assert!(streak_message(12).contains("12 days"));
        let unstoppable = streak_message(45);
        assert!(unstoppable.contains("45 days"));
        assert!(unstoppable.contains("unstoppable"));
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(StreakTier::for_streak(2), StreakTier::Building);
        assert_eq!(StreakTier::for_streak(6), StreakTier::Building);
        assert_eq!(StreakTier::for_streak(7), StreakTier::Strong);
        assert_eq!(StreakTier::for_streak(29), StreakTier::Strong);
        assert_eq!(StreakTier::for_streak(30), StreakTier::Unstoppable);
        assert_eq!(StreakTier::for_streak(99), StreakTier::Unstoppable);
        assert_eq!(StreakTier::for_streak(100), StreakTier::Legendary);
    }

    #[test]
    fn test_tiers_are_monotonic() {
        let mut last = StreakTier::None;
        for streak in 0..=200 {
            let tier = StreakTier::for_streak(streak);
            assert!(tier >= last, "tier went backwards at {streak}");
            last = tier;
        }
    }

    #[test]
    fn test_fixed_tiers_do_not_allocate() {
        assert!(matches!(streak_message(0), Cow::Borrowed(_)));
        assert!(matches!(streak_message(1), Cow::Borrowed(_)));
        assert!(matches!(streak_message(500), Cow::Borrowed(_)));
    }
}

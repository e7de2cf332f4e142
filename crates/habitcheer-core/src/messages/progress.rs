//! Progress bucketing and the per-day message seed.

use std::fmt::Write as _;

use chrono::NaiveDate;

use super::catalog::MessageCategory;
use crate::error::ValidationError;

/// Default date rendering used for seeding, e.g. `Mon Oct 19 2026`.
pub const DEFAULT_DATE_FORMAT: &str = "%a %b %d %Y";

/// Completion as a percentage. `None` when there is nothing to complete.
///
/// Values above 100 are kept as-is (extra reps count as over-completion).
pub fn completion_percentage(completed: u32, total: u32) -> Option<f64> {
    if total == 0 {
        return None;
    }
    Some(f64::from(completed) / f64::from(total) * 100.0)
}

impl MessageCategory {
    /// Bucket a percentage. Checks run in order so 0 never lands in `Partial`.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage == 0.0 {
            MessageCategory::Zero
        } else if percentage < 50.0 {
            MessageCategory::Partial
        } else if percentage < 100.0 {
            MessageCategory::AlmostDone
        } else {
            MessageCategory::Complete
        }
    }
}

/// Bucket for a `completed / total` pair, or `None` when `total == 0`.
pub fn classify(completed: u32, total: u32) -> Option<MessageCategory> {
    completion_percentage(completed, total).map(MessageCategory::from_percentage)
}

/// Render `date` with a strftime pattern, rejecting patterns chrono cannot format.
pub fn render_date(date: NaiveDate, format: &str) -> Result<String, ValidationError> {
    if format.is_empty() {
        return Err(ValidationError::InvalidDateFormat {
            format: format.to_string(),
            message: "format is empty".to_string(),
        });
    }

    let mut rendered = String::new();
    write!(rendered, "{}", date.format(format)).map_err(|_| {
        ValidationError::InvalidDateFormat {
            format: format.to_string(),
            message: "unsupported strftime specifier".to_string(),
        }
    })?;
    Ok(rendered)
}

/// Sum of the character codes of the rendered date.
///
/// Stable for a given day and format. This is a checksum, not a hash: nearby
/// dates collide often and the distribution is far from uniform.
pub fn date_seed(date: NaiveDate, format: &str) -> Result<u32, ValidationError> {
    let rendered = render_date(date, format)?;
    Ok(seed_from_str(&rendered))
}

pub(crate) fn seed_from_str(s: &str) -> u32 {
    s.chars().map(u32::from).fold(0u32, u32::wrapping_add)
}

//! # Habitcheer Core Library
//!
//! Picks short motivational messages for a habit tracker. Callers compute
//! `completed`, `total` and `streak` from their own storage; this crate only
//! maps those numbers to text.
//!
//! ## Key Components
//!
//! - [`MessageSelector`]: progress, celebration and streak messages
//! - [`Clock`]: source of "today" for the per-day progress seed
//! - [`Config`]: TOML-backed user preferences

pub mod clock;
pub mod error;
pub mod messages;
pub mod storage;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use messages::{
    celebration_message, progress_message, streak_message, MessageCategory, MessageSelector,
    ProgressReport, StreakTier,
};
pub use storage::Config;

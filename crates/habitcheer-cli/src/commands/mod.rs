pub mod catalog;
pub mod celebrate;
pub mod config;
pub mod progress;
pub mod streak;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

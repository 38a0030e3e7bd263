//! Gamification progress engine and its collaborators

pub mod arena;
pub mod award;
pub mod badges;
pub mod config;
pub mod content;
pub mod fallback;
pub mod leveling;
pub mod quiz;
pub mod streak;
pub mod tracker;

pub use award::award_xp;
pub use config::EngineConfig;
pub use content::{ContentClient, QuizService};
pub use tracker::ProgressTracker;

#[cfg(test)]
mod arena_test;
#[cfg(test)]
mod award_test;
#[cfg(test)]
mod content_test;
#[cfg(test)]
mod quiz_test;

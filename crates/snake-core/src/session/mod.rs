//! Per-game session records.
//!
//! A [`SessionRecord`] is opened when a game starts and finalized exactly
//! once when the game engine reports the outcome. After finalization the
//! record is read-only apart from another explicit [`SessionRecord::finalize`].

mod mode;
mod record;

pub use mode::*;
pub use record::*;

//! # snake-core
//!
//! Player profiles and session history for the console Snake game.
//!
//! This crate provides:
//! - Session records captured at the end of each game
//! - Player profiles with configuration, best score and history
//! - File-backed profile storage keyed by player name
//! - Plain and ANSI-styled text reports
//!
//! The game loop, board engine and terminal capability detection live
//! outside this crate; they hand over final numbers and the color flag.

pub mod error;
pub mod prelude;
pub mod profile;
pub mod report;
pub mod session;
pub mod store;

pub use error::{Error, Result};
pub use profile::{Configuration, PlayerProfile};
pub use report::{ReportFormat, format_elapsed, render_profile, render_session};
pub use session::{BoardSize, GameMode, SessionRecord};
pub use store::{FORMAT_VERSION, ProfileStore, StoreConfig, StoreConfigBuilder, StoredProfile};

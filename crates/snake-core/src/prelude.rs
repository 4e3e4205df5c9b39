//! Prelude module for convenient imports
//!
//! ```ignore
//! use snake_core::prelude::*;
//! ```
//!
//! Brings the session, profile and store types into scope together with
//! the crate's `Error` and `Result`.

pub use crate::error::{Error, Result};
pub use crate::profile::{Configuration, PlayerProfile};
pub use crate::session::{BoardSize, GameMode, SessionRecord};
pub use crate::store::{ProfileStore, StoreConfig};

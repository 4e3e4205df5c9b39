//! CLI command implementations.

pub mod list;
pub mod profile;
pub mod record;

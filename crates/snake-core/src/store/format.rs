//! On-disk profile document.
//!
//! One JSON object per file:
//!
//! ```text
//! {
//!   "format_version": 1,
//!   "name": "Ada",
//!   "configuration": [10, 20, 375, 0],
//!   "best_score": 30.125,
//!   "sessions": [
//!     {
//!       "start_time": "2024-12-15T20:30:00+01:00",
//!       "end_time": "2024-12-15T20:32:05+01:00",
//!       "score": 30.125,
//!       "snake_length": 9,
//!       "speed": 375,
//!       "board": [10, 20],
//!       "won": false,
//!       "game_mode": "MODO_NORMAL"
//!     }
//!   ]
//! }
//! ```
//!
//! Unknown fields are ignored and optional fields fall back to defaults, so
//! later versions can add fields without breaking older files. Documents with
//! a `format_version` newer than [`FORMAT_VERSION`] are rejected.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::profile::{Configuration, PlayerProfile};
use crate::session::{GameMode, SessionRecord};

/// Current document version
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredProfile {
    pub format_version: u32,
    pub name: String,
    #[serde(default = "default_configuration")]
    pub configuration: [u32; 4],
    #[serde(default)]
    pub best_score: f64,
    #[serde(default)]
    pub sessions: Vec<StoredSession>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub start_time: DateTime<Local>,
    #[serde(default)]
    pub end_time: Option<DateTime<Local>>,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub snake_length: u32,
    #[serde(default)]
    pub speed: u32,
    #[serde(default)]
    pub board: [u32; 2],
    #[serde(default)]
    pub won: bool,
    #[serde(default = "default_game_mode")]
    pub game_mode: String,
}

fn default_configuration() -> [u32; 4] {
    Configuration::default().slots()
}

fn default_game_mode() -> String {
    GameMode::default().tag().to_string()
}

impl From<&SessionRecord> for StoredSession {
    fn from(record: &SessionRecord) -> Self {
        Self {
            start_time: record.start_time(),
            end_time: record.end_time(),
            score: record.score(),
            snake_length: record.snake_length(),
            speed: record.speed(),
            board: [record.board_rows(), record.board_cols()],
            won: record.won(),
            game_mode: record.game_mode().tag().to_string(),
        }
    }
}

impl From<StoredSession> for SessionRecord {
    fn from(stored: StoredSession) -> Self {
        let [rows, cols] = stored.board;
        SessionRecord::new(
            stored.start_time,
            stored.end_time,
            stored.score,
            stored.snake_length,
            stored.speed,
            rows,
            cols,
            stored.won,
            &stored.game_mode,
        )
    }
}

impl From<&PlayerProfile> for StoredProfile {
    fn from(profile: &PlayerProfile) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            name: profile.name().to_string(),
            configuration: profile.configuration().slots(),
            best_score: profile.best_score(),
            sessions: profile.sessions().iter().map(StoredSession::from).collect(),
        }
    }
}

impl StoredProfile {
    /// JSON has no encoding for NaN or infinity, so such scores would be
    /// written as `null` and fail to load.
    pub fn check_scores(&self) -> Result<()> {
        let scores = std::iter::once(self.best_score)
            .chain(self.sessions.iter().map(|s| s.score));
        for score in scores {
            if !score.is_finite() {
                return Err(Error::NonFiniteScore {
                    profile: self.name.clone(),
                    score,
                });
            }
        }
        Ok(())
    }

    /// Rebuild the in-memory profile, rejecting documents from a newer format
    pub fn into_profile(self) -> Result<PlayerProfile> {
        if self.format_version > FORMAT_VERSION {
            return Err(Error::UnsupportedFormatVersion {
                found: self.format_version,
                supported: FORMAT_VERSION,
            });
        }

        let mut profile = PlayerProfile::restored(self.name, self.best_score);
        profile.set_configuration(Configuration::from_slots(self.configuration));
        for session in self.sessions {
            profile.add_session(session.into());
        }
        Ok(profile)
    }
}

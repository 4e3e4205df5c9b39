//! Player profiles.
//!
//! A profile ties a player name to a [`Configuration`], a best score and the
//! chronological list of finished [`SessionRecord`]s. The best score is a
//! plain field: [`PlayerProfile::add_session`] never touches it, callers raise
//! it with [`PlayerProfile::set_best_score`] (or use
//! [`PlayerProfile::record_session`], which does both).

mod config;

pub use config::*;

use std::fmt;

use crate::report;
use crate::session::SessionRecord;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlayerProfile {
    name: String,
    configuration: Configuration,
    best_score: f64,
    sessions: Vec<SessionRecord>,
}

impl PlayerProfile {
    /// Fresh profile with the default configuration and no history
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Shell used while restoring from storage: only name and best score are
    /// set, configuration and sessions are filled in afterwards.
    pub fn restored(name: impl Into<String>, best_score: f64) -> Self {
        Self {
            name: name.into(),
            configuration: Configuration::UNSET,
            best_score,
            sessions: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn configuration(&self) -> Configuration {
        self.configuration
    }

    pub fn set_configuration(&mut self, configuration: Configuration) {
        self.configuration = configuration;
    }

    /// Change the board dimensions only
    pub fn set_board_size(&mut self, rows: u32, cols: u32) {
        self.configuration.set_board_size(rows, cols);
    }

    pub fn best_score(&self) -> f64 {
        self.best_score
    }

    pub fn set_best_score(&mut self, score: f64) {
        self.best_score = score;
    }

    /// Append a finished session. The best score is left as it is.
    pub fn add_session(&mut self, record: SessionRecord) {
        self.sessions.push(record);
    }

    /// Append a session and raise the best score if it was beaten.
    /// Returns true when the session set a new best.
    pub fn record_session(&mut self, record: SessionRecord) -> bool {
        let score = record.score();
        self.add_session(record);
        if score > self.best_score {
            self.best_score = score;
            true
        } else {
            false
        }
    }

    pub fn sessions(&self) -> &[SessionRecord] {
        &self.sessions
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Highest score in the session history, if any session exists
    pub fn highest_session_score(&self) -> Option<f64> {
        self.sessions.iter().map(SessionRecord::score).reduce(f64::max)
    }

    /// Profile header followed by every session report, styled according to
    /// the color flag in the configuration.
    pub fn render_profile(&self) -> String {
        report::render_profile(self, self.configuration.color_enabled())
    }
}

impl fmt::Display for PlayerProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PlayerProfile [name={}, configuration={}, best_score={}, sessions={}]",
            self.name,
            self.configuration,
            self.best_score,
            self.sessions.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn finished_session(score: f64) -> SessionRecord {
        let start = Local.with_ymd_and_hms(2024, 12, 10, 18, 0, 0).unwrap();
        let mut record = SessionRecord::started_at(start);
        record.set_snake_length(5);
        record.finalize_at(start + chrono::TimeDelta::seconds(90), score, 375, 10, 20);
        record
    }

    #[test]
    fn test_default_profile() {
        let profile = PlayerProfile::default();
        assert_eq!(profile.best_score(), 0.0);
        assert_eq!(profile.configuration().slots(), [10, 20, 375, 0]);
        assert_eq!(profile.session_count(), 0);
    }

    #[test]
    fn test_restored_profile_has_only_name_and_score() {
        let profile = PlayerProfile::restored("Ada", 17.0);
        assert_eq!(profile.name(), "Ada");
        assert_eq!(profile.best_score(), 17.0);
        assert_eq!(profile.configuration(), Configuration::UNSET);
        assert!(profile.sessions().is_empty());
    }

    #[test]
    fn test_clone_is_deep() {
        let mut original = PlayerProfile::new("Ada");
        original.add_session(finished_session(4.0));

        let mut copy = original.clone();
        copy.set_board_size(30, 40);
        copy.add_session(finished_session(9.0));
        copy.rename("Grace");

        assert_eq!(original.name(), "Ada");
        assert_eq!(original.configuration().slots(), [10, 20, 375, 0]);
        assert_eq!(original.session_count(), 1);
        assert_eq!(copy.configuration().slots(), [30, 40, 375, 0]);
        assert_eq!(copy.session_count(), 2);
    }

    #[test]
    fn test_set_configuration_copies_value() {
        let mut profile = PlayerProfile::new("Ada");
        let mut config = Configuration::new(12, 24, 200, true);
        profile.set_configuration(config);

        config.set_board_size(1, 1);
        assert_eq!(profile.configuration().slots(), [12, 24, 200, 1]);
    }

    #[test]
    fn test_set_board_size_keeps_other_slots() {
        let mut profile = PlayerProfile::new("Ada");
        profile.set_configuration(Configuration::new(10, 20, 150, true));
        profile.set_board_size(25, 50);
        assert_eq!(profile.configuration().slots(), [25, 50, 150, 1]);
    }

    #[test]
    fn test_add_session_does_not_touch_best_score() {
        let mut profile = PlayerProfile::new("Ada");
        profile.add_session(finished_session(12.5));
        profile.add_session(finished_session(30.125));

        assert_eq!(profile.best_score(), 0.0);
        assert_eq!(profile.highest_session_score(), Some(30.125));

        profile.set_best_score(30.125);
        assert_eq!(profile.best_score(), 30.125);
    }

    #[test]
    fn test_sessions_keep_insertion_order() {
        let mut profile = PlayerProfile::new("Ada");
        for score in [3.0, 1.0, 2.0] {
            profile.add_session(finished_session(score));
        }
        let scores: Vec<f64> = profile.sessions().iter().map(|s| s.score()).collect();
        assert_eq!(scores, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_record_session_raises_best_score() {
        let mut profile = PlayerProfile::new("Ada");
        assert!(profile.record_session(finished_session(10.0)));
        assert!(!profile.record_session(finished_session(4.0)));
        assert!(profile.record_session(finished_session(11.5)));

        assert_eq!(profile.best_score(), 11.5);
        assert_eq!(profile.session_count(), 3);
    }

    #[test]
    fn test_record_session_keeps_preset_best_score() {
        let mut profile = PlayerProfile::restored("Ada", 50.0);
        assert!(!profile.record_session(finished_session(20.0)));
        assert_eq!(profile.best_score(), 50.0);
    }

    #[test]
    fn test_highest_session_score_empty() {
        assert_eq!(PlayerProfile::new("Ada").highest_session_score(), None);
    }

    #[test]
    fn test_display_summary() {
        let profile = PlayerProfile::new("Ada");
        assert_eq!(
            profile.to_string(),
            "PlayerProfile [name=Ada, configuration=[10, 20, 375, 0], best_score=0, sessions=0]"
        );
    }
}

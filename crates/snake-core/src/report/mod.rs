//! Text reports for sessions and profiles.
//!
//! Both reports are built from the same [`ReportFormat`] templates, so the
//! plain and styled variants always carry identical content.

mod elapsed;
mod format;

pub use elapsed::format_elapsed;
pub use format::{PlainText, ReportFormat, Styled, formatter};

use crate::profile::PlayerProfile;
use crate::session::SessionRecord;

pub const SESSION_HEADER: &str = "=== Session Info ===";
pub const NO_SESSIONS: &str = "No sessions played";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

/// Full labeled report for one session
pub fn render_session(record: &SessionRecord, color_enabled: bool) -> String {
    let fmt = formatter(color_enabled);
    let start = record.start_time();

    let mut out = fmt.header(SESSION_HEADER);
    out.push_str(&fmt.field("Start time", &start.format(TIMESTAMP_FORMAT)));
    out.push_str(&fmt.field(
        "Elapsed time",
        &format_elapsed(start, record.end_time()),
    ));
    out.push_str(&fmt.field("Score", &format!("{:.3}", record.score())));
    out.push_str(&fmt.field("Snake length", &record.snake_length()));
    out.push_str(&fmt.field("Speed", &record.speed()));
    out.push_str(&fmt.field("Board size", &record.board()));
    out.push_str(&fmt.field("Won", &yes_no(record.won())));
    out.push_str(&fmt.field("Game mode", &record.game_mode().description()));
    out
}

/// Profile header plus every session report, in history order
pub fn render_profile(profile: &PlayerProfile, color_enabled: bool) -> String {
    let fmt = formatter(color_enabled);

    let summary = format!(
        "Player profile:\nName: {}\nBest score: {:.3}",
        profile.name(),
        profile.best_score()
    );
    let mut out = fmt.block(&summary);

    if profile.sessions().is_empty() {
        out.push_str(NO_SESSIONS);
        out.push('\n');
        return out;
    }

    out.push_str(&format!("Sessions played: {}\n", profile.session_count()));
    for session in profile.sessions() {
        out.push_str(&render_session(session, color_enabled));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Configuration;
    use crate::session::GameMode;
    use chrono::{Local, TimeDelta, TimeZone};
    use owo_colors::OwoColorize;

    const LABELS: [&str; 8] = [
        "Start time",
        "Elapsed time",
        "Score",
        "Snake length",
        "Speed",
        "Board size",
        "Won",
        "Game mode",
    ];

    fn sample_session() -> SessionRecord {
        let start = Local.with_ymd_and_hms(2024, 12, 15, 20, 30, 0).unwrap();
        let mut record = SessionRecord::started_at(start);
        record.set_snake_length(9);
        record.set_won(true);
        record.set_game_mode(GameMode::WallsPassthrough);
        record.finalize_at(start + TimeDelta::seconds(125), 30.125, 375, 10, 20);
        record
    }

    #[test]
    fn test_render_session_plain() {
        let text = render_session(&sample_session(), false);
        let expected = "\
=== Session Info ===
Start time: 2024-12-15 20:30:00
Elapsed time: 00:02:05
Score: 30.125
Snake length: 9
Speed: 375
Board size: [10, 20]
Won: Yes
Game mode: Walls passthrough mode
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_session_styled_has_same_content() {
        let record = sample_session();
        let styled = render_session(&record, true);

        let header = format!("{}", SESSION_HEADER.bold().cyan());
        assert!(styled.starts_with(&header));
        for label in LABELS {
            let marked = format!("{}", format!("{}: ", label).yellow());
            assert!(styled.contains(&marked), "label {label} not styled");
        }
        assert!(styled.contains("30.125"));
        assert!(styled.contains("Walls passthrough mode"));
        assert_eq!(styled.lines().count(), render_session(&record, false).lines().count());
    }

    #[test]
    fn test_render_score_three_decimals() {
        let mut record = SessionRecord::start();
        record.finalize(12.5, 300, 10, 20);
        assert!(render_session(&record, false).contains("Score: 12.500\n"));
    }

    #[test]
    fn test_render_unfinished_session() {
        let text = render_session(&SessionRecord::start(), false);
        assert!(text.contains("Elapsed time: in progress\n"));
        assert!(text.contains("Won: No\n"));
        assert!(text.contains("Game mode: Normal mode\n"));
    }

    #[test]
    fn test_render_profile_without_sessions() {
        let profile = PlayerProfile::new("Ada");
        let text = profile.render_profile();
        assert_eq!(
            text,
            "Player profile:\nName: Ada\nBest score: 0.000\nNo sessions played\n"
        );
    }

    #[test]
    fn test_render_profile_plain_has_no_escape_codes() {
        let mut profile = PlayerProfile::new("Ada");
        profile.add_session(sample_session());
        profile.add_session(sample_session());
        profile.set_best_score(30.125);

        let text = profile.render_profile();
        assert!(!text.contains('\x1b'));
        assert!(text.contains("Best score: 30.125\n"));
        assert!(text.contains("Sessions played: 2\n"));
        assert_eq!(text.matches(SESSION_HEADER).count(), 2);
    }

    #[test]
    fn test_render_profile_styled_marks_every_label() {
        let mut profile = PlayerProfile::new("Ada");
        profile.set_configuration(Configuration::new(10, 20, 375, true));
        profile.add_session(sample_session());

        let text = profile.render_profile();
        let summary = "Player profile:\nName: Ada\nBest score: 0.000";
        assert!(text.starts_with(&format!("{}", summary.blue())));
        for label in LABELS {
            let marked = format!("{}", format!("{}: ", label).yellow());
            assert!(text.contains(&marked), "label {label} not styled");
        }
    }
}

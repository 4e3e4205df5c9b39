//! Record a finished game into a player's history.

use anyhow::{Result, bail};
use snake_core::{PlayerProfile, ProfileStore, SessionRecord};
use tracing::info;

use crate::cli::RecordArgs;

/// Append one finished session, creating the profile on first play.
///
/// A stored profile that cannot be read is left untouched and the error is
/// returned; only a missing file starts a new profile.
pub fn run(store: &ProfileStore, args: &RecordArgs) -> Result<()> {
    if !args.score.is_finite() || args.score < 0.0 {
        bail!("Score must be a finite non-negative number, got {}", args.score);
    }

    let mut profile = match store.try_load(&args.name) {
        Ok(profile) => profile,
        Err(e) if e.is_not_found() => {
            info!("Starting new profile '{}'", args.name);
            PlayerProfile::new(args.name.as_str())
        }
        Err(e) => return Err(e.into()),
    };
    let config = profile.configuration();
    let board = config.board();

    let mut session = SessionRecord::start();
    session.set_snake_length(args.length);
    session.set_won(args.won);
    session.set_game_mode_tag(&args.mode);
    session.finalize(
        args.score,
        args.speed.unwrap_or(config.tick_interval_ms()),
        args.rows.unwrap_or(board.rows),
        args.cols.unwrap_or(board.cols),
    );

    print!("{}", session.render(config.color_enabled()));
    if profile.record_session(session) {
        println!("New best score: {:.3}", profile.best_score());
    }

    store.try_save(&profile)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_core::{Error, StoreConfig};
    use std::fs;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> ProfileStore {
        ProfileStore::new(StoreConfig::builder().base_dir(dir.path()).build())
    }

    fn record_args(name: &str, score: f64) -> RecordArgs {
        RecordArgs {
            name: name.to_string(),
            score,
            length: 4,
            speed: None,
            rows: None,
            cols: None,
            won: false,
            mode: "MODO_NORMAL".to_string(),
        }
    }

    #[test]
    fn test_record_creates_profile_on_first_play() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        run(&store, &record_args("Ada", 12.5)).unwrap();
        run(&store, &record_args("Ada", 7.0)).unwrap();

        let profile = store.try_load("Ada").unwrap();
        assert_eq!(profile.session_count(), 2);
        assert_eq!(profile.best_score(), 12.5);
        assert_eq!(profile.sessions()[0].board_rows(), 10);
        assert_eq!(profile.sessions()[0].board_cols(), 20);
        assert_eq!(profile.sessions()[0].speed(), 375);
    }

    #[test]
    fn test_record_keeps_newer_version_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let path = store.path_for("Ada").unwrap();
        let contents = r#"{"format_version": 2, "name": "Ada", "best_score": 99.0, "sessions": []}"#;
        fs::write(&path, contents).unwrap();

        let err = run(&store, &record_args("Ada", 1.0)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::UnsupportedFormatVersion { found: 2, .. })
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), contents);
    }

    #[test]
    fn test_record_keeps_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let path = store.path_for("Ada").unwrap();
        fs::write(&path, "{ not json").unwrap();

        assert!(run(&store, &record_args("Ada", 1.0)).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn test_record_rejects_non_finite_score() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        run(&store, &record_args("Ada", 5.0)).unwrap();

        for score in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN, -1.0] {
            assert!(run(&store, &record_args("Ada", score)).is_err());
        }

        let profile = store.load("Ada").expect("profile should still load");
        assert_eq!(profile.session_count(), 1);
        assert_eq!(profile.best_score(), 5.0);
    }
}

use std::fmt;

use chrono::{DateTime, Local, TimeDelta};
use tracing::{debug, warn};

use super::GameMode;
use crate::report;

/// Board shape as `[rows, cols]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoardSize {
    pub rows: u32,
    pub cols: u32,
}

impl BoardSize {
    pub fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.rows, self.cols)
    }
}

/// Data captured for one played game
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRecord {
    start_time: DateTime<Local>,
    end_time: Option<DateTime<Local>>,
    score: f64,
    snake_length: u32,
    speed: u32,
    board: BoardSize,
    won: bool,
    game_mode: GameMode,
}

impl SessionRecord {
    /// Open a record for a game starting now
    pub fn start() -> Self {
        Self::started_at(Local::now())
    }

    pub fn started_at(start_time: DateTime<Local>) -> Self {
        Self {
            start_time,
            end_time: None,
            score: 0.0,
            snake_length: 0,
            speed: 0,
            board: BoardSize::default(),
            won: false,
            game_mode: GameMode::default(),
        }
    }

    /// Build a record with every field known, e.g. when restoring history.
    /// Unknown mode tags fall back to `Normal`.
    #[allow(clippy::too_many_arguments)] // One parameter per stored field
    pub fn new(
        start_time: DateTime<Local>,
        end_time: Option<DateTime<Local>>,
        score: f64,
        snake_length: u32,
        speed: u32,
        rows: u32,
        cols: u32,
        won: bool,
        mode_tag: &str,
    ) -> Self {
        Self {
            start_time,
            end_time,
            score,
            snake_length,
            speed,
            board: BoardSize::new(rows, cols),
            won,
            game_mode: GameMode::from_tag(mode_tag),
        }
    }

    /// Close the session with the engine's final numbers, stamping the end time.
    ///
    /// Calling this on an already finalized record overwrites the previous
    /// outcome without complaint.
    pub fn finalize(&mut self, score: f64, speed: u32, rows: u32, cols: u32) {
        self.finalize_at(Local::now(), score, speed, rows, cols);
    }

    pub fn finalize_at(
        &mut self,
        end_time: DateTime<Local>,
        score: f64,
        speed: u32,
        rows: u32,
        cols: u32,
    ) {
        if let Some(previous) = self.end_time {
            debug!(%previous, "Re-finalizing session, previous outcome overwritten");
        }
        self.end_time = Some(end_time);
        self.score = score;
        self.speed = speed;
        self.board = BoardSize::new(rows, cols);
    }

    pub fn is_finalized(&self) -> bool {
        self.end_time.is_some()
    }

    fn accepts_update(&self, field: &'static str) -> bool {
        if self.is_finalized() {
            warn!(field, "Ignoring update to finalized session");
            return false;
        }
        true
    }

    /// Reset the start time to now (the engine restarts the clock on "play again")
    pub fn mark_started(&mut self) {
        if self.accepts_update("start_time") {
            self.start_time = Local::now();
        }
    }

    pub fn set_snake_length(&mut self, length: u32) {
        if self.accepts_update("snake_length") {
            self.snake_length = length;
        }
    }

    pub fn set_won(&mut self, won: bool) {
        if self.accepts_update("won") {
            self.won = won;
        }
    }

    pub fn set_game_mode(&mut self, mode: GameMode) {
        if self.accepts_update("game_mode") {
            self.game_mode = mode;
        }
    }

    /// Set the mode from a menu code; unknown codes leave the mode untouched
    pub fn set_game_mode_code(&mut self, code: i32) {
        if let Some(mode) = GameMode::from_code(code) {
            self.set_game_mode(mode);
        }
    }

    /// Set the mode from a stored tag; unknown tags select `Normal`
    pub fn set_game_mode_tag(&mut self, tag: &str) {
        self.set_game_mode(GameMode::from_tag(tag));
    }

    pub fn start_time(&self) -> DateTime<Local> {
        self.start_time
    }

    pub fn end_time(&self) -> Option<DateTime<Local>> {
        self.end_time
    }

    /// Time played, if the session has ended
    pub fn elapsed(&self) -> Option<TimeDelta> {
        self.end_time.map(|end| end - self.start_time)
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn snake_length(&self) -> u32 {
        self.snake_length
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn board(&self) -> BoardSize {
        self.board
    }

    pub fn board_rows(&self) -> u32 {
        self.board.rows
    }

    pub fn board_cols(&self) -> u32 {
        self.board.cols
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn game_mode(&self) -> GameMode {
        self.game_mode
    }

    /// Labeled report block, styled when `color_enabled` is set
    pub fn render(&self, color_enabled: bool) -> String {
        report::render_session(self, color_enabled)
    }
}

impl fmt::Display for SessionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let end = self
            .end_time
            .map(|t| t.to_rfc3339())
            .unwrap_or_else(|| "-".to_string());
        write!(
            f,
            "SessionRecord [start={}, end={}, score={}, snake_length={}, speed={}, board={}, won={}, mode={}]",
            self.start_time.to_rfc3339(),
            end,
            self.score,
            self.snake_length,
            self.speed,
            self.board,
            self.won,
            self.game_mode.description()
        )
    }
}

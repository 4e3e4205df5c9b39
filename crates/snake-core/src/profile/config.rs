use std::fmt;

use crate::session::BoardSize;

/// Per-player game configuration.
///
/// Stored as four integers in fixed order:
/// `[board_rows, board_cols, tick_interval_ms, color_capable]`.
/// The renderer indexes these slots directly, so the order and the 0/1
/// encoding of the color flag are part of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Configuration {
    slots: [u32; 4],
}

impl Configuration {
    pub const ROWS: usize = 0;
    pub const COLS: usize = 1;
    pub const TICK_INTERVAL_MS: usize = 2;
    pub const COLOR_CAPABLE: usize = 3;

    /// All-zero vector, used while a stored profile is being restored
    pub const UNSET: Self = Self { slots: [0; 4] };

    pub fn new(rows: u32, cols: u32, tick_interval_ms: u32, color_capable: bool) -> Self {
        Self {
            slots: [rows, cols, tick_interval_ms, u32::from(color_capable)],
        }
    }

    /// Take the raw vector as-is
    pub fn from_slots(slots: [u32; 4]) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> [u32; 4] {
        self.slots
    }

    pub fn rows(&self) -> u32 {
        self.slots[Self::ROWS]
    }

    pub fn cols(&self) -> u32 {
        self.slots[Self::COLS]
    }

    pub fn board(&self) -> BoardSize {
        BoardSize::new(self.rows(), self.cols())
    }

    pub fn tick_interval_ms(&self) -> u32 {
        self.slots[Self::TICK_INTERVAL_MS]
    }

    pub fn color_flag(&self) -> u32 {
        self.slots[Self::COLOR_CAPABLE]
    }

    /// Styled output only for an explicit flag of 1
    pub fn color_enabled(&self) -> bool {
        self.color_flag() == 1
    }

    /// Update slots 0 and 1, leaving tick interval and color flag alone
    pub fn set_board_size(&mut self, rows: u32, cols: u32) {
        self.slots[Self::ROWS] = rows;
        self.slots[Self::COLS] = cols;
    }

    pub fn set_tick_interval_ms(&mut self, tick_interval_ms: u32) {
        self.slots[Self::TICK_INTERVAL_MS] = tick_interval_ms;
    }

    pub fn set_color_capable(&mut self, color_capable: bool) {
        self.slots[Self::COLOR_CAPABLE] = u32::from(color_capable);
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new(10, 20, 375, false)
    }
}

impl From<[u32; 4]> for Configuration {
    fn from(slots: [u32; 4]) -> Self {
        Self::from_slots(slots)
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [rows, cols, tick, color] = self.slots;
        write!(f, "[{}, {}, {}, {}]", rows, cols, tick, color)
    }
}
